//! Interview question pool and random draws
//!
//! The pool is loaded once at process start and never mutated. Each draw
//! is a fresh uniform sample without replacement, so repeat interviews
//! get different question sets. Draws are intentionally unseeded.

use crate::utils::error::{SessionError, SessionResult};
use rand::seq::SliceRandom;
use std::fs;
use std::path::Path;

/// Built-in question bank for deployments that bring none of their own.
const DEFAULT_BANK: &[&str] = &[
    "Tell Us something about Yourself?",
    "Why are you interested in this internship, and how does it align with your career goals?",
    "What specific skills or knowledge do you hope to gain from this internship?",
    "Can you provide an example of a time when you had to work as part of a team? What was your approach to collaboration, and how did you handle any conflicts or challenges?",
    "Can you describe a project or task from your previous experience (or academic work) that you are particularly proud of? What was your role, and what did you learn from it?",
    "Describe a situation where you had to quickly learn something new or adapt to a change. How did you handle it, and what was the outcome?",
    "What motivated you to apply for this internship, and what interests you about our company or the role?",
    "What skills or strengths do you believe you bring to this internship, and how do you think they will help you succeed?",
    "How do you handle challenges or setbacks, especially when you're working on something unfamiliar or difficult?",
    "Can you tell us about your educational background and any relevant coursework or projects you have completed?",
    "What are your strengths and weaknesses, and how do you plan to address your weaknesses during this internship?",
    "How do you handle feedback and criticism, and can you give an example of how you have used feedback to improve your work?",
    "How would you approach a project or task if you were unfamiliar with the topic or required specific knowledge?",
    "What tools or software are you familiar with that are relevant to this internship role?",
    "What are your long-term career goals, and how does this internship help you achieve them?",
    "Can you give an example of a situation where you had to communicate complex information to someone with less expertise?",
    "How would you handle a situation where you were given unclear instructions or expectations for a task?",
    "What extracurricular activities or volunteer experiences have you been involved in, and how do they relate to this internship?",
    "How do you plan to balance this internship with any other commitments you may have?",
];

/// Immutable, ordered set of interview questions
#[derive(Debug, Clone)]
pub struct QuestionPool {
    questions: Vec<String>,
}

impl QuestionPool {
    pub fn new(questions: Vec<String>) -> Self {
        Self { questions }
    }

    /// The built-in bank of 19 internship questions.
    pub fn default_bank() -> Self {
        Self::new(DEFAULT_BANK.iter().map(|q| q.to_string()).collect())
    }

    /// Load a pool from a JSON array of strings.
    pub fn from_json_file(path: &Path) -> SessionResult<Self> {
        let content = fs::read_to_string(path)?;
        let questions: Vec<String> = serde_json::from_str(&content)?;
        tracing::debug!("loaded {} questions from {:?}", questions.len(), path);
        Ok(Self::new(questions))
    }

    pub fn len(&self) -> usize {
        self.questions.len()
    }

    pub fn is_empty(&self) -> bool {
        self.questions.is_empty()
    }

    /// Draw `k` distinct questions uniformly without replacement.
    ///
    /// The pool is not mutated and the returned order carries no meaning.
    pub fn draw(&self, k: usize) -> SessionResult<Vec<String>> {
        if k > self.questions.len() {
            return Err(SessionError::InsufficientPool {
                want: k,
                have: self.questions.len(),
            });
        }
        let mut rng = rand::thread_rng();
        Ok(self
            .questions
            .choose_multiple(&mut rng, k)
            .cloned()
            .collect())
    }
}

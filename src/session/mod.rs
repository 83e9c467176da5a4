//! Session facade
//!
//! Thin orchestration layer the HTTP boundary calls into. Each operation
//! maps 1:1 onto one component; there is no cross-operation state and no
//! persistent session object, so sequencing (check devices, draw
//! questions, submit media) is entirely the caller's concern.

pub mod response;

pub use response::{CommitResponse, DeviceCheckResponse, QuestionsResponse, Status};

use crate::config::SessionConfig;
use crate::probe::{DeviceCheckResult, SignalProbe};
use crate::questions::QuestionPool;
use crate::stager::{CommittedMedia, MediaKind, MediaStager, RemoteStore};
use crate::utils::error::SessionResult;
use std::sync::Arc;

/// Facade over the device probe, question pool, and media stager
pub struct SessionService {
    config: SessionConfig,
    probe: SignalProbe,
    questions: QuestionPool,
    stager: MediaStager,
}

impl SessionService {
    /// Wire the service from explicitly constructed dependencies.
    ///
    /// Fails fast when the question pool cannot cover the configured
    /// draw size or the scratch directory cannot be created.
    pub fn new(
        config: SessionConfig,
        probe: SignalProbe,
        questions: QuestionPool,
        store: Arc<dyn RemoteStore>,
    ) -> SessionResult<Self> {
        config.validate(questions.len())?;
        let stager = MediaStager::new(&config.scratch_dir, store)?;

        tracing::info!(
            "session service ready: {} questions, draw size {}, scratch at {:?}",
            questions.len(),
            config.draw_size,
            config.scratch_dir
        );

        Ok(Self {
            config,
            probe,
            questions,
            stager,
        })
    }

    /// Probe the default microphone and camera, sequentially.
    pub fn check_devices(&mut self) -> DeviceCheckResult {
        self.probe.check_devices()
    }

    /// Draw a fresh random set of questions for one interview.
    pub fn select_questions(&self) -> SessionResult<Vec<String>> {
        self.questions.draw(self.config.draw_size)
    }

    /// Stage and commit a complete recorded video.
    pub async fn commit_video(&self, bytes: &[u8]) -> SessionResult<CommittedMedia> {
        self.stager.save(MediaKind::Video, bytes).await
    }

    /// Stage and commit a complete recorded audio file.
    pub async fn commit_audio(&self, bytes: &[u8]) -> SessionResult<CommittedMedia> {
        self.stager.save(MediaKind::Audio, bytes).await
    }
}

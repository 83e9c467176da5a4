//! Service configuration
//!
//! Built once at process start and handed to [`SessionService`]; nothing
//! reloads at runtime.
//!
//! [`SessionService`]: crate::session::SessionService

use crate::probe::AudioCaptureSpec;
use crate::utils::error::{SessionError, SessionResult};
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};

/// Configuration for the interview session service
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct SessionConfig {
    /// Local scratch directory for staged media awaiting commit
    pub scratch_dir: PathBuf,

    /// Base URL of the S3-compatible remote store
    pub store_endpoint: String,

    /// Bucket holding committed interview media
    pub bucket: String,

    /// Number of questions per draw
    pub draw_size: usize,

    /// Microphone probe capture settings
    pub audio: AudioCaptureSpec,
}

impl Default for SessionConfig {
    fn default() -> Self {
        Self {
            scratch_dir: PathBuf::from("local_storage"),
            store_endpoint: "https://s3.amazonaws.com".to_string(),
            bucket: "virtualinterviewstorage".to_string(),
            draw_size: 6,
            audio: AudioCaptureSpec::default(),
        }
    }
}

impl SessionConfig {
    /// Load configuration from a JSON file.
    pub fn from_json_file(path: &Path) -> SessionResult<Self> {
        let content = fs::read_to_string(path)?;
        let config: Self = serde_json::from_str(&content)?;
        Ok(config)
    }

    /// Startup validation.
    ///
    /// A question pool smaller than the draw size is a deployment
    /// defect; it fails here, once, rather than on every request.
    pub fn validate(&self, pool_size: usize) -> SessionResult<()> {
        if self.draw_size == 0 {
            return Err(SessionError::Config(
                "draw size must be at least 1".to_string(),
            ));
        }
        if self.draw_size > pool_size {
            return Err(SessionError::InsufficientPool {
                want: self.draw_size,
                have: pool_size,
            });
        }
        if self.audio.chunk_frames == 0 || self.audio.sample_rate == 0 {
            return Err(SessionError::Config(
                "audio capture spec must have nonzero rate and chunk size".to_string(),
            ));
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_validate_against_the_default_bank() {
        let config = SessionConfig::default();
        assert_eq!(config.draw_size, 6);
        assert!(config.validate(19).is_ok());
    }

    #[test]
    fn undersized_pool_is_a_startup_error() {
        let config = SessionConfig::default();
        match config.validate(5) {
            Err(SessionError::InsufficientPool { want: 6, have: 5 }) => {}
            other => panic!("expected InsufficientPool, got {other:?}"),
        }
    }

    #[test]
    fn partial_json_falls_back_to_defaults() {
        let config: SessionConfig = serde_json::from_str(r#"{"drawSize": 4}"#).unwrap();
        assert_eq!(config.draw_size, 4);
        assert_eq!(config.bucket, "virtualinterviewstorage");
        assert_eq!(config.audio.sample_rate, 44_100);
    }
}

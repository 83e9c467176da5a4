//! Error types and handling
//!
//! Common error types used across the service. Hardware and network
//! failures are converted into structured results at component
//! boundaries; none of them may take the process down.

use crate::probe::DeviceError;
use crate::stager::RemoteStoreError;
use serde::{Deserialize, Serialize};
use std::path::PathBuf;
use thiserror::Error;

/// Service-wide error type
#[derive(Error, Debug)]
pub enum SessionError {
    /// Microphone or camera could not be opened or read. The probe
    /// normally recovers this into a `false` check result; it only
    /// surfaces here when a caller bypasses the probe facade.
    #[error("Device unavailable: {0}")]
    Device(#[from] DeviceError),

    /// The question pool cannot cover the configured draw size. A
    /// deployment defect caught at startup validation, never a
    /// per-request condition.
    #[error("Question pool has {have} questions, draw needs {want}")]
    InsufficientPool { want: usize, have: usize },

    /// Local file I/O failed: writing staged media to scratch storage,
    /// reading it back for transfer, or loading a config/question file.
    /// A failed staging write leaves no partial file under the final name.
    #[error("Local I/O failed: {0}")]
    LocalIo(#[from] std::io::Error),

    /// The remote store did not confirm the transfer. The local scratch
    /// copy is intentionally retained for manual recovery or retry.
    #[error("Remote commit of '{key}' failed, local copy retained at {retained:?}: {source}")]
    RemoteCommit {
        key: String,
        retained: PathBuf,
        #[source]
        source: RemoteStoreError,
    },

    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),

    #[error("Configuration error: {0}")]
    Config(String),
}

/// Error response for the boundary layer
#[derive(Debug, Serialize, Deserialize)]
pub struct ErrorResponse {
    pub code: String,
    pub message: String,
}

impl From<SessionError> for ErrorResponse {
    fn from(error: SessionError) -> Self {
        let code = match &error {
            SessionError::Device(_) => "DEVICE_UNAVAILABLE",
            SessionError::InsufficientPool { .. } => "INSUFFICIENT_POOL",
            SessionError::LocalIo(_) => "LOCAL_IO_ERROR",
            SessionError::RemoteCommit { .. } => "REMOTE_COMMIT_ERROR",
            SessionError::Serialization(_) => "SERIALIZATION_ERROR",
            SessionError::Config(_) => "CONFIG_ERROR",
        };

        ErrorResponse {
            code: code.to_string(),
            message: error.to_string(),
        }
    }
}

/// Result type alias using SessionError
pub type SessionResult<T> = Result<T, SessionError>;

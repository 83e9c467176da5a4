//! Boundary response shapes
//!
//! Everything a caller sees is one of these serde shapes; internal error
//! detail (paths, store URLs, device names) never crosses the boundary.

use crate::probe::DeviceCheckResult;
use serde::{Deserialize, Serialize};

/// Operation outcome as reported to the boundary
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Status {
    Success,
    Error,
}

/// Response to a device check
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DeviceCheckResponse {
    pub status: Status,

    /// Present only on failure
    #[serde(skip_serializing_if = "Option::is_none")]
    pub mic: Option<bool>,

    /// Present only on failure
    #[serde(skip_serializing_if = "Option::is_none")]
    pub camera: Option<bool>,
}

impl From<DeviceCheckResult> for DeviceCheckResponse {
    fn from(result: DeviceCheckResult) -> Self {
        if result.all_ok() {
            Self {
                status: Status::Success,
                mic: None,
                camera: None,
            }
        } else {
            Self {
                status: Status::Error,
                mic: Some(result.mic_ok),
                camera: Some(result.camera_ok),
            }
        }
    }
}

/// Response to a question draw
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct QuestionsResponse {
    pub questions: Vec<String>,
}

/// Response to a media commit
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CommitResponse {
    pub status: Status,
}

impl CommitResponse {
    pub fn success() -> Self {
        Self {
            status: Status::Success,
        }
    }

    pub fn error() -> Self {
        Self {
            status: Status::Error,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn passing_check_omits_the_booleans() {
        let response: DeviceCheckResponse = DeviceCheckResult {
            mic_ok: true,
            camera_ok: true,
        }
        .into();
        assert_eq!(
            serde_json::to_string(&response).unwrap(),
            r#"{"status":"success"}"#
        );
    }

    #[test]
    fn failing_check_reports_both_booleans() {
        let response: DeviceCheckResponse = DeviceCheckResult {
            mic_ok: false,
            camera_ok: true,
        }
        .into();
        assert_eq!(
            serde_json::to_string(&response).unwrap(),
            r#"{"status":"error","mic":false,"camera":true}"#
        );
    }

    #[test]
    fn commit_responses_serialize_flat() {
        assert_eq!(
            serde_json::to_string(&CommitResponse::success()).unwrap(),
            r#"{"status":"success"}"#
        );
        assert_eq!(
            serde_json::to_string(&CommitResponse::error()).unwrap(),
            r#"{"status":"error"}"#
        );
    }
}

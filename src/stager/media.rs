//! Media kinds, remote keys, and the staged/committed records

use chrono::{DateTime, Local};
use serde::{Deserialize, Serialize};
use std::path::PathBuf;

/// Kind of recorded interview media
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum MediaKind {
    Audio,
    Video,
}

impl MediaKind {
    pub fn extension(&self) -> &'static str {
        match self {
            MediaKind::Audio => ".wav",
            MediaKind::Video => ".mp4",
        }
    }
}

/// Remote object key for a capture: `interview_<YYYYMMDD_HHMMSS><ext>`.
///
/// Second resolution only: two captures of the same kind within one
/// wall-clock second share a key, and the later commit overwrites the
/// earlier object. Accepted limitation.
pub fn remote_key(kind: MediaKind, captured_at: DateTime<Local>) -> String {
    format!(
        "interview_{}{}",
        captured_at.format("%Y%m%d_%H%M%S"),
        kind.extension()
    )
}

/// Media written to local scratch storage, awaiting remote commit
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct StagedMedia {
    pub kind: MediaKind,

    /// Scratch file holding the complete media bytes
    pub local_path: PathBuf,

    /// Key the media will be stored under remotely
    pub remote_key: String,

    pub size_bytes: u64,
}

/// Media confirmed written to the remote store; the scratch copy is gone
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CommittedMedia {
    pub kind: MediaKind,
    pub remote_key: String,
    pub size_bytes: u64,
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;

    fn fixed_instant() -> DateTime<Local> {
        Local.with_ymd_and_hms(2026, 3, 14, 9, 26, 53).unwrap()
    }

    #[test]
    fn keys_follow_the_timestamp_format() {
        assert_eq!(
            remote_key(MediaKind::Video, fixed_instant()),
            "interview_20260314_092653.mp4"
        );
        assert_eq!(
            remote_key(MediaKind::Audio, fixed_instant()),
            "interview_20260314_092653.wav"
        );
    }

    #[test]
    fn same_second_same_kind_collides() {
        // Documented overwrite behavior, not data preservation.
        let a = remote_key(MediaKind::Video, fixed_instant());
        let b = remote_key(MediaKind::Video, fixed_instant());
        assert_eq!(a, b);
    }

    #[test]
    fn kinds_never_collide_with_each_other() {
        assert_ne!(
            remote_key(MediaKind::Audio, fixed_instant()),
            remote_key(MediaKind::Video, fixed_instant())
        );
    }
}

//! Stage-then-commit media pipeline
//!
//! Inbound media is written whole to local scratch storage, transferred
//! to the remote store, and the local copy is deleted only after the
//! store confirms the write. A failed transfer leaves the scratch file
//! in place: any file still in the scratch directory after a request
//! returns is a failed commit awaiting recovery or retry.
//!
//! This is write-ahead-then-commit, not a transaction. There is no
//! rollback of a partially failed remote write; the intermediate Local
//! state is explicit in [`StagedMedia`].

pub mod media;
pub mod store;

pub use media::{remote_key, CommittedMedia, MediaKind, StagedMedia};
pub use store::{HttpObjectStore, MemoryStore, RemoteStore, RemoteStoreError};

use crate::utils::error::{SessionError, SessionResult};
use chrono::Local;
use std::fs;
use std::io::Write;
use std::path::{Path, PathBuf};
use std::sync::Arc;
use tempfile::NamedTempFile;

/// Moves complete media files from the boundary into durable storage
pub struct MediaStager {
    scratch_dir: PathBuf,
    store: Arc<dyn RemoteStore>,
}

impl MediaStager {
    /// Create a stager writing through `scratch_dir` to `store`. The
    /// scratch directory is created if missing.
    pub fn new(scratch_dir: impl Into<PathBuf>, store: Arc<dyn RemoteStore>) -> SessionResult<Self> {
        let scratch_dir = scratch_dir.into();
        fs::create_dir_all(&scratch_dir)?;
        Ok(Self { scratch_dir, store })
    }

    pub fn scratch_dir(&self) -> &Path {
        &self.scratch_dir
    }

    /// Write the full byte stream to scratch storage.
    ///
    /// The write is atomic under the final name: bytes go to an unnamed
    /// temp file in the same directory, then a rename publishes the
    /// complete file. No partial file is ever visible under the key.
    pub fn stage(&self, kind: MediaKind, bytes: &[u8]) -> SessionResult<StagedMedia> {
        let key = remote_key(kind, Local::now());
        let local_path = self.scratch_dir.join(&key);

        let mut tmp = NamedTempFile::new_in(&self.scratch_dir)?;
        tmp.write_all(bytes)?;
        tmp.flush()?;
        tmp.persist(&local_path)
            .map_err(|e| SessionError::LocalIo(e.error))?;

        tracing::info!("staged {} bytes at {:?}", bytes.len(), local_path);

        Ok(StagedMedia {
            kind,
            local_path,
            remote_key: key,
            size_bytes: bytes.len() as u64,
        })
    }

    /// Transfer a staged file to the remote store, then delete the local
    /// copy.
    ///
    /// Deletion happens only after the store confirms the write. On
    /// transfer failure the scratch file is retained so no data is lost,
    /// and the error names the retained path. Once the store has
    /// confirmed, the commit is reported as a success even if the
    /// cleanup itself fails; the stale scratch file is only logged.
    pub async fn commit(&self, staged: StagedMedia) -> SessionResult<CommittedMedia> {
        let bytes = fs::read(&staged.local_path)?;

        match self.store.put(&staged.remote_key, &bytes).await {
            Ok(()) => {
                match fs::remove_file(&staged.local_path) {
                    Ok(()) => tracing::info!(
                        "committed {} ({} bytes), scratch copy removed",
                        staged.remote_key,
                        staged.size_bytes
                    ),
                    Err(e) => tracing::warn!(
                        "committed {}, but failed to remove scratch copy {:?}: {e}",
                        staged.remote_key,
                        staged.local_path
                    ),
                }
                Ok(CommittedMedia {
                    kind: staged.kind,
                    remote_key: staged.remote_key,
                    size_bytes: staged.size_bytes,
                })
            }
            Err(source) => {
                tracing::warn!(
                    "remote commit of {} failed, scratch copy retained at {:?}: {source}",
                    staged.remote_key,
                    staged.local_path
                );
                Err(SessionError::RemoteCommit {
                    key: staged.remote_key,
                    retained: staged.local_path,
                    source,
                })
            }
        }
    }

    /// Stage then commit in one call.
    ///
    /// At-least-once toward the remote store from the caller's retry
    /// perspective: retrying after a reported failure re-stages, and a
    /// same-second retry of the same kind overwrites the same remote key.
    pub async fn save(&self, kind: MediaKind, bytes: &[u8]) -> SessionResult<CommittedMedia> {
        let staged = self.stage(kind, bytes)?;
        self.commit(staged).await
    }
}

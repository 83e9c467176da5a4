//! Remote object store abstraction
//!
//! The durable backend is opaque to the pipeline: a flat key space with a
//! single `put` that either confirms the write or fails. Production uses
//! the HTTP client; tests and local development use the in-memory store.

use async_trait::async_trait;
use parking_lot::RwLock;
use std::collections::HashMap;
use thiserror::Error;

/// Remote store failure
#[derive(Error, Debug)]
pub enum RemoteStoreError {
    #[error("transfer failed: {0}")]
    Transfer(String),

    #[error("store rejected '{key}': {reason}")]
    Rejected { key: String, reason: String },
}

/// Durable remote object store
#[async_trait]
pub trait RemoteStore: Send + Sync {
    /// Durably write `bytes` under `key`. `Ok` means the store
    /// acknowledged the write, not merely that the bytes were sent.
    /// Writing an existing key overwrites it.
    async fn put(&self, key: &str, bytes: &[u8]) -> Result<(), RemoteStoreError>;
}

/// S3-compatible object store speaking plain HTTP PUT
pub struct HttpObjectStore {
    client: reqwest::Client,
    endpoint: String,
    bucket: String,
}

impl HttpObjectStore {
    pub fn new(endpoint: impl Into<String>, bucket: impl Into<String>) -> Self {
        Self {
            client: reqwest::Client::new(),
            endpoint: endpoint.into(),
            bucket: bucket.into(),
        }
    }

    fn object_url(&self, key: &str) -> String {
        format!("{}/{}/{}", self.endpoint.trim_end_matches('/'), self.bucket, key)
    }
}

#[async_trait]
impl RemoteStore for HttpObjectStore {
    async fn put(&self, key: &str, bytes: &[u8]) -> Result<(), RemoteStoreError> {
        let url = self.object_url(key);

        let response = self
            .client
            .put(&url)
            .body(bytes.to_vec())
            .send()
            .await
            .map_err(|e| RemoteStoreError::Transfer(e.to_string()))?;

        if !response.status().is_success() {
            return Err(RemoteStoreError::Rejected {
                key: key.to_string(),
                reason: format!("status {}", response.status()),
            });
        }

        tracing::debug!("stored {} bytes at {url}", bytes.len());
        Ok(())
    }
}

/// In-memory store for tests and storeless local development
#[derive(Default)]
pub struct MemoryStore {
    objects: RwLock<HashMap<String, Vec<u8>>>,
}

impl MemoryStore {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn get(&self, key: &str) -> Option<Vec<u8>> {
        self.objects.read().get(key).cloned()
    }

    pub fn len(&self) -> usize {
        self.objects.read().len()
    }

    pub fn is_empty(&self) -> bool {
        self.objects.read().is_empty()
    }
}

#[async_trait]
impl RemoteStore for MemoryStore {
    async fn put(&self, key: &str, bytes: &[u8]) -> Result<(), RemoteStoreError> {
        self.objects.write().insert(key.to_string(), bytes.to_vec());
        Ok(())
    }
}

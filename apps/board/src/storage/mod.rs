//! Visitor-scoped key-value storage.
//!
//! Every visitor owns a scope (a UUID carried in a cookie). Within a scope the
//! board keeps three keys: posted jobs, applications, and the selected-job
//! pointer. Backends only move strings; `VisitorStorage` owns the JSON layer.
//!
//! Writes are read-modify-write with no transaction. Two requests from the
//! same visitor racing on one key resolve as last write wins.

pub mod file;
pub mod memory;
pub mod redis;

use std::sync::Arc;

use async_trait::async_trait;
use serde::{de::DeserializeOwned, Serialize};
use thiserror::Error;
use tracing::{debug, warn};
use uuid::Uuid;

use crate::models::{parse_records, ApplicationRecord, JobRecord};

pub use self::file::FileStore;
pub use self::memory::MemoryStore;
pub use self::redis::RedisStore;

#[derive(Debug, Error)]
pub enum StorageError {
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Redis error: {0}")]
    Redis(#[from] ::redis::RedisError),

    #[error("Serialization error: {0}")]
    Serde(#[from] serde_json::Error),

    #[error("Invalid scope '{0}'")]
    InvalidScope(String),

    #[error("Unsupported storage URL '{0}'")]
    UnsupportedUrl(String),
}

/// The logical keys held in each visitor scope.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StorageKey {
    PostedJobs,
    AppliedJobs,
    SelectedJobId,
}

impl StorageKey {
    pub fn as_str(&self) -> &'static str {
        match self {
            StorageKey::PostedJobs => "postedJobs",
            StorageKey::AppliedJobs => "appliedJobs",
            StorageKey::SelectedJobId => "selectedJobId",
        }
    }
}

/// Raw string storage partitioned by scope. Implement this to add a backend.
#[async_trait]
pub trait KeyValueStore: Send + Sync {
    async fn get(&self, scope: &str, key: &str) -> Result<Option<String>, StorageError>;
    async fn set(&self, scope: &str, key: &str, value: &str) -> Result<(), StorageError>;
}

/// Opens the backend named by a storage URL:
/// `memory`, `file://<dir>`, or `redis://...` / `rediss://...`.
pub async fn connect(url: &str) -> Result<Arc<dyn KeyValueStore>, StorageError> {
    let url = url.trim();
    if url.is_empty() || url == "memory" {
        return Ok(Arc::new(MemoryStore::new()));
    }
    if let Some(dir) = url.strip_prefix("file://") {
        return Ok(Arc::new(FileStore::open(dir).await?));
    }
    if url.starts_with("redis://") || url.starts_with("rediss://") {
        return Ok(Arc::new(RedisStore::open(url).await?));
    }
    Err(StorageError::UnsupportedUrl(url.to_string()))
}

/// Typed view over one visitor's scope.
#[derive(Clone)]
pub struct VisitorStorage {
    store: Arc<dyn KeyValueStore>,
    scope: String,
}

impl VisitorStorage {
    pub fn new(store: Arc<dyn KeyValueStore>, scope: Uuid) -> Self {
        Self {
            store,
            scope: scope.to_string(),
        }
    }

    pub fn scope(&self) -> &str {
        &self.scope
    }

    /// Reads a JSON array stored under `key`. Absent keys and values that
    /// are not an array read as an empty list. Within an array, records that
    /// fail to parse are skipped one by one. Everything discarded is logged,
    /// since the next write-back of this list will not carry it.
    pub async fn load_list<T: DeserializeOwned>(
        &self,
        key: StorageKey,
    ) -> Result<Vec<T>, StorageError> {
        let Some(raw) = self.store.get(&self.scope, key.as_str()).await? else {
            return Ok(Vec::new());
        };
        match parse_records::<T>(raw.as_bytes()) {
            Ok(records) => {
                for (idx, e) in &records.skipped {
                    warn!(
                        "Discarding malformed record #{idx} of '{}' in scope {}: {e}",
                        key.as_str(),
                        self.scope
                    );
                }
                Ok(records.items)
            }
            Err(e) => {
                warn!(
                    "Discarding malformed '{}' in scope {}: {e}",
                    key.as_str(),
                    self.scope
                );
                Ok(Vec::new())
            }
        }
    }

    pub async fn save_list<T: Serialize>(
        &self,
        key: StorageKey,
        items: &[T],
    ) -> Result<(), StorageError> {
        let raw = serde_json::to_string(items)?;
        self.store.set(&self.scope, key.as_str(), &raw).await?;
        debug!(
            "Wrote {} item(s) to '{}' in scope {}",
            items.len(),
            key.as_str(),
            self.scope
        );
        Ok(())
    }

    pub async fn posted_jobs(&self) -> Result<Vec<JobRecord>, StorageError> {
        self.load_list(StorageKey::PostedJobs).await
    }

    pub async fn applications(&self) -> Result<Vec<ApplicationRecord>, StorageError> {
        self.load_list(StorageKey::AppliedJobs).await
    }

    /// The id of the job last opened from a card, if any.
    pub async fn selected_job_id(&self) -> Result<Option<String>, StorageError> {
        let raw = self
            .store
            .get(&self.scope, StorageKey::SelectedJobId.as_str())
            .await?;
        Ok(raw
            .map(|v| v.trim().to_string())
            .filter(|v| !v.is_empty()))
    }

    pub async fn select_job(&self, job_id: &str) -> Result<(), StorageError> {
        self.store
            .set(&self.scope, StorageKey::SelectedJobId.as_str(), job_id.trim())
            .await
    }
}

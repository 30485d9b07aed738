use std::collections::HashMap;

use async_trait::async_trait;
use tokio::sync::RwLock;

use super::{KeyValueStore, StorageError};

/// Process-local backend. Contents vanish on restart; used by default and in tests.
#[derive(Default)]
pub struct MemoryStore {
    entries: RwLock<HashMap<(String, String), String>>,
}

impl MemoryStore {
    pub fn new() -> Self {
        Self::default()
    }
}

#[async_trait]
impl KeyValueStore for MemoryStore {
    async fn get(&self, scope: &str, key: &str) -> Result<Option<String>, StorageError> {
        let entries = self.entries.read().await;
        Ok(entries
            .get(&(scope.to_string(), key.to_string()))
            .cloned())
    }

    async fn set(&self, scope: &str, key: &str, value: &str) -> Result<(), StorageError> {
        self.entries
            .write()
            .await
            .insert((scope.to_string(), key.to_string()), value.to_string());
        Ok(())
    }
}

use std::collections::BTreeMap;
use std::io::ErrorKind;
use std::path::{Path, PathBuf};

use async_trait::async_trait;
use tokio::sync::Mutex;
use tracing::info;

use super::{KeyValueStore, StorageError};

/// Keeps each scope as one JSON object file (`<dir>/<scope>.json`) mapping
/// keys to their stored strings.
pub struct FileStore {
    dir: PathBuf,
    // Serializes read-modify-write within this process.
    write_lock: Mutex<()>,
}

impl FileStore {
    pub async fn open(dir: impl AsRef<Path>) -> Result<Self, StorageError> {
        let dir = dir.as_ref().to_path_buf();
        tokio::fs::create_dir_all(&dir).await?;
        info!("File storage at {}", dir.display());
        Ok(Self {
            dir,
            write_lock: Mutex::new(()),
        })
    }

    fn scope_path(&self, scope: &str) -> Result<PathBuf, StorageError> {
        let valid = !scope.is_empty()
            && scope
                .chars()
                .all(|c| c.is_ascii_alphanumeric() || c == '-' || c == '_');
        if !valid {
            return Err(StorageError::InvalidScope(scope.to_string()));
        }
        Ok(self.dir.join(format!("{scope}.json")))
    }

    async fn read_scope(&self, path: &Path) -> Result<BTreeMap<String, String>, StorageError> {
        match tokio::fs::read(path).await {
            Ok(bytes) => Ok(serde_json::from_slice(&bytes)?),
            Err(e) if e.kind() == ErrorKind::NotFound => Ok(BTreeMap::new()),
            Err(e) => Err(e.into()),
        }
    }
}

#[async_trait]
impl KeyValueStore for FileStore {
    async fn get(&self, scope: &str, key: &str) -> Result<Option<String>, StorageError> {
        let path = self.scope_path(scope)?;
        let mut entries = self.read_scope(&path).await?;
        Ok(entries.remove(key))
    }

    async fn set(&self, scope: &str, key: &str, value: &str) -> Result<(), StorageError> {
        let path = self.scope_path(scope)?;
        let _guard = self.write_lock.lock().await;
        let mut entries = self.read_scope(&path).await?;
        entries.insert(key.to_string(), value.to_string());

        // Write to a sibling file first so a crash never leaves half a scope.
        let tmp = path.with_extension("json.tmp");
        tokio::fs::write(&tmp, serde_json::to_vec_pretty(&entries)?).await?;
        tokio::fs::rename(&tmp, &path).await?;
        Ok(())
    }
}

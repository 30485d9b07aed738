use async_trait::async_trait;
use redis::aio::ConnectionManager;
use redis::AsyncCommands;
use tracing::info;

use super::{KeyValueStore, StorageError};

const KEY_PREFIX: &str = "jobboard:scope:";

/// Stores each scope as a redis hash: `jobboard:scope:<scope>` → { key: value }.
///
/// Holds one managed connection for the life of the store. Calls clone the
/// handle, which shares the underlying multiplexed connection and reconnects
/// after a drop.
pub struct RedisStore {
    conn: ConnectionManager,
}

impl RedisStore {
    pub async fn open(url: &str) -> Result<Self, StorageError> {
        let client = redis::Client::open(url)?;
        let conn = ConnectionManager::new(client).await?;
        info!("Redis storage connected");
        Ok(Self { conn })
    }

    fn hash_key(scope: &str) -> String {
        format!("{KEY_PREFIX}{scope}")
    }
}

#[async_trait]
impl KeyValueStore for RedisStore {
    async fn get(&self, scope: &str, key: &str) -> Result<Option<String>, StorageError> {
        let mut conn = self.conn.clone();
        let value: Option<String> = conn.hget(Self::hash_key(scope), key).await?;
        Ok(value)
    }

    async fn set(&self, scope: &str, key: &str, value: &str) -> Result<(), StorageError> {
        let mut conn = self.conn.clone();
        conn.hset::<_, _, _, ()>(Self::hash_key(scope), key, value)
            .await?;
        Ok(())
    }
}

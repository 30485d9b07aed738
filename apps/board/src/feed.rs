//! Static job feed — the read-only job list every page merges with the
//! visitor's posted jobs.
//!
//! The source is either an `http(s)://` URL or a filesystem path. Failures are
//! reported to the caller as `FeedError`; `jobs::store::fetch_jobs` decides to
//! degrade them to an empty feed.

use std::path::PathBuf;
use std::sync::Arc;
use std::time::Duration;

use async_trait::async_trait;
use reqwest::Client;
use thiserror::Error;
use tracing::{debug, warn};

use crate::models::{parse_records, JobRecord};

#[derive(Debug, Error)]
pub enum FeedError {
    #[error("HTTP error: {0}")]
    Http(#[from] reqwest::Error),

    #[error("Feed responded with status {0}")]
    Status(u16),

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("JSON parse error: {0}")]
    Parse(#[from] serde_json::Error),
}

#[async_trait]
pub trait JobFeed: Send + Sync {
    async fn fetch(&self) -> Result<Vec<JobRecord>, FeedError>;

    /// Where the feed comes from, for logs.
    fn source(&self) -> String;
}

/// Builds the feed for a configured source string.
pub fn from_source(source: &str, timeout: Duration) -> Result<Arc<dyn JobFeed>, FeedError> {
    let source = source.trim();
    if source.starts_with("http://") || source.starts_with("https://") {
        Ok(Arc::new(HttpFeed::new(source, timeout)?))
    } else {
        Ok(Arc::new(FileFeed::new(source)))
    }
}

/// A feed body must be a JSON array. Records inside it that do not parse are
/// logged and dropped; the rest of the feed still loads.
fn parse_feed(raw: &[u8], source: &str) -> Result<Vec<JobRecord>, FeedError> {
    let records = parse_records::<JobRecord>(raw)?;
    for (idx, e) in &records.skipped {
        warn!("Skipping job #{idx} from feed {source}: {e}");
    }
    Ok(records.items)
}

pub struct HttpFeed {
    client: Client,
    url: String,
}

impl HttpFeed {
    pub fn new(url: &str, timeout: Duration) -> Result<Self, FeedError> {
        Ok(Self {
            client: Client::builder().timeout(timeout).build()?,
            url: url.to_string(),
        })
    }
}

#[async_trait]
impl JobFeed for HttpFeed {
    async fn fetch(&self) -> Result<Vec<JobRecord>, FeedError> {
        let response = self.client.get(&self.url).send().await?;
        let status = response.status();
        if !status.is_success() {
            return Err(FeedError::Status(status.as_u16()));
        }
        let body = response.bytes().await?;
        let jobs = parse_feed(&body, &self.url)?;
        debug!("Fetched {} job(s) from {}", jobs.len(), self.url);
        Ok(jobs)
    }

    fn source(&self) -> String {
        self.url.clone()
    }
}

pub struct FileFeed {
    path: PathBuf,
}

impl FileFeed {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }
}

#[async_trait]
impl JobFeed for FileFeed {
    async fn fetch(&self) -> Result<Vec<JobRecord>, FeedError> {
        let bytes = tokio::fs::read(&self.path).await?;
        let jobs = parse_feed(&bytes, &self.path.display().to_string())?;
        debug!("Read {} job(s) from {}", jobs.len(), self.path.display());
        Ok(jobs)
    }

    fn source(&self) -> String {
        self.path.display().to_string()
    }
}

/// A fixed, in-memory feed.
pub struct StaticFeed(pub Vec<JobRecord>);

#[async_trait]
impl JobFeed for StaticFeed {
    async fn fetch(&self) -> Result<Vec<JobRecord>, FeedError> {
        Ok(self.0.clone())
    }

    fn source(&self) -> String {
        "static".to_string()
    }
}

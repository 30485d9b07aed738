use std::time::Duration;

use anyhow::{Context, Result};

/// Application configuration loaded from environment variables.
/// Every setting has a default; malformed numbers fail startup.
#[derive(Debug, Clone)]
pub struct Config {
    /// Static feed: an `http(s)://` URL or a filesystem path.
    pub job_feed: String,
    /// `memory`, `file://<dir>`, or a redis URL.
    pub storage_url: String,
    pub featured_count: usize,
    pub feed_timeout: Duration,
    pub port: u16,
    pub rust_log: String,
}

impl Default for Config {
    fn default() -> Self {
        Config {
            job_feed: "data/jobs.json".to_string(),
            storage_url: "memory".to_string(),
            featured_count: 3,
            feed_timeout: Duration::from_secs(10),
            port: 8080,
            rust_log: "info".to_string(),
        }
    }
}

impl Config {
    pub fn from_env() -> Result<Self> {
        dotenvy::dotenv().ok(); // load .env if present; ignore if missing
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Result<Self> {
        let defaults = Config::default();

        Ok(Config {
            job_feed: lookup("JOB_FEED").unwrap_or(defaults.job_feed),
            storage_url: lookup("STORAGE_URL").unwrap_or(defaults.storage_url),
            featured_count: match lookup("FEATURED_COUNT") {
                Some(v) => v
                    .parse::<usize>()
                    .context("FEATURED_COUNT must be a non-negative integer")?,
                None => defaults.featured_count,
            },
            feed_timeout: match lookup("FEED_TIMEOUT_SECS") {
                Some(v) => Duration::from_secs(
                    v.parse::<u64>()
                        .context("FEED_TIMEOUT_SECS must be a whole number of seconds")?,
                ),
                None => defaults.feed_timeout,
            },
            port: lookup("PORT")
                .unwrap_or_else(|| "8080".to_string())
                .parse::<u16>()
                .context("PORT must be a valid port number")?,
            rust_log: lookup("RUST_LOG").unwrap_or(defaults.rust_log),
        })
    }
}

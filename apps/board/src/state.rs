use std::sync::Arc;

use crate::config::Config;
use crate::feed::JobFeed;
use crate::jobs::Clock;
use crate::pages::PageContext;
use crate::scope::VisitorScope;
use crate::storage::{KeyValueStore, VisitorStorage};

/// Shared application state injected into all route handlers via Axum extractors.
#[derive(Clone)]
pub struct AppState {
    pub config: Config,
    pub feed: Arc<dyn JobFeed>,
    /// Backend holding every visitor's scope.
    pub store: Arc<dyn KeyValueStore>,
    /// Clock for posting ids and application timestamps.
    pub clock: Arc<dyn Clock>,
}

impl AppState {
    pub fn storage_for(&self, scope: &VisitorScope) -> VisitorStorage {
        VisitorStorage::new(self.store.clone(), scope.0)
    }

    pub fn page_context<'a>(&'a self, storage: &'a VisitorStorage) -> PageContext<'a> {
        PageContext {
            feed: self.feed.as_ref(),
            storage,
            featured_count: self.config.featured_count,
        }
    }
}

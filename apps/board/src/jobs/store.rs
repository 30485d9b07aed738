//! Job Store Accessor — merges the static feed with the visitor's posted jobs.

use tracing::{error, warn};

use crate::feed::JobFeed;
use crate::models::{JobId, JobRecord};
use crate::storage::VisitorStorage;

/// Posted jobs without an id receive `SYNTHETIC_ID_BASE + index`, index
/// being their position within the posted list.
pub const SYNTHETIC_ID_BASE: i64 = 1000;

/// Returns the merged set: feed jobs first, then the visitor's posted jobs.
///
/// Never fails. A feed that cannot be fetched or parsed contributes nothing,
/// and so does a storage backend that cannot be read. Both are logged.
pub async fn fetch_jobs(feed: &dyn JobFeed, storage: &VisitorStorage) -> Vec<JobRecord> {
    let feed_jobs = match feed.fetch().await {
        Ok(jobs) => jobs,
        Err(e) => {
            error!("Failed to fetch job feed from {}: {e}", feed.source());
            Vec::new()
        }
    };

    let local_jobs = match storage.posted_jobs().await {
        Ok(jobs) => jobs,
        Err(e) => {
            warn!(
                "Failed to read posted jobs for scope {}: {e}",
                storage.scope()
            );
            Vec::new()
        }
    };

    merge_jobs(feed_jobs, local_jobs)
}

/// Concatenates feed and local jobs after filling in missing local ids.
pub fn merge_jobs(feed_jobs: Vec<JobRecord>, mut local_jobs: Vec<JobRecord>) -> Vec<JobRecord> {
    assign_synthetic_ids(&mut local_jobs);
    let mut merged = feed_jobs;
    merged.extend(local_jobs);
    merged
}

pub fn assign_synthetic_ids(local_jobs: &mut [JobRecord]) {
    for (idx, job) in local_jobs.iter_mut().enumerate() {
        if !job.has_id() {
            job.id = Some(JobId(SYNTHETIC_ID_BASE + idx as i64));
        }
    }
}

/// First job in `jobs` whose id matches `raw_id` as text.
pub fn find_job<'a>(jobs: &'a [JobRecord], raw_id: &str) -> Option<&'a JobRecord> {
    jobs.iter().find(|job| job.matches_id(raw_id))
}

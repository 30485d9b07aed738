//! Application & Posting Recorder.
//!
//! Both write paths read the visitor's collection, append one record, and
//! write the whole collection back.

use chrono::{DateTime, Utc};
use tracing::info;

use crate::models::{ApplicationDraft, ApplicationRecord, JobDraft, JobId, JobRecord};
use crate::storage::{StorageError, StorageKey, VisitorStorage};

/// Source of wall-clock time for ids and timestamps.
pub trait Clock: Send + Sync {
    fn now(&self) -> DateTime<Utc>;
}

pub struct SystemClock;

impl Clock for SystemClock {
    fn now(&self) -> DateTime<Utc> {
        Utc::now()
    }
}

/// Appends an employer posting and returns the stored record.
///
/// The id is the current time in milliseconds, bumped past the largest id
/// already posted so ids keep increasing if the clock steps backwards.
pub async fn post_job(
    storage: &VisitorStorage,
    draft: JobDraft,
    clock: &dyn Clock,
) -> Result<JobRecord, StorageError> {
    let mut posted = storage.posted_jobs().await?;
    let id = next_posted_id(&posted, clock.now().timestamp_millis());
    let record = draft.into_record(id);

    posted.push(record.clone());
    storage.save_list(StorageKey::PostedJobs, &posted).await?;

    info!(
        "Posted job {} '{}' in scope {}",
        id,
        record.title,
        storage.scope()
    );
    Ok(record)
}

fn next_posted_id(existing: &[JobRecord], candidate: i64) -> JobId {
    let max = existing.iter().filter_map(|job| job.id).map(|id| id.0).max();
    match max {
        Some(max) if candidate <= max => JobId(max + 1),
        _ => JobId(candidate),
    }
}

/// Appends an application for `job_id`. The job is not looked up.
pub async fn record_application(
    storage: &VisitorStorage,
    job_id: &str,
    draft: ApplicationDraft,
    clock: &dyn Clock,
) -> Result<ApplicationRecord, StorageError> {
    let mut applied = storage.applications().await?;
    let record = draft.into_record(job_id, clock.now());

    applied.push(record.clone());
    storage.save_list(StorageKey::AppliedJobs, &applied).await?;

    info!(
        "Recorded application to job {} in scope {}",
        record.job_id,
        storage.scope()
    );
    Ok(record)
}

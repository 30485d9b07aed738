//! Filter Engine.
//!
//! Title and location match by case-insensitive substring; type matches
//! exactly and is skipped when empty. All predicates must hold. Input order
//! is kept; there is no ranking.

use serde::{Deserialize, Serialize};

use crate::models::JobRecord;

/// Search form state, as submitted by the listing page.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct JobQuery {
    #[serde(default)]
    pub title: String,
    #[serde(default)]
    pub location: String,
    #[serde(rename = "type", default)]
    pub job_type: String,
}

impl JobQuery {
    pub fn is_empty(&self) -> bool {
        self.title.trim().is_empty()
            && self.location.trim().is_empty()
            && self.job_type.trim().is_empty()
    }

    pub fn apply(&self, all: &[JobRecord]) -> Vec<JobRecord> {
        filter_jobs(all, &self.title, &self.location, &self.job_type)
    }
}

pub fn filter_jobs(
    all: &[JobRecord],
    title: &str,
    location: &str,
    job_type: &str,
) -> Vec<JobRecord> {
    let title = title.trim().to_lowercase();
    let location = location.trim().to_lowercase();
    let job_type = job_type.trim();

    all.iter()
        .filter(|job| {
            let match_title = job.title.to_lowercase().contains(&title);
            let match_location = job.location.to_lowercase().contains(&location);
            let match_type = job_type.is_empty() || job.job_type.as_str() == job_type;
            match_title && match_location && match_type
        })
        .cloned()
        .collect()
}

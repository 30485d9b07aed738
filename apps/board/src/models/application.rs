use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// A candidate's application to a job.
///
/// `job_id` is a weak reference: nothing checks that the job exists when the
/// row is written, and the row survives the job disappearing.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ApplicationRecord {
    pub job_id: String,
    #[serde(default)]
    pub name: String,
    #[serde(default)]
    pub email: String,
    /// Resume filename only. File content is never stored.
    #[serde(default)]
    pub resume: String,
    pub applied_at: DateTime<Utc>,
}

/// Candidate input from the application form.
#[derive(Debug, Clone, Default)]
pub struct ApplicationDraft {
    pub name: String,
    pub email: String,
    pub resume: Option<String>,
}

impl ApplicationDraft {
    pub fn into_record(self, job_id: &str, applied_at: DateTime<Utc>) -> ApplicationRecord {
        ApplicationRecord {
            job_id: job_id.trim().to_string(),
            name: self.name.trim().to_string(),
            email: self.email.trim().to_string(),
            resume: self.resume.unwrap_or_default().trim().to_string(),
            applied_at,
        }
    }
}

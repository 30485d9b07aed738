pub mod application;
pub mod job;
pub mod records;

pub use application::{ApplicationDraft, ApplicationRecord};
pub use job::{JobDraft, JobId, JobRecord, JobType};
pub use records::{parse_records, Records};

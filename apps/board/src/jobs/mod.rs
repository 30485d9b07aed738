// Job pipeline: merge the static feed with posted jobs, filter, and record
// visitor actions. Rendering lives in `render`, page assembly in `pages`.

pub mod filter;
pub mod recorder;
pub mod store;

pub use filter::{filter_jobs, JobQuery};
pub use recorder::{post_job, record_application, Clock, SystemClock};
pub use store::{fetch_jobs, find_job, merge_jobs, SYNTHETIC_ID_BASE};

//! Activity recording and activity log queries.

pub mod recorder;
pub mod service;

pub use recorder::{ActivityEvent, ActivityRecorder};
pub use service::ActivityLogService;

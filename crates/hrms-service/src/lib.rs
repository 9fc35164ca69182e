//! # hrms-service
//!
//! Business logic for the HRMS backend. Services receive their
//! dependencies at construction time as `Arc` references; the archive and
//! activity services depend only on the storage traits from `hrms-core`.

pub mod activity;
pub mod archive;
pub mod auth;
pub mod context;
pub mod resource;

pub use activity::{ActivityEvent, ActivityLogService, ActivityRecorder};
pub use archive::{ArchiveService, BackupWriter, ModelRegistry};
pub use auth::{AuthService, LoginResult};
pub use context::RequestContext;
pub use resource::{DepartmentService, EmployeeService};

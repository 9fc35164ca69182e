//! Core type definitions used across the HRMS workspace.

pub mod activity;
pub mod model;
pub mod pagination;

pub use activity::{ActorSnapshot, AuditAction, NewActivityEntry, RequestMeta};
pub use model::ModelDescriptor;
pub use pagination::{PageRequest, PageResponse};

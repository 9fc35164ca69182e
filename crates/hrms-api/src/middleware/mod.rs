//! Axum middleware stack.

pub mod audit;
pub mod cors;
pub mod logging;

pub use audit::{AuditOutcome, AuditScope, Audited, audit_interceptor};

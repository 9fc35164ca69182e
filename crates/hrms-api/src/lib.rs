//! # hrms-api
//!
//! HTTP API layer for the HRMS backend built on Axum.
//!
//! Provides the REST endpoints for archive administration, the activity
//! log, departments, employees and sign-in, together with the audit
//! interceptor middleware, extractors, DTOs and error mapping.

pub mod app;
pub mod dto;
pub mod error;
pub mod extractors;
pub mod handlers;
pub mod middleware;
pub mod router;
pub mod state;

pub use app::build_app;
pub use state::AppState;

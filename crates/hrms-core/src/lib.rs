//! # hrms-core
//!
//! Core crate for the HRMS backend. Contains the storage traits consumed by
//! the archive and activity subsystems, configuration schemas, model
//! descriptors, pagination types, and the unified error system.
//!
//! This crate has **no** internal dependencies on other HRMS crates.

pub mod config;
pub mod error;
pub mod result;
pub mod traits;
pub mod types;

pub use error::AppError;
pub use result::AppResult;

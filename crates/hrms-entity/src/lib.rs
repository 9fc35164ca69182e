//! # hrms-entity
//!
//! Domain entity models for the HRMS backend. Database entities derive
//! `sqlx::FromRow`; the `archive` module holds the wire shapes produced by
//! the archive administration endpoints.

pub mod archive;
pub mod audit;
pub mod resource;
pub mod user;

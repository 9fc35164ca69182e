//! # hrms-database
//!
//! PostgreSQL connection management, embedded migrations and the concrete
//! storage implementations behind the `hrms-core` traits. The `memory`
//! module provides in-process implementations of the same traits for tests
//! and local tooling.

pub mod connection;
pub mod memory;
pub mod repositories;

pub use connection::DatabasePool;

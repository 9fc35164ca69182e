//! HTTP request handlers, one module per resource.

pub mod activity;
pub mod archive;
pub mod auth;
pub mod department;
pub mod employee;
pub mod health;

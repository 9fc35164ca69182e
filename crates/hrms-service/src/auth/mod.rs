//! Login and logout.

pub mod service;

pub use service::{AUTH_MODULE, AuthService, LoginResult};

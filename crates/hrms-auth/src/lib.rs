//! # hrms-auth
//!
//! Authentication primitives for the HRMS backend.
//!
//! ## Modules
//!
//! - `jwt`: signed HS256 access tokens and their validation
//! - `password`: Argon2id password hashing

pub mod jwt;
pub mod password;

pub use jwt::{AccessToken, Claims, JwtDecoder, JwtEncoder};
pub use password::PasswordHasher;

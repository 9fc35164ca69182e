//! Custom Axum extractors.

pub mod auth;
pub mod meta;
pub mod pagination;
pub mod path;

pub use auth::AuthUser;
pub use meta::ClientMeta;
pub use pagination::PaginationParams;

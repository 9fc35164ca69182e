//! Convenience result type alias for the HRMS backend.

use crate::error::AppError;

/// A specialized `Result` type for HRMS operations.
pub type AppResult<T> = Result<T, AppError>;

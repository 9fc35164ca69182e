//! Maps domain `AppError` to HTTP responses.
//!
//! `AppError` lives in `hrms-core`, so handlers return the local
//! `ApiError` wrapper and `?` converts through `From`.

use axum::Json;
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use serde::{Deserialize, Serialize};

use hrms_core::error::{AppError, ErrorKind};

/// Failure envelope returned by every endpoint.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ApiErrorResponse {
    /// Always `false`.
    pub success: bool,
    /// Human-readable message.
    pub message: String,
    /// Machine-readable error code.
    pub error: String,
}

/// Status for an error kind. Only authentication failures get their own
/// status; everything else is a server failure.
fn status_for(kind: ErrorKind) -> StatusCode {
    match kind {
        ErrorKind::Authentication => StatusCode::UNAUTHORIZED,
        _ => StatusCode::INTERNAL_SERVER_ERROR,
    }
}

/// HTTP-facing error returned by handlers and extractors.
#[derive(Debug)]
pub struct ApiError(pub AppError);

impl ApiError {
    /// Kind of the wrapped domain error.
    pub fn kind(&self) -> ErrorKind {
        self.0.kind
    }
}

impl From<AppError> for ApiError {
    fn from(err: AppError) -> Self {
        Self(err)
    }
}

impl std::fmt::Display for ApiError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        self.0.fmt(f)
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let err = self.0;
        let status = status_for(err.kind);
        match err.kind {
            ErrorKind::Database | ErrorKind::Storage | ErrorKind::Internal => {
                tracing::error!(kind = %err.kind, error = %err.message, "Request failed");
            }
            _ => tracing::debug!(kind = %err.kind, error = %err.message, "Request rejected"),
        }

        let body = ApiErrorResponse {
            success: false,
            message: err.message,
            error: err.kind.to_string(),
        };
        (status, Json(body)).into_response()
    }
}

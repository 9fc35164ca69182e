//! `AuthUser` extractor: validates the bearer token and builds the request context.

use axum::extract::FromRequestParts;
use axum::http::HeaderMap;
use axum::http::request::Parts;

use hrms_auth::{Claims, JwtDecoder};
use hrms_core::error::AppError;
use hrms_service::context::RequestContext;

use super::meta::request_meta;
use crate::error::ApiError;
use crate::state::AppState;

/// Extracted authenticated user context available in handlers.
#[derive(Debug, Clone)]
pub struct AuthUser(pub RequestContext);

impl AuthUser {
    /// Returns the inner `RequestContext`.
    pub fn context(&self) -> &RequestContext {
        &self.0
    }
}

impl std::ops::Deref for AuthUser {
    type Target = RequestContext;
    fn deref(&self) -> &Self::Target {
        &self.0
    }
}

impl FromRequestParts<AppState> for AuthUser {
    type Rejection = ApiError;

    async fn from_request_parts(
        parts: &mut Parts,
        state: &AppState,
    ) -> Result<Self, Self::Rejection> {
        let claims = authenticate(&parts.headers, &state.jwt_decoder)?;
        let meta = request_meta(parts);

        Ok(AuthUser(RequestContext::new(
            claims.user_id(),
            claims.role,
            claims.username,
            meta,
        )))
    }
}

/// Validate the `Authorization: Bearer <jwt>` header.
pub fn authenticate(headers: &HeaderMap, decoder: &JwtDecoder) -> Result<Claims, AppError> {
    let header = headers
        .get("authorization")
        .and_then(|v| v.to_str().ok())
        .ok_or_else(|| AppError::authentication("Missing Authorization header"))?;

    let token = header
        .strip_prefix("Bearer ")
        .ok_or_else(|| AppError::authentication("Invalid Authorization header format"))?;

    decoder.decode(token)
}

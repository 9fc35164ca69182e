//! Sign-in handlers.

use axum::Json;
use axum::extract::State;

use hrms_service::LoginResult;

use crate::dto::request::{LoginRequest, validate_request};
use crate::dto::response::{ApiResponse, MessageResponse};
use crate::error::ApiError;
use crate::extractors::{AuthUser, ClientMeta};
use crate::state::AppState;

/// POST /api/auth/login
pub async fn login(
    State(state): State<AppState>,
    ClientMeta(meta): ClientMeta,
    Json(req): Json<LoginRequest>,
) -> Result<Json<ApiResponse<LoginResult>>, ApiError> {
    validate_request(&req)?;
    let result = state
        .auth_service
        .login(&req.username, &req.password, meta)
        .await?;
    Ok(Json(ApiResponse::ok(result)))
}

/// POST /api/auth/logout
pub async fn logout(
    State(state): State<AppState>,
    auth: AuthUser,
) -> Json<ApiResponse<MessageResponse>> {
    state.auth_service.logout(&auth);
    Json(ApiResponse::ok(MessageResponse {
        message: "Logged out".to_string(),
    }))
}

//! Activity log query handlers. The log is read-only over HTTP.

use axum::Json;
use axum::extract::{Path, Query, State};

use hrms_core::error::AppError;
use hrms_core::types::{AuditAction, PageResponse};
use hrms_entity::audit::{ActivityLogEntry, ActivityLogFilter};

use crate::dto::request::ActivityLogQuery;
use crate::error::ApiError;
use crate::dto::response::ApiResponse;
use crate::extractors::path::parse_uuid;
use crate::extractors::{AuthUser, PaginationParams};
use crate::state::AppState;

/// GET /api/activity-logs
pub async fn list_activity(
    State(state): State<AppState>,
    _auth: AuthUser,
    Query(query): Query<ActivityLogQuery>,
    Query(params): Query<PaginationParams>,
) -> Result<Json<ApiResponse<PageResponse<ActivityLogEntry>>>, ApiError> {
    let filter = build_filter(query)?;
    let page = state
        .activity_service
        .search(&filter, params.into_page_request())
        .await?;
    Ok(Json(ApiResponse::ok(page)))
}

/// GET /api/activity-logs/{id}
pub async fn get_activity(
    State(state): State<AppState>,
    _auth: AuthUser,
    Path(id): Path<String>,
) -> Result<Json<ApiResponse<ActivityLogEntry>>, ApiError> {
    let entry = state.activity_service.get(parse_uuid(&id)?).await?;
    Ok(Json(ApiResponse::ok(entry)))
}

fn build_filter(query: ActivityLogQuery) -> Result<ActivityLogFilter, AppError> {
    let actor_id = query.actor_id.as_deref().map(parse_uuid).transpose()?;
    let action = query
        .action
        .as_deref()
        .map(str::parse::<AuditAction>)
        .transpose()?;

    Ok(ActivityLogFilter {
        actor_id,
        action,
        module: query.module.filter(|m| !m.is_empty()),
        record_id: query.record_id.filter(|r| !r.is_empty()),
    })
}

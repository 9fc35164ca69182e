//! Department handlers. Writes are recorded by the audit interceptor.

use axum::Json;
use axum::extract::{Path, Query, State};

use hrms_core::types::PageResponse;
use hrms_entity::resource::Department;

use crate::dto::request::{
    CreateDepartmentRequest, DepartmentQuery, UpdateDepartmentRequest, validate_request,
};
use crate::dto::response::ApiResponse;
use crate::error::ApiError;
use crate::extractors::path::parse_uuid;
use crate::extractors::{AuthUser, PaginationParams};
use crate::middleware::Audited;
use crate::state::AppState;

/// GET /api/departments
pub async fn list_departments(
    State(state): State<AppState>,
    _auth: AuthUser,
    Query(query): Query<DepartmentQuery>,
    Query(params): Query<PaginationParams>,
) -> Result<Json<ApiResponse<PageResponse<Department>>>, ApiError> {
    let page = state
        .department_service
        .list(query.search.as_deref(), params.into_page_request())
        .await?;
    Ok(Json(ApiResponse::ok(page)))
}

/// GET /api/departments/{id}
pub async fn get_department(
    State(state): State<AppState>,
    _auth: AuthUser,
    Path(id): Path<String>,
) -> Result<Json<ApiResponse<Department>>, ApiError> {
    let department = state.department_service.get(parse_uuid(&id)?).await?;
    Ok(Json(ApiResponse::ok(department)))
}

/// POST /api/departments
pub async fn create_department(
    State(state): State<AppState>,
    _auth: AuthUser,
    Json(req): Json<CreateDepartmentRequest>,
) -> Result<Audited<Department>, ApiError> {
    validate_request(&req)?;
    let department = state.department_service.create(req.into()).await?;
    Ok(Audited::created(department).message("Department created"))
}

/// PUT /api/departments/{id}
pub async fn update_department(
    State(state): State<AppState>,
    _auth: AuthUser,
    Path(id): Path<String>,
    Json(req): Json<UpdateDepartmentRequest>,
) -> Result<Audited<Department>, ApiError> {
    validate_request(&req)?;
    let (before, after) = state
        .department_service
        .update(parse_uuid(&id)?, req.into())
        .await?;
    Ok(Audited::new(after).previous(&before).message("Department updated"))
}

/// DELETE /api/departments/{id}
pub async fn delete_department(
    State(state): State<AppState>,
    _auth: AuthUser,
    Path(id): Path<String>,
) -> Result<Audited<Department>, ApiError> {
    let before = state.department_service.archive(parse_uuid(&id)?).await?;
    Ok(Audited::new(before.clone())
        .previous(&before)
        .message("Department archived"))
}

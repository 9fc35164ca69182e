//! Employee handlers. The service records activity itself.

use axum::Json;
use axum::extract::{Path, Query, State};
use axum::http::StatusCode;

use hrms_core::types::PageResponse;
use hrms_entity::resource::Employee;

use crate::dto::request::{
    CreateEmployeeRequest, EmployeeQuery, UpdateEmployeeRequest, validate_request,
};
use crate::dto::response::ApiResponse;
use crate::error::ApiError;
use crate::extractors::path::parse_uuid;
use crate::extractors::{AuthUser, PaginationParams};
use crate::state::AppState;

/// GET /api/employees
pub async fn list_employees(
    State(state): State<AppState>,
    _auth: AuthUser,
    Query(query): Query<EmployeeQuery>,
    Query(params): Query<PaginationParams>,
) -> Result<Json<ApiResponse<PageResponse<Employee>>>, ApiError> {
    let page = state
        .employee_service
        .list(query.department_id, params.into_page_request())
        .await?;
    Ok(Json(ApiResponse::ok(page)))
}

/// GET /api/employees/{id}
pub async fn get_employee(
    State(state): State<AppState>,
    _auth: AuthUser,
    Path(id): Path<String>,
) -> Result<Json<ApiResponse<Employee>>, ApiError> {
    let employee = state.employee_service.get(parse_uuid(&id)?).await?;
    Ok(Json(ApiResponse::ok(employee)))
}

/// POST /api/employees
pub async fn create_employee(
    State(state): State<AppState>,
    auth: AuthUser,
    Json(req): Json<CreateEmployeeRequest>,
) -> Result<(StatusCode, Json<ApiResponse<Employee>>), ApiError> {
    validate_request(&req)?;
    let employee = state.employee_service.create(&auth, req.into()).await?;
    Ok((
        StatusCode::CREATED,
        Json(ApiResponse::with_message("Employee created", employee)),
    ))
}

/// PUT /api/employees/{id}
pub async fn update_employee(
    State(state): State<AppState>,
    auth: AuthUser,
    Path(id): Path<String>,
    Json(req): Json<UpdateEmployeeRequest>,
) -> Result<Json<ApiResponse<Employee>>, ApiError> {
    validate_request(&req)?;
    let employee = state
        .employee_service
        .update(&auth, parse_uuid(&id)?, req.into())
        .await?;
    Ok(Json(ApiResponse::with_message("Employee updated", employee)))
}

/// DELETE /api/employees/{id}
pub async fn delete_employee(
    State(state): State<AppState>,
    auth: AuthUser,
    Path(id): Path<String>,
) -> Result<Json<ApiResponse<Employee>>, ApiError> {
    let employee = state
        .employee_service
        .archive(&auth, parse_uuid(&id)?)
        .await?;
    Ok(Json(ApiResponse::with_message("Employee archived", employee)))
}

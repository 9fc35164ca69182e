//! Application state shared across all handlers and middleware.

use std::sync::Arc;

use hrms_auth::{JwtDecoder, JwtEncoder};
use hrms_core::config::AppConfig;
use hrms_service::{
    ActivityLogService, ActivityRecorder, ArchiveService, AuthService, DepartmentService,
    EmployeeService,
};

/// Application state containing all shared dependencies.
///
/// Passed to every Axum handler via `State<AppState>`.
#[derive(Debug, Clone)]
pub struct AppState {
    // ── Configuration ────────────────────────────────────────
    /// Application configuration
    pub config: Arc<AppConfig>,

    // ── Auth ─────────────────────────────────────────────────
    /// JWT token encoder
    pub jwt_encoder: Arc<JwtEncoder>,
    /// JWT token decoder and validator
    pub jwt_decoder: Arc<JwtDecoder>,

    // ── Activity ─────────────────────────────────────────────
    /// Shared activity recorder (owns the audit task tracker)
    pub recorder: ActivityRecorder,

    // ── Services ─────────────────────────────────────────────
    /// Archive administration
    pub archive_service: Arc<ArchiveService>,
    /// Activity log queries
    pub activity_service: Arc<ActivityLogService>,
    /// Login and logout
    pub auth_service: Arc<AuthService>,
    /// Departments
    pub department_service: Arc<DepartmentService>,
    /// Employees
    pub employee_service: Arc<EmployeeService>,
}

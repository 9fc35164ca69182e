//! Route definitions for the HRMS HTTP API.
//!
//! All routes are organized by domain and mounted under `/api`.
//! The router receives `AppState` and passes it to all handlers via Axum's `State` extractor.

use axum::{
    Router,
    middleware as axum_middleware,
    routing::{get, post},
};

use hrms_service::resource::DEPARTMENTS_MODULE;

use crate::handlers;
use crate::middleware::{self, AuditScope};
use crate::state::AppState;

/// Build the Axum router with all routes and the request logger.
///
/// Receives the fully-constructed `AppState` and threads it through
/// every route via `.with_state(state)`.
pub fn build_router(state: AppState) -> Router {
    let api_routes = Router::new()
        .merge(health_routes())
        .merge(auth_routes())
        .merge(archive_routes())
        .merge(activity_routes())
        .merge(department_routes(&state))
        .merge(employee_routes());

    Router::new()
        .nest("/api", api_routes)
        .layer(axum_middleware::from_fn(middleware::logging::request_logging))
        .with_state(state)
}

/// Health check
fn health_routes() -> Router<AppState> {
    Router::new().route("/health", get(handlers::health::health))
}

/// Login and logout
fn auth_routes() -> Router<AppState> {
    Router::new()
        .route("/auth/login", post(handlers::auth::login))
        .route("/auth/logout", post(handlers::auth::logout))
}

/// Archive administration
fn archive_routes() -> Router<AppState> {
    Router::new()
        .route("/archives/models", get(handlers::archive::list_models))
        .route("/archives/all", get(handlers::archive::get_all))
        .route("/archives/stats", get(handlers::archive::get_stats))
        .route(
            "/archives/model/{modelName}",
            get(handlers::archive::get_by_model),
        )
        .route("/archives/restore-all", post(handlers::archive::restore_all))
        .route(
            "/archives/restore/{modelName}/{id}",
            post(handlers::archive::restore_one),
        )
        .route(
            "/archives/restore-table/{tableName}",
            post(handlers::archive::restore_table),
        )
        .route("/archives/backup", post(handlers::archive::create_backup))
}

/// Read-only activity log
fn activity_routes() -> Router<AppState> {
    Router::new()
        .route("/activity-logs", get(handlers::activity::list_activity))
        .route("/activity-logs/{id}", get(handlers::activity::get_activity))
}

/// Departments, audited by the interceptor
fn department_routes(state: &AppState) -> Router<AppState> {
    let scope = AuditScope::new(
        DEPARTMENTS_MODULE,
        state.recorder.clone(),
        state.jwt_decoder.clone(),
    );

    Router::new()
        .route(
            "/departments",
            get(handlers::department::list_departments)
                .post(handlers::department::create_department),
        )
        .route(
            "/departments/{id}",
            get(handlers::department::get_department)
                .put(handlers::department::update_department)
                .patch(handlers::department::update_department)
                .delete(handlers::department::delete_department),
        )
        .route_layer(axum_middleware::from_fn_with_state(
            scope,
            middleware::audit_interceptor,
        ))
}

/// Employees; the service records its own activity
fn employee_routes() -> Router<AppState> {
    Router::new()
        .route(
            "/employees",
            get(handlers::employee::list_employees).post(handlers::employee::create_employee),
        )
        .route(
            "/employees/{id}",
            get(handlers::employee::get_employee)
                .put(handlers::employee::update_employee)
                .patch(handlers::employee::update_employee)
                .delete(handlers::employee::delete_employee),
        )
}

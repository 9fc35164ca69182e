//! Archive administration handlers.
//!
//! Every failure of these endpoints renders as HTTP 500 with the
//! `{success: false, message}` envelope; only authentication is rejected
//! earlier with 401.

use axum::Json;
use axum::extract::{Path, State};

use hrms_entity::archive::{
    ArchiveSnapshot, BackupReport, ModelArchive, RestoreDetail, RestoreSummary,
};
use tracing::info;

use crate::dto::response::{FlatResponse, ModelsBody, RecordBody, StatsBody};
use crate::error::ApiError;
use crate::extractors::AuthUser;
use crate::state::AppState;

/// GET /api/archives/models
pub async fn list_models(
    State(state): State<AppState>,
    _auth: AuthUser,
) -> Json<FlatResponse<ModelsBody>> {
    let models = state.archive_service.list_archivable_models();
    Json(FlatResponse::ok(ModelsBody { models }))
}

/// GET /api/archives/all
pub async fn get_all(
    State(state): State<AppState>,
    _auth: AuthUser,
) -> Result<Json<FlatResponse<ArchiveSnapshot>>, ApiError> {
    let snapshot = state.archive_service.get_all_archived_data().await?;
    Ok(Json(FlatResponse::ok(snapshot)))
}

/// GET /api/archives/stats
pub async fn get_stats(
    State(state): State<AppState>,
    _auth: AuthUser,
) -> Result<Json<FlatResponse<StatsBody>>, ApiError> {
    let stats = state.archive_service.get_archive_stats().await?;
    Ok(Json(FlatResponse::ok(StatsBody { stats })))
}

/// GET /api/archives/model/{modelName}
pub async fn get_by_model(
    State(state): State<AppState>,
    _auth: AuthUser,
    Path(model_name): Path<String>,
) -> Result<Json<FlatResponse<ModelArchive>>, ApiError> {
    let archive = state.archive_service.get_archived_by_model(&model_name).await?;
    Ok(Json(FlatResponse::ok(archive)))
}

/// POST /api/archives/restore-all
pub async fn restore_all(
    State(state): State<AppState>,
    auth: AuthUser,
) -> Result<Json<FlatResponse<RestoreSummary>>, ApiError> {
    let summary = state.archive_service.restore_all_archived().await?;
    info!(
        actor = %auth.user_id,
        total_restored = summary.total_restored,
        "Restored all archived records"
    );
    let message = format!("Successfully restored {} records", summary.total_restored);
    Ok(Json(FlatResponse::with_message(message, summary)))
}

/// POST /api/archives/restore/{modelName}/{id}
pub async fn restore_one(
    State(state): State<AppState>,
    auth: AuthUser,
    Path((model_name, id)): Path<(String, String)>,
) -> Result<Json<FlatResponse<RecordBody>>, ApiError> {
    let record = state.archive_service.restore_by_id(&model_name, &id).await?;
    info!(actor = %auth.user_id, model = %model_name, record_id = %id, "Restored record");
    Ok(Json(FlatResponse::with_message(
        format!("{model_name} record restored successfully"),
        RecordBody { data: record },
    )))
}

/// POST /api/archives/restore-table/{tableName}
pub async fn restore_table(
    State(state): State<AppState>,
    auth: AuthUser,
    Path(table_name): Path<String>,
) -> Result<Json<FlatResponse<RestoreDetail>>, ApiError> {
    let detail = state.archive_service.restore_by_model(&table_name).await?;
    info!(
        actor = %auth.user_id,
        model = %detail.model,
        restored = detail.restored,
        "Restored model"
    );
    let message = format!("Restored {} records from {}", detail.restored, detail.model);
    Ok(Json(FlatResponse::with_message(message, detail)))
}

/// POST /api/archives/backup
pub async fn create_backup(
    State(state): State<AppState>,
    auth: AuthUser,
) -> Result<Json<FlatResponse<BackupReport>>, ApiError> {
    let report = state.archive_service.create_backup().await?;
    info!(actor = %auth.user_id, path = %report.path, "Backup created");
    Ok(Json(FlatResponse::with_message("Backup created successfully", report)))
}

//! Router-level tests for archive administration over in-memory models.
//!
//! These run without a database.

mod helpers;

use std::sync::Arc;

use http::StatusCode;
use serde_json::json;

use hrms_database::memory::{MemoryActivityLog, MemoryActorDirectory, MemoryArchivableRepository};
use hrms_entity::resource::{Department, Employee};
use hrms_entity::user::UserRole;
use hrms_service::ModelRegistry;

struct Fixture {
    app: helpers::TestApp,
    token: String,
    departments: Arc<MemoryArchivableRepository>,
    employees: Arc<MemoryArchivableRepository>,
    _backups: tempfile::TempDir,
}

async fn fixture() -> Fixture {
    let backups = tempfile::tempdir().unwrap();

    let departments = Arc::new(MemoryArchivableRepository::new(Department::DESCRIPTOR));
    departments.seed(5, 2).await;
    let employees = Arc::new(MemoryArchivableRepository::new(Employee::DESCRIPTOR));
    employees.seed(10, 0).await;

    let registry = Arc::new(ModelRegistry::new());
    registry.register(departments.clone()).unwrap();
    registry.register(employees.clone()).unwrap();

    let admin = helpers::actor("Ada Admin");
    let actors = Arc::new(MemoryActorDirectory::new());
    actors.insert(admin.clone());

    let app = helpers::TestApp::in_memory(
        registry,
        Arc::new(MemoryActivityLog::new()),
        actors,
        backups.path(),
    )
    .await;
    let token = app.token_for(admin.id, UserRole::Admin);

    Fixture {
        app,
        token,
        departments,
        employees,
        _backups: backups,
    }
}

#[tokio::test]
async fn test_health() {
    let fx = fixture().await;
    let response = fx.app.request("GET", "/api/health", None, None).await;
    assert_eq!(response.status, StatusCode::OK);
    assert_eq!(response.body["success"], json!(true));
    assert_eq!(response.body["data"]["status"], json!("ok"));
}

#[tokio::test]
async fn test_archive_routes_require_token() {
    let fx = fixture().await;
    for (method, path) in [
        ("GET", "/api/archives/all"),
        ("GET", "/api/archives/stats"),
        ("POST", "/api/archives/restore-all"),
        ("POST", "/api/archives/backup"),
    ] {
        let response = fx.app.request(method, path, None, None).await;
        assert_eq!(response.status, StatusCode::UNAUTHORIZED, "{method} {path}");
        assert_eq!(response.body["success"], json!(false));
    }

    let response = fx
        .app
        .request("GET", "/api/archives/all", None, Some("not-a-jwt"))
        .await;
    assert_eq!(response.status, StatusCode::UNAUTHORIZED);
}

#[tokio::test]
async fn test_snapshot_omits_empty_models() {
    let fx = fixture().await;
    let response = fx
        .app
        .request("GET", "/api/archives/all", None, Some(&fx.token))
        .await;

    assert_eq!(response.status, StatusCode::OK);
    let body = &response.body;
    assert_eq!(body["success"], json!(true));
    assert_eq!(body["totalTables"], json!(1));
    assert_eq!(body["totalRecords"], json!(2));
    let archives = body["archives"].as_object().unwrap();
    assert_eq!(archives.len(), 1);
    assert_eq!(archives["Department"]["collectionName"], json!("departments"));
    assert_eq!(archives["Department"]["count"], json!(2));
    assert_eq!(archives["Department"]["records"].as_array().unwrap().len(), 2);
}

#[tokio::test]
async fn test_stats_lists_every_model() {
    let fx = fixture().await;
    let response = fx
        .app
        .request("GET", "/api/archives/stats", None, Some(&fx.token))
        .await;

    assert_eq!(response.status, StatusCode::OK);
    assert_eq!(
        response.body["stats"],
        json!([
            { "model": "Department", "collection": "departments", "archived": 2, "active": 5, "total": 7 },
            { "model": "Employee", "collection": "employees", "archived": 0, "active": 10, "total": 10 }
        ])
    );
}

#[tokio::test]
async fn test_models_listing() {
    let fx = fixture().await;
    let response = fx
        .app
        .request("GET", "/api/archives/models", None, Some(&fx.token))
        .await;

    assert_eq!(response.status, StatusCode::OK);
    let models = response.body["models"].as_array().unwrap();
    assert_eq!(models.len(), 2);
    assert_eq!(models[0]["name"], json!("Department"));
    assert_eq!(models[0]["flag_field"], json!("archive_department"));
}

#[tokio::test]
async fn test_restore_all_writes_backup_first() {
    let fx = fixture().await;
    let response = fx
        .app
        .request("POST", "/api/archives/restore-all", None, Some(&fx.token))
        .await;

    assert_eq!(response.status, StatusCode::OK);
    let body = &response.body;
    assert_eq!(body["totalRestored"], json!(2));
    assert_eq!(
        body["details"],
        json!([{ "model": "Department", "collection": "departments", "restored": 2 }])
    );
    let backup = body["backupPath"].as_str().unwrap();
    let saved: serde_json::Value =
        serde_json::from_str(&std::fs::read_to_string(backup).unwrap()).unwrap();
    assert_eq!(saved["Department"].as_array().unwrap().len(), 7);
    assert_eq!(saved["Employee"].as_array().unwrap().len(), 10);

    let again = fx
        .app
        .request("GET", "/api/archives/all", None, Some(&fx.token))
        .await;
    assert_eq!(again.body["totalRecords"], json!(0));
    assert_eq!(again.body["archives"], json!({}));
}

#[tokio::test]
async fn test_restore_one_record() {
    let fx = fixture().await;
    let archived = fx
        .departments
        .insert(json!({ "name": "Legal", "archive_department": true }))
        .await;
    let id = archived["id"].as_str().unwrap();
    let path = format!("/api/archives/restore/Department/{id}");

    let response = fx.app.request("POST", &path, None, Some(&fx.token)).await;
    assert_eq!(response.status, StatusCode::OK);
    assert_eq!(response.body["data"]["id"], json!(id));
    assert_eq!(response.body["data"]["archive_department"], json!(false));

    let repeat = fx.app.request("POST", &path, None, Some(&fx.token)).await;
    assert_eq!(repeat.status, StatusCode::OK);
    assert_eq!(repeat.body["data"]["archive_department"], json!(false));
}

#[tokio::test]
async fn test_restore_table_accepts_collection_name() {
    let fx = fixture().await;
    let response = fx
        .app
        .request("POST", "/api/archives/restore-table/departments", None, Some(&fx.token))
        .await;

    assert_eq!(response.status, StatusCode::OK);
    assert_eq!(response.body["model"], json!("Department"));
    assert_eq!(response.body["restored"], json!(2));
}

#[tokio::test]
async fn test_failures_render_as_500_envelope() {
    let fx = fixture().await;

    let unknown = fx
        .app
        .request("GET", "/api/archives/model/Payslip", None, Some(&fx.token))
        .await;
    assert_eq!(unknown.status, StatusCode::INTERNAL_SERVER_ERROR);
    assert_eq!(unknown.body["success"], json!(false));
    assert!(unknown.body["message"].as_str().unwrap().contains("Payslip"));

    let missing = fx
        .app
        .request(
            "POST",
            &format!("/api/archives/restore/Department/{}", uuid::Uuid::new_v4()),
            None,
            Some(&fx.token),
        )
        .await;
    assert_eq!(missing.status, StatusCode::INTERNAL_SERVER_ERROR);
    assert_eq!(missing.body["message"], json!("Record not found"));

    let malformed = fx
        .app
        .request("POST", "/api/archives/restore/Department/42", None, Some(&fx.token))
        .await;
    assert_eq!(malformed.status, StatusCode::INTERNAL_SERVER_ERROR);

    fx.employees.set_unavailable(true);
    let broken = fx
        .app
        .request("GET", "/api/archives/stats", None, Some(&fx.token))
        .await;
    assert_eq!(broken.status, StatusCode::INTERNAL_SERVER_ERROR);
    assert!(broken.body["message"].as_str().unwrap().contains("Employee"));
}

#[tokio::test]
async fn test_backup_endpoint() {
    let fx = fixture().await;
    let response = fx
        .app
        .request("POST", "/api/archives/backup", None, Some(&fx.token))
        .await;

    assert_eq!(response.status, StatusCode::OK);
    assert_eq!(response.body["models"], json!(2));
    assert_eq!(response.body["totalRecords"], json!(17));
    let path = std::path::PathBuf::from(response.body["path"].as_str().unwrap());
    assert!(path.starts_with(&fx.app.config.archive.backup_dir));
    let name = path.file_name().unwrap().to_str().unwrap();
    assert!(name.starts_with("backup-") && name.ends_with(".json"));
    assert!(!name.trim_end_matches(".json").contains(['.', ':']));
}

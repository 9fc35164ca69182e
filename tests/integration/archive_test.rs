//! Integration tests for archive administration against PostgreSQL.
//!
//! Skipped unless `HRMS_TEST_DATABASE_URL` points at a scratch database.

mod helpers;

use http::StatusCode;
use serde_json::json;
use sqlx::PgPool;
use uuid::Uuid;

use hrms_entity::user::UserRole;

async fn insert_department(pool: &PgPool, code: &str, archived: bool) -> Uuid {
    sqlx::query_scalar(
        "INSERT INTO departments (name, code, archive_department) VALUES ($1, $2, $3) RETURNING id",
    )
    .bind(format!("Department {code}"))
    .bind(code)
    .bind(archived)
    .fetch_one(pool)
    .await
    .expect("Failed to insert department")
}

async fn insert_employee(pool: &PgPool, code: &str, archived: bool) -> Uuid {
    sqlx::query_scalar(
        "INSERT INTO employees (employee_code, first_name, last_name, email, is_archived) \
         VALUES ($1, 'Test', $1, $2, $3) RETURNING id",
    )
    .bind(code)
    .bind(format!("{code}@test.com"))
    .bind(archived)
    .fetch_one(pool)
    .await
    .expect("Failed to insert employee")
}

/// Five active and two archived departments, ten active employees.
async fn seed(app: &helpers::TestApp) -> Vec<Uuid> {
    let mut archived = Vec::new();
    for i in 0..5 {
        insert_department(&app.db_pool, &format!("D{i}"), false).await;
    }
    for i in 0..2 {
        archived.push(insert_department(&app.db_pool, &format!("A{i}"), true).await);
    }
    for i in 0..10 {
        insert_employee(&app.db_pool, &format!("E{i:03}"), false).await;
    }
    archived
}

#[tokio::test]
async fn test_snapshot_and_stats() {
    let backups = tempfile::tempdir().unwrap();
    let Some(app) = helpers::TestApp::postgres(backups.path()).await else {
        return;
    };
    seed(&app).await;
    let admin = app.create_test_user("archivist", "password123", UserRole::Admin).await;
    let token = app.token_for(admin, UserRole::Admin);

    let snapshot = app
        .request("GET", "/api/archives/all", None, Some(&token))
        .await;
    assert_eq!(snapshot.status, StatusCode::OK);
    assert_eq!(snapshot.body["totalTables"], json!(1));
    assert_eq!(snapshot.body["totalRecords"], json!(2));
    assert!(snapshot.body["archives"].get("Employee").is_none());
    let records = snapshot.body["archives"]["Department"]["records"]
        .as_array()
        .unwrap();
    assert!(records.iter().all(|r| r["archive_department"] == json!(true)));

    let stats = app
        .request("GET", "/api/archives/stats", None, Some(&token))
        .await;
    assert_eq!(stats.status, StatusCode::OK);
    let stats = stats.body["stats"].as_array().unwrap();
    assert_eq!(stats.len(), app.registry.list_archivable_models().len());
    for stat in stats {
        assert_eq!(
            stat["total"].as_u64().unwrap(),
            stat["archived"].as_u64().unwrap() + stat["active"].as_u64().unwrap()
        );
    }
    let department = stats.iter().find(|s| s["model"] == json!("Department")).unwrap();
    assert_eq!(department["archived"], json!(2));
    assert_eq!(department["active"], json!(5));
    let designation = stats.iter().find(|s| s["model"] == json!("Designation")).unwrap();
    assert_eq!(designation["total"], json!(0));

    let by_model = app
        .request("GET", "/api/archives/model/departments", None, Some(&token))
        .await;
    assert_eq!(by_model.status, StatusCode::OK);
    assert_eq!(by_model.body["model"], json!("Department"));
    assert_eq!(by_model.body["count"], json!(2));
}

#[tokio::test]
async fn test_restore_flows() {
    let backups = tempfile::tempdir().unwrap();
    let Some(app) = helpers::TestApp::postgres(backups.path()).await else {
        return;
    };
    let archived = seed(&app).await;
    let archived_employee = insert_employee(&app.db_pool, "E999", true).await;
    let admin = app.create_test_user("restorer", "password123", UserRole::Admin).await;
    let token = app.token_for(admin, UserRole::Admin);

    let one = app
        .request(
            "POST",
            &format!("/api/archives/restore/Department/{}", archived[0]),
            None,
            Some(&token),
        )
        .await;
    assert_eq!(one.status, StatusCode::OK);
    assert_eq!(one.body["data"]["id"], json!(archived[0].to_string()));
    assert_eq!(one.body["data"]["archive_department"], json!(false));

    let updated_at = one.body["data"]["updated_at"].clone();
    let again = app
        .request(
            "POST",
            &format!("/api/archives/restore/Department/{}", archived[0]),
            None,
            Some(&token),
        )
        .await;
    assert_eq!(again.status, StatusCode::OK);
    assert_eq!(again.body["data"]["updated_at"], updated_at);

    let table = app
        .request("POST", "/api/archives/restore-table/employees", None, Some(&token))
        .await;
    assert_eq!(table.status, StatusCode::OK);
    assert_eq!(table.body["restored"], json!(1));
    let flag: bool = sqlx::query_scalar("SELECT is_archived FROM employees WHERE id = $1")
        .bind(archived_employee)
        .fetch_one(&app.db_pool)
        .await
        .unwrap();
    assert!(!flag);

    let all = app
        .request("POST", "/api/archives/restore-all", None, Some(&token))
        .await;
    assert_eq!(all.status, StatusCode::OK);
    assert_eq!(all.body["totalRestored"], json!(1));
    assert_eq!(all.body["details"][0]["model"], json!("Department"));
    assert!(std::path::Path::new(all.body["backupPath"].as_str().unwrap()).exists());

    let remaining: i64 =
        sqlx::query_scalar("SELECT COUNT(*) FROM departments WHERE archive_department")
            .fetch_one(&app.db_pool)
            .await
            .unwrap();
    assert_eq!(remaining, 0);

    let missing = app
        .request(
            "POST",
            &format!("/api/archives/restore/Department/{}", Uuid::new_v4()),
            None,
            Some(&token),
        )
        .await;
    assert_eq!(missing.status, StatusCode::INTERNAL_SERVER_ERROR);
    assert_eq!(missing.body["message"], json!("Record not found"));
}

#[tokio::test]
async fn test_controller_delete_then_restore_round_trip() {
    let backups = tempfile::tempdir().unwrap();
    let Some(app) = helpers::TestApp::postgres(backups.path()).await else {
        return;
    };
    let admin = app.create_test_user("rita", "password123", UserRole::Admin).await;
    let token = app.token_for(admin, UserRole::Admin);
    let id = insert_department(&app.db_pool, "OPS", false).await;

    let deleted = app
        .request("DELETE", &format!("/api/departments/{id}"), None, Some(&token))
        .await;
    assert_eq!(deleted.status, StatusCode::OK);
    assert_eq!(deleted.body["data"]["archive_department"], json!(false));

    let archived = app
        .request("GET", "/api/archives/model/Department", None, Some(&token))
        .await;
    assert_eq!(archived.status, StatusCode::OK);
    assert_eq!(archived.body["count"], json!(1));
    assert_eq!(archived.body["records"][0]["id"], json!(id.to_string()));

    let restored = app
        .request(
            "POST",
            &format!("/api/archives/restore/Department/{id}"),
            None,
            Some(&token),
        )
        .await;
    assert_eq!(restored.status, StatusCode::OK);
    assert_eq!(restored.body["data"]["archive_department"], json!(false));

    let visible = app
        .request("GET", &format!("/api/departments/{id}"), None, Some(&token))
        .await;
    assert_eq!(visible.status, StatusCode::OK);
}

#[tokio::test]
async fn test_backup_contains_every_model() {
    let backups = tempfile::tempdir().unwrap();
    let Some(app) = helpers::TestApp::postgres(backups.path()).await else {
        return;
    };
    seed(&app).await;
    let admin = app.create_test_user("backup", "password123", UserRole::Hr).await;
    let token = app.token_for(admin, UserRole::Hr);

    let response = app
        .request("POST", "/api/archives/backup", None, Some(&token))
        .await;
    assert_eq!(response.status, StatusCode::OK);
    assert_eq!(response.body["models"], json!(app.registry.list_archivable_models().len()));
    assert_eq!(response.body["totalRecords"], json!(17));

    let saved: serde_json::Value = serde_json::from_str(
        &std::fs::read_to_string(response.body["path"].as_str().unwrap()).unwrap(),
    )
    .unwrap();
    assert_eq!(saved["Department"].as_array().unwrap().len(), 7);
    assert_eq!(saved["Employee"].as_array().unwrap().len(), 10);
    assert_eq!(saved["JobPosting"], json!([]));
}

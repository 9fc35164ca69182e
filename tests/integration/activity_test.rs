//! Integration tests for activity logging against PostgreSQL.
//!
//! Skipped unless `HRMS_TEST_DATABASE_URL` points at a scratch database.

mod helpers;

use http::StatusCode;
use serde_json::{Value, json};

use hrms_entity::user::UserRole;

async fn entries(app: &helpers::TestApp, token: &str, query: &str) -> Vec<Value> {
    let response = app
        .request("GET", &format!("/api/activity-logs?{query}"), None, Some(token))
        .await;
    assert_eq!(response.status, StatusCode::OK, "{:?}", response.body);
    response.body["data"]["items"].as_array().unwrap().clone()
}

#[tokio::test]
async fn test_login_and_logout_are_recorded() {
    let backups = tempfile::tempdir().unwrap();
    let Some(app) = helpers::TestApp::postgres(backups.path()).await else {
        return;
    };
    let user_id = app.create_test_user("hana", "password123", UserRole::Hr).await;

    let failed = app
        .request(
            "POST",
            "/api/auth/login",
            Some(json!({ "username": "hana", "password": "wrong" })),
            None,
        )
        .await;
    assert_eq!(failed.status, StatusCode::UNAUTHORIZED);

    let unknown = app
        .request(
            "POST",
            "/api/auth/login",
            Some(json!({ "username": "nobody", "password": "wrong" })),
            None,
        )
        .await;
    assert_eq!(unknown.status, StatusCode::UNAUTHORIZED);
    assert_eq!(unknown.body["message"], failed.body["message"]);

    let token = app.login("hana", "password123").await;
    let logout = app.request("POST", "/api/auth/logout", None, Some(&token)).await;
    assert_eq!(logout.status, StatusCode::OK);
    app.flush_activity().await;

    let logins = entries(&app, &token, "module=Auth").await;
    assert_eq!(logins.len(), 2);
    let login = logins.iter().find(|e| e["action"] == json!("LOGIN")).unwrap();
    assert_eq!(login["actor_id"], json!(user_id.to_string()));
    assert_eq!(login["actor_name"], json!("hana Tester"));
    assert_eq!(login["actor_role"], json!("hr"));
    assert!(login["record_id"].is_null());
    assert_eq!(login["user_agent"], json!("hrms-integration-tests"));
    assert!(logins.iter().any(|e| e["action"] == json!("LOGOUT")));
}

#[tokio::test]
async fn test_department_writes_are_intercepted() {
    let backups = tempfile::tempdir().unwrap();
    let Some(app) = helpers::TestApp::postgres(backups.path()).await else {
        return;
    };
    let user_id = app.create_test_user("dora", "password123", UserRole::Admin).await;
    let token = app.token_for(user_id, UserRole::Admin);

    let created = app
        .request(
            "POST",
            "/api/departments",
            Some(json!({ "name": "Finance", "code": "FIN" })),
            Some(&token),
        )
        .await;
    assert_eq!(created.status, StatusCode::CREATED, "{:?}", created.body);
    let id = created.body["data"]["id"].as_str().unwrap().to_string();

    let listed = app.request("GET", "/api/departments", None, Some(&token)).await;
    assert_eq!(listed.status, StatusCode::OK);

    let updated = app
        .request(
            "PUT",
            &format!("/api/departments/{id}"),
            Some(json!({ "name": "Finance & Accounting" })),
            Some(&token),
        )
        .await;
    assert_eq!(updated.status, StatusCode::OK);

    let deleted = app
        .request("DELETE", &format!("/api/departments/{id}"), None, Some(&token))
        .await;
    assert_eq!(deleted.status, StatusCode::OK);

    let gone = app
        .request("DELETE", &format!("/api/departments/{id}"), None, Some(&token))
        .await;
    assert_ne!(gone.status, StatusCode::OK);
    app.flush_activity().await;

    let log = entries(&app, &token, &format!("module=Departments&record_id={id}")).await;
    assert_eq!(log.len(), 3, "reads and failures are not recorded");

    let create = log.iter().find(|e| e["action"] == json!("CREATE")).unwrap();
    assert!(create["old_values"].is_null());
    assert_eq!(create["new_values"]["code"], json!("FIN"));
    assert_eq!(create["description"], json!("Created a record in Departments"));
    assert_eq!(create["method"], json!("POST"));

    let update = log.iter().find(|e| e["action"] == json!("UPDATE")).unwrap();
    assert_eq!(update["old_values"]["name"], json!("Finance"));
    assert_eq!(update["new_values"]["name"], json!("Finance & Accounting"));

    let delete = log.iter().find(|e| e["action"] == json!("DELETE")).unwrap();
    assert_eq!(delete["old_values"]["name"], json!("Finance & Accounting"));
    assert_eq!(delete["old_values"]["archive_department"], json!(false));
    assert!(delete["new_values"].is_null());

    let single = app
        .request(
            "GET",
            &format!("/api/activity-logs/{}", delete["id"].as_str().unwrap()),
            None,
            Some(&token),
        )
        .await;
    assert_eq!(single.status, StatusCode::OK);
    assert_eq!(single.body["data"]["action"], json!("DELETE"));

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
}

#[tokio::test]
async fn test_employee_writes_are_recorded_by_the_service() {
    let backups = tempfile::tempdir().unwrap();
    let Some(app) = helpers::TestApp::postgres(backups.path()).await else {
        return;
    };
    let user_id = app.create_test_user("erin", "password123", UserRole::Hr).await;
    let token = app.token_for(user_id, UserRole::Hr);

    let created = app
        .request(
            "POST",
            "/api/employees",
            Some(json!({
                "employee_code": "E-100",
                "first_name": "Grace",
                "last_name": "Hopper",
                "email": "grace@test.com"
            })),
            Some(&token),
        )
        .await;
    assert_eq!(created.status, StatusCode::CREATED, "{:?}", created.body);
    let id = created.body["data"]["id"].as_str().unwrap().to_string();

    let deleted = app
        .request("DELETE", &format!("/api/employees/{id}"), None, Some(&token))
        .await;
    assert_eq!(deleted.status, StatusCode::OK);
    app.flush_activity().await;

    let log = entries(&app, &token, "module=Employees").await;
    assert_eq!(log.len(), 2);
    assert!(log.iter().all(|e| e["record_id"] == json!(id)));
    let delete = log.iter().find(|e| e["action"] == json!("DELETE")).unwrap();
    assert_eq!(delete["old_values"]["employee_code"], json!("E-100"));
    assert!(delete["new_values"].is_null());

    let filtered = entries(&app, &token, "action=create&per_page=1").await;
    assert_eq!(filtered.len(), 1);
    assert_eq!(filtered[0]["module"], json!("Employees"));

    let archived = app
        .request("GET", "/api/archives/model/Employee", None, Some(&token))
        .await;
    assert_eq!(archived.body["count"], json!(1));
}

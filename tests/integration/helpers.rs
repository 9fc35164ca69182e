//! Shared test helpers for integration tests.
#![allow(dead_code)]

use std::path::Path;
use std::sync::Arc;

use axum::Router;
use axum::body::Body;
use http::{Request, StatusCode};
use serde_json::Value;
use sqlx::PgPool;
use sqlx::postgres::PgPoolOptions;
use tokio::sync::{Mutex, MutexGuard};
use tower::ServiceExt;
use uuid::Uuid;

use hrms_auth::{JwtDecoder, JwtEncoder, PasswordHasher};
use hrms_core::config::{
    AppConfig, ArchiveConfig, AuthConfig, DatabaseConfig, LoggingConfig, ServerConfig,
};
use hrms_core::traits::{ActivityLogStore, ActorDirectory};
use hrms_core::types::ActorSnapshot;
use hrms_database::memory::{MemoryActivityLog, MemoryActorDirectory};
use hrms_database::repositories::{
    ActivityLogRepository, DepartmentRepository, EmployeeRepository, UserRepository,
};
use hrms_database::DatabasePool;
use hrms_entity::user::UserRole;
use hrms_service::resource::{catalog, department, employee};
use hrms_service::{
    ActivityLogService, ActivityRecorder, ArchiveService, AuthService, DepartmentService,
    EmployeeService, ModelRegistry,
};

/// Environment variable naming the Postgres database used by integration tests.
pub const TEST_DATABASE_ENV: &str = "HRMS_TEST_DATABASE_URL";

/// Tests sharing the database run one at a time.
static DB_LOCK: Mutex<()> = Mutex::const_new(());

/// Test application context
pub struct TestApp {
    /// The Axum router for making test requests
    pub router: Router,
    /// Database pool for direct queries
    pub db_pool: PgPool,
    /// Application config
    pub config: AppConfig,
    /// Activity recorder shared with the router
    pub recorder: ActivityRecorder,
    /// Token issuer matching the router's decoder
    pub encoder: Arc<JwtEncoder>,
    /// Archivable models behind the archive routes.
    pub registry: Arc<ModelRegistry>,
    _guard: Option<MutexGuard<'static, ()>>,
}

/// Configuration for tests; nothing is read from disk.
pub fn test_config(database_url: &str, backup_dir: &Path) -> AppConfig {
    AppConfig {
        server: ServerConfig::default(),
        database: DatabaseConfig {
            url: database_url.to_string(),
            max_connections: 5,
            min_connections: 0,
            connect_timeout_seconds: 5,
            idle_timeout_seconds: 60,
            run_migrations: true,
        },
        auth: AuthConfig {
            jwt_secret: "integration-test-secret".to_string(),
            jwt_access_ttl_minutes: 15,
        },
        archive: ArchiveConfig {
            backup_dir: backup_dir.to_string_lossy().into_owned(),
            backup_before_restore: true,
            audit_drain_timeout_seconds: 5,
        },
        logging: LoggingConfig::default(),
    }
}

impl TestApp {
    /// Full stack against `HRMS_TEST_DATABASE_URL`, or `None` when it is unset.
    pub async fn postgres(backup_dir: &Path) -> Option<Self> {
        let Ok(url) = std::env::var(TEST_DATABASE_ENV) else {
            eprintln!("{TEST_DATABASE_ENV} not set, skipping");
            return None;
        };
        let guard = DB_LOCK.lock().await;

        let config = test_config(&url, backup_dir);
        let db = DatabasePool::connect(&config.database)
            .await
            .expect("Failed to connect to test database");
        db.migrate().await.expect("Failed to run migrations");
        let db_pool = db.pool().clone();
        Self::clean_database(&db_pool).await;

        let registry = Arc::new(ModelRegistry::new());
        department::register(&registry, &db_pool).expect("Failed to register departments");
        employee::register(&registry, &db_pool).expect("Failed to register employees");
        catalog::register(&registry, &db_pool).expect("Failed to register catalog models");

        let users = Arc::new(UserRepository::new(db_pool.clone()));
        let activity = Arc::new(ActivityLogRepository::new(db_pool.clone()));
        let mut app = Self::build(config, db_pool, registry, activity, users);
        app._guard = Some(guard);
        Some(app)
    }

    /// Archive administration over in-memory models.
    ///
    /// Routes backed directly by Postgres get a lazy pool that is never
    /// connected; only archive, auth-rejection and health routes are usable.
    pub async fn in_memory(
        registry: Arc<ModelRegistry>,
        log: Arc<MemoryActivityLog>,
        actors: Arc<MemoryActorDirectory>,
        backup_dir: &Path,
    ) -> Self {
        let config = test_config("postgres://hrms@localhost:1/unused", backup_dir);
        let db_pool = PgPoolOptions::new()
            .connect_lazy(&config.database.url)
            .expect("Failed to build lazy pool");
        Self::build(config, db_pool, registry, log, actors)
    }

    fn build(
        config: AppConfig,
        db_pool: PgPool,
        registry: Arc<ModelRegistry>,
        store: Arc<dyn ActivityLogStore>,
        actors: Arc<dyn ActorDirectory>,
    ) -> Self {
        let encoder = Arc::new(JwtEncoder::new(&config.auth));
        let decoder = Arc::new(JwtDecoder::new(&config.auth));
        let recorder = ActivityRecorder::new(store, actors);

        let users = Arc::new(UserRepository::new(db_pool.clone()));
        let activity = Arc::new(ActivityLogRepository::new(db_pool.clone()));
        let departments = Arc::new(DepartmentRepository::new(db_pool.clone()));
        let employees = Arc::new(EmployeeRepository::new(db_pool.clone()));

        let app_state = hrms_api::AppState {
            config: Arc::new(config.clone()),
            jwt_encoder: Arc::clone(&encoder),
            jwt_decoder: decoder,
            recorder: recorder.clone(),
            archive_service: Arc::new(ArchiveService::new(Arc::clone(&registry), &config.archive)),
            activity_service: Arc::new(ActivityLogService::new(activity)),
            auth_service: Arc::new(AuthService::new(
                users,
                Arc::clone(&encoder),
                recorder.clone(),
            )),
            department_service: Arc::new(DepartmentService::new(departments, Arc::clone(&registry))),
            employee_service: Arc::new(EmployeeService::new(
                employees,
                Arc::clone(&registry),
                recorder.clone(),
            )),
        };

        Self {
            router: hrms_api::build_app(app_state),
            db_pool,
            config,
            recorder,
            encoder,
            registry,
            _guard: None,
        }
    }

    /// Clean all test data from the database
    async fn clean_database(pool: &PgPool) {
        let tables = [
            "activity_logs",
            "job_postings",
            "payroll_records",
            "leave_requests",
            "employees",
            "designations",
            "departments",
            "users",
        ];

        for table in &tables {
            let query = format!("DELETE FROM {}", table);
            let _ = sqlx::query(&query).execute(pool).await;
        }
    }

    /// Create a test user and return their ID
    pub async fn create_test_user(&self, username: &str, password: &str, role: UserRole) -> Uuid {
        let hash = PasswordHasher::new()
            .hash(password)
            .expect("Failed to hash password");
        UserRepository::new(self.db_pool.clone())
            .create(
                username,
                &format!("{username} Tester"),
                Some(&format!("{username}@test.com")),
                &hash,
                role,
            )
            .await
            .expect("Failed to create test user")
            .id
    }

    /// Issue a token without going through login.
    pub fn token_for(&self, user_id: Uuid, role: UserRole) -> String {
        self.encoder
            .issue(user_id, role, "tester")
            .expect("Failed to issue token")
            .token
    }

    /// Login and return JWT access token
    pub async fn login(&self, username: &str, password: &str) -> String {
        let body = serde_json::json!({
            "username": username,
            "password": password,
        });

        let response = self
            .request("POST", "/api/auth/login", Some(body), None)
            .await;

        assert_eq!(
            response.status,
            StatusCode::OK,
            "Login failed: {:?}",
            response.body
        );

        response.body["data"]["access_token"]
            .as_str()
            .expect("No access_token in login response")
            .to_string()
    }

    /// Wait for background activity writes.
    pub async fn flush_activity(&self) {
        self.recorder.drain().await;
    }

    /// Make an HTTP request to the test app
    pub async fn request(
        &self,
        method: &str,
        path: &str,
        body: Option<Value>,
        token: Option<&str>,
    ) -> TestResponse {
        let body_str = body
            .map(|b| serde_json::to_string(&b).expect("Failed to serialize body"))
            .unwrap_or_default();

        let mut req = Request::builder()
            .method(method)
            .uri(path)
            .header("Content-Type", "application/json")
            .header("User-Agent", "hrms-integration-tests");

        if let Some(token) = token {
            req = req.header("Authorization", format!("Bearer {}", token));
        }

        let req = req
            .body(Body::from(body_str))
            .expect("Failed to build request");

        let response = self
            .router
            .clone()
            .oneshot(req)
            .await
            .expect("Failed to send request");

        let status = response.status();
        let body_bytes = axum::body::to_bytes(response.into_body(), 1024 * 1024)
            .await
            .expect("Failed to read body");

        let body: Value = serde_json::from_slice(&body_bytes).unwrap_or(Value::Null);

        TestResponse { status, body }
    }
}

/// An actor identity for in-memory directories.
pub fn actor(name: &str) -> ActorSnapshot {
    ActorSnapshot {
        id: Uuid::new_v4(),
        name: name.to_string(),
        email: Some(format!("{}@test.com", name.to_lowercase().replace(' ', "."))),
        role: "hr".to_string(),
    }
}

/// Response from a test request
#[derive(Debug)]
pub struct TestResponse {
    /// HTTP status code
    pub status: StatusCode,
    /// Parsed JSON body
    pub body: Value,
}

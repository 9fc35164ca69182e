//! HRMS Server
//!
//! Main entry point that wires all crates together and starts the server.

use std::net::SocketAddr;
use std::sync::Arc;
use std::time::Duration;

use tracing_subscriber::{EnvFilter, fmt};

use hrms_auth::{JwtDecoder, JwtEncoder};
use hrms_core::config::AppConfig;
use hrms_core::error::AppError;
use hrms_database::DatabasePool;
use hrms_database::repositories::{
    ActivityLogRepository, DepartmentRepository, EmployeeRepository, UserRepository,
};
use hrms_service::resource::{catalog, department, employee};
use hrms_service::{
    ActivityLogService, ActivityRecorder, ArchiveService, AuthService, DepartmentService,
    EmployeeService, ModelRegistry,
};

#[tokio::main]
async fn main() {
    let env = std::env::var("HRMS_ENV").unwrap_or_else(|_| "development".to_string());
    let config = match AppConfig::load(&env) {
        Ok(c) => c,
        Err(e) => {
            eprintln!("Failed to load configuration: {}", e);
            std::process::exit(1);
        }
    };

    init_logging(&config);
    tracing::info!("Loaded configuration (env: {})", env);

    if let Err(e) = run(config).await {
        tracing::error!("Server error: {}", e);
        std::process::exit(1);
    }
}

/// Initialize tracing/logging
fn init_logging(config: &AppConfig) {
    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(&config.logging.level));

    match config.logging.format.as_str() {
        "json" => {
            fmt()
                .json()
                .with_env_filter(filter)
                .with_target(true)
                .with_thread_ids(true)
                .init();
        }
        _ => {
            fmt()
                .pretty()
                .with_env_filter(filter)
                .with_target(true)
                .init();
        }
    }
}

/// Main server run function
async fn run(config: AppConfig) -> Result<(), AppError> {
    tracing::info!("Starting HRMS v{}", env!("CARGO_PKG_VERSION"));

    // ── Step 1: Database connection + migrations ─────────────────
    let db = DatabasePool::connect(&config.database).await?;
    if config.database.run_migrations {
        db.migrate().await?;
    } else {
        tracing::info!("Skipping database migrations");
    }
    let pool = db.pool().clone();

    // ── Step 2: Repositories ─────────────────────────────────────
    let user_repo = Arc::new(UserRepository::new(pool.clone()));
    let activity_repo = Arc::new(ActivityLogRepository::new(pool.clone()));
    let department_repo = Arc::new(DepartmentRepository::new(pool.clone()));
    let employee_repo = Arc::new(EmployeeRepository::new(pool.clone()));

    // ── Step 3: Archivable model registry ────────────────────────
    let registry = Arc::new(ModelRegistry::new());
    department::register(&registry, &pool)?;
    employee::register(&registry, &pool)?;
    catalog::register(&registry, &pool)?;
    tracing::info!(
        models = registry.list_archivable_models().len(),
        "Archivable models registered"
    );

    // ── Step 4: Auth + activity recorder ─────────────────────────
    let jwt_encoder = Arc::new(JwtEncoder::new(&config.auth));
    let jwt_decoder = Arc::new(JwtDecoder::new(&config.auth));
    let recorder = ActivityRecorder::new(activity_repo.clone(), user_repo.clone());

    // ── Step 5: Services ─────────────────────────────────────────
    let archive_service = Arc::new(ArchiveService::new(Arc::clone(&registry), &config.archive));
    let activity_service = Arc::new(ActivityLogService::new(activity_repo));
    let auth_service = Arc::new(AuthService::new(
        user_repo,
        Arc::clone(&jwt_encoder),
        recorder.clone(),
    ));
    let department_service = Arc::new(DepartmentService::new(department_repo, Arc::clone(&registry)));
    let employee_service = Arc::new(EmployeeService::new(
        employee_repo,
        Arc::clone(&registry),
        recorder.clone(),
    ));
    tracing::info!("Services initialized");

    // ── Step 6: Build and start HTTP server ──────────────────────
    let app_state = hrms_api::AppState {
        config: Arc::new(config.clone()),
        jwt_encoder,
        jwt_decoder,
        recorder: recorder.clone(),
        archive_service,
        activity_service,
        auth_service,
        department_service,
        employee_service,
    };
    let app = hrms_api::build_app(app_state);

    let addr = format!("{}:{}", config.server.host, config.server.port);
    let listener = tokio::net::TcpListener::bind(&addr)
        .await
        .map_err(|e| AppError::internal(format!("Failed to bind {}: {}", addr, e)))?;

    tracing::info!("HRMS server listening on {}", addr);

    // ── Step 7: Graceful shutdown ────────────────────────────────
    axum::serve(listener, app.into_make_service_with_connect_info::<SocketAddr>())
        .with_graceful_shutdown(async {
            shutdown_signal().await;
            tracing::info!("Shutdown signal received, starting graceful shutdown...");
        })
        .await
        .map_err(|e| AppError::internal(format!("Server error: {}", e)))?;

    // ── Step 8: Flush pending activity entries ───────────────────
    let pending = recorder.pending();
    tracing::info!(pending, "Waiting for pending activity entries...");
    let drain_timeout = Duration::from_secs(config.archive.audit_drain_timeout_seconds);
    if tokio::time::timeout(drain_timeout, recorder.drain())
        .await
        .is_err()
    {
        tracing::warn!(
            remaining = recorder.pending(),
            "Timed out waiting for activity entries"
        );
    }

    db.close().await;
    tracing::info!("HRMS server shut down gracefully");
    Ok(())
}

/// Wait for shutdown signal (Ctrl+C or SIGTERM)
async fn shutdown_signal() {
    let ctrl_c = async {
        if let Err(e) = tokio::signal::ctrl_c().await {
            tracing::error!("Failed to install Ctrl+C handler: {}", e);
            std::future::pending::<()>().await;
        }
    };

    #[cfg(unix)]
    let terminate = async {
        match tokio::signal::unix::signal(tokio::signal::unix::SignalKind::terminate()) {
            Ok(mut signal) => {
                signal.recv().await;
            }
            Err(e) => {
                tracing::error!("Failed to install SIGTERM handler: {}", e);
                std::future::pending::<()>().await;
            }
        }
    };

    #[cfg(not(unix))]
    let terminate = std::future::pending::<()>();

    tokio::select! {
        _ = ctrl_c => {},
        _ = terminate => {},
    }
}

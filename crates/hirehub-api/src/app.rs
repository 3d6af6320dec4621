//! Application builder — wires repositories, services, and router into
//! a running Axum server.

use std::sync::Arc;

use axum::Router;
use sqlx::PgPool;

use hirehub_auth::jwt::{JwtDecoder, JwtEncoder};
use hirehub_auth::password::{PasswordHasher, PasswordValidator};
use hirehub_core::config::AppConfig;
use hirehub_core::error::AppError;
use hirehub_database::repositories::{ApplicationRepository, JobRepository, UserRepository};
use hirehub_notify::{Mailer, Notifier};
use hirehub_service::{AdminService, ApplicationService, IdentityService, JobService};
use hirehub_storage::{LocalResumeStore, ResumePolicy, ResumeStore};

use crate::router::build_router;
use crate::state::AppState;

/// Builds the complete Axum application with all routes and middleware.
pub fn build_app(state: AppState) -> Router {
    build_router(state)
}

/// Constructs the full application state from configuration and a pool.
pub async fn build_state(config: AppConfig, db_pool: PgPool) -> Result<AppState, AppError> {
    // Repositories
    let user_repo = Arc::new(UserRepository::new(db_pool.clone()));
    let job_repo = Arc::new(JobRepository::new(db_pool.clone()));
    let application_repo = Arc::new(ApplicationRepository::new(db_pool.clone()));

    // Auth
    let password_hasher = Arc::new(PasswordHasher::new());
    let password_validator = Arc::new(PasswordValidator::new(&config.auth));
    let jwt_encoder = Arc::new(JwtEncoder::new(&config.auth));
    let jwt_decoder = Arc::new(JwtDecoder::new(&config.auth));

    // Storage
    let resume_store: Arc<dyn ResumeStore> =
        Arc::new(LocalResumeStore::new(&config.storage).await?);
    let resume_policy = ResumePolicy::new(&config.storage);

    // Notifications
    let notifier = Notifier::new(Mailer::new(config.email.clone()));

    // Services
    let identity = Arc::new(IdentityService::new(
        Arc::clone(&user_repo),
        Arc::clone(&password_hasher),
        Arc::clone(&password_validator),
        Arc::clone(&jwt_encoder),
        Arc::clone(&jwt_decoder),
        notifier.clone(),
    ));
    let jobs = Arc::new(JobService::new(
        Arc::clone(&job_repo),
        Arc::clone(&user_repo),
        notifier.clone(),
    ));
    let applications = Arc::new(ApplicationService::new(
        Arc::clone(&application_repo),
        Arc::clone(&job_repo),
        Arc::clone(&user_repo),
        resume_store,
        resume_policy,
        notifier,
    ));
    let admin = Arc::new(AdminService::new(
        Arc::clone(&user_repo),
        Arc::clone(&job_repo),
        Arc::clone(&application_repo),
    ));

    Ok(AppState {
        config: Arc::new(config),
        db_pool,
        identity,
        jobs,
        applications,
        admin,
    })
}

/// Runs the HireHub server with the given configuration and pool.
pub async fn run_server(config: AppConfig, db_pool: PgPool) -> Result<(), AppError> {
    let addr = format!("{}:{}", config.server.host, config.server.port);

    let state = build_state(config, db_pool).await?;
    let app = build_app(state);

    let listener = tokio::net::TcpListener::bind(&addr)
        .await
        .map_err(|e| AppError::internal(format!("Failed to bind {addr}: {e}")))?;

    tracing::info!("HireHub server listening on {addr}");

    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await
        .map_err(|e| AppError::internal(format!("Server error: {e}")))
}

async fn shutdown_signal() {
    tokio::signal::ctrl_c()
        .await
        .expect("Failed to install Ctrl+C handler");
}

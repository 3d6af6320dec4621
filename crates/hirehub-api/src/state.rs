//! Application state shared across all handlers.

use std::sync::Arc;

use sqlx::PgPool;

use hirehub_core::config::AppConfig;
use hirehub_service::{AdminService, ApplicationService, IdentityService, JobService};

/// Application state containing all shared dependencies.
///
/// Passed to every Axum handler via `State<AppState>`.
/// All fields are `Arc`-wrapped for cheap cloning across tasks.
#[derive(Debug, Clone)]
pub struct AppState {
    /// Application configuration.
    pub config: Arc<AppConfig>,
    /// PostgreSQL connection pool, kept for health checks.
    pub db_pool: PgPool,
    /// Registration, login, and profile self-service.
    pub identity: Arc<IdentityService>,
    /// Job posting lifecycle.
    pub jobs: Arc<JobService>,
    /// Application submission and review.
    pub applications: Arc<ApplicationService>,
    /// Admin user management and reporting.
    pub admin: Arc<AdminService>,
}

//! Route definitions for the HireHub HTTP API.
//!
//! All routes are organized by domain and mounted under `/api`.
//! The router receives `AppState` and passes it to all handlers via
//! Axum's `State` extractor.

use axum::{
    Router,
    extract::DefaultBodyLimit,
    routing::{delete, get, post, put},
};
use tower_http::cors::CorsLayer;
use tower_http::trace::TraceLayer;

use crate::handlers;
use crate::state::AppState;

/// Build the complete Axum router with all routes and middleware.
pub fn build_router(state: AppState) -> Router {
    // Body limit leaves headroom over the resume cap for the other
    // multipart fields.
    let max_body = state.config.storage.max_resume_size_bytes as usize + 64 * 1024;

    let api_routes = Router::new()
        .merge(auth_routes())
        .merge(job_routes())
        .merge(application_routes())
        .merge(user_routes())
        .merge(health_routes());

    let cors = build_cors_layer(&state);

    Router::new()
        .nest("/api", api_routes)
        .layer(DefaultBodyLimit::max(max_body))
        .layer(TraceLayer::new_for_http())
        .layer(cors)
        .with_state(state)
}

/// Auth endpoints: register, login, me, profile
fn auth_routes() -> Router<AppState> {
    Router::new()
        .route("/auth/register", post(handlers::auth::register))
        .route("/auth/login", post(handlers::auth::login))
        .route("/auth/me", get(handlers::auth::me))
        .route("/auth/profile", put(handlers::auth::update_profile))
}

/// Job listing and lifecycle endpoints
fn job_routes() -> Router<AppState> {
    Router::new()
        .route("/jobs", get(handlers::job::list_jobs))
        .route("/jobs", post(handlers::job::create_job))
        .route("/jobs/my-jobs", get(handlers::job::my_jobs))
        .route("/jobs/admin/pending", get(handlers::job::pending_jobs))
        .route("/jobs/{id}", get(handlers::job::get_job))
        .route("/jobs/{id}", put(handlers::job::update_job))
        .route("/jobs/{id}", delete(handlers::job::delete_job))
        .route("/jobs/{id}/close", put(handlers::job::close_job))
        .route("/jobs/{id}/approve", put(handlers::job::approve_job))
        .route("/jobs/{id}/reject", put(handlers::job::reject_job))
}

/// Application submission and review endpoints
fn application_routes() -> Router<AppState> {
    Router::new()
        .route("/applications", post(handlers::application::apply))
        .route(
            "/applications/my-applications",
            get(handlers::application::my_applications),
        )
        .route(
            "/applications/stats/overview",
            get(handlers::application::stats),
        )
        .route(
            "/applications/job/{job_id}",
            get(handlers::application::list_for_job),
        )
        .route(
            "/applications/{id}",
            get(handlers::application::get_application),
        )
        .route(
            "/applications/{id}/status",
            put(handlers::application::update_status),
        )
}

/// Admin user-management endpoints
fn user_routes() -> Router<AppState> {
    Router::new()
        .route("/users/all", get(handlers::user::list_users))
        .route(
            "/users/pending-employers",
            get(handlers::user::pending_employers),
        )
        .route(
            "/users/approve-employer/{id}",
            put(handlers::user::approve_employer),
        )
        .route("/users/stats", get(handlers::user::stats))
        .route("/users/{id}", delete(handlers::user::delete_user))
}

/// Health check endpoint (no auth required)
fn health_routes() -> Router<AppState> {
    Router::new().route("/health", get(handlers::health::health))
}

/// Build CORS layer from configuration
fn build_cors_layer(state: &AppState) -> CorsLayer {
    use axum::http::{HeaderValue, Method};
    use tower_http::cors::Any;

    let cors_config = &state.config.server.cors;

    let mut cors = CorsLayer::new();

    if cors_config.allowed_origins.contains(&"*".to_string()) {
        cors = cors.allow_origin(Any);
    } else {
        let origins: Vec<HeaderValue> = cors_config
            .allowed_origins
            .iter()
            .filter_map(|o| o.parse().ok())
            .collect();
        cors = cors.allow_origin(origins);
    }

    let methods: Vec<Method> = cors_config
        .allowed_methods
        .iter()
        .filter_map(|m| m.parse().ok())
        .collect();
    cors = cors.allow_methods(methods);

    if cors_config.allowed_headers.contains(&"*".to_string()) {
        cors = cors.allow_headers(Any);
    }

    cors.max_age(std::time::Duration::from_secs(cors_config.max_age_seconds))
}

//! Health check handler.

use axum::Json;
use axum::extract::State;

use crate::dto::response::{ApiResponse, HealthResponse};
use crate::state::AppState;

/// GET /api/health
pub async fn health(State(state): State<AppState>) -> Json<ApiResponse<HealthResponse>> {
    let database = match sqlx::query("SELECT 1").execute(&state.db_pool).await {
        Ok(_) => "connected",
        Err(_) => "unavailable",
    };

    Json(ApiResponse::ok(HealthResponse {
        status: if database == "connected" { "ok" } else { "degraded" }.to_string(),
        database: database.to_string(),
    }))
}

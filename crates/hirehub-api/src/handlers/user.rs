//! Admin user-management handlers.

use axum::Json;
use axum::extract::{Path, Query, State};
use uuid::Uuid;

use hirehub_core::types::pagination::{PageRequest, PageResponse};
use hirehub_service::admin::OverviewStats;

use crate::dto::request::UserListQuery;
use crate::dto::response::{ApiResponse, MessageResponse, UserResponse};
use crate::error::ApiError;
use crate::extractors::AuthUser;
use crate::state::AppState;

/// GET /api/users/all
pub async fn list_users(
    State(state): State<AppState>,
    auth: AuthUser,
    Query(query): Query<UserListQuery>,
) -> Result<Json<ApiResponse<PageResponse<UserResponse>>>, ApiError> {
    let page = PageRequest::new(query.page.unwrap_or(1), query.page_size.unwrap_or(10));
    let result = state.admin.list_users(&auth.actor, query.role, &page).await?;
    Ok(Json(ApiResponse::ok(result.map(UserResponse::from))))
}

/// GET /api/users/pending-employers
pub async fn pending_employers(
    State(state): State<AppState>,
    auth: AuthUser,
) -> Result<Json<ApiResponse<Vec<UserResponse>>>, ApiError> {
    let users = state.admin.pending_employers(&auth.actor).await?;
    Ok(Json(ApiResponse::ok(
        users.into_iter().map(UserResponse::from).collect(),
    )))
}

/// PUT /api/users/approve-employer/{id}
pub async fn approve_employer(
    State(state): State<AppState>,
    auth: AuthUser,
    Path(id): Path<Uuid>,
) -> Result<Json<ApiResponse<UserResponse>>, ApiError> {
    let user = state.admin.approve_employer(&auth.actor, id).await?;
    Ok(Json(ApiResponse::ok(user.into())))
}

/// DELETE /api/users/{id}
pub async fn delete_user(
    State(state): State<AppState>,
    auth: AuthUser,
    Path(id): Path<Uuid>,
) -> Result<Json<ApiResponse<MessageResponse>>, ApiError> {
    state.admin.delete_user(&auth.actor, id).await?;
    Ok(Json(ApiResponse::ok(MessageResponse {
        message: "User deleted".to_string(),
    })))
}

/// GET /api/users/stats
pub async fn stats(
    State(state): State<AppState>,
    auth: AuthUser,
) -> Result<Json<ApiResponse<OverviewStats>>, ApiError> {
    let stats = state.admin.overview_stats(&auth.actor).await?;
    Ok(Json(ApiResponse::ok(stats)))
}

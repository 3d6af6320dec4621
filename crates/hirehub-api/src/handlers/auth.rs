//! Auth handlers — register, login, me, profile.

use axum::Json;
use axum::extract::State;
use validator::Validate;

use hirehub_service::identity::UpdateProfileRequest;

use crate::dto::request::{LoginRequest, RegisterRequest};
use crate::dto::response::{ApiResponse, AuthResponse, UserResponse};
use crate::error::ApiError;
use crate::extractors::AuthUser;
use crate::state::AppState;

/// POST /api/auth/register
pub async fn register(
    State(state): State<AppState>,
    Json(req): Json<RegisterRequest>,
) -> Result<Json<ApiResponse<AuthResponse>>, ApiError> {
    req.validate()?;
    let session = state.identity.register(req.into()).await?;
    Ok(Json(ApiResponse::ok(session.into())))
}

/// POST /api/auth/login
pub async fn login(
    State(state): State<AppState>,
    Json(req): Json<LoginRequest>,
) -> Result<Json<ApiResponse<AuthResponse>>, ApiError> {
    req.validate()?;
    let session = state.identity.login(&req.email, &req.password).await?;
    Ok(Json(ApiResponse::ok(session.into())))
}

/// GET /api/auth/me
pub async fn me(auth: AuthUser) -> Json<ApiResponse<UserResponse>> {
    Json(ApiResponse::ok(auth.user.into()))
}

/// PUT /api/auth/profile
pub async fn update_profile(
    State(state): State<AppState>,
    auth: AuthUser,
    Json(req): Json<UpdateProfileRequest>,
) -> Result<Json<ApiResponse<UserResponse>>, ApiError> {
    let user = state.identity.update_profile(&auth.actor, req).await?;
    Ok(Json(ApiResponse::ok(user.into())))
}

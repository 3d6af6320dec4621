//! Job handlers — public listing plus employer and admin lifecycle.

use axum::Json;
use axum::extract::{Path, Query, State};
use uuid::Uuid;

use hirehub_core::types::pagination::{PageRequest, PageResponse};
use hirehub_entity::job::{CreateJob, UpdateJob};

use crate::dto::request::JobQuery;
use crate::dto::response::{ApiResponse, JobResponse, MessageResponse};
use crate::error::ApiError;
use crate::extractors::{AuthUser, MaybeAuthUser};
use crate::state::AppState;

/// GET /api/jobs
pub async fn list_jobs(
    State(state): State<AppState>,
    Query(query): Query<JobQuery>,
) -> Result<Json<ApiResponse<PageResponse<JobResponse>>>, ApiError> {
    let filter = query.filter();
    let page = PageRequest::new(query.page.unwrap_or(1), query.page_size.unwrap_or(10));
    let result = state.jobs.list_open_jobs(&filter, &page).await?;
    Ok(Json(ApiResponse::ok(result.map(JobResponse::from))))
}

/// GET /api/jobs/{id}
pub async fn get_job(
    State(state): State<AppState>,
    MaybeAuthUser(auth): MaybeAuthUser,
    Path(id): Path<Uuid>,
) -> Result<Json<ApiResponse<JobResponse>>, ApiError> {
    let actor = auth.as_ref().map(|a| &a.actor);
    let job = state.jobs.get_job(actor, id).await?;
    Ok(Json(ApiResponse::ok(job.into())))
}

/// POST /api/jobs
pub async fn create_job(
    State(state): State<AppState>,
    auth: AuthUser,
    Json(req): Json<CreateJob>,
) -> Result<Json<ApiResponse<JobResponse>>, ApiError> {
    let job = state.jobs.create_job(&auth.actor, req).await?;
    Ok(Json(ApiResponse::ok(job.into())))
}

/// PUT /api/jobs/{id}
pub async fn update_job(
    State(state): State<AppState>,
    auth: AuthUser,
    Path(id): Path<Uuid>,
    Json(req): Json<UpdateJob>,
) -> Result<Json<ApiResponse<JobResponse>>, ApiError> {
    let job = state.jobs.update_job(&auth.actor, id, req).await?;
    Ok(Json(ApiResponse::ok(job.into())))
}

/// DELETE /api/jobs/{id}
pub async fn delete_job(
    State(state): State<AppState>,
    auth: AuthUser,
    Path(id): Path<Uuid>,
) -> Result<Json<ApiResponse<MessageResponse>>, ApiError> {
    state.jobs.delete_job(&auth.actor, id).await?;
    Ok(Json(ApiResponse::ok(MessageResponse {
        message: "Job deleted".to_string(),
    })))
}

/// PUT /api/jobs/{id}/close
pub async fn close_job(
    State(state): State<AppState>,
    auth: AuthUser,
    Path(id): Path<Uuid>,
) -> Result<Json<ApiResponse<JobResponse>>, ApiError> {
    let job = state.jobs.close_job(&auth.actor, id).await?;
    Ok(Json(ApiResponse::ok(job.into())))
}

/// GET /api/jobs/my-jobs
pub async fn my_jobs(
    State(state): State<AppState>,
    auth: AuthUser,
) -> Result<Json<ApiResponse<Vec<JobResponse>>>, ApiError> {
    let jobs = state.jobs.my_jobs(&auth.actor).await?;
    Ok(Json(ApiResponse::ok(
        jobs.into_iter().map(JobResponse::from).collect(),
    )))
}

/// GET /api/jobs/admin/pending
pub async fn pending_jobs(
    State(state): State<AppState>,
    auth: AuthUser,
) -> Result<Json<ApiResponse<Vec<JobResponse>>>, ApiError> {
    let jobs = state.jobs.pending_jobs(&auth.actor).await?;
    Ok(Json(ApiResponse::ok(
        jobs.into_iter().map(JobResponse::from).collect(),
    )))
}

/// PUT /api/jobs/{id}/approve
pub async fn approve_job(
    State(state): State<AppState>,
    auth: AuthUser,
    Path(id): Path<Uuid>,
) -> Result<Json<ApiResponse<JobResponse>>, ApiError> {
    let job = state.jobs.approve_job(&auth.actor, id).await?;
    Ok(Json(ApiResponse::ok(job.into())))
}

/// PUT /api/jobs/{id}/reject
pub async fn reject_job(
    State(state): State<AppState>,
    auth: AuthUser,
    Path(id): Path<Uuid>,
) -> Result<Json<ApiResponse<JobResponse>>, ApiError> {
    let job = state.jobs.reject_job(&auth.actor, id).await?;
    Ok(Json(ApiResponse::ok(job.into())))
}

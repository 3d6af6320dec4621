//! Application handlers — multipart submission, listings, and review.

use axum::Json;
use axum::extract::{Multipart, Path, State};
use bytes::Bytes;
use uuid::Uuid;

use hirehub_core::error::AppError;
use hirehub_database::repositories::application::ApplicationCounts;
use hirehub_service::application::ResumeUpload;

use crate::dto::request::UpdateStatusRequest;
use crate::dto::response::{
    ApiResponse, ApplicationResponse, ApplicationWithApplicantResponse,
    ApplicationWithJobResponse,
};
use crate::error::ApiError;
use crate::extractors::AuthUser;
use crate::state::AppState;

/// POST /api/applications
///
/// Multipart form: `job_id` (text), `resume` (file), `cover_letter`
/// (text, optional).
pub async fn apply(
    State(state): State<AppState>,
    auth: AuthUser,
    mut multipart: Multipart,
) -> Result<Json<ApiResponse<ApplicationResponse>>, ApiError> {
    let mut job_id: Option<Uuid> = None;
    let mut cover_letter = String::new();
    let mut filename: Option<String> = None;
    let mut content_type: Option<String> = None;
    let mut content: Option<Bytes> = None;

    while let Some(field) = multipart
        .next_field()
        .await
        .map_err(|e| AppError::validation(format!("Multipart error: {e}")))?
    {
        let name = field.name().unwrap_or("").to_string();
        match name.as_str() {
            "job_id" => {
                let text = field
                    .text()
                    .await
                    .map_err(|e| AppError::validation(format!("Read error: {e}")))?;
                job_id = Some(
                    Uuid::parse_str(&text).map_err(|_| AppError::validation("Invalid job_id"))?,
                );
            }
            "cover_letter" => {
                cover_letter = field
                    .text()
                    .await
                    .map_err(|e| AppError::validation(format!("Read error: {e}")))?;
            }
            "resume" => {
                filename = field.file_name().map(String::from);
                content_type = field.content_type().map(String::from);
                content = Some(
                    field
                        .bytes()
                        .await
                        .map_err(|e| AppError::validation(format!("Read error: {e}")))?,
                );
            }
            _ => {}
        }
    }

    let job_id = job_id.ok_or_else(|| AppError::validation("job_id is required"))?;
    let content = content.ok_or_else(|| AppError::validation("Resume file is required"))?;
    let filename = filename.ok_or_else(|| AppError::validation("Resume filename is missing"))?;

    let resume = ResumeUpload {
        filename,
        content_type,
        content,
    };

    let application = state
        .applications
        .apply(&auth.actor, job_id, resume, cover_letter)
        .await?;
    Ok(Json(ApiResponse::ok(application.into())))
}

/// GET /api/applications/my-applications
pub async fn my_applications(
    State(state): State<AppState>,
    auth: AuthUser,
) -> Result<Json<ApiResponse<Vec<ApplicationWithJobResponse>>>, ApiError> {
    let applications = state.applications.my_applications(&auth.actor).await?;
    Ok(Json(ApiResponse::ok(
        applications
            .into_iter()
            .map(ApplicationWithJobResponse::from)
            .collect(),
    )))
}

/// GET /api/applications/job/{job_id}
pub async fn list_for_job(
    State(state): State<AppState>,
    auth: AuthUser,
    Path(job_id): Path<Uuid>,
) -> Result<Json<ApiResponse<Vec<ApplicationWithApplicantResponse>>>, ApiError> {
    let applications = state.applications.list_for_job(&auth.actor, job_id).await?;
    Ok(Json(ApiResponse::ok(
        applications
            .into_iter()
            .map(ApplicationWithApplicantResponse::from)
            .collect(),
    )))
}

/// GET /api/applications/{id}
pub async fn get_application(
    State(state): State<AppState>,
    auth: AuthUser,
    Path(id): Path<Uuid>,
) -> Result<Json<ApiResponse<ApplicationResponse>>, ApiError> {
    let application = state.applications.get_application(&auth.actor, id).await?;
    Ok(Json(ApiResponse::ok(application.into())))
}

/// PUT /api/applications/{id}/status
pub async fn update_status(
    State(state): State<AppState>,
    auth: AuthUser,
    Path(id): Path<Uuid>,
    Json(req): Json<UpdateStatusRequest>,
) -> Result<Json<ApiResponse<ApplicationResponse>>, ApiError> {
    let application = state
        .applications
        .update_status(&auth.actor, id, req.status, req.notes)
        .await?;
    Ok(Json(ApiResponse::ok(application.into())))
}

/// GET /api/applications/stats/overview
pub async fn stats(
    State(state): State<AppState>,
    auth: AuthUser,
) -> Result<Json<ApiResponse<ApplicationCounts>>, ApiError> {
    let counts = state.applications.stats(&auth.actor).await?;
    Ok(Json(ApiResponse::ok(counts)))
}

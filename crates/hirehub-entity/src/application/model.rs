//! Job application entity model.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use uuid::Uuid;

use super::status::ApplicationStatus;

/// An applicant's application to a job.
///
/// At most one application may exist per `(job_id, applicant_id)` pair;
/// the database enforces this with a unique constraint.
#[derive(Debug, Clone, Serialize, Deserialize, FromRow)]
pub struct Application {
    /// Unique application identifier.
    pub id: Uuid,
    /// The job applied to.
    pub job_id: Uuid,
    /// The applicant.
    pub applicant_id: Uuid,
    /// Public URL of the uploaded resume blob.
    pub resume_url: String,
    /// Optional cover letter text.
    pub cover_letter: String,
    /// Review status.
    pub status: ApplicationStatus,
    /// When the application was submitted.
    pub applied_at: DateTime<Utc>,
    /// When the status first changed off `pending`; null until then.
    pub reviewed_at: Option<DateTime<Utc>>,
    /// Employer/admin free-text notes.
    pub notes: String,
}

/// Data required to submit a new application.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CreateApplication {
    /// The job applied to.
    pub job_id: Uuid,
    /// The applicant.
    pub applicant_id: Uuid,
    /// Public URL of the stored resume.
    pub resume_url: String,
    /// Optional cover letter text.
    pub cover_letter: String,
}

//! Application repository implementation.

use chrono::{DateTime, Utc};
use sqlx::PgPool;
use uuid::Uuid;

use hirehub_core::error::{AppError, ErrorKind};
use hirehub_core::result::AppResult;
use hirehub_entity::application::model::CreateApplication;
use hirehub_entity::application::{Application, ApplicationStatus};

/// Aggregate application counts by status.
#[derive(Debug, Clone, serde::Serialize, sqlx::FromRow)]
pub struct ApplicationCounts {
    /// All applications.
    pub total: i64,
    /// Not yet reviewed.
    pub pending: i64,
    /// Under review.
    pub reviewing: i64,
    /// Shortlisted.
    pub shortlisted: i64,
    /// Accepted.
    pub accepted: i64,
    /// Rejected.
    pub rejected: i64,
}

/// An application joined with the applicant's public contact fields,
/// for employer review listings.
#[derive(Debug, Clone, sqlx::FromRow)]
pub struct ApplicationWithApplicant {
    /// The application itself.
    #[sqlx(flatten)]
    pub application: Application,
    /// Applicant display name.
    pub applicant_name: String,
    /// Applicant email address.
    pub applicant_email: String,
}

/// Repository for job application CRUD and query operations.
#[derive(Debug, Clone)]
pub struct ApplicationRepository {
    pool: PgPool,
}

impl ApplicationRepository {
    /// Create a new application repository.
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }

    /// Find an application by primary key.
    pub async fn find_by_id(&self, id: Uuid) -> AppResult<Option<Application>> {
        sqlx::query_as::<_, Application>("SELECT * FROM applications WHERE id = $1")
            .bind(id)
            .fetch_optional(&self.pool)
            .await
            .map_err(|e| {
                AppError::with_source(ErrorKind::Database, "Failed to find application by id", e)
            })
    }

    /// Submit a new application.
    ///
    /// The `(job_id, applicant_id)` unique constraint makes the duplicate
    /// check atomic with the insert: under concurrent submissions for the
    /// same pair, exactly one insert wins and the rest surface Conflict.
    pub async fn create(&self, data: &CreateApplication) -> AppResult<Application> {
        sqlx::query_as::<_, Application>(
            "INSERT INTO applications (job_id, applicant_id, resume_url, cover_letter) \
             VALUES ($1, $2, $3, $4) \
             RETURNING *",
        )
        .bind(data.job_id)
        .bind(data.applicant_id)
        .bind(&data.resume_url)
        .bind(&data.cover_letter)
        .fetch_one(&self.pool)
        .await
        .map_err(|e| match e {
            sqlx::Error::Database(ref db_err)
                if db_err.constraint() == Some("applications_job_id_applicant_id_key") =>
            {
                AppError::conflict("You have already applied for this job")
            }
            _ => AppError::with_source(ErrorKind::Database, "Failed to create application", e),
        })
    }

    /// Whether the applicant has already applied to the job.
    pub async fn exists(&self, job_id: Uuid, applicant_id: Uuid) -> AppResult<bool> {
        sqlx::query_scalar::<_, bool>(
            "SELECT EXISTS (SELECT 1 FROM applications WHERE job_id = $1 AND applicant_id = $2)",
        )
        .bind(job_id)
        .bind(applicant_id)
        .fetch_one(&self.pool)
        .await
        .map_err(|e| {
            AppError::with_source(ErrorKind::Database, "Failed to check for application", e)
        })
    }

    /// List an applicant's applications, most recent first.
    pub async fn find_by_applicant(&self, applicant_id: Uuid) -> AppResult<Vec<Application>> {
        sqlx::query_as::<_, Application>(
            "SELECT * FROM applications WHERE applicant_id = $1 ORDER BY applied_at DESC",
        )
        .bind(applicant_id)
        .fetch_all(&self.pool)
        .await
        .map_err(|e| {
            AppError::with_source(ErrorKind::Database, "Failed to list applications", e)
        })
    }

    /// List applications for a job with applicant contact info, most
    /// recent first. Applications from since-deleted applicants cascade
    /// away with the user row, so an inner join loses nothing.
    pub async fn find_by_job(&self, job_id: Uuid) -> AppResult<Vec<ApplicationWithApplicant>> {
        sqlx::query_as::<_, ApplicationWithApplicant>(
            "SELECT a.*, u.name AS applicant_name, u.email AS applicant_email \
             FROM applications a \
             JOIN users u ON u.id = a.applicant_id \
             WHERE a.job_id = $1 ORDER BY a.applied_at DESC",
        )
        .bind(job_id)
        .fetch_all(&self.pool)
        .await
        .map_err(|e| {
            AppError::with_source(ErrorKind::Database, "Failed to list job applications", e)
        })
    }

    /// Update an application's review status and notes.
    pub async fn update_status(
        &self,
        id: Uuid,
        status: ApplicationStatus,
        notes: &str,
        reviewed_at: DateTime<Utc>,
    ) -> AppResult<Application> {
        sqlx::query_as::<_, Application>(
            "UPDATE applications SET status = $2, notes = $3, reviewed_at = $4 \
             WHERE id = $1 RETURNING *",
        )
        .bind(id)
        .bind(status)
        .bind(notes)
        .bind(reviewed_at)
        .fetch_optional(&self.pool)
        .await
        .map_err(|e| {
            AppError::with_source(ErrorKind::Database, "Failed to update application status", e)
        })?
        .ok_or_else(|| AppError::not_found(format!("Application {id} not found")))
    }

    /// Aggregate application counts by status.
    pub async fn counts(&self) -> AppResult<ApplicationCounts> {
        sqlx::query_as::<_, ApplicationCounts>(
            "SELECT COUNT(*) AS total, \
                    COUNT(*) FILTER (WHERE status = 'pending') AS pending, \
                    COUNT(*) FILTER (WHERE status = 'reviewing') AS reviewing, \
                    COUNT(*) FILTER (WHERE status = 'shortlisted') AS shortlisted, \
                    COUNT(*) FILTER (WHERE status = 'accepted') AS accepted, \
                    COUNT(*) FILTER (WHERE status = 'rejected') AS rejected \
             FROM applications",
        )
        .fetch_one(&self.pool)
        .await
        .map_err(|e| {
            AppError::with_source(ErrorKind::Database, "Failed to count applications", e)
        })
    }
}

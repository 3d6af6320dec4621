//! Application operations — submission, listing, and status review.

use std::sync::Arc;

use bytes::Bytes;
use chrono::Utc;
use serde::Serialize;
use tracing::info;
use uuid::Uuid;

use hirehub_auth::policy::{self, Actor};
use hirehub_core::error::AppError;
use hirehub_core::result::AppResult;
use hirehub_database::repositories::application::ApplicationCounts;
use hirehub_database::repositories::{
    ApplicationRepository, ApplicationWithApplicant, JobRepository, UserRepository,
};
use hirehub_entity::application::model::CreateApplication;
use hirehub_entity::application::{Application, ApplicationStatus};
use hirehub_entity::job::Job;
use hirehub_entity::user::UserRole;
use hirehub_notify::Notifier;
use hirehub_storage::{ResumePolicy, ResumeStore};

/// A resume file as received from the client.
#[derive(Debug, Clone)]
pub struct ResumeUpload {
    /// Original filename, used for the extension check.
    pub filename: String,
    /// Declared content type, if any.
    pub content_type: Option<String>,
    /// File bytes.
    pub content: Bytes,
}

/// An application joined with its parent job, for applicant-facing lists.
#[derive(Debug, Clone, Serialize)]
pub struct ApplicationWithJob {
    /// The application.
    pub application: Application,
    /// The job applied to.
    pub job: Job,
}

/// Handles application submission and review.
#[derive(Clone)]
pub struct ApplicationService {
    /// Application repository.
    applications: Arc<ApplicationRepository>,
    /// Job repository.
    jobs: Arc<JobRepository>,
    /// User repository, for notifications.
    users: Arc<UserRepository>,
    /// Resume blob store.
    store: Arc<dyn ResumeStore>,
    /// Resume upload policy.
    resume_policy: ResumePolicy,
    /// Notification sink.
    notifier: Notifier,
}

impl ApplicationService {
    /// Creates a new application service.
    pub fn new(
        applications: Arc<ApplicationRepository>,
        jobs: Arc<JobRepository>,
        users: Arc<UserRepository>,
        store: Arc<dyn ResumeStore>,
        resume_policy: ResumePolicy,
        notifier: Notifier,
    ) -> Self {
        Self {
            applications,
            jobs,
            users,
            store,
            resume_policy,
            notifier,
        }
    }

    /// Submits an application to an open job.
    ///
    /// Duplicates are rejected before the resume is stored, so a repeat
    /// submission leaves no stray blob behind; the `(job_id,
    /// applicant_id)` unique constraint still turns a concurrent
    /// duplicate into a Conflict at insert time. The job's applications
    /// counter is bumped atomically after the insert succeeds.
    pub async fn apply(
        &self,
        actor: &Actor,
        job_id: Uuid,
        resume: ResumeUpload,
        cover_letter: String,
    ) -> AppResult<Application> {
        policy::require_role(actor, &[UserRole::Applicant])?;

        let job = self
            .jobs
            .find_by_id(job_id)
            .await?
            .ok_or_else(|| AppError::not_found("Job not found"))?;

        if !job.status.accepts_applications() {
            return Err(AppError::validation(
                "This job is not accepting applications",
            ));
        }
        if let Some(deadline) = job.application_deadline {
            if deadline < Utc::now().date_naive() {
                return Err(AppError::validation("The application deadline has passed"));
            }
        }

        if self.applications.exists(job_id, actor.user_id).await? {
            return Err(AppError::conflict("You have already applied for this job"));
        }

        self.resume_policy.validate(
            &resume.filename,
            resume.content_type.as_deref(),
            resume.content.len() as u64,
        )?;
        let resume_url = self.store.store(&resume.filename, resume.content).await?;

        let application = self
            .applications
            .create(&CreateApplication {
                job_id,
                applicant_id: actor.user_id,
                resume_url,
                cover_letter,
            })
            .await?;

        let count = self.jobs.increment_applications(job_id).await?;
        info!(
            application_id = %application.id,
            job_id = %job_id,
            applications_count = count,
            "Application submitted"
        );

        if let Some(applicant) = self.users.find_by_id(actor.user_id).await? {
            self.notifier.application_received(&applicant, &job);
        }

        Ok(application)
    }

    /// Lists the acting applicant's applications with their jobs.
    ///
    /// Applications whose job has since been deleted are skipped rather
    /// than surfaced as errors.
    pub async fn my_applications(&self, actor: &Actor) -> AppResult<Vec<ApplicationWithJob>> {
        policy::require_role(actor, &[UserRole::Applicant])?;

        let applications = self.applications.find_by_applicant(actor.user_id).await?;
        let mut result = Vec::with_capacity(applications.len());
        for application in applications {
            if let Some(job) = self.jobs.find_by_id(application.job_id).await? {
                result.push(ApplicationWithJob { application, job });
            }
        }
        Ok(result)
    }

    /// Lists all applications for a job with applicant contact info.
    /// Job owner or admin.
    pub async fn list_for_job(
        &self,
        actor: &Actor,
        job_id: Uuid,
    ) -> AppResult<Vec<ApplicationWithApplicant>> {
        let job = self
            .jobs
            .find_by_id(job_id)
            .await?
            .ok_or_else(|| AppError::not_found("Job not found"))?;
        policy::require_job_owner_or_admin(actor, job.posted_by)?;

        self.applications.find_by_job(job_id).await
    }

    /// Fetches one application. Visible to the applicant, the job owner,
    /// and admins.
    pub async fn get_application(&self, actor: &Actor, id: Uuid) -> AppResult<Application> {
        let application = self.find_application(id).await?;

        match self.jobs.find_by_id(application.job_id).await? {
            Some(job) => {
                policy::require_application_party(actor, application.applicant_id, job.posted_by)?
            }
            // Job deleted: only the applicant and admins retain access.
            None => policy::require_application_party(
                actor,
                application.applicant_id,
                application.applicant_id,
            )?,
        }

        Ok(application)
    }

    /// Moves an application to a new review status. Job owner or admin.
    ///
    /// Terminal statuses are frozen and no status may return to
    /// `pending`. `reviewed_at` is set on the first transition and kept
    /// afterwards; notes replace the previous notes when provided.
    pub async fn update_status(
        &self,
        actor: &Actor,
        id: Uuid,
        next: ApplicationStatus,
        notes: Option<String>,
    ) -> AppResult<Application> {
        let application = self.find_application(id).await?;

        let job = self
            .jobs
            .find_by_id(application.job_id)
            .await?
            .ok_or_else(|| AppError::not_found("Job no longer exists"))?;
        policy::require_job_owner_or_admin(actor, job.posted_by)?;

        if !application.status.can_transition_to(next) {
            return Err(if application.status.is_terminal() {
                AppError::validation("Application has already been finalized")
            } else {
                AppError::validation("Application cannot return to pending")
            });
        }

        let notes = notes.unwrap_or_else(|| application.notes.clone());
        let reviewed_at = application.reviewed_at.unwrap_or_else(Utc::now);
        let updated = self
            .applications
            .update_status(id, next, &notes, reviewed_at)
            .await?;

        info!(
            application_id = %id,
            status = %next,
            reviewed_by = %actor.user_id,
            "Application status updated"
        );

        if let Some(applicant) = self.users.find_by_id(updated.applicant_id).await? {
            self.notifier
                .application_status_changed(&applicant, &job, next, &updated.notes);
        }

        Ok(updated)
    }

    /// Platform-wide application counts by status. Admin only.
    pub async fn stats(&self, actor: &Actor) -> AppResult<ApplicationCounts> {
        policy::require_role(actor, &[UserRole::Admin])?;
        self.applications.counts().await
    }

    async fn find_application(&self, id: Uuid) -> AppResult<Application> {
        self.applications
            .find_by_id(id)
            .await?
            .ok_or_else(|| AppError::not_found("Application not found"))
    }
}

impl std::fmt::Debug for ApplicationService {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ApplicationService").finish_non_exhaustive()
    }
}

//! Job posting operations.

use std::sync::Arc;

use tracing::info;
use uuid::Uuid;

use hirehub_auth::policy::{self, Actor};
use hirehub_core::error::AppError;
use hirehub_core::result::AppResult;
use hirehub_core::types::pagination::{PageRequest, PageResponse};
use hirehub_database::repositories::{JobRepository, JobWithPoster, UserRepository};
use hirehub_entity::job::{CreateJob, Job, JobFilter, JobStatus, UpdateJob};
use hirehub_entity::user::UserRole;
use hirehub_notify::Notifier;

/// Handles the job posting lifecycle.
///
/// Every job starts `pending`. An admin moves it to `open` (approve) or
/// `closed` (reject); the owning employer may close it at any time.
#[derive(Debug, Clone)]
pub struct JobService {
    /// Job repository.
    jobs: Arc<JobRepository>,
    /// User repository, for company lookup and notifications.
    users: Arc<UserRepository>,
    /// Notification sink.
    notifier: Notifier,
}

impl JobService {
    /// Creates a new job service.
    pub fn new(jobs: Arc<JobRepository>, users: Arc<UserRepository>, notifier: Notifier) -> Self {
        Self {
            jobs,
            users,
            notifier,
        }
    }

    /// Posts a new job on behalf of an approved employer.
    ///
    /// The company name is copied from the employer's profile at this
    /// moment and never resynced afterwards.
    pub async fn create_job(&self, actor: &Actor, data: CreateJob) -> AppResult<Job> {
        policy::require_role(actor, &[UserRole::Employer])?;
        policy::require_approved(actor)?;
        validate_job_fields(&data)?;

        let employer = self
            .users
            .find_by_id(actor.user_id)
            .await?
            .ok_or_else(|| AppError::not_found("Employer account not found"))?;
        let company = employer
            .company
            .filter(|c| !c.trim().is_empty())
            .ok_or_else(|| AppError::validation("Employer profile has no company name"))?;

        let job = self.jobs.create(actor.user_id, &company, &data).await?;
        info!(job_id = %job.id, employer_id = %actor.user_id, "Job posted, awaiting review");
        Ok(job)
    }

    /// Lists open jobs matching the filters. Public, no authentication.
    pub async fn list_open_jobs(
        &self,
        filter: &JobFilter,
        page: &PageRequest,
    ) -> AppResult<PageResponse<JobWithPoster>> {
        self.jobs.list_open(filter, page).await
    }

    /// Fetches a single job with poster info.
    ///
    /// Open jobs are public. Pending and closed jobs are visible only to
    /// the owning employer and admins.
    pub async fn get_job(&self, actor: Option<&Actor>, job_id: Uuid) -> AppResult<JobWithPoster> {
        let job = self
            .jobs
            .find_with_poster(job_id)
            .await?
            .ok_or_else(|| AppError::not_found("Job not found"))?;

        if job.job.status != JobStatus::Open {
            let actor = actor.ok_or_else(|| AppError::not_found("Job not found"))?;
            policy::require_job_owner_or_admin(actor, job.job.posted_by)
                .map_err(|_| AppError::not_found("Job not found"))?;
        }

        Ok(job)
    }

    /// Applies a partial update to a job. Owner only.
    pub async fn update_job(&self, actor: &Actor, job_id: Uuid, data: UpdateJob) -> AppResult<Job> {
        policy::require_role(actor, &[UserRole::Employer, UserRole::Admin])?;
        policy::require_approved(actor)?;

        let mut job = self.find_job(job_id).await?;
        policy::require_job_owner_or_admin(actor, job.posted_by)?;

        if let Some(title) = data.title {
            job.title = title;
        }
        if let Some(description) = data.description {
            job.description = description;
        }
        if let Some(requirements) = data.requirements {
            job.requirements = requirements;
        }
        if let Some(location) = data.location {
            job.location = location;
        }
        if let Some(job_type) = data.job_type {
            job.job_type = job_type;
        }
        if let Some(category) = data.category {
            job.category = category;
        }
        if let Some(salary) = data.salary {
            salary.validate()?;
            job.salary_min = salary.min;
            job.salary_max = salary.max;
            job.salary_currency = salary.currency;
        }
        if let Some(level) = data.experience_level {
            job.experience_level = level;
        }
        if let Some(skills) = data.skills {
            job.skills = skills;
        }
        if let Some(deadline) = data.application_deadline {
            job.application_deadline = Some(deadline);
        }

        if job.title.trim().is_empty() || job.description.trim().is_empty() {
            return Err(AppError::validation("Title and description are required"));
        }

        job.search_text = Job::build_search_text(&job.title, &job.company, &job.description);

        let job = self.jobs.save(&job).await?;
        info!(job_id = %job.id, "Job updated");
        Ok(job)
    }

    /// Deletes a job. Owner or admin.
    pub async fn delete_job(&self, actor: &Actor, job_id: Uuid) -> AppResult<()> {
        let job = self.find_job(job_id).await?;
        policy::require_job_owner_or_admin(actor, job.posted_by)?;

        self.jobs.delete(job_id).await?;
        info!(job_id = %job_id, deleted_by = %actor.user_id, "Job deleted");
        Ok(())
    }

    /// Closes a job to further applications. Owner or admin.
    pub async fn close_job(&self, actor: &Actor, job_id: Uuid) -> AppResult<Job> {
        let job = self.find_job(job_id).await?;
        policy::require_job_owner_or_admin(actor, job.posted_by)?;

        if job.status == JobStatus::Closed {
            return Err(AppError::validation("Job is already closed"));
        }

        let job = self.jobs.update_status(job_id, JobStatus::Closed).await?;
        info!(job_id = %job_id, "Job closed");
        Ok(job)
    }

    /// Approves a job, making it publicly visible. Admin only.
    ///
    /// Also reopens a closed job, which covers the case of an admin
    /// reversing an earlier rejection.
    pub async fn approve_job(&self, actor: &Actor, job_id: Uuid) -> AppResult<Job> {
        policy::require_role(actor, &[UserRole::Admin])?;

        let job = self.find_job(job_id).await?;
        if job.status == JobStatus::Open {
            return Err(AppError::validation("Job is already open"));
        }

        let job = self.jobs.update_status(job_id, JobStatus::Open).await?;
        info!(job_id = %job_id, approved_by = %actor.user_id, "Job approved");

        if let Some(employer) = self.users.find_by_id(job.posted_by).await? {
            self.notifier.job_approved(&employer, &job);
        }

        Ok(job)
    }

    /// Rejects a job, closing it regardless of its current status.
    /// Admin only.
    pub async fn reject_job(&self, actor: &Actor, job_id: Uuid) -> AppResult<Job> {
        policy::require_role(actor, &[UserRole::Admin])?;

        let job = self.find_job(job_id).await?;
        if job.status == JobStatus::Closed {
            return Err(AppError::validation("Job is already closed"));
        }

        let job = self.jobs.update_status(job_id, JobStatus::Closed).await?;
        info!(job_id = %job_id, rejected_by = %actor.user_id, "Job rejected");
        Ok(job)
    }

    /// Lists all of the acting employer's jobs, any status.
    pub async fn my_jobs(&self, actor: &Actor) -> AppResult<Vec<Job>> {
        policy::require_role(actor, &[UserRole::Employer])?;
        self.jobs.find_by_employer(actor.user_id).await
    }

    /// Lists jobs awaiting review, oldest first, with poster info.
    /// Admin only.
    pub async fn pending_jobs(&self, actor: &Actor) -> AppResult<Vec<JobWithPoster>> {
        policy::require_role(actor, &[UserRole::Admin])?;
        self.jobs.find_pending().await
    }

    async fn find_job(&self, job_id: Uuid) -> AppResult<Job> {
        self.jobs
            .find_by_id(job_id)
            .await?
            .ok_or_else(|| AppError::not_found("Job not found"))
    }
}

fn validate_job_fields(data: &CreateJob) -> AppResult<()> {
    if data.title.trim().is_empty() {
        return Err(AppError::validation("Job title is required"));
    }
    if data.description.trim().is_empty() {
        return Err(AppError::validation("Job description is required"));
    }
    if data.requirements.trim().is_empty() {
        return Err(AppError::validation("Job requirements are required"));
    }
    if data.location.trim().is_empty() {
        return Err(AppError::validation("Job location is required"));
    }
    data.salary.validate()
}

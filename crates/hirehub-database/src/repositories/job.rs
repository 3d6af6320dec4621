//! Job repository implementation.

use sqlx::{PgPool, Postgres, QueryBuilder};
use uuid::Uuid;

use hirehub_core::error::{AppError, ErrorKind};
use hirehub_core::result::AppResult;
use hirehub_core::types::pagination::{PageRequest, PageResponse};
use hirehub_entity::job::model::{CreateJob, JobFilter};
use hirehub_entity::job::{Job, JobStatus};

/// Aggregate job counts for the admin dashboard.
#[derive(Debug, Clone, serde::Serialize, sqlx::FromRow)]
pub struct JobCounts {
    /// All jobs.
    pub total: i64,
    /// Jobs visible to applicants.
    pub open: i64,
    /// Jobs awaiting admin review.
    pub pending: i64,
}

/// A job joined with the name of the employer who posted it.
///
/// `poster_name` is null when the posting account has been deleted.
#[derive(Debug, Clone, serde::Serialize, sqlx::FromRow)]
pub struct JobWithPoster {
    /// The job itself.
    #[sqlx(flatten)]
    #[serde(flatten)]
    pub job: Job,
    /// Display name of the posting employer.
    pub poster_name: Option<String>,
}

/// Repository for job posting CRUD and query operations.
#[derive(Debug, Clone)]
pub struct JobRepository {
    pool: PgPool,
}

impl JobRepository {
    /// Create a new job repository.
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }

    /// Find a job by primary key.
    pub async fn find_by_id(&self, id: Uuid) -> AppResult<Option<Job>> {
        sqlx::query_as::<_, Job>("SELECT * FROM jobs WHERE id = $1")
            .bind(id)
            .fetch_optional(&self.pool)
            .await
            .map_err(|e| AppError::with_source(ErrorKind::Database, "Failed to find job by id", e))
    }

    /// Create a new job posting.
    ///
    /// `company` is the denormalized name of the posting employer, fixed
    /// at creation time. Status starts `pending` and the applications
    /// counter at zero (column defaults).
    pub async fn create(&self, posted_by: Uuid, company: &str, data: &CreateJob) -> AppResult<Job> {
        let search_text = Job::build_search_text(&data.title, company, &data.description);

        sqlx::query_as::<_, Job>(
            "INSERT INTO jobs (title, company, description, requirements, location, job_type, \
                               category, salary_min, salary_max, salary_currency, \
                               experience_level, skills, posted_by, application_deadline, \
                               search_text) \
             VALUES ($1, $2, $3, $4, $5, $6, $7, $8, $9, $10, $11, $12, $13, $14, $15) \
             RETURNING *",
        )
        .bind(&data.title)
        .bind(company)
        .bind(&data.description)
        .bind(&data.requirements)
        .bind(&data.location)
        .bind(data.job_type)
        .bind(data.category)
        .bind(data.salary.min)
        .bind(data.salary.max)
        .bind(&data.salary.currency)
        .bind(data.experience_level)
        .bind(&data.skills)
        .bind(posted_by)
        .bind(data.application_deadline)
        .bind(&search_text)
        .fetch_one(&self.pool)
        .await
        .map_err(|e| AppError::with_source(ErrorKind::Database, "Failed to create job", e))
    }

    /// Persist the mutable fields of a job after the service merged an
    /// update onto it. Status and the counter have dedicated methods.
    pub async fn save(&self, job: &Job) -> AppResult<Job> {
        sqlx::query_as::<_, Job>(
            "UPDATE jobs SET title = $2, description = $3, requirements = $4, location = $5, \
                             job_type = $6, category = $7, salary_min = $8, salary_max = $9, \
                             salary_currency = $10, experience_level = $11, skills = $12, \
                             application_deadline = $13, search_text = $14, updated_at = NOW() \
             WHERE id = $1 RETURNING *",
        )
        .bind(job.id)
        .bind(&job.title)
        .bind(&job.description)
        .bind(&job.requirements)
        .bind(&job.location)
        .bind(job.job_type)
        .bind(job.category)
        .bind(job.salary_min)
        .bind(job.salary_max)
        .bind(&job.salary_currency)
        .bind(job.experience_level)
        .bind(&job.skills)
        .bind(job.application_deadline)
        .bind(&job.search_text)
        .fetch_optional(&self.pool)
        .await
        .map_err(|e| AppError::with_source(ErrorKind::Database, "Failed to update job", e))?
        .ok_or_else(|| AppError::not_found(format!("Job {} not found", job.id)))
    }

    /// Update a job's lifecycle status.
    pub async fn update_status(&self, job_id: Uuid, status: JobStatus) -> AppResult<Job> {
        sqlx::query_as::<_, Job>(
            "UPDATE jobs SET status = $2, updated_at = NOW() WHERE id = $1 RETURNING *",
        )
        .bind(job_id)
        .bind(status)
        .fetch_optional(&self.pool)
        .await
        .map_err(|e| AppError::with_source(ErrorKind::Database, "Failed to update job status", e))?
        .ok_or_else(|| AppError::not_found(format!("Job {job_id} not found")))
    }

    /// Atomically increment the applications counter.
    ///
    /// A single read-modify-write statement, so concurrent applications
    /// to the same job cannot lose updates.
    pub async fn increment_applications(&self, job_id: Uuid) -> AppResult<i32> {
        let row: (i32,) = sqlx::query_as(
            "UPDATE jobs SET applications_count = applications_count + 1, updated_at = NOW() \
             WHERE id = $1 RETURNING applications_count",
        )
        .bind(job_id)
        .fetch_one(&self.pool)
        .await
        .map_err(|e| {
            AppError::with_source(
                ErrorKind::Database,
                "Failed to increment applications count",
                e,
            )
        })?;

        Ok(row.0)
    }

    /// Find a job by primary key, joined with the poster's name.
    pub async fn find_with_poster(&self, id: Uuid) -> AppResult<Option<JobWithPoster>> {
        sqlx::query_as::<_, JobWithPoster>(
            "SELECT j.*, u.name AS poster_name FROM jobs j \
             LEFT JOIN users u ON u.id = j.posted_by WHERE j.id = $1",
        )
        .bind(id)
        .fetch_optional(&self.pool)
        .await
        .map_err(|e| AppError::with_source(ErrorKind::Database, "Failed to find job by id", e))
    }

    /// List open jobs matching the filters, newest first.
    pub async fn list_open(
        &self,
        filter: &JobFilter,
        page: &PageRequest,
    ) -> AppResult<PageResponse<JobWithPoster>> {
        let mut count_query: QueryBuilder<Postgres> =
            QueryBuilder::new("SELECT COUNT(*) FROM jobs j");
        push_open_filters(&mut count_query, filter);

        let total: i64 = count_query
            .build_query_scalar()
            .fetch_one(&self.pool)
            .await
            .map_err(|e| AppError::with_source(ErrorKind::Database, "Failed to count jobs", e))?;

        let mut list_query: QueryBuilder<Postgres> = QueryBuilder::new(
            "SELECT j.*, u.name AS poster_name FROM jobs j \
             LEFT JOIN users u ON u.id = j.posted_by",
        );
        push_open_filters(&mut list_query, filter);
        list_query.push(" ORDER BY j.created_at DESC LIMIT ");
        list_query.push_bind(page.limit() as i64);
        list_query.push(" OFFSET ");
        list_query.push_bind(page.offset() as i64);

        let jobs = list_query
            .build_query_as::<JobWithPoster>()
            .fetch_all(&self.pool)
            .await
            .map_err(|e| AppError::with_source(ErrorKind::Database, "Failed to list jobs", e))?;

        Ok(PageResponse::new(
            jobs,
            page.page,
            page.page_size,
            total as u64,
        ))
    }

    /// List all jobs posted by an employer, any status, newest first.
    pub async fn find_by_employer(&self, employer_id: Uuid) -> AppResult<Vec<Job>> {
        sqlx::query_as::<_, Job>(
            "SELECT * FROM jobs WHERE posted_by = $1 ORDER BY created_at DESC",
        )
        .bind(employer_id)
        .fetch_all(&self.pool)
        .await
        .map_err(|e| AppError::with_source(ErrorKind::Database, "Failed to list employer jobs", e))
    }

    /// List jobs awaiting admin review, oldest first, with poster info.
    pub async fn find_pending(&self) -> AppResult<Vec<JobWithPoster>> {
        sqlx::query_as::<_, JobWithPoster>(
            "SELECT j.*, u.name AS poster_name FROM jobs j \
             LEFT JOIN users u ON u.id = j.posted_by \
             WHERE j.status = 'pending' ORDER BY j.created_at ASC",
        )
        .fetch_all(&self.pool)
        .await
        .map_err(|e| AppError::with_source(ErrorKind::Database, "Failed to list pending jobs", e))
    }

    /// Delete a job by ID.
    pub async fn delete(&self, job_id: Uuid) -> AppResult<bool> {
        let result = sqlx::query("DELETE FROM jobs WHERE id = $1")
            .bind(job_id)
            .execute(&self.pool)
            .await
            .map_err(|e| AppError::with_source(ErrorKind::Database, "Failed to delete job", e))?;

        Ok(result.rows_affected() > 0)
    }

    /// Aggregate job counts by status for the admin dashboard.
    pub async fn counts(&self) -> AppResult<JobCounts> {
        sqlx::query_as::<_, JobCounts>(
            "SELECT COUNT(*) AS total, \
                    COUNT(*) FILTER (WHERE status = 'open') AS open, \
                    COUNT(*) FILTER (WHERE status = 'pending') AS pending \
             FROM jobs",
        )
        .fetch_one(&self.pool)
        .await
        .map_err(|e| AppError::with_source(ErrorKind::Database, "Failed to count jobs", e))
    }
}

/// Append the WHERE clause for the public open-jobs listing.
///
/// The status predicate comes first and is unconditional: no filter
/// combination can surface a non-open job.
fn push_open_filters(query: &mut QueryBuilder<'_, Postgres>, filter: &JobFilter) {
    query.push(" WHERE j.status = 'open'");

    if let Some(search) = &filter.search {
        query.push(" AND j.search_text LIKE ");
        query.push_bind(format!("%{}%", search.to_lowercase()));
    }
    if let Some(category) = filter.category {
        query.push(" AND j.category = ");
        query.push_bind(category);
    }
    if let Some(job_type) = filter.job_type {
        query.push(" AND j.job_type = ");
        query.push_bind(job_type);
    }
    if let Some(location) = &filter.location {
        query.push(" AND j.location ILIKE ");
        query.push_bind(format!("%{location}%"));
    }
    if let Some(level) = filter.experience_level {
        query.push(" AND j.experience_level = ");
        query.push_bind(level);
    }
    if let Some(min_salary) = filter.min_salary {
        query.push(" AND j.salary_max >= ");
        query.push_bind(min_salary);
    }
    if let Some(max_salary) = filter.max_salary {
        query.push(" AND j.salary_min <= ");
        query.push_bind(max_salary);
    }
}

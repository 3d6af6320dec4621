//! Job posting entity model.

use chrono::{DateTime, NaiveDate, Utc};
use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use uuid::Uuid;

use super::classification::{ExperienceLevel, JobCategory, JobType};
use super::status::JobStatus;

/// A job posting.
#[derive(Debug, Clone, Serialize, Deserialize, FromRow)]
pub struct Job {
    /// Unique job identifier.
    pub id: Uuid,
    /// Job title.
    pub title: String,
    /// Company name, denormalized from the posting employer at creation
    /// time. Not resynced if the employer later renames their company.
    pub company: String,
    /// Role description.
    pub description: String,
    /// Requirements for the role.
    pub requirements: String,
    /// Where the role is based.
    pub location: String,
    /// Employment type.
    pub job_type: JobType,
    /// Industry category.
    pub category: JobCategory,
    /// Lower salary bound.
    pub salary_min: i64,
    /// Upper salary bound.
    pub salary_max: i64,
    /// Salary currency code.
    pub salary_currency: String,
    /// Expected seniority.
    pub experience_level: ExperienceLevel,
    /// Skill keywords, in the order the employer listed them.
    pub skills: Vec<String>,
    /// The employer who posted the job.
    pub posted_by: Uuid,
    /// Lifecycle status.
    pub status: JobStatus,
    /// Last day applications are accepted.
    pub application_deadline: Option<NaiveDate>,
    /// Number of non-withdrawn applications referencing this job.
    pub applications_count: i32,
    /// Lower-cased title + company + description, kept for substring
    /// search without a full-text index.
    #[serde(skip_serializing)]
    pub search_text: String,
    /// When the job was posted.
    pub created_at: DateTime<Utc>,
    /// When the job was last updated.
    pub updated_at: DateTime<Utc>,
}

impl Job {
    /// Build the derived search text for the given fields.
    pub fn build_search_text(title: &str, company: &str, description: &str) -> String {
        format!("{title} {company} {description}").to_lowercase()
    }

    /// The job's salary range as a value object.
    pub fn salary(&self) -> SalaryRange {
        SalaryRange {
            min: self.salary_min,
            max: self.salary_max,
            currency: self.salary_currency.clone(),
        }
    }
}

/// Salary range with `min <= max`.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SalaryRange {
    /// Lower bound.
    pub min: i64,
    /// Upper bound.
    pub max: i64,
    /// Currency code, defaults to USD.
    #[serde(default = "default_currency")]
    pub currency: String,
}

impl SalaryRange {
    /// Validate that the range is well-formed.
    pub fn validate(&self) -> Result<(), hirehub_core::AppError> {
        if self.min < 0 {
            return Err(hirehub_core::AppError::validation(
                "Minimum salary cannot be negative",
            ));
        }
        if self.min > self.max {
            return Err(hirehub_core::AppError::validation(
                "Minimum salary cannot exceed maximum salary",
            ));
        }
        Ok(())
    }
}

fn default_currency() -> String {
    "USD".to_string()
}

/// Data required to create a new job posting.
///
/// `company`, `status`, and the applications counter are never client
/// supplied; the service derives them.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CreateJob {
    /// Job title.
    pub title: String,
    /// Role description.
    pub description: String,
    /// Requirements for the role.
    pub requirements: String,
    /// Where the role is based.
    pub location: String,
    /// Employment type.
    pub job_type: JobType,
    /// Industry category.
    pub category: JobCategory,
    /// Salary range.
    pub salary: SalaryRange,
    /// Expected seniority.
    pub experience_level: ExperienceLevel,
    /// Skill keywords.
    #[serde(default)]
    pub skills: Vec<String>,
    /// Last day applications are accepted.
    pub application_deadline: Option<NaiveDate>,
}

/// Partial update to a job posting. `None` fields are left untouched.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct UpdateJob {
    /// New title.
    pub title: Option<String>,
    /// New description.
    pub description: Option<String>,
    /// New requirements.
    pub requirements: Option<String>,
    /// New location.
    pub location: Option<String>,
    /// New employment type.
    pub job_type: Option<JobType>,
    /// New category.
    pub category: Option<JobCategory>,
    /// New salary range.
    pub salary: Option<SalaryRange>,
    /// New seniority.
    pub experience_level: Option<ExperienceLevel>,
    /// New skill list.
    pub skills: Option<Vec<String>>,
    /// New application deadline.
    pub application_deadline: Option<NaiveDate>,
}

/// Filters applied when listing open jobs.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct JobFilter {
    /// Free-text search against the derived search text.
    pub search: Option<String>,
    /// Exact category match.
    pub category: Option<JobCategory>,
    /// Exact employment type match.
    pub job_type: Option<JobType>,
    /// Case-insensitive location substring match.
    pub location: Option<String>,
    /// Exact seniority match.
    pub experience_level: Option<ExperienceLevel>,
    /// Only jobs whose salary range reaches at least this value.
    pub min_salary: Option<i64>,
    /// Only jobs whose salary range starts at or below this value.
    pub max_salary: Option<i64>,
}

//! Request DTOs.

use serde::{Deserialize, Serialize};
use validator::Validate;

use hirehub_entity::application::ApplicationStatus;
use hirehub_entity::job::{ExperienceLevel, JobCategory, JobFilter, JobType};
use hirehub_entity::user::UserRole;

/// Registration request body.
#[derive(Debug, Clone, Serialize, Deserialize, Validate)]
pub struct RegisterRequest {
    /// Full name.
    #[validate(length(min = 1, message = "Name is required"))]
    pub name: String,
    /// Email address.
    #[validate(email(message = "Invalid email format"))]
    pub email: String,
    /// Plaintext password. Length rules are enforced by the password
    /// policy, not here.
    #[validate(length(min = 1, message = "Password is required"))]
    pub password: String,
    /// Requested role.
    pub role: UserRole,
    /// Company name, required for employers.
    pub company: Option<String>,
    /// Contact phone number.
    pub phone: Option<String>,
    /// Location.
    pub location: Option<String>,
}

impl From<RegisterRequest> for hirehub_service::identity::RegisterRequest {
    fn from(req: RegisterRequest) -> Self {
        Self {
            name: req.name,
            email: req.email,
            password: req.password,
            role: req.role,
            company: req.company,
            phone: req.phone,
            location: req.location,
        }
    }
}

/// Login request body.
#[derive(Debug, Clone, Serialize, Deserialize, Validate)]
pub struct LoginRequest {
    /// Email address.
    #[validate(length(min = 1, message = "Email is required"))]
    pub email: String,
    /// Plaintext password.
    #[validate(length(min = 1, message = "Password is required"))]
    pub password: String,
}

/// Query parameters for the public job listing.
///
/// Filters and pagination arrive flattened in one query string. The
/// camelCase aliases match the published parameter names; the
/// snake_case forms are accepted too.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct JobQuery {
    /// Free-text search over title, company, and description.
    pub search: Option<String>,
    /// Exact category match.
    pub category: Option<JobCategory>,
    /// Exact employment type match.
    #[serde(alias = "jobType")]
    pub job_type: Option<JobType>,
    /// Location substring match.
    pub location: Option<String>,
    /// Exact seniority match.
    #[serde(alias = "experienceLevel")]
    pub experience_level: Option<ExperienceLevel>,
    /// Only jobs whose salary range reaches this value.
    #[serde(alias = "minSalary")]
    pub min_salary: Option<i64>,
    /// Only jobs whose salary range starts at or below this value.
    #[serde(alias = "maxSalary")]
    pub max_salary: Option<i64>,
    /// Page number (1-based).
    pub page: Option<u64>,
    /// Items per page.
    #[serde(alias = "limit")]
    pub page_size: Option<u64>,
}

impl JobQuery {
    /// Splits the query into its filter part.
    pub fn filter(&self) -> JobFilter {
        JobFilter {
            search: self.search.clone(),
            category: self.category,
            job_type: self.job_type,
            location: self.location.clone(),
            experience_level: self.experience_level,
            min_salary: self.min_salary,
            max_salary: self.max_salary,
        }
    }
}

/// Application status change request body.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct UpdateStatusRequest {
    /// The status to move to.
    pub status: ApplicationStatus,
    /// Replacement review notes; existing notes are kept when absent.
    pub notes: Option<String>,
}

/// Query parameters for the admin user listing.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct UserListQuery {
    /// Restrict to one role.
    pub role: Option<UserRole>,
    /// Page number (1-based).
    pub page: Option<u64>,
    /// Items per page.
    pub page_size: Option<u64>,
}

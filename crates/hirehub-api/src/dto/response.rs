//! Response DTOs.

use chrono::{DateTime, NaiveDate, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use hirehub_database::repositories::{ApplicationWithApplicant, JobWithPoster};
use hirehub_entity::application::{Application, ApplicationStatus};
use hirehub_entity::job::{ExperienceLevel, Job, JobCategory, JobStatus, JobType, SalaryRange};
use hirehub_entity::user::{User, UserRole};
use hirehub_service::application::ApplicationWithJob;
use hirehub_service::identity::AuthSession;

/// Standard success response wrapper.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ApiResponse<T: Serialize> {
    /// Whether the request was successful.
    pub success: bool,
    /// Response data.
    pub data: T,
}

impl<T: Serialize> ApiResponse<T> {
    /// Creates a successful response.
    pub fn ok(data: T) -> Self {
        Self {
            success: true,
            data,
        }
    }
}

/// Simple message response.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct MessageResponse {
    /// Message.
    pub message: String,
}

/// User profile for responses. Never carries the password hash.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct UserResponse {
    /// User ID.
    pub id: Uuid,
    /// Full name.
    pub name: String,
    /// Email.
    pub email: String,
    /// Role.
    pub role: UserRole,
    /// Approval state.
    pub is_approved: bool,
    /// Company name (employers).
    pub company: Option<String>,
    /// Phone number.
    pub phone: Option<String>,
    /// Location.
    pub location: Option<String>,
    /// Biography.
    pub bio: Option<String>,
    /// Skill keywords.
    pub skills: Vec<String>,
    /// Experience summary.
    pub experience: Option<String>,
    /// Education summary.
    pub education: Option<String>,
    /// Stored resume URL.
    pub resume_url: Option<String>,
    /// Registration time.
    pub created_at: DateTime<Utc>,
}

impl From<User> for UserResponse {
    fn from(user: User) -> Self {
        Self {
            id: user.id,
            name: user.name,
            email: user.email,
            role: user.role,
            is_approved: user.is_approved,
            company: user.company,
            phone: user.phone,
            location: user.location,
            bio: user.bio,
            skills: user.skills,
            experience: user.experience,
            education: user.education,
            resume_url: user.resume_url,
            created_at: user.created_at,
        }
    }
}

/// Successful registration or login response.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AuthResponse {
    /// Bearer token.
    pub token: String,
    /// Token expiration.
    pub expires_at: DateTime<Utc>,
    /// The authenticated user.
    pub user: UserResponse,
}

impl From<AuthSession> for AuthResponse {
    fn from(session: AuthSession) -> Self {
        Self {
            token: session.token,
            expires_at: session.expires_at,
            user: session.user.into(),
        }
    }
}

/// Public summary of the employer behind a job posting.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PosterSummary {
    /// Employer user ID.
    pub id: Uuid,
    /// Display name.
    pub name: String,
    /// Company name.
    pub company: String,
}

/// Job posting for responses, with the salary range nested.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct JobResponse {
    /// Job ID.
    pub id: Uuid,
    /// Title.
    pub title: String,
    /// Company name.
    pub company: String,
    /// Description.
    pub description: String,
    /// Requirements.
    pub requirements: String,
    /// Location.
    pub location: String,
    /// Employment type.
    pub job_type: JobType,
    /// Category.
    pub category: JobCategory,
    /// Salary range.
    pub salary: SalaryRange,
    /// Seniority.
    pub experience_level: ExperienceLevel,
    /// Skill keywords.
    pub skills: Vec<String>,
    /// Posting employer.
    pub posted_by: Uuid,
    /// Lifecycle status.
    pub status: JobStatus,
    /// Application deadline.
    pub application_deadline: Option<NaiveDate>,
    /// Applications received.
    pub applications_count: i32,
    /// Posted at.
    pub created_at: DateTime<Utc>,
    /// Last updated.
    pub updated_at: DateTime<Utc>,
    /// Poster summary, present on listing and detail responses.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub poster: Option<PosterSummary>,
}

impl From<Job> for JobResponse {
    fn from(job: Job) -> Self {
        let salary = job.salary();
        Self {
            id: job.id,
            title: job.title,
            company: job.company,
            description: job.description,
            requirements: job.requirements,
            location: job.location,
            job_type: job.job_type,
            category: job.category,
            salary,
            experience_level: job.experience_level,
            skills: job.skills,
            posted_by: job.posted_by,
            status: job.status,
            application_deadline: job.application_deadline,
            applications_count: job.applications_count,
            created_at: job.created_at,
            updated_at: job.updated_at,
            poster: None,
        }
    }
}

impl From<JobWithPoster> for JobResponse {
    fn from(item: JobWithPoster) -> Self {
        let poster = item.poster_name.map(|name| PosterSummary {
            id: item.job.posted_by,
            name,
            company: item.job.company.clone(),
        });
        let mut response = Self::from(item.job);
        response.poster = poster;
        response
    }
}

/// Application for responses.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ApplicationResponse {
    /// Application ID.
    pub id: Uuid,
    /// The job applied to.
    pub job_id: Uuid,
    /// The applicant.
    pub applicant_id: Uuid,
    /// Stored resume URL.
    pub resume_url: String,
    /// Cover letter.
    pub cover_letter: String,
    /// Review status.
    pub status: ApplicationStatus,
    /// Submitted at.
    pub applied_at: DateTime<Utc>,
    /// First reviewed at.
    pub reviewed_at: Option<DateTime<Utc>>,
    /// Review notes.
    pub notes: String,
}

impl From<Application> for ApplicationResponse {
    fn from(application: Application) -> Self {
        Self {
            id: application.id,
            job_id: application.job_id,
            applicant_id: application.applicant_id,
            resume_url: application.resume_url,
            cover_letter: application.cover_letter,
            status: application.status,
            applied_at: application.applied_at,
            reviewed_at: application.reviewed_at,
            notes: application.notes,
        }
    }
}

/// Public contact fields of an applicant, for employer review lists.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ApplicantSummary {
    /// Applicant user ID.
    pub id: Uuid,
    /// Display name.
    pub name: String,
    /// Email address.
    pub email: String,
}

/// An application with the applicant's contact info.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ApplicationWithApplicantResponse {
    /// The application.
    #[serde(flatten)]
    pub application: ApplicationResponse,
    /// The applicant.
    pub applicant: ApplicantSummary,
}

impl From<ApplicationWithApplicant> for ApplicationWithApplicantResponse {
    fn from(item: ApplicationWithApplicant) -> Self {
        let applicant = ApplicantSummary {
            id: item.application.applicant_id,
            name: item.applicant_name,
            email: item.applicant_email,
        };
        Self {
            application: item.application.into(),
            applicant,
        }
    }
}

/// An application with its parent job, for applicant-facing lists.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ApplicationWithJobResponse {
    /// The application.
    pub application: ApplicationResponse,
    /// The job applied to.
    pub job: JobResponse,
}

impl From<ApplicationWithJob> for ApplicationWithJobResponse {
    fn from(item: ApplicationWithJob) -> Self {
        Self {
            application: item.application.into(),
            job: item.job.into(),
        }
    }
}

/// Health check response.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct HealthResponse {
    /// Overall status.
    pub status: String,
    /// Database status.
    pub database: String,
}

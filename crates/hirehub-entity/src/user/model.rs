//! User entity model.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use uuid::Uuid;

use super::role::UserRole;

/// A registered user: applicant, employer, or admin.
#[derive(Debug, Clone, Serialize, Deserialize, FromRow)]
pub struct User {
    /// Unique user identifier.
    pub id: Uuid,
    /// Full name.
    pub name: String,
    /// Email address, unique case-insensitively.
    pub email: String,
    /// Argon2 password hash.
    #[serde(skip_serializing)]
    pub password_hash: String,
    /// User role.
    pub role: UserRole,
    /// Whether the account may act. Applicants and admins start `true`;
    /// employers start `false` until an admin approves them.
    pub is_approved: bool,
    /// Company name. Only meaningful for employers.
    pub company: Option<String>,
    /// Contact phone number.
    pub phone: Option<String>,
    /// Location.
    pub location: Option<String>,
    /// Short biography.
    pub bio: Option<String>,
    /// Skill keywords.
    pub skills: Vec<String>,
    /// Work experience summary.
    pub experience: Option<String>,
    /// Education summary.
    pub education: Option<String>,
    /// Public URL of the user's stored resume, if any.
    pub resume_url: Option<String>,
    /// When the user registered.
    pub created_at: DateTime<Utc>,
    /// When the user was last updated.
    pub updated_at: DateTime<Utc>,
}

impl User {
    /// Check if this user has admin privileges.
    pub fn is_admin(&self) -> bool {
        self.role.is_admin()
    }

    /// Check if this user is an approved employer, able to post jobs.
    pub fn is_approved_employer(&self) -> bool {
        self.role.is_employer() && self.is_approved
    }
}

/// Data required to create a new user. The password arrives pre-hashed.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CreateUser {
    /// Full name.
    pub name: String,
    /// Email address (stored lower-cased).
    pub email: String,
    /// Pre-hashed password.
    pub password_hash: String,
    /// Assigned role.
    pub role: UserRole,
    /// Whether the account starts approved.
    pub is_approved: bool,
    /// Company name (employers only).
    pub company: Option<String>,
    /// Contact phone number.
    pub phone: Option<String>,
    /// Location.
    pub location: Option<String>,
}

/// Partial profile update. `None` fields are left untouched.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct UpdateProfile {
    /// New full name.
    pub name: Option<String>,
    /// New phone number.
    pub phone: Option<String>,
    /// New location.
    pub location: Option<String>,
    /// New biography.
    pub bio: Option<String>,
    /// New skill list.
    pub skills: Option<Vec<String>>,
    /// New experience summary.
    pub experience: Option<String>,
    /// New education summary.
    pub education: Option<String>,
    /// New password hash, when the user changed their password.
    pub password_hash: Option<String>,
}

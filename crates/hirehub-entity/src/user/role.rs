//! User role enumeration.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Roles available in the HireHub authorization model.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, sqlx::Type)]
#[sqlx(type_name = "user_role", rename_all = "lowercase")]
#[serde(rename_all = "lowercase")]
pub enum UserRole {
    /// Seeks employment; creates applications.
    Applicant,
    /// Posts jobs; requires admin approval before posting.
    Employer,
    /// Global moderation rights: approves employers and jobs, views stats.
    Admin,
}

impl UserRole {
    /// Check if this role is an admin.
    pub fn is_admin(&self) -> bool {
        matches!(self, Self::Admin)
    }

    /// Check if this role is an employer.
    pub fn is_employer(&self) -> bool {
        matches!(self, Self::Employer)
    }

    /// Whether accounts with this role start approved.
    ///
    /// Employers stay unapproved until an admin acts; everyone else is
    /// approved on registration.
    pub fn approved_by_default(&self) -> bool {
        !self.is_employer()
    }

    /// Return the role as a lowercase string.
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Applicant => "applicant",
            Self::Employer => "employer",
            Self::Admin => "admin",
        }
    }
}

impl fmt::Display for UserRole {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

impl FromStr for UserRole {
    type Err = hirehub_core::AppError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "applicant" => Ok(Self::Applicant),
            "employer" => Ok(Self::Employer),
            "admin" => Ok(Self::Admin),
            _ => Err(hirehub_core::AppError::validation(format!(
                "Invalid user role: '{s}'. Expected one of: applicant, employer, admin"
            ))),
        }
    }
}

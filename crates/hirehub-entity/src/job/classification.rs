//! Closed enumerations classifying a job posting.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Employment type of a posting.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, sqlx::Type)]
#[sqlx(type_name = "job_type")]
pub enum JobType {
    /// Full-time employment.
    #[sqlx(rename = "Full-time")]
    #[serde(rename = "Full-time")]
    FullTime,
    /// Part-time employment.
    #[sqlx(rename = "Part-time")]
    #[serde(rename = "Part-time")]
    PartTime,
    /// Fixed-term contract.
    #[sqlx(rename = "Contract")]
    Contract,
    /// Internship.
    #[sqlx(rename = "Internship")]
    Internship,
    /// Fully remote position.
    #[sqlx(rename = "Remote")]
    Remote,
}

impl JobType {
    /// Return the canonical wire string.
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::FullTime => "Full-time",
            Self::PartTime => "Part-time",
            Self::Contract => "Contract",
            Self::Internship => "Internship",
            Self::Remote => "Remote",
        }
    }
}

impl fmt::Display for JobType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

impl FromStr for JobType {
    type Err = hirehub_core::AppError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "Full-time" => Ok(Self::FullTime),
            "Part-time" => Ok(Self::PartTime),
            "Contract" => Ok(Self::Contract),
            "Internship" => Ok(Self::Internship),
            "Remote" => Ok(Self::Remote),
            _ => Err(hirehub_core::AppError::validation(format!(
                "Invalid job type: '{s}'. Expected one of: Full-time, Part-time, Contract, Internship, Remote"
            ))),
        }
    }
}

/// Industry category of a posting.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, sqlx::Type)]
#[sqlx(type_name = "job_category")]
pub enum JobCategory {
    #[sqlx(rename = "IT")]
    #[serde(rename = "IT")]
    It,
    Marketing,
    Sales,
    Finance,
    #[sqlx(rename = "HR")]
    #[serde(rename = "HR")]
    Hr,
    Design,
    Engineering,
    Healthcare,
    Education,
    Other,
}

impl JobCategory {
    /// Return the canonical wire string.
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::It => "IT",
            Self::Marketing => "Marketing",
            Self::Sales => "Sales",
            Self::Finance => "Finance",
            Self::Hr => "HR",
            Self::Design => "Design",
            Self::Engineering => "Engineering",
            Self::Healthcare => "Healthcare",
            Self::Education => "Education",
            Self::Other => "Other",
        }
    }
}

impl fmt::Display for JobCategory {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

impl FromStr for JobCategory {
    type Err = hirehub_core::AppError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "IT" => Ok(Self::It),
            "Marketing" => Ok(Self::Marketing),
            "Sales" => Ok(Self::Sales),
            "Finance" => Ok(Self::Finance),
            "HR" => Ok(Self::Hr),
            "Design" => Ok(Self::Design),
            "Engineering" => Ok(Self::Engineering),
            "Healthcare" => Ok(Self::Healthcare),
            "Education" => Ok(Self::Education),
            "Other" => Ok(Self::Other),
            _ => Err(hirehub_core::AppError::validation(format!(
                "Invalid job category: '{s}'"
            ))),
        }
    }
}

/// Seniority expected for a posting.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, sqlx::Type)]
#[sqlx(type_name = "experience_level")]
pub enum ExperienceLevel {
    Entry,
    Mid,
    Senior,
    Executive,
}

impl ExperienceLevel {
    /// Return the canonical wire string.
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Entry => "Entry",
            Self::Mid => "Mid",
            Self::Senior => "Senior",
            Self::Executive => "Executive",
        }
    }
}

impl fmt::Display for ExperienceLevel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

impl FromStr for ExperienceLevel {
    type Err = hirehub_core::AppError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "Entry" => Ok(Self::Entry),
            "Mid" => Ok(Self::Mid),
            "Senior" => Ok(Self::Senior),
            "Executive" => Ok(Self::Executive),
            _ => Err(hirehub_core::AppError::validation(format!(
                "Invalid experience level: '{s}'. Expected one of: Entry, Mid, Senior, Executive"
            ))),
        }
    }
}

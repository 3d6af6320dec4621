//! Admin user management and platform statistics.

use std::sync::Arc;

use serde::Serialize;
use tracing::info;
use uuid::Uuid;

use hirehub_auth::policy::{self, Actor};
use hirehub_core::error::AppError;
use hirehub_core::result::AppResult;
use hirehub_core::types::pagination::{PageRequest, PageResponse};
use hirehub_database::repositories::application::ApplicationCounts;
use hirehub_database::repositories::job::JobCounts;
use hirehub_database::repositories::user::UserCounts;
use hirehub_database::repositories::{ApplicationRepository, JobRepository, UserRepository};
use hirehub_entity::user::{User, UserRole};

/// Platform-wide counts for the admin dashboard.
#[derive(Debug, Clone, Serialize)]
pub struct OverviewStats {
    /// User counts by role.
    pub users: UserCounts,
    /// Job counts by status.
    pub jobs: JobCounts,
    /// Application counts by status.
    pub applications: ApplicationCounts,
}

/// Handles admin-only user management and reporting.
#[derive(Debug, Clone)]
pub struct AdminService {
    /// User repository.
    users: Arc<UserRepository>,
    /// Job repository.
    jobs: Arc<JobRepository>,
    /// Application repository.
    applications: Arc<ApplicationRepository>,
}

impl AdminService {
    /// Creates a new admin service.
    pub fn new(
        users: Arc<UserRepository>,
        jobs: Arc<JobRepository>,
        applications: Arc<ApplicationRepository>,
    ) -> Self {
        Self {
            users,
            jobs,
            applications,
        }
    }

    /// Lists users, optionally filtered by role.
    pub async fn list_users(
        &self,
        actor: &Actor,
        role: Option<UserRole>,
        page: &PageRequest,
    ) -> AppResult<PageResponse<User>> {
        policy::require_role(actor, &[UserRole::Admin])?;
        self.users.find_all(role, page).await
    }

    /// Lists employers awaiting approval.
    pub async fn pending_employers(&self, actor: &Actor) -> AppResult<Vec<User>> {
        policy::require_role(actor, &[UserRole::Admin])?;
        self.users.find_pending_employers().await
    }

    /// Approves an employer account, unlocking job posting.
    pub async fn approve_employer(&self, actor: &Actor, user_id: Uuid) -> AppResult<User> {
        policy::require_role(actor, &[UserRole::Admin])?;

        let user = self
            .users
            .find_by_id(user_id)
            .await?
            .ok_or_else(|| AppError::not_found("User not found"))?;

        if !user.role.is_employer() {
            return Err(AppError::validation("User is not an employer"));
        }
        if user.is_approved {
            return Err(AppError::validation("Employer is already approved"));
        }

        let user = self.users.set_approved(user_id, true).await?;
        info!(user_id = %user_id, approved_by = %actor.user_id, "Employer approved");
        Ok(user)
    }

    /// Deletes a user account. Admin accounts cannot be deleted.
    pub async fn delete_user(&self, actor: &Actor, user_id: Uuid) -> AppResult<()> {
        policy::require_role(actor, &[UserRole::Admin])?;

        let user = self
            .users
            .find_by_id(user_id)
            .await?
            .ok_or_else(|| AppError::not_found("User not found"))?;

        if user.role.is_admin() {
            return Err(AppError::validation("Cannot delete admin user"));
        }

        self.users.delete(user_id).await?;
        info!(user_id = %user_id, deleted_by = %actor.user_id, "User deleted");
        Ok(())
    }

    /// Gathers platform-wide counts for the dashboard.
    pub async fn overview_stats(&self, actor: &Actor) -> AppResult<OverviewStats> {
        policy::require_role(actor, &[UserRole::Admin])?;

        Ok(OverviewStats {
            users: self.users.counts().await?,
            jobs: self.jobs.counts().await?,
            applications: self.applications.counts().await?,
        })
    }
}

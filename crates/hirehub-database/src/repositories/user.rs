//! User repository implementation.

use sqlx::PgPool;
use uuid::Uuid;

use hirehub_core::error::{AppError, ErrorKind};
use hirehub_core::result::AppResult;
use hirehub_core::types::pagination::{PageRequest, PageResponse};
use hirehub_entity::user::model::{CreateUser, UpdateProfile};
use hirehub_entity::user::{User, UserRole};

/// Aggregate user counts for the admin dashboard.
#[derive(Debug, Clone, serde::Serialize, sqlx::FromRow)]
pub struct UserCounts {
    /// All users.
    pub total: i64,
    /// Users with the applicant role.
    pub applicants: i64,
    /// Users with the employer role.
    pub employers: i64,
    /// Employers still awaiting approval.
    pub pending_employers: i64,
}

/// Repository for user CRUD and query operations.
#[derive(Debug, Clone)]
pub struct UserRepository {
    pool: PgPool,
}

impl UserRepository {
    /// Create a new user repository.
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }

    /// Find a user by primary key.
    pub async fn find_by_id(&self, id: Uuid) -> AppResult<Option<User>> {
        sqlx::query_as::<_, User>("SELECT * FROM users WHERE id = $1")
            .bind(id)
            .fetch_optional(&self.pool)
            .await
            .map_err(|e| AppError::with_source(ErrorKind::Database, "Failed to find user by id", e))
    }

    /// Find a user by email (case-insensitive).
    pub async fn find_by_email(&self, email: &str) -> AppResult<Option<User>> {
        sqlx::query_as::<_, User>("SELECT * FROM users WHERE LOWER(email) = LOWER($1)")
            .bind(email)
            .fetch_optional(&self.pool)
            .await
            .map_err(|e| {
                AppError::with_source(ErrorKind::Database, "Failed to find user by email", e)
            })
    }

    /// Create a new user.
    ///
    /// The email is stored lower-cased; a duplicate (case-insensitive)
    /// email maps to a Conflict via the unique index.
    pub async fn create(&self, data: &CreateUser) -> AppResult<User> {
        sqlx::query_as::<_, User>(
            "INSERT INTO users (name, email, password_hash, role, is_approved, company, phone, location) \
             VALUES ($1, LOWER($2), $3, $4, $5, $6, $7, $8) \
             RETURNING *",
        )
        .bind(&data.name)
        .bind(&data.email)
        .bind(&data.password_hash)
        .bind(data.role)
        .bind(data.is_approved)
        .bind(&data.company)
        .bind(&data.phone)
        .bind(&data.location)
        .fetch_one(&self.pool)
        .await
        .map_err(|e| match e {
            sqlx::Error::Database(ref db_err)
                if db_err.constraint() == Some("users_email_lower_key") =>
            {
                AppError::conflict("Email is already registered")
            }
            _ => AppError::with_source(ErrorKind::Database, "Failed to create user", e),
        })
    }

    /// Apply a partial profile update. `None` fields keep their value.
    pub async fn update_profile(&self, user_id: Uuid, data: &UpdateProfile) -> AppResult<User> {
        sqlx::query_as::<_, User>(
            "UPDATE users SET name = COALESCE($2, name), \
                              phone = COALESCE($3, phone), \
                              location = COALESCE($4, location), \
                              bio = COALESCE($5, bio), \
                              skills = COALESCE($6, skills), \
                              experience = COALESCE($7, experience), \
                              education = COALESCE($8, education), \
                              password_hash = COALESCE($9, password_hash), \
                              updated_at = NOW() \
             WHERE id = $1 RETURNING *",
        )
        .bind(user_id)
        .bind(&data.name)
        .bind(&data.phone)
        .bind(&data.location)
        .bind(&data.bio)
        .bind(&data.skills)
        .bind(&data.experience)
        .bind(&data.education)
        .bind(&data.password_hash)
        .fetch_optional(&self.pool)
        .await
        .map_err(|e| AppError::with_source(ErrorKind::Database, "Failed to update profile", e))?
        .ok_or_else(|| AppError::not_found(format!("User {user_id} not found")))
    }

    /// Update a user's approval flag.
    pub async fn set_approved(&self, user_id: Uuid, approved: bool) -> AppResult<User> {
        sqlx::query_as::<_, User>(
            "UPDATE users SET is_approved = $2, updated_at = NOW() WHERE id = $1 RETURNING *",
        )
        .bind(user_id)
        .bind(approved)
        .fetch_optional(&self.pool)
        .await
        .map_err(|e| AppError::with_source(ErrorKind::Database, "Failed to update approval", e))?
        .ok_or_else(|| AppError::not_found(format!("User {user_id} not found")))
    }

    /// List users with pagination and an optional role filter.
    pub async fn find_all(
        &self,
        role: Option<UserRole>,
        page: &PageRequest,
    ) -> AppResult<PageResponse<User>> {
        let total: i64 =
            sqlx::query_scalar("SELECT COUNT(*) FROM users WHERE ($1::user_role IS NULL OR role = $1)")
                .bind(role)
                .fetch_one(&self.pool)
                .await
                .map_err(|e| {
                    AppError::with_source(ErrorKind::Database, "Failed to count users", e)
                })?;

        let users = sqlx::query_as::<_, User>(
            "SELECT * FROM users WHERE ($1::user_role IS NULL OR role = $1) \
             ORDER BY created_at DESC LIMIT $2 OFFSET $3",
        )
        .bind(role)
        .bind(page.limit() as i64)
        .bind(page.offset() as i64)
        .fetch_all(&self.pool)
        .await
        .map_err(|e| AppError::with_source(ErrorKind::Database, "Failed to list users", e))?;

        Ok(PageResponse::new(
            users,
            page.page,
            page.page_size,
            total as u64,
        ))
    }

    /// List employers awaiting approval, newest first.
    pub async fn find_pending_employers(&self) -> AppResult<Vec<User>> {
        sqlx::query_as::<_, User>(
            "SELECT * FROM users WHERE role = 'employer' AND is_approved = FALSE \
             ORDER BY created_at DESC",
        )
        .fetch_all(&self.pool)
        .await
        .map_err(|e| {
            AppError::with_source(ErrorKind::Database, "Failed to list pending employers", e)
        })
    }

    /// Delete a user by ID.
    pub async fn delete(&self, user_id: Uuid) -> AppResult<bool> {
        let result = sqlx::query("DELETE FROM users WHERE id = $1")
            .bind(user_id)
            .execute(&self.pool)
            .await
            .map_err(|e| AppError::with_source(ErrorKind::Database, "Failed to delete user", e))?;

        Ok(result.rows_affected() > 0)
    }

    /// Aggregate user counts by role for the admin dashboard.
    pub async fn counts(&self) -> AppResult<UserCounts> {
        sqlx::query_as::<_, UserCounts>(
            "SELECT COUNT(*) AS total, \
                    COUNT(*) FILTER (WHERE role = 'applicant') AS applicants, \
                    COUNT(*) FILTER (WHERE role = 'employer') AS employers, \
                    COUNT(*) FILTER (WHERE role = 'employer' AND is_approved = FALSE) \
                        AS pending_employers \
             FROM users",
        )
        .fetch_one(&self.pool)
        .await
        .map_err(|e| AppError::with_source(ErrorKind::Database, "Failed to count users", e))
    }
}

//! Identity operations — registration, login, and profile management.

use std::sync::Arc;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use tracing::info;
use uuid::Uuid;
use validator::ValidateEmail;

use hirehub_auth::jwt::{JwtDecoder, JwtEncoder};
use hirehub_auth::password::{PasswordHasher, PasswordValidator};
use hirehub_auth::policy::Actor;
use hirehub_core::error::AppError;
use hirehub_core::result::AppResult;
use hirehub_database::repositories::UserRepository;
use hirehub_entity::user::{CreateUser, UpdateProfile, User, UserRole};
use hirehub_notify::Notifier;

/// Data submitted at registration.
#[derive(Debug, Clone, Deserialize)]
pub struct RegisterRequest {
    /// Full name.
    pub name: String,
    /// Email address.
    pub email: String,
    /// Plaintext password.
    pub password: String,
    /// Requested role. `admin` is rejected here; admins are provisioned
    /// out of band.
    pub role: UserRole,
    /// Company name, required for employers.
    pub company: Option<String>,
    /// Contact phone number.
    pub phone: Option<String>,
    /// Location.
    pub location: Option<String>,
}

/// A successful authentication: the user plus a session token.
#[derive(Debug, Clone, Serialize)]
pub struct AuthSession {
    /// The authenticated user.
    pub user: User,
    /// Signed bearer token.
    pub token: String,
    /// When the token expires.
    pub expires_at: DateTime<Utc>,
}

/// Profile fields a user may change about themselves.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct UpdateProfileRequest {
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
    /// New plaintext password.
    pub password: Option<String>,
}

/// Handles registration, login, and profile self-service.
#[derive(Debug, Clone)]
pub struct IdentityService {
    /// User repository.
    users: Arc<UserRepository>,
    /// Password hasher.
    hasher: Arc<PasswordHasher>,
    /// Password policy.
    password_policy: Arc<PasswordValidator>,
    /// Session token encoder.
    encoder: Arc<JwtEncoder>,
    /// Session token decoder.
    decoder: Arc<JwtDecoder>,
    /// Notification sink.
    notifier: Notifier,
}

impl IdentityService {
    /// Creates a new identity service.
    pub fn new(
        users: Arc<UserRepository>,
        hasher: Arc<PasswordHasher>,
        password_policy: Arc<PasswordValidator>,
        encoder: Arc<JwtEncoder>,
        decoder: Arc<JwtDecoder>,
        notifier: Notifier,
    ) -> Self {
        Self {
            users,
            hasher,
            password_policy,
            encoder,
            decoder,
            notifier,
        }
    }

    /// Registers a new applicant or employer account.
    ///
    /// Employers start unapproved and cannot post jobs until an admin
    /// approves them. Registering as admin is rejected outright.
    pub async fn register(&self, req: RegisterRequest) -> AppResult<AuthSession> {
        validate_registration(&req)?;
        self.password_policy.validate(&req.password)?;

        let password_hash = self.hasher.hash_password(&req.password)?;
        let user = self
            .users
            .create(&CreateUser {
                name: req.name.trim().to_string(),
                email: req.email.trim().to_string(),
                password_hash,
                role: req.role,
                is_approved: req.role.approved_by_default(),
                company: req.company,
                phone: req.phone,
                location: req.location,
            })
            .await?;

        info!(user_id = %user.id, role = %user.role, "User registered");
        self.notifier.welcome(&user);

        self.session_for(user)
    }

    /// Authenticates an email/password pair.
    ///
    /// Unknown email and wrong password produce the same error, so the
    /// response does not reveal whether an account exists.
    pub async fn login(&self, email: &str, password: &str) -> AppResult<AuthSession> {
        let user = self
            .users
            .find_by_email(email)
            .await?
            .ok_or_else(invalid_credentials)?;

        if !self.hasher.verify_password(password, &user.password_hash)? {
            return Err(invalid_credentials());
        }

        info!(user_id = %user.id, "User logged in");
        self.session_for(user)
    }

    /// Resolves a bearer token to the current user and acting identity.
    ///
    /// Role and approval state come from the database, not the token, so
    /// admin actions take effect on the next request.
    pub async fn authenticate(&self, token: &str) -> AppResult<(User, Actor)> {
        let claims = self.decoder.decode_token(token)?;
        let user = self
            .users
            .find_by_id(claims.sub)
            .await?
            .ok_or_else(|| AppError::unauthorized("Account no longer exists"))?;

        let actor = Actor::new(user.id, user.role, user.is_approved);
        Ok((user, actor))
    }

    /// Gets a user's full profile by ID.
    pub async fn get_user(&self, user_id: Uuid) -> AppResult<User> {
        self.users
            .find_by_id(user_id)
            .await?
            .ok_or_else(|| AppError::not_found("User not found"))
    }

    /// Updates the current user's profile fields.
    pub async fn update_profile(
        &self,
        actor: &Actor,
        req: UpdateProfileRequest,
    ) -> AppResult<User> {
        if let Some(name) = &req.name {
            if name.trim().is_empty() {
                return Err(AppError::validation("Name cannot be empty"));
            }
        }

        let password_hash = match &req.password {
            Some(password) => {
                self.password_policy.validate(password)?;
                Some(self.hasher.hash_password(password)?)
            }
            None => None,
        };

        let user = self
            .users
            .update_profile(
                actor.user_id,
                &UpdateProfile {
                    name: req.name,
                    phone: req.phone,
                    location: req.location,
                    bio: req.bio,
                    skills: req.skills,
                    experience: req.experience,
                    education: req.education,
                    password_hash,
                },
            )
            .await?;

        info!(user_id = %actor.user_id, "Profile updated");
        Ok(user)
    }

    fn session_for(&self, user: User) -> AppResult<AuthSession> {
        let (token, expires_at) = self.encoder.generate_token(user.id)?;
        Ok(AuthSession {
            user,
            token,
            expires_at,
        })
    }
}

fn invalid_credentials() -> AppError {
    AppError::unauthorized("Invalid email or password")
}

fn validate_registration(req: &RegisterRequest) -> AppResult<()> {
    if req.name.trim().is_empty() {
        return Err(AppError::validation("Name is required"));
    }
    if !req.email.validate_email() {
        return Err(AppError::validation("Invalid email format"));
    }
    match req.role {
        UserRole::Admin => Err(AppError::validation("Cannot register as admin")),
        UserRole::Employer => {
            let has_company = req
                .company
                .as_deref()
                .is_some_and(|c| !c.trim().is_empty());
            if !has_company {
                return Err(AppError::validation(
                    "Company name is required for employer accounts",
                ));
            }
            Ok(())
        }
        UserRole::Applicant => Ok(()),
    }
}

//! `AuthUser` extractor — pulls the bearer token from the Authorization
//! header, validates it, and loads the acting identity.

use axum::extract::FromRequestParts;
use axum::http::request::Parts;

use hirehub_auth::policy::Actor;
use hirehub_core::error::AppError;
use hirehub_entity::user::User;

use crate::error::ApiError;
use crate::state::AppState;

/// Extracted authenticated identity available in handlers.
///
/// The user row is loaded fresh on every request, so role changes,
/// approval revocation, and account deletion take effect immediately.
#[derive(Debug, Clone)]
pub struct AuthUser {
    /// The authenticated user's full row.
    pub user: User,
    /// The identity policy checks run against.
    pub actor: Actor,
}

impl FromRequestParts<AppState> for AuthUser {
    type Rejection = ApiError;

    async fn from_request_parts(
        parts: &mut Parts,
        state: &AppState,
    ) -> Result<Self, Self::Rejection> {
        let token = bearer_token(parts)?;
        let (user, actor) = state.identity.authenticate(token).await?;
        Ok(AuthUser { user, actor })
    }
}

/// Like [`AuthUser`], but absent rather than rejecting when no
/// Authorization header is present. Used on endpoints that are public
/// but show more to owners and admins.
#[derive(Debug, Clone)]
pub struct MaybeAuthUser(pub Option<AuthUser>);

impl FromRequestParts<AppState> for MaybeAuthUser {
    type Rejection = ApiError;

    async fn from_request_parts(
        parts: &mut Parts,
        state: &AppState,
    ) -> Result<Self, Self::Rejection> {
        if parts.headers.get("authorization").is_none() {
            return Ok(MaybeAuthUser(None));
        }
        let auth = AuthUser::from_request_parts(parts, state).await?;
        Ok(MaybeAuthUser(Some(auth)))
    }
}

fn bearer_token(parts: &Parts) -> Result<&str, ApiError> {
    let header = parts
        .headers
        .get("authorization")
        .and_then(|v| v.to_str().ok())
        .ok_or_else(|| AppError::unauthorized("Missing Authorization header"))?;

    header
        .strip_prefix("Bearer ")
        .ok_or_else(|| AppError::unauthorized("Invalid Authorization header format").into())
}

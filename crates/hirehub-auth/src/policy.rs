//! The ordered authorization policy.
//!
//! Every mutating operation evaluates, in order: role membership, the
//! employer approval gate, and resource ownership. Each check is a pure
//! function over the authenticated identity and the resource; the first
//! failure short-circuits before the operation runs, so no partial side
//! effects can occur.

use uuid::Uuid;

use hirehub_core::error::AppError;
use hirehub_entity::user::UserRole;

/// The authenticated identity a policy decision is made against.
///
/// Role and approval state come from the database at request time, not
/// from token claims, so admin actions (approval revocation, deletion)
/// take effect immediately.
#[derive(Debug, Clone, Copy)]
pub struct Actor {
    /// The authenticated user's ID.
    pub user_id: Uuid,
    /// The user's current role.
    pub role: UserRole,
    /// The user's current approval state.
    pub is_approved: bool,
}

impl Actor {
    /// Create a new actor.
    pub fn new(user_id: Uuid, role: UserRole, is_approved: bool) -> Self {
        Self {
            user_id,
            role,
            is_approved,
        }
    }
}

/// Check that the actor's role is in the operation's allow-list.
pub fn require_role(actor: &Actor, allowed: &[UserRole]) -> Result<(), AppError> {
    if allowed.contains(&actor.role) {
        Ok(())
    } else {
        Err(AppError::forbidden(format!(
            "User role '{}' is not authorized for this operation",
            actor.role
        )))
    }
}

/// Check the employer approval gate.
///
/// Employers cannot post or mutate jobs until an admin has approved
/// their account. Non-employer roles pass through unaffected.
pub fn require_approved(actor: &Actor) -> Result<(), AppError> {
    if actor.role.is_employer() && !actor.is_approved {
        return Err(AppError::forbidden(
            "Your account is pending approval by admin",
        ));
    }
    Ok(())
}

/// Check that the actor owns the job.
pub fn require_job_owner(actor: &Actor, posted_by: Uuid) -> Result<(), AppError> {
    if actor.user_id == posted_by {
        Ok(())
    } else {
        Err(AppError::forbidden("Not authorized to manage this job"))
    }
}

/// Check that the actor owns the job or is an admin.
pub fn require_job_owner_or_admin(actor: &Actor, posted_by: Uuid) -> Result<(), AppError> {
    if actor.role.is_admin() {
        return Ok(());
    }
    require_job_owner(actor, posted_by)
}

/// Check that the actor is a party to the application: the applicant who
/// submitted it, the employer who owns the parent job, or an admin.
pub fn require_application_party(
    actor: &Actor,
    applicant_id: Uuid,
    job_posted_by: Uuid,
) -> Result<(), AppError> {
    if actor.role.is_admin()
        || actor.user_id == applicant_id
        || actor.user_id == job_posted_by
    {
        Ok(())
    } else {
        Err(AppError::forbidden(
            "Not authorized to view this application",
        ))
    }
}

//! Lifecycle event notifications.

use hirehub_entity::application::ApplicationStatus;
use hirehub_entity::job::Job;
use hirehub_entity::user::{User, UserRole};

use crate::mailer::Mailer;

/// Composes and dispatches lifecycle notifications.
///
/// All methods are fire-and-forget; see [`Mailer::send`].
#[derive(Debug, Clone)]
pub struct Notifier {
    mailer: Mailer,
}

impl Notifier {
    /// Create a notifier over the given mailer.
    pub fn new(mailer: Mailer) -> Self {
        Self { mailer }
    }

    /// Welcome a freshly registered user.
    pub fn welcome(&self, user: &User) {
        let mut body = format!(
            "Hi {},\n\nThank you for registering as a {}.\n",
            user.name, user.role
        );
        if user.role == UserRole::Employer {
            body.push_str("Your account is pending approval by our admin team.\n");
        }
        body.push_str("\nBest regards,\nThe HireHub Team\n");

        self.mailer.send(&user.email, "Welcome to HireHub", &body);
    }

    /// Confirm that an application was received.
    pub fn application_received(&self, applicant: &User, job: &Job) {
        let body = format!(
            "Hi {},\n\nYour application for {} at {} has been received.\n\
             We'll notify you of any updates.\n\nBest regards,\nThe HireHub Team\n",
            applicant.name, job.title, job.company
        );
        self.mailer
            .send(&applicant.email, "Application Received", &body);
    }

    /// Tell the applicant their application status changed.
    pub fn application_status_changed(
        &self,
        applicant: &User,
        job: &Job,
        status: ApplicationStatus,
        notes: &str,
    ) {
        let mut body = format!(
            "Hi {},\n\nYour application for {} has been updated.\nNew status: {}\n",
            applicant.name, job.title, status
        );
        if !notes.is_empty() {
            body.push_str(&format!("Notes: {notes}\n"));
        }
        body.push_str("\nBest regards,\nThe HireHub Team\n");

        self.mailer
            .send(&applicant.email, "Application Status Update", &body);
    }

    /// Tell the employer their job posting went live.
    pub fn job_approved(&self, employer: &User, job: &Job) {
        let body = format!(
            "Hi {},\n\nYour job posting {} has been approved and is now live.\n\n\
             Best regards,\nThe HireHub Team\n",
            employer.name, job.title
        );
        self.mailer
            .send(&employer.email, "Job Posting Approved", &body);
    }
}

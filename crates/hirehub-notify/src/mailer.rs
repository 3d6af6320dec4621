//! SMTP delivery via a spawned background task.

use lettre::message::header::ContentType;
use lettre::transport::smtp::authentication::Credentials;
use lettre::{Message, SmtpTransport, Transport};
use tracing::{debug, warn};

use hirehub_core::config::email::EmailConfig;

/// Sends mail through an SMTP relay without blocking the caller.
#[derive(Debug, Clone)]
pub struct Mailer {
    config: EmailConfig,
}

impl Mailer {
    /// Create a mailer from email configuration.
    pub fn new(config: EmailConfig) -> Self {
        Self { config }
    }

    /// Queue a message for delivery and return immediately.
    ///
    /// Delivery happens on a blocking task; any failure is logged at
    /// `warn` and dropped. When email is disabled in configuration the
    /// message is logged at `debug` and discarded.
    pub fn send(&self, to: &str, subject: &str, body: &str) {
        if !self.config.enabled {
            debug!(to = %to, subject = %subject, "Email disabled; dropping notification");
            return;
        }

        let config = self.config.clone();
        let to = to.to_string();
        let subject = subject.to_string();
        let body = body.to_string();

        tokio::spawn(async move {
            let result = tokio::task::spawn_blocking(move || {
                let message = Message::builder()
                    .from(config.from_address.parse().map_err(|e| {
                        format!("invalid from address '{}': {e}", config.from_address)
                    })?)
                    .to(to.parse().map_err(|e| format!("invalid recipient '{to}': {e}"))?)
                    .subject(subject)
                    .header(ContentType::TEXT_PLAIN)
                    .body(body)
                    .map_err(|e| format!("failed to build message: {e}"))?;

                let mailer = SmtpTransport::relay(&config.smtp_host)
                    .map_err(|e| format!("failed to create SMTP transport: {e}"))?
                    .credentials(Credentials::new(
                        config.smtp_user.clone(),
                        config.smtp_password.clone(),
                    ))
                    .build();

                mailer
                    .send(&message)
                    .map_err(|e| format!("SMTP send failed: {e}"))
            })
            .await;

            match result {
                Ok(Ok(_)) => debug!("Email sent"),
                Ok(Err(e)) => warn!(error = %e, "Failed to send email"),
                Err(e) => warn!(error = %e, "Email delivery task panicked"),
            }
        });
    }
}

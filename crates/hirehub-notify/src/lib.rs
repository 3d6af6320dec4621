//! # hirehub-notify
//!
//! The outbound email notification sink. Every send is fire-and-forget:
//! the message is handed to a spawned task and failures are logged,
//! never surfaced to the operation that triggered them. A job post or an
//! application must succeed even when the mail channel is down.

pub mod mailer;
pub mod notifier;

pub use mailer::Mailer;
pub use notifier::Notifier;

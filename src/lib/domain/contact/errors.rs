//! Contact relay errors

use thiserror::Error;

use crate::domain::communication::mailer::MailerError;

/// An error that can occur while relaying a validated submission
#[derive(Debug, Error)]
pub enum RelayError {
    /// The notification email could not be rendered
    #[error("failed to render the notification email")]
    Template(#[from] askama::Error),

    /// The delivery service reported a failure
    #[error(transparent)]
    Delivery(#[from] MailerError),
}

impl RelayError {
    /// Human-readable detail suitable for an error response body
    pub fn details(&self) -> String {
        match self {
            RelayError::Template(err) => err.to_string(),
            RelayError::Delivery(err) => err.to_string(),
        }
    }
}

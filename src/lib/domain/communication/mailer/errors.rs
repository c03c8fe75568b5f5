//! Mailer errors

use lettre::{address::AddressError, error::Error};
use thiserror::Error;

/// Mailer errors
#[derive(Debug, Error)]
pub enum MailerError {
    /// The provider rejected the message
    #[error("{0}")]
    Rejected(String),

    /// Invalid email address
    #[error("Invalid email address")]
    InvalidAddress,

    /// Unknown error
    #[error("Unknown error occurred")]
    Unknown(#[source] anyhow::Error),
}

impl From<anyhow::Error> for MailerError {
    fn from(err: anyhow::Error) -> Self {
        MailerError::Unknown(err)
    }
}

impl From<AddressError> for MailerError {
    fn from(_err: AddressError) -> Self {
        MailerError::InvalidAddress
    }
}

impl From<Error> for MailerError {
    fn from(err: Error) -> Self {
        MailerError::Unknown(err.into())
    }
}

//! Contact-form submission

use thiserror::Error;

use crate::domain::communication::email_address::EmailAddress;

/// An error that can occur when validating a submission
#[derive(Debug, Error, PartialEq, Eq)]
pub enum SubmissionError {
    /// One or more required fields are empty
    #[error("all fields are required")]
    MissingFields,

    /// The sender's email address fails the shape check
    #[error("invalid email format")]
    InvalidEmailAddress,
}

/// A validated contact-form submission.
///
/// Can only be constructed through [`Submission::new`], so holding one
/// guarantees all three fields are non-empty and the email address passed
/// the shape check.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Submission {
    name: String,
    email: EmailAddress,
    message: String,
}

impl Submission {
    /// Validate the raw form fields into a submission.
    ///
    /// Empty fields are reported before a malformed email address, so a
    /// blank email yields [`SubmissionError::MissingFields`].
    pub fn new(name: &str, email: &str, message: &str) -> Result<Self, SubmissionError> {
        if name.trim().is_empty() || email.trim().is_empty() || message.trim().is_empty() {
            return Err(SubmissionError::MissingFields);
        }

        let email = EmailAddress::new(email).map_err(|_| SubmissionError::InvalidEmailAddress)?;

        Ok(Self {
            name: name.to_string(),
            email,
            message: message.to_string(),
        })
    }

    /// The sender's display name
    pub fn name(&self) -> &str {
        &self.name
    }

    /// The sender's email address
    pub fn email(&self) -> &EmailAddress {
        &self.email
    }

    /// The free-form message body
    pub fn message(&self) -> &str {
        &self.message
    }
}

#[cfg(test)]
mod tests {
    use testresult::TestResult;

    use super::*;

    #[test]
    fn test_valid_submission() -> TestResult {
        let submission = Submission::new("Ada", "ada@example.com", "Hello\nWorld")?;

        assert_eq!(submission.name(), "Ada");
        assert_eq!(submission.email().as_str(), "ada@example.com");
        assert_eq!(submission.message(), "Hello\nWorld");

        Ok(())
    }

    #[test]
    fn test_empty_name_is_rejected() {
        let result = Submission::new("", "ada@example.com", "Hello");
        assert_eq!(result.unwrap_err(), SubmissionError::MissingFields);
    }

    #[test]
    fn test_empty_email_is_rejected_as_missing_field() {
        let result = Submission::new("Ada", "", "Hello");
        assert_eq!(result.unwrap_err(), SubmissionError::MissingFields);
    }

    #[test]
    fn test_empty_message_is_rejected() {
        let result = Submission::new("Ada", "ada@example.com", "");
        assert_eq!(result.unwrap_err(), SubmissionError::MissingFields);
    }

    #[test]
    fn test_whitespace_only_message_is_rejected() {
        let result = Submission::new("Ada", "ada@example.com", "   \n ");
        assert_eq!(result.unwrap_err(), SubmissionError::MissingFields);
    }

    #[test]
    fn test_malformed_email_is_rejected() {
        let result = Submission::new("Ada", "not-an-email", "Hello");
        assert_eq!(result.unwrap_err(), SubmissionError::InvalidEmailAddress);
    }
}

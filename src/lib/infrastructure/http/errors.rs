//! API error-handling module

use std::fmt;

use axum::{
    extract::rejection::JsonRejection,
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

use crate::domain::contact::{errors::RelayError, submission::SubmissionError};

/// An error response
#[derive(Debug, Deserialize, Serialize, ToSchema)]
pub struct ErrorResponse {
    /// The error message
    #[schema(example = "Failed to send email")]
    pub error: String,

    /// Further human-readable detail, present on server errors
    #[schema(example = "rate limit exceeded")]
    #[serde(skip_serializing_if = "Option::is_none")]
    pub details: Option<String>,
}

/// An error raised in the API
#[derive(Debug, Deserialize, ToSchema)]
pub struct ApiError {
    /// The status code
    #[schema(example = 500, value_type = u16)]
    #[serde(with = "http_serde::status_code")]
    pub status: StatusCode,

    /// The error message
    #[schema(example = "Failed to send email")]
    pub message: String,

    /// Further human-readable detail
    pub details: Option<String>,
}

impl ApiError {
    /// Create a new API error
    pub fn new(status: StatusCode, message: &str) -> Self {
        Self {
            status,
            message: message.to_string(),
            details: None,
        }
    }

    /// Create a new bad request error
    pub fn new_400(message: &str) -> Self {
        Self::new(StatusCode::BAD_REQUEST, message)
    }

    /// Create a new internal server error carrying failure detail
    pub fn new_500(message: &str, details: &str) -> Self {
        Self {
            status: StatusCode::INTERNAL_SERVER_ERROR,
            message: message.to_string(),
            details: Some(details.to_string()),
        }
    }
}

impl fmt::Display for ApiError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.message)
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        (
            self.status,
            Json(ErrorResponse {
                error: self.message,
                details: self.details,
            }),
        )
            .into_response()
    }
}

impl From<SubmissionError> for ApiError {
    fn from(err: SubmissionError) -> Self {
        match err {
            SubmissionError::MissingFields => ApiError::new_400("All fields are required"),
            SubmissionError::InvalidEmailAddress => ApiError::new_400("Invalid email format"),
        }
    }
}

impl From<RelayError> for ApiError {
    fn from(err: RelayError) -> Self {
        ApiError::new_500("Failed to send email", &err.details())
    }
}

impl From<JsonRejection> for ApiError {
    fn from(rejection: JsonRejection) -> Self {
        ApiError::new(rejection.status(), &rejection.body_text())
    }
}

impl From<anyhow::Error> for ApiError {
    fn from(err: anyhow::Error) -> Self {
        ApiError {
            status: StatusCode::INTERNAL_SERVER_ERROR,
            message: err.to_string(),
            details: None,
        }
    }
}

#[cfg(test)]
mod tests {
    use axum::{body::to_bytes, http::StatusCode, response::IntoResponse};
    use testresult::TestResult;

    use crate::domain::{
        communication::mailer::MailerError,
        contact::{errors::RelayError, submission::SubmissionError},
    };

    use super::ApiError;

    #[tokio::test]
    async fn test_error_response_without_details() -> TestResult {
        let error = ApiError::new_400("All fields are required");

        let response = error.into_response();

        assert_eq!(response.status(), StatusCode::BAD_REQUEST);

        let body = to_bytes(response.into_body(), usize::MAX).await?;

        assert_eq!(body, r#"{"error":"All fields are required"}"#);

        Ok(())
    }

    #[tokio::test]
    async fn test_error_response_with_details() -> TestResult {
        let error = ApiError::new_500("Failed to send email", "rate limit exceeded");

        let response = error.into_response();

        assert_eq!(response.status(), StatusCode::INTERNAL_SERVER_ERROR);

        let body = to_bytes(response.into_body(), usize::MAX).await?;

        assert_eq!(
            body,
            r#"{"error":"Failed to send email","details":"rate limit exceeded"}"#
        );

        Ok(())
    }

    #[test]
    fn test_api_error_from_submission_errors() {
        let missing = ApiError::from(SubmissionError::MissingFields);
        assert_eq!(missing.status, StatusCode::BAD_REQUEST);
        assert_eq!(missing.message, "All fields are required");

        let invalid = ApiError::from(SubmissionError::InvalidEmailAddress);
        assert_eq!(invalid.status, StatusCode::BAD_REQUEST);
        assert_eq!(invalid.message, "Invalid email format");
    }

    #[test]
    fn test_api_error_from_relay_error() {
        let err = RelayError::Delivery(MailerError::Rejected("rate limit exceeded".to_string()));
        let api_error = ApiError::from(err);

        assert_eq!(api_error.status, StatusCode::INTERNAL_SERVER_ERROR);
        assert_eq!(api_error.message, "Failed to send email");
        assert_eq!(api_error.details, Some("rate limit exceeded".to_string()));
    }

    #[test]
    fn test_api_error_uses_placeholder_for_unknown_failures() {
        let err = RelayError::Delivery(MailerError::Unknown(anyhow::anyhow!("socket closed")));
        let api_error = ApiError::from(err);

        assert_eq!(api_error.details, Some("Unknown error occurred".to_string()));
    }
}

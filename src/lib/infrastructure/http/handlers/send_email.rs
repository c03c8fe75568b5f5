//! Send email handler

use axum::{
    extract::{rejection::JsonRejection, State},
    Json,
};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

use crate::{
    domain::{
        communication::mailer::DeliveryReceipt,
        contact::{
            service::ContactService,
            submission::{Submission, SubmissionError},
        },
    },
    infrastructure::http::{
        errors::{ApiError, ErrorResponse},
        state::AppState,
    },
};

/// Send email request body.
///
/// Fields are optional at the boundary so an absent field and an empty one
/// are rejected the same way; non-string values are rejected by the JSON
/// extractor instead of being coerced.
#[derive(Clone, Debug, Serialize, Deserialize, ToSchema)]
pub struct SendEmailBody {
    /// The sender's display name
    #[schema(example = "Ada")]
    name: Option<String>,

    /// The sender's email address
    #[schema(example = "ada@example.com")]
    email: Option<String>,

    /// The free-form message
    #[schema(example = "Hello")]
    message: Option<String>,
}

impl TryFrom<SendEmailBody> for Submission {
    type Error = SubmissionError;

    fn try_from(body: SendEmailBody) -> Result<Self, Self::Error> {
        Submission::new(
            body.name.as_deref().unwrap_or_default(),
            body.email.as_deref().unwrap_or_default(),
            body.message.as_deref().unwrap_or_default(),
        )
    }
}

/// Send email response body
#[derive(Debug, Serialize, Deserialize, ToSchema)]
pub struct SendEmailResponse {
    /// Whether the email was accepted for delivery
    #[schema(example = true)]
    pub success: bool,

    /// Human-readable confirmation
    #[schema(example = "Email sent successfully")]
    pub message: String,

    /// The delivery receipt returned by the email provider
    pub data: DeliveryReceipt,
}

/// Validate a contact-form submission and relay it as an email
#[utoipa::path(
    post,
    operation_id = "send_email",
    tag = "Contact",
    path = "/api/send-email",
    request_body = SendEmailBody,
    responses(
        (status = StatusCode::OK, description = "Email sent", body = SendEmailResponse),
        (status = StatusCode::BAD_REQUEST, description = "Missing fields or malformed email", body = ErrorResponse),
        (status = StatusCode::INTERNAL_SERVER_ERROR, description = "Delivery failed", body = ErrorResponse),
    )
)]
pub async fn handler<C: ContactService>(
    State(state): State<AppState<C>>,
    request: Result<Json<SendEmailBody>, JsonRejection>,
) -> Result<Json<SendEmailResponse>, ApiError> {
    let Json(body) = request?;

    let submission: Submission = body.try_into()?;

    let data = state.contact.relay(&submission).await?;

    Ok(Json(SendEmailResponse {
        success: true,
        message: "Email sent successfully".to_string(),
        data,
    }))
}

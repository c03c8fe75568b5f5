//! Diagnostic handler

use axum::{extract::State, Json};
use chrono::{SecondsFormat, Utc};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

use crate::{
    domain::contact::service::ContactService,
    infrastructure::http::state::AppState,
};

/// The diagnostic response
#[derive(Debug, Serialize, Deserialize, ToSchema)]
pub struct DiagnosticsResponse {
    /// Fixed confirmation message
    #[schema(example = "Backend is working!")]
    pub message: String,

    /// The current server time, RFC 3339
    #[schema(example = "2024-01-01T00:00:00.000Z")]
    pub timestamp: String,

    /// The active runtime-environment label
    #[schema(example = "development")]
    pub environment: String,
}

/// Report the current time and environment
#[utoipa::path(
    get,
    operation_id = "diagnostics",
    tag = "System",
    path = "/test",
    responses(
        (status = StatusCode::OK, description = "Diagnostic response", body = DiagnosticsResponse),
    )
)]
pub async fn handler<C: ContactService>(
    State(state): State<AppState<C>>,
) -> Json<DiagnosticsResponse> {
    Json(DiagnosticsResponse {
        message: "Backend is working!".to_string(),
        timestamp: Utc::now().to_rfc3339_opts(SecondsFormat::Millis, true),
        environment: state.config.environment.clone(),
    })
}

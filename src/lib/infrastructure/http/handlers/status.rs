//! Liveness handler

use axum::Json;
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

/// The status response
#[derive(Debug, Serialize, Deserialize, ToSchema)]
pub struct StatusResponse {
    /// Fixed service descriptor
    #[schema(example = "Portfolio API Server is running")]
    pub status: String,

    /// The running version of the service
    #[schema(example = "1.0.0")]
    pub version: String,
}

/// Report that the service is up
#[utoipa::path(
    get,
    operation_id = "status",
    tag = "System",
    path = "/",
    responses(
        (status = StatusCode::OK, description = "Status response", body = StatusResponse),
    )
)]
pub async fn handler() -> Json<StatusResponse> {
    Json(StatusResponse {
        status: "Portfolio API Server is running".to_string(),
        version: env!("CARGO_PKG_VERSION").to_string(),
    })
}

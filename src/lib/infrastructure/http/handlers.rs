//! API handler modules

use std::any::Any;

use axum::{
    body::Body,
    http::{Response, StatusCode},
    response::IntoResponse,
    Json,
};

use super::errors::ErrorResponse;

pub mod diagnostics;
pub mod send_email;
pub mod status;

/// Catch panics and return a 500 error
pub fn panic_handler(err: Box<dyn Any + Send + 'static>) -> Response<Body> {
    let details = if let Some(s) = err.downcast_ref::<String>() {
        s.clone()
    } else if let Some(s) = err.downcast_ref::<&str>() {
        s.to_string()
    } else {
        "Unknown error occurred".to_string()
    };

    let error = ErrorResponse {
        error: "Internal server error".to_string(),
        details: Some(details),
    };

    let response = Json(error).into_response();

    (StatusCode::INTERNAL_SERVER_ERROR, response).into_response()
}

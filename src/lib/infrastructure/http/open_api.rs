//! OpenAPI module

use utoipa::OpenApi;

use crate::domain::communication::mailer::DeliveryReceipt;
use crate::infrastructure::http::{errors::ErrorResponse, handlers::*};

#[derive(Debug, OpenApi)]
#[openapi(
    info(title = "Portfolio Contact Relay"),
    paths(status::handler, diagnostics::handler, send_email::handler),
    components(schemas(
        status::StatusResponse,
        diagnostics::DiagnosticsResponse,
        send_email::SendEmailBody,
        send_email::SendEmailResponse,
        DeliveryReceipt,
        ErrorResponse,
    ))
)]
pub struct ApiDocs;

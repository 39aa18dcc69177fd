//! Gateway error types with HTTP status code mapping.
//!
//! [`GatewayError`] is the central error type for the gateway. Each variant
//! maps to a specific HTTP status code; the response body follows the wire
//! contract the storefront expects:
//!
//! ```json
//! { "success": false, "error": "numbers no longer available" }
//! ```

use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use serde::Serialize;

/// JSON body returned for every failed request.
#[derive(Debug, Serialize, utoipa::ToSchema)]
pub struct ErrorResponse {
    /// Always `false` on the error path.
    pub success: bool,
    /// Human-readable error message.
    pub error: String,
}

/// Server-side error enum with HTTP status code mapping.
///
/// | Variant              | HTTP Status               | Class                      |
/// |----------------------|---------------------------|----------------------------|
/// | `MissingCredential`  | 500 Internal Server Error | configuration, operator    |
/// | `ChargeRejected`     | 500 Internal Server Error | provider, buyer-visible    |
/// | `NumbersUnavailable` | 409 Conflict              | inventory race, re-select  |
/// | `InvalidRequest`     | 400 Bad Request           | validation                 |
/// | `MalformedWebhook`   | 400 Bad Request           | provider notification      |
/// | `NoPendingTickets`   | 404 Not Found             | reconciliation anomaly     |
/// | `Persistence`        | 500 Internal Server Error | database                   |
/// | `Internal`           | 500 Internal Server Error | catch-all                  |
#[derive(Debug, thiserror::Error)]
pub enum GatewayError {
    /// The PIX provider credential is not configured.
    #[error("payment provider credential is not configured")]
    MissingCredential,

    /// The PIX provider rejected the charge; its message is carried verbatim
    /// so the storefront can show the buyer something actionable.
    #[error("{0}")]
    ChargeRejected(String),

    /// One or more requested numbers were reserved by another buyer first.
    #[error("numbers no longer available, please select different numbers")]
    NumbersUnavailable,

    /// Request validation failed.
    #[error("invalid request: {0}")]
    InvalidRequest(String),

    /// The webhook notification could not be interpreted.
    #[error("malformed webhook: {0}")]
    MalformedWebhook(String),

    /// No pending tickets matched a paid notification. Expected outcome of
    /// an expired-and-swept reservation or a duplicate webhook delivery.
    #[error("no pending tickets found for this charge")]
    NoPendingTickets,

    /// Persistence layer failure.
    #[error("persistence error: {0}")]
    Persistence(String),

    /// Internal server error.
    #[error("internal error: {0}")]
    Internal(String),
}

impl GatewayError {
    /// Returns the HTTP status code for this variant.
    #[must_use]
    pub const fn status_code(&self) -> StatusCode {
        match self {
            Self::InvalidRequest(_) | Self::MalformedWebhook(_) => StatusCode::BAD_REQUEST,
            Self::NoPendingTickets => StatusCode::NOT_FOUND,
            Self::NumbersUnavailable => StatusCode::CONFLICT,
            Self::MissingCredential
            | Self::ChargeRejected(_)
            | Self::Persistence(_)
            | Self::Internal(_) => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }
}

impl IntoResponse for GatewayError {
    fn into_response(self) -> Response {
        let status = self.status_code();
        let body = ErrorResponse {
            success: false,
            error: self.to_string(),
        };
        let mut response = axum::Json(body).into_response();
        *response.status_mut() = status;
        response
    }
}

//! Provider webhook endpoint handler.

use axum::extract::State;
use axum::http::StatusCode;
use axum::response::IntoResponse;
use axum::routing::post;
use axum::{Json, Router};

use crate::api::dto::WebhookPayload;
use crate::app_state::AppState;
use crate::domain::ChargeTag;
use crate::error::{ErrorResponse, GatewayError};
use crate::gateway::{PAID_EVENT, PAID_STATUS};

/// `POST /pix/webhook` — Receive asynchronous payment notifications.
///
/// Non-paid events are acknowledged without touching state; the provider's
/// retry policy governs redelivery, so a duplicate paid notification lands
/// on zero pending rows and gets the 404 response.
///
/// # Errors
///
/// Returns [`GatewayError`] on a malformed external id, when no pending
/// tickets match, or on database failure.
#[utoipa::path(
    post,
    path = "/api/v1/pix/webhook",
    tag = "Payments",
    summary = "Provider payment webhook",
    description = "Transitions a charge's reserved tickets to sold when the provider reports \
                   the charge as paid. All other events are acknowledged and ignored.",
    request_body = WebhookPayload,
    responses(
        (status = 200, description = "Processed or ignored"),
        (status = 400, description = "Malformed external id", body = ErrorResponse),
        (status = 404, description = "No pending tickets for this charge", body = ErrorResponse),
        (status = 500, description = "Database failure", body = ErrorResponse),
    )
)]
pub async fn payment_webhook(
    State(state): State<AppState>,
    Json(payload): Json<WebhookPayload>,
) -> Result<impl IntoResponse, GatewayError> {
    if payload.event != PAID_EVENT {
        tracing::debug!(event = %payload.event, "ignoring non-paid webhook event");
        return Ok((StatusCode::OK, "OK"));
    }
    if payload.data.pix_qr_code.status != PAID_STATUS {
        tracing::debug!(
            status = %payload.data.pix_qr_code.status,
            "paid event carried non-paid charge status, ignoring"
        );
        return Ok((StatusCode::OK, "OK"));
    }

    let tag: ChargeTag = payload
        .data
        .metadata
        .external_id
        .parse()
        .map_err(|e: crate::domain::ChargeTagError| GatewayError::MalformedWebhook(e.to_string()))?;

    state
        .ticket_service
        .confirm_payment(tag.raffle_id(), &payload.data.pix_qr_code.id)
        .await?;

    Ok((StatusCode::OK, "OK"))
}

/// Webhook routes.
pub fn routes() -> Router<AppState> {
    Router::new().route("/pix/webhook", post(payment_webhook))
}

//! Charge creation and status poll endpoint handlers.

use axum::extract::State;
use axum::response::IntoResponse;
use axum::routing::post;
use axum::{Json, Router};

use crate::api::dto::{
    CheckStatusRequest, CheckStatusResponse, GeneratePixRequest, GeneratePixResponse, PixDataDto,
};
use crate::app_state::AppState;
use crate::domain::{BuyerInfo, ReservationRequest};
use crate::error::{ErrorResponse, GatewayError};
use crate::gateway::ChargeCustomer;

/// `POST /pix/charges` — Create a PIX charge and reserve the numbers.
///
/// # Errors
///
/// Returns [`GatewayError`] on invalid input, provider rejection, or when
/// any requested number is already held by another buyer.
#[utoipa::path(
    post,
    path = "/api/v1/pix/charges",
    tag = "Payments",
    summary = "Create charge and reserve tickets",
    description = "Creates a PIX QR-code charge at the provider and atomically reserves the \
                   selected numbers against it for the reservation window.",
    request_body = GeneratePixRequest,
    responses(
        (status = 200, description = "Charge created, tickets reserved", body = GeneratePixResponse),
        (status = 400, description = "Invalid request", body = ErrorResponse),
        (status = 409, description = "Numbers no longer available", body = ErrorResponse),
        (status = 500, description = "Provider or database failure", body = ErrorResponse),
    )
)]
pub async fn generate_pix(
    State(state): State<AppState>,
    Json(req): Json<GeneratePixRequest>,
) -> Result<impl IntoResponse, GatewayError> {
    let request = ReservationRequest {
        raffle_id: req.raffle_id,
        numbers: req.selected_numbers,
        amount: req.amount,
        description: req.description,
        buyer: BuyerInfo {
            name: req.customer.name.clone(),
            email: req.user_email,
            phone: Some(req.customer.cellphone.clone()),
        },
    };
    let customer = ChargeCustomer {
        name: req.customer.name,
        cellphone: req.customer.cellphone,
        email: req.customer.email,
        tax_id: req.customer.tax_id,
    };

    let (charge, tickets_reserved) = state
        .ticket_service
        .reserve_and_charge(request, customer)
        .await?;

    Ok(Json(GeneratePixResponse {
        success: true,
        pix_data: PixDataDto::from(charge),
        tickets_reserved,
    }))
}

/// `POST /pix/status` — Poll the payment state of a charge (read-only).
///
/// # Errors
///
/// Returns [`GatewayError`] on missing fields or database failure.
#[utoipa::path(
    post,
    path = "/api/v1/pix/status",
    tag = "Payments",
    summary = "Poll charge payment status",
    description = "Returns paid, pending, or not_found for the given charge. Safe to call \
                   repeatedly; the storefront polls this while waiting for the webhook.",
    request_body = CheckStatusRequest,
    responses(
        (status = 200, description = "Current payment state", body = CheckStatusResponse),
        (status = 400, description = "Missing fields", body = ErrorResponse),
        (status = 500, description = "Database failure", body = ErrorResponse),
    )
)]
pub async fn check_payment_status(
    State(state): State<AppState>,
    Json(req): Json<CheckStatusRequest>,
) -> Result<impl IntoResponse, GatewayError> {
    if req.pix_id.is_empty() || req.user_email.is_empty() {
        return Err(GatewayError::InvalidRequest(
            "pixId and userEmail are required".to_string(),
        ));
    }

    let poll = state
        .ticket_service
        .payment_status(&req.pix_id, &req.user_email, req.raffle_id)
        .await?;

    Ok(Json(CheckStatusResponse::from(poll)))
}

/// Charge routes.
pub fn routes() -> Router<AppState> {
    Router::new()
        .route("/pix/charges", post(generate_pix))
        .route("/pix/status", post(check_payment_status))
}

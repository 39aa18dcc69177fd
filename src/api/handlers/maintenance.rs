//! Maintenance endpoint handlers.

use axum::extract::State;
use axum::response::IntoResponse;
use axum::routing::post;
use axum::{Json, Router};
use serde::Serialize;
use utoipa::ToSchema;

use crate::app_state::AppState;
use crate::error::{ErrorResponse, GatewayError};

/// Response body for the expiry sweep.
#[derive(Debug, Serialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct CleanupResponse {
    /// Always `true` on the success path.
    pub success: bool,
    /// Human-readable summary.
    pub message: String,
    /// Number of reservations released back to the pool.
    pub expired_tickets_count: u64,
}

/// `POST /tickets/cleanup-expired` — Release expired, unpaid reservations.
///
/// The same sweep also runs on the in-process interval task; this endpoint
/// exists for external schedulers and manual runs. A failed run is
/// self-healing: the next run retries the same expired set.
///
/// # Errors
///
/// Returns [`GatewayError`] on database failure.
#[utoipa::path(
    post,
    path = "/api/v1/tickets/cleanup-expired",
    tag = "Maintenance",
    summary = "Sweep expired reservations",
    description = "Deletes every reserved ticket whose expiry has passed unpaid, returning \
                   the numbers to the available pool.",
    responses(
        (status = 200, description = "Sweep completed", body = CleanupResponse),
        (status = 500, description = "Database failure", body = ErrorResponse),
    )
)]
pub async fn cleanup_expired_tickets(
    State(state): State<AppState>,
) -> Result<impl IntoResponse, GatewayError> {
    let expired_tickets_count = state.ticket_service.sweep_expired().await?;

    Ok(Json(CleanupResponse {
        success: true,
        message: format!("released {expired_tickets_count} expired tickets"),
        expired_tickets_count,
    }))
}

/// Maintenance routes.
pub fn routes() -> Router<AppState> {
    Router::new().route("/tickets/cleanup-expired", post(cleanup_expired_tickets))
}

//! Status poller DTOs.

use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

use crate::domain::RaffleId;
use crate::service::PaymentPoll;

/// Request body for `POST /pix/status`.
#[derive(Debug, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct CheckStatusRequest {
    /// Provider charge id returned at reservation time.
    pub pix_id: String,
    /// Buyer email the rows were reserved under.
    pub user_email: String,
    /// Raffle the numbers belong to.
    pub raffle_id: RaffleId,
}

/// Tri-state outcome of one poll.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, ToSchema)]
#[serde(rename_all = "snake_case")]
pub enum PollStateDto {
    /// Payment confirmed; the tickets are sold to this buyer.
    Paid,
    /// Reservation still waiting for payment.
    Pending,
    /// No rows for this charge; start a new reservation.
    NotFound,
}

/// Response body for `POST /pix/status`.
#[derive(Debug, Serialize, ToSchema)]
pub struct CheckStatusResponse {
    /// Poll outcome driving the storefront's wait/success/restart behavior.
    pub status: PollStateDto,
    /// Ticket numbers involved, stringified as the storefront expects.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub tickets: Option<Vec<String>>,
    /// Human-readable summary of the outcome.
    pub message: String,
}

impl From<PaymentPoll> for CheckStatusResponse {
    fn from(poll: PaymentPoll) -> Self {
        match poll {
            PaymentPoll::Paid(numbers) => Self {
                status: PollStateDto::Paid,
                tickets: Some(stringify(&numbers)),
                message: "payment confirmed, tickets are yours".to_string(),
            },
            PaymentPoll::Pending(numbers) => Self {
                status: PollStateDto::Pending,
                tickets: Some(stringify(&numbers)),
                message: "awaiting payment confirmation".to_string(),
            },
            PaymentPoll::NotFound => Self {
                status: PollStateDto::NotFound,
                tickets: None,
                message: "no tickets found for this charge, please start over".to_string(),
            },
        }
    }
}

fn stringify(numbers: &[i32]) -> Vec<String> {
    numbers.iter().map(ToString::to_string).collect()
}

#[cfg(test)]
#[allow(clippy::panic)]
mod tests {
    use super::*;

    #[test]
    fn paid_poll_maps_to_string_tickets() {
        let response = CheckStatusResponse::from(PaymentPoll::Paid(vec![12, 34, 56]));
        assert_eq!(response.status, PollStateDto::Paid);
        assert_eq!(
            response.tickets,
            Some(vec!["12".to_string(), "34".to_string(), "56".to_string()])
        );
    }

    #[test]
    fn not_found_poll_has_no_tickets() {
        let response = CheckStatusResponse::from(PaymentPoll::NotFound);
        assert_eq!(response.status, PollStateDto::NotFound);
        assert!(response.tickets.is_none());
    }

    #[test]
    fn status_serializes_snake_case() {
        let response = CheckStatusResponse::from(PaymentPoll::NotFound);
        let json = serde_json::to_string(&response).unwrap_or_default();
        assert!(json.contains("\"status\":\"not_found\""));
    }
}

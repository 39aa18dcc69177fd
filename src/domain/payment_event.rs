//! Domain events reflecting ticket state mutations.
//!
//! Every state change emits a [`PaymentEvent`] through the
//! [`super::EventBus`]. Events are broadcast to WebSocket subscribers so a
//! storefront can react to a confirmed payment without polling.

use chrono::{DateTime, Utc};
use serde::Serialize;

use super::RaffleId;

/// Domain event emitted after every ticket state mutation.
#[derive(Debug, Clone, Serialize)]
#[serde(tag = "event_type", rename_all = "snake_case")]
pub enum PaymentEvent {
    /// Emitted when a charge is created and its numbers are reserved.
    TicketsReserved {
        /// Raffle the numbers belong to.
        raffle_id: RaffleId,
        /// Provider charge id linking the rows.
        payment_id: String,
        /// Numbers held for the buyer.
        numbers: Vec<i32>,
        /// Moment the reservation lapses unless paid.
        reserved_until: DateTime<Utc>,
        /// Reservation timestamp.
        timestamp: DateTime<Utc>,
    },

    /// Emitted when a paid webhook transitions reserved rows to sold.
    PaymentConfirmed {
        /// Raffle the numbers belong to.
        raffle_id: RaffleId,
        /// Provider charge id that was paid.
        payment_id: String,
        /// Numbers now sold.
        numbers: Vec<i32>,
        /// Confirmation timestamp.
        timestamp: DateTime<Utc>,
    },

    /// Emitted when the sweeper releases expired reservations.
    TicketsReleased {
        /// Raffle whose numbers returned to the pool.
        raffle_id: RaffleId,
        /// Numbers available again.
        numbers: Vec<i32>,
        /// Sweep timestamp.
        timestamp: DateTime<Utc>,
    },
}

impl PaymentEvent {
    /// Returns the raffle ID associated with this event.
    #[must_use]
    pub const fn raffle_id(&self) -> RaffleId {
        match self {
            Self::TicketsReserved { raffle_id, .. }
            | Self::PaymentConfirmed { raffle_id, .. }
            | Self::TicketsReleased { raffle_id, .. } => *raffle_id,
        }
    }

    /// Returns the event type as a static string slice.
    #[must_use]
    pub const fn event_type_str(&self) -> &'static str {
        match self {
            Self::TicketsReserved { .. } => "tickets_reserved",
            Self::PaymentConfirmed { .. } => "payment_confirmed",
            Self::TicketsReleased { .. } => "tickets_released",
        }
    }
}

#[cfg(test)]
#[allow(clippy::panic)]
mod tests {
    use super::*;

    #[test]
    fn payment_confirmed_event_type() {
        let event = PaymentEvent::PaymentConfirmed {
            raffle_id: RaffleId::new(),
            payment_id: "pix_char_123".to_string(),
            numbers: vec![12, 34, 56],
            timestamp: Utc::now(),
        };
        assert_eq!(event.event_type_str(), "payment_confirmed");
    }

    #[test]
    fn tickets_reserved_serializes() {
        let event = PaymentEvent::TicketsReserved {
            raffle_id: RaffleId::new(),
            payment_id: "pix_char_123".to_string(),
            numbers: vec![7],
            reserved_until: Utc::now(),
            timestamp: Utc::now(),
        };
        let json = serde_json::to_string(&event);
        assert!(json.is_ok());
        let json_str = json.unwrap_or_default();
        assert!(json_str.contains("tickets_reserved"));
        assert!(json_str.contains("pix_char_123"));
    }

    #[test]
    fn raffle_id_accessor() {
        let id = RaffleId::new();
        let event = PaymentEvent::TicketsReleased {
            raffle_id: id,
            numbers: vec![1, 2],
            timestamp: Utc::now(),
        };
        assert_eq!(event.raffle_id(), id);
    }
}

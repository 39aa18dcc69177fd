//! Ticket lifecycle vocabulary and reservation input.
//!
//! A ticket row exists only while a number is held: `reserved` while a
//! charge is awaiting payment, `sold` once the paid webhook lands. Available
//! numbers have no row at all; the sweeper deletes expired reservations to
//! return their numbers to the pool.

use serde::{Deserialize, Serialize};

use super::RaffleId;

/// Reservation state of a ticket row.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum TicketStatus {
    /// Held for one buyer until `reserved_until` passes.
    Reserved,
    /// Permanently sold; implies `payment_status = paid`.
    Sold,
}

impl TicketStatus {
    /// Returns the status as stored in the `status` column.
    #[must_use]
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::Reserved => "reserved",
            Self::Sold => "sold",
        }
    }

    /// Parses a stored column value. Returns `None` for unknown strings.
    #[must_use]
    pub fn parse_str(s: &str) -> Option<Self> {
        match s {
            "reserved" => Some(Self::Reserved),
            "sold" => Some(Self::Sold),
            _ => None,
        }
    }
}

/// Payment state of a ticket row's charge.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum PaymentStatus {
    /// Charge created, payment not yet confirmed.
    Pending,
    /// Payment confirmed by the provider.
    Paid,
    /// Payment failed at the provider.
    Failed,
    /// Payment refunded after confirmation.
    Refunded,
}

impl PaymentStatus {
    /// Returns the status as stored in the `payment_status` column.
    #[must_use]
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::Pending => "pending",
            Self::Paid => "paid",
            Self::Failed => "failed",
            Self::Refunded => "refunded",
        }
    }

    /// Parses a stored column value. Returns `None` for unknown strings.
    #[must_use]
    pub fn parse_str(s: &str) -> Option<Self> {
        match s {
            "pending" => Some(Self::Pending),
            "paid" => Some(Self::Paid),
            "failed" => Some(Self::Failed),
            "refunded" => Some(Self::Refunded),
            _ => None,
        }
    }
}

/// Buyer contact details captured at reservation time.
///
/// Denormalized onto every ticket row and immutable once set.
#[derive(Debug, Clone)]
pub struct BuyerInfo {
    /// Buyer's display name.
    pub name: String,
    /// Email the status poller matches on.
    pub email: String,
    /// Optional phone number.
    pub phone: Option<String>,
}

/// Validated input for one reservation attempt.
#[derive(Debug, Clone)]
pub struct ReservationRequest {
    /// Raffle the numbers belong to.
    pub raffle_id: RaffleId,
    /// Numbers the buyer selected.
    pub numbers: Vec<i32>,
    /// Total price in BRL.
    pub amount: f64,
    /// Charge description shown by the provider.
    pub description: String,
    /// Buyer snapshot stored on the rows.
    pub buyer: BuyerInfo,
}

#[cfg(test)]
#[allow(clippy::panic)]
mod tests {
    use super::*;

    #[test]
    fn ticket_status_round_trip() {
        for status in [TicketStatus::Reserved, TicketStatus::Sold] {
            assert_eq!(TicketStatus::parse_str(status.as_str()), Some(status));
        }
    }

    #[test]
    fn payment_status_round_trip() {
        for status in [
            PaymentStatus::Pending,
            PaymentStatus::Paid,
            PaymentStatus::Failed,
            PaymentStatus::Refunded,
        ] {
            assert_eq!(PaymentStatus::parse_str(status.as_str()), Some(status));
        }
    }

    #[test]
    fn unknown_status_rejected() {
        assert_eq!(TicketStatus::parse_str("available"), None);
        assert_eq!(PaymentStatus::parse_str("chargeback"), None);
    }

    #[test]
    fn status_serializes_lowercase() {
        let json = serde_json::to_string(&PaymentStatus::Paid).unwrap_or_default();
        assert_eq!(json, "\"paid\"");
    }
}

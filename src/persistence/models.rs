//! Row views returned by the ticket store.

use crate::domain::{PaymentStatus, RaffleId};

/// A ticket row as seen by the status poller: one number and the payment
/// state of its charge.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ChargeTicket {
    /// Ticket number within the raffle.
    pub number: i32,
    /// Payment state of the charge the row belongs to.
    pub payment_status: PaymentStatus,
}

/// A reservation deleted by the expiry sweep.
#[derive(Debug, Clone)]
pub struct ReleasedTicket {
    /// Raffle the number returned to.
    pub raffle_id: RaffleId,
    /// Number now available again.
    pub number: i32,
}

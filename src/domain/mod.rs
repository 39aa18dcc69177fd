//! Domain layer: core types and event system.
//!
//! This module contains the server-side domain model including raffle
//! identity, ticket lifecycle vocabulary, the charge tag that links a
//! provider charge back to its raffle, and the event bus for broadcasting
//! state changes.

pub mod charge_tag;
pub mod event_bus;
pub mod payment_event;
pub mod raffle_id;
pub mod ticket;

pub use charge_tag::{ChargeTag, ChargeTagError};
pub use event_bus::EventBus;
pub use payment_event::PaymentEvent;
pub use raffle_id::RaffleId;
pub use ticket::{BuyerInfo, PaymentStatus, ReservationRequest, TicketStatus};

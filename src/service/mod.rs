//! Service layer: business logic orchestration.
//!
//! [`TicketService`] coordinates the reservation/payment lifecycle across
//! the ticket store and the PIX provider, and emits events through the
//! [`super::domain::EventBus`].

pub mod ticket_service;

pub use ticket_service::{PaymentPoll, TicketService};

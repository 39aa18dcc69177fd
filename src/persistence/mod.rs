//! Persistence layer: the PostgreSQL ticket store.
//!
//! The `tickets` table is the single source of truth for reservation state.
//! The concrete implementation uses `sqlx::PgPool` for async PostgreSQL
//! access; schema migrations under `migrations/` run at startup.

pub mod models;
pub mod ticket_store;

pub use models::{ChargeTicket, ReleasedTicket};
pub use ticket_store::{NewReservation, TicketStore};

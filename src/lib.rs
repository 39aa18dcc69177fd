//! # rifa-gateway
//!
//! REST API gateway for raffle ticket reservation and PIX payment
//! reconciliation.
//!
//! This crate guards the one invariant that matters in a raffle: a numbered
//! ticket is never sold to two buyers. Reservations, payment reconciliation,
//! and expiry sweeps all coordinate through a shared PostgreSQL table with
//! conditional writes; the PIX provider is an external collaborator reached
//! over HTTP and heard from again via webhook.
//!
//! ## Architecture
//!
//! ```text
//! Storefront (HTTP, WebSocket)          PIX provider
//!     │                                     │
//!     ├── REST Handlers (api/)    ◄── webhook
//!     ├── WS Handler (ws/)
//!     │
//!     ├── TicketService (service/)  ──► PixClient (gateway/)
//!     ├── EventBus (domain/)
//!     │
//!     └── TicketStore (persistence/)
//!             │
//!         PostgreSQL
//! ```

pub mod api;
pub mod app_state;
pub mod config;
pub mod domain;
pub mod error;
pub mod gateway;
pub mod persistence;
pub mod service;
pub mod ws;

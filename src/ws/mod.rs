//! WebSocket layer: connection handling, message routing, subscriptions.
//!
//! The WebSocket endpoint at `/ws` pushes payment events to subscribed
//! storefronts so a confirmed payment can be shown without waiting for the
//! next poll. Polling via `POST /pix/status` remains the fallback path.

pub mod connection;
pub mod handler;
pub mod messages;
pub mod subscription;

//! PIX provider integration: outbound charge creation client and wire types.
//!
//! The provider is an external collaborator: charges are created over HTTP
//! and payment confirmations arrive asynchronously on the webhook endpoint.

pub mod client;
pub mod models;

pub use client::PixClient;
pub use models::{
    ChargeCustomer, ChargeMetadata, CreateChargeRequest, PAID_EVENT, PAID_STATUS, PixCharge,
};

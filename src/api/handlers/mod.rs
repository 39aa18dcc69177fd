//! REST endpoint handlers organized by resource.

pub mod maintenance;
pub mod pix;
pub mod system;
pub mod webhook;

use axum::Router;

use crate::app_state::AppState;

/// Composes all resource routes under `/api/v1`.
pub fn routes() -> Router<AppState> {
    Router::new()
        .merge(pix::routes())
        .merge(webhook::routes())
        .merge(maintenance::routes())
}

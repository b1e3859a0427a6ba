//! REST endpoint handlers organized by resource.

pub mod admin;
pub mod organizers;
pub mod registration;
pub mod system;

use axum::Router;

use crate::app_state::AppState;

/// Composes all resource routes under `/api/v1`.
pub fn routes() -> Router<AppState> {
    Router::new()
        .merge(registration::routes())
        .merge(organizers::routes())
        .merge(admin::routes())
}

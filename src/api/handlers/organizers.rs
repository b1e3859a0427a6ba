//! Organizer directory handler.

use axum::response::IntoResponse;
use axum::routing::get;
use axum::{Json, Router};

use crate::api::dto::OrganizersResponse;
use crate::app_state::AppState;
use crate::domain::catalog::FEST_NAME;
use crate::domain::organizers::{DEVELOPERS, ORGANIZERS, OrganizerCard};

/// `GET /organizers` — Organizing team and website developers.
#[utoipa::path(
    get,
    path = "/api/v1/organizers",
    tag = "Registration",
    summary = "List organizers",
    responses(
        (status = 200, description = "Organizer directory", body = OrganizersResponse),
    )
)]
pub async fn list_organizers() -> impl IntoResponse {
    Json(OrganizersResponse {
        fest_name: FEST_NAME.to_string(),
        organizers: ORGANIZERS.iter().map(OrganizerCard::from).collect(),
        developers: DEVELOPERS.iter().map(|d| (*d).to_string()).collect(),
    })
}

/// Organizer routes.
pub fn routes() -> Router<AppState> {
    Router::new().route("/organizers", get(list_organizers))
}

//! Public registration handlers: catalog, form prefill, submission.

use axum::extract::rejection::JsonRejection;
use axum::extract::{Query, State};
use axum::http::StatusCode;
use axum::response::IntoResponse;
use axum::routing::{get, post};
use axum::{Json, Router};

use crate::api::dto::{
    EventCatalogResponse, EventOptionDto, RegistrationDto, RegistrationFormQuery,
    RegistrationFormResponse, SubmitRegistrationRequest, SubmitRegistrationResponse,
};
use crate::app_state::AppState;
use crate::domain::catalog::{FEST_DATES, FEST_NAME};
use crate::error::{ErrorResponse, PortalError};
use crate::service::registration_service::{preselect, success_message};

/// `GET /events` — Event catalog.
#[utoipa::path(
    get,
    path = "/api/v1/events",
    tag = "Registration",
    summary = "List events",
    description = "Returns every event open for registration, grouped into technical and non-technical.",
    responses(
        (status = 200, description = "Event catalog", body = EventCatalogResponse),
    )
)]
pub async fn list_events() -> impl IntoResponse {
    Json(EventCatalogResponse::current())
}

/// `GET /registration-form` — Catalog plus pre-selection for `?event=<id>`.
#[utoipa::path(
    get,
    path = "/api/v1/registration-form",
    tag = "Registration",
    summary = "Registration form data",
    description = "Returns the catalog and the events to pre-select. An `event` query parameter naming a catalog id pre-selects that event; unknown ids are ignored.",
    params(RegistrationFormQuery),
    responses(
        (status = 200, description = "Form data", body = RegistrationFormResponse),
    )
)]
pub async fn registration_form(Query(query): Query<RegistrationFormQuery>) -> impl IntoResponse {
    let preselected: Vec<EventOptionDto> = preselect(query.event.as_deref())
        .map(EventOptionDto::from)
        .into_iter()
        .collect();
    let preselected_total = preselected.iter().map(|e| u64::from(e.price)).sum();

    Json(RegistrationFormResponse {
        fest_name: FEST_NAME.to_string(),
        fest_dates: FEST_DATES.to_string(),
        events: EventCatalogResponse::current(),
        preselected,
        preselected_total,
    })
}

/// `POST /registrations` — Submit a registration.
///
/// # Errors
///
/// Returns [`PortalError`] on validation failure or store failure.
#[utoipa::path(
    post,
    path = "/api/v1/registrations",
    tag = "Registration",
    summary = "Register for events",
    description = "Validates the participant details, snapshots the chosen catalog events, computes the total and stores one registration.",
    request_body = SubmitRegistrationRequest,
    responses(
        (status = 201, description = "Registration stored", body = SubmitRegistrationResponse),
        (status = 400, description = "Malformed body, missing field, no events or unknown event", body = ErrorResponse),
        (status = 500, description = "Registration store unavailable", body = ErrorResponse),
    )
)]
pub async fn submit_registration(
    State(state): State<AppState>,
    payload: Result<Json<SubmitRegistrationRequest>, JsonRejection>,
) -> Result<impl IntoResponse, PortalError> {
    let Json(req) = payload?;
    let registration = state
        .registration_service
        .submit(req.participant, &req.selected_events)
        .await?;

    let response = SubmitRegistrationResponse {
        message: success_message(&registration),
        registration: RegistrationDto::from(&registration),
    };
    Ok((StatusCode::CREATED, Json(response)))
}

/// Public registration routes.
pub fn routes() -> Router<AppState> {
    Router::new()
        .route("/events", get(list_events))
        .route("/registration-form", get(registration_form))
        .route("/registrations", post(submit_registration))
}

//! Admin handlers: session, dashboard, registration list, CSV exports.

use axum::extract::rejection::JsonRejection;
use axum::extract::{Path, Query, State};
use axum::http::StatusCode;
use axum::response::IntoResponse;
use axum::routing::{get, post};
use axum::{Json, Router};

use crate::api::download::CsvDownload;
use crate::api::dto::{
    DashboardResponse, LoginRequest, LoginResponse, PaginationParams, RegistrationDto,
    RegistrationListResponse,
};
use crate::api::extractors::AdminAuth;
use crate::app_state::AppState;
use crate::error::{ErrorResponse, PortalError};

/// `POST /admin/login` — Open an admin session.
///
/// # Errors
///
/// Returns [`PortalError::InvalidRequest`] for a malformed body and
/// [`PortalError::Unauthorized`] if the passphrase is wrong or admin login
/// is disabled.
#[utoipa::path(
    post,
    path = "/api/v1/admin/login",
    tag = "Admin",
    summary = "Admin login",
    description = "Exchanges the shared admin passphrase for a bearer token.",
    request_body = LoginRequest,
    responses(
        (status = 200, description = "Session opened", body = LoginResponse),
        (status = 400, description = "Malformed body", body = ErrorResponse),
        (status = 401, description = "Wrong passphrase", body = ErrorResponse),
    )
)]
pub async fn login(
    State(state): State<AppState>,
    payload: Result<Json<LoginRequest>, JsonRejection>,
) -> Result<impl IntoResponse, PortalError> {
    let Json(req) = payload?;
    let session = state.sessions.login(&req.passphrase).await?;
    Ok(Json(LoginResponse {
        token: session.token.to_string(),
        expires_at: session.expires_at,
    }))
}

/// `POST /admin/logout` — Close the presented session.
#[utoipa::path(
    post,
    path = "/api/v1/admin/logout",
    tag = "Admin",
    summary = "Admin logout",
    responses(
        (status = 204, description = "Session closed"),
        (status = 401, description = "No live session", body = ErrorResponse),
    )
)]
pub async fn logout(State(state): State<AppState>, auth: AdminAuth) -> impl IntoResponse {
    state.sessions.logout(auth.token).await;
    StatusCode::NO_CONTENT
}

/// `GET /admin/dashboard` — Fresh statistics.
///
/// # Errors
///
/// Returns [`PortalError`] if the registrations cannot be fetched.
#[utoipa::path(
    get,
    path = "/api/v1/admin/dashboard",
    tag = "Admin",
    summary = "Dashboard statistics",
    description = "Re-reads every registration and returns totals, per-event participant counts and revenue, and the technical / non-technical breakdowns.",
    responses(
        (status = 200, description = "Dashboard", body = DashboardResponse),
        (status = 401, description = "No live session", body = ErrorResponse),
        (status = 500, description = "Registration store unavailable", body = ErrorResponse),
    )
)]
pub async fn dashboard(
    State(state): State<AppState>,
    _auth: AdminAuth,
) -> Result<impl IntoResponse, PortalError> {
    let snapshot = state.dashboard_service.refresh().await?;
    Ok(Json(DashboardResponse::from(snapshot.as_ref())))
}

/// `GET /admin/registrations` — Fresh page of registrations.
///
/// # Errors
///
/// Returns [`PortalError`] if the registrations cannot be fetched.
#[utoipa::path(
    get,
    path = "/api/v1/admin/registrations",
    tag = "Admin",
    summary = "List registrations",
    description = "Returns a page of registrations, newest first, read fresh from the store.",
    params(PaginationParams),
    responses(
        (status = 200, description = "Paginated registrations", body = RegistrationListResponse),
        (status = 401, description = "No live session", body = ErrorResponse),
    )
)]
pub async fn list_registrations(
    State(state): State<AppState>,
    _auth: AdminAuth,
    Query(params): Query<PaginationParams>,
) -> Result<impl IntoResponse, PortalError> {
    let snapshot = state.dashboard_service.refresh().await?;
    let (page, pagination) = params.paginate(&snapshot.registrations);

    Ok(Json(RegistrationListResponse {
        data: page.iter().map(RegistrationDto::from).collect(),
        pagination,
    }))
}

/// `GET /admin/exports/registrations` — Download every registration as CSV.
///
/// # Errors
///
/// Returns [`PortalError`] if fetching or rendering fails.
#[utoipa::path(
    get,
    path = "/api/v1/admin/exports/registrations",
    tag = "Admin",
    summary = "Export all registrations",
    responses(
        (status = 200, description = "CSV file", content_type = "text/csv", body = String),
        (status = 401, description = "No live session", body = ErrorResponse),
    )
)]
pub async fn export_registrations(
    State(state): State<AppState>,
    _auth: AdminAuth,
) -> Result<impl IntoResponse, PortalError> {
    let export = state.dashboard_service.export_all().await?;
    Ok(CsvDownload(export))
}

/// `GET /admin/exports/events/{event_id}` — Download one event's participants.
///
/// # Errors
///
/// Returns [`PortalError`] if fetching or rendering fails.
#[utoipa::path(
    get,
    path = "/api/v1/admin/exports/events/{event_id}",
    tag = "Admin",
    summary = "Export event participants",
    description = "CSV of the registrations that selected the event. An event nobody selected yields a header-only file.",
    params(
        ("event_id" = String, Path, description = "Catalog event id"),
    ),
    responses(
        (status = 200, description = "CSV file", content_type = "text/csv", body = String),
        (status = 401, description = "No live session", body = ErrorResponse),
    )
)]
pub async fn export_event(
    State(state): State<AppState>,
    _auth: AdminAuth,
    Path(event_id): Path<String>,
) -> Result<impl IntoResponse, PortalError> {
    let export = state.dashboard_service.export_event(&event_id).await?;
    Ok(CsvDownload(export))
}

/// Admin routes.
pub fn routes() -> Router<AppState> {
    Router::new()
        .route("/admin/login", post(login))
        .route("/admin/logout", post(logout))
        .route("/admin/dashboard", get(dashboard))
        .route("/admin/registrations", get(list_registrations))
        .route("/admin/exports/registrations", get(export_registrations))
        .route("/admin/exports/events/{event_id}", get(export_event))
}

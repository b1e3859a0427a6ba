//! OpenAPI document for the REST API.

use utoipa::OpenApi;

use super::handlers::{admin, organizers, registration, system};

/// Generated OpenAPI description of every endpoint.
#[derive(Debug, OpenApi)]
#[openapi(
    info(
        title = "fest-portal",
        description = "Registration, statistics and CSV export API for the Cache tech fest."
    ),
    paths(
        system::health_handler,
        registration::list_events,
        registration::registration_form,
        registration::submit_registration,
        organizers::list_organizers,
        admin::login,
        admin::logout,
        admin::dashboard,
        admin::list_registrations,
        admin::export_registrations,
        admin::export_event,
    ),
    tags(
        (name = "System", description = "Service health"),
        (name = "Registration", description = "Public registration site"),
        (name = "Admin", description = "Dashboard and exports; requires a bearer token from /admin/login"),
    )
)]
pub struct ApiDoc;

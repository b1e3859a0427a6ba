//! Portal error types with HTTP status code mapping.
//!
//! [`PortalError`] is the central error type for the service. Each variant
//! maps to a specific HTTP status code and structured JSON error response.

use axum::extract::rejection::JsonRejection;
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use serde::Serialize;
use utoipa::ToSchema;

/// Structured JSON error response body.
///
/// All error responses follow this shape:
/// ```json
/// {
///   "error": {
///     "code": 1001,
///     "message": "missing required field: email",
///     "details": null
///   }
/// }
/// ```
#[derive(Debug, Serialize, ToSchema)]
pub struct ErrorResponse {
    /// Structured error payload.
    pub error: ErrorBody,
}

/// Inner error body with numeric code and human-readable message.
#[derive(Debug, Serialize, ToSchema)]
pub struct ErrorBody {
    /// Numeric error code (see code ranges on [`PortalError`]).
    pub code: u32,
    /// Human-readable error message.
    pub message: String,
    /// Optional additional details.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub details: Option<String>,
}

/// Server-side error enum with HTTP status code mapping.
///
/// # Error Code Ranges
///
/// | Range     | Category      | HTTP Status               |
/// |-----------|---------------|---------------------------|
/// | 1000–1999 | Validation    | 400 Bad Request           |
/// | 2000–2999 | Access        | 401 Unauthorized          |
/// | 3000–3999 | Server        | 500 Internal Server Error |
#[derive(Debug, thiserror::Error)]
pub enum PortalError {
    /// Request could not be interpreted.
    #[error("invalid request: {0}")]
    InvalidRequest(String),

    /// A required participant field was empty.
    #[error("missing required field: {0}")]
    MissingField(&'static str),

    /// The submission did not select any event.
    #[error("please select at least one event to participate in")]
    NoEventsSelected,

    /// A selected event id is not part of the catalog.
    #[error("unknown event: {0}")]
    UnknownEvent(String),

    /// Missing, unknown or expired admin session.
    #[error("admin session required")]
    Unauthorized,

    /// Registration store failure.
    #[error("persistence error: {0}")]
    Persistence(String),

    /// Internal server error.
    #[error("internal error: {0}")]
    Internal(String),
}

impl PortalError {
    /// Returns the numeric error code for this variant.
    #[must_use]
    pub const fn error_code(&self) -> u32 {
        match self {
            Self::InvalidRequest(_) => 1000,
            Self::MissingField(_) => 1001,
            Self::NoEventsSelected => 1002,
            Self::UnknownEvent(_) => 1003,
            Self::Unauthorized => 2001,
            Self::Internal(_) => 3000,
            Self::Persistence(_) => 3001,
        }
    }

    /// Returns the HTTP status code for this variant.
    #[must_use]
    pub const fn status_code(&self) -> StatusCode {
        match self {
            Self::InvalidRequest(_)
            | Self::MissingField(_)
            | Self::NoEventsSelected
            | Self::UnknownEvent(_) => StatusCode::BAD_REQUEST,
            Self::Unauthorized => StatusCode::UNAUTHORIZED,
            Self::Persistence(_) | Self::Internal(_) => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }

    /// Message shown to the user. Server-side failures hide their cause,
    /// which is logged instead.
    #[must_use]
    pub fn public_message(&self) -> String {
        match self {
            Self::Persistence(_) => "the registration store is unavailable, please try again".to_string(),
            Self::Internal(_) => "internal server error".to_string(),
            other => other.to_string(),
        }
    }
}

impl From<JsonRejection> for PortalError {
    fn from(rejection: JsonRejection) -> Self {
        Self::InvalidRequest(rejection.body_text())
    }
}

impl From<sqlx::Error> for PortalError {
    fn from(err: sqlx::Error) -> Self {
        Self::Persistence(err.to_string())
    }
}

impl IntoResponse for PortalError {
    fn into_response(self) -> Response {
        let status = self.status_code();
        if status.is_server_error() {
            tracing::error!(code = self.error_code(), error = %self, "request failed");
        }
        let body = ErrorResponse {
            error: ErrorBody {
                code: self.error_code(),
                message: self.public_message(),
                details: None,
            },
        };
        let mut response = axum::Json(body).into_response();
        *response.status_mut() = status;
        response
    }
}

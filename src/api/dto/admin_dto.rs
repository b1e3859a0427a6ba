//! Admin dashboard DTOs.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

use super::common_dto::PaginationMeta;
use super::registration_dto::RegistrationDto;
use crate::domain::event_stats::{CategoryBreakdown, DashboardTotals};
use crate::domain::{DashboardSnapshot, EventStat};

/// Request body for `POST /admin/login`.
#[derive(Debug, Deserialize, ToSchema)]
pub struct LoginRequest {
    /// Shared admin passphrase.
    pub passphrase: String,
}

/// Response body for `POST /admin/login`.
#[derive(Debug, Serialize, ToSchema)]
pub struct LoginResponse {
    /// Bearer token for the `Authorization` header.
    pub token: String,
    /// Token expiry.
    pub expires_at: DateTime<Utc>,
}

/// Response body for `GET /admin/dashboard`.
#[derive(Debug, Serialize, ToSchema)]
pub struct DashboardResponse {
    /// Fetch generation the numbers come from.
    pub generation: u64,
    /// When the registrations were fetched.
    pub fetched_at: DateTime<Utc>,
    /// Headline totals.
    pub totals: DashboardTotals,
    /// Per-event stats in first-seen order.
    pub events: Vec<EventStat>,
    /// Technical-event breakdown.
    pub technical: CategoryBreakdown,
    /// Non-technical-event breakdown.
    pub non_technical: CategoryBreakdown,
}

impl From<&DashboardSnapshot> for DashboardResponse {
    fn from(snapshot: &DashboardSnapshot) -> Self {
        Self {
            generation: snapshot.generation,
            fetched_at: snapshot.fetched_at,
            totals: snapshot.totals,
            events: snapshot.stats.clone(),
            technical: snapshot.technical.clone(),
            non_technical: snapshot.non_technical.clone(),
        }
    }
}

/// Paginated list response for `GET /admin/registrations`.
#[derive(Debug, Serialize, ToSchema)]
pub struct RegistrationListResponse {
    /// Registrations, newest first.
    pub data: Vec<RegistrationDto>,
    /// Pagination metadata.
    pub pagination: PaginationMeta,
}

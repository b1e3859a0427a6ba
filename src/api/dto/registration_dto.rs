//! Public-site DTOs: catalog, registration form, submission, organizers.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use utoipa::{IntoParams, ToSchema};

use crate::domain::catalog::{self, EventCategory, EventOption};
use crate::domain::organizers::OrganizerCard;
use crate::domain::{EventSnapshot, Participant, Registration};

/// One catalog entry.
#[derive(Debug, Clone, Serialize, ToSchema)]
pub struct EventOptionDto {
    /// Stable identifier, used in submissions and `?event=` links.
    pub id: String,
    /// Display name.
    pub name: String,
    /// Entry fee in rupees.
    pub price: u32,
    /// Catalog group.
    pub category: EventCategory,
}

impl From<&EventOption> for EventOptionDto {
    fn from(event: &EventOption) -> Self {
        Self {
            id: event.id.to_string(),
            name: event.name.to_string(),
            price: event.price,
            category: event.category,
        }
    }
}

/// Response body for `GET /events`.
#[derive(Debug, Clone, Serialize, ToSchema)]
pub struct EventCatalogResponse {
    /// Technical events in catalog order.
    pub technical: Vec<EventOptionDto>,
    /// Non-technical events in catalog order.
    pub non_technical: Vec<EventOptionDto>,
}

impl EventCatalogResponse {
    /// Builds the grouped catalog.
    #[must_use]
    pub fn current() -> Self {
        Self {
            technical: catalog::by_category(EventCategory::Technical)
                .map(EventOptionDto::from)
                .collect(),
            non_technical: catalog::by_category(EventCategory::NonTechnical)
                .map(EventOptionDto::from)
                .collect(),
        }
    }
}

/// Query for `GET /registration-form`.
#[derive(Debug, Clone, Deserialize, IntoParams)]
#[into_params(parameter_in = Query)]
pub struct RegistrationFormQuery {
    /// Catalog id to pre-select. Unknown ids are ignored.
    #[serde(default)]
    pub event: Option<String>,
}

/// Response body for `GET /registration-form`.
#[derive(Debug, Clone, Serialize, ToSchema)]
pub struct RegistrationFormResponse {
    /// Fest display name.
    pub fest_name: String,
    /// Fest dates.
    pub fest_dates: String,
    /// Selectable events.
    pub events: EventCatalogResponse,
    /// Events selected up front.
    pub preselected: Vec<EventOptionDto>,
    /// Total of the pre-selected events.
    pub preselected_total: u64,
}

/// Request body for `POST /registrations`.
#[derive(Debug, Clone, Deserialize, ToSchema)]
pub struct SubmitRegistrationRequest {
    /// Participant details.
    #[serde(flatten)]
    pub participant: Participant,
    /// Catalog ids of the chosen events, in selection order.
    #[serde(default)]
    pub selected_events: Vec<String>,
}

/// A stored registration.
#[derive(Debug, Clone, Serialize, ToSchema)]
pub struct RegistrationDto {
    /// Store-assigned identifier.
    pub id: uuid::Uuid,
    /// Participant name.
    pub name: String,
    /// Participant email.
    pub email: String,
    /// Participant phone.
    pub phone: String,
    /// College name.
    pub college: String,
    /// Roll number.
    pub roll_number: String,
    /// Section.
    pub section: String,
    /// Event snapshots taken at submission.
    pub selected_events: Vec<EventSnapshot>,
    /// Amount due in rupees.
    pub total_amount: u64,
    /// Store-assigned timestamp.
    pub registration_date: DateTime<Utc>,
}

impl From<&Registration> for RegistrationDto {
    fn from(reg: &Registration) -> Self {
        let p = &reg.participant;
        Self {
            id: *reg.id.as_uuid(),
            name: p.name.clone(),
            email: p.email.clone(),
            phone: p.phone.clone(),
            college: p.college.clone(),
            roll_number: p.roll_number.clone(),
            section: p.section.clone(),
            selected_events: reg.selected_events.clone(),
            total_amount: reg.total_amount,
            registration_date: reg.registration_date,
        }
    }
}

/// Response body for `POST /registrations` (201 Created).
#[derive(Debug, Clone, Serialize, ToSchema)]
pub struct SubmitRegistrationResponse {
    /// Confirmation shown to the participant.
    pub message: String,
    /// The stored record.
    pub registration: RegistrationDto,
}

/// Response body for `GET /organizers`.
#[derive(Debug, Clone, Serialize, ToSchema)]
pub struct OrganizersResponse {
    /// Fest display name.
    pub fest_name: String,
    /// Organizing team.
    pub organizers: Vec<OrganizerCard>,
    /// Website developers.
    pub developers: Vec<String>,
}

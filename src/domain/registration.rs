//! Registration records and the form they are built from.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

use super::RegistrationId;

/// A catalog entry as it was at submission time.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
pub struct EventSnapshot {
    /// Catalog identifier.
    pub id: String,
    /// Display name at submission time.
    pub name: String,
    /// Price at submission time.
    pub price: u32,
}

/// Participant details shared by the submitted form and the stored record.
///
/// Absent keys deserialize as blank so required-field checks can name them.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
#[serde(default)]
pub struct Participant {
    /// Full name.
    pub name: String,
    /// Contact email.
    pub email: String,
    /// Contact phone number.
    pub phone: String,
    /// College name.
    pub college: String,
    /// College roll number.
    pub roll_number: String,
    /// Class section.
    pub section: String,
}

/// A validated registration ready to be inserted.
///
/// The store assigns the identifier and registration date.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NewRegistration {
    /// Participant details.
    pub participant: Participant,
    /// Snapshots of the selected events, in selection order.
    pub selected_events: Vec<EventSnapshot>,
    /// Sum of the selected event prices.
    pub total_amount: u64,
}

impl NewRegistration {
    /// Builds a record from validated participant details and event
    /// snapshots, computing the total from the snapshots.
    #[must_use]
    pub fn new(participant: Participant, selected_events: Vec<EventSnapshot>) -> Self {
        let total_amount = total_of(&selected_events);
        Self {
            participant,
            selected_events,
            total_amount,
        }
    }

    /// Attaches the store-assigned identity.
    #[must_use]
    pub fn into_registration(
        self,
        id: RegistrationId,
        registration_date: DateTime<Utc>,
    ) -> Registration {
        Registration {
            id,
            participant: self.participant,
            selected_events: self.selected_events,
            total_amount: self.total_amount,
            registration_date,
        }
    }
}

/// One participant's stored registration.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Registration {
    /// Store-assigned identifier.
    pub id: RegistrationId,
    /// Participant details.
    pub participant: Participant,
    /// Snapshots of the selected events.
    pub selected_events: Vec<EventSnapshot>,
    /// Amount due, equal to the sum of `selected_events` prices.
    pub total_amount: u64,
    /// Store-assigned insertion time.
    pub registration_date: DateTime<Utc>,
}

impl Registration {
    /// Returns `true` if any selected event carries this display name.
    #[must_use]
    pub fn has_event_named(&self, name: &str) -> bool {
        self.selected_events.iter().any(|e| e.name == name)
    }

    /// Returns `true` if any selected event carries this catalog id.
    #[must_use]
    pub fn has_event_id(&self, id: &str) -> bool {
        self.selected_events.iter().any(|e| e.id == id)
    }
}

/// Sums the prices of a set of snapshots.
#[must_use]
pub fn total_of(events: &[EventSnapshot]) -> u64 {
    events.iter().map(|e| u64::from(e.price)).sum()
}

//! Database row model for the `registrations` table.

use chrono::{DateTime, Utc};
use uuid::Uuid;

use crate::domain::{EventSnapshot, Participant, Registration, RegistrationId};
use crate::error::PortalError;

/// Column tuple selected from `registrations`, in table order.
pub type RegistrationTuple = (
    Uuid,
    String,
    String,
    String,
    String,
    String,
    String,
    serde_json::Value,
    i64,
    DateTime<Utc>,
);

/// A stored row from the `registrations` table.
#[derive(Debug, Clone)]
pub struct RegistrationRow {
    /// Primary key.
    pub id: Uuid,
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
    /// JSONB array of event snapshots.
    pub selected_events: serde_json::Value,
    /// Total amount in rupees.
    pub total_amount: i64,
    /// Server-side insertion timestamp.
    pub registration_date: DateTime<Utc>,
}

impl From<RegistrationTuple> for RegistrationRow {
    fn from(
        (
            id,
            name,
            email,
            phone,
            college,
            roll_number,
            section,
            selected_events,
            total_amount,
            registration_date,
        ): RegistrationTuple,
    ) -> Self {
        Self {
            id,
            name,
            email,
            phone,
            college,
            roll_number,
            section,
            selected_events,
            total_amount,
            registration_date,
        }
    }
}

impl TryFrom<RegistrationRow> for Registration {
    type Error = PortalError;

    fn try_from(row: RegistrationRow) -> Result<Self, Self::Error> {
        let selected_events: Vec<EventSnapshot> = serde_json::from_value(row.selected_events)
            .map_err(|e| {
                PortalError::Persistence(format!("registration {}: bad selected_events: {e}", row.id))
            })?;
        let total_amount = u64::try_from(row.total_amount).map_err(|_| {
            PortalError::Persistence(format!(
                "registration {}: negative total_amount {}",
                row.id, row.total_amount
            ))
        })?;

        Ok(Self {
            id: RegistrationId::from_uuid(row.id),
            participant: Participant {
                name: row.name,
                email: row.email,
                phone: row.phone,
                college: row.college,
                roll_number: row.roll_number,
                section: row.section,
            },
            selected_events,
            total_amount,
            registration_date: row.registration_date,
        })
    }
}

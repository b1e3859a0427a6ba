//! PostgreSQL implementation of the registration store.

use async_trait::async_trait;
use chrono::{DateTime, Utc};
use sqlx::PgPool;
use uuid::Uuid;

use super::RegistrationStore;
use super::models::{RegistrationRow, RegistrationTuple};
use crate::domain::{NewRegistration, Registration, RegistrationId};
use crate::error::PortalError;

/// PostgreSQL-backed store using `sqlx::PgPool`.
#[derive(Debug, Clone)]
pub struct PostgresStore {
    pool: PgPool,
}

impl PostgresStore {
    /// Creates a store over the given connection pool.
    #[must_use]
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }

    /// Applies the embedded schema migrations.
    ///
    /// # Errors
    ///
    /// Returns a [`PortalError::Persistence`] if a migration fails.
    pub async fn migrate(&self) -> Result<(), PortalError> {
        sqlx::migrate!("./migrations")
            .run(&self.pool)
            .await
            .map_err(|e| PortalError::Persistence(e.to_string()))
    }
}

#[async_trait]
impl RegistrationStore for PostgresStore {
    async fn insert(&self, record: NewRegistration) -> Result<Registration, PortalError> {
        let events = serde_json::to_value(&record.selected_events)
            .map_err(|e| PortalError::Internal(format!("encode selected_events: {e}")))?;
        let total = i64::try_from(record.total_amount).map_err(|_| {
            PortalError::InvalidRequest(format!("total amount {} too large", record.total_amount))
        })?;
        let p = &record.participant;

        let (id, registration_date) = sqlx::query_as::<_, (Uuid, DateTime<Utc>)>(
            "INSERT INTO registrations \
             (name, email, phone, college, roll_number, section, selected_events, total_amount) \
             VALUES ($1, $2, $3, $4, $5, $6, $7, $8) RETURNING id, registration_date",
        )
        .bind(&p.name)
        .bind(&p.email)
        .bind(&p.phone)
        .bind(&p.college)
        .bind(&p.roll_number)
        .bind(&p.section)
        .bind(&events)
        .bind(total)
        .fetch_one(&self.pool)
        .await?;

        Ok(record.into_registration(RegistrationId::from_uuid(id), registration_date))
    }

    async fn select_all(&self) -> Result<Vec<Registration>, PortalError> {
        let rows = sqlx::query_as::<_, RegistrationTuple>(
            "SELECT id, name, email, phone, college, roll_number, section, \
             selected_events, total_amount, registration_date \
             FROM registrations ORDER BY registration_date DESC",
        )
        .fetch_all(&self.pool)
        .await?;

        rows.into_iter()
            .map(|tuple| Registration::try_from(RegistrationRow::from(tuple)))
            .collect()
    }
}

//! In-process registration store.
//!
//! Used when persistence is disabled and in tests. Records live only as
//! long as the process.

use async_trait::async_trait;
use chrono::Utc;
use tokio::sync::RwLock;

use super::RegistrationStore;
use crate::domain::{NewRegistration, Registration, RegistrationId};
use crate::error::PortalError;

/// Registration collection held in memory.
#[derive(Debug, Default)]
pub struct MemoryStore {
    records: RwLock<Vec<Registration>>,
}

impl MemoryStore {
    /// Creates an empty store.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Returns the number of stored registrations.
    pub async fn len(&self) -> usize {
        self.records.read().await.len()
    }

    /// Returns `true` if nothing has been stored.
    pub async fn is_empty(&self) -> bool {
        self.records.read().await.is_empty()
    }
}

#[async_trait]
impl RegistrationStore for MemoryStore {
    async fn insert(&self, record: NewRegistration) -> Result<Registration, PortalError> {
        let stored = record.into_registration(RegistrationId::new(), Utc::now());
        self.records.write().await.push(stored.clone());
        Ok(stored)
    }

    async fn select_all(&self) -> Result<Vec<Registration>, PortalError> {
        // Reverse first so equal timestamps keep newest-insert-first order.
        let mut all: Vec<Registration> = self.records.read().await.iter().rev().cloned().collect();
        all.sort_by(|a, b| b.registration_date.cmp(&a.registration_date));
        Ok(all)
    }
}

//! Registration service: validates submissions and writes them to the store.

use std::collections::HashSet;
use std::sync::Arc;

use crate::domain::catalog::{self, EventOption};
use crate::domain::{EventSnapshot, NewRegistration, Participant, Registration};
use crate::error::PortalError;
use crate::persistence::RegistrationStore;

/// Turns a participant form plus chosen event ids into one stored record.
#[derive(Debug, Clone)]
pub struct RegistrationService {
    store: Arc<dyn RegistrationStore>,
}

impl RegistrationService {
    /// Creates a service writing to `store`.
    #[must_use]
    pub fn new(store: Arc<dyn RegistrationStore>) -> Self {
        Self { store }
    }

    /// Validates the submission and inserts it.
    ///
    /// Text fields are trimmed. Repeated event ids keep their first
    /// occurrence only.
    ///
    /// # Errors
    ///
    /// - [`PortalError::MissingField`] if name, email, phone or college is blank.
    /// - [`PortalError::NoEventsSelected`] if `event_ids` is empty.
    /// - [`PortalError::UnknownEvent`] if an id is not in the catalog.
    /// - [`PortalError::Persistence`] if the store rejects the insert.
    pub async fn submit(
        &self,
        participant: Participant,
        event_ids: &[String],
    ) -> Result<Registration, PortalError> {
        let participant = validate_participant(participant)?;
        let selected_events = resolve_events(event_ids)?;
        let record = NewRegistration::new(participant, selected_events);

        let stored = self.store.insert(record).await.inspect_err(|e| {
            tracing::error!(error = %e, "registration insert failed");
        })?;

        tracing::info!(
            registration_id = %stored.id,
            events = stored.selected_events.len(),
            total_amount = stored.total_amount,
            "registration stored"
        );
        Ok(stored)
    }
}

/// Message shown to the participant after a successful submission.
#[must_use]
pub fn success_message(registration: &Registration) -> String {
    format!(
        "Welcome {}! You've successfully registered for {} event(s). Total: ₹{}",
        registration.participant.name,
        registration.selected_events.len(),
        registration.total_amount
    )
}

/// Catalog entry to pre-select from a registration-page `event` parameter.
///
/// Unknown ids are ignored.
#[must_use]
pub fn preselect(event_param: Option<&str>) -> Option<&'static EventOption> {
    event_param.and_then(catalog::find)
}

fn validate_participant(participant: Participant) -> Result<Participant, PortalError> {
    let participant = Participant {
        name: participant.name.trim().to_string(),
        email: participant.email.trim().to_string(),
        phone: participant.phone.trim().to_string(),
        college: participant.college.trim().to_string(),
        roll_number: participant.roll_number.trim().to_string(),
        section: participant.section.trim().to_string(),
    };
    for (field, value) in [
        ("name", &participant.name),
        ("email", &participant.email),
        ("phone", &participant.phone),
        ("college", &participant.college),
    ] {
        if value.is_empty() {
            return Err(PortalError::MissingField(field));
        }
    }
    Ok(participant)
}

fn resolve_events(event_ids: &[String]) -> Result<Vec<EventSnapshot>, PortalError> {
    if event_ids.is_empty() {
        return Err(PortalError::NoEventsSelected);
    }
    let mut seen = HashSet::new();
    let mut snapshots = Vec::with_capacity(event_ids.len());
    for id in event_ids {
        if !seen.insert(id.as_str()) {
            continue;
        }
        let event = catalog::find(id).ok_or_else(|| PortalError::UnknownEvent(id.clone()))?;
        snapshots.push(event.snapshot());
    }
    Ok(snapshots)
}

#[cfg(test)]
#[allow(clippy::panic)]
mod tests {
    use async_trait::async_trait;

    use super::*;
    use crate::domain::registration::total_of;
    use crate::persistence::MemoryStore;

    #[derive(Debug)]
    struct UnavailableStore;

    #[async_trait]
    impl RegistrationStore for UnavailableStore {
        async fn insert(&self, _record: NewRegistration) -> Result<Registration, PortalError> {
            Err(PortalError::Persistence("connection refused".to_string()))
        }

        async fn select_all(&self) -> Result<Vec<Registration>, PortalError> {
            Err(PortalError::Persistence("connection refused".to_string()))
        }
    }

    fn participant() -> Participant {
        Participant {
            name: "  Meera ".to_string(),
            email: "meera@example.com".to_string(),
            phone: "9876543210".to_string(),
            college: "GEC".to_string(),
            roll_number: "22B81A0542".to_string(),
            section: "C".to_string(),
        }
    }

    fn ids(ids: &[&str]) -> Vec<String> {
        ids.iter().map(|s| (*s).to_string()).collect()
    }

    fn service() -> (RegistrationService, Arc<MemoryStore>) {
        let store = Arc::new(MemoryStore::new());
        let dyn_store: Arc<dyn RegistrationStore> = Arc::clone(&store) as Arc<dyn RegistrationStore>;
        (RegistrationService::new(dyn_store), store)
    }

    #[tokio::test]
    async fn submit_stores_snapshot_and_total() {
        let (service, store) = service();
        let Ok(reg) = service
            .submit(participant(), &ids(&["web-dev", "meme-contest"]))
            .await
        else {
            panic!("submit failed");
        };
        assert_eq!(reg.participant.name, "Meera");
        assert_eq!(reg.total_amount, 250);
        assert_eq!(reg.total_amount, total_of(&reg.selected_events));
        assert_eq!(
            reg.selected_events.iter().map(|e| e.name.as_str()).collect::<Vec<_>>(),
            vec!["Web Development Challenge", "Tech Meme Contest"]
        );
        assert_eq!(store.len().await, 1);
    }

    #[tokio::test]
    async fn blank_required_field_is_rejected() {
        let (service, store) = service();
        for field in ["name", "email", "phone", "college"] {
            let mut p = participant();
            match field {
                "name" => p.name = "   ".to_string(),
                "email" => p.email.clear(),
                "phone" => p.phone.clear(),
                _ => p.college.clear(),
            }
            let result = service.submit(p, &ids(&["poster"])).await;
            assert!(
                matches!(result, Err(PortalError::MissingField(f)) if f == field),
                "{field}"
            );
        }
        assert!(store.is_empty().await);
    }

    #[tokio::test]
    async fn optional_fields_may_be_blank() {
        let (service, _) = service();
        let mut p = participant();
        p.roll_number.clear();
        p.section.clear();
        assert!(service.submit(p, &ids(&["poster"])).await.is_ok());
    }

    #[tokio::test]
    async fn empty_selection_is_rejected() {
        let (service, store) = service();
        let result = service.submit(participant(), &[]).await;
        assert!(matches!(result, Err(PortalError::NoEventsSelected)));
        assert!(store.is_empty().await);
    }

    #[tokio::test]
    async fn unknown_event_is_rejected() {
        let (service, store) = service();
        let result = service
            .submit(participant(), &ids(&["web-dev", "hackathon"]))
            .await;
        assert!(matches!(result, Err(PortalError::UnknownEvent(id)) if id == "hackathon"));
        assert!(store.is_empty().await);
    }

    #[tokio::test]
    async fn repeated_ids_are_selected_once() {
        let (service, _) = service();
        let Ok(reg) = service
            .submit(participant(), &ids(&["bgmi", "bgmi", "drawing"]))
            .await
        else {
            panic!("submit failed");
        };
        assert_eq!(reg.selected_events.len(), 2);
        assert_eq!(reg.total_amount, 350);
    }

    #[tokio::test]
    async fn store_failure_is_reported() {
        let service = RegistrationService::new(Arc::new(UnavailableStore));
        let result = service.submit(participant(), &ids(&["poster"])).await;
        assert!(matches!(result, Err(PortalError::Persistence(_))));
    }

    #[test]
    fn preselect_ignores_unknown_ids() {
        assert_eq!(preselect(Some("tech-expo")).map(|e| e.name), Some("Tech Expo"));
        assert!(preselect(Some("nope")).is_none());
        assert!(preselect(None).is_none());
    }

    #[test]
    fn success_message_mentions_count_and_total() {
        let reg = NewRegistration::new(
            Participant {
                name: "Meera".to_string(),
                ..Participant::default()
            },
            vec![EventSnapshot {
                id: "tech-expo".to_string(),
                name: "Tech Expo".to_string(),
                price: 300,
            }],
        )
        .into_registration(crate::domain::RegistrationId::new(), chrono::Utc::now());
        assert_eq!(
            success_message(&reg),
            "Welcome Meera! You've successfully registered for 1 event(s). Total: ₹300"
        );
    }
}

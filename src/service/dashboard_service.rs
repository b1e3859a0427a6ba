//! Dashboard service: fetches registrations, publishes snapshots and
//! renders CSV reports from them.

use std::sync::Arc;

use crate::domain::{CsvExport, DashboardSnapshot, SnapshotCell, csv_export};
use crate::error::PortalError;
use crate::persistence::RegistrationStore;

/// Read side of the admin dashboard.
///
/// Each refresh re-reads the full collection and replaces the published
/// snapshot as a whole. Exports and listings refresh first.
#[derive(Debug)]
pub struct DashboardService {
    store: Arc<dyn RegistrationStore>,
    snapshots: SnapshotCell,
}

impl DashboardService {
    /// Creates a service reading from `store`.
    #[must_use]
    pub fn new(store: Arc<dyn RegistrationStore>) -> Self {
        Self {
            store,
            snapshots: SnapshotCell::new(),
        }
    }

    /// Fetches every registration and publishes the derived snapshot.
    ///
    /// Returns the newest published snapshot, which is a later one than
    /// this fetch's if that one finished first.
    ///
    /// # Errors
    ///
    /// Returns [`PortalError::Persistence`] if the store cannot be read.
    /// The previously published snapshot is kept.
    pub async fn refresh(&self) -> Result<Arc<DashboardSnapshot>, PortalError> {
        let generation = self.snapshots.begin();
        let registrations = self.store.select_all().await.inspect_err(|e| {
            tracing::error!(generation, error = %e, "failed to fetch registrations");
        })?;
        tracing::debug!(generation, count = registrations.len(), "registrations fetched");

        let snapshot = DashboardSnapshot::build(generation, registrations);
        Ok(self.snapshots.publish(snapshot).await)
    }

    /// Fetches the collection and renders every registration.
    ///
    /// # Errors
    ///
    /// Returns [`PortalError`] if fetching or rendering fails.
    pub async fn export_all(&self) -> Result<CsvExport, PortalError> {
        let snapshot = self.refresh().await?;
        let export = csv_export::export_all(&snapshot.registrations)?;
        tracing::info!(rows = export.row_count, filename = %export.filename, "exported registrations");
        Ok(export)
    }

    /// Fetches the collection and renders the participants of one event.
    ///
    /// # Errors
    ///
    /// Returns [`PortalError`] if fetching or rendering fails.
    pub async fn export_event(&self, event_id: &str) -> Result<CsvExport, PortalError> {
        let snapshot = self.refresh().await?;
        let export = csv_export::export_for_event_id(&snapshot.registrations, event_id)?;
        tracing::info!(
            event_id,
            rows = export.row_count,
            filename = %export.filename,
            "exported event participants"
        );
        Ok(export)
    }
}

#[cfg(test)]
#[allow(clippy::panic)]
mod tests {
    use std::sync::atomic::{AtomicUsize, Ordering};

    use async_trait::async_trait;
    use tokio::sync::{Mutex, Notify, oneshot};

    use super::*;
    use crate::domain::event_stats::tests::{event, registration};
    use crate::domain::{NewRegistration, Participant, Registration};
    use crate::persistence::MemoryStore;

    async fn seeded_store() -> Arc<MemoryStore> {
        let store = Arc::new(MemoryStore::new());
        for (name, ids) in [
            ("Ravi", vec![("web-dev", "Web Development Challenge", 200), ("tech-quiz", "Technical Quiz", 100)]),
            ("Sita", vec![("web-dev", "Web Development Challenge", 200)]),
        ] {
            let events = ids.into_iter().map(|(id, n, p)| event(id, n, p)).collect();
            let participant = Participant {
                name: name.to_string(),
                ..Participant::default()
            };
            let _ = store.insert(NewRegistration::new(participant, events)).await;
        }
        store
    }

    fn as_dyn(store: &Arc<MemoryStore>) -> Arc<dyn RegistrationStore> {
        Arc::clone(store) as Arc<dyn RegistrationStore>
    }

    #[tokio::test]
    async fn refresh_aggregates_store_contents() {
        let store = seeded_store().await;
        let service = DashboardService::new(as_dyn(&store));
        let Ok(snapshot) = service.refresh().await else {
            panic!("refresh failed");
        };
        assert_eq!(snapshot.totals.total_participants, 2);
        assert_eq!(snapshot.totals.total_revenue, 500);
        let web = snapshot.stats.iter().find(|s| s.event_id == "web-dev");
        assert_eq!(web.map(|s| (s.participant_count, s.revenue)), Some((2, 400)));
    }

    #[tokio::test]
    async fn refresh_replaces_snapshot_with_new_data() {
        let store = seeded_store().await;
        let service = DashboardService::new(as_dyn(&store));
        let _ = service.refresh().await;
        let _ = store
            .insert(NewRegistration::new(
                Participant::default(),
                vec![event("bgmi", "BGMI Esports Tournament", 250)],
            ))
            .await;
        let Ok(snapshot) = service.refresh().await else {
            panic!("refresh failed");
        };
        assert_eq!(snapshot.totals.total_participants, 3);
        assert_eq!(snapshot.non_technical.revenue, 250);
    }

    #[tokio::test]
    async fn exports_include_registrations_stored_after_last_refresh() {
        let store = seeded_store().await;
        let service = DashboardService::new(as_dyn(&store));
        let _ = service.refresh().await;

        let late = Participant {
            name: "Late".to_string(),
            ..Participant::default()
        };
        let _ = store
            .insert(NewRegistration::new(
                late,
                vec![event("tech-quiz", "Technical Quiz", 100)],
            ))
            .await;

        let Ok(all) = service.export_all().await else {
            panic!("export failed");
        };
        assert_eq!(all.row_count, 3);
        assert!(all.content.contains("\"Late\""));

        let Ok(quiz) = service.export_event("tech-quiz").await else {
            panic!("export failed");
        };
        assert_eq!(quiz.row_count, 2);
    }

    #[tokio::test]
    async fn exports_render_store_contents() {
        let store = seeded_store().await;
        let service = DashboardService::new(as_dyn(&store));

        let Ok(all) = service.export_all().await else {
            panic!("export failed");
        };
        assert_eq!(all.row_count, 2);

        let Ok(quiz) = service.export_event("tech-quiz").await else {
            panic!("export failed");
        };
        assert_eq!(quiz.row_count, 1);
        assert_eq!(quiz.filename, "Technical_Quiz_participants.csv");
    }

    /// First fetch blocks until released and returns one record; later
    /// fetches return two immediately.
    #[derive(Debug)]
    struct GatedStore {
        calls: AtomicUsize,
        first_started: Notify,
        release_first: Mutex<Option<oneshot::Receiver<()>>>,
    }

    #[async_trait]
    impl RegistrationStore for GatedStore {
        async fn insert(&self, _record: NewRegistration) -> Result<Registration, PortalError> {
            Err(PortalError::Internal("read-only".to_string()))
        }

        async fn select_all(&self) -> Result<Vec<Registration>, PortalError> {
            if self.calls.fetch_add(1, Ordering::SeqCst) == 0 {
                let gate = self.release_first.lock().await.take();
                self.first_started.notify_one();
                if let Some(gate) = gate {
                    let _ = gate.await;
                }
                Ok(vec![registration("Old", vec![event("x", "X", 1)])])
            } else {
                Ok(vec![
                    registration("New", vec![event("x", "X", 1)]),
                    registration("Newer", vec![event("y", "Y", 2)]),
                ])
            }
        }
    }

    #[tokio::test]
    async fn slow_older_refresh_never_overwrites_newer() {
        let (release, gate) = oneshot::channel();
        let store = Arc::new(GatedStore {
            calls: AtomicUsize::new(0),
            first_started: Notify::new(),
            release_first: Mutex::new(Some(gate)),
        });
        let service = Arc::new(DashboardService::new(
            Arc::clone(&store) as Arc<dyn RegistrationStore>
        ));

        let slow = tokio::spawn({
            let service = Arc::clone(&service);
            async move { service.refresh().await }
        });
        store.first_started.notified().await;

        let Ok(fast) = service.refresh().await else {
            panic!("refresh failed");
        };
        assert_eq!(fast.registrations.len(), 2);

        let _ = release.send(());
        let Ok(Ok(slow_result)) = slow.await else {
            panic!("slow refresh failed");
        };
        assert_eq!(slow_result.generation, fast.generation);
        assert_eq!(slow_result.registrations.len(), 2);

        let Some(current) = service.snapshots.current().await else {
            panic!("no snapshot");
        };
        assert_eq!(current.registrations.len(), 2);
    }

    #[derive(Debug)]
    struct BrokenStore;

    #[async_trait]
    impl RegistrationStore for BrokenStore {
        async fn insert(&self, _record: NewRegistration) -> Result<Registration, PortalError> {
            Err(PortalError::Persistence("down".to_string()))
        }

        async fn select_all(&self) -> Result<Vec<Registration>, PortalError> {
            Err(PortalError::Persistence("down".to_string()))
        }
    }

    #[tokio::test]
    async fn store_failure_surfaces_as_persistence_error() {
        let service = DashboardService::new(Arc::new(BrokenStore));
        assert!(matches!(
            service.refresh().await,
            Err(PortalError::Persistence(_))
        ));
        assert!(service.export_all().await.is_err());
    }
}

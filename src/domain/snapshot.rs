//! Dashboard snapshot and fetch sequencing.
//!
//! Every dashboard refresh re-reads the whole registration collection and
//! replaces the published snapshot. Refreshes are numbered when they start;
//! a refresh that finishes after a newer one has already been published is
//! discarded, so the published snapshot always comes from the most recently
//! started successful fetch.

use std::sync::Arc;
use std::sync::atomic::{AtomicU64, Ordering};

use chrono::{DateTime, Utc};
use tokio::sync::RwLock;

use super::catalog::EventCategory;
use super::event_stats::{self, CategoryBreakdown, DashboardTotals, EventStat};
use super::registration::Registration;

/// Registrations as of one fetch, with everything derived from them.
#[derive(Debug, Clone)]
pub struct DashboardSnapshot {
    /// Sequence number of the fetch that produced this snapshot.
    pub generation: u64,
    /// When the fetch completed.
    pub fetched_at: DateTime<Utc>,
    /// All registrations, newest first.
    pub registrations: Vec<Registration>,
    /// Per-event stats in first-seen order.
    pub stats: Vec<EventStat>,
    /// Headline totals.
    pub totals: DashboardTotals,
    /// Technical-event breakdown.
    pub technical: CategoryBreakdown,
    /// Non-technical-event breakdown.
    pub non_technical: CategoryBreakdown,
}

impl DashboardSnapshot {
    /// Derives stats, totals and breakdowns from a fetched list.
    #[must_use]
    pub fn build(generation: u64, registrations: Vec<Registration>) -> Self {
        let stats = event_stats::aggregate(&registrations);
        let totals = DashboardTotals::compute(&registrations, &stats);
        let technical = CategoryBreakdown::collect(EventCategory::Technical, &stats);
        let non_technical = CategoryBreakdown::collect(EventCategory::NonTechnical, &stats);
        Self {
            generation,
            fetched_at: Utc::now(),
            registrations,
            stats,
            totals,
            technical,
            non_technical,
        }
    }
}

/// Holds the published snapshot and hands out fetch generations.
#[derive(Debug, Default)]
pub struct SnapshotCell {
    last_started: AtomicU64,
    published: RwLock<Option<Arc<DashboardSnapshot>>>,
}

impl SnapshotCell {
    /// Creates an empty cell.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Reserves the generation number for a fetch that is about to start.
    pub fn begin(&self) -> u64 {
        self.last_started.fetch_add(1, Ordering::SeqCst) + 1
    }

    /// Publishes `snapshot` unless a newer generation is already published.
    ///
    /// Returns whichever snapshot is published afterwards.
    pub async fn publish(&self, snapshot: DashboardSnapshot) -> Arc<DashboardSnapshot> {
        let mut slot = self.published.write().await;
        if let Some(current) = slot.as_ref()
            && current.generation >= snapshot.generation
        {
            tracing::debug!(
                stale = snapshot.generation,
                published = current.generation,
                "discarding stale dashboard snapshot"
            );
            return Arc::clone(current);
        }
        let snapshot = Arc::new(snapshot);
        *slot = Some(Arc::clone(&snapshot));
        snapshot
    }

    /// Returns the published snapshot, if any.
    pub async fn current(&self) -> Option<Arc<DashboardSnapshot>> {
        self.published.read().await.clone()
    }
}

#[cfg(test)]
#[allow(clippy::panic)]
mod tests {
    use super::*;
    use crate::domain::event_stats::tests::{event, registration};

    #[test]
    fn build_derives_everything() {
        let regs = vec![
            registration("A", vec![event("web-dev", "Web Development Challenge", 200)]),
            registration("B", vec![event("bgmi", "BGMI Esports Tournament", 250)]),
        ];
        let snap = DashboardSnapshot::build(7, regs);
        assert_eq!(snap.generation, 7);
        assert_eq!(snap.stats.len(), 2);
        assert_eq!(snap.totals.total_revenue, 450);
        assert_eq!(snap.technical.revenue, 200);
        assert_eq!(snap.non_technical.revenue, 250);
    }

    #[tokio::test]
    async fn generations_increase() {
        let cell = SnapshotCell::new();
        assert_eq!(cell.begin(), 1);
        assert_eq!(cell.begin(), 2);
        assert!(cell.current().await.is_none());
    }

    #[tokio::test]
    async fn stale_completion_does_not_overwrite() {
        let cell = SnapshotCell::new();
        let older = cell.begin();
        let newer = cell.begin();

        let published = cell
            .publish(DashboardSnapshot::build(
                newer,
                vec![registration("New", vec![event("x", "X", 1)])],
            ))
            .await;
        assert_eq!(published.generation, newer);

        let after_stale = cell.publish(DashboardSnapshot::build(older, Vec::new())).await;
        assert_eq!(after_stale.generation, newer);

        let Some(current) = cell.current().await else {
            panic!("snapshot should be published");
        };
        assert_eq!(current.generation, newer);
        assert_eq!(current.registrations.len(), 1);
    }

    #[tokio::test]
    async fn in_order_completion_replaces() {
        let cell = SnapshotCell::new();
        let first = cell.begin();
        let _ = cell.publish(DashboardSnapshot::build(first, Vec::new())).await;
        let second = cell.begin();
        let published = cell.publish(DashboardSnapshot::build(second, Vec::new())).await;
        assert_eq!(published.generation, second);
    }
}

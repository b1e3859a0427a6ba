//! Per-event participant counts and revenue.
//!
//! Statistics are never stored. They are recomputed from the full
//! registration list on every dashboard fetch.

use std::collections::HashMap;

use serde::Serialize;
use utoipa::ToSchema;

use super::catalog::{self, EventCategory};
use super::registration::Registration;

/// Aggregated numbers for one event.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, ToSchema)]
pub struct EventStat {
    /// Catalog id the stat is grouped by.
    pub event_id: String,
    /// Display name of the first snapshot seen for this id.
    pub event_name: String,
    /// Number of (registration, event) pairs for this id.
    pub participant_count: u64,
    /// Sum of the recorded prices across those pairs.
    pub revenue: u64,
}

/// Groups every selected event of every registration by event id.
///
/// Output is ordered by first occurrence. An event listed twice in one
/// registration is counted twice; events nobody picked are absent.
#[must_use]
pub fn aggregate(registrations: &[Registration]) -> Vec<EventStat> {
    let mut index: HashMap<&str, usize> = HashMap::new();
    let mut stats: Vec<EventStat> = Vec::new();

    for event in registrations.iter().flat_map(|r| &r.selected_events) {
        let slot = *index.entry(event.id.as_str()).or_insert_with(|| {
            stats.push(EventStat {
                event_id: event.id.clone(),
                event_name: event.name.clone(),
                participant_count: 0,
                revenue: 0,
            });
            stats.len() - 1
        });
        if let Some(stat) = stats.get_mut(slot) {
            stat.participant_count += 1;
            stat.revenue += u64::from(event.price);
        }
    }

    stats
}

/// Headline numbers shown above the per-event cards.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, ToSchema)]
pub struct DashboardTotals {
    /// Number of registrations.
    pub total_participants: u64,
    /// Sum of every registration's total amount.
    pub total_revenue: u64,
    /// Number of distinct events with at least one participant.
    pub total_events: u64,
}

impl DashboardTotals {
    /// Computes the totals for a registration list and its stats.
    #[must_use]
    pub fn compute(registrations: &[Registration], stats: &[EventStat]) -> Self {
        Self {
            total_participants: registrations.len() as u64,
            total_revenue: registrations.iter().map(|r| r.total_amount).sum(),
            total_events: stats.len() as u64,
        }
    }
}

/// Stats of one catalog category with their combined revenue.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, ToSchema)]
pub struct CategoryBreakdown {
    /// Category these stats belong to.
    pub category: EventCategory,
    /// Sum of `revenue` over `events`.
    pub revenue: u64,
    /// Stats whose id is a catalog entry of this category.
    pub events: Vec<EventStat>,
}

impl CategoryBreakdown {
    /// Selects the stats belonging to `category`, keeping their order.
    ///
    /// Ids that are not in the catalog belong to no category.
    #[must_use]
    pub fn collect(category: EventCategory, stats: &[EventStat]) -> Self {
        let events: Vec<EventStat> = stats
            .iter()
            .filter(|s| catalog::find(&s.event_id).is_some_and(|e| e.category == category))
            .cloned()
            .collect();
        Self {
            category,
            revenue: events.iter().map(|s| s.revenue).sum(),
            events,
        }
    }
}

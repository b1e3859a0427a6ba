//! Static event catalog.
//!
//! The catalog is fixed at compile time. Registrations never reference it
//! directly: they carry an [`EventSnapshot`] of each chosen entry, so later
//! catalog edits never change historical totals.

use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

use super::registration::EventSnapshot;

/// Display name of the fest.
pub const FEST_NAME: &str = "Cache 2025";

/// Human-readable fest dates.
pub const FEST_DATES: &str = "Sep 17 & 18";

/// Catalog grouping used by the dashboard breakdowns.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "snake_case")]
pub enum EventCategory {
    /// Technical events (coding, quiz, expo).
    Technical,
    /// Non-technical events (photography, esports, drawing).
    NonTechnical,
}

/// A selectable event with its price in rupees.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct EventOption {
    /// Stable identifier used in URLs and submissions.
    pub id: &'static str,
    /// Display name.
    pub name: &'static str,
    /// Entry fee.
    pub price: u32,
    /// Catalog group.
    pub category: EventCategory,
}

impl EventOption {
    const fn technical(id: &'static str, name: &'static str, price: u32) -> Self {
        Self {
            id,
            name,
            price,
            category: EventCategory::Technical,
        }
    }

    const fn non_technical(id: &'static str, name: &'static str, price: u32) -> Self {
        Self {
            id,
            name,
            price,
            category: EventCategory::NonTechnical,
        }
    }

    /// Captures this entry as it stands now.
    #[must_use]
    pub fn snapshot(&self) -> EventSnapshot {
        EventSnapshot {
            id: self.id.to_string(),
            name: self.name.to_string(),
            price: self.price,
        }
    }
}

/// Every event open for registration, technical entries first.
pub const CATALOG: &[EventOption] = &[
    EventOption::technical("web-dev", "Web Development Challenge", 200),
    EventOption::technical("poster", "Poster Presentation", 100),
    EventOption::technical("tech-expo", "Tech Expo", 300),
    EventOption::technical("pymaster", "PyMaster Contest", 150),
    EventOption::technical("tech-quiz", "Technical Quiz", 100),
    EventOption::non_technical("photography", "Photography Contest", 150),
    EventOption::non_technical("free-fire", "Free Fire Esports Championship", 200),
    EventOption::non_technical("drawing", "Live Drawing", 100),
    EventOption::non_technical("bgmi", "BGMI Esports Tournament", 250),
    EventOption::non_technical("meme-contest", "Tech Meme Contest", 50),
];

/// Looks up a catalog entry by identifier.
#[must_use]
pub fn find(id: &str) -> Option<&'static EventOption> {
    CATALOG.iter().find(|event| event.id == id)
}

/// Returns the catalog entries of one category, in catalog order.
pub fn by_category(category: EventCategory) -> impl Iterator<Item = &'static EventOption> {
    CATALOG.iter().filter(move |event| event.category == category)
}

#[cfg(test)]
#[allow(clippy::panic)]
mod tests {
    use std::collections::HashSet;

    use super::*;

    #[test]
    fn ids_are_unique() {
        let ids: HashSet<_> = CATALOG.iter().map(|e| e.id).collect();
        assert_eq!(ids.len(), CATALOG.len());
    }

    #[test]
    fn find_known_and_unknown() {
        assert_eq!(find("bgmi").map(|e| e.price), Some(250));
        assert!(find("bgmi ").is_none());
        assert!(find("").is_none());
    }

    #[test]
    fn categories_split_catalog_evenly() {
        assert_eq!(by_category(EventCategory::Technical).count(), 5);
        assert_eq!(by_category(EventCategory::NonTechnical).count(), 5);
    }

    #[test]
    fn snapshot_copies_name_and_price() {
        let Some(event) = find("tech-quiz") else {
            panic!("tech-quiz is in the catalog");
        };
        let snap = event.snapshot();
        assert_eq!(snap.id, "tech-quiz");
        assert_eq!(snap.name, "Technical Quiz");
        assert_eq!(snap.price, 100);
    }
}

//! Organizer directory shown on the public organizers page.

use serde::Serialize;
use utoipa::ToSchema;

/// One member of the organizing team.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Organizer {
    /// Full name.
    pub name: &'static str,
    /// Role on the team.
    pub role: &'static str,
}

/// The organizing team, in display order.
pub const ORGANIZERS: &[Organizer] = &[
    Organizer { name: "Abhivan Charan", role: "Event Coordinator" },
    Organizer { name: "Naga Durga", role: "Technical Lead" },
    Organizer { name: "Vinod", role: "Operations Head" },
    Organizer { name: "Murali", role: "Marketing Lead" },
    Organizer { name: "Raghava", role: "Development Lead" },
    Organizer { name: "Zaheer", role: "Design Head" },
    Organizer { name: "Kranth", role: "Logistics Coordinator" },
];

/// People who built the registration website.
pub const DEVELOPERS: &[&str] = &["R Karthikeya"];

/// Organizer entry as rendered by the directory endpoint.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, ToSchema)]
pub struct OrganizerCard {
    /// Full name.
    pub name: String,
    /// Role on the team.
    pub role: String,
    /// Avatar initials.
    pub initials: String,
}

impl From<&Organizer> for OrganizerCard {
    fn from(organizer: &Organizer) -> Self {
        Self {
            name: organizer.name.to_string(),
            role: organizer.role.to_string(),
            initials: initials(organizer.name),
        }
    }
}

/// First character of every space-separated part of `name`.
#[must_use]
pub fn initials(name: &str) -> String {
    name.split(' ').filter_map(|part| part.chars().next()).collect()
}

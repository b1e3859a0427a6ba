//! Domain layer: catalog, registrations, statistics and reports.
//!
//! Everything here is plain data and pure functions except the admin
//! session store and the snapshot cell, which hold shared state behind
//! async locks.

pub mod admin_session;
pub mod catalog;
pub mod csv_export;
pub mod event_stats;
pub mod organizers;
pub mod registration;
pub mod registration_id;
pub mod snapshot;

pub use admin_session::{AdminSession, AdminSessions, SessionToken};
pub use catalog::{EventCategory, EventOption};
pub use csv_export::CsvExport;
pub use event_stats::EventStat;
pub use registration::{EventSnapshot, NewRegistration, Participant, Registration};
pub use registration_id::RegistrationId;
pub use snapshot::{DashboardSnapshot, SnapshotCell};

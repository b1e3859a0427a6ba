//! # fest-portal
//!
//! Registration backend for the Cache tech fest: a public registration
//! endpoint, the organizer directory, and an admin dashboard that
//! aggregates per-event participant counts and revenue and exports CSV
//! reports.
//!
//! ## Architecture
//!
//! ```text
//! Clients (HTTP)
//!     │
//!     ├── REST Handlers (api/)
//!     │
//!     ├── RegistrationService ── write path (service/)
//!     ├── DashboardService ───── read, aggregate, export (service/)
//!     │
//!     ├── Catalog, Aggregator, CSV Exporter, Sessions (domain/)
//!     │
//!     └── RegistrationStore: PostgreSQL | in-memory (persistence/)
//! ```

pub mod api;
pub mod app_state;
pub mod config;
pub mod domain;
pub mod error;
pub mod persistence;
pub mod service;

//! Service layer: business logic orchestration.
//!
//! [`RegistrationService`] owns the write path and [`DashboardService`]
//! the read, aggregate and export path. Both talk to the store through
//! [`crate::persistence::RegistrationStore`].

pub mod dashboard_service;
pub mod registration_service;

pub use dashboard_service::DashboardService;
pub use registration_service::RegistrationService;

//! Shared application state injected into all Axum handlers.

use std::sync::Arc;

use crate::domain::AdminSessions;
use crate::persistence::RegistrationStore;
use crate::service::{DashboardService, RegistrationService};

/// Shared application state available to all handlers via Axum's
/// `State` extractor.
#[derive(Debug, Clone)]
pub struct AppState {
    /// Write path for public submissions.
    pub registration_service: Arc<RegistrationService>,
    /// Read, aggregate and export path for the admin dashboard.
    pub dashboard_service: Arc<DashboardService>,
    /// Admin session store gating the dashboard routes.
    pub sessions: Arc<AdminSessions>,
}

impl AppState {
    /// Wires both services to one store.
    #[must_use]
    pub fn new(store: Arc<dyn RegistrationStore>, sessions: AdminSessions) -> Self {
        Self {
            registration_service: Arc::new(RegistrationService::new(Arc::clone(&store))),
            dashboard_service: Arc::new(DashboardService::new(store)),
            sessions: Arc::new(sessions),
        }
    }
}

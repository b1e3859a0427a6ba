//! fest-portal server entry point.
//!
//! Starts the Axum HTTP server with the public and admin REST endpoints.

use std::sync::Arc;
use std::time::Duration;

use anyhow::Context;
use sqlx::postgres::PgPoolOptions;
use tracing_subscriber::EnvFilter;

use fest_portal::api;
use fest_portal::app_state::AppState;
use fest_portal::config::{LogFormat, PortalConfig};
use fest_portal::domain::AdminSessions;
use fest_portal::persistence::{MemoryStore, PostgresStore, RegistrationStore};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // Load configuration
    let config = PortalConfig::from_env()
        .map_err(|e| anyhow::anyhow!("invalid configuration: {e}"))?;

    // Initialize tracing
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));
    match config.log_format {
        LogFormat::Json => tracing_subscriber::fmt().json().with_env_filter(filter).init(),
        LogFormat::Text => tracing_subscriber::fmt().with_env_filter(filter).init(),
    }
    tracing::info!(addr = %config.listen_addr, "starting fest-portal");

    // Build persistence layer
    let store = build_store(&config).await?;

    let sessions = AdminSessions::new(
        config.admin_passphrase.clone(),
        i64::try_from(config.admin_session_ttl_secs)
            .ok()
            .and_then(chrono::Duration::try_seconds)
            .unwrap_or_else(|| chrono::Duration::days(365)),
    );
    if !sessions.login_enabled() {
        tracing::warn!("ADMIN_PASSPHRASE is not set; admin dashboard is unreachable");
    }

    // Build application
    let app_state = AppState::new(store, sessions);
    let app = api::build_app(app_state, Duration::from_secs(config.request_timeout_secs));

    // Start server
    let listener = tokio::net::TcpListener::bind(config.listen_addr)
        .await
        .with_context(|| format!("binding {}", config.listen_addr))?;
    tracing::info!(addr = %config.listen_addr, "server listening");

    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await
        .context("server error")?;

    tracing::info!("server stopped");
    Ok(())
}

async fn build_store(config: &PortalConfig) -> anyhow::Result<Arc<dyn RegistrationStore>> {
    if !config.persistence_enabled {
        tracing::warn!("persistence disabled; registrations are kept in memory only");
        return Ok(Arc::new(MemoryStore::new()));
    }

    let pool = PgPoolOptions::new()
        .max_connections(config.database_max_connections)
        .min_connections(config.database_min_connections)
        .acquire_timeout(Duration::from_secs(config.database_connect_timeout_secs))
        .connect(&config.database_url)
        .await
        .context("connecting to PostgreSQL")?;

    let store = PostgresStore::new(pool);
    store.migrate().await.context("running migrations")?;
    tracing::info!("connected to PostgreSQL");
    Ok(Arc::new(store))
}

async fn shutdown_signal() {
    if let Err(e) = tokio::signal::ctrl_c().await {
        tracing::error!(error = %e, "failed to listen for shutdown signal");
        std::future::pending::<()>().await;
    }
    tracing::info!("shutdown signal received");
}

//! Admin session store.
//!
//! The dashboard is gated by a single shared passphrase. A successful login
//! mints an opaque bearer token that stays valid for a fixed TTL or until
//! logout. This is a server-side gate for a small organizer team, not a
//! user account system.

use std::collections::HashMap;
use std::fmt;

use chrono::{DateTime, Duration, Utc};
use constant_time_eq::constant_time_eq;
use serde::{Deserialize, Serialize};
use tokio::sync::RwLock;

use crate::error::PortalError;

/// Opaque admin bearer token.
#[derive(Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct SessionToken(uuid::Uuid);

impl SessionToken {
    /// Mints a new random token.
    #[must_use]
    pub fn new() -> Self {
        Self(uuid::Uuid::new_v4())
    }

    /// Parses a token from its textual form.
    #[must_use]
    pub fn parse(raw: &str) -> Option<Self> {
        uuid::Uuid::parse_str(raw.trim()).ok().map(Self)
    }
}

impl Default for SessionToken {
    fn default() -> Self {
        Self::new()
    }
}

impl fmt::Display for SessionToken {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

// Keep tokens out of logs.
impl fmt::Debug for SessionToken {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("SessionToken(..)")
    }
}

/// A freshly issued session.
#[derive(Debug, Clone, Copy)]
pub struct AdminSession {
    /// Bearer token to present on admin requests.
    pub token: SessionToken,
    /// Instant after which the token is rejected.
    pub expires_at: DateTime<Utc>,
}

/// Live admin sessions keyed by token.
pub struct AdminSessions {
    passphrase: Option<String>,
    ttl: Duration,
    sessions: RwLock<HashMap<SessionToken, DateTime<Utc>>>,
}

impl fmt::Debug for AdminSessions {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("AdminSessions")
            .field("login_enabled", &self.passphrase.is_some())
            .field("ttl", &self.ttl)
            .finish_non_exhaustive()
    }
}

impl AdminSessions {
    /// Creates a store accepting `passphrase`. `None` disables login.
    #[must_use]
    pub fn new(passphrase: Option<String>, ttl: Duration) -> Self {
        Self {
            passphrase: passphrase.filter(|p| !p.is_empty()),
            ttl,
            sessions: RwLock::new(HashMap::new()),
        }
    }

    /// Returns `true` if a passphrase is configured.
    #[must_use]
    pub fn login_enabled(&self) -> bool {
        self.passphrase.is_some()
    }

    /// Issues a session if `passphrase` matches the configured one.
    ///
    /// # Errors
    ///
    /// Returns [`PortalError::Unauthorized`] on mismatch or when login is
    /// disabled.
    pub async fn login(&self, passphrase: &str) -> Result<AdminSession, PortalError> {
        let Some(expected) = self.passphrase.as_deref() else {
            tracing::warn!("admin login attempted but no passphrase is configured");
            return Err(PortalError::Unauthorized);
        };
        if !constant_time_eq(expected.as_bytes(), passphrase.as_bytes()) {
            tracing::warn!("admin login rejected");
            return Err(PortalError::Unauthorized);
        }

        let session = AdminSession {
            token: SessionToken::new(),
            expires_at: Utc::now() + self.ttl,
        };
        let mut map = self.sessions.write().await;
        map.retain(|_, expires_at| *expires_at > Utc::now());
        map.insert(session.token, session.expires_at);
        tracing::info!(expires_at = %session.expires_at, "admin session opened");
        Ok(session)
    }

    /// Forgets `token`. Returns `true` if it was live.
    pub async fn logout(&self, token: SessionToken) -> bool {
        let removed = self.sessions.write().await.remove(&token).is_some();
        if removed {
            tracing::info!("admin session closed");
        }
        removed
    }

    /// Checks that `token` names a live session.
    ///
    /// # Errors
    ///
    /// Returns [`PortalError::Unauthorized`] for unknown or expired tokens.
    /// Expired tokens are dropped.
    pub async fn authorize(&self, token: SessionToken) -> Result<(), PortalError> {
        let expires_at = self.sessions.read().await.get(&token).copied();
        match expires_at {
            Some(at) if at > Utc::now() => Ok(()),
            Some(_) => {
                self.sessions.write().await.remove(&token);
                Err(PortalError::Unauthorized)
            }
            None => Err(PortalError::Unauthorized),
        }
    }

    /// Returns the number of sessions held, expired ones included.
    pub async fn len(&self) -> usize {
        self.sessions.read().await.len()
    }

    /// Returns `true` if no session is held.
    pub async fn is_empty(&self) -> bool {
        self.sessions.read().await.is_empty()
    }
}

#[cfg(test)]
#[allow(clippy::panic)]
mod tests {
    use super::*;

    fn sessions() -> AdminSessions {
        AdminSessions::new(Some("cache-2025".to_string()), Duration::hours(1))
    }

    #[tokio::test]
    async fn login_then_authorize() {
        let store = sessions();
        let Ok(session) = store.login("cache-2025").await else {
            panic!("login should succeed");
        };
        assert!(session.expires_at > Utc::now());
        assert!(store.authorize(session.token).await.is_ok());
    }

    #[tokio::test]
    async fn wrong_passphrase_is_rejected() {
        let store = sessions();
        assert!(matches!(
            store.login("cache-2024").await,
            Err(PortalError::Unauthorized)
        ));
        assert!(store.is_empty().await);
    }

    #[tokio::test]
    async fn prefix_and_extended_passphrases_are_rejected() {
        let store = sessions();
        for attempt in ["cache-", "cache-20255", "", "CACHE-2025"] {
            assert!(
                matches!(store.login(attempt).await, Err(PortalError::Unauthorized)),
                "{attempt}"
            );
        }
        assert!(store.is_empty().await);
    }

    #[tokio::test]
    async fn login_disabled_without_passphrase() {
        let store = AdminSessions::new(None, Duration::hours(1));
        assert!(!store.login_enabled());
        assert!(store.login("").await.is_err());

        let blank = AdminSessions::new(Some(String::new()), Duration::hours(1));
        assert!(!blank.login_enabled());
    }

    #[tokio::test]
    async fn logout_revokes_token() {
        let store = sessions();
        let Ok(session) = store.login("cache-2025").await else {
            panic!("login should succeed");
        };
        assert!(store.logout(session.token).await);
        assert!(!store.logout(session.token).await);
        assert!(store.authorize(session.token).await.is_err());
    }

    #[tokio::test]
    async fn expired_token_is_rejected_and_purged() {
        let store = AdminSessions::new(Some("p".to_string()), Duration::seconds(-1));
        let Ok(session) = store.login("p").await else {
            panic!("login should succeed");
        };
        assert_eq!(store.len().await, 1);
        assert!(store.authorize(session.token).await.is_err());
        assert!(store.is_empty().await);
    }

    #[tokio::test]
    async fn unknown_token_is_rejected() {
        let store = sessions();
        assert!(store.authorize(SessionToken::new()).await.is_err());
    }

    #[test]
    fn token_parse_and_debug() {
        let token = SessionToken::new();
        assert_eq!(SessionToken::parse(&token.to_string()), Some(token));
        assert!(SessionToken::parse("not-a-token").is_none());
        assert_eq!(format!("{token:?}"), "SessionToken(..)");
    }
}

//! Custom Axum extractors.

use axum::extract::FromRequestParts;
use axum::http::header::AUTHORIZATION;
use axum::http::request::Parts;
use axum::http::HeaderMap;

use crate::app_state::AppState;
use crate::domain::SessionToken;
use crate::error::PortalError;

/// Proof of a live admin session.
///
/// Reads `Authorization: Bearer <token>` and checks it against the
/// session store. Rejects with [`PortalError::Unauthorized`].
#[derive(Debug, Clone, Copy)]
pub struct AdminAuth {
    /// The presented token.
    pub token: SessionToken,
}

impl FromRequestParts<AppState> for AdminAuth {
    type Rejection = PortalError;

    async fn from_request_parts(
        parts: &mut Parts,
        state: &AppState,
    ) -> Result<Self, Self::Rejection> {
        let token = bearer_token(&parts.headers).ok_or(PortalError::Unauthorized)?;
        state.sessions.authorize(token).await?;
        Ok(Self { token })
    }
}

fn bearer_token(headers: &HeaderMap) -> Option<SessionToken> {
    let value = headers.get(AUTHORIZATION)?.to_str().ok()?;
    let (scheme, token) = value.split_once(' ')?;
    if !scheme.eq_ignore_ascii_case("bearer") {
        return None;
    }
    SessionToken::parse(token)
}

#[cfg(test)]
mod tests {
    use axum::http::HeaderValue;

    use super::*;

    fn headers(value: &str) -> HeaderMap {
        let mut map = HeaderMap::new();
        if let Ok(v) = HeaderValue::from_str(value) {
            map.insert(AUTHORIZATION, v);
        }
        map
    }

    #[test]
    fn parses_bearer_header() {
        let token = SessionToken::new();
        assert_eq!(bearer_token(&headers(&format!("Bearer {token}"))), Some(token));
        assert_eq!(bearer_token(&headers(&format!("bearer {token}"))), Some(token));
    }

    #[test]
    fn rejects_other_schemes_and_garbage() {
        let token = SessionToken::new();
        assert!(bearer_token(&headers(&format!("Basic {token}"))).is_none());
        assert!(bearer_token(&headers("Bearer")).is_none());
        assert!(bearer_token(&headers("Bearer abc")).is_none());
        assert!(bearer_token(&HeaderMap::new()).is_none());
    }
}

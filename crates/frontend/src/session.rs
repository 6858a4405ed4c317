//! Session token lifecycle
//!
//! [`SessionManager`] is the only component that writes session tokens. It
//! mediates between the [`AuthApi`] and a [`TokenStore`]:
//!
//! - `register` / `login` success writes both tokens together (`NoSession`
//!   or `HasSession` → `HasSession`)
//! - `refresh_access` success overwrites the access token only
//! - nothing ever removes a session; there is no logout
//!
//! Token expiry is not tracked. A stale access token is only discovered when
//! a protected request fails, at which point callers may invoke
//! [`SessionManager::refresh_access`].

use crate::api::AuthApi;
use std::fmt;
use storefront_core::{ACCESS_KEY, REFRESH_KEY, StorageError, StorageResult, TokenStore};
use storefront_http::ClientError;
use storefront_http::types::{LoginRequest, RefreshRequest, RegisterRequest, TokenPair};
use thiserror::Error;
use tracing::{debug, info, warn};

/// The access/refresh token pair representing an authenticated client
#[derive(Clone, PartialEq, Eq)]
pub struct SessionTokens {
    pub access_token: String,
    pub refresh_token: String,
}

impl fmt::Debug for SessionTokens {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("SessionTokens")
            .field("access_token", &"<redacted>")
            .field("refresh_token", &"<redacted>")
            .finish()
    }
}

impl From<TokenPair> for SessionTokens {
    fn from(pair: TokenPair) -> Self {
        Self {
            access_token: pair.access,
            refresh_token: pair.refresh,
        }
    }
}

/// Whether a session is currently stored
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SessionState {
    NoSession,
    HasSession,
}

/// What a call to [`SessionManager::refresh_access`] did
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RefreshOutcome {
    /// No refresh token stored; the Auth API was not contacted
    Skipped,
    /// The access token was replaced
    Refreshed,
    /// The Auth API or the store failed; stored tokens are unchanged
    Failed,
}

/// Errors from register and login
#[derive(Debug, Error)]
pub enum SessionError {
    /// The Auth API refused the request; `payload` is its response body, verbatim
    #[error("{payload}")]
    Rejected { status: u16, payload: String },

    /// The request never produced a usable response
    #[error("Network error: {0}")]
    Network(ClientError),

    /// Tokens were issued but could not be persisted
    #[error("Storage error: {0}")]
    Storage(#[from] StorageError),
}

impl From<ClientError> for SessionError {
    fn from(err: ClientError) -> Self {
        match (err.status(), err.payload()) {
            (Some(status), Some(payload)) => Self::Rejected {
                status,
                payload: payload.to_string(),
            },
            _ => Self::Network(err),
        }
    }
}

/// Owns the client's authentication state
pub struct SessionManager<A, S> {
    api: A,
    store: S,
}

impl<A: AuthApi, S: TokenStore> SessionManager<A, S> {
    pub const fn new(api: A, store: S) -> Self {
        Self { api, store }
    }

    pub const fn api(&self) -> &A {
        &self.api
    }

    pub const fn store(&self) -> &S {
        &self.store
    }

    /// Create an account and store the issued tokens
    ///
    /// No client-side validation is done; the Auth API is the sole validator.
    pub async fn register(
        &self,
        username: &str,
        email: &str,
        password: &str,
    ) -> Result<SessionTokens, SessionError> {
        let request = RegisterRequest {
            username: username.to_string(),
            email: email.to_string(),
            password: password.to_string(),
        };
        let pair = self.api.register(&request).await?;
        info!(username, "Registered new account");
        self.create_session(pair)
    }

    /// Log in and store the issued tokens
    pub async fn login(&self, username: &str, password: &str) -> Result<SessionTokens, SessionError> {
        let request = LoginRequest {
            username: username.to_string(),
            password: password.to_string(),
        };
        let pair = self.api.login(&request).await?;
        info!(username, "Logged in");
        self.create_session(pair)
    }

    /// Replace the stored access token using the stored refresh token
    ///
    /// Never fails from the caller's point of view: without a refresh token
    /// this is a no-op, and refresh failures are only logged.
    pub async fn refresh_access(&self) -> RefreshOutcome {
        let refresh = match self.store.get(REFRESH_KEY) {
            Ok(Some(refresh)) => refresh,
            Ok(None) => {
                debug!("No refresh token stored, skipping refresh");
                return RefreshOutcome::Skipped;
            }
            Err(e) => {
                warn!(error = %e, "Could not read refresh token");
                return RefreshOutcome::Failed;
            }
        };

        let token = match self.api.refresh_access(&RefreshRequest { refresh }).await {
            Ok(token) => token,
            Err(e) => {
                warn!(error = %e, "Access token refresh failed");
                return RefreshOutcome::Failed;
            }
        };

        match self.store.set(ACCESS_KEY, &token.access) {
            Ok(()) => {
                info!("Access token refreshed");
                RefreshOutcome::Refreshed
            }
            Err(e) => {
                warn!(error = %e, "Could not persist refreshed access token");
                RefreshOutcome::Failed
            }
        }
    }

    /// Current session state; `HasSession` requires both tokens
    pub fn state(&self) -> StorageResult<SessionState> {
        Ok(if self.tokens()?.is_some() {
            SessionState::HasSession
        } else {
            SessionState::NoSession
        })
    }

    /// Stored token pair, if both halves are present
    pub fn tokens(&self) -> StorageResult<Option<SessionTokens>> {
        let access = self.store.get(ACCESS_KEY)?;
        let refresh = self.store.get(REFRESH_KEY)?;
        Ok(access
            .zip(refresh)
            .map(|(access_token, refresh_token)| SessionTokens {
                access_token,
                refresh_token,
            }))
    }

    /// Stored access token for protected requests
    pub fn access_token(&self) -> StorageResult<Option<String>> {
        self.store.get(ACCESS_KEY)
    }

    fn create_session(&self, pair: TokenPair) -> Result<SessionTokens, SessionError> {
        self.store
            .set_many(&[(ACCESS_KEY, &pair.access), (REFRESH_KEY, &pair.refresh)])?;
        debug!("Session tokens stored");
        Ok(pair.into())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::api::mock::MockAuthApi;
    use storefront_core::MemoryStore;
    use storefront_http::types::AccessToken;

    fn pair(access: &str, refresh: &str) -> TokenPair {
        TokenPair {
            access: access.to_string(),
            refresh: refresh.to_string(),
        }
    }

    fn seeded_store(access: &str, refresh: &str) -> MemoryStore {
        let store = MemoryStore::new();
        store
            .set_many(&[(ACCESS_KEY, access), (REFRESH_KEY, refresh)])
            .unwrap();
        store
    }

    #[tokio::test]
    async fn test_login_stores_both_tokens_as_received() {
        let mut api = MockAuthApi::new();
        api.expect_login()
            .withf(|req| req.username == "a" && req.password == "b")
            .times(1)
            .returning(|_| Ok(pair("T1", "R1")));

        let store = MemoryStore::new();
        let manager = SessionManager::new(api, store.clone());
        let tokens = manager.login("a", "b").await.unwrap();

        assert_eq!(tokens.access_token, "T1");
        assert_eq!(store.get(ACCESS_KEY).unwrap().as_deref(), Some("T1"));
        assert_eq!(store.get(REFRESH_KEY).unwrap().as_deref(), Some("R1"));
        assert_eq!(manager.state().unwrap(), SessionState::HasSession);
    }

    #[tokio::test]
    async fn test_register_keeps_tokens_byte_for_byte() {
        let access = "eyJhbGciOiJIUzI1NiJ9.eyJ1c2VyX2lkIjoxfQ.sig+/= ";
        let refresh = "  r\u{e9}fresh\ttoken ";
        let mut api = MockAuthApi::new();
        api.expect_register()
            .withf(|req| {
                req.username == "alice" && req.email == "alice@example.com" && req.password == "pw"
            })
            .returning(move |_| Ok(pair(access, refresh)));

        let store = MemoryStore::new();
        let manager = SessionManager::new(api, store.clone());
        manager
            .register("alice", "alice@example.com", "pw")
            .await
            .unwrap();

        assert_eq!(store.get(ACCESS_KEY).unwrap().as_deref(), Some(access));
        assert_eq!(store.get(REFRESH_KEY).unwrap().as_deref(), Some(refresh));
    }

    #[tokio::test]
    async fn test_rejected_login_surfaces_payload_and_stores_nothing() {
        let body = r#"{"non_field_errors":["Invalid credentials"]}"#;
        let mut api = MockAuthApi::new();
        api.expect_login()
            .returning(move |_| Err(ClientError::BadRequest(body.to_string())));

        let store = MemoryStore::new();
        let manager = SessionManager::new(api, store.clone());
        let err = manager.login("a", "wrong").await.unwrap_err();

        match err {
            SessionError::Rejected { status, payload } => {
                assert_eq!(status, 400);
                assert_eq!(payload, body);
            }
            other => panic!("expected rejection, got {other:?}"),
        }
        assert!(store.is_empty());
        assert_eq!(manager.state().unwrap(), SessionState::NoSession);
    }

    #[tokio::test]
    async fn test_rejected_register_leaves_existing_session() {
        let mut api = MockAuthApi::new();
        api.expect_register()
            .returning(|_| Err(ClientError::BadRequest("{}".to_string())));

        let store = seeded_store("A0", "R0");
        let manager = SessionManager::new(api, store.clone());
        assert!(manager.register("a", "a@b", "p").await.is_err());

        assert_eq!(store.get(ACCESS_KEY).unwrap().as_deref(), Some("A0"));
        assert_eq!(store.get(REFRESH_KEY).unwrap().as_deref(), Some("R0"));
    }

    #[tokio::test]
    async fn test_refresh_without_refresh_token_skips_network() {
        let mut api = MockAuthApi::new();
        api.expect_refresh_access().times(0);

        let manager = SessionManager::new(api, MemoryStore::new());
        assert_eq!(manager.refresh_access().await, RefreshOutcome::Skipped);
        assert_eq!(manager.state().unwrap(), SessionState::NoSession);
    }

    #[tokio::test]
    async fn test_refresh_overwrites_access_only() {
        let mut api = MockAuthApi::new();
        api.expect_refresh_access()
            .withf(|req| req.refresh == "R1")
            .times(1)
            .returning(|_| {
                Ok(AccessToken {
                    access: "T2".to_string(),
                })
            });

        let store = seeded_store("T1", "R1");
        let manager = SessionManager::new(api, store.clone());
        assert_eq!(manager.refresh_access().await, RefreshOutcome::Refreshed);

        assert_eq!(store.get(ACCESS_KEY).unwrap().as_deref(), Some("T2"));
        assert_eq!(store.get(REFRESH_KEY).unwrap().as_deref(), Some("R1"));
    }

    #[tokio::test]
    async fn test_refresh_failure_is_silent_and_changes_nothing() {
        let mut api = MockAuthApi::new();
        api.expect_refresh_access().times(1).returning(|_| {
            Err(ClientError::AuthenticationFailed(
                r#"{"detail":"Token is invalid or expired"}"#.to_string(),
            ))
        });

        let store = seeded_store("T1", "R1");
        let manager = SessionManager::new(api, store.clone());
        assert_eq!(manager.refresh_access().await, RefreshOutcome::Failed);

        assert_eq!(store.get(ACCESS_KEY).unwrap().as_deref(), Some("T1"));
        assert_eq!(store.get(REFRESH_KEY).unwrap().as_deref(), Some("R1"));
        assert_eq!(manager.state().unwrap(), SessionState::HasSession);
    }

    #[test]
    fn test_session_error_classification() {
        let rejected: SessionError = ClientError::ServerError {
            status: 503,
            message: "maintenance".to_string(),
        }
        .into();
        assert!(matches!(rejected, SessionError::Rejected { status: 503, .. }));
        assert_eq!(rejected.to_string(), "maintenance");

        let network: SessionError = ClientError::Configuration("bad".to_string()).into();
        assert!(matches!(network, SessionError::Network(_)));
    }

    #[test]
    fn test_tokens_require_both_halves() {
        let store = MemoryStore::new();
        store.set(ACCESS_KEY, "orphan").unwrap();
        let manager = SessionManager::new(MockAuthApi::new(), store);

        assert_eq!(manager.tokens().unwrap(), None);
        assert_eq!(manager.state().unwrap(), SessionState::NoSession);
        assert_eq!(manager.access_token().unwrap().as_deref(), Some("orphan"));
    }
}

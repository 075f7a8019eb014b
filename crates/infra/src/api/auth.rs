//! Bearer token management
//!
//! Tokens issued by `login` are kept in the session store under
//! `CONVOY_AUTH_TOKEN`; the client asks an [`AccessTokenProvider`] for the
//! current one on every authenticated request.

use std::sync::Arc;

use async_trait::async_trait;
use convoy_core::session::{read_json, write_json, SessionStore};
use convoy_domain::constants::SESSION_AUTH_TOKEN_KEY;
use convoy_domain::AuthToken;
use tracing::debug;

use super::errors::ApiError;

/// Trait for providing access tokens
///
/// This trait allows dependency injection and testing with mock providers.
#[async_trait]
pub trait AccessTokenProvider: Send + Sync {
    /// Current access token, or `None` when the session is anonymous
    async fn access_token(&self) -> Result<Option<String>, ApiError>;
}

/// Fixed token, mainly for scripts and tests
#[derive(Debug, Clone, Default)]
pub struct StaticTokenProvider {
    token: Option<String>,
}

impl StaticTokenProvider {
    pub fn new(token: impl Into<String>) -> Self {
        Self { token: Some(token.into()) }
    }

    pub fn anonymous() -> Self {
        Self { token: None }
    }
}

#[async_trait]
impl AccessTokenProvider for StaticTokenProvider {
    async fn access_token(&self) -> Result<Option<String>, ApiError> {
        Ok(self.token.clone())
    }
}

/// Reads the token persisted by the last successful login
pub struct SessionTokenProvider {
    store: Arc<dyn SessionStore>,
}

impl SessionTokenProvider {
    pub fn new(store: Arc<dyn SessionStore>) -> Self {
        Self { store }
    }
}

#[async_trait]
impl AccessTokenProvider for SessionTokenProvider {
    async fn access_token(&self) -> Result<Option<String>, ApiError> {
        let token: Option<AuthToken> = read_json(self.store.as_ref(), SESSION_AUTH_TOKEN_KEY)?;
        Ok(token.map(|t| t.access_token))
    }
}

/// Persist a freshly issued token pair.
pub fn store_token(store: &dyn SessionStore, token: &AuthToken) -> Result<(), ApiError> {
    debug!("storing session token");
    write_json(store, SESSION_AUTH_TOKEN_KEY, token)?;
    Ok(())
}

/// Forget the persisted token pair.
pub fn clear_token(store: &dyn SessionStore) -> Result<(), ApiError> {
    debug!("clearing session token");
    store.remove(SESSION_AUTH_TOKEN_KEY)?;
    Ok(())
}

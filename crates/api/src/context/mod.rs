//! Application context - dependency injection container

use std::sync::Arc;

use convoy_core::{ErrorInterceptor, LoginRedirect, Notifier, SessionStore};
use convoy_domain::{Config, ConvoyError, Result};
use convoy_infra::api::{ApiClient, ApiClientConfig, SessionTokenProvider};
use convoy_infra::{EventLogsService, FileSessionStore, LoginService, PrivateService};
use tracing::debug;

use crate::adapters::{LoginPrompt, TerminalNotifier, TrackingNotifier};

/// Application context - holds all services and dependencies
pub struct AppContext {
    pub config: Config,
    pub store: Arc<dyn SessionStore>,
    pub login: LoginService,
    pub private: PrivateService,
    pub event_logs: EventLogsService,
    login_prompt: Arc<LoginPrompt>,
    notifier: Arc<TrackingNotifier>,
}

impl AppContext {
    /// Wire the services against the session file named in `config`,
    /// reporting interceptor notifications on stderr.
    ///
    /// # Errors
    /// Returns an error if the session file is unreadable or the HTTP client
    /// cannot be built.
    pub fn new(config: Config) -> Result<Self> {
        let store: Arc<dyn SessionStore> = Arc::new(FileSessionStore::open(&config.session.path)?);
        Self::with_parts(config, store, Arc::new(TerminalNotifier::stderr()))
    }

    /// Same wiring with an explicit session store and notifier.
    ///
    /// # Errors
    /// Returns an error if the HTTP client cannot be built.
    pub fn with_parts(
        config: Config,
        store: Arc<dyn SessionStore>,
        notifier: Arc<dyn Notifier>,
    ) -> Result<Self> {
        let login_prompt = Arc::new(LoginPrompt::new());
        let redirect: Arc<dyn LoginRedirect> = login_prompt.clone();
        let notifier = Arc::new(TrackingNotifier::new(notifier));

        let client = ApiClient::builder()
            .config(ApiClientConfig::from(&config.api))
            .auth(Arc::new(SessionTokenProvider::new(store.clone())))
            .interceptor(ErrorInterceptor::new(redirect, notifier.clone()))
            .build()
            .map_err(|e| ConvoyError::Config(e.to_string()))?;
        let client = Arc::new(client);

        debug!(base_url = %client.base_url(), "application context ready");

        Ok(Self {
            login: LoginService::new(client.clone(), store.clone()),
            private: PrivateService::new(client.clone(), store.clone()),
            event_logs: EventLogsService::new(client),
            config,
            store,
            login_prompt,
            notifier,
        })
    }

    /// Whether any call so far was answered with a login redirect.
    pub fn login_required(&self) -> bool {
        self.login_prompt.requested()
    }

    /// Whether the interceptor has already shown a failure to the user.
    pub fn failure_shown(&self) -> bool {
        self.notifier.shown() > 0
    }
}

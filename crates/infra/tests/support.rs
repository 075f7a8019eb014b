#![allow(dead_code)]

use std::sync::Arc;

use convoy_core::{ErrorInterceptor, LoginRedirect, Navigation, Notification, Notifier, SessionStore};
use convoy_infra::api::{ApiClient, ApiClientConfig, SessionTokenProvider};
use convoy_infra::{EventLogsService, LoginService, MemorySessionStore, PrivateService};
use parking_lot::Mutex;
use wiremock::MockServer;

/// Records every redirect and notification the interceptor emits.
#[derive(Default)]
pub struct RecordingPorts {
    navigations: Mutex<Vec<Navigation>>,
    notifications: Mutex<Vec<String>>,
}

impl RecordingPorts {
    pub fn navigations(&self) -> Vec<Navigation> {
        self.navigations.lock().clone()
    }

    pub fn notifications(&self) -> Vec<String> {
        self.notifications.lock().clone()
    }
}

impl LoginRedirect for RecordingPorts {
    fn redirect_to_login(&self, navigation: &Navigation) {
        self.navigations.lock().push(navigation.clone());
    }
}

impl Notifier for RecordingPorts {
    fn show_notification(&self, notification: &Notification) {
        self.notifications.lock().push(notification.message.clone());
    }
}

/// Services wired against a mock server, sharing one in-memory session.
pub struct Harness {
    pub server: MockServer,
    pub ports: Arc<RecordingPorts>,
    pub store: Arc<dyn SessionStore>,
    pub login: LoginService,
    pub private: PrivateService,
    pub event_logs: EventLogsService,
}

impl Harness {
    pub async fn start() -> Self {
        Self::with_config(|_| {}).await
    }

    pub async fn with_config(adjust: impl FnOnce(&mut ApiClientConfig)) -> Self {
        let server = MockServer::start().await;
        let ports = Arc::new(RecordingPorts::default());
        let store: Arc<dyn SessionStore> = Arc::new(MemorySessionStore::new());

        let mut config = ApiClientConfig { base_url: format!("{}/ui", server.uri()), ..Default::default() };
        adjust(&mut config);

        let client = ApiClient::builder()
            .config(config)
            .auth(Arc::new(SessionTokenProvider::new(store.clone())))
            .interceptor(ErrorInterceptor::new(ports.clone(), ports.clone()))
            .build()
            .expect("api client should build");
        let client = Arc::new(client);

        Self {
            login: LoginService::new(client.clone(), store.clone()),
            private: PrivateService::new(client.clone(), store.clone()),
            event_logs: EventLogsService::new(client),
            server,
            ports,
            store,
        }
    }

    /// Store a token pair as if `login` had succeeded.
    pub fn seed_token(&self, access_token: &str) {
        let token = serde_json::json!({ "access_token": access_token, "refresh_token": "refresh" });
        self.store
            .set("CONVOY_AUTH_TOKEN", &token.to_string())
            .expect("token should be stored");
    }
}

pub fn paged(items: serde_json::Value) -> serde_json::Value {
    serde_json::json!({
        "status": true,
        "message": "fetched",
        "data": {
            "content": items,
            "pagination": { "total": 1, "page": 1, "perPage": 20, "prev": 0, "next": 0, "totalPage": 1 }
        }
    })
}

//! End-to-end command tests against a mock Convoy backend

use std::sync::Arc;

use convoy_core::{Notification, Notifier, SessionStore};
use convoy_dash::{commands, AppContext, Command};
use convoy_dash::cli::EventsArgs;
use convoy_domain::Config;
use convoy_infra::FileSessionStore;
use parking_lot::Mutex;
use tempfile::TempDir;
use wiremock::matchers::{header, method, path, query_param};
use wiremock::{Mock, MockServer, ResponseTemplate};

#[derive(Default)]
struct CollectingNotifier(Mutex<Vec<String>>);

impl Notifier for CollectingNotifier {
    fn show_notification(&self, notification: &Notification) {
        self.0.lock().push(notification.message.clone());
    }
}

struct TestApp {
    ctx: AppContext,
    notifier: Arc<CollectingNotifier>,
    _dir: TempDir,
}

fn test_app(server: &MockServer) -> TestApp {
    let dir = TempDir::new().expect("temp dir");
    let mut config = Config::default();
    config.api.base_url = format!("{}/ui", server.uri());
    config.session.path = dir.path().join("session.json").display().to_string();

    let store: Arc<dyn SessionStore> =
        Arc::new(FileSessionStore::open(&config.session.path).expect("session store"));
    let notifier = Arc::new(CollectingNotifier::default());
    let ctx = AppContext::with_parts(config, store, notifier.clone()).expect("context");

    TestApp { ctx, notifier, _dir: dir }
}

fn paged(items: serde_json::Value) -> serde_json::Value {
    serde_json::json!({
        "status": true,
        "message": "fetched",
        "data": {
            "content": items,
            "pagination": { "total": 1, "page": 1, "perPage": 20, "prev": 0, "next": 0, "totalPage": 1 }
        }
    })
}

#[tokio::test]
async fn login_select_scope_and_list_events() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path("/ui/login"))
        .respond_with(ResponseTemplate::new(200).set_body_json(serde_json::json!({
            "status": true,
            "message": "Login successful",
            "data": {
                "uid": "user-1",
                "first_name": "Ada",
                "last_name": "Lovelace",
                "email": "ada@example.com",
                "token": { "access_token": "acc", "refresh_token": "ref" }
            }
        })))
        .mount(&server)
        .await;
    Mock::given(method("GET"))
        .and(path("/ui/organisations"))
        .and(header("Authorization", "Bearer acc"))
        .respond_with(ResponseTemplate::new(200).set_body_json(paged(serde_json::json!([
            { "uid": "org-1", "name": "Acme" }
        ]))))
        .mount(&server)
        .await;
    Mock::given(method("GET"))
        .and(path("/ui/organisations/org-1/groups/proj-1"))
        .respond_with(ResponseTemplate::new(200).set_body_json(serde_json::json!({
            "status": true,
            "message": "ok",
            "data": { "uid": "proj-1", "name": "Payments", "type": "outgoing" }
        })))
        .mount(&server)
        .await;
    Mock::given(method("GET"))
        .and(path("/ui/organisations/org-1/groups/proj-1/events"))
        .and(query_param("page", "2"))
        .and(query_param("startDate", "2024-01-01"))
        .respond_with(ResponseTemplate::new(200).set_body_json(paged(serde_json::json!([
            { "uid": "ev-1", "event_type": "charge.succeeded" }
        ]))))
        .expect(1)
        .mount(&server)
        .await;

    let app = test_app(&server);
    let ctx = &app.ctx;

    let login = commands::execute(
        ctx,
        Command::Login { email: "ada@example.com".into(), password: "secret".into() },
    )
    .await
    .expect("login");
    assert_eq!(login["data"]["uid"], "user-1");
    assert!(login["data"].get("token").is_none());

    commands::execute(ctx, Command::UseOrg { uid: "org-1".into() }).await.expect("use-org");
    let project =
        commands::execute(ctx, Command::UseProject { uid: "proj-1".into() }).await.expect("use-project");
    assert_eq!(project["project"]["name"], "Payments");

    let events = commands::execute(
        ctx,
        Command::Events(EventsArgs {
            start: "2024-01-01".into(),
            end: "2024-01-31".into(),
            page: 2,
            endpoint: String::new(),
            source: None,
            query: None,
            token: None,
        }),
    )
    .await
    .expect("events");
    assert_eq!(events["data"]["content"][0]["uid"], "ev-1");
    assert!(app.notifier.0.lock().is_empty());
    assert!(!ctx.login_required());
}

#[tokio::test]
async fn unknown_organisation_is_a_local_error() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/ui/organisations"))
        .respond_with(ResponseTemplate::new(200).set_body_json(paged(serde_json::json!([]))))
        .mount(&server)
        .await;

    let app = test_app(&server);
    let err = commands::execute(&app.ctx, Command::UseOrg { uid: "org-x".into() })
        .await
        .expect_err("missing organisation");

    assert!(err.to_string().contains("org-x"));
    assert!(app.notifier.0.lock().is_empty());
}

#[tokio::test]
async fn expired_session_sets_login_required() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .respond_with(ResponseTemplate::new(401).set_body_json(serde_json::json!({
            "status": false,
            "message": "Signature has expired"
        })))
        .mount(&server)
        .await;

    let app = test_app(&server);
    let result = commands::execute(&app.ctx, Command::Organisations { user: None }).await;

    assert!(result.is_err());
    assert!(app.ctx.login_required());
    assert_eq!(*app.notifier.0.lock(), vec!["Signature has expired".to_string()]);
}

#[tokio::test]
async fn project_commands_need_a_selection() {
    let server = MockServer::start().await;
    let app = test_app(&server);

    let result = commands::execute(&app.ctx, Command::Project).await;

    assert!(result.is_err());
    assert!(server.received_requests().await.unwrap().is_empty());
}

#[tokio::test]
async fn unreadable_session_token_is_shown_once() {
    let server = MockServer::start().await;
    let app = test_app(&server);
    app.ctx.store.set("CONVOY_AUTH_TOKEN", "not json").expect("seed token");

    let result = commands::execute(&app.ctx, Command::Organisations { user: None }).await;

    assert!(result.is_err());
    assert_eq!(app.notifier.0.lock().len(), 1);
    assert!(app.ctx.failure_shown());
    assert!(!app.ctx.login_required());
    assert!(server.received_requests().await.unwrap().is_empty());
}

#[tokio::test]
async fn local_errors_are_not_marked_as_shown() {
    let server = MockServer::start().await;
    let app = test_app(&server);

    let result = commands::execute(&app.ctx, Command::Project).await;

    assert!(result.is_err());
    assert!(!app.ctx.failure_shown());
}

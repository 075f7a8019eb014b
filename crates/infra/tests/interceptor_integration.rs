//! Interceptor behavior observed through real service calls

mod support;

use std::time::Duration;

use convoy_domain::{AppsQuery, OrganisationsQuery, ScopeContext};
use convoy_infra::ApiError;
use support::Harness;
use wiremock::matchers::method;
use wiremock::{Mock, ResponseTemplate};

#[tokio::test]
async fn unauthorized_redirects_once_and_returns_error() {
    let harness = Harness::start().await;
    Mock::given(method("GET"))
        .respond_with(ResponseTemplate::new(401).set_body_json(serde_json::json!({
            "status": false,
            "message": "Invalid token"
        })))
        .expect(1)
        .mount(&harness.server)
        .await;

    let result = harness.login.get_organizations(&OrganisationsQuery::default()).await;

    assert!(matches!(result, Err(ApiError::Auth(_))));
    let navigations = harness.ports.navigations();
    assert_eq!(navigations.len(), 1);
    assert_eq!(navigations[0].route, "/login");
    assert!(navigations[0].replace_history);
    assert_eq!(harness.ports.notifications(), vec!["Invalid token".to_string()]);
}

#[tokio::test]
async fn expired_signature_redirects_without_401() {
    let harness = Harness::start().await;
    Mock::given(method("GET"))
        .respond_with(ResponseTemplate::new(400).set_body_json(serde_json::json!({
            "status": false,
            "message": "Signature has expired"
        })))
        .mount(&harness.server)
        .await;

    let result = harness.private.get_organisations().await;

    assert!(matches!(result, Err(ApiError::Client(_))));
    assert_eq!(harness.ports.navigations().len(), 1);
    assert_eq!(harness.ports.notifications(), vec!["Signature has expired".to_string()]);
}

#[tokio::test]
async fn numeric_status_in_body_drives_redirect() {
    let harness = Harness::start().await;
    Mock::given(method("GET"))
        .respond_with(ResponseTemplate::new(400).set_body_json(serde_json::json!({
            "status": 401,
            "message": "session revoked"
        })))
        .mount(&harness.server)
        .await;

    let scope = ScopeContext::new("org-1", "proj-1");
    let result = harness.private.get_apps(&scope, &AppsQuery::default()).await;

    assert!(result.is_err());
    assert_eq!(harness.ports.navigations().len(), 1);
}

#[tokio::test]
async fn validation_error_shows_first_message_without_redirect() {
    let harness = Harness::start().await;
    Mock::given(method("GET"))
        .respond_with(ResponseTemplate::new(422).set_body_json(serde_json::json!({
            "status": false,
            "message": "validation failed",
            "errors": [{ "message": "A" }, { "message": "B" }]
        })))
        .mount(&harness.server)
        .await;

    let result = harness.private.get_organisations().await;

    assert!(matches!(result, Err(ApiError::Client(_))));
    assert!(harness.ports.navigations().is_empty());
    assert_eq!(harness.ports.notifications(), vec!["A".to_string()]);
}

#[tokio::test]
async fn timeout_shows_network_notice() {
    let harness = Harness::with_config(|config| config.timeout = Duration::from_millis(50)).await;
    Mock::given(method("GET"))
        .respond_with(
            ResponseTemplate::new(200)
                .set_delay(Duration::from_millis(500))
                .set_body_json(serde_json::json!({ "status": true, "message": "late" })),
        )
        .mount(&harness.server)
        .await;

    let result = harness.private.get_organisations().await;

    assert!(matches!(result, Err(ApiError::Timeout(_))));
    assert!(harness.ports.navigations().is_empty());
    assert_eq!(
        harness.ports.notifications(),
        vec!["Request timeout, please check your network and try again".to_string()]
    );
}

#[tokio::test]
async fn success_has_no_side_effects() {
    let harness = Harness::start().await;
    Mock::given(method("GET"))
        .respond_with(ResponseTemplate::new(200).set_body_json(support::paged(serde_json::json!([]))))
        .mount(&harness.server)
        .await;

    let response = harness.private.get_organisations().await.expect("listing should succeed");

    assert!(response.status);
    assert!(harness.ports.navigations().is_empty());
    assert!(harness.ports.notifications().is_empty());
}

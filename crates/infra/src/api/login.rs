//! Login, logout and organisation listing

use std::sync::Arc;

use convoy_core::paths::{organizations_path, LOGIN_PATH, LOGOUT_PATH};
use convoy_core::SessionStore;
use convoy_domain::{
    HttpResponse, LoginRequest, LoginResponse, Organisation, OrganisationsQuery, Paged,
};
use tracing::{debug, info, instrument};

use super::auth::{clear_token, store_token};
use super::client::{ApiClient, Credentials};
use super::errors::ApiError;

/// Authentication endpoints
pub struct LoginService {
    client: Arc<ApiClient>,
    store: Arc<dyn SessionStore>,
}

impl LoginService {
    pub fn new(client: Arc<ApiClient>, store: Arc<dyn SessionStore>) -> Self {
        Self { client, store }
    }

    /// Exchange credentials for a token pair and persist it.
    ///
    /// The request is sent without an `Authorization` header.
    ///
    /// # Errors
    ///
    /// Returns error if the credentials are rejected or the token cannot be
    /// stored
    #[instrument(skip(self, request), fields(email = %request.email))]
    pub async fn login(
        &self,
        request: &LoginRequest,
    ) -> Result<HttpResponse<LoginResponse>, ApiError> {
        let response: HttpResponse<LoginResponse> =
            self.client.post(LOGIN_PATH, Some(request), Credentials::Anonymous).await?;

        if let Some(user) = &response.data {
            store_token(self.store.as_ref(), &user.token)?;
            info!(uid = %user.uid, "logged in");
        }

        Ok(response)
    }

    /// End the session server-side, then forget the local token.
    #[instrument(skip(self))]
    pub async fn logout(&self) -> Result<HttpResponse<serde_json::Value>, ApiError> {
        let response = self.client.delete(LOGOUT_PATH, Credentials::Session).await?;
        clear_token(self.store.as_ref())?;
        debug!("logged out");
        Ok(response)
    }

    /// Organisations visible to the user.
    #[instrument(skip(self))]
    pub async fn get_organizations(
        &self,
        query: &OrganisationsQuery,
    ) -> Result<HttpResponse<Paged<Organisation>>, ApiError> {
        self.client.get(&organizations_path(query), Credentials::Session).await
    }
}

#[cfg(test)]
mod tests {
    use convoy_core::{ErrorInterceptor, LoginRedirect, Navigation, Notification, Notifier};
    use convoy_domain::constants::SESSION_AUTH_TOKEN_KEY;
    use wiremock::matchers::{body_json, header, method, path, query_param};
    use wiremock::{Mock, MockServer, ResponseTemplate};

    use super::*;
    use crate::api::auth::SessionTokenProvider;
    use crate::api::client::ApiClientConfig;
    use crate::session::MemorySessionStore;

    struct Silent;

    impl LoginRedirect for Silent {
        fn redirect_to_login(&self, _navigation: &Navigation) {}
    }

    impl Notifier for Silent {
        fn show_notification(&self, _notification: &Notification) {}
    }

    fn service(server: &MockServer) -> (LoginService, Arc<dyn SessionStore>) {
        let store: Arc<dyn SessionStore> = Arc::new(MemorySessionStore::new());
        let client = ApiClient::new(
            ApiClientConfig { base_url: server.uri(), ..Default::default() },
            Arc::new(SessionTokenProvider::new(store.clone())),
            ErrorInterceptor::new(Arc::new(Silent), Arc::new(Silent)),
        )
        .unwrap();
        (LoginService::new(Arc::new(client), store.clone()), store)
    }

    #[tokio::test]
    async fn test_login_stores_token_and_authenticates_next_call() {
        let server = MockServer::start().await;
        Mock::given(method("POST"))
            .and(path("/login"))
            .and(body_json(serde_json::json!({ "email": "a@b.c", "password": "pw" })))
            .respond_with(ResponseTemplate::new(200).set_body_json(serde_json::json!({
                "status": true,
                "message": "Login successful",
                "data": {
                    "uid": "u-1",
                    "first_name": "Ada",
                    "last_name": "L",
                    "email": "a@b.c",
                    "token": { "access_token": "acc", "refresh_token": "ref" }
                }
            })))
            .expect(1)
            .mount(&server)
            .await;
        Mock::given(method("GET"))
            .and(path("/organizations"))
            .and(query_param("userId", "u-1"))
            .and(header("Authorization", "Bearer acc"))
            .respond_with(ResponseTemplate::new(200).set_body_json(serde_json::json!({
                "status": true,
                "message": "ok",
                "data": {
                    "content": [{ "uid": "org-1", "name": "Acme" }],
                    "pagination": { "total": 1, "page": 1, "perPage": 20, "prev": 0, "next": 0, "totalPage": 1 }
                }
            })))
            .expect(1)
            .mount(&server)
            .await;

        let (service, store) = service(&server);
        let response = service.login(&LoginRequest::new("a@b.c", "pw")).await.unwrap();
        assert_eq!(response.data.unwrap().uid, "u-1");
        assert!(store.get(SESSION_AUTH_TOKEN_KEY).unwrap().is_some());

        let query = OrganisationsQuery { user_id: Some("userId=u-1".into()) };
        let orgs = service.get_organizations(&query).await.unwrap().into_data().unwrap();
        assert_eq!(orgs.content[0].name, "Acme");
    }

    #[tokio::test]
    async fn test_logout_clears_token() {
        let server = MockServer::start().await;
        Mock::given(method("DELETE"))
            .and(path("/logout"))
            .respond_with(ResponseTemplate::new(200).set_body_json(serde_json::json!({
                "status": true, "message": "Logout successful"
            })))
            .expect(1)
            .mount(&server)
            .await;

        let (service, store) = service(&server);
        store.set(SESSION_AUTH_TOKEN_KEY, r#"{"access_token":"a","refresh_token":"r"}"#).unwrap();

        service.logout().await.unwrap();
        assert!(store.get(SESSION_AUTH_TOKEN_KEY).unwrap().is_none());
    }

    #[tokio::test]
    async fn test_failed_logout_keeps_token() {
        let server = MockServer::start().await;
        Mock::given(method("DELETE"))
            .respond_with(ResponseTemplate::new(500))
            .mount(&server)
            .await;

        let (service, store) = service(&server);
        store.set(SESSION_AUTH_TOKEN_KEY, r#"{"access_token":"a","refresh_token":"r"}"#).unwrap();

        assert!(matches!(service.logout().await, Err(ApiError::Server(_))));
        assert!(store.get(SESSION_AUTH_TOKEN_KEY).unwrap().is_some());
    }
}

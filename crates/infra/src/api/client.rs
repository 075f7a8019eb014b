//! API client with bearer auth and error interception
//!
//! Every call goes through the [`ErrorInterceptor`]: successes pass through
//! untouched, failures trigger the redirect/notify side effects and are then
//! returned to the caller unchanged.

use std::sync::Arc;
use std::time::Duration;

use convoy_core::ErrorInterceptor;
use convoy_domain::{ApiConfig, ConvoyError, HttpFailure, HttpResponse};
use reqwest::{Method, StatusCode};
use serde::de::DeserializeOwned;
use serde::Serialize;
use tracing::{debug, info, instrument, warn};

use super::auth::AccessTokenProvider;
use super::errors::ApiError;
use crate::http::HttpClient;

/// Configuration for API client
#[derive(Debug, Clone)]
pub struct ApiClientConfig {
    /// Base URL for API (e.g., "https://convoy.example.com/ui")
    pub base_url: String,
    /// Timeout for API requests
    pub timeout: Duration,
    pub user_agent: String,
    /// Total attempts per request; 1 disables retries
    pub max_attempts: usize,
}

impl Default for ApiClientConfig {
    fn default() -> Self {
        Self::from(&ApiConfig::default())
    }
}

impl From<&ApiConfig> for ApiClientConfig {
    fn from(config: &ApiConfig) -> Self {
        Self {
            base_url: config.base_url.clone(),
            timeout: Duration::from_secs(config.timeout_secs),
            user_agent: config.user_agent.clone(),
            max_attempts: config.max_attempts,
        }
    }
}

/// Where the bearer token for a call comes from
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Credentials<'a> {
    /// Ask the configured [`AccessTokenProvider`]
    Session,
    /// Send no `Authorization` header
    Anonymous,
    /// Use this token instead of the session's
    Bearer(&'a str),
}

impl<'a> Credentials<'a> {
    /// Per-call token override, falling back to the session token.
    pub fn with_override(token: Option<&'a str>) -> Self {
        match token {
            Some(token) if !token.is_empty() => Self::Bearer(token),
            _ => Self::Session,
        }
    }
}

/// API client shared by the domain services
pub struct ApiClient {
    http_client: Arc<HttpClient>,
    auth: Arc<dyn AccessTokenProvider>,
    interceptor: ErrorInterceptor,
    config: ApiClientConfig,
}

impl ApiClient {
    /// Create a new API client
    ///
    /// # Errors
    ///
    /// Returns error if the underlying HttpClient cannot be created
    pub fn new(
        config: ApiClientConfig,
        auth: Arc<dyn AccessTokenProvider>,
        interceptor: ErrorInterceptor,
    ) -> Result<Self, ApiError> {
        let http_client = HttpClient::builder()
            .timeout(config.timeout)
            .user_agent(config.user_agent.clone())
            .max_attempts(config.max_attempts)
            .build()
            .map_err(|e| ApiError::Config(format!("Failed to build HttpClient: {}", e)))?;

        Ok(Self { http_client: Arc::new(http_client), auth, interceptor, config })
    }

    /// Create a builder for fluent configuration
    pub fn builder() -> ApiClientBuilder {
        ApiClientBuilder::default()
    }

    pub fn base_url(&self) -> &str {
        &self.config.base_url
    }

    /// Execute a GET request
    pub async fn get<T: DeserializeOwned>(
        &self,
        path: &str,
        credentials: Credentials<'_>,
    ) -> Result<HttpResponse<T>, ApiError> {
        self.request(Method::GET, path, None, credentials).await
    }

    /// Execute a POST request; `None` sends an empty JSON body (`null`)
    ///
    /// # Errors
    ///
    /// Returns error if the body cannot be serialized or the request fails
    pub async fn post<B, T>(
        &self,
        path: &str,
        body: Option<&B>,
        credentials: Credentials<'_>,
    ) -> Result<HttpResponse<T>, ApiError>
    where
        B: Serialize + ?Sized,
        T: DeserializeOwned,
    {
        let body = match body {
            Some(body) => serde_json::to_value(body)
                .map_err(|e| ApiError::Local(ConvoyError::InvalidInput(format!(
                    "Failed to serialize body: {}",
                    e
                ))))?,
            None => serde_json::Value::Null,
        };
        self.request(Method::POST, path, Some(body), credentials).await
    }

    /// Execute a DELETE request
    pub async fn delete<T: DeserializeOwned>(
        &self,
        path: &str,
        credentials: Credentials<'_>,
    ) -> Result<HttpResponse<T>, ApiError> {
        self.request(Method::DELETE, path, None, credentials).await
    }

    async fn request<T: DeserializeOwned>(
        &self,
        method: Method,
        path: &str,
        body: Option<serde_json::Value>,
        credentials: Credentials<'_>,
    ) -> Result<HttpResponse<T>, ApiError> {
        let result = self.execute(method, path, body, credentials).await;
        self.interceptor.handle(result)
    }

    #[instrument(skip_all, fields(method = %method, path = %path))]
    async fn execute<T: DeserializeOwned>(
        &self,
        method: Method,
        path: &str,
        body: Option<serde_json::Value>,
        credentials: Credentials<'_>,
    ) -> Result<HttpResponse<T>, ApiError> {
        let url = join_url(&self.config.base_url, path);
        debug!(url = %url, "dispatching request");

        let token = match credentials {
            Credentials::Session => self.auth.access_token().await?,
            Credentials::Anonymous => None,
            Credentials::Bearer(token) => Some(token.to_string()),
        };

        let mut request = self.http_client.request(method.clone(), &url);
        if let Some(token) = token {
            request = request.bearer_auth(token);
        }
        if let Some(body) = body {
            request = request.json(&body);
        }

        let timeout = self.config.timeout;
        let response = match tokio::time::timeout(timeout, self.http_client.send(request)).await {
            Ok(Ok(resp)) => resp,
            Ok(Err(err)) => return Err(Self::map_convoy_error(err, timeout)),
            Err(_) => return Err(ApiError::Timeout(timeout)),
        };

        let status = response.status();
        if !status.is_success() {
            let body = failure_body(&url, response.text().await);
            return Err(ApiError::from_failure(HttpFailure::new(status.as_u16(), url, body)));
        }

        // 204 and 205 carry no body
        if status == StatusCode::NO_CONTENT || status == StatusCode::RESET_CONTENT {
            info!(%method, path = %path, "request successful (no content)");
            return Ok(HttpResponse::empty());
        }

        let bytes = response
            .bytes()
            .await
            .map_err(|e| Self::map_convoy_error(crate::errors::InfraError::from(e).into(), timeout))?;
        if bytes.is_empty() {
            return Ok(HttpResponse::empty());
        }

        let envelope = serde_json::from_slice(&bytes)
            .map_err(|e| ApiError::Decode(format!("{} returned invalid JSON: {}", url, e)))?;

        info!(%method, path = %path, "request successful");
        Ok(envelope)
    }

    fn map_convoy_error(err: ConvoyError, timeout: Duration) -> ApiError {
        match err {
            ConvoyError::Timeout(_) => ApiError::Timeout(timeout),
            other => ApiError::from(other),
        }
    }
}

/// Body of a failed response; an unreadable body is described instead of dropped.
fn failure_body<E: std::fmt::Display>(url: &str, body: Result<String, E>) -> String {
    body.unwrap_or_else(|err| {
        warn!(url = %url, error = %err, "failed to read error response body");
        format!("unreadable response body: {err}")
    })
}

/// Join base URL and relative path; the path's leading slash is optional.
fn join_url(base: &str, path: &str) -> String {
    format!("{}/{}", base.trim_end_matches('/'), path.trim_start_matches('/'))
}

/// Builder for API client
#[derive(Default)]
pub struct ApiClientBuilder {
    config: Option<ApiClientConfig>,
    auth: Option<Arc<dyn AccessTokenProvider>>,
    interceptor: Option<ErrorInterceptor>,
}

impl ApiClientBuilder {
    /// Set the API configuration
    pub fn config(mut self, config: ApiClientConfig) -> Self {
        self.config = Some(config);
        self
    }

    /// Set the authentication provider
    pub fn auth(mut self, auth: Arc<dyn AccessTokenProvider>) -> Self {
        self.auth = Some(auth);
        self
    }

    /// Set the interceptor applied to every call
    pub fn interceptor(mut self, interceptor: ErrorInterceptor) -> Self {
        self.interceptor = Some(interceptor);
        self
    }

    /// Build the API client
    ///
    /// # Errors
    ///
    /// Returns error if required fields are missing or client creation fails
    pub fn build(self) -> Result<ApiClient, ApiError> {
        let config = self.config.unwrap_or_default();
        let auth =
            self.auth.ok_or_else(|| ApiError::Config("Auth provider not set".to_string()))?;
        let interceptor = self
            .interceptor
            .ok_or_else(|| ApiError::Config("Interceptor not set".to_string()))?;

        ApiClient::new(config, auth, interceptor)
    }
}

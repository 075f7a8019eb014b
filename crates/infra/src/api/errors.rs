//! API-specific error types
//!
//! Classifies failed API calls by status and provides the failure view
//! consumed by the error interceptor.

use std::time::Duration;

use convoy_core::{InterceptableError, InterceptedFailure};
use convoy_domain::constants::TIMEOUT_TRANSPORT_MESSAGE;
use convoy_domain::{ConvoyError, HttpFailure};
use thiserror::Error;

/// API operation errors
#[derive(Debug, Error)]
pub enum ApiError {
    #[error("Authentication failed: {0}")]
    Auth(Box<HttpFailure>),

    #[error("Rate limit exceeded: {0}")]
    RateLimit(Box<HttpFailure>),

    #[error("Server error: {0}")]
    Server(Box<HttpFailure>),

    #[error("Client error: {0}")]
    Client(Box<HttpFailure>),

    #[error("Network error: {0}")]
    Network(String),

    #[error("Configuration error: {0}")]
    Config(String),

    #[error("Timeout after {0:?}")]
    Timeout(Duration),

    #[error("Failed to decode response: {0}")]
    Decode(String),

    /// Missing scope, unreadable session, or other local failures.
    #[error(transparent)]
    Local(ConvoyError),
}

impl ApiError {
    /// Classify a non-2xx response by status code.
    pub fn from_failure(failure: HttpFailure) -> Self {
        let failure = Box::new(failure);
        match failure.status {
            401 | 403 => Self::Auth(failure),
            429 => Self::RateLimit(failure),
            500..=599 => Self::Server(failure),
            _ => Self::Client(failure),
        }
    }

    /// The HTTP failure behind this error, if the server answered.
    pub fn failure(&self) -> Option<&HttpFailure> {
        match self {
            Self::Auth(f) | Self::RateLimit(f) | Self::Server(f) | Self::Client(f) => {
                Some(f.as_ref())
            }
            _ => None,
        }
    }
}

impl From<ConvoyError> for ApiError {
    fn from(err: ConvoyError) -> Self {
        match err {
            ConvoyError::Config(message) => Self::Config(message),
            ConvoyError::Network(message) => Self::Network(message),
            other => Self::Local(other),
        }
    }
}

impl InterceptableError for ApiError {
    fn to_intercepted(&self) -> InterceptedFailure {
        match self {
            Self::Timeout(_) => InterceptedFailure {
                nested_status: None,
                body: None,
                transport_message: TIMEOUT_TRANSPORT_MESSAGE.to_string(),
            },
            other => match other.failure() {
                Some(failure) => InterceptedFailure {
                    nested_status: failure
                        .body
                        .as_ref()
                        .and_then(convoy_domain::ErrorBody::status_code)
                        .or(Some(failure.status)),
                    body: failure.body.clone(),
                    transport_message: other.to_string(),
                },
                None => InterceptedFailure {
                    nested_status: None,
                    body: None,
                    transport_message: other.to_string(),
                },
            },
        }
    }
}

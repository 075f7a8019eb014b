//! Response envelope and error body types
//!
//! Every Convoy response is wrapped in `{status, message, data}`. Failed
//! requests carry the same envelope without `data`, optionally with a list of
//! validation errors.

use std::fmt;

use serde::{Deserialize, Deserializer, Serialize};

use crate::errors::{ConvoyError, Result};

/// Generic response envelope returned by every call
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct HttpResponse<T> {
    #[serde(default)]
    pub status: bool,
    #[serde(default)]
    pub message: String,
    pub data: Option<T>,
    #[serde(default, deserialize_with = "lenient_errors", skip_serializing_if = "Vec::is_empty")]
    pub errors: Vec<FieldError>,
}

impl<T> HttpResponse<T> {
    /// Envelope for bodiless (204/205) responses.
    pub fn empty() -> Self {
        Self { status: true, message: String::new(), data: None, errors: Vec::new() }
    }

    /// Take the payload, failing if the server sent none.
    pub fn into_data(self) -> Result<T> {
        self.data.ok_or_else(|| {
            ConvoyError::Internal(format!("response carried no data: {}", self.message))
        })
    }
}

/// A single validation error entry
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct FieldError {
    #[serde(default)]
    pub message: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub field: Option<String>,
}

/// `status` in an error body: Convoy sends a boolean, some gateways a code.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum StatusField {
    Code(u16),
    Flag(bool),
}

impl StatusField {
    /// Numeric status, if this is one.
    pub fn code(self) -> Option<u16> {
        match self {
            Self::Code(code) => Some(code),
            Self::Flag(_) => None,
        }
    }
}

/// Body of a failed response
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ErrorBody {
    #[serde(default)]
    pub status: Option<StatusField>,
    #[serde(default)]
    pub message: Option<String>,
    #[serde(default, deserialize_with = "lenient_errors")]
    pub errors: Vec<FieldError>,
}

impl ErrorBody {
    /// Parse a raw response body. Non-JSON bodies yield `None`.
    pub fn parse(raw: &str) -> Option<Self> {
        serde_json::from_str(raw).ok()
    }

    /// Numeric status carried inside the body.
    pub fn status_code(&self) -> Option<u16> {
        self.status.and_then(StatusField::code)
    }

    /// Message of the first validation error, if the list is non-empty.
    pub fn first_error_message(&self) -> Option<&str> {
        self.errors.first().map(|err| err.message.as_str())
    }
}

/// `errors` is only honoured when it is an array; any other shape is ignored.
fn lenient_errors<'de, D>(deserializer: D) -> std::result::Result<Vec<FieldError>, D::Error>
where
    D: Deserializer<'de>,
{
    let value = Option::<serde_json::Value>::deserialize(deserializer)?;
    let Some(serde_json::Value::Array(items)) = value else {
        return Ok(Vec::new());
    };

    Ok(items
        .into_iter()
        .map(|item| match item {
            serde_json::Value::String(message) => FieldError { message, field: None },
            other => serde_json::from_value(other)
                .unwrap_or(FieldError { message: String::new(), field: None }),
        })
        .collect())
}

/// A non-2xx response as seen by the client
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct HttpFailure {
    pub status: u16,
    pub url: String,
    pub body: Option<ErrorBody>,
    pub raw_body: String,
}

impl HttpFailure {
    pub fn new(status: u16, url: impl Into<String>, raw_body: impl Into<String>) -> Self {
        let raw_body = raw_body.into();
        let body = ErrorBody::parse(&raw_body);
        Self { status, url: url.into(), body, raw_body }
    }
}

impl fmt::Display for HttpFailure {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let message = self.body.as_ref().and_then(|body| body.message.as_deref());
        match message {
            Some(message) => write!(f, "{} returned status {}: {}", self.url, self.status, message),
            None if self.raw_body.is_empty() => {
                write!(f, "{} returned status {}", self.url, self.status)
            }
            None => write!(f, "{} returned status {}: {}", self.url, self.status, self.raw_body),
        }
    }
}

/// Paginated listing payload
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Paged<T> {
    #[serde(default = "Vec::new")]
    pub content: Vec<T>,
    #[serde(default)]
    pub pagination: Pagination,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct Pagination {
    pub total: u64,
    pub page: u32,
    pub per_page: u32,
    pub prev: u32,
    pub next: u32,
    pub total_page: u32,
}

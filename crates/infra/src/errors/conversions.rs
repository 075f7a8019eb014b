//! Conversions from external infrastructure errors into domain errors.

use std::io::Error as IoError;

use convoy_domain::constants::TIMEOUT_TRANSPORT_MESSAGE;
use convoy_domain::ConvoyError;
use reqwest::Error as HttpError;
use serde_json::Error as JsonError;

/// Error newtype that keeps conversions on the infrastructure side and can be
/// converted back into the domain error.
#[derive(Debug)]
pub struct InfraError(pub ConvoyError);

impl From<InfraError> for ConvoyError {
    fn from(value: InfraError) -> Self {
        value.0
    }
}

impl From<ConvoyError> for InfraError {
    fn from(value: ConvoyError) -> Self {
        InfraError(value)
    }
}

/// Extension trait to make the conversion logic explicit in tests and within
/// this module.
trait IntoConvoyError {
    fn into_convoy(self) -> ConvoyError;
}

/* -------------------------------------------------------------------------- */
/* reqwest::Error → ConvoyError */
/* -------------------------------------------------------------------------- */

impl IntoConvoyError for HttpError {
    fn into_convoy(self) -> ConvoyError {
        if self.is_timeout() {
            return ConvoyError::Timeout(TIMEOUT_TRANSPORT_MESSAGE.into());
        }

        #[cfg(not(target_arch = "wasm32"))]
        if self.is_connect() {
            return ConvoyError::Network(format!("HTTP connection failure: {self}"));
        }

        if self.is_builder() {
            return ConvoyError::InvalidInput(format!("invalid HTTP request: {self}"));
        }

        if self.is_decode() {
            return ConvoyError::Internal(format!("failed to decode HTTP response: {self}"));
        }

        ConvoyError::Network(self.to_string())
    }
}

impl From<HttpError> for InfraError {
    fn from(value: HttpError) -> Self {
        InfraError(value.into_convoy())
    }
}

/* -------------------------------------------------------------------------- */
/* std::io::Error → ConvoyError */
/* -------------------------------------------------------------------------- */

impl IntoConvoyError for IoError {
    fn into_convoy(self) -> ConvoyError {
        ConvoyError::Session(format!("session file I/O failed: {self}"))
    }
}

impl From<IoError> for InfraError {
    fn from(value: IoError) -> Self {
        InfraError(value.into_convoy())
    }
}

/* -------------------------------------------------------------------------- */
/* serde_json::Error → ConvoyError */
/* -------------------------------------------------------------------------- */

impl IntoConvoyError for JsonError {
    fn into_convoy(self) -> ConvoyError {
        ConvoyError::Session(format!("session file is not valid JSON: {self}"))
    }
}

impl From<JsonError> for InfraError {
    fn from(value: JsonError) -> Self {
        InfraError(value.into_convoy())
    }
}

/* -------------------------------------------------------------------------- */
/* Tests */
/* -------------------------------------------------------------------------- */

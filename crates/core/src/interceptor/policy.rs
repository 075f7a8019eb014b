//! Interception policy and the service that applies it

use std::sync::Arc;

use convoy_domain::constants::{
    SIGNATURE_EXPIRED_MESSAGE, TIMEOUT_NOTICE, TIMEOUT_TRANSPORT_MESSAGE, UNAUTHORIZED_STATUS,
};
use convoy_domain::ErrorBody;
use tracing::{debug, warn};

use super::ports::{LoginRedirect, Navigation, Notification, Notifier};

/// What the interceptor sees of a failed call
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct InterceptedFailure {
    /// Status carried in the error body, else the HTTP status. `None` for
    /// transport failures.
    pub nested_status: Option<u16>,
    pub body: Option<ErrorBody>,
    /// Message of the underlying error (e.g. `"Timeout has occurred"`).
    pub transport_message: String,
}

/// Errors that can be presented to the interceptor
pub trait InterceptableError {
    fn to_intercepted(&self) -> InterceptedFailure;
}

/// Result of handling one failure
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct InterceptionOutcome {
    pub redirected: bool,
    pub message: String,
}

/// Whether the failure must send the user back to the login view.
pub fn requires_login(failure: &InterceptedFailure) -> bool {
    if failure.nested_status == Some(UNAUTHORIZED_STATUS) {
        return true;
    }
    failure
        .body
        .as_ref()
        .and_then(|body| body.message.as_deref())
        .is_some_and(|message| message == SIGNATURE_EXPIRED_MESSAGE)
}

/// User-facing message for a failure, if one can be derived.
///
/// The first validation error wins over the top-level message; a transport
/// timeout overrides both.
pub fn display_message(failure: &InterceptedFailure) -> Option<String> {
    if failure.transport_message == TIMEOUT_TRANSPORT_MESSAGE {
        return Some(TIMEOUT_NOTICE.to_string());
    }

    let body = failure.body.as_ref()?;
    match body.first_error_message() {
        Some(first) => Some(first.to_string()),
        None => body.message.clone(),
    }
}

/// Applies the interception policy through the injected ports
#[derive(Clone)]
pub struct ErrorInterceptor {
    redirect: Arc<dyn LoginRedirect>,
    notifier: Arc<dyn Notifier>,
}

impl ErrorInterceptor {
    pub fn new(redirect: Arc<dyn LoginRedirect>, notifier: Arc<dyn Notifier>) -> Self {
        Self { redirect, notifier }
    }

    /// Pass successes through; run the failure policy on errors and hand the
    /// same error back.
    pub fn handle<T, E>(&self, result: Result<T, E>) -> Result<T, E>
    where
        E: InterceptableError,
    {
        if let Err(err) = &result {
            self.intercept(&err.to_intercepted());
        }
        result
    }

    /// Run the failure policy once.
    pub fn intercept(&self, failure: &InterceptedFailure) -> InterceptionOutcome {
        let redirected = requires_login(failure);
        if redirected {
            debug!(status = ?failure.nested_status, "redirecting to login");
            self.redirect.redirect_to_login(&Navigation::login());
        }

        let message =
            display_message(failure).unwrap_or_else(|| failure.transport_message.clone());
        warn!(status = ?failure.nested_status, %message, "request failed");
        self.notifier.show_notification(&Notification { message: message.clone() });

        InterceptionOutcome { redirected, message }
    }
}

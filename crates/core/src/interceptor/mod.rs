//! Cross-cutting handling of failed HTTP calls
//!
//! Every failure is inspected once: an auth failure triggers a login redirect
//! and a user-facing message is derived and handed to the notifier. The
//! original error always goes back to the caller.

pub mod policy;
pub mod ports;

pub use policy::{
    display_message, requires_login, ErrorInterceptor, InterceptableError, InterceptedFailure,
    InterceptionOutcome,
};
pub use ports::{LoginRedirect, Navigation, Notification, Notifier};

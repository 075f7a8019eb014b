//! # Convoy Core
//!
//! Pure client logic - no infrastructure dependencies.
//!
//! This crate contains:
//! - The error interception policy and its side-effect ports
//! - The session store port and scope resolution helpers
//! - URL and query construction for every dashboard endpoint
//!
//! ## Architecture Principles
//! - Only depends on `convoy-domain`
//! - No HTTP, filesystem, or terminal code
//! - All side effects via traits

pub mod interceptor;
pub mod paths;
pub mod session;

pub use interceptor::{
    ErrorInterceptor, InterceptableError, InterceptedFailure, InterceptionOutcome, LoginRedirect,
    Navigation, Notification, Notifier,
};
pub use paths::UrlLevel;
pub use session::SessionStore;

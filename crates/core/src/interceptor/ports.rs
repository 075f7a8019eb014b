//! Port interfaces for interceptor side effects
//!
//! These traits keep the interception policy free of any router or UI.

use convoy_domain::constants::LOGIN_ROUTE;

/// Navigation request issued on an authorization failure
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Navigation {
    pub route: String,
    /// Replace the current history entry so "back" cannot return to the
    /// authenticated view.
    pub replace_history: bool,
}

impl Navigation {
    pub fn login() -> Self {
        Self { route: LOGIN_ROUTE.to_string(), replace_history: true }
    }
}

/// Message shown to the user
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Notification {
    pub message: String,
}

/// Trait for redirecting the user to the login view
pub trait LoginRedirect: Send + Sync {
    fn redirect_to_login(&self, navigation: &Navigation);
}

/// Trait for displaying a notification to the user
pub trait Notifier: Send + Sync {
    fn show_notification(&self, notification: &Notification);
}

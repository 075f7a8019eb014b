//! Terminal implementations of the interceptor ports.
//!
//! The dashboard shows a toast and navigates to `/login`; on a terminal the
//! notification goes to stderr and the redirect becomes a "login required"
//! flag the binary turns into its exit status.

pub mod terminal;

pub use terminal::{LoginPrompt, TerminalNotifier, TrackingNotifier};

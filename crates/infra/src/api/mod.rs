//! Convoy UI API client and domain services
//!
//! # Architecture
//!
//! - `ApiClient` owns the `HttpClient`, the bearer token source and the
//!   `ErrorInterceptor`; every call it makes is intercepted
//! - Services build paths through `convoy_core::paths` and return the
//!   response envelope unchanged
//! - Scoped services take an explicit `ScopeContext`

pub mod auth;
pub mod client;
pub mod errors;
pub mod event_logs;
pub mod login;
pub mod private;

pub use auth::{
    clear_token, store_token, AccessTokenProvider, SessionTokenProvider, StaticTokenProvider,
};
pub use client::{ApiClient, ApiClientBuilder, ApiClientConfig, Credentials};
pub use errors::ApiError;
pub use event_logs::EventLogsService;
pub use login::LoginService;
pub use private::PrivateService;

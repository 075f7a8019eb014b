//! # Convoy Infrastructure
//!
//! Infrastructure implementations of core ports.
//!
//! This crate contains:
//! - HTTP client and the intercepted API client
//! - The login, project scope and event log services
//! - File-backed and in-memory session stores
//! - Configuration loading and logging setup
//!
//! ## Architecture
//! - Implements traits defined in `convoy-core`
//! - Contains all "impure" code (network, filesystem, environment)

pub mod api;
pub mod config;
pub mod errors;
pub mod http;
pub mod observability;
pub mod session;

// Re-export commonly used items
pub use api::{
    ApiClient, ApiClientConfig, ApiError, Credentials, EventLogsService, LoginService,
    PrivateService,
};
pub use errors::InfraError;
pub use http::HttpClient;
pub use session::{FileSessionStore, MemorySessionStore};

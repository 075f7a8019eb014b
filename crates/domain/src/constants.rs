//! Application constants
//!
//! Centralized location for the domain-level constants shared by the client,
//! the interceptor and the front end.

// Session store keys
pub const SESSION_ORG_KEY: &str = "CONVOY_ORG";
pub const SESSION_PROJECT_KEY: &str = "CONVOY_PROJECT";
pub const SESSION_AUTH_TOKEN_KEY: &str = "CONVOY_AUTH_TOKEN";

// Listing defaults
pub const DEFAULT_PAGE: u32 = 1;
pub const DEFAULT_PER_PAGE: u32 = 20;
pub const DEFAULT_SORT: &str = "AESC";

// Interceptor policy
pub const LOGIN_ROUTE: &str = "/login";
pub const UNAUTHORIZED_STATUS: u16 = 401;
pub const SIGNATURE_EXPIRED_MESSAGE: &str = "Signature has expired";
pub const TIMEOUT_TRANSPORT_MESSAGE: &str = "Timeout has occurred";
pub const TIMEOUT_NOTICE: &str = "Request timeout, please check your network and try again";

// HTTP client defaults
pub const DEFAULT_USER_AGENT: &str = "Convoy/v0.2";
pub const DEFAULT_TIMEOUT_SECS: u64 = 10;

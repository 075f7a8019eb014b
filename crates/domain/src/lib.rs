//! # Convoy Domain
//!
//! Business domain types and models for the Convoy dashboard client.
//!
//! This crate contains:
//! - Wire types (response envelope, error body, organisations, projects,
//!   events, deliveries, apps, sources)
//! - Query parameter types for the listing endpoints
//! - The explicit organisation/project scope context
//! - Domain error types and Result definitions
//! - Configuration structures and domain constants
//!
//! ## Architecture
//! - No dependencies on other Convoy crates
//! - Only external dependencies allowed
//! - Pure domain models and data structures

pub mod config;
pub mod constants;
pub mod errors;
pub mod macros;
pub mod types;

// Re-export commonly used items
pub use config::*;
pub use errors::*;
pub use types::*;

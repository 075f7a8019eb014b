//! # Convoy Dash
//!
//! Terminal front end for the Convoy webhook dashboard.
//!
//! This crate contains:
//! - The clap command line
//! - Application context (dependency injection)
//! - Terminal adapters for the interceptor ports
//! - Command handlers, one per service operation
//!
//! ## Architecture
//! - Depends on `domain`, `core`, and `infra`
//! - Wires up the ports and adapters

pub mod adapters;
pub mod cli;
pub mod commands;
pub mod context;

pub use cli::{Cli, Command};
pub use context::AppContext;

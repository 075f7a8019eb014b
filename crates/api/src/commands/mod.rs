//! Command handlers
//!
//! Each handler calls one service operation and returns the JSON to print.
//! Failures have already been reported by the interceptor when they reach
//! the caller.

mod auth;
mod events;
mod organisations;
mod projects;

use anyhow::Result;
use serde_json::Value;

use crate::cli::Command;
use crate::context::AppContext;

/// Run `command` against the wired services.
///
/// # Errors
/// Returns the service error, or a local error such as a missing scope.
pub async fn execute(ctx: &AppContext, command: Command) -> Result<Value> {
    match command {
        Command::Login { email, password } => auth::login(ctx, email, password).await,
        Command::Logout => auth::logout(ctx).await,
        Command::Organisations { user } => organisations::list(ctx, user).await,
        Command::UseOrg { uid } => organisations::select(ctx, &uid).await,
        Command::UseProject { uid } => projects::select(ctx, &uid).await,
        Command::Project => projects::details(ctx).await,
        Command::Apps { page, search } => projects::apps(ctx, page, search).await,
        Command::Sources { page } => projects::sources(ctx, page).await,
        Command::Events(args) => events::list(ctx, args).await,
        Command::Deliveries(args) => events::deliveries(ctx, args).await,
    }
}

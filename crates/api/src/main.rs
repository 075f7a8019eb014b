//! convoy-dash - Convoy webhook dashboard on the terminal
//!
//! Main entry point for the CLI.

use std::io::Write;
use std::process::ExitCode;

use anyhow::Context;
use clap::Parser;
use convoy_dash::{commands, AppContext, Cli};
use convoy_infra::{config, observability};

/// Exit status when the server asked for a fresh login.
const EXIT_LOGIN_REQUIRED: u8 = 2;

#[tokio::main]
async fn main() -> ExitCode {
    // Load environment variables before the config loader reads them
    let dotenv = dotenvy::dotenv();

    let cli = Cli::parse();

    let mut config = match config::load() {
        Ok(config) => config,
        Err(err) => {
            let _ = writeln!(std::io::stderr(), "error: {err}");
            return ExitCode::FAILURE;
        }
    };
    if let Some(api_url) = cli.api_url.clone() {
        config.api.base_url = api_url;
    }
    if let Some(session) = cli.session.clone() {
        config.session.path = session;
    }

    if let Err(err) = observability::init_logging(&config.logging) {
        let _ = writeln!(std::io::stderr(), "error: {err}");
        return ExitCode::FAILURE;
    }
    match dotenv {
        Ok(path) => tracing::debug!(path = %path.display(), "loaded .env"),
        Err(err) => tracing::debug!(error = %err, "no .env loaded"),
    }

    let ctx = match AppContext::new(config).context("failed to initialise application context") {
        Ok(ctx) => ctx,
        Err(err) => {
            let _ = writeln!(std::io::stderr(), "error: {err:#}");
            return ExitCode::FAILURE;
        }
    };

    match commands::execute(&ctx, cli.command).await {
        Ok(output) => match serde_json::to_string_pretty(&output) {
            Ok(rendered) => {
                let _ = writeln!(std::io::stdout(), "{rendered}");
                ExitCode::SUCCESS
            }
            Err(err) => {
                let _ = writeln!(std::io::stderr(), "error: {err}");
                ExitCode::FAILURE
            }
        },
        Err(err) => {
            tracing::debug!(error = %err, "command failed");
            if ctx.login_required() {
                let _ = writeln!(std::io::stderr(), "login required: run `convoy-dash login`");
                return ExitCode::from(EXIT_LOGIN_REQUIRED);
            }
            if !ctx.failure_shown() {
                let _ = writeln!(std::io::stderr(), "error: {err:#}");
            }
            ExitCode::FAILURE
        }
    }
}

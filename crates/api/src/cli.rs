//! Command line definition.

use clap::{Args, Parser, Subcommand};
use convoy_domain::DeliveryStatus;

#[derive(Parser, Debug)]
#[command(name = "convoy-dash")]
#[command(version)]
#[command(about = "Terminal client for the Convoy webhook dashboard")]
pub struct Cli {
    #[command(subcommand)]
    pub command: Command,

    /// Override the API base URL (e.g. https://convoy.example.com/ui)
    #[arg(long, global = true, value_name = "URL")]
    pub api_url: Option<String>,

    /// Override the session file location
    #[arg(long, global = true, value_name = "PATH")]
    pub session: Option<String>,
}

#[derive(Subcommand, Debug)]
pub enum Command {
    /// Log in and store the issued token
    Login {
        #[arg(long)]
        email: String,
        #[arg(long, env = "CONVOY_PASSWORD", hide_env_values = true)]
        password: String,
    },
    /// End the session and forget the stored token
    Logout,
    /// List organisations
    Organisations {
        /// Scope the listing to a user (`userId=<uid>`)
        #[arg(long)]
        user: Option<String>,
    },
    /// Make an organisation the active one
    UseOrg {
        /// Organisation uid
        uid: String,
    },
    /// Make a project of the active organisation the active one
    UseProject {
        /// Project uid
        uid: String,
    },
    /// Show the active project
    Project,
    /// List apps of the active project
    Apps {
        #[arg(long)]
        page: Option<u32>,
        #[arg(long)]
        search: Option<String>,
    },
    /// List sources of the active project
    Sources {
        #[arg(long)]
        page: Option<u32>,
    },
    /// List events
    Events(EventsArgs),
    /// List deliveries of an event
    Deliveries(DeliveriesArgs),
}

#[derive(Args, Debug, Clone)]
pub struct EventsArgs {
    /// Range start (YYYY-MM-DD)
    #[arg(long)]
    pub start: String,
    /// Range end (YYYY-MM-DD)
    #[arg(long)]
    pub end: String,
    #[arg(long, default_value_t = 1)]
    pub page: u32,
    #[arg(long, default_value = "")]
    pub endpoint: String,
    #[arg(long)]
    pub source: Option<String>,
    /// Free-text search
    #[arg(long)]
    pub query: Option<String>,
    /// Portal link token; skips the stored scope
    #[arg(long)]
    pub token: Option<String>,
}

#[derive(Args, Debug, Clone)]
pub struct DeliveriesArgs {
    /// Event uid
    #[arg(long)]
    pub event: String,
    #[arg(long, default_value_t = 1)]
    pub page: u32,
    #[arg(long)]
    pub start: Option<String>,
    #[arg(long)]
    pub end: Option<String>,
    #[arg(long)]
    pub endpoint: Option<String>,
    #[arg(long)]
    pub source: Option<String>,
    /// Delivery status filter, repeatable
    #[arg(long = "status")]
    pub statuses: Vec<DeliveryStatus>,
    /// Portal link token; skips the stored scope
    #[arg(long)]
    pub token: Option<String>,
}

//! Configuration loader
//!
//! Loads application configuration from environment variables or files.
//!
//! ## Loading Strategy
//! 1. First, attempts to load from environment variables
//! 2. If `CONVOY_API_URL` is missing, falls back to loading from file
//! 3. Probes multiple paths for config files
//! 4. Supports JSON and TOML formats
//! 5. With no file either, uses the built-in defaults
//!
//! ## Environment Variables
//! - `CONVOY_API_URL`: API base URL including the `/ui` prefix (required)
//! - `CONVOY_API_TIMEOUT_SECS`: Request timeout in seconds
//! - `CONVOY_API_USER_AGENT`: `User-Agent` header
//! - `CONVOY_API_MAX_ATTEMPTS`: Attempts per request (1 disables retries)
//! - `CONVOY_SESSION_PATH`: Session file path
//! - `CONVOY_LOG_LEVEL`: Default log filter
//! - `CONVOY_LOG_JSON`: Emit JSON logs (true/false)
//!
//! ## File Locations
//! The loader probes the following paths (in order):
//! 1. `./convoy.{json,toml}` or `./config.{json,toml}` (current working directory)
//! 2. `../convoy.{json,toml}` (parent directory)
//! 3. `../../convoy.{json,toml}` (grandparent directory)
//! 4. Relative to executable location

use std::path::{Path, PathBuf};

use convoy_domain::{ApiConfig, Config, ConvoyError, LoggingConfig, Result, SessionConfig};

/// Load configuration with automatic fallback strategy
///
/// The file fallback only applies when `CONVOY_API_URL` is unset.
///
/// # Errors
/// Returns `ConvoyError::Config` if an environment value or the probed file
/// is invalid.
pub fn load() -> Result<Config> {
    if std::env::var_os("CONVOY_API_URL").is_some() {
        let config = load_from_env()?;
        tracing::info!("Configuration loaded from environment variables");
        return Ok(config);
    }

    tracing::debug!("CONVOY_API_URL not set, trying config file");
    match probe_config_paths() {
        Some(path) => load_from_file(Some(path)),
        None => {
            tracing::info!("No config file found, using defaults");
            Ok(Config::default())
        }
    }
}

/// Load configuration from environment variables
///
/// `CONVOY_API_URL` is required; every other variable falls back to its
/// default.
///
/// # Errors
/// Returns `ConvoyError::Config` if the URL is missing or a numeric value
/// cannot be parsed.
pub fn load_from_env() -> Result<Config> {
    let defaults = Config::default();

    let base_url = env_var("CONVOY_API_URL")?;
    let timeout_secs = env_parse("CONVOY_API_TIMEOUT_SECS", defaults.api.timeout_secs)?;
    let user_agent =
        std::env::var("CONVOY_API_USER_AGENT").unwrap_or(defaults.api.user_agent);
    let max_attempts = env_parse("CONVOY_API_MAX_ATTEMPTS", defaults.api.max_attempts)?;

    let session_path = std::env::var("CONVOY_SESSION_PATH").unwrap_or(defaults.session.path);

    let log_level = std::env::var("CONVOY_LOG_LEVEL").unwrap_or(defaults.logging.level);
    let log_json = env_bool("CONVOY_LOG_JSON", defaults.logging.json);

    Ok(Config {
        api: ApiConfig { base_url, timeout_secs, user_agent, max_attempts },
        session: SessionConfig { path: session_path },
        logging: LoggingConfig { level: log_level, json: log_json },
    })
}

/// Load configuration from a file
///
/// If `path` is `None`, probes multiple locations for config files.
/// Supports both JSON and TOML formats (detected by file extension).
///
/// # Errors
/// Returns `ConvoyError::Config` if:
/// - File not found (when path is specified)
/// - No config file found (when path is `None`)
/// - File format is invalid
pub fn load_from_file(path: Option<PathBuf>) -> Result<Config> {
    let config_path = match path {
        Some(p) => {
            if !p.exists() {
                return Err(ConvoyError::Config(format!(
                    "Config file not found: {}",
                    p.display()
                )));
            }
            p
        }
        None => probe_config_paths().ok_or_else(|| {
            ConvoyError::Config("No config file found in any of the standard locations".to_string())
        })?,
    };

    tracing::info!(path = %config_path.display(), "Loading configuration from file");

    let contents = std::fs::read_to_string(&config_path)
        .map_err(|e| ConvoyError::Config(format!("Failed to read config file: {}", e)))?;

    parse_config(&contents, &config_path)
}

/// Parse configuration from string content
///
/// Format is detected by file extension (`.json` or `.toml`).
fn parse_config(contents: &str, path: &Path) -> Result<Config> {
    let extension = path.extension().and_then(|e| e.to_str()).unwrap_or("json");

    match extension {
        "toml" => toml::from_str(contents)
            .map_err(|e| ConvoyError::Config(format!("Invalid TOML format: {}", e))),
        "json" => serde_json::from_str(contents)
            .map_err(|e| ConvoyError::Config(format!("Invalid JSON format: {}", e))),
        _ => Err(ConvoyError::Config(format!("Unsupported config format: {}", extension))),
    }
}

/// Probe multiple paths for configuration files
///
/// # Returns
/// The first config file found, or `None` if no file exists.
pub fn probe_config_paths() -> Option<PathBuf> {
    let mut candidates = Vec::new();

    if let Ok(cwd) = std::env::current_dir() {
        candidates.extend(candidates_in(&cwd));
    }

    if let Ok(exe_path) = std::env::current_exe() {
        if let Some(exe_dir) = exe_path.parent() {
            candidates.extend(candidates_in(exe_dir));
        }
    }

    candidates.into_iter().find(|path| path.exists())
}

fn candidates_in(dir: &Path) -> Vec<PathBuf> {
    vec![
        dir.join("convoy.json"),
        dir.join("convoy.toml"),
        dir.join("config.json"),
        dir.join("config.toml"),
        dir.join("../convoy.json"),
        dir.join("../convoy.toml"),
        dir.join("../../convoy.json"),
        dir.join("../../convoy.toml"),
    ]
}

/// Get required environment variable
fn env_var(key: &str) -> Result<String> {
    std::env::var(key).map_err(|_| {
        ConvoyError::Config(format!("Missing required environment variable: {}", key))
    })
}

/// Parse an optional numeric variable, using `default` when unset.
fn env_parse<T>(key: &str, default: T) -> Result<T>
where
    T: std::str::FromStr,
    T::Err: std::fmt::Display,
{
    match std::env::var(key) {
        Ok(raw) => raw
            .trim()
            .parse::<T>()
            .map_err(|e| ConvoyError::Config(format!("Invalid value for {}: {}", key, e))),
        Err(_) => Ok(default),
    }
}

/// Parse boolean from environment variable
///
/// Accepts: `1`/`0`, `true`/`false`, `yes`/`no`, `on`/`off` (case-insensitive)
fn env_bool(key: &str, default: bool) -> bool {
    std::env::var(key)
        .ok()
        .map(|s| matches!(s.to_ascii_lowercase().as_str(), "1" | "true" | "yes" | "on"))
        .unwrap_or(default)
}

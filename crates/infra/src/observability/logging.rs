use convoy_domain::{ConvoyError, LoggingConfig, Result};
use tracing_subscriber::EnvFilter;

/// Filter from `RUST_LOG`, else the configured level.
///
/// # Errors
/// Returns `ConvoyError::Config` if the configured directive is invalid.
pub fn build_filter(config: &LoggingConfig) -> Result<EnvFilter> {
    match EnvFilter::try_from_default_env() {
        Ok(filter) => Ok(filter),
        Err(_) => EnvFilter::try_new(&config.level).map_err(|e| {
            ConvoyError::Config(format!("Invalid log level '{}': {}", config.level, e))
        }),
    }
}

/// Install the global fmt subscriber. Logs go to stderr so command output on
/// stdout stays machine readable.
///
/// # Errors
/// Returns `ConvoyError::Config` for an invalid level or if a global
/// subscriber is already installed.
pub fn init_logging(config: &LoggingConfig) -> Result<()> {
    let filter = build_filter(config)?;
    let builder = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(true)
        .with_writer(std::io::stderr);

    let installed = if config.json { builder.json().try_init() } else { builder.try_init() };

    installed.map_err(|e| ConvoyError::Config(format!("Failed to install subscriber: {}", e)))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_invalid_level_is_config_error() {
        std::env::remove_var("RUST_LOG");
        let config = LoggingConfig { level: "convoy=verbose".to_string(), json: false };
        assert!(matches!(build_filter(&config), Err(ConvoyError::Config(_))));
    }

    #[test]
    fn test_valid_level() {
        std::env::remove_var("RUST_LOG");
        let config = LoggingConfig { level: "convoy_infra=debug,info".to_string(), json: true };
        assert!(build_filter(&config).is_ok());
    }
}

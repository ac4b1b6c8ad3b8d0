//! Configuration loading from disk and the process environment.

use std::fs;
use std::path::Path;

use thiserror::Error;

use crate::config::schema::{CatalogConfig, FetchMode};
use crate::config::validation::{validate_config, ValidationError};

pub const AUTHORS_SERVICE_URL: &str = "AUTHORS_SERVICE_URL";
pub const BOOKS_SERVICE_URL: &str = "BOOKS_SERVICE_URL";
pub const PORT: &str = "PORT";
pub const UPSTREAM_TIMEOUT_SECS: &str = "CATALOG_UPSTREAM_TIMEOUT_SECS";
pub const FETCH_MODE: &str = "CATALOG_FETCH_MODE";
pub const METRICS_ADDRESS: &str = "CATALOG_METRICS_ADDRESS";

/// Error type for configuration loading.
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Parse error: {0}")]
    Parse(#[from] toml::de::Error),

    #[error("Invalid value for {var}: {reason}")]
    Env { var: &'static str, reason: String },

    #[error("Validation failed: {}", join_errors(.0))]
    Validation(Vec<ValidationError>),
}

fn join_errors(errors: &[ValidationError]) -> String {
    errors
        .iter()
        .map(ToString::to_string)
        .collect::<Vec<_>>()
        .join(", ")
}

/// Load configuration: defaults, then the optional TOML file, then the
/// process environment. The result is validated before it is returned.
pub fn load_config(path: Option<&Path>) -> Result<CatalogConfig, ConfigError> {
    let mut config = match path {
        Some(path) => {
            let content = fs::read_to_string(path)?;
            toml::from_str(&content)?
        }
        None => CatalogConfig::default(),
    };

    apply_env(&mut config, |key| std::env::var(key).ok())?;
    validate_config(&config).map_err(ConfigError::Validation)?;

    Ok(config)
}

/// Overlay environment variables onto `config`.
///
/// Empty values are treated as unset. `lookup` is injected so tests never
/// mutate the real process environment.
pub fn apply_env<F>(config: &mut CatalogConfig, lookup: F) -> Result<(), ConfigError>
where
    F: Fn(&str) -> Option<String>,
{
    let get = |key: &str| lookup(key).filter(|v| !v.trim().is_empty());

    if let Some(url) = get(AUTHORS_SERVICE_URL) {
        config.upstreams.authors_url = Some(url);
    }
    if let Some(url) = get(BOOKS_SERVICE_URL) {
        config.upstreams.books_url = Some(url);
    }

    if let Some(port) = get(PORT) {
        config.listener.port = port.trim().parse().map_err(|e| ConfigError::Env {
            var: PORT,
            reason: format!("'{}' is not a valid port: {}", port, e),
        })?;
    }

    if let Some(secs) = get(UPSTREAM_TIMEOUT_SECS) {
        config.upstreams.timeout_secs = secs.trim().parse().map_err(|e| ConfigError::Env {
            var: UPSTREAM_TIMEOUT_SECS,
            reason: format!("'{}' is not a number of seconds: {}", secs, e),
        })?;
    }

    if let Some(mode) = get(FETCH_MODE) {
        config.upstreams.fetch_mode = mode
            .parse::<FetchMode>()
            .map_err(|reason| ConfigError::Env { var: FETCH_MODE, reason })?;
    }

    if let Some(addr) = get(METRICS_ADDRESS) {
        config.observability.metrics_enabled = true;
        config.observability.metrics_address = addr;
    }

    Ok(())
}

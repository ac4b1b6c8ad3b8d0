//! Configuration validation.
//!
//! # Responsibilities
//! - Semantic validation (serde handles syntactic)
//! - Value ranges (timeout > 0, metrics address parses)
//! - Flag upstream base URLs that cannot work (not absolute http(s))
//!
//! # Design Decisions
//! - Returns all validation errors, not just the first
//! - Upstream URLs never fail startup: a bad one is only warned about, and
//!   each `/catalog` call against it fails on its own

use thiserror::Error;
use url::Url;

use crate::config::schema::CatalogConfig;

/// A single semantic problem with the configuration.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ValidationError {
    #[error("{field} is not a valid URL: {reason}")]
    InvalidUrl { field: &'static str, reason: String },

    #[error("{field} must use http or https, got '{scheme}'")]
    UnsupportedScheme { field: &'static str, scheme: String },

    #[error("upstreams.timeout_secs must be greater than zero")]
    ZeroTimeout,

    #[error("observability.metrics_address '{0}' is not a socket address")]
    InvalidMetricsAddress(String),
}

pub fn validate_config(config: &CatalogConfig) -> Result<(), Vec<ValidationError>> {
    let mut errors = Vec::new();

    if config.upstreams.timeout_secs == 0 {
        errors.push(ValidationError::ZeroTimeout);
    }

    if config.observability.metrics_enabled && config.observability.metrics_socket_addr().is_none() {
        errors.push(ValidationError::InvalidMetricsAddress(
            config.observability.metrics_address.clone(),
        ));
    }

    if errors.is_empty() {
        Ok(())
    } else {
        Err(errors)
    }
}

/// Problems with the configured upstream base URLs. Meant for logging only.
pub fn upstream_url_warnings(config: &CatalogConfig) -> Vec<ValidationError> {
    let urls = [
        ("upstreams.authors_url", &config.upstreams.authors_url),
        ("upstreams.books_url", &config.upstreams.books_url),
    ];

    urls.into_iter()
        .filter_map(|(field, url)| url.as_deref().and_then(|url| check_base_url(field, url).err()))
        .collect()
}

fn check_base_url(field: &'static str, raw: &str) -> Result<(), ValidationError> {
    let url = Url::parse(raw).map_err(|e| ValidationError::InvalidUrl {
        field,
        reason: e.to_string(),
    })?;

    match url.scheme() {
        "http" | "https" => Ok(()),
        scheme => Err(ValidationError::UnsupportedScheme {
            field,
            scheme: scheme.to_string(),
        }),
    }
}

//! Upstream failure classification.

use std::fmt;

use reqwest::StatusCode;
use thiserror::Error;

/// Which upstream a call was aimed at.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Upstream {
    Authors,
    Books,
}

impl Upstream {
    /// Resource path appended to the service base URL.
    pub fn path(self) -> &'static str {
        match self {
            Upstream::Authors => "/authors",
            Upstream::Books => "/books",
        }
    }

    pub fn as_str(self) -> &'static str {
        match self {
            Upstream::Authors => "authors",
            Upstream::Books => "books",
        }
    }
}

impl fmt::Display for Upstream {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Errors from a single upstream call.
#[derive(Debug, Error)]
pub enum UpstreamError {
    /// Connection failure or timeout before a response arrived.
    #[error("failed to fetch {upstream}: {source}")]
    Transport {
        upstream: Upstream,
        #[source]
        source: reqwest::Error,
    },

    /// The upstream answered with a non-2xx status.
    #[error("{upstream} service returned {status}")]
    Status { upstream: Upstream, status: StatusCode },

    /// The response body could not be read.
    #[error("failed to read {upstream} response: {source}")]
    Read {
        upstream: Upstream,
        #[source]
        source: reqwest::Error,
    },

    /// The body was not a JSON array of the expected records.
    #[error("failed to decode {upstream} response: {source}")]
    Decode {
        upstream: Upstream,
        #[source]
        source: serde_json::Error,
    },
}

impl UpstreamError {
    pub fn upstream(&self) -> Upstream {
        match self {
            UpstreamError::Transport { upstream, .. }
            | UpstreamError::Status { upstream, .. }
            | UpstreamError::Read { upstream, .. }
            | UpstreamError::Decode { upstream, .. } => *upstream,
        }
    }

    /// Transport and status failures mean the upstream itself is unavailable.
    pub fn is_gateway_failure(&self) -> bool {
        matches!(self, UpstreamError::Transport { .. } | UpstreamError::Status { .. })
    }

    /// Short label for metrics.
    pub fn kind(&self) -> &'static str {
        match self {
            UpstreamError::Transport { .. } => "transport",
            UpstreamError::Status { .. } => "status",
            UpstreamError::Read { .. } => "read",
            UpstreamError::Decode { .. } => "decode",
        }
    }
}

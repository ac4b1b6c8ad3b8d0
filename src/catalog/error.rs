//! Errors surfaced by a catalog request.

use thiserror::Error;

use crate::upstream::UpstreamError;

/// Everything that can stop `/catalog` from producing a response body.
#[derive(Debug, Error)]
pub enum CatalogError {
    /// One or both upstream base URLs are missing.
    #[error("Service URLs not configured. Please set AUTHORS_SERVICE_URL and BOOKS_SERVICE_URL environment variables.")]
    NotConfigured,

    #[error(transparent)]
    Upstream(#[from] UpstreamError),

    /// The detached aggregation task panicked or was aborted.
    #[error("catalog task failed: {0}")]
    Task(#[from] tokio::task::JoinError),
}

/// Result type for catalog operations.
pub type CatalogResult<T> = Result<T, CatalogError>;

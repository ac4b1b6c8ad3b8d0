//! Whole-catalog aggregation.
//!
//! # Responsibilities
//! - Fetch every author and every book from the upstreams
//! - Join them by `autor_id`
//! - Fail the whole call on the first upstream error
//!
//! # Design Decisions
//! - Nothing is cached; every call re-fetches both upstreams
//! - Sequential mode never contacts Books once Authors has failed
//! - Output order is the Books response order in both modes

use crate::catalog::error::{CatalogError, CatalogResult};
use crate::catalog::join::{assemble, index_authors};
use crate::catalog::types::{Author, Book, CatalogItem};
use crate::config::{FetchMode, UpstreamConfig};
use crate::upstream::{Upstream, UpstreamClient};

/// Base URLs of both upstreams, present only when both are configured.
#[derive(Debug, Clone)]
struct Endpoints {
    authors: String,
    books: String,
}

/// Builds the denormalized catalog from the two upstreams.
#[derive(Debug, Clone)]
pub struct Aggregator {
    client: UpstreamClient,
    endpoints: Option<Endpoints>,
    fetch_mode: FetchMode,
}

impl Aggregator {
    pub fn new(config: &UpstreamConfig) -> Result<Self, reqwest::Error> {
        let client = UpstreamClient::new(config.timeout())?;
        Ok(Self::with_client(client, config))
    }

    pub fn with_client(client: UpstreamClient, config: &UpstreamConfig) -> Self {
        let endpoints = match (&config.authors_url, &config.books_url) {
            (Some(authors), Some(books)) => Some(Endpoints {
                authors: authors.clone(),
                books: books.clone(),
            }),
            _ => None,
        };

        Self {
            client,
            endpoints,
            fetch_mode: config.fetch_mode,
        }
    }

    /// Whether both upstream base URLs are known.
    pub fn is_configured(&self) -> bool {
        self.endpoints.is_some()
    }

    pub fn fetch_mode(&self) -> FetchMode {
        self.fetch_mode
    }

    /// Fetch both upstreams and join them.
    pub async fn build_catalog(&self, request_id: Option<&str>) -> CatalogResult<Vec<CatalogItem>> {
        let endpoints = self.endpoints.as_ref().ok_or(CatalogError::NotConfigured)?;

        let (authors, books) = match self.fetch_mode {
            FetchMode::Sequential => {
                let authors = self.fetch_authors(&endpoints.authors, request_id).await?;
                let books = self.fetch_books(&endpoints.books, request_id).await?;
                (authors, books)
            }
            FetchMode::Concurrent => tokio::try_join!(
                self.fetch_authors(&endpoints.authors, request_id),
                self.fetch_books(&endpoints.books, request_id),
            )?,
        };

        let authors = index_authors(authors);
        let catalog = assemble(books, &authors);

        tracing::info!(
            request_id = request_id.unwrap_or("unknown"),
            authors = authors.len(),
            items = catalog.len(),
            "Catalog assembled"
        );

        Ok(catalog)
    }

    async fn fetch_authors(&self, base: &str, request_id: Option<&str>) -> CatalogResult<Vec<Author>> {
        Ok(self.client.fetch_list(Upstream::Authors, base, request_id).await?)
    }

    async fn fetch_books(&self, base: &str, request_id: Option<&str>) -> CatalogResult<Vec<Book>> {
        Ok(self.client.fetch_list(Upstream::Books, base, request_id).await?)
    }
}

//! Catalog Service Library
//!
//! Joins the Authors and Books upstream services into one denormalized
//! catalog served at `GET /catalog`.

pub mod catalog;
pub mod config;
pub mod http;
pub mod lifecycle;
pub mod observability;
pub mod upstream;

pub use catalog::{Aggregator, CatalogError, CatalogItem};
pub use config::CatalogConfig;
pub use http::HttpServer;
pub use lifecycle::Shutdown;

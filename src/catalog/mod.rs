//! Catalog aggregation subsystem.
//!
//! # Data Flow
//! ```text
//! GET /catalog
//!     → aggregator.rs (fetch Authors, fetch Books)
//!     → join.rs (id → Author index, resolve each Book)
//!     → Vec<CatalogItem> in Books order
//! ```

pub mod aggregator;
pub mod error;
pub mod join;
pub mod types;

pub use aggregator::Aggregator;
pub use error::{CatalogError, CatalogResult};
pub use join::UNKNOWN_AUTHOR;
pub use types::{Author, AuthorId, Book, CatalogItem};

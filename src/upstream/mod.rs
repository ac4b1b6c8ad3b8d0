//! Upstream service access.
//!
//! # Data Flow
//! ```text
//! Aggregator
//!     → client.rs (GET with bounded timeout, x-request-id forwarded)
//!     → read body → decode JSON
//!     → error.rs (transport / status / read / decode classification)
//! ```
//!
//! # Design Decisions
//! - One pooled reqwest client shared by every request
//! - No retries: the first failure is returned to the caller
//! - Body read and JSON decode are separate steps so their failures stay distinct

pub mod client;
pub mod error;

pub use client::UpstreamClient;
pub use error::{Upstream, UpstreamError};

//! Configuration management subsystem.
//!
//! # Data Flow
//! ```text
//! optional config file (TOML)
//!     → loader.rs (parse & deserialize, overlay environment)
//!     → validation.rs (semantic checks)
//!     → CatalogConfig (validated, immutable)
//!     → shared via Arc with the HTTP server and aggregator
//! ```
//!
//! # Design Decisions
//! - Config is read once at startup; handlers never touch the environment
//! - All fields have defaults so an empty environment still boots
//! - Missing upstream URLs are not a startup error; `/catalog` reports them

pub mod loader;
pub mod schema;
pub mod validation;

pub use loader::{load_config, ConfigError};
pub use schema::{CatalogConfig, FetchMode, ListenerConfig, ObservabilityConfig, UpstreamConfig};

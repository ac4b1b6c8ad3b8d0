//! Catalog Service
//!
//! Aggregates the Authors and Books services into one catalog.
//!
//! # Architecture Overview
//!
//! ```text
//!                      ┌──────────────────────────────────────────────┐
//!                      │               CATALOG SERVICE                 │
//!   GET /catalog       │  ┌────────┐    ┌────────────┐   ┌──────────┐ │      ┌──────────────┐
//!   ───────────────────┼─▶│  http  │───▶│ aggregator │──▶│ upstream │─┼─────▶│ Authors svc  │
//!                      │  │ server │    │   + join   │   │  client  │─┼─────▶│ Books svc    │
//!   JSON catalog       │  └────────┘    └────────────┘   └──────────┘ │      └──────────────┘
//!   ◀──────────────────┼──────┘                                       │
//!                      │  config · observability · lifecycle           │
//!                      └──────────────────────────────────────────────┘
//! ```

use std::path::PathBuf;

use clap::Parser;
use tokio::net::TcpListener;

use catalog_service::config::load_config;
use catalog_service::observability::{logging, metrics};
use catalog_service::{HttpServer, Shutdown};

#[derive(Parser)]
#[command(name = "catalog-service", version, about = "Authors + Books catalog aggregation service")]
struct Args {
    /// Optional TOML config file; environment variables override it.
    #[arg(short, long, env = "CATALOG_CONFIG")]
    config: Option<PathBuf>,
}

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    let args = Args::parse();

    let config = load_config(args.config.as_deref());
    let level = config
        .as_ref()
        .map(|c| c.observability.log_level.clone())
        .unwrap_or_else(|_| "info".to_string());
    logging::init(&level);

    let config = config.inspect_err(|e| tracing::error!(error = %e, "Invalid configuration"))?;

    tracing::info!(
        version = env!("CARGO_PKG_VERSION"),
        port = config.listener.port,
        authors_configured = config.upstreams.authors_url.is_some(),
        books_configured = config.upstreams.books_url.is_some(),
        "Configuration loaded"
    );

    if config.observability.metrics_enabled {
        match config.observability.metrics_socket_addr() {
            Some(addr) => metrics::init_metrics(addr),
            None => tracing::error!(
                metrics_address = %config.observability.metrics_address,
                "Failed to parse metrics address"
            ),
        }
    }

    let listener = TcpListener::bind(config.listener.bind_address())
        .await
        .inspect_err(|e| tracing::error!(error = %e, "Failed to bind listener"))?;

    let shutdown = Shutdown::new();
    shutdown.trigger_on_signal();

    let server = HttpServer::new(config)?;
    server.run(listener, shutdown.subscribe()).await?;

    tracing::info!("Shutdown complete");
    Ok(())
}

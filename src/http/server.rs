//! HTTP server setup and configuration.
//!
//! # Responsibilities
//! - Create Axum Router with all handlers
//! - Wire up middleware (request ID, tracing)
//! - Serve on a bound listener until shutdown

use axum::{routing::get, Router};
use std::sync::Arc;
use tokio::net::TcpListener;
use tokio::sync::broadcast;
use tower::ServiceBuilder;
use tower_http::{
    request_id::{PropagateRequestIdLayer, SetRequestIdLayer},
    trace::TraceLayer,
};

use crate::catalog::Aggregator;
use crate::config::validation::upstream_url_warnings;
use crate::config::CatalogConfig;
use crate::http::handlers;
use crate::http::request::UuidRequestId;

/// Application state injected into handlers.
#[derive(Clone)]
pub struct AppState {
    pub aggregator: Arc<Aggregator>,
}

impl AppState {
    pub fn new(aggregator: Aggregator) -> Self {
        Self {
            aggregator: Arc::new(aggregator),
        }
    }
}

/// HTTP server for the catalog service.
pub struct HttpServer {
    router: Router,
    config: Arc<CatalogConfig>,
}

impl HttpServer {
    /// Create a new HTTP server with the given configuration.
    pub fn new(config: CatalogConfig) -> Result<Self, reqwest::Error> {
        let aggregator = Aggregator::new(&config.upstreams)?;

        if !aggregator.is_configured() {
            tracing::warn!(
                "AUTHORS_SERVICE_URL or BOOKS_SERVICE_URL not set; /catalog will answer 500"
            );
        }
        for warning in upstream_url_warnings(&config) {
            tracing::warn!(%warning, "Upstream URL looks unusable; /catalog calls to it will fail");
        }

        let router = Self::build_router(AppState::new(aggregator));
        Ok(Self {
            router,
            config: Arc::new(config),
        })
    }

    /// Build the Axum router with all middleware layers.
    pub fn build_router(state: AppState) -> Router {
        Router::new()
            .route("/", get(handlers::home))
            .route("/catalog", get(handlers::catalog))
            .with_state(state)
            .layer(
                ServiceBuilder::new()
                    .layer(SetRequestIdLayer::x_request_id(UuidRequestId))
                    .layer(TraceLayer::new_for_http())
                    .layer(PropagateRequestIdLayer::x_request_id()),
            )
    }

    /// Clone of the router, for driving the service without a socket.
    pub fn router(&self) -> Router {
        self.router.clone()
    }

    /// Run the server until `shutdown` fires, then drain in-flight requests.
    pub async fn run(
        self,
        listener: TcpListener,
        mut shutdown: broadcast::Receiver<()>,
    ) -> Result<(), std::io::Error> {
        let addr = listener.local_addr()?;
        tracing::info!(
            address = %addr,
            fetch_mode = %self.config.upstreams.fetch_mode,
            upstream_timeout_secs = self.config.upstreams.timeout_secs,
            "Catalog Service listening"
        );

        axum::serve(listener, self.router)
            .with_graceful_shutdown(async move {
                let _ = shutdown.recv().await;
                tracing::info!("Shutdown signal received");
            })
            .await?;

        tracing::info!("HTTP server stopped");
        Ok(())
    }

    /// Get a reference to the config.
    pub fn config(&self) -> &CatalogConfig {
        &self.config
    }
}

//! Shared utilities for integration testing.

use std::net::SocketAddr;
use std::sync::atomic::{AtomicU32, Ordering};
use std::sync::{Arc, Mutex};
use std::time::Duration;

use axum::{
    http::{HeaderMap, StatusCode},
    routing::get,
    Json, Router,
};
use catalog_service::config::{CatalogConfig, FetchMode};
use catalog_service::{HttpServer, Shutdown};
use serde_json::Value;
use tokio::net::TcpListener;

/// Serve `router` on an ephemeral local port.
pub async fn start_upstream(router: Router) -> SocketAddr {
    let listener = TcpListener::bind("127.0.0.1:0").await.unwrap();
    let addr = listener.local_addr().unwrap();
    tokio::spawn(async move {
        let _ = axum::serve(listener, router).await;
    });
    addr
}

/// Upstream answering `path` with a fixed JSON body, counting hits.
pub fn json_upstream(path: &str, body: Value, hits: Arc<AtomicU32>) -> Router {
    Router::new().route(
        path,
        get(move || {
            let body = body.clone();
            let hits = hits.clone();
            async move {
                hits.fetch_add(1, Ordering::SeqCst);
                Json(body)
            }
        }),
    )
}

/// Upstream answering `path` with an arbitrary status and text body.
pub fn raw_upstream(path: &str, status: StatusCode, body: &'static str, hits: Arc<AtomicU32>) -> Router {
    Router::new().route(
        path,
        get(move || {
            let hits = hits.clone();
            async move {
                hits.fetch_add(1, Ordering::SeqCst);
                (status, body)
            }
        }),
    )
}

/// Upstream that records the `x-request-id` of every call.
pub fn recording_upstream(path: &str, body: Value, seen: Arc<Mutex<Vec<String>>>) -> Router {
    Router::new().route(
        path,
        get(move |headers: HeaderMap| {
            let body = body.clone();
            let seen = seen.clone();
            async move {
                if let Some(id) = headers.get("x-request-id").and_then(|v| v.to_str().ok()) {
                    seen.lock().unwrap().push(id.to_string());
                }
                Json(body)
            }
        }),
    )
}

/// Upstream that sleeps before answering.
pub fn slow_upstream(path: &str, delay: Duration, body: Value) -> Router {
    Router::new().route(
        path,
        get(move || {
            let body = body.clone();
            async move {
                tokio::time::sleep(delay).await;
                Json(body)
            }
        }),
    )
}

/// Base URL of a local port nothing is listening on.
pub async fn closed_url() -> String {
    let listener = TcpListener::bind("127.0.0.1:0").await.unwrap();
    let addr = listener.local_addr().unwrap();
    drop(listener);
    format!("http://{}", addr)
}

pub fn config_for(authors: Option<String>, books: Option<String>, mode: FetchMode) -> CatalogConfig {
    let mut config = CatalogConfig::default();
    config.listener.host = "127.0.0.1".into();
    config.listener.port = 0;
    config.upstreams.authors_url = authors;
    config.upstreams.books_url = books;
    config.upstreams.fetch_mode = mode;
    config
}

/// Start the catalog service; the returned handle stops it.
pub async fn spawn_catalog(config: CatalogConfig) -> (SocketAddr, Shutdown) {
    let listener = TcpListener::bind(config.listener.bind_address()).await.unwrap();
    let addr = listener.local_addr().unwrap();

    let shutdown = Shutdown::new();
    let server = HttpServer::new(config).unwrap();
    let server_shutdown = shutdown.subscribe();
    tokio::spawn(async move {
        let _ = server.run(listener, server_shutdown).await;
    });

    (addr, shutdown)
}

pub fn client() -> reqwest::Client {
    reqwest::Client::builder()
        .pool_max_idle_per_host(0)
        .no_proxy()
        .build()
        .unwrap()
}

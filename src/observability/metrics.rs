//! Metrics collection and exposition.
//!
//! # Metrics
//! - `catalog_requests_total` (counter): requests by route, status
//! - `catalog_request_duration_seconds` (histogram): handler latency
//! - `catalog_upstream_requests_total` (counter): upstream calls by upstream, outcome
//! - `catalog_upstream_duration_seconds` (histogram): upstream call latency

use metrics::{counter, histogram};
use metrics_exporter_prometheus::PrometheusBuilder;
use std::net::SocketAddr;
use std::time::Instant;

/// Install the Prometheus exporter on `addr`. Must run inside a tokio runtime.
pub fn init_metrics(addr: SocketAddr) {
    match PrometheusBuilder::new().with_http_listener(addr).install() {
        Ok(()) => tracing::info!(address = %addr, "Metrics exporter listening"),
        Err(e) => tracing::error!(address = %addr, error = %e, "Failed to install metrics exporter"),
    }
}

pub fn record_request(route: &'static str, status: u16, start: Instant) {
    let status = status.to_string();
    counter!("catalog_requests_total", "route" => route, "status" => status.clone()).increment(1);
    histogram!("catalog_request_duration_seconds", "route" => route, "status" => status)
        .record(start.elapsed().as_secs_f64());
}

pub fn record_upstream(upstream: &'static str, outcome: &'static str, start: Instant) {
    counter!("catalog_upstream_requests_total", "upstream" => upstream, "outcome" => outcome).increment(1);
    histogram!("catalog_upstream_duration_seconds", "upstream" => upstream)
        .record(start.elapsed().as_secs_f64());
}

//! Route handlers.

use std::time::Instant;

use axum::{
    extract::State,
    http::HeaderMap,
    response::{IntoResponse, Response},
    Json,
};

use crate::catalog::CatalogError;
use crate::http::request::request_id;
use crate::http::server::AppState;
use crate::observability::metrics;

pub const HOME_MESSAGE: &str = "Catalog Service is up and running!";

/// Liveness text. Never fails.
pub async fn home() -> &'static str {
    HOME_MESSAGE
}

/// Full catalog as a JSON array.
///
/// The aggregation runs on its own task so a client that goes away does not
/// cancel upstream calls already in flight.
pub async fn catalog(State(state): State<AppState>, headers: HeaderMap) -> Response {
    let start = Instant::now();
    let request_id = request_id(&headers);

    let aggregator = state.aggregator.clone();
    let task_request_id = request_id.clone();
    let result = tokio::spawn(async move { aggregator.build_catalog(task_request_id.as_deref()).await })
        .await
        .map_err(CatalogError::from)
        .and_then(|result| result);

    let rid = request_id.as_deref().unwrap_or("unknown");
    let response = match result {
        Ok(items) => Json(items).into_response(),
        Err(e @ CatalogError::NotConfigured) => {
            tracing::warn!(request_id = %rid, error = %e, "Catalog requested without upstream URLs");
            e.into_response()
        }
        Err(e) => {
            tracing::error!(
                request_id = %rid,
                status = e.status_code().as_u16(),
                error = %e,
                "Catalog aggregation failed"
            );
            e.into_response()
        }
    };

    metrics::record_request("/catalog", response.status().as_u16(), start);
    response
}

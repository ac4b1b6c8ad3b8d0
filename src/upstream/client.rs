//! HTTP client for the Authors and Books services.
//!
//! # Responsibilities
//! - Issue GET `<base>/<resource>` with a bounded timeout
//! - Forward the inbound request ID
//! - Separate transport, status, read and decode failures

use std::time::{Duration, Instant};

use serde::de::DeserializeOwned;

use crate::http::request::X_REQUEST_ID;
use crate::observability::metrics;
use crate::upstream::error::{Upstream, UpstreamError};

/// Pooled client shared by every aggregation.
#[derive(Clone, Debug)]
pub struct UpstreamClient {
    http: reqwest::Client,
    timeout: Duration,
}

impl UpstreamClient {
    /// Build a client whose every call is bounded by `timeout`.
    pub fn new(timeout: Duration) -> Result<Self, reqwest::Error> {
        let http = reqwest::Client::builder()
            .timeout(timeout)
            .user_agent(concat!("catalog-service/", env!("CARGO_PKG_VERSION")))
            .build()?;

        Ok(Self { http, timeout })
    }

    pub fn timeout(&self) -> Duration {
        self.timeout
    }

    /// Fetch and decode the full record list of one upstream.
    ///
    /// A JSON `null` body decodes as an empty list and `null` elements as
    /// `T::default()`.
    pub async fn fetch_list<T>(
        &self,
        upstream: Upstream,
        base_url: &str,
        request_id: Option<&str>,
    ) -> Result<Vec<T>, UpstreamError>
    where
        T: DeserializeOwned + Default,
    {
        let url = endpoint(base_url, upstream);
        let start = Instant::now();

        tracing::debug!(
            request_id = request_id.unwrap_or("unknown"),
            upstream = %upstream,
            url = %url,
            "Fetching upstream"
        );

        let result = self.get_and_decode(upstream, &url, request_id).await;

        match &result {
            Ok(records) => {
                metrics::record_upstream(upstream.as_str(), "ok", start);
                tracing::debug!(
                    upstream = %upstream,
                    records = records.len(),
                    elapsed_ms = start.elapsed().as_millis() as u64,
                    "Upstream fetch complete"
                );
            }
            Err(e) => metrics::record_upstream(upstream.as_str(), e.kind(), start),
        }

        result
    }

    async fn get_and_decode<T>(
        &self,
        upstream: Upstream,
        url: &str,
        request_id: Option<&str>,
    ) -> Result<Vec<T>, UpstreamError>
    where
        T: DeserializeOwned + Default,
    {
        let mut request = self.http.get(url);
        if let Some(id) = request_id {
            request = request.header(X_REQUEST_ID, id);
        }

        let response = request
            .send()
            .await
            .map_err(|source| UpstreamError::Transport { upstream, source })?;

        let status = response.status();
        if !status.is_success() {
            return Err(UpstreamError::Status { upstream, status });
        }

        let body = response
            .bytes()
            .await
            .map_err(|source| UpstreamError::Read { upstream, source })?;

        decode_list(&body).map_err(|source| UpstreamError::Decode { upstream, source })
    }
}

/// Decode a JSON array of records, tolerating `null` for the array and its elements.
pub fn decode_list<T>(body: &[u8]) -> Result<Vec<T>, serde_json::Error>
where
    T: DeserializeOwned + Default,
{
    let records: Option<Vec<Option<T>>> = serde_json::from_slice(body)?;
    Ok(records
        .unwrap_or_default()
        .into_iter()
        .map(Option::unwrap_or_default)
        .collect())
}

/// `<base>/<resource>`, ignoring trailing slashes on the base.
pub fn endpoint(base_url: &str, upstream: Upstream) -> String {
    format!("{}{}", base_url.trim_end_matches('/'), upstream.path())
}

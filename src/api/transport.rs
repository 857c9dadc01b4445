// Copyright (c) 2025 - Cowboy AI, Inc.
//! HTTP transport seam
//!
//! [`HttpTransport`] issues a single authenticated GET and hands back the raw
//! status and body. Status interpretation, retries and pagination live in
//! [`FabricClient`](super::FabricClient), so tests can script responses
//! without a server.

use async_trait::async_trait;
use reqwest::{header::RETRY_AFTER, Client};
use std::time::Duration;
use tracing::debug;

use crate::errors::{InventoryError, InventoryResult};

/// Status, `Retry-After` hint and body of one HTTP response
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RawResponse {
    pub status: u16,
    pub retry_after: Option<Duration>,
    pub body: String,
}

impl RawResponse {
    pub fn new(status: u16, body: impl Into<String>) -> Self {
        Self {
            status,
            retry_after: None,
            body: body.into(),
        }
    }

    pub fn with_retry_after(mut self, retry_after: Duration) -> Self {
        self.retry_after = Some(retry_after);
        self
    }

    pub fn is_success(&self) -> bool {
        (200..300).contains(&self.status)
    }

    pub fn is_rate_limited(&self) -> bool {
        self.status == 429
    }
}

/// Single-request HTTP GET
#[async_trait]
pub trait HttpTransport: Send + Sync {
    /// Issue `GET url?query` with a bearer token
    ///
    /// Returns `Err` only when no HTTP response was received.
    async fn get(
        &self,
        url: &str,
        query: &[(String, String)],
        bearer_token: &str,
    ) -> InventoryResult<RawResponse>;
}

/// Production transport backed by `reqwest`
pub struct ReqwestTransport {
    client: Client,
}

impl ReqwestTransport {
    pub fn new(timeout: Duration) -> InventoryResult<Self> {
        let client = Client::builder()
            .timeout(timeout)
            .default_headers({
                let mut headers = reqwest::header::HeaderMap::new();
                headers.insert(
                    "Accept",
                    "application/json".parse().map_err(|e| {
                        InventoryError::Configuration(format!("Invalid header: {}", e))
                    })?,
                );
                headers
            })
            .build()
            .map_err(|e| {
                InventoryError::Configuration(format!("Failed to create HTTP client: {}", e))
            })?;

        Ok(Self { client })
    }
}

#[async_trait]
impl HttpTransport for ReqwestTransport {
    async fn get(
        &self,
        url: &str,
        query: &[(String, String)],
        bearer_token: &str,
    ) -> InventoryResult<RawResponse> {
        let response = self
            .client
            .get(url)
            .query(query)
            .bearer_auth(bearer_token)
            .send()
            .await?;

        let status = response.status().as_u16();
        let retry_after = response
            .headers()
            .get(RETRY_AFTER)
            .and_then(|value| value.to_str().ok())
            .and_then(parse_retry_after);
        let body = response.text().await?;

        debug!("GET {} -> {}", url, status);
        Ok(RawResponse {
            status,
            retry_after,
            body,
        })
    }
}

/// Parse a `Retry-After` header given in delta-seconds
///
/// HTTP-date values are ignored and the caller falls back to its own backoff.
pub fn parse_retry_after(value: &str) -> Option<Duration> {
    value.trim().parse::<u64>().ok().map(Duration::from_secs)
}

// Copyright (c) 2025 - Cowboy AI, Inc.
//! Fabric REST API client
//!
//! Every list endpoint of the Fabric API returns a page of records under a
//! per-endpoint key plus an optional `continuationToken`. [`FabricClient::fetch_all`]
//! turns that into a lazy stream of records:
//!
//! ```text
//! GET /v1/admin/workspaces?capacityId=..                       -> page 1 + token A
//! GET /v1/admin/workspaces?capacityId=..&continuationToken=A   -> page 2 + token B
//! GET /v1/admin/workspaces?capacityId=..&continuationToken=B   -> page 3, no token
//! ```
//!
//! Requests are issued one at a time; the next page is only requested once
//! the consumer has drained the current one.

use futures::stream::{self, Stream, StreamExt, TryStreamExt};
use serde::de::DeserializeOwned;
use serde::{Deserialize, Serialize};
use serde_json::Value;
use std::sync::Arc;
use std::time::Duration;
use tracing::{debug, warn};

use super::auth::TokenProvider;
use super::retry::RetryPolicy;
use super::transport::{HttpTransport, ReqwestTransport};
use crate::errors::{InventoryError, InventoryResult};

/// Query parameter and response field carrying the page cursor
pub const CONTINUATION_TOKEN: &str = "continuationToken";

/// Connection settings for the Fabric API
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ApiConfig {
    #[serde(default = "default_base_url")]
    pub base_url: String,

    /// Request timeout in seconds
    #[serde(default = "default_timeout")]
    pub timeout_secs: u64,

    #[serde(default)]
    pub retry: RetryPolicy,
}

fn default_base_url() -> String {
    "https://api.fabric.microsoft.com".to_string()
}

fn default_timeout() -> u64 {
    30
}

impl Default for ApiConfig {
    fn default() -> Self {
        Self {
            base_url: default_base_url(),
            timeout_secs: default_timeout(),
            retry: RetryPolicy::default(),
        }
    }
}

/// A paginated list endpoint
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Endpoint {
    /// Path below the base URL, starting with `/`
    pub path: String,
    /// Response field holding the page's records
    pub records_key: &'static str,
}

impl Endpoint {
    pub fn new(path: impl Into<String>, records_key: &'static str) -> Self {
        Self {
            path: path.into(),
            records_key,
        }
    }

    /// `GET /v1/capacities`
    pub fn capacities() -> Self {
        Self::new("/v1/capacities", "value")
    }

    /// `GET /v1/admin/workspaces`, filtered with `capacityId`
    pub fn admin_workspaces() -> Self {
        Self::new("/v1/admin/workspaces", "workspaces")
    }

    /// `GET /v1/admin/items`, filtered with `workspaceId`
    pub fn admin_items() -> Self {
        Self::new("/v1/admin/items", "itemEntities")
    }

    /// `GET /v1/workspaces/{id}/items`
    pub fn workspace_items(workspace_id: &str) -> Self {
        Self::new(
            format!("/v1/workspaces/{}/items", urlencoding::encode(workspace_id)),
            "value",
        )
    }

    /// `GET /v1/workspaces/{id}/items/{id}/jobs/instances`
    pub fn job_instances(workspace_id: &str, item_id: &str) -> Self {
        Self::new(
            format!(
                "/v1/workspaces/{}/items/{}/jobs/instances",
                urlencoding::encode(workspace_id),
                urlencoding::encode(item_id)
            ),
            "value",
        )
    }
}

/// One decoded page
#[derive(Debug, Clone, PartialEq)]
pub struct Page {
    pub records: Vec<Value>,
    pub continuation_token: Option<String>,
}

impl Page {
    /// Decode a page body; a missing records field is an empty page
    pub fn parse(body: &str, records_key: &str) -> InventoryResult<Self> {
        let mut json: Value = serde_json::from_str(body)?;

        let records = match json.get_mut(records_key).map(Value::take) {
            Some(Value::Array(records)) => records,
            Some(Value::Null) | None => Vec::new(),
            Some(other) => {
                return Err(InventoryError::Decode(format!(
                    "expected array under '{}', found {}",
                    records_key, other
                )))
            }
        };

        let continuation_token = json
            .get(CONTINUATION_TOKEN)
            .and_then(Value::as_str)
            .filter(|token| !token.is_empty())
            .map(str::to_string);

        Ok(Self {
            records,
            continuation_token,
        })
    }
}

enum Cursor {
    Start,
    Next(String),
    Done,
}

/// Authenticated, rate-limit aware Fabric API client
pub struct FabricClient {
    base_url: String,
    retry: RetryPolicy,
    transport: Arc<dyn HttpTransport>,
    tokens: Arc<dyn TokenProvider>,
}

impl FabricClient {
    /// Create a client using the `reqwest` transport
    pub fn new(config: &ApiConfig, tokens: Arc<dyn TokenProvider>) -> InventoryResult<Self> {
        let transport = ReqwestTransport::new(Duration::from_secs(config.timeout_secs))?;
        Ok(Self::with_transport(config, Arc::new(transport), tokens))
    }

    pub fn with_transport(
        config: &ApiConfig,
        transport: Arc<dyn HttpTransport>,
        tokens: Arc<dyn TokenProvider>,
    ) -> Self {
        Self {
            base_url: config.base_url.trim_end_matches('/').to_string(),
            retry: config.retry,
            transport,
            tokens,
        }
    }

    pub fn retry_policy(&self) -> &RetryPolicy {
        &self.retry
    }

    fn url(&self, path: &str) -> String {
        format!("{}{}", self.base_url, path)
    }

    /// GET a single JSON document
    pub async fn get_json(&self, path: &str, params: &[(String, String)]) -> InventoryResult<Value> {
        let body = self.get_with_retry(&self.url(path), params).await?;
        Ok(serde_json::from_str(&body)?)
    }

    /// Stream every record of a paginated endpoint
    ///
    /// The stream ends after the first page without a continuation token,
    /// or after the first error.
    pub fn fetch_all<'a>(
        &'a self,
        endpoint: Endpoint,
        params: Vec<(String, String)>,
    ) -> impl Stream<Item = InventoryResult<Value>> + 'a {
        stream::try_unfold(Cursor::Start, move |cursor| {
            let endpoint = endpoint.clone();
            let params = params.clone();
            async move {
                let previous = match cursor {
                    Cursor::Done => return Ok(None),
                    Cursor::Start => None,
                    Cursor::Next(token) => Some(token),
                };

                let page = self
                    .fetch_page(&endpoint, &params, previous.as_deref())
                    .await?;

                let next = match page.continuation_token {
                    Some(token) if previous.as_deref() == Some(token.as_str()) => {
                        return Err(InventoryError::Decode(format!(
                            "{} repeated continuation token",
                            endpoint.path
                        )))
                    }
                    Some(token) => Cursor::Next(token),
                    None => Cursor::Done,
                };

                let records = stream::iter(page.records.into_iter().map(Ok::<_, InventoryError>));
                Ok(Some((records, next)))
            }
        })
        .try_flatten()
    }

    /// Stream every record of a paginated endpoint, decoded as `T`
    pub fn fetch_all_as<'a, T>(
        &'a self,
        endpoint: Endpoint,
        params: Vec<(String, String)>,
    ) -> impl Stream<Item = InventoryResult<T>> + 'a
    where
        T: DeserializeOwned + 'a,
    {
        self.fetch_all(endpoint, params).map(|record| {
            record.and_then(|value| serde_json::from_value(value).map_err(InventoryError::from))
        })
    }

    /// Collect every record of a paginated endpoint
    pub async fn collect_all<'a, T>(
        &'a self,
        endpoint: Endpoint,
        params: Vec<(String, String)>,
    ) -> InventoryResult<Vec<T>>
    where
        T: DeserializeOwned + 'a,
    {
        self.fetch_all_as(endpoint, params).try_collect().await
    }

    async fn fetch_page(
        &self,
        endpoint: &Endpoint,
        params: &[(String, String)],
        continuation_token: Option<&str>,
    ) -> InventoryResult<Page> {
        let mut query = params.to_vec();
        if let Some(token) = continuation_token {
            query.push((CONTINUATION_TOKEN.to_string(), token.to_string()));
        }

        let body = self.get_with_retry(&self.url(&endpoint.path), &query).await?;
        let page = Page::parse(&body, endpoint.records_key)?;
        debug!(
            "{}: {} records, more pages: {}",
            endpoint.path,
            page.records.len(),
            page.continuation_token.is_some()
        );
        Ok(page)
    }

    async fn get_with_retry(&self, url: &str, query: &[(String, String)]) -> InventoryResult<String> {
        let token = self.tokens.token().await?;
        let mut retries = 0u32;

        loop {
            let response = self.transport.get(url, query, &token).await?;

            if response.is_success() {
                return Ok(response.body);
            }

            if !response.is_rate_limited() {
                return Err(InventoryError::Request {
                    status: response.status,
                    body: response.body,
                });
            }

            if retries >= self.retry.max_retries {
                return Err(InventoryError::Transient {
                    status: response.status,
                    attempts: retries + 1,
                });
            }

            let delay = self.retry.delay_for(retries, response.retry_after);
            retries += 1;
            warn!(
                "Rate limited on {} (retry {}/{}), backing off {:?}",
                url, retries, self.retry.max_retries, delay
            );
            tokio::time::sleep(delay).await;
        }
    }
}

// Copyright (c) 2025 - Cowboy AI, Inc.
//! Test Fixtures for fabric-inventory
//!
//! Provides a scripted HTTP transport and deterministic API payloads.
//! All ids and timestamps are fixed constants so tests are reproducible.

#![allow(dead_code)]

use async_trait::async_trait;
use chrono::{DateTime, Utc};
use serde_json::{json, Value};
use std::collections::{HashMap, VecDeque};
use std::sync::{Arc, Mutex};
use tokio::time::Instant;

use fabric_inventory::api::{ApiConfig, FabricClient, HttpTransport, RawResponse, RetryPolicy, StaticToken};
use fabric_inventory::errors::InventoryResult;

pub const BASE_URL: &str = "https://fabric.test";
pub const TOKEN: &str = "test-token";

pub const CAPACITY_WEST: &str = "cap-west-01";
pub const CAPACITY_EAST: &str = "cap-east-01";
pub const WORKSPACE_SALES: &str = "ws-sales";
pub const WORKSPACE_ML: &str = "ws-ml";
pub const WORKSPACE_ETL: &str = "ws-etl";

// Fixed test timestamp (2026-01-19T12:00:00Z)
pub const FIXED_TIMESTAMP: &str = "2026-01-19T12:00:00Z";

pub fn fixed_timestamp() -> DateTime<Utc> {
    DateTime::parse_from_rfc3339(FIXED_TIMESTAMP)
        .expect("Invalid timestamp in test fixture")
        .with_timezone(&Utc)
}

/// A request as seen by the transport
#[derive(Debug, Clone)]
pub struct RecordedRequest {
    /// Path plus query, e.g. `/v1/admin/items?workspaceId=ws-1`
    pub key: String,
    pub token: String,
    pub at: Instant,
}

/// Transport answering from per-route response queues
///
/// Unscripted routes, and routes whose queue is exhausted, answer 404.
#[derive(Default)]
pub struct ScriptedTransport {
    routes: Mutex<HashMap<String, VecDeque<RawResponse>>>,
    requests: Mutex<Vec<RecordedRequest>>,
}

impl ScriptedTransport {
    pub fn new() -> Arc<Self> {
        Arc::new(Self::default())
    }

    /// Queue a response for `key` (path plus query in request order)
    pub fn on(&self, key: &str, response: RawResponse) -> &Self {
        self.routes
            .lock()
            .unwrap()
            .entry(key.to_string())
            .or_default()
            .push_back(response);
        self
    }

    /// Queue a 200 response with a JSON body
    pub fn ok(&self, key: &str, body: Value) -> &Self {
        self.on(key, RawResponse::new(200, body.to_string()))
    }

    pub fn requests(&self) -> Vec<RecordedRequest> {
        self.requests.lock().unwrap().clone()
    }

    pub fn request_keys(&self) -> Vec<String> {
        self.requests().into_iter().map(|r| r.key).collect()
    }
}

fn request_key(url: &str, query: &[(String, String)]) -> String {
    let path = url.strip_prefix(BASE_URL).unwrap_or(url);
    if query.is_empty() {
        return path.to_string();
    }
    let query: Vec<String> = query.iter().map(|(k, v)| format!("{}={}", k, v)).collect();
    format!("{}?{}", path, query.join("&"))
}

#[async_trait]
impl HttpTransport for ScriptedTransport {
    async fn get(
        &self,
        url: &str,
        query: &[(String, String)],
        bearer_token: &str,
    ) -> InventoryResult<RawResponse> {
        let key = request_key(url, query);
        self.requests.lock().unwrap().push(RecordedRequest {
            key: key.clone(),
            token: bearer_token.to_string(),
            at: Instant::now(),
        });

        let response = self
            .routes
            .lock()
            .unwrap()
            .get_mut(&key)
            .and_then(VecDeque::pop_front)
            .unwrap_or_else(|| RawResponse::new(404, format!("no scripted response for {}", key)));
        Ok(response)
    }
}

/// Retry policy with short delays
pub fn fast_retry() -> RetryPolicy {
    RetryPolicy {
        max_retries: 3,
        base_delay_ms: 100,
        max_delay_ms: 10_000,
        honor_retry_after: true,
    }
}

pub fn client(transport: Arc<ScriptedTransport>) -> FabricClient {
    client_with_retry(transport, fast_retry())
}

pub fn client_with_retry(transport: Arc<ScriptedTransport>, retry: RetryPolicy) -> FabricClient {
    let config = ApiConfig {
        base_url: BASE_URL.to_string(),
        timeout_secs: 5,
        retry,
    };
    FabricClient::with_transport(&config, transport, Arc::new(StaticToken::new(TOKEN)))
}

pub fn capacity_json(id: &str, name: &str, region: &str, sku: &str) -> Value {
    json!({
        "id": id,
        "displayName": name,
        "sku": sku,
        "region": region,
        "state": "Active"
    })
}

pub fn workspace_json(id: &str, name: &str, capacity_id: &str) -> Value {
    json!({
        "id": id,
        "name": name,
        "type": "Workspace",
        "state": "Active",
        "capacityId": capacity_id
    })
}

pub fn item_json(id: &str, name: &str, item_type: &str, workspace_id: &str) -> Value {
    json!({
        "id": id,
        "type": item_type,
        "name": name,
        "state": "Active",
        "workspaceId": workspace_id
    })
}

/// Script a tenant with two capacities; only the West US one holds workspaces
///
/// - `ws-sales`: Report, SemanticModel (admin items, two pages)
/// - `ws-ml`: Lakehouse, Warehouse, MLModel (admin API forbidden, fallback)
/// - `ws-etl`: DataPipeline, Notebook
pub fn script_tenant(transport: &ScriptedTransport) {
    transport.ok(
        "/v1/capacities",
        json!({
            "value": [
                capacity_json(CAPACITY_WEST, "FabCap-WestUS-01", "West US", "F64"),
                capacity_json(CAPACITY_EAST, "FabCap-EastUS2-01", "East US 2", "F64"),
            ]
        }),
    );

    transport.ok(
        &format!("/v1/admin/workspaces?capacityId={}", CAPACITY_WEST),
        json!({
            "workspaces": [
                workspace_json(WORKSPACE_SALES, "Sales Workspace", CAPACITY_WEST),
                workspace_json(WORKSPACE_ML, "ML Workspace", CAPACITY_WEST),
            ],
            "continuationToken": "ws-page-2"
        }),
    );
    transport.ok(
        &format!(
            "/v1/admin/workspaces?capacityId={}&continuationToken=ws-page-2",
            CAPACITY_WEST
        ),
        json!({
            "workspaces": [workspace_json(WORKSPACE_ETL, "ETL Workspace", CAPACITY_WEST)]
        }),
    );

    transport.ok(
        &format!("/v1/admin/items?workspaceId={}", WORKSPACE_SALES),
        json!({
            "itemEntities": [item_json("i-report", "Sales Report", "Report", WORKSPACE_SALES)],
            "continuationToken": "items-2"
        }),
    );
    transport.ok(
        &format!(
            "/v1/admin/items?workspaceId={}&continuationToken=items-2",
            WORKSPACE_SALES
        ),
        json!({
            "itemEntities": [item_json("i-model", "Sales Model", "SemanticModel", WORKSPACE_SALES)],
            "continuationToken": ""
        }),
    );

    transport.on(
        &format!("/v1/admin/items?workspaceId={}", WORKSPACE_ML),
        RawResponse::new(403, r#"{"errorCode":"InsufficientPrivileges"}"#),
    );
    transport.ok(
        &format!("/v1/workspaces/{}/items", WORKSPACE_ML),
        json!({
            "value": [
                {"id": "i-lake", "type": "Lakehouse", "displayName": "ML Lakehouse", "workspaceId": WORKSPACE_ML},
                {"id": "i-dw", "type": "Warehouse", "displayName": "ML Warehouse", "workspaceId": WORKSPACE_ML},
                {"id": "i-mlm", "type": "MLModel", "displayName": "Churn Model", "workspaceId": WORKSPACE_ML}
            ]
        }),
    );

    transport.ok(
        &format!("/v1/admin/items?workspaceId={}", WORKSPACE_ETL),
        json!({
            "itemEntities": [
                item_json("i-pipe", "Ingest Pipeline", "DataPipeline", WORKSPACE_ETL),
                item_json("i-nb", "Transform Notebook", "Notebook", WORKSPACE_ETL),
            ]
        }),
    );
}

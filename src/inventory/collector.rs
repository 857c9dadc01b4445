// Copyright (c) 2025 - Cowboy AI, Inc.
//! Inventory collection
//!
//! Walks capacities → workspaces → items one request at a time:
//!
//! ```text
//! GET /v1/capacities                            (filtered by Scope)
//!  └─ GET /v1/admin/workspaces?capacityId=..
//!      └─ GET /v1/admin/items?workspaceId=..     (primary)
//!         GET /v1/workspaces/{id}/items          (fallback on 401/403/404)
//! ```

use chrono::{DateTime, Utc};
use serde::Deserialize;
use tracing::{debug, info, warn};

use super::fallback::{with_fallback, FallbackCondition, Source};
use super::{CollectedWorkspace, Inventory, Scope};
use crate::api::{Endpoint, FabricClient};
use crate::domain::{Capacity, Item, Workspace};
use crate::errors::InventoryResult;

/// Workspace as returned by the admin API
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct WorkspaceRecord {
    pub id: String,
    #[serde(default)]
    pub name: Option<String>,
    #[serde(default)]
    pub display_name: Option<String>,
    #[serde(default)]
    pub capacity_id: Option<String>,
    #[serde(default)]
    pub state: Option<String>,
}

impl WorkspaceRecord {
    pub fn label(&self) -> &str {
        self.display_name
            .as_deref()
            .or(self.name.as_deref())
            .unwrap_or(&self.id)
    }

    pub fn is_deleted(&self) -> bool {
        self.state
            .as_deref()
            .is_some_and(|state| state.eq_ignore_ascii_case("deleted"))
    }
}

/// Item as returned by either item endpoint
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ItemRecord {
    pub id: String,
    #[serde(rename = "type", default)]
    pub item_type: String,
    #[serde(default)]
    pub name: Option<String>,
    #[serde(default)]
    pub display_name: Option<String>,
}

impl From<ItemRecord> for Item {
    fn from(record: ItemRecord) -> Self {
        let name = record
            .display_name
            .or(record.name)
            .unwrap_or_else(|| record.id.clone());
        Item::new(record.id, name, record.item_type)
    }
}

/// Collects an [`Inventory`] for one [`Scope`]
pub struct InventoryCollector<'a> {
    client: &'a FabricClient,
    scope: Scope,
}

impl<'a> InventoryCollector<'a> {
    pub fn new(client: &'a FabricClient, scope: Scope) -> Self {
        Self { client, scope }
    }

    pub async fn collect(&self) -> InventoryResult<Inventory> {
        self.collect_at(Utc::now()).await
    }

    /// Collect, stamping the inventory with `collected_at`
    pub async fn collect_at(&self, collected_at: DateTime<Utc>) -> InventoryResult<Inventory> {
        info!("Collecting inventory for scope {}", self.scope);

        let capacities = self.capacities().await?;
        info!("{} capacities in scope", capacities.len());

        let mut workspaces = Vec::new();
        for capacity in &capacities {
            let records = self.workspaces(capacity).await?;
            info!(
                "Capacity {} ({}, {}): {} workspaces",
                capacity.display_name,
                capacity.sku,
                capacity.region,
                records.len()
            );

            for record in records {
                workspaces.push(self.collect_workspace(capacity, record).await?);
            }
        }

        let fallback_count = workspaces
            .iter()
            .filter(|ws| ws.item_source == Source::Fallback)
            .count();
        if fallback_count > 0 {
            warn!("{} workspaces listed through the fallback item source", fallback_count);
        }

        Ok(Inventory {
            collected_at,
            scope: self.scope.clone(),
            capacities,
            workspaces,
        })
    }

    async fn capacities(&self) -> InventoryResult<Vec<Capacity>> {
        let all: Vec<Capacity> = self
            .client
            .collect_all(Endpoint::capacities(), Vec::new())
            .await?;

        Ok(all
            .into_iter()
            .filter(|capacity| self.scope.includes(capacity))
            .collect())
    }

    async fn workspaces(&self, capacity: &Capacity) -> InventoryResult<Vec<WorkspaceRecord>> {
        let records: Vec<WorkspaceRecord> = self
            .client
            .collect_all(
                Endpoint::admin_workspaces(),
                vec![("capacityId".to_string(), capacity.id.clone())],
            )
            .await?;

        Ok(records
            .into_iter()
            .filter(|record| {
                let keep = !record.is_deleted()
                    && record
                        .capacity_id
                        .as_deref()
                        .map_or(true, |id| id.eq_ignore_ascii_case(&capacity.id));
                if !keep {
                    debug!("Skipping workspace {} ({:?})", record.id, record.state);
                }
                keep
            })
            .collect())
    }

    async fn collect_workspace(
        &self,
        capacity: &Capacity,
        record: WorkspaceRecord,
    ) -> InventoryResult<CollectedWorkspace> {
        let workspace_id = record.id.clone();

        let items = with_fallback(
            FallbackCondition::AccessDenied,
            || {
                self.client.collect_all::<ItemRecord>(
                    Endpoint::admin_items(),
                    vec![("workspaceId".to_string(), workspace_id.clone())],
                )
            },
            || {
                self.client
                    .collect_all::<ItemRecord>(Endpoint::workspace_items(&workspace_id), Vec::new())
            },
        )
        .await?;

        let mut workspace = Workspace::new(record.id.clone(), record.label(), capacity.id.clone());
        for item in items.value {
            let item_id = item.id.clone();
            if !workspace.add_item(Item::from(item)) {
                debug!("Duplicate item {} in workspace {}", item_id, workspace.id);
            }
        }

        debug!(
            "Workspace {}: {} items from {} source",
            workspace.display_name,
            workspace.item_count(),
            items.source
        );

        Ok(CollectedWorkspace {
            workspace,
            item_source: items.source,
        })
    }
}

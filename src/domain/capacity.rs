// Copyright (c) 2025 - Cowboy AI, Inc.
//! Capacity, workspace and item entities
//!
//! Entities are snapshots of one inventory run. A [`Workspace`] owns its
//! items and stamps its own id onto every item it accepts, so an item can
//! never point at a workspace other than the one holding it.

use serde::{Deserialize, Serialize};

use super::ItemType;

/// Provisioned compute/billing unit hosting workspaces
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Capacity {
    pub id: String,
    #[serde(default)]
    pub display_name: String,
    #[serde(default)]
    pub region: String,
    #[serde(default)]
    pub sku: String,
    #[serde(default)]
    pub state: String,
}

impl Capacity {
    /// Whether the capacity is in the given region (case-insensitive, ignoring spaces)
    pub fn is_in_region(&self, region: &str) -> bool {
        normalize_region(&self.region) == normalize_region(region)
    }

    pub fn is_active(&self) -> bool {
        self.state.eq_ignore_ascii_case("active")
    }
}

fn normalize_region(region: &str) -> String {
    region
        .chars()
        .filter(|c| !c.is_whitespace())
        .collect::<String>()
        .to_lowercase()
}

/// Unit of work or data asset within a workspace
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Item {
    pub id: String,
    pub display_name: String,
    pub item_type: ItemType,
    /// Parent workspace; assigned by [`Workspace::add_item`]
    pub workspace_id: String,
}

impl Item {
    pub fn new(
        id: impl Into<String>,
        display_name: impl Into<String>,
        item_type: impl Into<ItemType>,
    ) -> Self {
        Self {
            id: id.into(),
            display_name: display_name.into(),
            item_type: item_type.into(),
            workspace_id: String::new(),
        }
    }
}

/// Logical container of items within a capacity
///
/// Deserialized values pass through [`Workspace::add_item`], so stored
/// workspaces obey the same item invariants as ones built in code.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(try_from = "WorkspaceData")]
pub struct Workspace {
    pub id: String,
    pub display_name: String,
    pub capacity_id: String,
    items: Vec<Item>,
}

/// Unchecked serialized form of [`Workspace`]
#[derive(Deserialize)]
struct WorkspaceData {
    id: String,
    display_name: String,
    capacity_id: String,
    #[serde(default)]
    items: Vec<Item>,
}

impl TryFrom<WorkspaceData> for Workspace {
    type Error = String;

    fn try_from(data: WorkspaceData) -> Result<Self, Self::Error> {
        let mut workspace = Workspace::new(data.id, data.display_name, data.capacity_id);
        for item in data.items {
            let item_id = item.id.clone();
            if !workspace.add_item(item) {
                return Err(format!(
                    "duplicate item {} in workspace {}",
                    item_id, workspace.id
                ));
            }
        }
        Ok(workspace)
    }
}

impl Workspace {
    pub fn new(
        id: impl Into<String>,
        display_name: impl Into<String>,
        capacity_id: impl Into<String>,
    ) -> Self {
        Self {
            id: id.into(),
            display_name: display_name.into(),
            capacity_id: capacity_id.into(),
            items: Vec::new(),
        }
    }

    /// Add an item, taking ownership of its parent link
    ///
    /// Returns `false` and leaves the workspace unchanged when an item with
    /// the same id is already present.
    pub fn add_item(&mut self, mut item: Item) -> bool {
        if self.items.iter().any(|existing| existing.id == item.id) {
            return false;
        }
        item.workspace_id = self.id.clone();
        self.items.push(item);
        true
    }

    /// Builder-style variant of [`Workspace::add_item`]
    pub fn with_items(mut self, items: impl IntoIterator<Item = Item>) -> Self {
        for item in items {
            self.add_item(item);
        }
        self
    }

    pub fn items(&self) -> &[Item] {
        &self.items
    }

    pub fn item_count(&self) -> usize {
        self.items.len()
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }
}

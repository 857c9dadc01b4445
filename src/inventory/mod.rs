// Copyright (c) 2025 - Cowboy AI, Inc.

//! Inventory collection from the Fabric API
//!
//! - [`InventoryCollector`] - capacities, workspaces and items for a [`Scope`]
//! - [`with_fallback`] - tagged primary/fallback reads
//! - [`JobHistoryAnalyzer`] - run-duration percentiles over a lookback window

pub mod collector;
pub mod fallback;
pub mod job_history;

pub use collector::{InventoryCollector, ItemRecord, WorkspaceRecord};
pub use fallback::{with_fallback, FallbackCondition, Source, Sourced};
pub use job_history::{
    percentile, summarize, JobHistoryAnalyzer, JobHistoryConfig, JobRun, JobRunStats, JobStatus,
};

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

use crate::domain::{Capacity, Workspace};
use crate::errors::InventoryError;

/// Which capacities an inventory run covers
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub enum Scope {
    /// Every capacity visible to the caller
    #[default]
    All,
    /// A single capacity by id
    Capacity(String),
    /// Every capacity in a region, e.g. `West US`
    Region(String),
}

impl Scope {
    pub fn includes(&self, capacity: &Capacity) -> bool {
        match self {
            Self::All => true,
            Self::Capacity(id) => capacity.id.eq_ignore_ascii_case(id),
            Self::Region(region) => capacity.is_in_region(region),
        }
    }
}

impl FromStr for Scope {
    type Err = InventoryError;

    /// Parse `all`, `capacity:<id>` or `region:<name>`
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let s = s.trim();
        if s.eq_ignore_ascii_case("all") || s.is_empty() {
            return Ok(Self::All);
        }

        match s.split_once(':') {
            Some((kind, value)) if !value.trim().is_empty() => {
                let value = value.trim().to_string();
                match kind.trim().to_lowercase().as_str() {
                    "capacity" => Ok(Self::Capacity(value)),
                    "region" => Ok(Self::Region(value)),
                    other => Err(InventoryError::Configuration(format!(
                        "unknown scope kind '{}', expected 'capacity' or 'region'",
                        other
                    ))),
                }
            }
            _ => Err(InventoryError::Configuration(format!(
                "invalid scope '{}', expected all, capacity:<id> or region:<name>",
                s
            ))),
        }
    }
}

impl TryFrom<String> for Scope {
    type Error = InventoryError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        value.parse()
    }
}

impl From<Scope> for String {
    fn from(scope: Scope) -> Self {
        scope.to_string()
    }
}

impl fmt::Display for Scope {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::All => write!(f, "all"),
            Self::Capacity(id) => write!(f, "capacity:{}", id),
            Self::Region(region) => write!(f, "region:{}", region),
        }
    }
}

/// Workspace with the source its items were read from
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CollectedWorkspace {
    pub workspace: Workspace,
    pub item_source: Source,
}

/// Snapshot of one collection run
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Inventory {
    pub collected_at: DateTime<Utc>,
    pub scope: Scope,
    pub capacities: Vec<Capacity>,
    pub workspaces: Vec<CollectedWorkspace>,
}

impl Inventory {
    pub fn item_count(&self) -> usize {
        self.workspaces.iter().map(|ws| ws.workspace.item_count()).sum()
    }

    pub fn workspaces(&self) -> impl Iterator<Item = &Workspace> {
        self.workspaces.iter().map(|collected| &collected.workspace)
    }
}

// Copyright (c) 2025 - Cowboy AI, Inc.
//! Migration Planner
//!
//! Folds a collected [`Inventory`] into a [`MigrationPlan`]. Every workspace
//! is classified independently: the fold accumulates results but nothing
//! computed for one workspace influences the next.
//!
//! ```text
//! Inventory ──> classify items ──> score workspace ──> assign waves ──> MigrationPlan
//! ```

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use super::classifier::{classify_item, ClassificationWarning};
use super::scorer::{score, ComplexityThresholds};
use super::wave::{assign_wave, workspace_wave};
use crate::domain::{Capacity, Complexity, Item, Movability, Wave, Workspace};
use crate::inventory::{CollectedWorkspace, Inventory, Source};

/// Inputs to planning that are not part of the inventory
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct PlanningConfig {
    #[serde(default)]
    pub thresholds: ComplexityThresholds,
    /// Workspaces with at least this many items are flagged for review
    #[serde(default = "default_flag_item_count")]
    pub flag_item_count: usize,
}

fn default_flag_item_count() -> usize {
    100
}

impl Default for PlanningConfig {
    fn default() -> Self {
        Self {
            thresholds: ComplexityThresholds::default(),
            flag_item_count: default_flag_item_count(),
        }
    }
}

/// Item with its derived labels
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ClassifiedItem {
    pub item: Item,
    pub movability: Movability,
    pub wave: Wave,
    /// False when the movability is the fallback for an unrecognized type
    pub recognized: bool,
}

/// Workspace with its computed complexity and wave
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ClassifiedWorkspace {
    pub workspace: Workspace,
    pub item_source: Source,
    pub complexity: Complexity,
    pub wave: Wave,
    pub items: Vec<ClassifiedItem>,
    pub flagged: bool,
}

impl ClassifiedWorkspace {
    pub fn non_movable_count(&self) -> usize {
        self.items
            .iter()
            .filter(|item| !item.movability.is_movable())
            .count()
    }

    /// Fraction of items that move with the workspace; 1.0 when empty
    pub fn movable_share(&self) -> f64 {
        if self.items.is_empty() {
            return 1.0;
        }
        let movable = self.items.len() - self.non_movable_count();
        movable as f64 / self.items.len() as f64
    }
}

/// Per-wave totals
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct WaveSummary {
    pub wave: Wave,
    pub workspace_count: usize,
    pub item_count: usize,
    /// Fraction of all items assigned to this wave
    pub item_share: f64,
}

/// Result of planning one inventory
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MigrationPlan {
    pub generated_at: DateTime<Utc>,
    /// Region the workspaces are moving to, when known
    pub target_region: Option<String>,
    pub capacities: Vec<Capacity>,
    pub workspaces: Vec<ClassifiedWorkspace>,
    pub warnings: Vec<ClassificationWarning>,
}

impl MigrationPlan {
    pub fn with_target_region(mut self, target_region: Option<String>) -> Self {
        self.target_region = target_region;
        self
    }

    pub fn item_count(&self) -> usize {
        self.workspaces.iter().map(|ws| ws.items.len()).sum()
    }

    pub fn capacity(&self, capacity_id: &str) -> Option<&Capacity> {
        self.capacities.iter().find(|c| c.id == capacity_id)
    }

    /// Totals for every wave, in wave order, including empty waves
    pub fn wave_summary(&self) -> Vec<WaveSummary> {
        let total_items = self.item_count();

        Wave::ALL
            .iter()
            .map(|&wave| {
                let workspace_count = self.workspaces.iter().filter(|ws| ws.wave == wave).count();
                let item_count = self
                    .workspaces
                    .iter()
                    .flat_map(|ws| ws.items.iter())
                    .filter(|item| item.wave == wave)
                    .count();
                let item_share = if total_items == 0 {
                    0.0
                } else {
                    item_count as f64 / total_items as f64
                };

                WaveSummary {
                    wave,
                    workspace_count,
                    item_count,
                    item_share,
                }
            })
            .collect()
    }
}

/// Classify one workspace
pub fn classify_workspace(
    workspace: &Workspace,
    item_source: Source,
    config: &PlanningConfig,
) -> (ClassifiedWorkspace, Vec<ClassificationWarning>) {
    let complexity = score(
        workspace.items().iter().map(|item| &item.item_type),
        &config.thresholds,
    );

    let mut warnings = Vec::new();
    let items: Vec<ClassifiedItem> = workspace
        .items()
        .iter()
        .map(|item| {
            let (movability, warning) = classify_item(item);
            let recognized = warning.is_none();
            warnings.extend(warning);
            ClassifiedItem {
                item: item.clone(),
                movability,
                wave: assign_wave(movability, complexity),
                recognized,
            }
        })
        .collect();

    let wave = workspace_wave(items.iter().map(|item| item.wave));
    let classified = ClassifiedWorkspace {
        workspace: workspace.clone(),
        item_source,
        complexity,
        wave,
        flagged: workspace.item_count() >= config.flag_item_count,
        items,
    };

    (classified, warnings)
}

/// Plan a whole inventory
pub fn plan(inventory: &Inventory, config: &PlanningConfig) -> MigrationPlan {
    let (workspaces, warnings) = inventory.workspaces.iter().fold(
        (Vec::new(), Vec::new()),
        |(mut workspaces, mut warnings), collected: &CollectedWorkspace| {
            let (classified, mut found) =
                classify_workspace(&collected.workspace, collected.item_source, config);
            workspaces.push(classified);
            warnings.append(&mut found);
            (workspaces, warnings)
        },
    );

    MigrationPlan {
        generated_at: inventory.collected_at,
        target_region: None,
        capacities: inventory.capacities.clone(),
        workspaces,
        warnings,
    }
}

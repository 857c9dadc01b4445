// Copyright (c) 2025 - Cowboy AI, Inc.
//! Complexity Scorer
//!
//! A workspace's complexity is the highest of two labels:
//!
//! - a count label from the number of items and [`ComplexityThresholds`]
//! - a type floor: the highest [`type_floor`] among its items
//!
//! Both parts only grow as items are added, so scoring is monotone.

use serde::{Deserialize, Serialize};

use super::classifier::classify;
use crate::domain::{Complexity, ItemType, Movability};

/// Item-count cutoffs for the count label
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct ComplexityThresholds {
    /// Item count at which a workspace is at least Medium
    #[serde(default = "default_medium_item_count")]
    pub medium_item_count: usize,
    /// Item count at which a workspace is High
    #[serde(default = "default_high_item_count")]
    pub high_item_count: usize,
}

fn default_medium_item_count() -> usize {
    15
}

fn default_high_item_count() -> usize {
    50
}

impl Default for ComplexityThresholds {
    fn default() -> Self {
        Self {
            medium_item_count: default_medium_item_count(),
            high_item_count: default_high_item_count(),
        }
    }
}

impl ComplexityThresholds {
    pub fn count_label(&self, item_count: usize) -> Complexity {
        if item_count >= self.high_item_count {
            Complexity::High
        } else if item_count >= self.medium_item_count {
            Complexity::Medium
        } else {
            Complexity::Low
        }
    }
}

/// Minimum complexity a single item of this type imposes on its workspace
///
/// Types on the recreate path carry cross-item dependencies (connections,
/// activities referencing other items) and force High. Every other
/// non-movable type forces Medium.
pub fn type_floor(item_type: &ItemType) -> Complexity {
    match item_type {
        ItemType::DataPipeline | ItemType::Dataflow | ItemType::Eventstream => Complexity::High,
        other => match classify(other) {
            Movability::NonMovable => Complexity::Medium,
            Movability::Movable => Complexity::Low,
        },
    }
}

/// Score a workspace's item composition
pub fn score<'a, I>(item_types: I, thresholds: &ComplexityThresholds) -> Complexity
where
    I: IntoIterator<Item = &'a ItemType>,
{
    let (count, floor) = item_types
        .into_iter()
        .fold((0usize, Complexity::Low), |(count, floor), item_type| {
            (count + 1, floor.max(type_floor(item_type)))
        });

    thresholds.count_label(count).max(floor)
}

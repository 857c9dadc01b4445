// Copyright (c) 2025 - Cowboy AI, Inc.
//! Item Classifier
//!
//! Pure lookup of an item type's movability. Items that cannot follow their
//! workspace to a capacity in another region are listed in
//! [`NON_MOVABLE_TYPES`]; unrecognized types fall back to
//! [`Movability::NonMovable`] and yield a [`ClassificationWarning`].

use serde::{Deserialize, Serialize};
use tracing::warn;

use crate::domain::{Item, ItemType, Movability};

/// Item types that block cross-region workspace reassignment
pub const NON_MOVABLE_TYPES: [ItemType; 12] = [
    ItemType::DataPipeline,
    ItemType::Dataflow,
    ItemType::Eventhouse,
    ItemType::KQLDatabase,
    ItemType::KQLQueryset,
    ItemType::KQLDashboard,
    ItemType::Eventstream,
    ItemType::MLModel,
    ItemType::MLExperiment,
    ItemType::MirroredDatabase,
    ItemType::CopyJob,
    ItemType::Reflex,
];

/// Movability assigned to types outside the known taxonomy
pub const UNRECOGNIZED_DEFAULT: Movability = Movability::NonMovable;

/// An item was classified with the fallback label
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ClassificationWarning {
    pub workspace_id: String,
    pub item_id: String,
    pub item_type: String,
    pub assigned: Movability,
}

impl std::fmt::Display for ClassificationWarning {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "unrecognized item type '{}' for item {} in workspace {}, classified as {}",
            self.item_type, self.item_id, self.workspace_id, self.assigned
        )
    }
}

/// Classify an item type
pub fn classify(item_type: &ItemType) -> Movability {
    if !item_type.is_recognized() {
        return UNRECOGNIZED_DEFAULT;
    }
    if NON_MOVABLE_TYPES.contains(item_type) {
        Movability::NonMovable
    } else {
        Movability::Movable
    }
}

/// Classify an item, producing a warning when its type is unrecognized
pub fn classify_item(item: &Item) -> (Movability, Option<ClassificationWarning>) {
    let movability = classify(&item.item_type);
    if item.item_type.is_recognized() {
        return (movability, None);
    }

    let warning = ClassificationWarning {
        workspace_id: item.workspace_id.clone(),
        item_id: item.id.clone(),
        item_type: item.item_type.as_str().to_string(),
        assigned: movability,
    };
    warn!("{}", warning);
    (movability, Some(warning))
}

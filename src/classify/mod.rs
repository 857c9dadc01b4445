// Copyright (c) 2025 - Cowboy AI, Inc.
//! Pure Migration Classification
//!
//! All functions in this module are pure: labels depend only on item types
//! and workspace composition.
//!
//! - [`classify`] - item type → [`Movability`](crate::domain::Movability)
//! - [`score`] - item composition → [`Complexity`](crate::domain::Complexity)
//! - [`assign_wave`] - movability + complexity → [`Wave`](crate::domain::Wave)
//! - [`plan`] - whole inventory → [`MigrationPlan`]

pub mod classifier;
pub mod plan;
pub mod scorer;
pub mod wave;

pub use classifier::{classify, classify_item, ClassificationWarning, NON_MOVABLE_TYPES};
pub use plan::{
    classify_workspace, plan, ClassifiedItem, ClassifiedWorkspace, MigrationPlan,
    PlanningConfig, WaveSummary,
};
pub use scorer::{score, type_floor, ComplexityThresholds};
pub use wave::{assign_wave, workspace_wave};

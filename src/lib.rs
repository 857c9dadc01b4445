// Copyright (c) 2025 - Cowboy AI, Inc.
//! Capacity inventory and migration-wave planning for Microsoft Fabric
//!
//! This crate reads capacities, workspaces and items from the Fabric admin
//! REST API, labels every item as movable or not, scores each workspace's
//! migration complexity, assigns migration waves, and exports CSV reports.

pub mod api;
pub mod classify;
pub mod config;
pub mod domain;
pub mod errors;
pub mod inventory;
pub mod report;
pub mod runner;

// Re-export commonly used types
pub use api::{ApiConfig, FabricClient, RetryPolicy};
pub use classify::{assign_wave, classify, plan, score, MigrationPlan};
pub use config::InventoryConfig;
pub use domain::{Capacity, Complexity, Item, ItemType, Movability, Wave, Workspace};
pub use errors::{InventoryError, InventoryResult};
pub use inventory::{Inventory, InventoryCollector, Scope};
pub use runner::{run, RunSummary};

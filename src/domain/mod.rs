// Copyright (c) 2025 - Cowboy AI, Inc.
//! Inventory Domain Models
//!
//! Core concepts for a Fabric capacity migration inventory.
//!
//! # Entities
//!
//! - [`Capacity`] - Provisioned compute unit in a region
//! - [`Workspace`] - Container of items, owned by exactly one capacity
//! - [`Item`] - Data asset or unit of work, owned by exactly one workspace
//!
//! # Value Objects
//!
//! - [`ItemType`] - Fabric item taxonomy
//! - [`Movability`], [`Complexity`], [`Wave`] - Migration labels

pub mod capacity;
pub mod item_type;
pub mod migration;

pub use capacity::{Capacity, Item, Workspace};
pub use item_type::{ItemCategory, ItemType};
pub use migration::{Complexity, Movability, Wave};

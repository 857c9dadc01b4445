// Copyright (c) 2025 - Cowboy AI, Inc.
//! Migration labels: movability, complexity and wave

use serde::{Deserialize, Serialize};
use std::fmt;

/// Whether an item can be reassigned to another capacity without recreation
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Movability {
    /// Moves with its workspace
    Movable,
    /// Must be copied or recreated in the target region
    NonMovable,
}

impl Movability {
    pub fn is_movable(&self) -> bool {
        matches!(self, Self::Movable)
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Movable => "Movable",
            Self::NonMovable => "NonMovable",
        }
    }
}

impl fmt::Display for Movability {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Migration complexity of a workspace
///
/// Ordered so that `Low < Medium < High`; scoring combines labels with `max`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub enum Complexity {
    Low,
    Medium,
    High,
}

impl Complexity {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Low => "Low",
            Self::Medium => "Medium",
            Self::High => "High",
        }
    }
}

impl fmt::Display for Complexity {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Ordered migration batch
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(into = "u8", try_from = "u8")]
pub enum Wave {
    /// Movable items: reassign the workspace
    One,
    /// Non-movable items on the data-copy path
    Two,
    /// Non-movable items that must be recreated
    Three,
}

impl Wave {
    pub const ALL: [Wave; 3] = [Self::One, Self::Two, Self::Three];

    pub fn number(&self) -> u8 {
        match self {
            Self::One => 1,
            Self::Two => 2,
            Self::Three => 3,
        }
    }

    /// Migration phase this wave is executed in
    pub fn phase_name(&self) -> &'static str {
        match self {
            Self::One => "Wave 1 - Low Complexity",
            Self::Two => "Wave 2 - Medium Complexity",
            Self::Three => "Wave 3 - High Complexity",
        }
    }

    /// Short description of the migration path taken
    pub fn migration_path(&self) -> &'static str {
        match self {
            Self::One => "Reassign workspace",
            Self::Two => "Copy data to target",
            Self::Three => "Recreate in target",
        }
    }
}

impl From<Wave> for u8 {
    fn from(wave: Wave) -> Self {
        wave.number()
    }
}

impl TryFrom<u8> for Wave {
    type Error = String;

    fn try_from(value: u8) -> Result<Self, Self::Error> {
        match value {
            1 => Ok(Self::One),
            2 => Ok(Self::Two),
            3 => Ok(Self::Three),
            other => Err(format!("wave must be 1, 2 or 3, got {}", other)),
        }
    }
}

impl fmt::Display for Wave {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.number())
    }
}

// Copyright (c) 2025 - Cowboy AI, Inc.
//! Tabular report representation

use serde::{Deserialize, Serialize};
use std::fmt;

/// Report types, one output file each
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum ReportKind {
    Capacities,
    Workspaces,
    Items,
    Waves,
    ValidationChecklist,
    JobStats,
}

impl ReportKind {
    /// File name stem
    pub fn file_stem(&self) -> &'static str {
        match self {
            Self::Capacities => "capacities",
            Self::Workspaces => "workspaces",
            Self::Items => "items",
            Self::Waves => "waves",
            Self::ValidationChecklist => "validation_checklist",
            Self::JobStats => "job_stats",
        }
    }
}

impl fmt::Display for ReportKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.file_stem())
    }
}

/// Header row plus data rows with a fixed column order
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Table {
    pub kind: ReportKind,
    pub headers: Vec<&'static str>,
    pub rows: Vec<Vec<String>>,
}

impl Table {
    pub fn new(kind: ReportKind, headers: &[&'static str]) -> Self {
        Self {
            kind,
            headers: headers.to_vec(),
            rows: Vec::new(),
        }
    }

    /// Append a row; panics in debug builds if the width does not match the header
    pub fn push(&mut self, row: Vec<String>) {
        debug_assert_eq!(row.len(), self.headers.len(), "{} row width", self.kind);
        self.rows.push(row);
    }

    pub fn len(&self) -> usize {
        self.rows.len()
    }

    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }

    /// Values of one column, by header name
    pub fn column(&self, header: &str) -> Option<Vec<&str>> {
        let index = self.headers.iter().position(|h| *h == header)?;
        Some(self.rows.iter().map(|row| row[index].as_str()).collect())
    }
}

/// Fraction with two decimals, e.g. `0.67`
pub fn fraction(value: f64) -> String {
    format!("{:.2}", value)
}

/// Seconds with one decimal; empty when unknown
pub fn seconds(value: Option<f64>) -> String {
    value.map(|v| format!("{:.1}", v)).unwrap_or_default()
}

pub fn yes_no(value: bool) -> String {
    let label = if value { "Yes" } else { "No" };
    label.to_string()
}

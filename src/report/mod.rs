// Copyright (c) 2025 - Cowboy AI, Inc.

//! Report export
//!
//! Plans are flattened into [`Table`]s by the builders in [`reports`] and
//! handed to a [`ReportSink`].

pub mod checklist;
pub mod reports;
pub mod sink;
pub mod table;

pub use checklist::{
    validation_checklist_table, ValidationStep, CHECKLIST_COLUMNS, VALIDATION_STEPS,
};
pub use reports::{
    capacities_table, export, items_table, job_stats_table, waves_table, workspaces_table,
    CAPACITY_COLUMNS, ITEM_COLUMNS, JOB_STATS_COLUMNS, WAVE_COLUMNS, WORKSPACE_COLUMNS,
};
pub use sink::{write_all, write_csv, CsvDirectorySink, MemorySink, ReportSink};
pub use table::{ReportKind, Table};

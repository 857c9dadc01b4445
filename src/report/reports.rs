// Copyright (c) 2025 - Cowboy AI, Inc.
//! Report builders
//!
//! Each builder flattens a [`MigrationPlan`] (or job statistics) into a
//! [`Table`]. Rows follow plan order: capacities as listed by the API,
//! workspaces in collection order, items in workspace order.

use super::checklist::validation_checklist_table;
use super::table::{fraction, seconds, yes_no, ReportKind, Table};
use crate::classify::{ClassifiedWorkspace, MigrationPlan};
use crate::domain::Capacity;
use crate::inventory::JobRunStats;

pub const CAPACITY_COLUMNS: [&str; 7] = [
    "capacity_id",
    "capacity_name",
    "region",
    "sku",
    "state",
    "workspace_count",
    "item_count",
];

pub const WORKSPACE_COLUMNS: [&str; 15] = [
    "capacity_id",
    "capacity_name",
    "source_region",
    "target_region",
    "sku",
    "workspace_id",
    "workspace_name",
    "item_count",
    "non_movable_count",
    "movable_share",
    "complexity",
    "wave",
    "phase",
    "item_source",
    "flagged",
];

pub const ITEM_COLUMNS: [&str; 16] = [
    "capacity_id",
    "capacity_name",
    "source_region",
    "target_region",
    "workspace_id",
    "workspace_name",
    "item_id",
    "item_name",
    "item_type",
    "category",
    "movable",
    "recognized_type",
    "workspace_complexity",
    "wave",
    "migration_path",
    "item_source",
];

pub const WAVE_COLUMNS: [&str; 6] = [
    "wave",
    "phase",
    "migration_path",
    "workspace_count",
    "item_count",
    "item_share",
];

pub const JOB_STATS_COLUMNS: [&str; 11] = [
    "workspace_id",
    "item_id",
    "item_name",
    "item_type",
    "history_available",
    "runs",
    "failed",
    "p50_secs",
    "p95_secs",
    "failure_rate",
    "flagged",
];

fn capacity_fields<'a>(
    plan: &'a MigrationPlan,
    workspace: &ClassifiedWorkspace,
) -> Option<&'a Capacity> {
    plan.capacity(&workspace.workspace.capacity_id)
}

fn target_region(plan: &MigrationPlan) -> String {
    plan.target_region.clone().unwrap_or_default()
}

pub fn capacities_table(plan: &MigrationPlan) -> Table {
    let mut table = Table::new(ReportKind::Capacities, &CAPACITY_COLUMNS);

    for capacity in &plan.capacities {
        let workspaces: Vec<&ClassifiedWorkspace> = plan
            .workspaces
            .iter()
            .filter(|ws| ws.workspace.capacity_id == capacity.id)
            .collect();
        let item_count: usize = workspaces.iter().map(|ws| ws.items.len()).sum();

        table.push(vec![
            capacity.id.clone(),
            capacity.display_name.clone(),
            capacity.region.clone(),
            capacity.sku.clone(),
            capacity.state.clone(),
            workspaces.len().to_string(),
            item_count.to_string(),
        ]);
    }

    table
}

pub fn workspaces_table(plan: &MigrationPlan) -> Table {
    let mut table = Table::new(ReportKind::Workspaces, &WORKSPACE_COLUMNS);

    for ws in &plan.workspaces {
        let capacity = capacity_fields(plan, ws);
        table.push(vec![
            ws.workspace.capacity_id.clone(),
            capacity.map(|c| c.display_name.clone()).unwrap_or_default(),
            capacity.map(|c| c.region.clone()).unwrap_or_default(),
            target_region(plan),
            capacity.map(|c| c.sku.clone()).unwrap_or_default(),
            ws.workspace.id.clone(),
            ws.workspace.display_name.clone(),
            ws.items.len().to_string(),
            ws.non_movable_count().to_string(),
            fraction(ws.movable_share()),
            ws.complexity.to_string(),
            ws.wave.to_string(),
            ws.wave.phase_name().to_string(),
            ws.item_source.to_string(),
            yes_no(ws.flagged),
        ]);
    }

    table
}

pub fn items_table(plan: &MigrationPlan) -> Table {
    let mut table = Table::new(ReportKind::Items, &ITEM_COLUMNS);

    for ws in &plan.workspaces {
        let capacity = capacity_fields(plan, ws);
        for classified in &ws.items {
            let item = &classified.item;
            table.push(vec![
                ws.workspace.capacity_id.clone(),
                capacity.map(|c| c.display_name.clone()).unwrap_or_default(),
                capacity.map(|c| c.region.clone()).unwrap_or_default(),
                target_region(plan),
                ws.workspace.id.clone(),
                ws.workspace.display_name.clone(),
                item.id.clone(),
                item.display_name.clone(),
                item.item_type.to_string(),
                item.item_type.category().to_string(),
                yes_no(classified.movability.is_movable()),
                yes_no(classified.recognized),
                ws.complexity.to_string(),
                classified.wave.to_string(),
                classified.wave.migration_path().to_string(),
                ws.item_source.to_string(),
            ]);
        }
    }

    table
}

pub fn waves_table(plan: &MigrationPlan) -> Table {
    let mut table = Table::new(ReportKind::Waves, &WAVE_COLUMNS);

    for summary in plan.wave_summary() {
        table.push(vec![
            summary.wave.to_string(),
            summary.wave.phase_name().to_string(),
            summary.wave.migration_path().to_string(),
            summary.workspace_count.to_string(),
            summary.item_count.to_string(),
            fraction(summary.item_share),
        ]);
    }

    table
}

pub fn job_stats_table(stats: &[JobRunStats]) -> Table {
    let mut table = Table::new(ReportKind::JobStats, &JOB_STATS_COLUMNS);

    for s in stats {
        table.push(vec![
            s.workspace_id.clone(),
            s.item_id.clone(),
            s.item_name.clone(),
            s.item_type.to_string(),
            yes_no(s.history_available),
            s.runs.to_string(),
            s.failed.to_string(),
            seconds(s.p50_secs),
            seconds(s.p95_secs),
            fraction(s.failure_rate),
            yes_no(s.flagged),
        ]);
    }

    table
}

/// Every plan report, in output order
pub fn export(plan: &MigrationPlan) -> Vec<Table> {
    vec![
        capacities_table(plan),
        workspaces_table(plan),
        items_table(plan),
        waves_table(plan),
        validation_checklist_table(plan),
    ]
}

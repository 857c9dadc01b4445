// Copyright (c) 2025 - Cowboy AI, Inc.
//! Post-migration validation checklist
//!
//! Every workspace gets the checks of the wave it migrates in, followed by
//! the capacity-wide checks once per run. Result columns are left empty for
//! whoever signs off the migration.

use super::table::{ReportKind, Table};
use crate::classify::MigrationPlan;
use crate::domain::Wave;

pub const CHECKLIST_COLUMNS: [&str; 10] = [
    "wave",
    "workspace_id",
    "workspace_name",
    "validation_step",
    "expected_result",
    "actual_result",
    "pass_fail",
    "validated_by",
    "validated_on",
    "notes",
];

/// One check; `wave` is `None` for checks that apply to the whole migration
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ValidationStep {
    pub wave: Option<Wave>,
    pub step: &'static str,
    pub expected: &'static str,
}

const fn step(wave: Option<Wave>, step: &'static str, expected: &'static str) -> ValidationStep {
    ValidationStep {
        wave,
        step,
        expected,
    }
}

pub static VALIDATION_STEPS: [ValidationStep; 15] = [
    step(Some(Wave::One), "Reports render correctly", "All visuals load without error"),
    step(
        Some(Wave::One),
        "Semantic model refresh succeeds",
        "Refresh completes < 2x baseline duration",
    ),
    step(Some(Wave::One), "Dashboard tiles load", "All tiles display data"),
    step(
        Some(Wave::One),
        "Data gateway connectivity",
        "On-prem data sources accessible",
    ),
    step(
        Some(Wave::Two),
        "Lakehouse row counts match source",
        "Row count delta = 0",
    ),
    step(
        Some(Wave::Two),
        "Warehouse query results match",
        "Checksum/hash comparison passes",
    ),
    step(Some(Wave::Two), "SQL endpoint accessible", "Queries execute successfully"),
    step(
        Some(Wave::Two),
        "Semantic models connect to new lakehouse",
        "No connection errors",
    ),
    step(Some(Wave::Three), "Notebooks execute without error", "All cells pass"),
    step(
        Some(Wave::Three),
        "Data pipelines run end-to-end",
        "Pipeline succeeds with expected output",
    ),
    step(
        Some(Wave::Three),
        "Eventhouse ingestion active",
        "Events streaming into KQL database",
    ),
    step(
        Some(Wave::Three),
        "Spark jobs complete on schedule",
        "Job duration within 2x baseline",
    ),
    step(
        Some(Wave::Three),
        "Databricks connections functional",
        "Fabric pipeline invokes Databricks successfully",
    ),
    step(None, "Capacity utilization within thresholds", "CU% < 80% sustained"),
    step(None, "No orphaned items in source region", "Source capacity empty"),
];

fn steps_for(wave: Option<Wave>) -> impl Iterator<Item = &'static ValidationStep> {
    VALIDATION_STEPS.iter().filter(move |s| s.wave == wave)
}

fn row(wave: &str, workspace_id: &str, workspace_name: &str, step: &ValidationStep) -> Vec<String> {
    let mut row = vec![
        wave.to_string(),
        workspace_id.to_string(),
        workspace_name.to_string(),
        step.step.to_string(),
        step.expected.to_string(),
    ];
    row.resize(CHECKLIST_COLUMNS.len(), String::new());
    row
}

/// Checklist rows in wave order, then workspace order
pub fn validation_checklist_table(plan: &MigrationPlan) -> Table {
    let mut table = Table::new(ReportKind::ValidationChecklist, &CHECKLIST_COLUMNS);

    for wave in Wave::ALL {
        for ws in plan.workspaces.iter().filter(|ws| ws.wave == wave) {
            for step in steps_for(Some(wave)) {
                table.push(row(
                    &wave.to_string(),
                    &ws.workspace.id,
                    &ws.workspace.display_name,
                    step,
                ));
            }
        }
    }

    for step in steps_for(None) {
        table.push(row("All", "", "ALL", step));
    }

    table
}

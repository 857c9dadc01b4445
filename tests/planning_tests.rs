// Copyright (c) 2025 - Cowboy AI, Inc.
//! Migration Planning and Report Tests
//!
//! Builds inventories in memory, plans them, and checks the exported
//! tables column by column.

mod fixtures;

use fabric_inventory::classify::{
    assign_wave, classify, plan, score, ComplexityThresholds, PlanningConfig,
};
use fabric_inventory::domain::{Capacity, Complexity, Item, ItemType, Movability, Wave, Workspace};
use fabric_inventory::inventory::{CollectedWorkspace, Inventory, Scope, Source};
use fabric_inventory::report::{
    export, validation_checklist_table, write_csv, ReportKind, CAPACITY_COLUMNS, CHECKLIST_COLUMNS,
    ITEM_COLUMNS, WAVE_COLUMNS, WORKSPACE_COLUMNS,
};
use fixtures::fixed_timestamp;
use pretty_assertions::assert_eq;
use test_case::test_case;

fn capacity() -> Capacity {
    serde_json::from_value(serde_json::json!({
        "id": "cap-1",
        "displayName": "FabCap-WestUS-01",
        "region": "West US",
        "sku": "F64",
        "state": "Active"
    }))
    .unwrap()
}

fn workspace(id: &str, name: &str, items: &[(&str, &str, &str)]) -> CollectedWorkspace {
    let workspace = Workspace::new(id, name, "cap-1").with_items(
        items
            .iter()
            .map(|(item_id, item_name, item_type)| Item::new(*item_id, *item_name, *item_type)),
    );
    CollectedWorkspace {
        workspace,
        item_source: Source::Primary,
    }
}

fn inventory(workspaces: Vec<CollectedWorkspace>) -> Inventory {
    Inventory {
        collected_at: fixed_timestamp(),
        scope: Scope::All,
        capacities: vec![capacity()],
        workspaces,
    }
}

// ============================================================================
// Classification
// ============================================================================

#[test_case("Report", Movability::Movable)]
#[test_case("SemanticModel", Movability::Movable)]
#[test_case("Lakehouse", Movability::Movable)]
#[test_case("Warehouse", Movability::Movable)]
#[test_case("Notebook", Movability::Movable)]
#[test_case("DataPipeline", Movability::NonMovable)]
#[test_case("Dataflow", Movability::NonMovable)]
#[test_case("Eventstream", Movability::NonMovable)]
#[test_case("MLModel", Movability::NonMovable)]
#[test_case("KQLDatabase", Movability::NonMovable)]
#[test_case("HolographicCube", Movability::NonMovable ; "unrecognized type")]
fn test_classify_api_type_names(api_name: &str, expected: Movability) {
    assert_eq!(classify(&ItemType::from_api_name(api_name)), expected);
}

#[test_case(&["Report", "SemanticModel"], Complexity::Low ; "movable only")]
#[test_case(&["Lakehouse", "MLModel"], Complexity::Medium ; "non movable item")]
#[test_case(&["Report", "DataPipeline"], Complexity::High ; "pipeline")]
#[test_case(&["Report", "Eventstream"], Complexity::High ; "eventstream")]
fn test_score_composition(types: &[&str], expected: Complexity) {
    let types: Vec<ItemType> = types.iter().map(|t| ItemType::from_api_name(t)).collect();
    assert_eq!(score(&types, &ComplexityThresholds::default()), expected);
}

#[test_case(14, Complexity::Low)]
#[test_case(15, Complexity::Medium)]
#[test_case(49, Complexity::Medium)]
#[test_case(50, Complexity::High)]
fn test_score_item_count_boundaries(count: usize, expected: Complexity) {
    let types = vec![ItemType::Report; count];
    assert_eq!(score(&types, &ComplexityThresholds::default()), expected);
}

#[test]
fn test_three_item_workspace_scenario() {
    let inventory = inventory(vec![workspace(
        "ws-1",
        "Analytics",
        &[
            ("i-1", "Sales Lakehouse", "Lakehouse"),
            ("i-2", "Sales Warehouse", "Warehouse"),
            ("i-3", "Churn Model", "MLModel"),
        ],
    )]);

    let plan = plan(&inventory, &PlanningConfig::default());
    let ws = &plan.workspaces[0];

    let movability: Vec<Movability> = ws.items.iter().map(|i| i.movability).collect();
    assert_eq!(
        movability,
        vec![Movability::Movable, Movability::Movable, Movability::NonMovable]
    );
    assert_eq!(ws.complexity, Complexity::Medium);

    let waves: Vec<Wave> = ws.items.iter().map(|i| i.wave).collect();
    assert_eq!(waves, vec![Wave::One, Wave::One, Wave::Two]);
    assert_eq!(ws.wave, Wave::Two);
    assert_eq!(
        assign_wave(Movability::NonMovable, Complexity::Medium),
        Wave::Two
    );
}

#[test]
fn test_unrecognized_types_produce_warnings() {
    let inventory = inventory(vec![workspace(
        "ws-1",
        "Analytics",
        &[("i-1", "Lake", "Lakehouse"), ("i-2", "Mystery", "QuantumLedger")],
    )]);

    let plan = plan(&inventory, &PlanningConfig::default());

    assert_eq!(plan.warnings.len(), 1);
    assert_eq!(plan.warnings[0].item_id, "i-2");
    assert_eq!(plan.warnings[0].workspace_id, "ws-1");
    assert_eq!(plan.warnings[0].assigned, Movability::NonMovable);
    assert!(!plan.workspaces[0].items[1].recognized);
    assert_eq!(plan.workspaces[0].complexity, Complexity::Medium);
}

#[test]
fn test_empty_workspace_is_wave_one() {
    let plan = plan(&inventory(vec![workspace("ws-empty", "Empty", &[])]), &PlanningConfig::default());

    let ws = &plan.workspaces[0];
    assert_eq!(ws.complexity, Complexity::Low);
    assert_eq!(ws.wave, Wave::One);
    assert_eq!(ws.movable_share(), 1.0);
}

#[test]
fn test_large_workspace_is_flagged() {
    let items: Vec<(String, String)> = (0..12)
        .map(|i| (format!("i-{}", i), format!("Report {}", i)))
        .collect();
    let refs: Vec<(&str, &str, &str)> = items
        .iter()
        .map(|(id, name)| (id.as_str(), name.as_str(), "Report"))
        .collect();
    let config = PlanningConfig {
        flag_item_count: 10,
        ..PlanningConfig::default()
    };

    let plan = plan(&inventory(vec![workspace("ws-big", "Big", &refs)]), &config);

    assert!(plan.workspaces[0].flagged);
}

// ============================================================================
// Reports
// ============================================================================

fn sample_plan() -> fabric_inventory::MigrationPlan {
    plan(
        &inventory(vec![
            workspace(
                "ws-1",
                "Sales",
                &[("i-1", "Sales Report", "Report"), ("i-2", "Sales, EMEA", "SemanticModel")],
            ),
            workspace(
                "ws-2",
                "ETL",
                &[("i-3", "Ingest", "DataPipeline"), ("i-4", "Staging", "Lakehouse")],
            ),
        ]),
        &PlanningConfig::default(),
    )
}

#[test]
fn test_export_report_order_and_headers() {
    let tables = export(&sample_plan());

    let kinds: Vec<ReportKind> = tables.iter().map(|t| t.kind).collect();
    assert_eq!(
        kinds,
        vec![
            ReportKind::Capacities,
            ReportKind::Workspaces,
            ReportKind::Items,
            ReportKind::Waves,
            ReportKind::ValidationChecklist
        ]
    );
    assert_eq!(tables[0].headers, CAPACITY_COLUMNS.to_vec());
    assert_eq!(tables[1].headers, WORKSPACE_COLUMNS.to_vec());
    assert_eq!(tables[2].headers, ITEM_COLUMNS.to_vec());
    assert_eq!(tables[3].headers, WAVE_COLUMNS.to_vec());
    assert_eq!(tables[4].headers, CHECKLIST_COLUMNS.to_vec());
}

#[test]
fn test_capacity_report_totals() {
    let tables = export(&sample_plan());
    let capacities = &tables[0];

    assert_eq!(capacities.column("workspace_count"), Some(vec!["2"]));
    assert_eq!(capacities.column("item_count"), Some(vec!["4"]));
    assert_eq!(capacities.column("region"), Some(vec!["West US"]));
}

#[test]
fn test_item_report_columns() {
    let tables = export(&sample_plan());
    let items = &tables[2];

    assert_eq!(items.column("item_id"), Some(vec!["i-1", "i-2", "i-3", "i-4"]));
    assert_eq!(items.column("movable"), Some(vec!["Yes", "Yes", "No", "Yes"]));
    assert_eq!(items.column("wave"), Some(vec!["1", "1", "3", "1"]));
    assert_eq!(
        items.column("workspace_complexity"),
        Some(vec!["Low", "Low", "High", "High"])
    );
    assert_eq!(items.column("item_source"), Some(vec!["primary"; 4]));
}

#[test]
fn test_wave_report_lists_every_wave() {
    let tables = export(&sample_plan());
    let waves = &tables[3];

    assert_eq!(waves.column("wave"), Some(vec!["1", "2", "3"]));
    assert_eq!(waves.column("workspace_count"), Some(vec!["1", "0", "1"]));
    assert_eq!(waves.column("item_count"), Some(vec!["3", "0", "1"]));
    assert_eq!(waves.column("item_share"), Some(vec!["0.75", "0.00", "0.25"]));
    assert_eq!(
        waves.column("phase"),
        Some(vec![
            "Wave 1 - Low Complexity",
            "Wave 2 - Medium Complexity",
            "Wave 3 - High Complexity"
        ])
    );
}

#[test]
fn test_csv_quotes_embedded_commas() {
    let tables = export(&sample_plan());
    let mut buffer = Vec::new();
    write_csv(&tables[2], &mut buffer).unwrap();

    let csv = String::from_utf8(buffer).unwrap();
    let lines: Vec<&str> = csv.lines().collect();
    assert_eq!(lines.len(), 5);
    assert!(lines[0].starts_with("capacity_id,capacity_name,source_region,target_region,workspace_id"));
    assert!(lines[2].contains(",\"Sales, EMEA\",SemanticModel,"));
}

#[test]
fn test_target_region_column() {
    let tables = export(&sample_plan());
    assert_eq!(tables[1].column("target_region"), Some(vec!["", ""]));
    assert_eq!(tables[1].column("source_region"), Some(vec!["West US", "West US"]));

    let tables = export(&sample_plan().with_target_region(Some("East US 2".to_string())));
    assert_eq!(tables[1].column("target_region"), Some(vec!["East US 2", "East US 2"]));
    assert_eq!(tables[2].column("target_region"), Some(vec!["East US 2"; 4]));
}

#[test]
fn test_validation_checklist_follows_workspace_waves() {
    let checklist = validation_checklist_table(&sample_plan());

    // ws-1 is Wave 1 (4 checks), ws-2 is Wave 3 (5 checks), then 2 migration-wide checks
    assert_eq!(checklist.rows.len(), 11);

    let waves = checklist.column("wave").unwrap();
    assert_eq!(&waves[..4], &["1"; 4]);
    assert_eq!(&waves[4..9], &["3"; 5]);
    assert_eq!(&waves[9..], &["All"; 2]);

    let workspaces = checklist.column("workspace_id").unwrap();
    assert!(workspaces[..4].iter().all(|id| *id == "ws-1"));
    assert!(workspaces[4..9].iter().all(|id| *id == "ws-2"));
    assert_eq!(&workspaces[9..], &["", ""]);

    let steps = checklist.column("validation_step").unwrap();
    assert_eq!(steps[0], "Reports render correctly");
    assert_eq!(steps[4], "Notebooks execute without error");
    assert_eq!(steps[10], "No orphaned items in source region");

    assert!(checklist
        .column("pass_fail")
        .unwrap()
        .iter()
        .all(|cell| cell.is_empty()));
}

#[test]
fn test_validation_checklist_without_workspaces() {
    let checklist = validation_checklist_table(&plan(&inventory(Vec::new()), &PlanningConfig::default()));

    assert_eq!(checklist.column("wave"), Some(vec!["All", "All"]));
}

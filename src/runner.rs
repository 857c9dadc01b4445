// Copyright (c) 2025 - Cowboy AI, Inc.
//! End-to-end inventory run
//!
//! ```text
//! collect ──> plan ──> job history (optional) ──> export (skipped on dry run)
//! ```

use chrono::{DateTime, Utc};
use std::path::PathBuf;
use tracing::{info, warn};

use crate::api::FabricClient;
use crate::classify::{plan, MigrationPlan};
use crate::config::InventoryConfig;
use crate::errors::InventoryResult;
use crate::inventory::{InventoryCollector, JobHistoryAnalyzer, JobRunStats};
use crate::report::{export, job_stats_table, write_all, CsvDirectorySink, MemorySink, Table};

/// Outcome of one run
#[derive(Debug, Clone)]
pub struct RunSummary {
    pub plan: MigrationPlan,
    pub job_stats: Vec<JobRunStats>,
    pub tables: Vec<Table>,
    /// Files written; empty on a dry run
    pub files: Vec<PathBuf>,
}

/// Collect, classify and export using `client`
pub async fn run(config: &InventoryConfig, client: &FabricClient) -> InventoryResult<RunSummary> {
    run_at(config, client, Utc::now()).await
}

/// [`run`] with an explicit clock, for reproducible output names and lookback windows
pub async fn run_at(
    config: &InventoryConfig,
    client: &FabricClient,
    now: DateTime<Utc>,
) -> InventoryResult<RunSummary> {
    let inventory = InventoryCollector::new(client, config.scope.clone())
        .collect_at(now)
        .await?;

    let plan =
        plan(&inventory, &config.planning).with_target_region(config.target_region.clone());
    for summary in plan.wave_summary() {
        info!(
            "{}: {} workspaces, {} items",
            summary.wave.phase_name(),
            summary.workspace_count,
            summary.item_count
        );
    }
    if !plan.warnings.is_empty() {
        warn!(
            "{} items have unrecognized types and were classified as non-movable",
            plan.warnings.len()
        );
    }

    let job_stats = if config.collect_job_history {
        JobHistoryAnalyzer::new(client, config.job_history)
            .analyze(inventory.workspaces(), now)
            .await?
    } else {
        Vec::new()
    };

    let mut tables = export(&plan);
    if config.collect_job_history {
        tables.push(job_stats_table(&job_stats));
    }

    let files = if config.dry_run {
        let mut sink = MemorySink::default();
        write_all(&mut sink, &tables)?;
        info!("Dry run: {} reports prepared, nothing written", sink.tables.len());
        Vec::new()
    } else {
        let mut sink = CsvDirectorySink::new(&config.output_dir, plan.generated_at)?;
        write_all(&mut sink, &tables)?;
        sink.written().to_vec()
    };

    Ok(RunSummary {
        plan,
        job_stats,
        tables,
        files,
    })
}

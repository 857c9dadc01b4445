// Copyright (c) 2025 - Cowboy AI, Inc.
//! Fabric Capacity Inventory
//!
//! Inventories Fabric capacities, workspaces and items, assigns migration
//! waves, and writes CSV reports.
//!
//! Run with: cargo run --bin fabric-inventory -- --scope "region:West US"
//!
//! Prerequisites:
//! 1. A Fabric admin bearer token in `FABRIC_TOKEN` (or the variable named by
//!    `--token-env`), e.g. from
//!    `az account get-access-token --resource https://api.fabric.microsoft.com`
//! 2. Optional `FABRIC_*` settings, see `fabric_inventory::config`

use anyhow::{Context, Result};
use clap::Parser;
use fabric_inventory::{
    api::{EnvToken, FabricClient},
    config::InventoryConfig,
    inventory::Scope,
    runner,
};
use std::path::PathBuf;
use std::sync::Arc;
use tracing::info;

/// Command-line overrides; unset flags keep the environment/default value
#[derive(Debug, Parser)]
#[command(name = "fabric-inventory", version, about)]
struct Cli {
    /// Capacities to inventory: all, capacity:<id> or region:<name>
    #[arg(long)]
    scope: Option<Scope>,

    /// Collect and classify without writing reports
    #[arg(long)]
    dry_run: bool,

    /// Region the capacities are migrating to
    #[arg(long)]
    target_region: Option<String>,

    /// Directory for CSV reports
    #[arg(long)]
    output_dir: Option<PathBuf>,

    /// Environment variable holding the bearer token
    #[arg(long)]
    token_env: Option<String>,

    /// Also analyze job run history
    #[arg(long)]
    job_history: bool,

    /// Job history lookback window in days
    #[arg(long)]
    lookback_days: Option<u32>,

    /// Item count at which a workspace is at least Medium complexity
    #[arg(long)]
    medium_item_count: Option<usize>,

    /// Item count at which a workspace is High complexity
    #[arg(long)]
    high_item_count: Option<usize>,
}

impl Cli {
    fn apply(self, mut config: InventoryConfig) -> Result<InventoryConfig> {
        if let Some(scope) = self.scope {
            config.scope = scope;
        }
        config.dry_run |= self.dry_run;
        config.collect_job_history |= self.job_history;
        if let Some(region) = self.target_region {
            config.target_region = Some(region);
        }
        if let Some(dir) = self.output_dir {
            config.output_dir = dir;
        }
        if let Some(var) = self.token_env {
            config.token_env_var = var;
        }
        if let Some(days) = self.lookback_days {
            config.job_history.lookback_days = days;
        }
        if let Some(count) = self.medium_item_count {
            config.planning.thresholds.medium_item_count = count;
        }
        if let Some(count) = self.high_item_count {
            config.planning.thresholds.high_item_count = count;
        }

        config.validate().context("Invalid configuration")?;
        Ok(config)
    }
}

#[tokio::main]
async fn main() -> Result<()> {
    // Initialize tracing
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::from_default_env()
                .add_directive(tracing::Level::INFO.into()),
        )
        .init();

    let cli = Cli::parse();
    let config = cli.apply(InventoryConfig::from_env().context("Failed to load configuration")?)?;

    info!("Starting Fabric capacity inventory");
    info!("  - API: {}", config.api.base_url);
    info!("  - Scope: {}", config.scope);
    if let Some(region) = &config.target_region {
        info!("  - Target region: {}", region);
    }
    info!("  - Dry run: {}", config.dry_run);
    if config.collect_job_history {
        info!("  - Job history lookback: {} days", config.job_history.lookback_days);
    }

    let tokens = Arc::new(EnvToken::new(config.token_env_var.clone()));
    let client = FabricClient::new(&config.api, tokens).context("Failed to create API client")?;

    let summary = runner::run(&config, &client)
        .await
        .context("Inventory run failed")?;

    info!(
        "Classified {} workspaces with {} items across {} capacities",
        summary.plan.workspaces.len(),
        summary.plan.item_count(),
        summary.plan.capacities.len()
    );
    if !summary.files.is_empty() {
        info!("Reports written:");
    }
    for file in &summary.files {
        info!("  - {}", file.display());
    }

    Ok(())
}

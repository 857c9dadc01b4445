// Copyright (c) 2025 - Cowboy AI, Inc.
//! Run configuration
//!
//! Every component receives its settings explicitly from an
//! [`InventoryConfig`]; nothing reads ambient state after startup.
//!
//! | Variable                          | Field                                  |
//! |-----------------------------------|----------------------------------------|
//! | `FABRIC_API_URL`                  | `api.base_url`                         |
//! | `FABRIC_TOKEN_ENV`                | `token_env_var`                        |
//! | `FABRIC_SCOPE`                    | `scope`                                |
//! | `FABRIC_DRY_RUN`                  | `dry_run`                              |
//! | `FABRIC_OUTPUT_DIR`               | `output_dir`                           |
//! | `FABRIC_LOOKBACK_DAYS`            | `job_history.lookback_days`            |
//! | `FABRIC_JOB_HISTORY`              | `collect_job_history`                  |
//! | `FABRIC_MEDIUM_ITEM_COUNT`        | `planning.thresholds.medium_item_count`|
//! | `FABRIC_HIGH_ITEM_COUNT`          | `planning.thresholds.high_item_count`  |
//! | `FABRIC_FLAG_ITEM_COUNT`          | `planning.flag_item_count`             |
//! | `FABRIC_MAX_RETRIES`              | `api.retry.max_retries`                |

use serde::{Deserialize, Serialize};
use std::path::PathBuf;
use std::str::FromStr;

use crate::api::ApiConfig;
use crate::classify::PlanningConfig;
use crate::errors::{InventoryError, InventoryResult};
use crate::inventory::{JobHistoryConfig, Scope};

/// Complete configuration of one inventory run
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct InventoryConfig {
    #[serde(default)]
    pub scope: Scope,

    /// Collect and classify, but write no report files
    #[serde(default)]
    pub dry_run: bool,

    #[serde(default = "default_output_dir")]
    pub output_dir: PathBuf,

    /// Environment variable holding the bearer token
    #[serde(default = "default_token_env_var")]
    pub token_env_var: String,

    /// Region the capacities are migrating to; reported alongside the source region
    #[serde(default)]
    pub target_region: Option<String>,

    #[serde(default)]
    pub collect_job_history: bool,

    #[serde(default)]
    pub api: ApiConfig,

    #[serde(default)]
    pub planning: PlanningConfig,

    #[serde(default)]
    pub job_history: JobHistoryConfig,
}

fn default_output_dir() -> PathBuf {
    PathBuf::from("inventory_output")
}

fn default_token_env_var() -> String {
    "FABRIC_TOKEN".to_string()
}

impl Default for InventoryConfig {
    fn default() -> Self {
        Self {
            scope: Scope::All,
            dry_run: false,
            output_dir: default_output_dir(),
            token_env_var: default_token_env_var(),
            target_region: None,
            collect_job_history: false,
            api: ApiConfig::default(),
            planning: PlanningConfig::default(),
            job_history: JobHistoryConfig::default(),
        }
    }
}

impl InventoryConfig {
    /// Load configuration from `FABRIC_*` environment variables
    pub fn from_env() -> InventoryResult<Self> {
        Self::from_lookup(|name| std::env::var(name).ok())
    }

    /// Load configuration from an arbitrary variable lookup
    pub fn from_lookup<F>(lookup: F) -> InventoryResult<Self>
    where
        F: Fn(&str) -> Option<String>,
    {
        let mut config = Self::default();

        if let Some(url) = lookup("FABRIC_API_URL") {
            config.api.base_url = url;
        }
        if let Some(var) = lookup("FABRIC_TOKEN_ENV") {
            config.token_env_var = var;
        }
        if let Some(scope) = lookup("FABRIC_SCOPE") {
            config.scope = scope.parse()?;
        }
        if let Some(dir) = lookup("FABRIC_OUTPUT_DIR") {
            config.output_dir = PathBuf::from(dir);
        }
        if let Some(region) = lookup("FABRIC_TARGET_REGION") {
            let region = region.trim();
            config.target_region = (!region.is_empty()).then(|| region.to_string());
        }
        if let Some(value) = lookup("FABRIC_DRY_RUN") {
            config.dry_run = parse_flag("FABRIC_DRY_RUN", &value)?;
        }
        if let Some(value) = lookup("FABRIC_JOB_HISTORY") {
            config.collect_job_history = parse_flag("FABRIC_JOB_HISTORY", &value)?;
        }
        if let Some(value) = lookup("FABRIC_LOOKBACK_DAYS") {
            config.job_history.lookback_days = parse_number("FABRIC_LOOKBACK_DAYS", &value)?;
        }
        if let Some(value) = lookup("FABRIC_MEDIUM_ITEM_COUNT") {
            config.planning.thresholds.medium_item_count =
                parse_number("FABRIC_MEDIUM_ITEM_COUNT", &value)?;
        }
        if let Some(value) = lookup("FABRIC_HIGH_ITEM_COUNT") {
            config.planning.thresholds.high_item_count =
                parse_number("FABRIC_HIGH_ITEM_COUNT", &value)?;
        }
        if let Some(value) = lookup("FABRIC_FLAG_ITEM_COUNT") {
            config.planning.flag_item_count = parse_number("FABRIC_FLAG_ITEM_COUNT", &value)?;
        }
        if let Some(value) = lookup("FABRIC_MAX_RETRIES") {
            config.api.retry.max_retries = parse_number("FABRIC_MAX_RETRIES", &value)?;
        }

        config.validate()?;
        Ok(config)
    }

    /// Check cross-field constraints
    pub fn validate(&self) -> InventoryResult<()> {
        let thresholds = &self.planning.thresholds;
        if thresholds.medium_item_count == 0 {
            return Err(InventoryError::Configuration(
                "medium item count must be at least 1".to_string(),
            ));
        }
        if thresholds.medium_item_count > thresholds.high_item_count {
            return Err(InventoryError::Configuration(format!(
                "medium item count ({}) exceeds high item count ({})",
                thresholds.medium_item_count, thresholds.high_item_count
            )));
        }
        if self.api.base_url.trim().is_empty() {
            return Err(InventoryError::Configuration(
                "API base URL is empty".to_string(),
            ));
        }
        if !(0.0..=1.0).contains(&self.job_history.failure_rate_threshold) {
            return Err(InventoryError::Configuration(format!(
                "failure rate threshold {} outside 0..=1",
                self.job_history.failure_rate_threshold
            )));
        }
        Ok(())
    }
}

fn parse_flag(name: &str, value: &str) -> InventoryResult<bool> {
    match value.trim().to_lowercase().as_str() {
        "1" | "true" | "yes" | "on" => Ok(true),
        "0" | "false" | "no" | "off" | "" => Ok(false),
        other => Err(InventoryError::Configuration(format!(
            "{} must be a boolean, got '{}'",
            name, other
        ))),
    }
}

fn parse_number<T: FromStr>(name: &str, value: &str) -> InventoryResult<T> {
    value.trim().parse().map_err(|_| {
        InventoryError::Configuration(format!("{} must be a number, got '{}'", name, value))
    })
}

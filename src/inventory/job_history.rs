// Copyright (c) 2025 - Cowboy AI, Inc.
//! Job run history statistics
//!
//! Long-running or failure-prone pipelines and notebooks need extra care
//! when they are recreated in the target region. For every item that runs
//! jobs, the analyzer reads its job instances, keeps the runs that started
//! inside the lookback window, and reports duration percentiles and the
//! failure rate.

use chrono::{DateTime, Duration, NaiveDateTime, Utc};
use serde::{Deserialize, Serialize};
use tracing::{debug, info, warn};

use super::fallback::FallbackCondition;
use crate::api::{Endpoint, FabricClient};
use crate::domain::{Item, ItemType, Workspace};
use crate::errors::InventoryResult;

/// Lookback window and flagging thresholds
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct JobHistoryConfig {
    #[serde(default = "default_lookback_days")]
    pub lookback_days: u32,
    /// Flag items whose p95 duration exceeds this many seconds
    #[serde(default = "default_long_run_threshold_secs")]
    pub long_run_threshold_secs: f64,
    /// Flag items whose failure rate exceeds this fraction
    #[serde(default = "default_failure_rate_threshold")]
    pub failure_rate_threshold: f64,
}

fn default_lookback_days() -> u32 {
    30
}

fn default_long_run_threshold_secs() -> f64 {
    3_600.0
}

fn default_failure_rate_threshold() -> f64 {
    0.2
}

impl Default for JobHistoryConfig {
    fn default() -> Self {
        Self {
            lookback_days: default_lookback_days(),
            long_run_threshold_secs: default_long_run_threshold_secs(),
            failure_rate_threshold: default_failure_rate_threshold(),
        }
    }
}

/// Job instance as returned by the API
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct JobInstanceRecord {
    pub id: String,
    #[serde(default)]
    pub status: String,
    #[serde(default)]
    pub start_time_utc: Option<String>,
    #[serde(default)]
    pub end_time_utc: Option<String>,
}

/// Terminal or in-flight job state
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum JobStatus {
    Completed,
    Failed,
    Cancelled,
    InProgress,
    Other,
}

impl JobStatus {
    pub fn parse(status: &str) -> Self {
        match status.to_lowercase().as_str() {
            "completed" | "succeeded" => Self::Completed,
            "failed" => Self::Failed,
            "cancelled" | "canceled" => Self::Cancelled,
            "inprogress" | "running" | "notstarted" => Self::InProgress,
            _ => Self::Other,
        }
    }
}

/// One job run with parsed timestamps
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct JobRun {
    pub status: JobStatus,
    pub started: Option<DateTime<Utc>>,
    pub ended: Option<DateTime<Utc>>,
}

impl JobRun {
    /// Duration in seconds, when both ends are known and ordered
    pub fn duration_secs(&self) -> Option<f64> {
        match (self.started, self.ended) {
            (Some(start), Some(end)) if end >= start => {
                Some((end - start).num_milliseconds() as f64 / 1_000.0)
            }
            _ => None,
        }
    }
}

impl From<&JobInstanceRecord> for JobRun {
    fn from(record: &JobInstanceRecord) -> Self {
        Self {
            status: JobStatus::parse(&record.status),
            started: record.start_time_utc.as_deref().and_then(parse_timestamp),
            ended: record.end_time_utc.as_deref().and_then(parse_timestamp),
        }
    }
}

/// Parse an API timestamp; values without an offset are UTC
pub fn parse_timestamp(value: &str) -> Option<DateTime<Utc>> {
    if let Ok(parsed) = DateTime::parse_from_rfc3339(value) {
        return Some(parsed.with_timezone(&Utc));
    }
    NaiveDateTime::parse_from_str(value, "%Y-%m-%dT%H:%M:%S%.f")
        .ok()
        .map(|naive| naive.and_utc())
}

/// Value at percentile `p` (0..=100) of ascending `sorted`, linearly
/// interpolated between the closest ranks
pub fn percentile(sorted: &[f64], p: f64) -> Option<f64> {
    if sorted.is_empty() {
        return None;
    }
    let rank = (p.clamp(0.0, 100.0) / 100.0) * (sorted.len() - 1) as f64;
    let lower = rank.floor() as usize;
    let upper = rank.ceil() as usize;
    let weight = rank - lower as f64;
    Some(sorted[lower] + (sorted[upper] - sorted[lower]) * weight)
}

/// Run statistics for one item
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct JobRunStats {
    pub workspace_id: String,
    pub item_id: String,
    pub item_name: String,
    pub item_type: ItemType,
    /// False when the history endpoint denied access
    pub history_available: bool,
    pub runs: usize,
    pub failed: usize,
    pub p50_secs: Option<f64>,
    pub p95_secs: Option<f64>,
    pub failure_rate: f64,
    pub flagged: bool,
}

/// Summarize the runs of `item` that started within the lookback window
pub fn summarize(
    item: &Item,
    runs: &[JobRun],
    now: DateTime<Utc>,
    config: &JobHistoryConfig,
) -> JobRunStats {
    let window_start = now - Duration::days(i64::from(config.lookback_days));
    let in_window: Vec<&JobRun> = runs
        .iter()
        .filter(|run| {
            run.started
                .is_some_and(|start| window_start <= start && start <= now)
        })
        .collect();

    let failed = in_window
        .iter()
        .filter(|run| run.status == JobStatus::Failed)
        .count();

    let mut durations: Vec<f64> = in_window.iter().filter_map(|run| run.duration_secs()).collect();
    durations.sort_by(f64::total_cmp);

    let p50_secs = percentile(&durations, 50.0);
    let p95_secs = percentile(&durations, 95.0);
    let failure_rate = if in_window.is_empty() {
        0.0
    } else {
        failed as f64 / in_window.len() as f64
    };

    let flagged = p95_secs.is_some_and(|p95| p95 > config.long_run_threshold_secs)
        || failure_rate > config.failure_rate_threshold;

    JobRunStats {
        workspace_id: item.workspace_id.clone(),
        item_id: item.id.clone(),
        item_name: item.display_name.clone(),
        item_type: item.item_type.clone(),
        history_available: true,
        runs: in_window.len(),
        failed,
        p50_secs,
        p95_secs,
        failure_rate,
        flagged,
    }
}

/// Reads job history for every job-running item of a set of workspaces
pub struct JobHistoryAnalyzer<'a> {
    client: &'a FabricClient,
    config: JobHistoryConfig,
}

impl<'a> JobHistoryAnalyzer<'a> {
    pub fn new(client: &'a FabricClient, config: JobHistoryConfig) -> Self {
        Self { client, config }
    }

    /// Analyze items sequentially, in workspace then item order
    pub async fn analyze<'w, I>(&self, workspaces: I, now: DateTime<Utc>) -> InventoryResult<Vec<JobRunStats>>
    where
        I: IntoIterator<Item = &'w Workspace>,
    {
        let mut stats = Vec::new();

        for workspace in workspaces {
            for item in workspace.items().iter().filter(|item| item.item_type.runs_jobs()) {
                stats.push(self.analyze_item(item, now).await?);
            }
        }

        let flagged = stats.iter().filter(|s| s.flagged).count();
        info!(
            "Job history: {} items analyzed, {} flagged (lookback {} days)",
            stats.len(),
            flagged,
            self.config.lookback_days
        );
        Ok(stats)
    }

    async fn analyze_item(&self, item: &Item, now: DateTime<Utc>) -> InventoryResult<JobRunStats> {
        let endpoint = Endpoint::job_instances(&item.workspace_id, &item.id);

        match self
            .client
            .collect_all::<JobInstanceRecord>(endpoint, Vec::new())
            .await
        {
            Ok(records) => {
                let runs: Vec<JobRun> = records.iter().map(JobRun::from).collect();
                debug!("{} ({}): {} job instances", item.display_name, item.id, runs.len());
                Ok(summarize(item, &runs, now, &self.config))
            }
            Err(err) if FallbackCondition::AccessDenied.matches(&err) => {
                warn!("Job history unavailable for item {}: {}", item.id, err);
                let mut stats = summarize(item, &[], now, &self.config);
                stats.history_available = false;
                Ok(stats)
            }
            Err(err) => Err(err),
        }
    }
}

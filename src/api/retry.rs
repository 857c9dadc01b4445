// Copyright (c) 2025 - Cowboy AI, Inc.
//! Rate-limit backoff policy

use serde::{Deserialize, Serialize};
use std::time::Duration;

/// Exponential backoff for HTTP 429 responses
///
/// Retry `n` (zero-based) waits `min(base_delay * 2^n, max_delay)`, or the
/// server's `Retry-After` hint capped at `max_delay` when one is given.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct RetryPolicy {
    /// Retries after the first request; `0` disables retrying
    #[serde(default = "default_max_retries")]
    pub max_retries: u32,
    #[serde(default = "default_base_delay_ms")]
    pub base_delay_ms: u64,
    #[serde(default = "default_max_delay_ms")]
    pub max_delay_ms: u64,
    #[serde(default = "default_honor_retry_after")]
    pub honor_retry_after: bool,
}

fn default_max_retries() -> u32 {
    5
}

fn default_base_delay_ms() -> u64 {
    2_000
}

fn default_max_delay_ms() -> u64 {
    60_000
}

fn default_honor_retry_after() -> bool {
    true
}

impl Default for RetryPolicy {
    fn default() -> Self {
        Self {
            max_retries: default_max_retries(),
            base_delay_ms: default_base_delay_ms(),
            max_delay_ms: default_max_delay_ms(),
            honor_retry_after: default_honor_retry_after(),
        }
    }
}

impl RetryPolicy {
    pub fn base_delay(&self) -> Duration {
        Duration::from_millis(self.base_delay_ms)
    }

    pub fn max_delay(&self) -> Duration {
        Duration::from_millis(self.max_delay_ms)
    }

    /// Delay before retry number `retry` (zero-based)
    pub fn delay_for(&self, retry: u32, retry_after: Option<Duration>) -> Duration {
        if self.honor_retry_after {
            if let Some(hint) = retry_after {
                return hint.min(self.max_delay());
            }
        }

        let factor = 1u32.checked_shl(retry).unwrap_or(u32::MAX);
        self.base_delay().saturating_mul(factor).min(self.max_delay())
    }
}

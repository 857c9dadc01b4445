// Copyright (c) 2025 - Cowboy AI, Inc.
//! Primary/fallback source strategy
//!
//! Some data can be read from two places: an admin-scoped API that sees
//! everything, and a user-scoped API that only works where the caller has
//! access. [`with_fallback`] tries the primary source and switches to the
//! fallback only on an enumerated failure, tagging the result with the
//! source that produced it.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::future::Future;
use tracing::warn;

use crate::errors::{InventoryError, InventoryResult};

/// Which source produced a value
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Source {
    Primary,
    Fallback,
}

impl Source {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Primary => "primary",
            Self::Fallback => "fallback",
        }
    }
}

impl fmt::Display for Source {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A value tagged with its [`Source`]
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Sourced<T> {
    pub value: T,
    pub source: Source,
}

impl<T> Sourced<T> {
    pub fn primary(value: T) -> Self {
        Self {
            value,
            source: Source::Primary,
        }
    }

    pub fn fallback(value: T) -> Self {
        Self {
            value,
            source: Source::Fallback,
        }
    }

    pub fn map<U>(self, f: impl FnOnce(T) -> U) -> Sourced<U> {
        Sourced {
            value: f(self.value),
            source: self.source,
        }
    }
}

/// Failures that switch a read to its fallback source
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FallbackCondition {
    /// HTTP 401, 403 or 404 from the primary source
    AccessDenied,
}

impl FallbackCondition {
    pub fn matches(&self, err: &InventoryError) -> bool {
        match self {
            Self::AccessDenied => matches!(
                err,
                InventoryError::Request {
                    status: 401 | 403 | 404,
                    ..
                }
            ),
        }
    }
}

/// Run `primary`; on an error matching `condition`, run `fallback` instead
///
/// Errors that do not match the condition, and any fallback error, are
/// returned unchanged.
pub async fn with_fallback<T, P, PF, F, FF>(
    condition: FallbackCondition,
    primary: P,
    fallback: F,
) -> InventoryResult<Sourced<T>>
where
    P: FnOnce() -> PF,
    PF: Future<Output = InventoryResult<T>>,
    F: FnOnce() -> FF,
    FF: Future<Output = InventoryResult<T>>,
{
    match primary().await {
        Ok(value) => Ok(Sourced::primary(value)),
        Err(err) if condition.matches(&err) => {
            warn!("Primary source unavailable ({}), using fallback", err);
            fallback().await.map(Sourced::fallback)
        }
        Err(err) => Err(err),
    }
}

// Copyright (c) 2025 - Cowboy AI, Inc.
//! Error types for inventory operations

use thiserror::Error;

/// Errors that can occur while collecting, classifying or exporting inventory
#[derive(Debug, Error)]
pub enum InventoryError {
    /// Rate limited beyond the retry cap
    #[error("Rate limited (HTTP {status}) after {attempts} attempts")]
    Transient {
        /// Last HTTP status observed (429)
        status: u16,
        /// Total requests issued, including the first
        attempts: u32,
    },

    /// Non-retryable HTTP failure
    #[error("Request failed with HTTP {status}: {body}")]
    Request {
        /// HTTP status code
        status: u16,
        /// Response body as returned by the API
        body: String,
    },

    /// Connection or protocol error below HTTP
    #[error("Transport error: {0}")]
    Transport(String),

    /// Response body could not be decoded
    #[error("Decode error: {0}")]
    Decode(String),

    /// Bearer token could not be obtained
    #[error("Authentication error: {0}")]
    Auth(String),

    /// Report sink write failure
    #[error("Export error: {0}")]
    Export(String),

    /// Configuration error
    #[error("Configuration error: {0}")]
    Configuration(String),
}

impl InventoryError {
    /// HTTP status carried by this error, if any
    pub fn status(&self) -> Option<u16> {
        match self {
            Self::Transient { status, .. } | Self::Request { status, .. } => Some(*status),
            _ => None,
        }
    }
}

/// Result type for inventory operations
pub type InventoryResult<T> = Result<T, InventoryError>;

impl From<serde_json::Error> for InventoryError {
    fn from(err: serde_json::Error) -> Self {
        InventoryError::Decode(err.to_string())
    }
}

impl From<reqwest::Error> for InventoryError {
    fn from(err: reqwest::Error) -> Self {
        InventoryError::Transport(err.to_string())
    }
}

impl From<csv::Error> for InventoryError {
    fn from(err: csv::Error) -> Self {
        InventoryError::Export(err.to_string())
    }
}

impl From<std::io::Error> for InventoryError {
    fn from(err: std::io::Error) -> Self {
        InventoryError::Export(err.to_string())
    }
}

// Copyright (c) 2025 - Cowboy AI, Inc.
//! Bearer token suppliers
//!
//! Token acquisition belongs to the platform's credential tooling; the
//! client only asks a [`TokenProvider`] for an opaque string before each
//! request.

use async_trait::async_trait;

use crate::errors::{InventoryError, InventoryResult};

/// Source of bearer tokens for the Fabric API
#[async_trait]
pub trait TokenProvider: Send + Sync {
    async fn token(&self) -> InventoryResult<String>;
}

/// Fixed token, e.g. pasted from `az account get-access-token`
pub struct StaticToken(String);

impl StaticToken {
    pub fn new(token: impl Into<String>) -> Self {
        Self(token.into())
    }
}

impl std::fmt::Debug for StaticToken {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str("StaticToken(<redacted>)")
    }
}

#[async_trait]
impl TokenProvider for StaticToken {
    async fn token(&self) -> InventoryResult<String> {
        if self.0.trim().is_empty() {
            return Err(InventoryError::Auth("token is empty".to_string()));
        }
        Ok(self.0.clone())
    }
}

/// Token read from an environment variable on every request
///
/// Re-reading lets an external refresher rotate the token during long runs.
#[derive(Debug, Clone)]
pub struct EnvToken {
    var: String,
}

impl EnvToken {
    pub fn new(var: impl Into<String>) -> Self {
        Self { var: var.into() }
    }
}

#[async_trait]
impl TokenProvider for EnvToken {
    async fn token(&self) -> InventoryResult<String> {
        match std::env::var(&self.var) {
            Ok(token) if !token.trim().is_empty() => Ok(token),
            Ok(_) => Err(InventoryError::Auth(format!("{} is empty", self.var))),
            Err(_) => Err(InventoryError::Auth(format!("{} not set", self.var))),
        }
    }
}

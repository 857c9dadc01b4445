// Copyright (c) 2025 - Cowboy AI, Inc.

//! Fabric REST API access
//!
//! - [`FabricClient`] - paginated GETs with rate-limit backoff
//! - [`HttpTransport`] - single-request seam, `reqwest` in production
//! - [`TokenProvider`] - opaque bearer token supplier
//! - [`RetryPolicy`] - exponential backoff settings

pub mod auth;
pub mod client;
pub mod retry;
pub mod transport;

pub use auth::{EnvToken, StaticToken, TokenProvider};
pub use client::{ApiConfig, Endpoint, FabricClient, Page, CONTINUATION_TOKEN};
pub use retry::RetryPolicy;
pub use transport::{HttpTransport, RawResponse, ReqwestTransport};

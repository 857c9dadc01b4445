// Copyright (c) 2025 - Cowboy AI, Inc.
//! Property-Based Tests Module
//!
//! Properties of movability classification, complexity scoring and wave
//! assignment.

mod planning;

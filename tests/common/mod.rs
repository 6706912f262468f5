//! Common test utilities for Treelens integration tests.
//!
//! This module provides:
//! - `TestEnv`: Isolated temp directory plus helpers to run the CLI
//! - Fixtures: Reusable payload documents
//! - Strategies: proptest generators for JSON payloads

#![allow(dead_code)]

pub mod env;
pub mod fixtures;
pub mod strategies;

pub use env::*;
pub use fixtures::*;

//! Common test utilities for ipa-deploy CLI tests.
//!
//! This module provides:
//! - `TestEnv`: isolated Tauri project in a temp directory plus a fake `cfgutil`
//! - Fixtures: device lines and descriptors shared by the test files

#![allow(dead_code)]

pub mod env;
pub mod fixtures;

pub use env::*;
pub use fixtures::*;

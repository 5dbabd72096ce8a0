//! Common test utilities for skills CLI and scenario tests.
//!
//! This module provides:
//! - `TestEnv`: isolated project, home and factory directories
//! - Assertion macros: `assert_installed!`, `assert_output_contains!`
//! - Fixtures: a small factory tree

#![allow(dead_code)]

pub mod assertions;
pub mod env;
pub mod fixtures;

pub use assertions::*;
pub use env::*;
pub use fixtures::*;

//! Common test utilities for modbuild CLI tests.
//!
//! This module provides:
//! - `TestEnv`: Isolated workspace with module, package and home directories
//! - Assertion macros: `assert_exists!`, `assert_output_contains!`, etc.
//! - Fixtures: Reusable manifest content

pub mod assertions;
pub mod env;
pub mod fixtures;

#[allow(unused_imports)]
pub use assertions::*;
pub use env::*;
#[allow(unused_imports)]
pub use fixtures::*;

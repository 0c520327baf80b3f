//! Configuration module for modbuild
//!
//! Configuration hierarchy:
//! 1. CLI flags (highest priority)
//! 2. Environment variables (MODBUILD_*, NUGET_PACKAGES, ...)
//! 3. Config file (`--config` or `MODBUILD_CONFIG`)
//! 4. Built-in defaults (lowest priority)

mod loader;
mod types;

pub use loader::{ConfigWarning, CONFIG_ENV};
pub use types::{ColorMode, Config, OutputConfig, PruneConfig, ResolveConfig, Verbosity};

//! Configuration type definitions

use std::path::{Path, PathBuf};
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::domain::value_objects::{
    JunkRules, DEFAULT_JUNK_DIRECTORIES, DEFAULT_JUNK_FILE_PREFIXES, DEFAULT_JUNK_FILE_SUFFIXES,
};
use crate::error::{ModbuildError, ModbuildResult};
use crate::infrastructure::fs::modbuild_home_dir;

use super::loader::{self, ConfigWarning};

/// Which build byproducts get deleted from module directories
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PruneConfig {
    /// Subdirectory names deleted recursively
    #[serde(default = "default_directories")]
    pub directories: Vec<String>,

    /// File name prefixes (case-sensitive)
    #[serde(default = "default_file_prefixes")]
    pub file_prefixes: Vec<String>,

    /// File name suffixes (case-insensitive)
    #[serde(default = "default_file_suffixes")]
    pub file_suffixes: Vec<String>,
}

impl Default for PruneConfig {
    fn default() -> Self {
        Self {
            directories: default_directories(),
            file_prefixes: default_file_prefixes(),
            file_suffixes: default_file_suffixes(),
        }
    }
}

fn to_strings(items: &[&str]) -> Vec<String> {
    items.iter().map(|s| s.to_string()).collect()
}

fn default_directories() -> Vec<String> {
    to_strings(DEFAULT_JUNK_DIRECTORIES)
}

fn default_file_prefixes() -> Vec<String> {
    to_strings(DEFAULT_JUNK_FILE_PREFIXES)
}

fn default_file_suffixes() -> Vec<String> {
    to_strings(DEFAULT_JUNK_FILE_SUFFIXES)
}

/// Where package and reference assemblies are looked up
#[derive(Debug, Clone, Serialize, Deserialize, Default)]
pub struct ResolveConfig {
    /// Package cache roots, searched in order
    #[serde(default)]
    pub package_folders: Vec<PathBuf>,

    /// Reference assembly roots, searched in order
    #[serde(default)]
    pub reference_assembly_folders: Vec<PathBuf>,
}

/// Output configuration
#[derive(Debug, Clone, Serialize, Deserialize, Default)]
pub struct OutputConfig {
    #[serde(default)]
    pub verbosity: Verbosity,

    #[serde(default)]
    pub color: ColorMode,

    /// `tracing` filter directive used when `RUST_LOG` is not set
    #[serde(default)]
    pub log_filter: Option<String>,
}

/// Color output mode
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(rename_all = "lowercase")]
pub enum ColorMode {
    #[default]
    Auto,
    Always,
    Never,
}

impl FromStr for ColorMode {
    type Err = ModbuildError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "auto" => Ok(ColorMode::Auto),
            "always" => Ok(ColorMode::Always),
            "never" => Ok(ColorMode::Never),
            _ => Err(ModbuildError::InvalidConfigValue {
                key: "output.color".to_string(),
                value: s.to_string(),
            }),
        }
    }
}

/// Verbosity level
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Serialize, Deserialize, Default)]
#[serde(rename_all = "lowercase")]
pub enum Verbosity {
    Quiet,
    #[default]
    Normal,
    Verbose,
}

impl FromStr for Verbosity {
    type Err = ModbuildError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "quiet" => Ok(Verbosity::Quiet),
            "normal" => Ok(Verbosity::Normal),
            "verbose" => Ok(Verbosity::Verbose),
            _ => Err(ModbuildError::InvalidConfigValue {
                key: "output.verbosity".to_string(),
                value: s.to_string(),
            }),
        }
    }
}

/// Main configuration structure
#[derive(Debug, Clone, Serialize, Deserialize, Default)]
pub struct Config {
    #[serde(default)]
    pub prune: PruneConfig,

    #[serde(default)]
    pub resolve: ResolveConfig,

    #[serde(default)]
    pub output: OutputConfig,
}

impl Config {
    /// Load configuration and collect non-fatal warnings (e.g. unknown keys).
    pub fn load_with_warnings(path: &Path) -> ModbuildResult<(Self, Vec<ConfigWarning>)> {
        loader::load_with_warnings(path)
    }

    /// Load from `explicit`, else `MODBUILD_CONFIG`, else defaults.
    ///
    /// A named file that cannot be read or parsed is an error.
    pub fn load_or_default(
        explicit: Option<&Path>,
    ) -> ModbuildResult<(Self, Vec<ConfigWarning>)> {
        loader::load_or_default(explicit)
    }

    /// Apply environment variable overrides
    pub fn with_env_overrides(self) -> Self {
        loader::with_env_overrides(self)
    }

    /// Prune rules built from the `[prune]` section
    pub fn junk_rules(&self) -> JunkRules {
        JunkRules::new(
            self.prune.directories.clone(),
            self.prune.file_prefixes.clone(),
            self.prune.file_suffixes.clone(),
        )
    }

    /// Package folders in lookup order, ending with `~/.nuget/packages`
    pub fn package_folders(&self) -> Vec<PathBuf> {
        let mut folders = self.resolve.package_folders.clone();
        if let Some(home) = modbuild_home_dir() {
            let fallback = home.join(".nuget").join("packages");
            if !folders.contains(&fallback) {
                folders.push(fallback);
            }
        }
        folders
    }

    pub fn reference_assembly_folders(&self) -> Vec<PathBuf> {
        self.resolve.reference_assembly_folders.clone()
    }
}

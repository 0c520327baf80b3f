//! Configuration loading

use std::fs;
use std::path::{Path, PathBuf};

use tracing::{debug, warn};

use crate::error::{ModbuildError, ModbuildResult};

use super::types::{Config, Verbosity};

/// Environment variable naming a configuration file
pub const CONFIG_ENV: &str = "MODBUILD_CONFIG";

/// Non-fatal configuration warning surfaced to CLI users.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ConfigWarning {
    pub key: String,
    pub file: PathBuf,
    pub line: Option<usize>,
    pub suggestion: Option<String>,
}

/// Load configuration and collect non-fatal warnings (e.g. unknown keys).
pub fn load_with_warnings(path: &Path) -> ModbuildResult<(Config, Vec<ConfigWarning>)> {
    let content = fs::read_to_string(path).map_err(|e| ModbuildError::InvalidConfig {
        file: path.to_path_buf(),
        message: e.to_string(),
    })?;

    let mut unknown_paths: Vec<String> = Vec::new();
    let deserializer = toml::de::Deserializer::new(&content);

    let config: Config = serde_ignored::deserialize(deserializer, |p| {
        unknown_paths.push(p.to_string());
    })
    .map_err(|e| ModbuildError::InvalidConfig {
        file: path.to_path_buf(),
        message: e.to_string(),
    })?;

    let warnings = unknown_paths
        .into_iter()
        .map(|path_str| {
            let key = path_str
                .split('.')
                .next_back()
                .unwrap_or(path_str.as_str())
                .to_string();
            ConfigWarning {
                key: key.clone(),
                file: path.to_path_buf(),
                line: find_line_number(&content, &key),
                suggestion: suggest_key(&key),
            }
        })
        .collect();

    Ok((config, warnings))
}

/// Load from an explicit path, then `MODBUILD_CONFIG`, then defaults
pub fn load_or_default(explicit: Option<&Path>) -> ModbuildResult<(Config, Vec<ConfigWarning>)> {
    let from_env = std::env::var_os(CONFIG_ENV)
        .filter(|v| !v.is_empty())
        .map(PathBuf::from);

    let (config, warnings) = match explicit.map(Path::to_path_buf).or(from_env) {
        Some(path) => {
            debug!(path = %path.display(), "loading configuration");
            load_with_warnings(&path)?
        }
        None => (Config::default(), Vec::new()),
    };

    Ok((with_env_overrides(config), warnings))
}

/// Apply environment variable overrides
pub fn with_env_overrides(config: Config) -> Config {
    apply_overrides(config, |key| std::env::var(key).ok())
}

/// Overrides read through `lookup` so tests do not touch the process env
pub(crate) fn apply_overrides(
    mut config: Config,
    lookup: impl Fn(&str) -> Option<String>,
) -> Config {
    // MODBUILD_VERBOSITY
    if let Some(raw) = lookup("MODBUILD_VERBOSITY") {
        match raw.parse::<Verbosity>() {
            Ok(verbosity) => config.output.verbosity = verbosity,
            Err(e) => warn!("ignoring MODBUILD_VERBOSITY: {e}"),
        }
    }

    // MODBUILD_PACKAGE_FOLDERS (platform path list), then NUGET_PACKAGES
    if let Some(raw) = lookup("MODBUILD_PACKAGE_FOLDERS") {
        push_unique(&mut config.resolve.package_folders, std::env::split_paths(&raw));
    }
    if let Some(raw) = lookup("NUGET_PACKAGES") {
        push_unique(&mut config.resolve.package_folders, [PathBuf::from(raw)]);
    }

    // DOTNET_REFERENCE_ASSEMBLIES_PATH
    if let Some(raw) = lookup("DOTNET_REFERENCE_ASSEMBLIES_PATH") {
        push_unique(
            &mut config.resolve.reference_assembly_folders,
            [PathBuf::from(raw)],
        );
    }

    config
}

fn push_unique(target: &mut Vec<PathBuf>, paths: impl IntoIterator<Item = PathBuf>) {
    for path in paths {
        if !path.as_os_str().is_empty() && !target.contains(&path) {
            target.push(path);
        }
    }
}

fn find_line_number(content: &str, needle: &str) -> Option<usize> {
    content
        .lines()
        .position(|line| line.contains(needle))
        .map(|i| i + 1)
}

fn suggest_key(unknown: &str) -> Option<String> {
    const CANDIDATES: &[&str] = &[
        "prune",
        "directories",
        "file_prefixes",
        "file_suffixes",
        "resolve",
        "package_folders",
        "reference_assembly_folders",
        "output",
        "verbosity",
        "color",
        "log_filter",
    ];

    CANDIDATES
        .iter()
        .map(|candidate| (*candidate, levenshtein(unknown, candidate)))
        .min_by_key(|(_, dist)| *dist)
        .filter(|(_, dist)| *dist <= 2)
        .map(|(candidate, _)| candidate.to_string())
}

fn levenshtein(a: &str, b: &str) -> usize {
    if a == b {
        return 0;
    }

    let a_bytes = a.as_bytes();
    let b_bytes = b.as_bytes();

    let mut prev: Vec<usize> = (0..=b_bytes.len()).collect();
    let mut curr = vec![0usize; b_bytes.len() + 1];

    for (i, &ac) in a_bytes.iter().enumerate() {
        curr[0] = i + 1;
        for (j, &bc) in b_bytes.iter().enumerate() {
            let cost = usize::from(ac != bc);
            curr[j + 1] = (prev[j + 1] + 1).min(curr[j] + 1).min(prev[j] + cost);
        }
        prev.clone_from_slice(&curr);
    }

    prev[b_bytes.len()]
}

//! Home directory resolution with test isolation support.
//!
//! On Windows, `dirs::home_dir()` uses the Windows system API (`SHGetKnownFolderPath`)
//! rather than environment variables, so setting `HOME` or `USERPROFILE` in tests
//! has no effect there.
//!
//! `modbuild_home_dir()` checks `MODBUILD_TEST_HOME` first and falls back to
//! `dirs::home_dir()`. Functional paths derived from the home directory (the
//! `~/.nuget/packages` fallback package folder) go through it.

use std::path::PathBuf;

/// Environment variable for test isolation of the home directory.
pub const MODBUILD_TEST_HOME_VAR: &str = "MODBUILD_TEST_HOME";

/// Home directory used for functional paths.
///
/// # Example
///
/// ```
/// use modbuild::infrastructure::fs::modbuild_home_dir;
///
/// if let Some(home) = modbuild_home_dir() {
///     let packages = home.join(".nuget").join("packages");
/// }
/// ```
pub fn modbuild_home_dir() -> Option<PathBuf> {
    std::env::var_os(MODBUILD_TEST_HOME_VAR)
        .filter(|v| !v.is_empty())
        .map(PathBuf::from)
        .or_else(dirs::home_dir)
}

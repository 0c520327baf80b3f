//! Module Directory Value Object
//!
//! An absolute module output directory together with the module name derived
//! from its final path segment.

use std::path::{Component, Path, PathBuf};

use crate::error::{ModbuildError, ModbuildResult};

/// File name of the module descriptor
pub const MODULE_MANIFEST: &str = "module.json";

/// A resolved module directory
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ModuleDir {
    root: PathBuf,
    name: String,
}

impl ModuleDir {
    /// Resolve a raw path from the option string.
    ///
    /// Surrounding quotes are stripped, relative paths are made absolute
    /// against the current directory, and `.`/`..` segments are folded away.
    /// Fails when there is no final segment.
    pub fn resolve(raw: &str) -> ModbuildResult<Self> {
        let trimmed = raw.trim().trim_matches('"');
        let root = normalize(&std::path::absolute(trimmed)?);
        Self::from_absolute(root)
    }

    /// Build from an already absolute path
    pub fn from_absolute(root: PathBuf) -> ModbuildResult<Self> {
        let name = root
            .file_name()
            .map(|n| n.to_string_lossy().into_owned())
            .filter(|n| !n.is_empty());

        match name {
            Some(name) => Ok(Self { root, name }),
            None => Err(ModbuildError::InvalidModulePath { path: root }),
        }
    }

    pub fn root(&self) -> &Path {
        &self.root
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    /// `<root>/module.json`
    pub fn module_manifest(&self) -> PathBuf {
        self.root.join(MODULE_MANIFEST)
    }

    /// `<root>/<name>.deps.json`
    pub fn deps_manifest(&self) -> PathBuf {
        self.root.join(format!("{}.deps.json", self.name))
    }

    /// Destination for a deployed file: `<root>/<file name of source>`
    pub fn destination_for(&self, source: &Path) -> Option<PathBuf> {
        source.file_name().map(|f| self.root.join(f))
    }
}

/// Lexical normalization; symlinks are not followed
fn normalize(path: &Path) -> PathBuf {
    let mut normalized = PathBuf::new();
    for component in path.components() {
        match component {
            Component::CurDir => {}
            Component::ParentDir => {
                // `..` at the root stays at the root
                if normalized.file_name().is_some() {
                    normalized.pop();
                }
            }
            other => normalized.push(other),
        }
    }
    normalized
}

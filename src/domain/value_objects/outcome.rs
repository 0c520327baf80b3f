//! Outcome Value Objects
//!
//! Why a module or a private reference was not deployed.

use std::fmt;
use std::path::PathBuf;

/// Reason a module's deployment step was skipped
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SkipReason {
    /// Path has no final segment
    InvalidPath,
    /// No `module.json`: the directory is not a module
    NotAModule,
    /// No `<name>.deps.json`
    MissingDependencyManifest,
    /// `module.json` declares no private references
    NoPrivateReferences,
    /// A manifest exists but cannot be read or parsed
    InvalidManifest { path: PathBuf, message: String },
}

impl SkipReason {
    /// Machine-readable identifier used in JSON events
    pub fn code(&self) -> &'static str {
        match self {
            SkipReason::InvalidPath => "invalid_path",
            SkipReason::NotAModule => "not_a_module",
            SkipReason::MissingDependencyManifest => "missing_deps_manifest",
            SkipReason::NoPrivateReferences => "no_private_references",
            SkipReason::InvalidManifest { .. } => "invalid_manifest",
        }
    }

    /// Skips that deserve a visible diagnostic
    pub fn is_warning(&self) -> bool {
        matches!(
            self,
            SkipReason::InvalidPath | SkipReason::InvalidManifest { .. }
        )
    }
}

impl fmt::Display for SkipReason {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            SkipReason::InvalidPath => write!(f, "invalid module path"),
            SkipReason::NotAModule => write!(f, "no module.json"),
            SkipReason::MissingDependencyManifest => write!(f, "no dependency manifest"),
            SkipReason::NoPrivateReferences => write!(f, "no private references"),
            SkipReason::InvalidManifest { path, message } => {
                write!(f, "invalid manifest {}: {}", path.display(), message)
            }
        }
    }
}

/// Reason a private reference could not be deployed
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum UnresolvedReason {
    /// No library with that name in the dependency manifest
    NotFound,
    /// Library exists but no files could be located for it
    NoPaths,
}

impl UnresolvedReason {
    pub fn code(&self) -> &'static str {
        match self {
            UnresolvedReason::NotFound => "not_found",
            UnresolvedReason::NoPaths => "unresolved",
        }
    }
}

impl fmt::Display for UnresolvedReason {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            UnresolvedReason::NotFound => write!(f, "does not exist"),
            UnresolvedReason::NoPaths => write!(f, "cannot be resolved"),
        }
    }
}

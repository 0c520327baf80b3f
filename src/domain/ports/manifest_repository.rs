//! Manifest Repository Port
//!
//! Loads the two per-module manifests. A missing file is not an error: it
//! is reported as `Ok(None)` so callers can skip the module quietly.

use std::path::{Path, PathBuf};

use thiserror::Error;

use crate::domain::entities::{DependencyContext, ModuleDescriptor};

/// Errors that can occur while loading a manifest that exists
#[derive(Debug, Error)]
pub enum ManifestError {
    #[error("failed to read manifest {}: {source}", .path.display())]
    Read {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("malformed manifest {}: {message}", .path.display())]
    Malformed { path: PathBuf, message: String },
}

impl ManifestError {
    pub fn path(&self) -> &Path {
        match self {
            ManifestError::Read { path, .. } | ManifestError::Malformed { path, .. } => path,
        }
    }
}

/// Repository for module manifests
pub trait ManifestRepository {
    /// Load `module.json`; `Ok(None)` when the file does not exist
    fn load_module_descriptor(&self, path: &Path)
        -> Result<Option<ModuleDescriptor>, ManifestError>;

    /// Load `<name>.deps.json`; `Ok(None)` when the file does not exist
    fn load_dependency_context(
        &self,
        path: &Path,
    ) -> Result<Option<DependencyContext>, ManifestError>;
}

impl<T: ManifestRepository + ?Sized> ManifestRepository for &T {
    fn load_module_descriptor(
        &self,
        path: &Path,
    ) -> Result<Option<ModuleDescriptor>, ManifestError> {
        (**self).load_module_descriptor(path)
    }

    fn load_dependency_context(
        &self,
        path: &Path,
    ) -> Result<Option<DependencyContext>, ManifestError> {
        (**self).load_dependency_context(path)
    }
}

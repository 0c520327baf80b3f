//! JSON Manifest Repository
//!
//! Implements the ManifestRepository port for `module.json` and
//! `<name>.deps.json` files.

use std::path::Path;

use crate::domain::entities::{DependencyContext, ModuleDescriptor};
use crate::domain::ports::file_system::{FileSystem, FsError};
use crate::domain::ports::manifest_repository::{ManifestError, ManifestRepository};
use crate::infrastructure::fs::LocalFs;

/// JSON-based manifest repository
pub struct JsonManifestRepository<FS: FileSystem = LocalFs> {
    fs: FS,
}

impl JsonManifestRepository<LocalFs> {
    /// Create a new repository with the default file system
    pub fn new() -> Self {
        Self { fs: LocalFs::new() }
    }
}

impl<FS: FileSystem> JsonManifestRepository<FS> {
    /// Create with a custom file system (for testing)
    pub fn with_fs(fs: FS) -> Self {
        Self { fs }
    }

    /// Read a manifest file; `None` when it does not exist
    fn read_manifest(&self, path: &Path) -> Result<Option<String>, ManifestError> {
        if !self.fs.exists(path) {
            return Ok(None);
        }
        match self.fs.read(path) {
            // Build tools on Windows like to write a BOM
            Ok(content) => Ok(Some(content.trim_start_matches('\u{feff}').to_string())),
            Err(FsError::NotFound(_)) => Ok(None),
            Err(FsError::Io { path, source }) => Err(ManifestError::Read { path, source }),
            Err(e) => Err(ManifestError::Read {
                path: path.to_path_buf(),
                source: std::io::Error::other(e.to_string()),
            }),
        }
    }
}

impl Default for JsonManifestRepository<LocalFs> {
    fn default() -> Self {
        Self::new()
    }
}

impl<FS: FileSystem> ManifestRepository for JsonManifestRepository<FS> {
    fn load_module_descriptor(
        &self,
        path: &Path,
    ) -> Result<Option<ModuleDescriptor>, ManifestError> {
        let Some(content) = self.read_manifest(path)? else {
            return Ok(None);
        };
        ModuleDescriptor::from_json(&content)
            .map(Some)
            .map_err(|e| ManifestError::Malformed {
                path: path.to_path_buf(),
                message: e.to_string(),
            })
    }

    fn load_dependency_context(
        &self,
        path: &Path,
    ) -> Result<Option<DependencyContext>, ManifestError> {
        let Some(content) = self.read_manifest(path)? else {
            return Ok(None);
        };
        DependencyContext::from_json(&content)
            .map(Some)
            .map_err(|e| ManifestError::Malformed {
                path: path.to_path_buf(),
                message: e.to_string(),
            })
    }
}

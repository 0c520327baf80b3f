//! Package cache resolver
//!
//! Finds package assemblies under `<package folder>/<library path>/<asset>`.

use std::path::PathBuf;

use tracing::trace;

use crate::domain::entities::{CompileLibrary, LibraryKind};
use crate::domain::ports::ReferenceResolver;
use crate::domain::value_objects::ModuleDir;

/// Resolves `package` libraries from an ordered list of package folders
#[derive(Debug, Clone, Default)]
pub struct PackageCacheResolver {
    folders: Vec<PathBuf>,
}

impl PackageCacheResolver {
    pub fn new(folders: Vec<PathBuf>) -> Self {
        Self { folders }
    }

    pub fn folders(&self) -> &[PathBuf] {
        &self.folders
    }
}

impl ReferenceResolver for PackageCacheResolver {
    fn try_resolve(
        &self,
        _module: &ModuleDir,
        library: &CompileLibrary,
        paths: &mut Vec<PathBuf>,
    ) -> bool {
        if library.kind != LibraryKind::Package {
            return false;
        }

        let relative = library.package_relative_path();
        for folder in &self.folders {
            let base = folder.join(&relative);
            let candidates: Vec<PathBuf> = library
                .assemblies
                .iter()
                .map(|assembly| base.join(assembly))
                .collect();

            if candidates.iter().all(|c| c.is_file()) {
                paths.extend(candidates);
                return true;
            }
            trace!(library = %library.name, folder = %folder.display(), "not in package folder");
        }

        false
    }

    fn name(&self) -> &'static str {
        "package-cache"
    }
}

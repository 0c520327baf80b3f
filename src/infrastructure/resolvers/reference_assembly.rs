//! Reference assembly resolver
//!
//! Finds targeting-pack reference assemblies in configured folders.

use std::path::{Path, PathBuf};

use crate::domain::entities::{CompileLibrary, LibraryKind};
use crate::domain::ports::ReferenceResolver;
use crate::domain::value_objects::ModuleDir;

/// Resolves `referenceassembly` libraries
#[derive(Debug, Clone, Default)]
pub struct ReferenceAssemblyResolver {
    folders: Vec<PathBuf>,
}

impl ReferenceAssemblyResolver {
    pub fn new(folders: Vec<PathBuf>) -> Self {
        Self { folders }
    }

    /// Relative asset path first, then the bare file name, in every folder
    fn locate(&self, assembly: &str) -> Option<PathBuf> {
        let file_name = Path::new(assembly).file_name();
        self.folders.iter().find_map(|folder| {
            let direct = folder.join(assembly);
            if direct.is_file() {
                return Some(direct);
            }
            file_name
                .map(|name| folder.join(name))
                .filter(|p| p.is_file())
        })
    }
}

impl ReferenceResolver for ReferenceAssemblyResolver {
    fn try_resolve(
        &self,
        _module: &ModuleDir,
        library: &CompileLibrary,
        paths: &mut Vec<PathBuf>,
    ) -> bool {
        if library.kind != LibraryKind::ReferenceAssembly {
            return false;
        }

        let mut found = Vec::with_capacity(library.assemblies.len());
        for assembly in &library.assemblies {
            match self.locate(assembly) {
                Some(path) => found.push(path),
                None => return false,
            }
        }

        paths.extend(found);
        true
    }

    fn name(&self) -> &'static str {
        "reference-assembly"
    }
}

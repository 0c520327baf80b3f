//! App base resolver
//!
//! Finds assemblies that the build already placed in the module directory
//! or in its `refs/` folder.

use std::path::{Path, PathBuf};

use crate::domain::entities::{CompileLibrary, LibraryKind};
use crate::domain::ports::ReferenceResolver;
use crate::domain::value_objects::ModuleDir;

const REFS_DIR: &str = "refs";

/// Resolves `project` and `reference` libraries from the module directory,
/// and `package` libraries from `<module>/refs/`
#[derive(Debug, Clone, Copy, Default)]
pub struct AppBaseResolver;

impl AppBaseResolver {
    pub fn new() -> Self {
        Self
    }
}

impl ReferenceResolver for AppBaseResolver {
    fn try_resolve(
        &self,
        module: &ModuleDir,
        library: &CompileLibrary,
        paths: &mut Vec<PathBuf>,
    ) -> bool {
        let refs_only = match library.kind {
            LibraryKind::Project | LibraryKind::Reference => false,
            LibraryKind::Package => true,
            _ => return false,
        };

        let refs = module.root().join(REFS_DIR);
        let mut found = Vec::with_capacity(library.assemblies.len());

        for assembly in &library.assemblies {
            let Some(file_name) = Path::new(assembly).file_name() else {
                return false;
            };

            let mut candidates = Vec::with_capacity(2);
            if !refs_only {
                candidates.push(module.root().join(file_name));
            }
            candidates.push(refs.join(file_name));

            match candidates.into_iter().find(|c| c.is_file()) {
                Some(path) => found.push(path),
                None => return false,
            }
        }

        paths.extend(found);
        true
    }

    fn name(&self) -> &'static str {
        "app-base"
    }
}

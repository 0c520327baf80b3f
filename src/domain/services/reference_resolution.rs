//! Composite reference resolution
//!
//! Asks a chain of resolvers for a library's files; the first resolver that
//! finds all of them wins.

use std::path::PathBuf;

use tracing::debug;

use crate::domain::entities::CompileLibrary;
use crate::domain::ports::ReferenceResolver;
use crate::domain::value_objects::ModuleDir;

/// Ordered chain of resolvers
pub struct CompositeResolver {
    resolvers: Vec<Box<dyn ReferenceResolver>>,
}

impl CompositeResolver {
    pub fn new(resolvers: Vec<Box<dyn ReferenceResolver>>) -> Self {
        Self { resolvers }
    }

    /// Files backing `library`. Empty when no resolver could locate them or
    /// the library contributes no compile assemblies.
    pub fn resolve_reference_paths(
        &self,
        module: &ModuleDir,
        library: &CompileLibrary,
    ) -> Vec<PathBuf> {
        if library.assemblies.is_empty() {
            debug!(library = %library.name, "library has no compile assemblies");
            return Vec::new();
        }

        let mut paths = Vec::new();
        for resolver in &self.resolvers {
            if resolver.try_resolve(module, library, &mut paths) {
                debug!(
                    library = %library.name,
                    resolver = resolver.name(),
                    count = paths.len(),
                    "resolved reference paths"
                );
                return paths;
            }
        }

        debug!(library = %library.name, kind = %library.kind, "no resolver located library");
        Vec::new()
    }
}

impl ReferenceResolver for CompositeResolver {
    fn try_resolve(
        &self,
        module: &ModuleDir,
        library: &CompileLibrary,
        paths: &mut Vec<PathBuf>,
    ) -> bool {
        let resolved = self.resolve_reference_paths(module, library);
        if resolved.is_empty() {
            return false;
        }
        paths.extend(resolved);
        true
    }

    fn name(&self) -> &'static str {
        "composite"
    }
}

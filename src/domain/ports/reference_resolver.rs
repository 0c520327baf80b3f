//! Reference Resolver Port
//!
//! Turns a compile library into the assembly files on disk that back it.

use std::path::PathBuf;

use crate::domain::entities::CompileLibrary;
use crate::domain::value_objects::ModuleDir;

/// Locates the files of a compile library
///
/// Implementations:
/// - `AppBaseResolver` - files already next to the module (or in its `refs/`)
/// - `ReferenceAssemblyResolver` - targeting-pack folders
/// - `PackageCacheResolver` - package cache folders
pub trait ReferenceResolver {
    /// Append the library's files to `paths` and return `true` if every
    /// assembly of the library was found. Returns `false` (and leaves `paths`
    /// untouched) when this resolver does not handle the library or cannot
    /// find all of its files. `module` is the directory being deployed.
    fn try_resolve(
        &self,
        module: &ModuleDir,
        library: &CompileLibrary,
        paths: &mut Vec<PathBuf>,
    ) -> bool;

    /// Short name for logs
    fn name(&self) -> &'static str;
}

impl<R: ReferenceResolver + ?Sized> ReferenceResolver for Box<R> {
    fn try_resolve(
        &self,
        module: &ModuleDir,
        library: &CompileLibrary,
        paths: &mut Vec<PathBuf>,
    ) -> bool {
        (**self).try_resolve(module, library, paths)
    }

    fn name(&self) -> &'static str {
        (**self).name()
    }
}

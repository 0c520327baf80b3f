//! Reference Resolvers
//!
//! Concrete implementations of the ReferenceResolver port.

mod app_base;
mod package_cache;
mod reference_assembly;

use std::path::PathBuf;

pub use app_base::AppBaseResolver;
pub use package_cache::PackageCacheResolver;
pub use reference_assembly::ReferenceAssemblyResolver;

use crate::domain::services::CompositeResolver;

/// The standard chain: app base, reference assemblies, package cache
pub fn standard_resolver(
    package_folders: Vec<PathBuf>,
    reference_assembly_folders: Vec<PathBuf>,
) -> CompositeResolver {
    CompositeResolver::new(vec![
        Box::new(AppBaseResolver::new()),
        Box::new(ReferenceAssemblyResolver::new(reference_assembly_folders)),
        Box::new(PackageCacheResolver::new(package_folders)),
    ])
}

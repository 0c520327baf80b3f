//! Domain Entities
//!
//! Manifest models read fresh for every module directory.
//! - `ModuleDescriptor` - the module's `module.json`
//! - `DependencyContext` - the module's `<name>.deps.json`

mod dependency_context;
mod module_descriptor;

pub use dependency_context::{CompileLibrary, DependencyContext, LibraryKind};
pub use module_descriptor::ModuleDescriptor;

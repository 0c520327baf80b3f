//! Prune Use Case
//!
//! Removes build byproducts that are not needed at runtime from a module
//! directory: reference-assembly folders, host data assemblies, and static
//! web asset manifests.

mod result;
mod use_case;

pub use result::{PruneResult, PrunedEntry};
pub use use_case::PruneUseCase;

//! Application Layer
//!
//! Use cases that orchestrate the business flow.
//! This layer:
//! - Depends on Domain layer (entities, services, ports)
//! - Does NOT contain business rules (those are in Domain)
//! - Coordinates between Infrastructure and Domain
//!
//! ## Use Cases
//!
//! - `DeployUseCase` - Loads manifests, resolves and copies private references, prunes
//! - `PruneUseCase` - Deletes build byproducts from a module directory

pub mod deploy;
pub mod prune;

pub use deploy::{
    CopiedReference, DeployOptions, DeployReport, DeployUseCase, ModuleReport,
    UnresolvedReference,
};
pub use prune::{PruneResult, PruneUseCase, PrunedEntry};

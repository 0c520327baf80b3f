//! Use Case Factory
//!
//! Creates use cases with infrastructure dependencies wired up.
//! This is the dependency injection point for the application.

use crate::application::DeployUseCase;
use crate::config::Config;
use crate::infrastructure::{standard_resolver, JsonManifestRepository, LocalFs};

/// Type alias for the concrete DeployUseCase with all dependencies
pub type ConcreteDeployUseCase = DeployUseCase<JsonManifestRepository, LocalFs>;

/// Create a deploy use case with all dependencies wired up
///
/// Resolver folders and prune rules come from `config`; environment
/// overrides are expected to be applied already.
pub fn create_deploy_use_case(config: &Config) -> ConcreteDeployUseCase {
    let manifests = JsonManifestRepository::new();
    let file_system = LocalFs::new();
    let resolver = standard_resolver(
        config.package_folders(),
        config.reference_assembly_folders(),
    );

    DeployUseCase::new(manifests, file_system, resolver, config.junk_rules())
}

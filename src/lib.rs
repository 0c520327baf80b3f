//! modbuild - module deployment utility
//!
//! Finishes the build output of plugin modules: for every module directory it
//! reads `module.json` and `<name>.deps.json`, copies the module's private
//! references next to its assembly, and prunes build byproducts that are not
//! needed at runtime.
//!
//! ```ignore
//! let args = modbuild::BuildArgs::parse("ModulePath=Modules/Smartstore.Blog;Modules/Smartstore.Forums");
//! let report = modbuild::deploy(&args.module_paths(), &DeployOptions::new(), &NoopEventSink);
//! assert!(report.is_success());
//! ```

pub mod application;
pub mod config;
pub mod domain;
pub mod error;
pub mod infrastructure;
pub mod presentation;

// Re-exports for convenience
pub use application::{DeployOptions, DeployReport, ModuleReport};
pub use config::Config;
pub use domain::ports::{DeployEvent, DeployEventSink, NoopEventSink};
pub use domain::value_objects::{BuildArgs, ModuleDir};
pub use error::{ModbuildError, ModbuildResult};

/// Deploy every module path with the default configuration plus
/// environment overrides. Never aborts: failures end up in the report.
pub fn deploy(
    module_paths: &[String],
    options: &DeployOptions,
    sink: &dyn DeployEventSink,
) -> DeployReport {
    deploy_with_config(
        module_paths,
        &Config::default().with_env_overrides(),
        options,
        sink,
    )
}

/// Deploy every module path using `config` for resolution and pruning
pub fn deploy_with_config(
    module_paths: &[String],
    config: &Config,
    options: &DeployOptions,
    sink: &dyn DeployEventSink,
) -> DeployReport {
    presentation::create_deploy_use_case(config).execute(module_paths, options, sink)
}

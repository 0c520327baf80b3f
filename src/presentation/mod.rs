//! Presentation Layer
//!
//! This layer handles creating use cases with infrastructure dependencies.
//! Argument parsing and terminal output live in the binary.
//!
//! ## Usage
//!
//! ```ignore
//! use modbuild::presentation::factory;
//!
//! let use_case = factory::create_deploy_use_case(&config);
//! let report = use_case.execute(&paths, &options, &sink);
//! ```

pub mod factory;

pub use factory::{create_deploy_use_case, ConcreteDeployUseCase};

//! Deploy Module
//!
//! Orchestrates private reference deployment for module directories.
//!
//! ## Structure
//!
//! - `options` - Configuration types (`DeployOptions`)
//! - `result` - Result types (`DeployReport`, `ModuleReport`)
//! - `use_case` - Core use case logic (`DeployUseCase`)
//!
//! ## Usage
//!
//! ```ignore
//! use modbuild::application::deploy::{DeployOptions, DeployUseCase};
//!
//! let use_case = DeployUseCase::new(manifests, fs, resolver, rules);
//! let report = use_case.execute(&paths, &DeployOptions::new(), &sink);
//! ```

mod options;
mod result;
mod use_case;

pub use options::DeployOptions;
pub use result::{CopiedReference, DeployReport, ModuleReport, UnresolvedReference};
pub use use_case::DeployUseCase;

//! Domain Ports (Interfaces)
//!
//! These traits define the boundaries of the domain layer.
//! Infrastructure layer provides concrete implementations.

pub mod deploy_events;
pub mod file_system;
pub mod manifest_repository;
pub mod reference_resolver;

pub use deploy_events::{DeployEvent, DeployEventSink, NoopEventSink};
pub use file_system::{DirEntry, FileSystem, FsError, FsResult};
pub use manifest_repository::{ManifestError, ManifestRepository};
pub use reference_resolver::ReferenceResolver;

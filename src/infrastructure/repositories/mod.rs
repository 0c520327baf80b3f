//! Repository Implementations
//!
//! Concrete implementations of domain repository ports.

mod json_manifest;

pub use json_manifest::JsonManifestRepository;

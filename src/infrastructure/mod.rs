//! Infrastructure Layer
//!
//! Concrete implementations of domain ports.
//! This layer handles all I/O operations.
//!
//! ## Structure
//!
//! - `fs/` - Local file system
//! - `repositories/` - JSON manifest loading
//! - `resolvers/` - App base, reference assembly and package cache lookup
//! - `events/` - Event sinks

pub mod events;
pub mod fs;
pub mod repositories;
pub mod resolvers;

// Re-export for convenience
pub use events::JsonEventSink;
pub use fs::LocalFs;
pub use repositories::JsonManifestRepository;
pub use resolvers::{
    standard_resolver, AppBaseResolver, PackageCacheResolver, ReferenceAssemblyResolver,
};

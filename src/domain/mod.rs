//! Domain Layer
//!
//! Pure deployment logic without direct file system access.
//!
//! ## Structure
//!
//! - `entities/` - Manifest models (ModuleDescriptor, DependencyContext)
//! - `value_objects/` - Immutable value types (BuildArgs, ModuleDir, JunkRules, FileStamp)
//! - `services/` - Stateless rules (freshness check, composite resolution)
//! - `ports/` - Interface definitions for infrastructure
//!
//! All I/O goes through the traits in `ports/`.

pub mod entities;
pub mod ports;
pub mod services;
pub mod value_objects;

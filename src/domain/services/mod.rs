//! Domain Services
//!
//! Stateless rules that operate on domain entities.

mod freshness;
mod reference_resolution;

pub use freshness::needs_copy;
pub use reference_resolution::CompositeResolver;

//! Copy freshness rule
//!
//! A destination is current when it exists with the same length and the
//! same modification time as the source. Content is never hashed.

use crate::domain::value_objects::FileStamp;

/// Whether `source` has to be copied over `destination`
pub fn needs_copy(source: &FileStamp, destination: Option<&FileStamp>) -> bool {
    match destination {
        None => true,
        Some(dest) => !source.matches(dest),
    }
}

//! Prune result types

use std::path::PathBuf;

use crate::domain::value_objects::JunkKind;

/// An entry that was removed (or would be, in dry run)
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PrunedEntry {
    pub path: PathBuf,
    pub kind: JunkKind,
}

/// Result of a prune pass over one module directory
#[derive(Debug, Clone, Default)]
pub struct PruneResult {
    /// Entries that were deleted
    pub deleted: Vec<PrunedEntry>,
    /// Errors that occurred
    pub errors: Vec<String>,
}

impl PruneResult {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn add_deleted(&mut self, path: PathBuf, kind: JunkKind) {
        self.deleted.push(PrunedEntry { path, kind });
    }

    pub fn add_error(&mut self, error: String) {
        self.errors.push(error);
    }

    /// Check if operation was successful
    pub fn is_success(&self) -> bool {
        self.errors.is_empty()
    }
}

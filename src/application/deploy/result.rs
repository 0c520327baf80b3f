//! Deploy Result
//!
//! Result types for deploy operations.

use std::path::PathBuf;

use crate::application::prune::PrunedEntry;
use crate::domain::value_objects::{SkipReason, UnresolvedReason};

/// A file copied into a module directory
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CopiedReference {
    pub library: String,
    pub source: PathBuf,
    pub destination: PathBuf,
}

/// A private reference that produced no files
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UnresolvedReference {
    pub library: String,
    pub reason: UnresolvedReason,
}

/// Outcome for a single module directory
#[derive(Debug, Clone)]
pub struct ModuleReport {
    pub name: String,
    pub path: PathBuf,
    /// Why reference deployment did not run, if it didn't
    pub skipped: Option<SkipReason>,
    pub copied: Vec<CopiedReference>,
    /// Destinations that already matched their source
    pub up_to_date: Vec<PathBuf>,
    pub unresolved: Vec<UnresolvedReference>,
    pub pruned: Vec<PrunedEntry>,
    pub errors: Vec<String>,
}

impl ModuleReport {
    pub fn new(name: impl Into<String>, path: impl Into<PathBuf>) -> Self {
        Self {
            name: name.into(),
            path: path.into(),
            skipped: None,
            copied: Vec::new(),
            up_to_date: Vec::new(),
            unresolved: Vec::new(),
            pruned: Vec::new(),
            errors: Vec::new(),
        }
    }

    pub fn is_success(&self) -> bool {
        self.errors.is_empty()
    }
}

/// Result of a deploy run over all module paths
#[derive(Debug, Clone, Default)]
pub struct DeployReport {
    pub modules: Vec<ModuleReport>,
    /// True when this was a dry run
    pub dry_run: bool,
}

impl DeployReport {
    pub fn new() -> Self {
        Self::default()
    }

    /// False iff any module recorded an error
    pub fn is_success(&self) -> bool {
        self.modules.iter().all(ModuleReport::is_success)
    }

    pub fn has_changes(&self) -> bool {
        self.copied_count() > 0 || self.pruned_count() > 0
    }

    pub fn copied_count(&self) -> usize {
        self.modules.iter().map(|m| m.copied.len()).sum()
    }

    pub fn up_to_date_count(&self) -> usize {
        self.modules.iter().map(|m| m.up_to_date.len()).sum()
    }

    pub fn unresolved_count(&self) -> usize {
        self.modules.iter().map(|m| m.unresolved.len()).sum()
    }

    pub fn pruned_count(&self) -> usize {
        self.modules.iter().map(|m| m.pruned.len()).sum()
    }

    pub fn error_count(&self) -> usize {
        self.modules.iter().map(|m| m.errors.len()).sum()
    }

    pub fn module(&self, name: &str) -> Option<&ModuleReport> {
        self.modules.iter().find(|m| m.name == name)
    }
}

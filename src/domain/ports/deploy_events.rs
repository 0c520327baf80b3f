//! Deploy Event Port
//!
//! Provides an observable interface for deploy operations.
//! Enables console diagnostics, JSON event streams, and test recording.

use std::path::PathBuf;

use crate::domain::value_objects::{JunkKind, SkipReason, UnresolvedReason};

/// Event emitted during deploy operations
#[derive(Debug, Clone)]
pub enum DeployEvent {
    /// Run started
    Started { module_count: usize, dry_run: bool },

    /// Module processing started
    ModuleStarted {
        index: usize,
        name: String,
        path: PathBuf,
    },

    /// Deployment step for a module was skipped
    ModuleSkipped { name: String, reason: SkipReason },

    /// A private reference file was copied (or would be, in dry run)
    ReferenceCopied {
        module: String,
        library: String,
        source: PathBuf,
        destination: PathBuf,
        dry_run: bool,
    },

    /// Destination already matches the source
    ReferenceUpToDate {
        module: String,
        library: String,
        destination: PathBuf,
    },

    /// A private reference could not be resolved to any file
    ReferenceUnresolved {
        module: String,
        library: String,
        reason: UnresolvedReason,
    },

    /// A junk entry was deleted (or would be, in dry run)
    JunkDeleted {
        module: String,
        path: PathBuf,
        kind: JunkKind,
        dry_run: bool,
    },

    /// A file operation failed; processing continued
    ItemError {
        module: String,
        path: PathBuf,
        error: String,
    },

    /// Module finished
    ModuleCompleted {
        name: String,
        copied: usize,
        deleted: usize,
        errors: usize,
    },

    /// Run finished
    Completed {
        modules: usize,
        copied: usize,
        deleted: usize,
        unresolved: usize,
        errors: usize,
    },
}

/// Trait for receiving deploy events
///
/// Implementations can be:
/// - ConsoleEventSink: diagnostic lines in the terminal
/// - JsonEventSink: NDJSON event stream for CI
/// - NoopEventSink: Silent operation
pub trait DeployEventSink {
    /// Handle a deploy event
    fn on_event(&self, event: DeployEvent);
}

/// No-op event sink for silent operation
pub struct NoopEventSink;

impl DeployEventSink for NoopEventSink {
    fn on_event(&self, _event: DeployEvent) {}
}

impl<S: DeployEventSink + ?Sized> DeployEventSink for &S {
    fn on_event(&self, event: DeployEvent) {
        (**self).on_event(event)
    }
}

impl<S: DeployEventSink + ?Sized> DeployEventSink for Box<S> {
    fn on_event(&self, event: DeployEvent) {
        (**self).on_event(event)
    }
}

//! Prune Use Case
//!
//! Removes build byproducts from a module directory.

use tracing::debug;

use crate::domain::ports::{DeployEvent, DeployEventSink, FileSystem};
use crate::domain::value_objects::{JunkKind, JunkRules, ModuleDir};

use super::result::PruneResult;

/// Prune use case - deletes junk entries directly under a module directory
pub struct PruneUseCase<FS>
where
    FS: FileSystem,
{
    fs: FS,
    rules: JunkRules,
}

impl<FS> PruneUseCase<FS>
where
    FS: FileSystem,
{
    pub fn new(fs: FS, rules: JunkRules) -> Self {
        Self { fs, rules }
    }

    /// Delete junk among the immediate children of `module`.
    ///
    /// A missing directory is a no-op. Failures are recorded per entry and
    /// do not stop the pass.
    pub fn execute(
        &self,
        module: &ModuleDir,
        dry_run: bool,
        sink: &dyn DeployEventSink,
    ) -> PruneResult {
        let mut result = PruneResult::new();
        let root = module.root();

        if !self.fs.is_dir(root) {
            debug!(module = module.name(), "module directory missing, nothing to prune");
            return result;
        }

        let entries = match self.fs.list_dir(root) {
            Ok(entries) => entries,
            Err(e) => {
                let error = format!("Failed to list {}: {}", root.display(), e);
                sink.on_event(DeployEvent::ItemError {
                    module: module.name().to_string(),
                    path: root.to_path_buf(),
                    error: error.clone(),
                });
                result.add_error(error);
                return result;
            }
        };

        for entry in entries {
            let Some(kind) = self.rules.classify(&entry.name, entry.is_dir) else {
                continue;
            };

            if !dry_run {
                let removed = match kind {
                    JunkKind::Directory => self.fs.remove_dir_all(&entry.path),
                    JunkKind::File => self.fs.remove_file(&entry.path),
                };
                if let Err(e) = removed {
                    let error = format!("Failed to delete {}: {}", entry.path.display(), e);
                    sink.on_event(DeployEvent::ItemError {
                        module: module.name().to_string(),
                        path: entry.path.clone(),
                        error: error.clone(),
                    });
                    result.add_error(error);
                    continue;
                }
            }

            sink.on_event(DeployEvent::JunkDeleted {
                module: module.name().to_string(),
                path: entry.path.clone(),
                kind,
                dry_run,
            });
            result.add_deleted(entry.path, kind);
        }

        result
    }
}

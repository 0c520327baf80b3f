//! Deploy Use Case
//!
//! Orchestrates the per-module flow:
//! 1. Load `module.json` (absent: not a module, nothing else happens)
//! 2. Load `<name>.deps.json` and the private reference list
//! 3. Resolve each private reference and copy stale files into the module
//! 4. Prune build byproducts
//!
//! Faults are recorded per file and never abort the run.

use std::path::{Path, PathBuf};

use tracing::{debug, info, warn};

use crate::application::prune::PruneUseCase;
use crate::domain::entities::{DependencyContext, ModuleDescriptor};
use crate::domain::ports::{
    DeployEvent, DeployEventSink, FileSystem, ManifestError, ManifestRepository,
};
use crate::domain::services::{needs_copy, CompositeResolver};
use crate::domain::value_objects::{FileStamp, JunkRules, ModuleDir, SkipReason, UnresolvedReason};

use super::options::DeployOptions;
use super::result::{CopiedReference, DeployReport, ModuleReport, UnresolvedReference};

/// Deploy use case - copies private references into module directories
///
/// Parameterized by its ports so tests can swap in doubles.
pub struct DeployUseCase<MR, FS>
where
    MR: ManifestRepository,
    FS: FileSystem,
{
    manifests: MR,
    file_system: FS,
    resolver: CompositeResolver,
    rules: JunkRules,
}

impl<MR, FS> DeployUseCase<MR, FS>
where
    MR: ManifestRepository,
    FS: FileSystem,
{
    pub fn new(
        manifests: MR,
        file_system: FS,
        resolver: CompositeResolver,
        rules: JunkRules,
    ) -> Self {
        Self {
            manifests,
            file_system,
            resolver,
            rules,
        }
    }

    /// Process every module path in order
    pub fn execute(
        &self,
        module_paths: &[String],
        options: &DeployOptions,
        sink: &dyn DeployEventSink,
    ) -> DeployReport {
        let mut report = DeployReport::new();
        report.dry_run = options.dry_run;

        sink.on_event(DeployEvent::Started {
            module_count: module_paths.len(),
            dry_run: options.dry_run,
        });

        for (index, raw) in module_paths.iter().enumerate() {
            let module = match ModuleDir::resolve(raw) {
                Ok(module) => module,
                Err(e) => {
                    warn!(path = %raw, error = %e, "skipping module path");
                    let mut skipped = ModuleReport::new(raw.as_str(), raw.as_str());
                    skipped.skipped = Some(SkipReason::InvalidPath);
                    sink.on_event(DeployEvent::ModuleSkipped {
                        name: raw.clone(),
                        reason: SkipReason::InvalidPath,
                    });
                    report.modules.push(skipped);
                    continue;
                }
            };

            sink.on_event(DeployEvent::ModuleStarted {
                index,
                name: module.name().to_string(),
                path: module.root().to_path_buf(),
            });

            let module_report = self.deploy_module(&module, options, sink);

            sink.on_event(DeployEvent::ModuleCompleted {
                name: module_report.name.clone(),
                copied: module_report.copied.len(),
                deleted: module_report.pruned.len(),
                errors: module_report.errors.len(),
            });
            report.modules.push(module_report);
        }

        sink.on_event(DeployEvent::Completed {
            modules: report.modules.len(),
            copied: report.copied_count(),
            deleted: report.pruned_count(),
            unresolved: report.unresolved_count(),
            errors: report.error_count(),
        });

        report
    }

    /// Deploy one module directory
    pub fn deploy_module(
        &self,
        module: &ModuleDir,
        options: &DeployOptions,
        sink: &dyn DeployEventSink,
    ) -> ModuleReport {
        let mut report = ModuleReport::new(module.name(), module.root());

        let manifest = module.module_manifest();
        let descriptor = match self.manifests.load_module_descriptor(&manifest) {
            Ok(Some(descriptor)) => descriptor,
            Ok(None) => {
                debug!(module = module.name(), "no module.json, not a module");
                self.skip(&mut report, SkipReason::NotAModule, sink);
                return report;
            }
            Err(e) => {
                warn!(
                    module = module.name(),
                    error = %e,
                    "ignoring malformed module descriptor"
                );
                self.skip(&mut report, invalid_manifest(&e), sink);
                return report;
            }
        };

        match self.load_dependency_context(module) {
            Ok(context) => {
                self.deploy_references(module, &descriptor, &context, options, sink, &mut report)
            }
            Err(reason) => self.skip(&mut report, reason, sink),
        }

        if options.prune {
            let pruned = PruneUseCase::new(&self.file_system, self.rules.clone()).execute(
                module,
                options.dry_run,
                sink,
            );
            report.pruned = pruned.deleted;
            report.errors.extend(pruned.errors);
        }

        report
    }

    fn load_dependency_context(
        &self,
        module: &ModuleDir,
    ) -> Result<DependencyContext, SkipReason> {
        let path = module.deps_manifest();
        match self.manifests.load_dependency_context(&path) {
            Ok(Some(context)) => Ok(context),
            Ok(None) => {
                debug!(module = module.name(), path = %path.display(), "no dependency manifest");
                Err(SkipReason::MissingDependencyManifest)
            }
            Err(e) => {
                warn!(
                    module = module.name(),
                    error = %e,
                    "ignoring malformed dependency manifest"
                );
                Err(invalid_manifest(&e))
            }
        }
    }

    fn deploy_references(
        &self,
        module: &ModuleDir,
        descriptor: &ModuleDescriptor,
        context: &DependencyContext,
        options: &DeployOptions,
        sink: &dyn DeployEventSink,
        report: &mut ModuleReport,
    ) {
        let Some(references) = descriptor.private_references() else {
            self.skip(report, SkipReason::NoPrivateReferences, sink);
            return;
        };

        for name in references {
            let Some(library) = context.find_library(name) else {
                self.unresolved(module, name, UnresolvedReason::NotFound, sink, report);
                continue;
            };

            let paths = self.resolver.resolve_reference_paths(module, library);
            if paths.is_empty() {
                self.unresolved(module, name, UnresolvedReason::NoPaths, sink, report);
                continue;
            }

            for source in paths {
                self.copy_reference(module, name, &source, options, sink, report);
            }
        }
    }

    /// Copy one resolved file unless the destination is already current
    fn copy_reference(
        &self,
        module: &ModuleDir,
        library: &str,
        source: &Path,
        options: &DeployOptions,
        sink: &dyn DeployEventSink,
        report: &mut ModuleReport,
    ) {
        let Some(destination) = module.destination_for(source) else {
            let error = format!(
                "Failed to copy private reference {library}: {} has no file name",
                source.display()
            );
            self.record_error(module, source.to_path_buf(), error, sink, report);
            return;
        };

        let source_stamp = match self.file_system.stamp(source) {
            Ok(Some(stamp)) => stamp,
            Ok(None) => {
                let error = format!(
                    "Failed to copy private reference {library}: {} does not exist",
                    source.display()
                );
                self.record_error(module, source.to_path_buf(), error, sink, report);
                return;
            }
            Err(e) => {
                let error = format!("Failed to copy private reference {library}: {e}");
                self.record_error(module, source.to_path_buf(), error, sink, report);
                return;
            }
        };

        let destination_stamp: Option<FileStamp> = match self.file_system.stamp(&destination) {
            Ok(stamp) => stamp,
            Err(e) => {
                let error = format!("Failed to copy private reference {library}: {e}");
                self.record_error(module, destination, error, sink, report);
                return;
            }
        };

        if !needs_copy(&source_stamp, destination_stamp.as_ref()) {
            debug!(library, destination = %destination.display(), "up to date");
            sink.on_event(DeployEvent::ReferenceUpToDate {
                module: module.name().to_string(),
                library: library.to_string(),
                destination: destination.clone(),
            });
            report.up_to_date.push(destination);
            return;
        }

        if !options.dry_run {
            if let Err(e) = self.file_system.copy_file(source, &destination) {
                let error = format!(
                    "Failed to copy private reference {library} to {}: {e}",
                    destination.display()
                );
                self.record_error(module, destination, error, sink, report);
                return;
            }
        }

        info!(
            library,
            destination = %destination.display(),
            dry_run = options.dry_run,
            "copied private reference"
        );
        sink.on_event(DeployEvent::ReferenceCopied {
            module: module.name().to_string(),
            library: library.to_string(),
            source: source.to_path_buf(),
            destination: destination.clone(),
            dry_run: options.dry_run,
        });
        report.copied.push(CopiedReference {
            library: library.to_string(),
            source: source.to_path_buf(),
            destination,
        });
    }

    fn skip(&self, report: &mut ModuleReport, reason: SkipReason, sink: &dyn DeployEventSink) {
        sink.on_event(DeployEvent::ModuleSkipped {
            name: report.name.clone(),
            reason: reason.clone(),
        });
        report.skipped = Some(reason);
    }

    fn unresolved(
        &self,
        module: &ModuleDir,
        library: &str,
        reason: UnresolvedReason,
        sink: &dyn DeployEventSink,
        report: &mut ModuleReport,
    ) {
        debug!(
            module = module.name(),
            library,
            reason = reason.code(),
            "private reference unresolved"
        );
        sink.on_event(DeployEvent::ReferenceUnresolved {
            module: module.name().to_string(),
            library: library.to_string(),
            reason,
        });
        report.unresolved.push(UnresolvedReference {
            library: library.to_string(),
            reason,
        });
    }

    fn record_error(
        &self,
        module: &ModuleDir,
        path: PathBuf,
        error: String,
        sink: &dyn DeployEventSink,
        report: &mut ModuleReport,
    ) {
        warn!(module = module.name(), "{error}");
        sink.on_event(DeployEvent::ItemError {
            module: module.name().to_string(),
            path,
            error: error.clone(),
        });
        report.errors.push(error);
    }
}

fn invalid_manifest(error: &ManifestError) -> SkipReason {
    let message = match error {
        ManifestError::Read { source, .. } => source.to_string(),
        ManifestError::Malformed { message, .. } => message.clone(),
    };
    SkipReason::InvalidManifest {
        path: error.path().to_path_buf(),
        message,
    }
}

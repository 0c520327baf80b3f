//! JSON Event Sink
//!
//! Outputs deploy events as NDJSON for CI/automation consumption.

use crate::domain::ports::{DeployEvent, DeployEventSink};
use chrono::{SecondsFormat, Utc};
use std::io::{self, Write};
use std::sync::Mutex;

/// Event sink that outputs NDJSON events to stdout
pub struct JsonEventSink {
    writer: Mutex<Box<dyn Write + Send>>,
}

impl JsonEventSink {
    /// Create a new JSON event sink writing to stdout
    pub fn stdout() -> Self {
        Self {
            writer: Mutex::new(Box::new(io::stdout())),
        }
    }

    /// Create a JSON event sink writing to a custom writer
    pub fn with_writer<W: Write + Send + 'static>(writer: W) -> Self {
        Self {
            writer: Mutex::new(Box::new(writer)),
        }
    }

    fn write_event(&self, mut event: serde_json::Value) {
        if let Some(object) = event.as_object_mut() {
            object.insert(
                "timestamp".to_string(),
                Utc::now()
                    .to_rfc3339_opts(SecondsFormat::Millis, true)
                    .into(),
            );
        }
        if let Ok(mut writer) = self.writer.lock() {
            let _ = writeln!(writer, "{}", event);
            let _ = writer.flush();
        }
    }
}

impl DeployEventSink for JsonEventSink {
    fn on_event(&self, event: DeployEvent) {
        let json = match event {
            DeployEvent::Started {
                module_count,
                dry_run,
            } => serde_json::json!({
                "event": "start",
                "module_count": module_count,
                "dry_run": dry_run,
            }),

            DeployEvent::ModuleStarted { index, name, path } => serde_json::json!({
                "event": "module_start",
                "index": index,
                "module": name,
                "path": path.display().to_string(),
            }),

            DeployEvent::ModuleSkipped { name, reason } => serde_json::json!({
                "event": "module_skipped",
                "module": name,
                "reason": reason.code(),
                "message": reason.to_string(),
            }),

            DeployEvent::ReferenceCopied {
                module,
                library,
                source,
                destination,
                dry_run,
            } => serde_json::json!({
                "event": "reference_copied",
                "module": module,
                "library": library,
                "source": source.display().to_string(),
                "destination": destination.display().to_string(),
                "dry_run": dry_run,
            }),

            DeployEvent::ReferenceUpToDate {
                module,
                library,
                destination,
            } => serde_json::json!({
                "event": "reference_up_to_date",
                "module": module,
                "library": library,
                "destination": destination.display().to_string(),
            }),

            DeployEvent::ReferenceUnresolved {
                module,
                library,
                reason,
            } => serde_json::json!({
                "event": "reference_unresolved",
                "module": module,
                "library": library,
                "reason": reason.code(),
            }),

            DeployEvent::JunkDeleted {
                module,
                path,
                kind,
                dry_run,
            } => serde_json::json!({
                "event": "junk_deleted",
                "module": module,
                "path": path.display().to_string(),
                "kind": kind.to_string(),
                "dry_run": dry_run,
            }),

            DeployEvent::ItemError {
                module,
                path,
                error,
            } => serde_json::json!({
                "event": "item_error",
                "module": module,
                "path": path.display().to_string(),
                "error": error,
            }),

            DeployEvent::ModuleCompleted {
                name,
                copied,
                deleted,
                errors,
            } => serde_json::json!({
                "event": "module_complete",
                "module": name,
                "copied": copied,
                "deleted": deleted,
                "errors": errors,
            }),

            DeployEvent::Completed {
                modules,
                copied,
                deleted,
                unresolved,
                errors,
            } => {
                let status = if errors == 0 { "success" } else { "partial" };
                serde_json::json!({
                    "event": "complete",
                    "status": status,
                    "modules": modules,
                    "copied": copied,
                    "deleted": deleted,
                    "unresolved": unresolved,
                    "errors": errors,
                })
            }
        };

        self.write_event(json);
    }
}

//! Console Event Sink
//!
//! Renders deploy events as the line-oriented diagnostics build scripts
//! grep for (`DeployModule: ...`, `---- Copied private reference ...`).

use std::cell::RefCell;
use std::io::{self, Write};

use modbuild::config::Verbosity;
use modbuild::domain::ports::{DeployEvent, DeployEventSink};

use crate::ui::text::ColoredText;
use crate::ui::theme::ITEM_PREFIX;

pub struct ConsoleEventSink<W: Write> {
    writer: RefCell<W>,
    verbosity: Verbosity,
    color: bool,
}

impl ConsoleEventSink<io::Stdout> {
    pub fn stdout(verbosity: Verbosity, color: bool) -> Self {
        Self::with_writer(io::stdout(), verbosity, color)
    }
}

impl<W: Write> ConsoleEventSink<W> {
    pub fn with_writer(writer: W, verbosity: Verbosity, color: bool) -> Self {
        Self {
            writer: RefCell::new(writer),
            verbosity,
            color,
        }
    }

    #[cfg(test)]
    pub fn into_inner(self) -> W {
        self.writer.into_inner()
    }

    fn line(&self, text: ColoredText) {
        let mut writer = self.writer.borrow_mut();
        let _ = writeln!(writer, "{}", text.render(self.color));
    }

    fn item(&self, text: impl Into<String>, style: fn(String) -> ColoredText) {
        self.line(style(format!("{ITEM_PREFIX} {}", text.into())));
    }

    fn verbose(&self) -> bool {
        self.verbosity >= Verbosity::Verbose
    }

    fn quiet(&self) -> bool {
        self.verbosity == Verbosity::Quiet
    }
}

impl<W: Write> DeployEventSink for ConsoleEventSink<W> {
    fn on_event(&self, event: DeployEvent) {
        match event {
            DeployEvent::Started { .. } => {}

            DeployEvent::ModuleStarted { name, .. } => {
                if !self.quiet() {
                    self.line(ColoredText::plain(format!("DeployModule: {name}")).bold());
                }
            }

            DeployEvent::ModuleSkipped { name, reason } => {
                if reason.is_warning() {
                    self.item(format!("Skipped {name}: {reason}"), ColoredText::warning);
                } else if self.verbose() {
                    self.item(format!("Skipped deployment: {reason}"), ColoredText::dim);
                }
            }

            DeployEvent::ReferenceCopied {
                library,
                destination,
                dry_run,
                ..
            } => {
                if self.quiet() {
                    return;
                }
                let verb = if dry_run { "Would copy" } else { "Copied" };
                self.item(
                    format!("{verb} private reference {library} to {}", destination.display()),
                    ColoredText::success,
                );
            }

            DeployEvent::ReferenceUpToDate {
                library,
                destination,
                ..
            } => {
                if self.verbose() {
                    self.item(
                        format!(
                            "Private reference {library} is up to date: {}",
                            destination.display()
                        ),
                        ColoredText::dim,
                    );
                }
            }

            DeployEvent::ReferenceUnresolved {
                library, reason, ..
            } => {
                self.item(
                    format!("Private reference {library} {reason}."),
                    ColoredText::warning,
                );
            }

            DeployEvent::JunkDeleted {
                path,
                kind,
                dry_run,
                ..
            } => {
                if self.verbose() {
                    let verb = if dry_run { "Would delete" } else { "Deleted" };
                    self.item(format!("{verb} {kind} {}", path.display()), ColoredText::dim);
                }
            }

            DeployEvent::ItemError { error, .. } => {
                self.item(error, ColoredText::error);
            }

            DeployEvent::ModuleCompleted { .. } => {}

            DeployEvent::Completed {
                modules,
                copied,
                deleted,
                unresolved,
                errors,
            } => {
                if self.quiet() && errors == 0 {
                    return;
                }
                let summary = format!(
                    "Processed {modules} module(s): {copied} copied, {deleted} deleted, \
                     {unresolved} unresolved, {errors} error(s)"
                );
                let text = if errors > 0 {
                    ColoredText::error(summary)
                } else {
                    ColoredText::info(summary)
                };
                self.line(text);
            }
        }

        let _ = self.writer.borrow_mut().flush();
    }
}

//! The collaborator that owns a level mask: every record is checked against
//! `Level::enabled_at` before fanning out to the configured outputs.

mod builder;
mod from_config;

pub use builder::{FileBuilder, JsonBuilder, LoggerBuilder, TerminalBuilder};

use crate::level::Level;
use crate::output::{LogRecord, Output};
use crate::scale::{Severity, SeverityRef};

/// Fans each record out to all configured outputs once the level mask admits it.
///
/// Configuration (construction and `set_level`) needs exclusive access;
/// `&self` logging and queries are safe to share once configuration stops.
#[derive(Default)]
pub struct Logger {
    level: Level,
    outputs: Vec<Box<dyn Output>>,
    pub(crate) app_name: Option<String>,
}

impl Logger {
    /// Direct construction would expose output internals — the builder provides a guided API instead.
    #[must_use]
    pub fn builder() -> LoggerBuilder {
        LoggerBuilder::new()
    }

    /// Core dispatch — consults the mask, then fans out to all configured outputs.
    pub fn log(&self, severity: Severity, scope: &str, msg: &str) {
        if !self.level.enabled_at(severity) {
            return;
        }

        let record = LogRecord {
            severity,
            scope: scope.to_string(),
            message: msg.to_string(),
            app_name: self.app_name.clone(),
        };

        for output in &self.outputs {
            let _ = output.write(&record);
        }
    }

    /// Development-time diagnostics that are too noisy for normal operation.
    pub fn debug(&self, scope: &str, msg: &str) {
        self.log(Severity::Debug, scope, msg);
    }

    /// Normal operational milestones — config loaded, listener started, etc.
    pub fn info(&self, scope: &str, msg: &str) {
        self.log(Severity::Info, scope, msg);
    }

    /// Non-fatal anomalies — missing optional config, deprecated features, recoverable errors.
    pub fn warn(&self, scope: &str, msg: &str) {
        self.log(Severity::Warn, scope, msg);
    }

    /// Failures that prevent the current operation from completing.
    pub fn error(&self, scope: &str, msg: &str) {
        self.log(Severity::Error, scope, msg);
    }

    /// Failures the process cannot continue past.
    pub fn fatal(&self, scope: &str, msg: &str) {
        self.log(Severity::Fatal, scope, msg);
    }

    /// Replaces the level mask. Accepts an existing [`Level`] as-is or any
    /// spec shape (severity, index, range, directive string), wrapped into a
    /// fresh mask.
    pub fn set_level(&mut self, level: impl Into<Level>) {
        self.level = level.into();
    }

    /// The active level mask.
    #[must_use]
    pub const fn level(&self) -> &Level {
        &self.level
    }

    /// Would a record at this severity be dispatched?
    #[must_use]
    pub fn enabled_at(&self, severity: impl Into<SeverityRef>) -> bool {
        self.level.enabled_at(severity)
    }

    /// Buffered outputs may lose tail data on abrupt exit without an explicit flush.
    ///
    /// # Errors
    /// Returns the first I/O error encountered across all outputs.
    pub fn flush(&self) -> Result<(), crate::Error> {
        for output in &self.outputs {
            output.flush()?;
        }
        Ok(())
    }

    /// Tests verify the builder wired up the expected number of backends.
    #[must_use]
    pub fn output_count(&self) -> usize {
        self.outputs.len()
    }
}

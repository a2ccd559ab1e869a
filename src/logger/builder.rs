//! Direct Logger construction would require knowing every output's internals —
//! the builder hides that behind a stepwise API.

use super::Logger;
use crate::level::Level;
use crate::output::{FileOutput, JsonOutput, Output, TerminalOutput};
use crate::scale::Severity;

/// Direct Logger construction would expose output internals to every caller.
pub struct LoggerBuilder {
    pub(super) level: Level,
    pub(super) outputs: Vec<Box<dyn Output>>,
}

impl Default for LoggerBuilder {
    fn default() -> Self {
        Self::new()
    }
}

impl LoggerBuilder {
    /// Info-and-above is a safe default for production — debug is opt-in.
    #[must_use]
    pub fn new() -> Self {
        Self {
            level: Level::from_spec(Severity::Info),
            outputs: Vec::new(),
        }
    }

    /// Accepts an existing [`Level`] or any spec shape — severity, index,
    /// inclusive range, or a directive string like `"gte.info lte.error"`.
    #[must_use]
    pub fn level(mut self, level: impl Into<Level>) -> Self {
        self.level = level.into();
        self
    }

    /// Terminal output has its own concerns (colors, stream choice) needing a dedicated sub-builder.
    #[must_use]
    pub fn terminal(self) -> TerminalBuilder {
        TerminalBuilder {
            parent: self,
            output: TerminalOutput::new(),
        }
    }

    /// File output has its own concerns (path, timestamps) needing a dedicated sub-builder.
    #[must_use]
    pub fn file(self) -> FileBuilder {
        FileBuilder {
            parent: self,
            output: FileOutput::new(),
        }
    }

    /// JSON output has its own concerns (JSONL format, database path) needing a dedicated sub-builder.
    #[must_use]
    pub fn json(self) -> JsonBuilder {
        JsonBuilder {
            parent: self,
            output: JsonOutput::new(),
        }
    }

    /// The built-in backends can't cover every use case.
    #[must_use]
    pub fn output(mut self, output: impl Output + 'static) -> Self {
        self.outputs.push(Box::new(output));
        self
    }

    #[must_use]
    pub fn build(self) -> Logger {
        Logger {
            level: self.level,
            outputs: self.outputs,
            app_name: None,
        }
    }
}

/// Terminal output has its own set of concerns separate from file output.
pub struct TerminalBuilder {
    parent: LoggerBuilder,
    output: TerminalOutput,
}

impl TerminalBuilder {
    /// Piped output and color-incapable terminals break on ANSI escape codes.
    #[must_use]
    pub fn colors(mut self, enabled: bool) -> Self {
        self.output = self.output.colors(enabled);
        self
    }

    /// Sub-builder consumes self, so there must be a way back to chain more outputs.
    #[must_use]
    pub fn done(mut self) -> LoggerBuilder {
        self.parent.outputs.push(Box::new(self.output));
        self.parent
    }
}

/// File output has its own set of concerns separate from terminal.
pub struct FileBuilder {
    parent: LoggerBuilder,
    output: FileOutput,
}

impl FileBuilder {
    /// Default XDG path doesn't work for every deployment.
    #[must_use]
    pub fn path(mut self, path: impl Into<String>) -> Self {
        self.output = self.output.path(path);
        self
    }

    /// Different locales and log analysis tools expect different timestamp formats.
    #[must_use]
    pub fn timestamp_format(mut self, format: impl Into<String>) -> Self {
        self.output = self.output.timestamp_format(format);
        self
    }

    /// Without this, all apps would write entries under the same name.
    #[must_use]
    pub fn app_name(mut self, name: impl Into<String>) -> Self {
        self.output = self.output.app_name(name);
        self
    }

    /// Sub-builder consumes self, so there must be a way back to chain more outputs.
    #[must_use]
    pub fn done(mut self) -> LoggerBuilder {
        self.parent.outputs.push(Box::new(self.output));
        self.parent
    }
}

/// JSONL output has its own set of concerns separate from plain files.
pub struct JsonBuilder {
    parent: LoggerBuilder,
    output: JsonOutput,
}

impl JsonBuilder {
    /// Default XDG path doesn't work for every deployment.
    #[must_use]
    pub fn path(mut self, path: impl Into<std::path::PathBuf>) -> Self {
        self.output = self.output.path(path);
        self
    }

    /// Multi-app setups share one JSONL file — the app name distinguishes entries.
    #[must_use]
    pub fn app_name(mut self, name: impl Into<String>) -> Self {
        self.output = self.output.app_name(name);
        self
    }

    /// Sub-builder consumes self, so there must be a way back to chain more outputs.
    #[must_use]
    pub fn done(mut self) -> LoggerBuilder {
        self.parent.outputs.push(Box::new(self.output));
        self.parent
    }
}

//! Terminal is the most common output — immediate feedback on stdout/stderr
//! without configuring file paths or databases.

use super::{LogRecord, Output};
use crate::scale::Severity;
use std::io::{self, Write};

const RESET: &str = "\x1b[0m";
const DIM: &str = "\x1b[2m";

/// Severity color for the tag — bold red for fatal so it stands out in a scrollback.
const fn severity_color(severity: Severity) -> &'static str {
    match severity {
        Severity::Debug => "\x1b[35m",
        Severity::Info => "\x1b[36m",
        Severity::Warn => "\x1b[33m",
        Severity::Error => "\x1b[31m",
        Severity::Fatal => "\x1b[1;31m",
    }
}

/// Line-oriented stdout/stderr backend.
#[derive(Debug, Clone)]
pub struct TerminalOutput {
    /// Piped output and CI environments can't render ANSI escape codes.
    colors_enabled: bool,
}

impl Default for TerminalOutput {
    fn default() -> Self {
        Self::new()
    }
}

impl TerminalOutput {
    /// Colors default to on — interactive terminals are the common case.
    #[must_use]
    pub const fn new() -> Self {
        Self {
            colors_enabled: true,
        }
    }

    /// Piped output and CI environments can't render ANSI escape codes.
    #[must_use]
    pub const fn colors(mut self, enabled: bool) -> Self {
        self.colors_enabled = enabled;
        self
    }

    fn format_record(&self, record: &LogRecord) -> String {
        let tag = record.tag();
        if self.colors_enabled {
            format!(
                "{}{}{} {}{}{}  {}",
                severity_color(record.severity),
                tag,
                RESET,
                DIM,
                record.scope,
                RESET,
                record.message
            )
        } else {
            format!("{} {}  {}", tag, record.scope, record.message)
        }
    }
}

impl Output for TerminalOutput {
    fn write(&self, record: &LogRecord) -> Result<(), crate::Error> {
        let formatted = self.format_record(record);

        // Warn and above go to stderr, others to stdout
        if record.severity >= Severity::Warn {
            writeln!(io::stderr(), "{formatted}")?;
        } else {
            writeln!(io::stdout(), "{formatted}")?;
        }

        Ok(())
    }

    fn flush(&self) -> Result<(), crate::Error> {
        io::stdout().flush()?;
        io::stderr().flush()?;
        Ok(())
    }
}

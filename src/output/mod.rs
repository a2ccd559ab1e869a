//! The built-in backends (terminal, file, JSONL) can't cover every use case — the
//! `Output` trait lets users add custom backends without modifying gatelog itself.

mod file;
mod json;
mod terminal;

pub use file::FileOutput;
pub use json::JsonOutput;
pub use terminal::TerminalOutput;

use crate::scale::Severity;

/// Carries all data a backend needs to render one log line — avoids passing loose parameters.
#[derive(Debug, Clone)]
pub struct LogRecord {
    pub severity: Severity,
    pub scope: String,
    pub message: String,
    /// Multi-app setups share one sink — `None` falls back to the backend's default.
    pub app_name: Option<String>,
}

impl LogRecord {
    /// Backends shouldn't each reinvent the `[WARN]`-style severity tag.
    #[must_use]
    pub fn tag(&self) -> String {
        format!("[{}]", self.severity.as_str().to_uppercase())
    }
}

/// `Send + Sync` bounds enable concurrent logging from multiple threads without locks on the trait object.
pub trait Output: Send + Sync {
    /// Each backend renders the record according to its own format (ANSI, plain text, JSON).
    ///
    /// # Errors
    /// I/O errors from the underlying sink (stderr, file).
    fn write(&self, record: &LogRecord) -> Result<(), crate::Error>;

    /// Buffered backends may lose tail data on abrupt exit without an explicit flush.
    ///
    /// # Errors
    /// I/O errors from the underlying sink.
    fn flush(&self) -> Result<(), crate::Error>;
}

//! Append-only plain-text file backend with timestamped lines.

use super::{LogRecord, Output};
use chrono::Local;
use std::fs::{self, OpenOptions};
use std::io::Write;
use std::path::PathBuf;

/// File output configuration.
#[derive(Debug, Clone)]
pub struct FileOutput {
    /// Log file path; `~` is expanded at write time.
    path: String,
    /// Timestamp format (strftime).
    timestamp_format: String,
    /// Fallback app name when the record carries none.
    app_name: String,
}

impl Default for FileOutput {
    fn default() -> Self {
        Self::new()
    }
}

impl FileOutput {
    /// XDG state directory default keeps logs out of the config tree.
    #[must_use]
    pub fn new() -> Self {
        let path = directories::ProjectDirs::from("", "", "gatelog").map_or_else(
            || "gatelog.log".to_string(),
            |dirs| {
                dirs.state_dir()
                    .unwrap_or_else(|| dirs.data_dir())
                    .join("logs")
                    .join("gatelog.log")
                    .to_string_lossy()
                    .into_owned()
            },
        );

        Self {
            path,
            timestamp_format: "%Y-%m-%d %H:%M:%S".to_string(),
            app_name: "gatelog".to_string(),
        }
    }

    /// Default XDG path doesn't work for every deployment (containers, custom setups).
    #[must_use]
    pub fn path(mut self, path: impl Into<String>) -> Self {
        self.path = path.into();
        self
    }

    /// Different locales and log analysis tools expect different timestamp formats.
    #[must_use]
    pub fn timestamp_format(mut self, format: impl Into<String>) -> Self {
        self.timestamp_format = format.into();
        self
    }

    /// Multiple apps logging to the same file need distinct entries.
    #[must_use]
    pub fn app_name(mut self, name: impl Into<String>) -> Self {
        self.app_name = name.into();
        self
    }

    /// Config values use `~` for portability — the OS needs an absolute path.
    fn resolve_path(&self) -> PathBuf {
        PathBuf::from(shellexpand::tilde(&self.path).as_ref())
    }

    fn format_content(&self, record: &LogRecord) -> String {
        let timestamp = Local::now().format(&self.timestamp_format);
        let app = record.app_name.as_deref().unwrap_or(&self.app_name);
        format!(
            "{timestamp} {} {} {}  {}",
            record.tag(),
            app,
            record.scope,
            record.message
        )
    }
}

impl Output for FileOutput {
    fn write(&self, record: &LogRecord) -> Result<(), crate::Error> {
        let path = self.resolve_path();

        if let Some(parent) = path.parent()
            && !parent.exists()
        {
            fs::create_dir_all(parent)?;
        }

        // Append with a single write so concurrent writers don't interleave
        let mut file = OpenOptions::new().create(true).append(true).open(&path)?;
        let mut content = self.format_content(record);
        content.push('\n');
        file.write_all(content.as_bytes())?;

        Ok(())
    }

    fn flush(&self) -> Result<(), crate::Error> {
        Ok(())
    }
}

//! Plain log files can't be efficiently queried for aggregates — JSONL gives
//! downstream tooling a structured database without requiring `SQLite` or a
//! separate service.

use super::{LogRecord, Output};
use chrono::Local;
use serde::Serialize;
use std::fs::{self, OpenOptions};
use std::io::Write;
use std::path::PathBuf;
use ulid::Ulid;

/// Flat structure optimized for JSONL — one object per line enables `grep` and `jq` queries.
#[derive(Debug, Serialize)]
struct JsonEntry {
    /// ULID is time-sortable and globally unique — no collisions even with concurrent writers.
    id: String,
    /// RFC 3339 is the most widely supported machine-readable timestamp format.
    ts: String,
    /// Severity filtering in queries needs the level as a queryable field.
    level: String,
    /// Queries often filter by subsystem — `scope` is the primary grouping dimension.
    scope: String,
    msg: String,
    /// Multi-app setups share one JSONL file — the app field lets queries filter by application.
    #[serde(skip_serializing_if = "Option::is_none")]
    app: Option<String>,
}

/// Append-only JSONL file — one JSON object per line.
#[derive(Debug, Clone)]
pub struct JsonOutput {
    /// Default XDG path doesn't work for every deployment.
    file_path: PathBuf,
    /// JSONL records need an app field so queries can filter by application.
    app_name: Option<String>,
}

impl Default for JsonOutput {
    fn default() -> Self {
        Self::new()
    }
}

impl JsonOutput {
    /// Sensible XDG default path lets the builder work without any configuration.
    #[must_use]
    pub fn new() -> Self {
        let file_path = directories::ProjectDirs::from("", "", "gatelog").map_or_else(
            || PathBuf::from("gatelog.jsonl"),
            |dirs| {
                dirs.state_dir()
                    .unwrap_or_else(|| dirs.data_dir())
                    .join("db")
                    .join("gatelog.jsonl")
            },
        );

        Self {
            file_path,
            app_name: None,
        }
    }

    /// Default XDG path doesn't work for every deployment (containers, custom setups).
    #[must_use]
    pub fn path(mut self, path: impl Into<PathBuf>) -> Self {
        self.file_path = path.into();
        self
    }

    /// Multi-app setups share one JSONL file — the app name distinguishes entries.
    #[must_use]
    pub fn app_name(mut self, name: impl Into<String>) -> Self {
        self.app_name = Some(name.into());
        self
    }

    /// Config values use `~` for portability — the OS needs an absolute path.
    fn resolve_path(&self) -> PathBuf {
        let path_str = self.file_path.to_string_lossy();
        PathBuf::from(shellexpand::tilde(&path_str).as_ref())
    }

    fn create_entry(&self, record: &LogRecord) -> JsonEntry {
        let app = record.app_name.clone().or_else(|| self.app_name.clone());

        JsonEntry {
            id: Ulid::new().to_string(),
            ts: Local::now().to_rfc3339(),
            level: record.severity.as_str().to_string(),
            scope: record.scope.clone(),
            msg: record.message.clone(),
            app,
        }
    }
}

impl Output for JsonOutput {
    fn write(&self, record: &LogRecord) -> Result<(), crate::Error> {
        let path = self.resolve_path();

        if let Some(parent) = path.parent()
            && !parent.exists()
        {
            fs::create_dir_all(parent)?;
        }

        let entry = self.create_entry(record);
        let json = serde_json::to_string(&entry)
            .map_err(|e| crate::Error::Format(format!("JSON serialization failed: {e}")))?;

        // Append to file (JSONL format: one JSON object per line)
        let mut file = OpenOptions::new().create(true).append(true).open(&path)?;
        writeln!(file, "{json}")?;

        Ok(())
    }

    fn flush(&self) -> Result<(), crate::Error> {
        Ok(())
    }
}

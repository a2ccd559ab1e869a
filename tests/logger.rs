//! Tests for logger construction, level re-assignment, and mask gating.

use gatelog::{Config, Level, LogRecord, Logger, Output, Severity};
use std::sync::{Arc, Mutex};

/// Test backend that records every dispatched line.
#[derive(Clone)]
struct CaptureOutput {
    lines: Arc<Mutex<Vec<String>>>,
}

impl CaptureOutput {
    fn new() -> (Self, Arc<Mutex<Vec<String>>>) {
        let lines = Arc::new(Mutex::new(Vec::new()));
        (
            Self {
                lines: Arc::clone(&lines),
            },
            lines,
        )
    }
}

impl Output for CaptureOutput {
    fn write(&self, record: &LogRecord) -> Result<(), gatelog::Error> {
        self.lines
            .lock()
            .unwrap()
            .push(format!("{} {}", record.severity, record.message));
        Ok(())
    }

    fn flush(&self) -> Result<(), gatelog::Error> {
        Ok(())
    }
}

#[test]
fn builder_default() {
    let logger = Logger::builder().build();
    assert_eq!(logger.output_count(), 0);
    // Info-and-above is the default mask.
    assert!(!logger.enabled_at("debug"));
    assert!(logger.enabled_at("info"));
    assert!(logger.enabled_at("fatal"));
}

#[test]
fn builder_accepts_directive_strings() {
    let logger = Logger::builder().level("gte.info lte.error").build();
    assert!(logger.enabled_at("info"));
    assert!(logger.enabled_at("error"));
    assert!(!logger.enabled_at("fatal"));
}

#[test]
fn builder_with_terminal() {
    let logger = Logger::builder().terminal().colors(false).done().build();
    assert_eq!(logger.output_count(), 1);
}

#[test]
fn builder_multiple_outputs() {
    let logger = Logger::builder()
        .level("gte.debug")
        .terminal()
        .done()
        .file()
        .path("/tmp/gatelog-test/app.log")
        .done()
        .build();
    assert_eq!(logger.output_count(), 2);
}

#[test]
fn log_respects_mask() {
    let (capture, lines) = CaptureOutput::new();
    let logger = Logger::builder()
        .level("at.debug at.error")
        .output(capture)
        .build();

    logger.debug("TEST", "kept");
    logger.info("TEST", "dropped");
    logger.warn("TEST", "dropped");
    logger.error("TEST", "kept");
    logger.fatal("TEST", "dropped");

    let lines = lines.lock().unwrap();
    assert_eq!(*lines, ["debug kept", "error kept"]);
}

#[test]
fn set_level_accepts_an_existing_level() {
    let mut logger = Logger::builder().build();
    let mask = Level::new().gte("warn").lte("error");
    logger.set_level(mask.clone());
    assert_eq!(logger.level(), &mask);
}

#[test]
fn set_level_accepts_spec_shapes() {
    let mut logger = Logger::builder().build();

    logger.set_level(Severity::Error);
    assert!(!logger.enabled_at("warn"));
    assert!(logger.enabled_at("error"));

    logger.set_level("at.info");
    assert!(logger.enabled_at("info"));
    assert!(!logger.enabled_at("error"));

    logger.set_level(Severity::Debug..=Severity::Warn);
    assert!(logger.enabled_at("debug"));
    assert!(!logger.enabled_at("error"));

    logger.set_level(0);
    assert!(logger.enabled_at("debug"));
    assert!(logger.enabled_at("fatal"));
}

#[test]
fn set_level_replaces_rather_than_refines() {
    let (capture, lines) = CaptureOutput::new();
    let mut logger = Logger::builder().level("gte.fatal").output(capture).build();

    logger.info("TEST", "dropped");
    logger.set_level("gte.debug");
    logger.info("TEST", "kept");

    assert_eq!(*lines.lock().unwrap(), ["info kept"]);
}

#[test]
fn from_config_defaults_to_terminal_at_info() {
    let logger = Logger::from_config_with(&Config::default(), "testapp");
    assert_eq!(logger.output_count(), 1);
    assert!(!logger.enabled_at("debug"));
    assert!(logger.enabled_at("info"));
}

#[test]
fn flush_without_outputs_is_ok() {
    let logger = Logger::builder().build();
    assert!(logger.flush().is_ok());
}

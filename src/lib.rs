//! `gatelog` - Severity-mask log filtering with a combinable level mini-language.
//!
//! Instead of a single minimum-level threshold, a [`Level`] is a boolean mask
//! over the severity scale. Modifiers (`at`, `gt`, `gte`, `lt`, `lte`) carve
//! the mask down, and a textual mini-language (`"gte.info lte.error"`) drives
//! the same modifiers from config files:
//! - Masks combine: the first modifier resets, later ones refine
//! - Non-contiguous enabled sets (`"at.debug at.error"`) are first-class
//! - Unknown severity names degrade to no-ops, never errors
//! - A [`Logger`] collaborator gates records through the mask and fans them
//!   out to terminal, file, and JSONL outputs
//!
//! # Example
//!
//! ```
//! use gatelog::{Level, Logger};
//!
//! let mut logger = Logger::builder()
//!     .level("gte.debug")
//!     .terminal()
//!         .colors(false)
//!         .done()
//!     .build();
//!
//! logger.info("MAIN", "Application started");
//! logger.warn("NET", "Connection timeout");
//!
//! // Enable info through error, nothing above or below.
//! logger.set_level(Level::from_spec("info").lte("error"));
//! assert!(logger.enabled_at("warn"));
//! assert!(!logger.enabled_at("fatal"));
//! ```

// Core modules
pub mod config;
pub mod level;
pub mod logger;
pub mod output;
pub mod scale;

mod error;

// Re-exports for convenience
pub use config::Config;
pub use error::Error;
pub use level::{Level, LevelSpec};
pub use logger::{Logger, LoggerBuilder};
pub use output::{FileOutput, JsonOutput, LogRecord, Output, TerminalOutput};
pub use scale::{Scale, Severity, SeverityRef};

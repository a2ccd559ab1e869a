//! Logger construction from gatelog config files.

use super::{Logger, LoggerBuilder};
use crate::config::Config;

impl Logger {
    /// Creates a logger from the default gatelog config file.
    ///
    /// Loads config from the XDG config directory and builds a logger with
    /// terminal, file, and JSONL outputs as configured. Load failures fall
    /// back to defaults so embedding applications always get a logger.
    #[must_use]
    pub fn from_config(app_name: &str) -> Self {
        let config = Config::load().unwrap_or_default();
        Self::from_config_with(&config, app_name)
    }

    /// Creates a logger from an already-loaded config.
    #[must_use]
    pub fn from_config_with(config: &Config, app_name: &str) -> Self {
        let mut builder = LoggerBuilder::new().level(config.parse_level());

        if config.terminal.enabled {
            builder = builder.terminal().colors(config.terminal.colors).done();
        }

        if config.file.enabled {
            let mut file = builder.file().app_name(app_name);
            if !config.file.path.is_empty() {
                file = file.path(&config.file.path);
            }
            if !config.file.timestamp_format.is_empty() {
                file = file.timestamp_format(&config.file.timestamp_format);
            }
            builder = file.done();
        }

        if config.json.enabled {
            let mut json = builder.json().app_name(app_name);
            if !config.json.path.is_empty() {
                json = json.path(&config.json.path);
            }
            builder = json.done();
        }

        let mut logger = builder.build();
        logger.app_name = Some(app_name.to_string());
        logger
    }
}

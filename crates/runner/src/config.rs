//! Configuration loading for holiday-watch
//!
//! The holiday comes from, in increasing priority:
//! - the built-in default (Christmas)
//! - a JSON configuration file
//! - the `HOLIDAY` environment variable (`MM-DD`)
//! - the `--holiday` command-line flag (`MM-DD`)

use holiday_core::Holiday;
use holiday_ports::{ConfigError, ConfigResult};
use serde::{Deserialize, Serialize};
use std::path::Path;

/// Environment variable holding a `MM-DD` holiday override
pub const HOLIDAY_ENV: &str = "HOLIDAY";

/// Root configuration
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct WatchConfig {
    /// Holiday to watch for
    #[serde(default)]
    pub holiday: Holiday,
}

impl WatchConfig {
    /// Load configuration from a JSON file
    pub fn from_file(path: impl AsRef<Path>) -> ConfigResult<Self> {
        let content = std::fs::read_to_string(path.as_ref()).map_err(|e| ConfigError::Io {
            path: path.as_ref().display().to_string(),
            error: e.to_string(),
        })?;

        Self::from_json(&content)
    }

    /// Parse configuration from JSON string
    pub fn from_json(json: &str) -> ConfigResult<Self> {
        serde_json::from_str(json).map_err(|e| ConfigError::Parse(e.to_string()))
    }

    /// Resolve the effective configuration from every source
    ///
    /// `flag` wins over `env`, which wins over the file, which wins over the
    /// default.
    pub fn resolve(
        file: Option<&Path>,
        env: Option<&str>,
        flag: Option<&str>,
    ) -> ConfigResult<Self> {
        let mut config = match file {
            Some(path) => Self::from_file(path)?,
            None => Self::default(),
        };

        if let Some(holiday) = flag.or(env) {
            config.holiday = holiday.parse()?;
        }

        Ok(config)
    }
}

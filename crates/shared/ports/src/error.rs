use holiday_core::HolidayParseError;
use thiserror::Error;

/// Errors from driving the clock monitor's background unit
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum MonitorError {
    #[error("Monitor must be started from within a tokio runtime")]
    NoRuntime,

    #[error("Background unit failed: {0}")]
    UnitFailed(String),
}

pub type MonitorResult<T> = std::result::Result<T, MonitorError>;

/// Errors from loading the watch configuration
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ConfigError {
    #[error("Failed to read config file {path}: {error}")]
    Io { path: String, error: String },

    #[error("Failed to parse config: {0}")]
    Parse(String),

    #[error("Invalid holiday: {0}")]
    InvalidHoliday(#[from] HolidayParseError),
}

pub type ConfigResult<T> = std::result::Result<T, ConfigError>;

//! Command-line parsing for the `holiday-watch` binary

use std::path::PathBuf;
use thiserror::Error;

pub const USAGE: &str = r#"holiday-watch - Is it the holiday yet?

USAGE:
    holiday-watch [OPTIONS]

OPTIONS:
    --holiday <MM-DD>   Holiday to watch for (default: 12-25)
    --config <PATH>     Load configuration from JSON file
    --once              Print the current answer and exit
    --help              Print this help message

ENVIRONMENT VARIABLES:
    HOLIDAY             Holiday to watch for, used when --holiday is absent
    RUST_LOG            Log level filter

EXAMPLES:
    # Watch for Christmas until Ctrl-C
    holiday-watch

    # Is it New Year's Day right now?
    holiday-watch --once --holiday 01-01
"#;

/// Errors from parsing command-line arguments
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ArgsError {
    #[error("{0} requires a value")]
    MissingValue(String),

    #[error("Unknown argument: {0}")]
    Unknown(String),
}

/// Options for a watch run
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct RunOptions {
    pub config_path: Option<PathBuf>,
    pub holiday: Option<String>,
    pub once: bool,
}

/// What the binary was asked to do
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Command {
    Help,
    Run(RunOptions),
}

/// Parse arguments, excluding the program name
pub fn parse_args<I, S>(args: I) -> Result<Command, ArgsError>
where
    I: IntoIterator<Item = S>,
    S: Into<String>,
{
    let mut options = RunOptions::default();
    let mut args = args.into_iter().map(Into::into);

    while let Some(arg) = args.next() {
        match arg.as_str() {
            "--help" | "-h" => return Ok(Command::Help),
            "--once" => options.once = true,
            "--config" | "-c" => {
                let path = args.next().ok_or(ArgsError::MissingValue(arg))?;
                options.config_path = Some(PathBuf::from(path));
            }
            "--holiday" => {
                let holiday = args.next().ok_or(ArgsError::MissingValue(arg))?;
                options.holiday = Some(holiday);
            }
            _ => return Err(ArgsError::Unknown(arg)),
        }
    }

    Ok(Command::Run(options))
}

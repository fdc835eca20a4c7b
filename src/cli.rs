//! CLI command implementations for Digger.

pub(crate) mod play;
pub(crate) mod run;
pub(crate) mod validate;

mod output;

use clap::ValueEnum;
use digger::GameState;
use digger::level::{default_level, load_level_file};
use std::error::Error;
use std::fmt;
use std::path::Path;

/// Output format for the `run` command.
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub(crate) enum OutputFormat {
    /// Human-readable text output.
    Text,
    /// Machine-readable JSON output.
    Json,
}

/// CLI error type.
#[derive(Debug)]
pub(crate) struct CliError {
    message: String,
}

impl CliError {
    /// Create a new CLI error.
    pub(crate) fn new(message: impl Into<String>) -> Self {
        Self {
            message: message.into(),
        }
    }
}

impl fmt::Display for CliError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.message)
    }
}

impl Error for CliError {}

impl From<std::io::Error> for CliError {
    fn from(e: std::io::Error) -> Self {
        Self::new(e.to_string())
    }
}

impl From<digger::LevelError> for CliError {
    fn from(e: digger::LevelError) -> Self {
        Self::new(e.to_string())
    }
}

impl From<digger::GridError> for CliError {
    fn from(e: digger::GridError) -> Self {
        Self::new(format!("Engine error: {e}"))
    }
}

/// Load the level at `path`, or the built-in level when no path is given.
pub(crate) fn open_level(path: Option<&Path>) -> Result<GameState, CliError> {
    let state = match path {
        Some(path) => load_level_file(path)?,
        None => default_level()?,
    };
    Ok(state)
}

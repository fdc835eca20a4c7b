//! Run command implementation.

use super::output::format_text;
use super::{CliError, OutputFormat, open_level};
use digger::session::{SessionConfig, parse_script, run_state};
use std::path::Path;

/// Execute the run command.
///
/// # Errors
///
/// Returns an error if the level or the move script is invalid.
pub(crate) fn execute(
    level: Option<&Path>,
    moves: &str,
    ticks: Option<u32>,
    format: OutputFormat,
    keep_going: bool,
    frames: bool,
) -> Result<(), CliError> {
    let state = open_level(level)?;
    let inputs = parse_script(moves).map_err(|e| CliError::new(format!("Invalid moves: {e}")))?;

    let config = SessionConfig {
        max_ticks: ticks,
        stop_on_game_over: !keep_going,
        record_frames: frames,
    };

    let result = run_state(state, &inputs, &config)?;

    match format {
        OutputFormat::Text => {
            print!("{}", format_text(&result));
        }
        OutputFormat::Json => {
            let json = serde_json::to_string_pretty(&result)
                .map_err(|e| CliError::new(format!("JSON serialization failed: {e}")))?;
            println!("{json}");
        }
    }

    Ok(())
}

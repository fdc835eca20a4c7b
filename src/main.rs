//! Digger CLI - Command-line interface for running and playing Digger levels.

// Allow print in the CLI binary
#![allow(clippy::print_stdout, clippy::print_stderr)]
#![cfg_attr(test, allow(clippy::unwrap_used))]

mod cli;

use clap::{Parser, Subcommand};
use std::path::PathBuf;
use std::process::ExitCode;

/// Digger - A deterministic tile-grid creature simulation
#[derive(Parser, Debug)]
#[command(name = "digger")]
#[command(author, version, about, long_about = None)]
struct Args {
    #[command(subcommand)]
    command: Commands,
}

/// Available commands
#[derive(Subcommand, Debug)]
enum Commands {
    /// Run a level headless with a scripted sequence of moves
    Run {
        /// Level file (default: built-in level)
        level: Option<PathBuf>,

        /// Moves, one per tick: U, D, L, R or . for no input
        #[arg(short, long, default_value = "")]
        moves: String,

        /// Number of ticks to run (default: one per move)
        #[arg(short, long)]
        ticks: Option<u32>,

        /// Output format: text or json
        #[arg(short, long, default_value = "text")]
        format: cli::OutputFormat,

        /// Keep running after the game is over
        #[arg(long)]
        keep_going: bool,

        /// Include a frame for every tick
        #[arg(long)]
        frames: bool,
    },

    /// Play a level interactively in the terminal
    Play {
        /// Level file (default: built-in level)
        level: Option<PathBuf>,

        /// Tick delay in milliseconds (default: 200)
        #[arg(long, default_value = "200")]
        speed: u64,
    },

    /// Validate a level file
    Validate {
        /// Level file to validate
        #[arg(required = true)]
        level: PathBuf,
    },
}

fn main() -> ExitCode {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("warn")).init();

    let args = Args::parse();

    let result = match args.command {
        Commands::Run {
            level,
            moves,
            ticks,
            format,
            keep_going,
            frames,
        } => cli::run::execute(level.as_deref(), &moves, ticks, format, keep_going, frames),

        Commands::Play { level, speed } => cli::play::execute(level.as_deref(), speed),

        Commands::Validate { level } => cli::validate::execute(&level),
    };

    match result {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            eprintln!("Error: {e}");
            ExitCode::FAILURE
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::CommandFactory;

    #[test]
    fn test_cli_definition() {
        Args::command().debug_assert();
    }

    #[test]
    fn test_parse_run() {
        let args = Args::try_parse_from(["digger", "run", "--moves", "LLU", "--format", "json"])
            .unwrap();
        match args.command {
            Commands::Run {
                level,
                moves,
                format,
                ..
            } => {
                assert!(level.is_none());
                assert_eq!(moves, "LLU");
                assert_eq!(format, cli::OutputFormat::Json);
            }
            other => panic!("unexpected command {other:?}"),
        }
    }
}

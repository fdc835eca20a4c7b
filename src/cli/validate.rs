//! Level validation command implementation.

use super::CliError;
use digger::level::parse_level;
use digger::{EntityKind, GameState};
use std::fs;
use std::path::Path;

/// Execute the validate command.
///
/// # Errors
///
/// Returns an error if the level file cannot be read or is invalid.
pub(crate) fn execute(level: &Path) -> Result<(), CliError> {
    let text = fs::read_to_string(level)
        .map_err(|e| CliError::new(format!("Failed to read {}: {e}", level.display())))?;

    println!("Validating: {}", level.display());
    println!();

    let grid = match parse_level(&text) {
        Ok(grid) => {
            print_check("Level format", true);
            grid
        }
        Err(e) => {
            print_check("Level format", false);
            return Err(e.into());
        }
    };

    if let Err(e) = GameState::new(grid.clone()) {
        print_check("Exactly one player", false);
        return Err(e.into());
    }
    print_check("Exactly one player", true);

    println!();
    println!("Summary:");
    println!("  Size:      {}x{}", grid.width(), grid.height());
    for kind in EntityKind::ALL {
        let label = format!("{kind}:");
        println!("  {label:<10} {}", grid.count(kind));
    }

    println!();
    println!("Validation successful!");

    Ok(())
}

fn print_check(name: &str, ok: bool) {
    let status = if ok { "OK" } else { "FAILED" };
    println!("{name}... {status}");
}

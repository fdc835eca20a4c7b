//! Output formatting utilities for CLI.

use digger::SessionResult;

/// Format a session result as human-readable text.
pub(super) fn format_text(result: &SessionResult) -> String {
    let mut output = String::new();

    for frame in &result.frames {
        output.push_str(&format!("Tick {} (score {})\n", frame.tick, frame.score));
        output.push_str(&frame.board);
        output.push('\n');
    }

    output.push_str("Final level:\n");
    output.push_str(&result.final_level);
    output.push('\n');

    output.push_str("Session Result\n");
    output.push_str(&format!("  Ticks: {}\n", result.ticks_run));
    output.push_str(&format!("  Score: {}\n", result.score));
    match (result.game_over, result.game_over_tick) {
        (true, Some(tick)) => output.push_str(&format!("  Game over on tick {tick}\n")),
        (true, None) => output.push_str("  Game over\n"),
        (false, _) => output.push_str("  Game running\n"),
    }
    match result.player {
        Some(at) => output.push_str(&format!("  Player at ({}, {})\n", at.x, at.y)),
        None => output.push_str("  Player destroyed\n"),
    }

    let left = &result.remaining;
    output.push_str(&format!(
        "  Remaining: {} gold, {} sacks, {} monsters, {} terrain\n",
        left.gold, left.sacks, left.monsters, left.terrain
    ));

    output
}

#[cfg(test)]
mod tests {
    use super::*;
    use digger::session::{SessionConfig, run_session};

    #[test]
    fn test_format_text() {
        let result = run_session("T.G.P\n", "LL", &SessionConfig::default()).unwrap();
        let text = format_text(&result);
        assert!(text.contains("Score: 10"));
        assert!(text.contains("Player at (2, 0)"));
        assert!(text.contains("T.P.."));
    }

    #[test]
    fn test_format_text_game_over() {
        let result = run_session("PM\n", ".", &SessionConfig::default()).unwrap();
        let text = format_text(&result);
        assert!(text.contains("Game over on tick 1\n"));
        assert!(text.contains("Player destroyed\n"));
        assert!(text.contains("  Remaining: 0 gold, 0 sacks, 1 monsters, 0 terrain\n"));
    }
}

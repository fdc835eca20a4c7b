//! ASCII rendering for terminals and logs.

use crate::game::{Coord, EntityKind, GameState};

/// Glyph drawn for an empty cell.
pub const EMPTY_CELL: char = ' ';

/// Display glyph for a cell.
#[must_use]
pub const fn cell_glyph(kind: Option<EntityKind>) -> char {
    match kind {
        Some(kind) => kind.glyph(),
        None => EMPTY_CELL,
    }
}

/// Render the grid inside a border.
#[must_use]
pub fn render_ascii(state: &GameState) -> String {
    let grid = state.grid();
    let width = usize::from(grid.width());
    let border = format!("+{}+\n", "-".repeat(width));

    let mut out = String::with_capacity(border.len() * (usize::from(grid.height()) + 2));
    out.push_str(&border);
    for y in 0..grid.height() {
        out.push('|');
        for x in 0..grid.width() {
            out.push(cell_glyph(grid.kind_at(Coord::new(x, y))));
        }
        out.push_str("|\n");
    }
    out.push_str(&border);
    out
}

/// One-line status: tick, score and game-over flag.
#[must_use]
pub fn render_status(state: &GameState) -> String {
    let mut status = format!("tick {}  score {}", state.tick(), state.score());
    if state.is_game_over() {
        status.push_str("  GAME OVER");
    }
    status
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::level::load_level;

    #[test]
    fn test_render_ascii() {
        let state = load_level("T.G\n.P.\n").unwrap();
        assert_eq!(render_ascii(&state), "+---+\n|T G|\n| P |\n+---+\n");
    }

    #[test]
    fn test_render_status() {
        let mut state = load_level("PM\n").unwrap();
        assert_eq!(render_status(&state), "tick 0  score 0");
        state.step().unwrap();
        assert_eq!(render_status(&state), "tick 1  score 0  GAME OVER");
    }

    #[test]
    fn test_cell_glyph() {
        assert_eq!(cell_glyph(None), ' ');
        assert_eq!(cell_glyph(Some(EntityKind::Monster)), 'M');
    }
}

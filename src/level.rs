//! Plain-text level format.
//!
//! One line per row, one glyph per cell:
//!
//! | glyph       | entity  |
//! |-------------|---------|
//! | `T`         | Terrain |
//! | `P`         | Player  |
//! | `S`         | Sack    |
//! | `G`         | Gold    |
//! | `M`         | Monster |
//! | space, `.`  | empty   |
//!
//! Blank lines are skipped and carriage returns are ignored, so files saved
//! with Windows line endings load unchanged.

use std::fs;
use std::path::Path;

use log::debug;

use crate::error::LevelError;
use crate::game::{Coord, Entity, EntityKind, GameState, Grid};

/// Glyph the writer uses for empty cells.
pub const EMPTY_GLYPH: char = '.';

/// The level played when none is given.
pub const DEFAULT_LEVEL: &str = "\
TTTTTTTTTTTTTTT
TP...TTSTTTGTMT
TTTT.TT.TTT.T.T
TGTT.S..GTT...T
TTTT.TTTTTTTT.T
T....TTSTTGTT.T
TSTTGTT.TTTTT.T
TTTTTTT...M...T
TTTTTTTTTTTTTTT
";

/// Parse level text into a grid.
///
/// Does not check the player count; [`GameState::new`] does. Use
/// [`load_level`] to get both.
///
/// # Errors
///
/// Returns a [`LevelError`] for empty, ragged or oversize levels and for
/// unknown glyphs.
pub fn parse_level(text: &str) -> Result<Grid, LevelError> {
    let rows: Vec<Vec<char>> = text
        .split('\n')
        .map(|line| line.chars().filter(|&c| c != '\r').collect::<Vec<_>>())
        .filter(|row| !row.is_empty())
        .collect();

    let Some(first) = rows.first() else {
        return Err(LevelError::Empty);
    };
    let width = first.len();
    let height = rows.len();

    for (idx, row) in rows.iter().enumerate() {
        if row.len() != width {
            return Err(LevelError::Ragged {
                row: idx + 1,
                expected: width,
                found: row.len(),
            });
        }
    }

    let too_large = LevelError::TooLarge { width, height };
    let grid_width = u16::try_from(width).map_err(|_| too_large.clone())?;
    let grid_height = u16::try_from(height).map_err(|_| too_large.clone())?;
    let mut grid = Grid::new(grid_width, grid_height).ok_or(too_large)?;

    for (y, row) in (0..grid_height).zip(&rows) {
        for (x, &glyph) in (0..grid_width).zip(row) {
            let cell = match glyph {
                ' ' | EMPTY_GLYPH => None,
                other => Some(EntityKind::from_glyph(other).map(Entity::of_kind).ok_or(
                    LevelError::UnknownGlyph {
                        row: usize::from(y) + 1,
                        column: usize::from(x) + 1,
                        glyph,
                    },
                )?),
            };
            // Coordinates come from the grid's own dimensions.
            grid.set(Coord::new(x, y), cell)
                .map_err(|_| LevelError::TooLarge { width, height })?;
        }
    }

    debug!(
        "parsed {width}x{height} level with {} entities",
        grid.live_count()
    );
    Ok(grid)
}

/// Parse level text and start a session on it.
///
/// # Errors
///
/// Returns a [`LevelError`] if the text does not parse or does not hold
/// exactly one player.
pub fn load_level(text: &str) -> Result<GameState, LevelError> {
    GameState::new(parse_level(text)?)
}

/// Read a level file and start a session on it.
///
/// # Errors
///
/// Returns [`LevelError::Io`] if the file cannot be read, or any error
/// [`load_level`] returns.
pub fn load_level_file(path: &Path) -> Result<GameState, LevelError> {
    let text = fs::read_to_string(path).map_err(|e| LevelError::Io {
        path: path.to_path_buf(),
        message: e.to_string(),
    })?;
    load_level(&text)
}

/// Start a session on [`DEFAULT_LEVEL`].
///
/// # Errors
///
/// Never fails in practice; the result type matches [`load_level`].
pub fn default_level() -> Result<GameState, LevelError> {
    load_level(DEFAULT_LEVEL)
}

/// Write a grid back out in the level format.
///
/// Empty cells are written as [`EMPTY_GLYPH`] and every row ends with a
/// newline. Sack fall distances and monster targets are not stored.
#[must_use]
pub fn render_level(grid: &Grid) -> String {
    let width = usize::from(grid.width());
    let mut out = String::with_capacity((width + 1) * usize::from(grid.height()));
    for y in 0..grid.height() {
        for x in 0..grid.width() {
            let glyph = grid
                .kind_at(Coord::new(x, y))
                .map_or(EMPTY_GLYPH, EntityKind::glyph);
            out.push(glyph);
        }
        out.push('\n');
    }
    out
}

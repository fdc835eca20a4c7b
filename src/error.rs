//! Error types for grid access, level loading and input scripts.

use std::fmt;
use std::path::PathBuf;

use crate::game::Coord;

/// A grid access outside `[0, width) x [0, height)`.
///
/// Always a programming or input error: a behavior proposed an illegal
/// coordinate or a caller indexed past the map edge.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GridError {
    /// The coordinate lies outside the grid.
    OutOfBounds {
        /// The offending coordinate.
        coord: Coord,
        /// Grid width in cells.
        width: u16,
        /// Grid height in cells.
        height: u16,
    },
}

impl fmt::Display for GridError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            GridError::OutOfBounds {
                coord,
                width,
                height,
            } => write!(
                f,
                "coordinate ({}, {}) is outside the {width}x{height} grid",
                coord.x, coord.y
            ),
        }
    }
}

impl std::error::Error for GridError {}

/// Result type for grid accesses.
pub type GridResult<T> = Result<T, GridError>;

/// A level that cannot start a session.
///
/// Raised before the first tick; the engine never runs a session from an
/// invalid level.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum LevelError {
    /// The level text has no rows.
    Empty,
    /// A row's width differs from the first row.
    Ragged {
        /// 1-based row number in the level (blank lines skipped).
        row: usize,
        /// Width of the first row.
        expected: usize,
        /// Width of this row.
        found: usize,
    },
    /// A character that maps to no entity kind.
    UnknownGlyph {
        /// 1-based row number.
        row: usize,
        /// 1-based column number.
        column: usize,
        /// The character found.
        glyph: char,
    },
    /// The level is wider or taller than a grid can address.
    TooLarge {
        /// Width of the level in cells.
        width: usize,
        /// Height of the level in cells.
        height: usize,
    },
    /// No player start on the level.
    NoPlayer,
    /// More than one player start on the level.
    MultiplePlayers(usize),
    /// The level file could not be read.
    Io {
        /// Path of the level file.
        path: PathBuf,
        /// Underlying I/O error message.
        message: String,
    },
}

impl fmt::Display for LevelError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            LevelError::Empty => write!(f, "level is empty"),
            LevelError::Ragged {
                row,
                expected,
                found,
            } => write!(
                f,
                "row {row} is {found} cells wide, expected {expected} (levels must be rectangular)"
            ),
            LevelError::UnknownGlyph { row, column, glyph } => {
                write!(f, "unknown glyph {glyph:?} at row {row}, column {column}")
            }
            LevelError::TooLarge { width, height } => {
                write!(f, "level is {width}x{height}, larger than the grid can hold")
            }
            LevelError::NoPlayer => write!(f, "level has no player start"),
            LevelError::MultiplePlayers(count) => {
                write!(f, "level has {count} player starts, expected exactly one")
            }
            LevelError::Io { path, message } => {
                write!(f, "failed to read level {}: {message}", path.display())
            }
        }
    }
}

impl std::error::Error for LevelError {}

/// A character in an input script that is not a direction or `.`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ScriptError {
    /// 0-based character offset in the script.
    pub position: usize,
    /// The character found.
    pub found: char,
}

impl fmt::Display for ScriptError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "invalid move {:?} at position {} (expected U, D, L, R or .)",
            self.found, self.position
        )
    }
}

impl std::error::Error for ScriptError {}

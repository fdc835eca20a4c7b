//! Game state management.

use crate::error::LevelError;
use crate::game::{Coord, Direction, EntityKind, Grid};

/// Complete state of one session.
///
/// Created from a level and advanced with [`GameState::step`]. The grid is
/// only ever mutated by the tick engine.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GameState {
    /// The world.
    pub(crate) grid: Grid,
    /// Points collected so far. Never decreases.
    pub(crate) score: u32,
    /// Set once the player has been caught; never cleared.
    pub(crate) game_over: bool,
    /// Input direction read at the start of the next tick.
    pub(crate) input: Option<Direction>,
    /// Number of completed ticks.
    pub(crate) tick: u32,
}

impl GameState {
    /// Create a new game state for the given grid.
    ///
    /// # Errors
    ///
    /// Returns [`LevelError::NoPlayer`] or [`LevelError::MultiplePlayers`]
    /// unless the grid holds exactly one player.
    pub fn new(grid: Grid) -> Result<Self, LevelError> {
        match grid.count(EntityKind::Player) {
            0 => return Err(LevelError::NoPlayer),
            1 => {}
            n => return Err(LevelError::MultiplePlayers(n)),
        }

        Ok(Self {
            grid,
            score: 0,
            game_over: false,
            input: None,
            tick: 0,
        })
    }

    /// Read-only view of the world.
    #[must_use]
    pub const fn grid(&self) -> &Grid {
        &self.grid
    }

    /// Grid width in cells.
    #[must_use]
    pub const fn width(&self) -> u16 {
        self.grid.width()
    }

    /// Grid height in cells.
    #[must_use]
    pub const fn height(&self) -> u16 {
        self.grid.height()
    }

    /// Current score.
    #[must_use]
    pub const fn score(&self) -> u32 {
        self.score
    }

    /// Whether the player has been caught.
    #[must_use]
    pub const fn is_game_over(&self) -> bool {
        self.game_over
    }

    /// Number of completed ticks.
    #[must_use]
    pub const fn tick(&self) -> u32 {
        self.tick
    }

    /// Input direction the next tick will see.
    #[must_use]
    pub const fn input(&self) -> Option<Direction> {
        self.input
    }

    /// Set the input direction for the next tick. `None` means no input.
    ///
    /// The input persists until changed.
    pub fn set_input(&mut self, input: Option<Direction>) {
        self.input = input;
    }

    /// Position of the player, or `None` once it has been destroyed.
    #[must_use]
    pub fn player_position(&self) -> Option<Coord> {
        self.grid.find(EntityKind::Player)
    }
}

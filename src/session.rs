//! Scripted sessions: a level plus a string of moves in, a result out.
//!
//! This is the headless driver behind `digger run`, the benchmarks and the
//! integration tests.

use log::info;
use serde::Serialize;

use crate::error::{GridError, LevelError, ScriptError};
use crate::game::{Coord, Direction, EntityKind, GameState, TickEvent};
use crate::level::{load_level, render_level};
use crate::render::render_ascii;

/// Configuration for a scripted session.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SessionConfig {
    /// Number of ticks to run. `None` runs one tick per scripted move;
    /// ticks past the end of the script get no input.
    pub max_ticks: Option<u32>,
    /// Stop as soon as the game is over.
    pub stop_on_game_over: bool,
    /// Keep an ASCII frame and the events of every tick.
    pub record_frames: bool,
}

impl Default for SessionConfig {
    fn default() -> Self {
        Self {
            max_ticks: None,
            stop_on_game_over: true,
            record_frames: false,
        }
    }
}

/// Errors from running a session.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SessionError {
    /// The level could not be loaded.
    Level(LevelError),
    /// The input script is malformed.
    Script(ScriptError),
    /// The engine touched a cell outside the grid.
    Grid(GridError),
}

impl std::fmt::Display for SessionError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Level(e) => write!(f, "Invalid level: {e}"),
            Self::Script(e) => write!(f, "Invalid script: {e}"),
            Self::Grid(e) => write!(f, "Engine error: {e}"),
        }
    }
}

impl std::error::Error for SessionError {}

impl From<LevelError> for SessionError {
    fn from(e: LevelError) -> Self {
        Self::Level(e)
    }
}

impl From<ScriptError> for SessionError {
    fn from(e: ScriptError) -> Self {
        Self::Script(e)
    }
}

impl From<GridError> for SessionError {
    fn from(e: GridError) -> Self {
        Self::Grid(e)
    }
}

/// Entities left on the grid, by kind.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize)]
pub struct EntityCounts {
    /// Terrain cells.
    pub terrain: usize,
    /// Players (0 or 1).
    pub players: usize,
    /// Sacks.
    pub sacks: usize,
    /// Gold.
    pub gold: usize,
    /// Monsters.
    pub monsters: usize,
}

impl EntityCounts {
    /// Count the entities of a game state.
    #[must_use]
    pub fn of(state: &GameState) -> Self {
        let mut counts = Self::default();
        for (_, entity) in state.grid().entities() {
            match entity.kind() {
                EntityKind::Terrain => counts.terrain += 1,
                EntityKind::Player => counts.players += 1,
                EntityKind::Sack => counts.sacks += 1,
                EntityKind::Gold => counts.gold += 1,
                EntityKind::Monster => counts.monsters += 1,
            }
        }
        counts
    }

    /// Total number of live entities.
    #[must_use]
    pub const fn total(&self) -> usize {
        self.terrain + self.players + self.sacks + self.gold + self.monsters
    }
}

/// Snapshot of one tick, kept when [`SessionConfig::record_frames`] is set.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Frame {
    /// Tick number (1 for the first tick).
    pub tick: u32,
    /// Score after the tick.
    pub score: u32,
    /// ASCII rendering after the tick.
    pub board: String,
    /// What happened during the tick.
    pub events: Vec<TickEvent>,
}

/// Result of a scripted session.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct SessionResult {
    /// Ticks actually run.
    pub ticks_run: u32,
    /// Final score.
    pub score: u32,
    /// Whether the game ended.
    pub game_over: bool,
    /// Tick on which the game ended, if it did.
    pub game_over_tick: Option<u32>,
    /// Final player position, `None` if the player was destroyed.
    pub player: Option<Coord>,
    /// Entities left at the end.
    pub remaining: EntityCounts,
    /// Final grid in the level format.
    pub final_level: String,
    /// Per-tick frames, empty unless recorded.
    pub frames: Vec<Frame>,
}

/// Parse an input script.
///
/// One character per tick: `U`, `D`, `L`, `R` (any case) or `.` for no
/// input. ASCII whitespace is ignored so scripts can be wrapped.
///
/// # Errors
///
/// Returns a [`ScriptError`] at the first character that is none of those.
pub fn parse_script(script: &str) -> Result<Vec<Option<Direction>>, ScriptError> {
    script
        .chars()
        .enumerate()
        .filter(|(_, c)| !c.is_ascii_whitespace())
        .map(|(position, c)| match c.to_ascii_uppercase() {
            'U' => Ok(Some(Direction::Up)),
            'D' => Ok(Some(Direction::Down)),
            'L' => Ok(Some(Direction::Left)),
            'R' => Ok(Some(Direction::Right)),
            '.' => Ok(None),
            _ => Err(ScriptError { position, found: c }),
        })
        .collect()
}

/// Run a session from an already loaded game state.
///
/// # Errors
///
/// Returns a [`GridError`] if the engine fails.
pub fn run_state(
    mut state: GameState,
    inputs: &[Option<Direction>],
    config: &SessionConfig,
) -> Result<SessionResult, GridError> {
    let scripted = u32::try_from(inputs.len()).unwrap_or(u32::MAX);
    let ticks = config.max_ticks.unwrap_or(scripted);

    let mut frames = Vec::new();
    let mut game_over_tick = None;
    let mut ticks_run = 0;

    for (tick, input) in (0..ticks).zip(inputs.iter().copied().chain(std::iter::repeat(None))) {
        if config.stop_on_game_over && state.is_game_over() {
            break;
        }

        state.set_input(input);
        let report = state.step()?;
        ticks_run = tick + 1;

        if report.ended_game() {
            game_over_tick = Some(report.tick);
        }
        if config.record_frames {
            frames.push(Frame {
                tick: report.tick,
                score: state.score(),
                board: render_ascii(&state),
                events: report.events,
            });
        }
    }

    info!(
        "session finished after {ticks_run} ticks: score {}, game over {}",
        state.score(),
        state.is_game_over()
    );

    Ok(SessionResult {
        ticks_run,
        score: state.score(),
        game_over: state.is_game_over(),
        game_over_tick,
        player: state.player_position(),
        remaining: EntityCounts::of(&state),
        final_level: render_level(state.grid()),
        frames,
    })
}

/// Load a level, parse a script and run the session.
///
/// # Errors
///
/// Returns a [`SessionError`] if the level or the script is invalid.
pub fn run_session(
    level: &str,
    script: &str,
    config: &SessionConfig,
) -> Result<SessionResult, SessionError> {
    let state = load_level(level)?;
    let inputs = parse_script(script)?;
    Ok(run_state(state, &inputs, config)?)
}

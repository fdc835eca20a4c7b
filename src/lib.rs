// Allow unwrap in tests (test code is not production)
#![cfg_attr(test, allow(clippy::unwrap_used))]
//! Digger: a deterministic tile-grid creature simulation engine.
//!
//! The world is a grid of optional entities (terrain, the player, sacks,
//! gold and monsters). Every tick each entity proposes a command against a
//! snapshot of the grid; the commands are then applied in row-major order
//! and collisions are settled by a fixed conflict table.
//!
//! # Architecture
//!
//! ```text
//! ┌─────────────────────────────────────┐
//! │   CLI / TUI (digger run, play)      │
//! ├─────────────────────────────────────┤
//! │   Session runner, level format      │
//! ├─────────────────────────────────────┤
//! │   Tick engine, conflict resolver    │
//! ├─────────────────────────────────────┤
//! │   Grid and entity behaviors         │
//! └─────────────────────────────────────┘
//! ```

pub mod error;
pub mod game;
pub mod level;
pub mod render;
pub mod session;

pub use error::{GridError, GridResult, LevelError, ScriptError};

// Re-export key game types at crate root for convenience
pub use game::{
    Command, Coord, Direction, Entity, EntityKind, GameState, Grid, TickEvent, TickReport,
};
pub use level::{DEFAULT_LEVEL, load_level, parse_level, render_level};
pub use session::{SessionConfig, SessionError, SessionResult, parse_script, run_session};

//! Game layer for Digger.
//!
//! Implements the simulation rules:
//! - Grid of optional entities with bounds-checked access
//! - Per-kind behaviors (terrain, player, sack, gold, monster)
//! - Two-phase tick engine with row-major ordering
//! - Fixed conflict table for collisions

mod behavior;
mod conflict;
mod entity;
mod grid;
mod invariants;
mod state;
mod tick;

pub use behavior::{Gold, Monster, Player, Sack, Terrain};
pub use conflict::{Conflict, Effect, Fate, Outcome, resolve_conflict};
pub use entity::{Behavior, Command, Entity, EntityKind, TickContext};
pub use grid::{Coord, Direction, Grid};
pub use invariants::{InvariantViolation, assert_invariants, check_invariants};
pub use state::GameState;
pub use tick::{TickEvent, TickReport};

/// Points awarded when the player collects a piece of gold.
pub const GOLD_REWARD: u32 = 10;

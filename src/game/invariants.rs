//! Game invariants - sanity checks that detect bugs.
//!
//! These hold after every tick of a correctly implemented engine, whatever
//! the level or input. Tests and fuzz targets run them between ticks.

use crate::game::{Entity, EntityKind, GOLD_REWARD, GameState};

/// Invariant violation error.
#[derive(Debug, Clone)]
pub struct InvariantViolation {
    /// Description of the violated invariant.
    pub message: String,
}

impl std::fmt::Display for InvariantViolation {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "Invariant violation: {}", self.message)
    }
}

impl std::error::Error for InvariantViolation {}

/// Check all game invariants.
///
/// Returns a list of violations found, or empty if all invariants hold.
#[must_use]
pub fn check_invariants(state: &GameState) -> Vec<InvariantViolation> {
    let mut violations = Vec::new();
    let grid = state.grid();

    let players = grid.count(EntityKind::Player);
    if players > 1 {
        violations.push(InvariantViolation {
            message: format!("{players} players on the grid"),
        });
    }

    // The player can only be removed by a monster or a sack, both of which
    // end the game.
    if players == 0 && !state.is_game_over() {
        violations.push(InvariantViolation {
            message: "Player is gone but the game is not over".to_string(),
        });
    }

    if state.score() % GOLD_REWARD != 0 {
        violations.push(InvariantViolation {
            message: format!(
                "Score {} is not a multiple of the gold reward {GOLD_REWARD}",
                state.score()
            ),
        });
    }

    let stray_targets = grid.entities().filter_map(|(coord, entity)| match entity {
        Entity::Monster(monster) => monster
            .target()
            .filter(|&target| !grid.in_bounds(target))
            .map(|target| (coord, target)),
        _ => None,
    });
    for (coord, target) in stray_targets {
        violations.push(InvariantViolation {
            message: format!("Monster at {coord:?} targets {target:?} outside the grid"),
        });
    }

    violations
}

/// Assert all game invariants hold, panicking if any are violated.
///
/// Only active in debug builds. No-op in release builds.
///
/// # Panics
///
/// Panics with detailed message if any invariant is violated.
#[cfg(debug_assertions)]
pub fn assert_invariants(state: &GameState) {
    let violations = check_invariants(state);
    if !violations.is_empty() {
        let messages: Vec<_> = violations.iter().map(|v| v.message.as_str()).collect();
        panic!("Game invariant violations:\n  - {}", messages.join("\n  - "));
    }
}

/// No-op in release builds.
#[cfg(not(debug_assertions))]
pub fn assert_invariants(_state: &GameState) {}

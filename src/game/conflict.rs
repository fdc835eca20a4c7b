//! Collision outcomes.
//!
//! When a mover enters an occupied cell both death predicates are evaluated,
//! every side effect they carry is applied, and the pair of verdicts selects
//! one of four outcomes.

use serde::Serialize;

use crate::game::{Entity, EntityKind};

/// Side effect of a collision on the game state.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum Effect {
    /// Add points to the score.
    AwardScore(u32),
    /// Set the game-over flag.
    EndGame,
}

/// One side's verdict in a collision.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Fate {
    /// Whether this entity is destroyed.
    pub dies: bool,
    /// Side effect triggered by the collision, if any.
    pub effect: Option<Effect>,
}

impl Fate {
    /// Survives, no side effect.
    pub const SURVIVES: Self = Self {
        dies: false,
        effect: None,
    };

    /// Dies, no side effect.
    pub const DIES: Self = Self {
        dies: true,
        effect: None,
    };

    /// Survives and triggers `effect`.
    #[must_use]
    pub const fn survives_with(effect: Effect) -> Self {
        Self {
            dies: false,
            effect: Some(effect),
        }
    }

    /// Dies and triggers `effect`.
    #[must_use]
    pub const fn dies_with(effect: Effect) -> Self {
        Self {
            dies: true,
            effect: Some(effect),
        }
    }
}

/// Which entities survive a collision.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum Outcome {
    /// The occupant is removed and the mover takes its cell.
    MoverWins,
    /// The mover is removed; the occupant stays.
    OccupantWins,
    /// Both are removed and the destination is left empty.
    BothDie,
    /// Nobody dies; the move is cancelled.
    Standoff,
}

/// Result of resolving one collision.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Conflict {
    /// Survival outcome.
    pub outcome: Outcome,
    /// Effects from the occupant's and the mover's predicates, in that order.
    pub effects: [Option<Effect>; 2],
}

impl Conflict {
    /// Iterate over the effects to apply.
    pub fn effects(&self) -> impl Iterator<Item = Effect> + '_ {
        self.effects.iter().flatten().copied()
    }
}

/// Resolve `mover` entering the cell held by `occupant`.
///
/// Both predicates are always evaluated, so both side effects fire even
/// when only one entity dies. The one exception is a creature walking into
/// a sack: sacks cannot be pushed, so the move is cancelled before either
/// predicate runs.
#[must_use]
pub fn resolve_conflict(mover: &Entity, occupant: &Entity) -> Conflict {
    if occupant.kind() == EntityKind::Sack
        && matches!(mover.kind(), EntityKind::Player | EntityKind::Monster)
    {
        return Conflict {
            outcome: Outcome::Standoff,
            effects: [None, None],
        };
    }

    let occupant_fate = occupant.fate_against(mover.kind());
    let mover_fate = mover.fate_against(occupant.kind());

    let outcome = match (mover_fate.dies, occupant_fate.dies) {
        (false, true) => Outcome::MoverWins,
        (true, false) => Outcome::OccupantWins,
        (true, true) => Outcome::BothDie,
        (false, false) => Outcome::Standoff,
    };

    Conflict {
        outcome,
        effects: [occupant_fate.effect, mover_fate.effect],
    }
}

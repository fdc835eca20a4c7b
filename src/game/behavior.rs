//! Per-kind behaviors: move proposals and death predicates.
//!
//! Every behavior reads the pre-tick snapshot only, so proposals made
//! earlier in a tick cannot influence later ones.

use crate::game::{
    Behavior, Command, Coord, Direction, Effect, Entity, EntityKind, Fate, GOLD_REWARD, Grid,
    TickContext,
};

/// Diggable earth. Never moves; the player digs through it.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct Terrain;

impl Behavior for Terrain {
    fn act(&mut self, _at: Coord, _ctx: &TickContext<'_>) -> Command {
        Command::Stay
    }

    fn fate_against(&self, other: EntityKind) -> Fate {
        match other {
            EntityKind::Player => Fate::DIES,
            _ => Fate::SURVIVES,
        }
    }
}

/// The digger, steered by the input direction.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct Player;

impl Behavior for Player {
    fn act(&mut self, at: Coord, ctx: &TickContext<'_>) -> Command {
        let Some(direction) = ctx.input else {
            return Command::Stay;
        };
        let Some(target) = ctx.grid.step(at, direction) else {
            return Command::Stay;
        };
        // Sacks cannot be pushed.
        if ctx.grid.kind_at(target) == Some(EntityKind::Sack) {
            return Command::Stay;
        }
        Command::Move(direction)
    }

    fn fate_against(&self, other: EntityKind) -> Fate {
        match other {
            EntityKind::Terrain | EntityKind::Gold => Fate::SURVIVES,
            EntityKind::Player | EntityKind::Sack | EntityKind::Monster => Fate::DIES,
        }
    }
}

/// A sack that falls under gravity and breaks into gold after a long fall.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct Sack {
    fall_distance: u32,
}

impl Sack {
    /// Falls longer than this break the sack open and let it squash creatures.
    pub const BREAK_DISTANCE: u32 = 1;

    /// A sack at rest.
    #[must_use]
    pub const fn new() -> Self {
        Self { fall_distance: 0 }
    }

    /// A sack already falling for `fall_distance` cells.
    #[must_use]
    pub const fn falling(fall_distance: u32) -> Self {
        Self { fall_distance }
    }

    /// Consecutive cells fallen so far.
    #[must_use]
    pub const fn fall_distance(&self) -> u32 {
        self.fall_distance
    }

    const fn has_momentum(self) -> bool {
        self.fall_distance > Self::BREAK_DISTANCE
    }

    fn fall(&mut self) -> Command {
        self.fall_distance = self.fall_distance.saturating_add(1);
        Command::Move(Direction::Down)
    }

    fn land(&mut self) -> Command {
        if self.has_momentum() {
            Command::Transform(Entity::gold())
        } else {
            self.fall_distance = 0;
            Command::Stay
        }
    }
}

impl Behavior for Sack {
    fn act(&mut self, at: Coord, ctx: &TickContext<'_>) -> Command {
        let Some(below) = ctx.grid.step(at, Direction::Down) else {
            return self.land();
        };
        match ctx.grid.kind_at(below) {
            None => self.fall(),
            Some(EntityKind::Player | EntityKind::Monster) if self.has_momentum() => self.fall(),
            Some(_) => self.land(),
        }
    }

    fn fate_against(&self, other: EntityKind) -> Fate {
        match other {
            EntityKind::Player => Fate::survives_with(Effect::EndGame),
            _ => Fate::SURVIVES,
        }
    }
}

/// Gold, collected by the player and eaten by monsters.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct Gold;

impl Behavior for Gold {
    fn act(&mut self, _at: Coord, _ctx: &TickContext<'_>) -> Command {
        Command::Stay
    }

    fn fate_against(&self, other: EntityKind) -> Fate {
        match other {
            EntityKind::Player => Fate::dies_with(Effect::AwardScore(GOLD_REWARD)),
            EntityKind::Monster => Fate::DIES,
            _ => Fate::SURVIVES,
        }
    }
}

/// A monster that walks toward the player.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct Monster {
    target: Option<Coord>,
}

impl Monster {
    /// A monster that has not seen the player yet.
    #[must_use]
    pub const fn new() -> Self {
        Self { target: None }
    }

    /// Player position seen on the most recent tick.
    #[must_use]
    pub const fn target(&self) -> Option<Coord> {
        self.target
    }

    /// Cells a monster is willing to step into.
    fn can_enter(kind: Option<EntityKind>) -> bool {
        matches!(kind, None | Some(EntityKind::Gold | EntityKind::Player))
    }

    /// Greedy Manhattan step from `at` toward `target`.
    ///
    /// The axis with the larger distance goes first, horizontal on ties.
    /// Falls back to the other axis when the first choice is blocked.
    fn pursue(at: Coord, target: Coord, grid: &Grid) -> Command {
        let dx = i32::from(target.x) - i32::from(at.x);
        let dy = i32::from(target.y) - i32::from(at.y);

        let horizontal = match dx.signum() {
            1 => Some(Direction::Right),
            -1 => Some(Direction::Left),
            _ => None,
        };
        let vertical = match dy.signum() {
            1 => Some(Direction::Down),
            -1 => Some(Direction::Up),
            _ => None,
        };
        let preference = if dx.abs() >= dy.abs() {
            [horizontal, vertical]
        } else {
            [vertical, horizontal]
        };

        preference
            .into_iter()
            .flatten()
            .find(|&direction| {
                grid.step(at, direction)
                    .is_some_and(|next| Self::can_enter(grid.kind_at(next)))
            })
            .map_or(Command::Stay, Command::Move)
    }
}

impl Behavior for Monster {
    fn act(&mut self, at: Coord, ctx: &TickContext<'_>) -> Command {
        self.target = ctx.grid.find(EntityKind::Player);
        match self.target {
            Some(target) => Self::pursue(at, target, ctx.grid),
            None => Command::Stay,
        }
    }

    fn fate_against(&self, other: EntityKind) -> Fate {
        match other {
            EntityKind::Sack => Fate::DIES,
            EntityKind::Player => Fate::survives_with(Effect::EndGame),
            _ => Fate::SURVIVES,
        }
    }
}

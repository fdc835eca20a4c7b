//! The closed set of entity kinds and the per-tick command type.

use serde::Serialize;

use crate::game::{Coord, Direction, Fate, Gold, Grid, Monster, Player, Sack, Terrain};

/// Discriminant of an [`Entity`], used by predicates, reports and rendering.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
pub enum EntityKind {
    /// Diggable earth.
    Terrain,
    /// The digger, steered by input.
    Player,
    /// A sack that falls under gravity.
    Sack,
    /// Collectable gold.
    Gold,
    /// A monster that hunts the player.
    Monster,
}

impl EntityKind {
    /// All entity kinds, in draw-priority order.
    pub const ALL: [EntityKind; 5] = [
        EntityKind::Terrain,
        EntityKind::Gold,
        EntityKind::Sack,
        EntityKind::Player,
        EntityKind::Monster,
    ];

    /// Level-file glyph for this kind.
    #[must_use]
    pub const fn glyph(self) -> char {
        match self {
            EntityKind::Terrain => 'T',
            EntityKind::Player => 'P',
            EntityKind::Sack => 'S',
            EntityKind::Gold => 'G',
            EntityKind::Monster => 'M',
        }
    }

    /// Kind for a level-file glyph; `None` for empty cells and unknown glyphs.
    #[must_use]
    pub const fn from_glyph(glyph: char) -> Option<Self> {
        match glyph {
            'T' => Some(EntityKind::Terrain),
            'P' => Some(EntityKind::Player),
            'S' => Some(EntityKind::Sack),
            'G' => Some(EntityKind::Gold),
            'M' => Some(EntityKind::Monster),
            _ => None,
        }
    }

    /// Sprite file name. Opaque to the engine.
    #[must_use]
    pub const fn sprite(self) -> &'static str {
        match self {
            EntityKind::Terrain => "Terrain.png",
            EntityKind::Player => "Digger.png",
            EntityKind::Sack => "Sack.png",
            EntityKind::Gold => "Gold.png",
            EntityKind::Monster => "Monster.png",
        }
    }

    /// Draw priority; higher draws on top.
    #[must_use]
    pub const fn draw_priority(self) -> u8 {
        match self {
            EntityKind::Terrain => 0,
            EntityKind::Gold => 1,
            EntityKind::Sack => 2,
            EntityKind::Player => 5,
            EntityKind::Monster => 10,
        }
    }

    /// Human-readable name.
    #[must_use]
    pub const fn name(self) -> &'static str {
        match self {
            EntityKind::Terrain => "terrain",
            EntityKind::Player => "player",
            EntityKind::Sack => "sack",
            EntityKind::Gold => "gold",
            EntityKind::Monster => "monster",
        }
    }
}

impl std::fmt::Display for EntityKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.name())
    }
}

/// What an entity wants to do this tick.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Command {
    /// Do nothing.
    Stay,
    /// Move one cell in a direction.
    Move(Direction),
    /// Replace this entity in place with another.
    Transform(Entity),
}

/// Read-only view handed to every behavior during a tick.
#[derive(Debug, Clone, Copy)]
pub struct TickContext<'a> {
    /// The grid as it was before any command of this tick was applied.
    pub grid: &'a Grid,
    /// The input direction sampled for this tick.
    pub input: Option<Direction>,
}

/// Behavior shared by every entity kind.
pub trait Behavior {
    /// Propose a command for this tick from position `at`.
    ///
    /// May update the entity's own hidden state.
    fn act(&mut self, at: Coord, ctx: &TickContext<'_>) -> Command;

    /// Whether this entity dies when it collides with `other`, plus any
    /// side effect of the collision.
    fn fate_against(&self, other: EntityKind) -> Fate;
}

/// A live entity on the grid.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Entity {
    /// Diggable earth.
    Terrain(Terrain),
    /// The digger.
    Player(Player),
    /// A falling sack.
    Sack(Sack),
    /// Gold.
    Gold(Gold),
    /// A monster.
    Monster(Monster),
}

impl Entity {
    /// A terrain cell.
    #[must_use]
    pub const fn terrain() -> Self {
        Entity::Terrain(Terrain)
    }

    /// The player.
    #[must_use]
    pub const fn player() -> Self {
        Entity::Player(Player)
    }

    /// A sack at rest.
    #[must_use]
    pub const fn sack() -> Self {
        Entity::Sack(Sack::new())
    }

    /// Gold.
    #[must_use]
    pub const fn gold() -> Self {
        Entity::Gold(Gold)
    }

    /// A monster with no target yet.
    #[must_use]
    pub const fn monster() -> Self {
        Entity::Monster(Monster::new())
    }

    /// A freshly created entity of the given kind.
    #[must_use]
    pub const fn of_kind(kind: EntityKind) -> Self {
        match kind {
            EntityKind::Terrain => Self::terrain(),
            EntityKind::Player => Self::player(),
            EntityKind::Sack => Self::sack(),
            EntityKind::Gold => Self::gold(),
            EntityKind::Monster => Self::monster(),
        }
    }

    /// The kind of this entity.
    #[must_use]
    pub const fn kind(&self) -> EntityKind {
        match self {
            Entity::Terrain(_) => EntityKind::Terrain,
            Entity::Player(_) => EntityKind::Player,
            Entity::Sack(_) => EntityKind::Sack,
            Entity::Gold(_) => EntityKind::Gold,
            Entity::Monster(_) => EntityKind::Monster,
        }
    }

    /// Sprite file name.
    #[must_use]
    pub const fn sprite(&self) -> &'static str {
        self.kind().sprite()
    }

    /// Draw priority; higher draws on top.
    #[must_use]
    pub const fn draw_priority(&self) -> u8 {
        self.kind().draw_priority()
    }

    /// Propose a command for this tick.
    pub fn act(&mut self, at: Coord, ctx: &TickContext<'_>) -> Command {
        match self {
            Entity::Terrain(e) => e.act(at, ctx),
            Entity::Player(e) => e.act(at, ctx),
            Entity::Sack(e) => e.act(at, ctx),
            Entity::Gold(e) => e.act(at, ctx),
            Entity::Monster(e) => e.act(at, ctx),
        }
    }

    /// Whether this entity dies when colliding with `other`.
    #[must_use]
    pub fn fate_against(&self, other: EntityKind) -> Fate {
        match self {
            Entity::Terrain(e) => e.fate_against(other),
            Entity::Player(e) => e.fate_against(other),
            Entity::Sack(e) => e.fate_against(other),
            Entity::Gold(e) => e.fate_against(other),
            Entity::Monster(e) => e.fate_against(other),
        }
    }
}

//! The tick engine.
//!
//! A tick runs in two phases. First every live entity proposes a command
//! against a snapshot of the grid, in row-major order. Then the commands are
//! applied to the live grid in the same order, resolving collisions as they
//! happen.

use std::collections::HashSet;

use log::{debug, info, trace};
use serde::Serialize;

use crate::error::GridResult;
use crate::game::{
    Command, Coord, Direction, Effect, Entity, EntityKind, GameState, Outcome, TickContext,
    resolve_conflict,
};

/// Something that happened during a tick.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(tag = "event", rename_all = "snake_case")]
pub enum TickEvent {
    /// An entity moved one cell.
    Moved {
        /// Kind of the mover.
        kind: EntityKind,
        /// Source cell.
        from: Coord,
        /// Destination cell.
        to: Coord,
    },
    /// A move was cancelled because neither side of the collision died.
    Blocked {
        /// Kind of the mover.
        kind: EntityKind,
        /// Cell the mover stayed in.
        from: Coord,
        /// Kind of the entity in the way.
        by: EntityKind,
    },
    /// An entity was destroyed in a collision.
    Died {
        /// Kind of the destroyed entity.
        kind: EntityKind,
        /// Cell it was destroyed in.
        at: Coord,
        /// Kind of the entity it collided with.
        by: EntityKind,
    },
    /// An entity was replaced in place.
    Transformed {
        /// Cell of the transformation.
        at: Coord,
        /// Kind before.
        from: EntityKind,
        /// Kind after.
        to: EntityKind,
    },
    /// Points were added to the score.
    ScoreAwarded {
        /// Points added.
        amount: u32,
        /// Score after the award.
        total: u32,
    },
    /// The game-over flag was set.
    GameOver,
}

/// Everything that happened during one tick.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize)]
pub struct TickReport {
    /// Tick number after completion (1 for the first tick).
    pub tick: u32,
    /// Events in the order they happened.
    pub events: Vec<TickEvent>,
}

impl TickReport {
    /// Whether any entity was destroyed this tick.
    #[must_use]
    pub fn has_deaths(&self) -> bool {
        self.events
            .iter()
            .any(|e| matches!(e, TickEvent::Died { .. }))
    }

    /// Whether this tick ended the game.
    #[must_use]
    pub fn ended_game(&self) -> bool {
        self.events.contains(&TickEvent::GameOver)
    }
}

impl GameState {
    /// Advance the simulation by one tick.
    ///
    /// # Errors
    ///
    /// Returns a [`GridError`](crate::error::GridError) if a command touches a
    /// cell outside the grid. Destinations come from
    /// [`Grid::step`](crate::game::Grid::step), so this indicates a bug.
    pub fn step(&mut self) -> GridResult<TickReport> {
        let snapshot = self.grid.clone();
        let ctx = TickContext {
            grid: &snapshot,
            input: self.input,
        };

        let plan: Vec<(Coord, Command)> = self
            .grid
            .entities_mut()
            .map(|(at, entity)| (at, entity.act(at, &ctx)))
            .collect();

        // Cells whose original occupant was destroyed by an earlier mover.
        // The entity now standing there has already acted.
        let mut claimed: HashSet<Coord> = HashSet::new();
        let mut events = Vec::new();

        for (at, command) in plan {
            if claimed.contains(&at) {
                continue;
            }
            match command {
                Command::Stay => {}
                Command::Transform(next) => self.apply_transform(at, next, &mut events)?,
                Command::Move(direction) => {
                    self.apply_move(at, direction, &mut claimed, &mut events)?;
                }
            }
        }

        self.tick = self.tick.saturating_add(1);
        Ok(TickReport {
            tick: self.tick,
            events,
        })
    }

    fn apply_transform(
        &mut self,
        at: Coord,
        next: Entity,
        events: &mut Vec<TickEvent>,
    ) -> GridResult<()> {
        let Some(current) = self.grid.get(at)?.map(Entity::kind) else {
            return Ok(());
        };
        self.grid.set(at, Some(next))?;
        trace!("{current} at ({}, {}) became {}", at.x, at.y, next.kind());
        events.push(TickEvent::Transformed {
            at,
            from: current,
            to: next.kind(),
        });
        Ok(())
    }

    fn apply_move(
        &mut self,
        from: Coord,
        direction: Direction,
        claimed: &mut HashSet<Coord>,
        events: &mut Vec<TickEvent>,
    ) -> GridResult<()> {
        let Some(to) = self.grid.step(from, direction) else {
            return Ok(());
        };
        let Some(mover) = self.grid.take(from)? else {
            return Ok(());
        };

        let Some(occupant) = self.grid.take(to)? else {
            self.grid.set(to, Some(mover))?;
            trace!(
                "{} moved ({}, {}) -> ({}, {})",
                mover.kind(),
                from.x,
                from.y,
                to.x,
                to.y
            );
            events.push(TickEvent::Moved {
                kind: mover.kind(),
                from,
                to,
            });
            return Ok(());
        };

        let conflict = resolve_conflict(&mover, &occupant);
        debug!(
            "{} at ({}, {}) ran into {} at ({}, {}): {:?}",
            mover.kind(),
            from.x,
            from.y,
            occupant.kind(),
            to.x,
            to.y,
            conflict.outcome
        );
        match conflict.outcome {
            Outcome::MoverWins => {
                self.grid.set(to, Some(mover))?;
                claimed.insert(to);
                events.push(TickEvent::Died {
                    kind: occupant.kind(),
                    at: to,
                    by: mover.kind(),
                });
                events.push(TickEvent::Moved {
                    kind: mover.kind(),
                    from,
                    to,
                });
            }
            Outcome::OccupantWins => {
                self.grid.set(to, Some(occupant))?;
                events.push(TickEvent::Died {
                    kind: mover.kind(),
                    at: from,
                    by: occupant.kind(),
                });
            }
            Outcome::BothDie => {
                claimed.insert(to);
                events.push(TickEvent::Died {
                    kind: occupant.kind(),
                    at: to,
                    by: mover.kind(),
                });
                events.push(TickEvent::Died {
                    kind: mover.kind(),
                    at: from,
                    by: occupant.kind(),
                });
            }
            Outcome::Standoff => {
                self.grid.set(from, Some(mover))?;
                self.grid.set(to, Some(occupant))?;
                events.push(TickEvent::Blocked {
                    kind: mover.kind(),
                    from,
                    by: occupant.kind(),
                });
            }
        }
        for effect in conflict.effects() {
            self.apply_effect(effect, events);
        }
        Ok(())
    }

    fn apply_effect(&mut self, effect: Effect, events: &mut Vec<TickEvent>) {
        match effect {
            Effect::AwardScore(amount) => {
                self.score = self.score.saturating_add(amount);
                events.push(TickEvent::ScoreAwarded {
                    amount,
                    total: self.score,
                });
            }
            Effect::EndGame => {
                if !self.game_over {
                    self.game_over = true;
                    info!(
                        "game over at tick {} with score {}",
                        self.tick.saturating_add(1),
                        self.score
                    );
                    events.push(TickEvent::GameOver);
                }
            }
        }
    }
}

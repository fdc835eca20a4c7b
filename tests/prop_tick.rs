//! Property-based tests for the tick engine.
//!
//! Random levels and input scripts, checked against the properties every
//! session must keep.
//! Run with: cargo test --release prop_tick

#![allow(missing_docs)]
#![allow(clippy::unwrap_used)]

use proptest::prelude::*;

use digger::game::{
    Coord, Direction, Entity, EntityKind, GOLD_REWARD, GameState, Grid, Sack, TickEvent,
    check_invariants,
};
use digger::level::{parse_level, render_level};

fn kind_strategy() -> impl Strategy<Value = Option<EntityKind>> {
    prop_oneof![
        3 => Just(None),
        3 => Just(Some(EntityKind::Terrain)),
        1 => Just(Some(EntityKind::Sack)),
        1 => Just(Some(EntityKind::Gold)),
        1 => Just(Some(EntityKind::Monster)),
    ]
}

fn input_strategy() -> impl Strategy<Value = Option<Direction>> {
    prop_oneof![
        Just(None),
        Just(Some(Direction::Up)),
        Just(Some(Direction::Down)),
        Just(Some(Direction::Left)),
        Just(Some(Direction::Right)),
    ]
}

/// A random grid with exactly one player.
fn level_strategy() -> impl Strategy<Value = Grid> {
    (1u16..=10, 1u16..=8)
        .prop_flat_map(|(width, height)| {
            let cells = usize::from(width) * usize::from(height);
            (
                Just((width, height)),
                prop::collection::vec(kind_strategy(), cells),
                0..cells,
            )
        })
        .prop_map(|((width, height), kinds, player)| {
            let mut grid = Grid::new(width, height).unwrap();
            for (idx, kind) in kinds.into_iter().enumerate() {
                let kind = if idx == player {
                    Some(EntityKind::Player)
                } else {
                    kind
                };
                let coord = Coord::new(
                    u16::try_from(idx % usize::from(width)).unwrap(),
                    u16::try_from(idx / usize::from(width)).unwrap(),
                );
                grid.set(coord, kind.map(Entity::of_kind)).unwrap();
            }
            grid
        })
}

proptest! {
    #![proptest_config(ProptestConfig::with_cases(500))]

    /// Ticks only ever remove entities.
    #[test]
    fn prop_live_count_never_increases(
        grid in level_strategy(),
        script in prop::collection::vec(input_strategy(), 1..40)
    ) {
        let mut state = GameState::new(grid).unwrap();
        for input in script {
            let before = state.grid().live_count();
            state.set_input(input);
            state.step().unwrap();
            prop_assert!(state.grid().live_count() <= before);
        }
    }

    /// Score moves only in gold-sized steps, each paired with the player
    /// collecting a piece of gold.
    #[test]
    fn prop_score_only_from_gold(
        grid in level_strategy(),
        script in prop::collection::vec(input_strategy(), 1..40)
    ) {
        let mut state = GameState::new(grid).unwrap();
        for input in script {
            let before = state.score();
            state.set_input(input);
            let report = state.step().unwrap();

            let collected = report
                .events
                .iter()
                .filter(|e| matches!(
                    e,
                    TickEvent::Died { kind: EntityKind::Gold, by: EntityKind::Player, .. }
                ))
                .count();
            let collected = u32::try_from(collected).unwrap();
            prop_assert_eq!(state.score(), before + collected * GOLD_REWARD);
        }
    }

    /// Game over is one-way and coincides with the player's removal. A sack
    /// only kills the player after a fall long enough to break it.
    #[test]
    fn prop_game_over_monotone(
        grid in level_strategy(),
        script in prop::collection::vec(input_strategy(), 1..40)
    ) {
        let mut state = GameState::new(grid).unwrap();
        let mut was_over = false;
        for input in script {
            state.set_input(input);
            let report = state.step().unwrap();

            if was_over {
                prop_assert!(state.is_game_over());
                prop_assert!(!report.ended_game());
            }
            if report.ended_game() {
                let player_died = report.events.iter().any(|e| matches!(
                    e,
                    TickEvent::Died {
                        kind: EntityKind::Player,
                        by: EntityKind::Monster | EntityKind::Sack,
                        ..
                    }
                ));
                prop_assert!(player_died);
            }
            for event in &report.events {
                if let TickEvent::Died {
                    kind: EntityKind::Player,
                    at,
                    by: EntityKind::Sack,
                } = event
                {
                    let fallen = match state.grid().get(*at).unwrap() {
                        Some(Entity::Sack(sack)) => sack.fall_distance(),
                        _ => 0,
                    };
                    prop_assert!(fallen > Sack::BREAK_DISTANCE, "sack fell {} cells", fallen);
                }
            }
            prop_assert_eq!(state.is_game_over(), state.player_position().is_none());
            was_over = state.is_game_over();
        }
    }

    /// Invariant checks pass after every tick.
    #[test]
    fn prop_invariants_hold(
        grid in level_strategy(),
        script in prop::collection::vec(input_strategy(), 1..40)
    ) {
        let mut state = GameState::new(grid).unwrap();
        for input in script {
            state.set_input(input);
            state.step().unwrap();
            let violations = check_invariants(&state);
            prop_assert!(violations.is_empty(), "{:?}", violations);
        }
    }

    /// Writing a level and reading it back gives the same grid.
    #[test]
    fn prop_level_round_trip(grid in level_strategy()) {
        let text = render_level(&grid);
        let reparsed = parse_level(&text).unwrap();
        prop_assert_eq!(reparsed, grid);
    }

    /// A world of entities that only stay is left untouched by a tick.
    #[test]
    fn prop_stay_changes_nothing(
        width in 1u16..=10,
        height in 1u16..=8,
        terrain in prop::collection::vec(any::<bool>(), 80)
    ) {
        let mut grid = Grid::new(width, height).unwrap();
        for y in 0..height {
            for x in 0..width {
                let idx = usize::from(y) * usize::from(width) + usize::from(x);
                let entity = if (x, y) == (0, 0) {
                    Entity::player()
                } else if terrain[idx] {
                    Entity::terrain()
                } else {
                    Entity::gold()
                };
                grid.set(Coord::new(x, y), Some(entity)).unwrap();
            }
        }

        let mut state = GameState::new(grid.clone()).unwrap();
        let report = state.step().unwrap();
        prop_assert!(report.events.is_empty());
        prop_assert_eq!(state.grid(), &grid);
    }
}

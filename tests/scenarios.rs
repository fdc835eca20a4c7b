//! End-to-end scenarios on small hand-written levels.

#![allow(missing_docs)]
#![allow(clippy::unwrap_used)]

use digger::game::{
    Coord, Direction, Entity, EntityKind, GameState, Grid, Sack, TickEvent, check_invariants,
};
use digger::level::{DEFAULT_LEVEL, load_level, parse_level, render_level};
use digger::session::{SessionConfig, run_session};

fn state_from(width: u16, height: u16, cells: &[(Coord, Entity)]) -> GameState {
    let mut grid = Grid::new(width, height).unwrap();
    for &(coord, entity) in cells {
        grid.set(coord, Some(entity)).unwrap();
    }
    GameState::new(grid).unwrap()
}

#[test]
fn test_player_walks_left_onto_gold() {
    // [Terrain, Empty, Gold, Empty, Player]
    let mut state = load_level("T.G.P\n").unwrap();
    state.set_input(Some(Direction::Left));

    state.step().unwrap();
    assert_eq!(state.player_position(), Some(Coord::new(3, 0)));
    assert_eq!(state.score(), 0);

    state.step().unwrap();
    assert_eq!(state.player_position(), Some(Coord::new(2, 0)));
    assert_eq!(state.score(), 10);
    assert_eq!(state.grid().count(EntityKind::Gold), 0);
    assert!(!state.is_game_over());
}

#[test]
fn test_sack_lands_on_player() {
    let mut state = state_from(
        1,
        2,
        &[
            (Coord::new(0, 0), Entity::Sack(Sack::falling(2))),
            (Coord::new(0, 1), Entity::player()),
        ],
    );
    state.step().unwrap();

    assert!(state.is_game_over());
    assert_eq!(state.player_position(), None);
    assert_eq!(state.grid().count(EntityKind::Sack), 1);
}

#[test]
fn test_player_cannot_push_sack() {
    let mut state = load_level("PS.\n").unwrap();
    let before = state.grid().clone();
    state.set_input(Some(Direction::Right));

    let report = state.step().unwrap();
    assert_eq!(state.grid(), &before);
    assert!(report.events.is_empty());
}

#[test]
fn test_player_blocked_by_sack_falling_into_its_path() {
    // The sack drops into the cell the player was heading for.
    let mut state = load_level("S.\n.P\nT.\n").unwrap();
    state.set_input(Some(Direction::Left));

    let report = state.step().unwrap();
    assert!(!state.is_game_over());
    assert_eq!(state.player_position(), Some(Coord::new(1, 1)));
    assert_eq!(state.grid().kind_at(Coord::new(0, 1)), Some(EntityKind::Sack));
    assert!(report.events.contains(&TickEvent::Blocked {
        kind: EntityKind::Player,
        from: Coord::new(1, 1),
        by: EntityKind::Sack,
    }));
    assert!(!report.has_deaths());
}

#[test]
fn test_monster_blocked_by_sack_falling_into_its_path() {
    let mut state = load_level("S.\n.M\nP.\n").unwrap();

    let report = state.step().unwrap();
    assert_eq!(state.grid().count(EntityKind::Monster), 1);
    assert_eq!(state.grid().kind_at(Coord::new(1, 1)), Some(EntityKind::Monster));
    assert_eq!(state.grid().kind_at(Coord::new(0, 1)), Some(EntityKind::Sack));
    assert!(report.events.contains(&TickEvent::Blocked {
        kind: EntityKind::Monster,
        from: Coord::new(1, 1),
        by: EntityKind::Sack,
    }));
    assert!(!state.is_game_over());
}

#[test]
fn test_sack_falls_three_cells_then_breaks() {
    let mut state = load_level("S.P\n...\n...\n...\nTTT\n").unwrap();

    for expected_y in 1..=3 {
        state.step().unwrap();
        assert_eq!(state.grid().kind_at(Coord::new(0, expected_y)), Some(EntityKind::Sack));
    }
    match state.grid().get(Coord::new(0, 3)).unwrap() {
        Some(Entity::Sack(sack)) => assert_eq!(sack.fall_distance(), 3),
        other => panic!("expected a sack, found {other:?}"),
    }

    let report = state.step().unwrap();
    assert_eq!(state.grid().kind_at(Coord::new(0, 3)), Some(EntityKind::Gold));
    assert!(report.events.contains(&TickEvent::Transformed {
        at: Coord::new(0, 3),
        from: EntityKind::Sack,
        to: EntityKind::Gold,
    }));
    assert_eq!(state.grid().kind_at(Coord::new(0, 4)), Some(EntityKind::Terrain));
}

#[test]
fn test_short_fall_does_not_break() {
    let mut state = load_level("S.P\n...\nT..\n").unwrap();
    for _ in 0..5 {
        state.step().unwrap();
    }
    assert_eq!(state.grid().kind_at(Coord::new(0, 1)), Some(EntityKind::Sack));
    assert_eq!(state.grid().count(EntityKind::Gold), 0);
}

#[test]
fn test_sack_squashes_monster() {
    // The monster is boxed in by terrain and cannot step out of the way.
    let mut state = load_level("S..\n...\n...\nMT.\nTPT\n").unwrap();

    state.step().unwrap();
    state.step().unwrap();
    assert_eq!(state.grid().kind_at(Coord::new(0, 2)), Some(EntityKind::Sack));
    assert_eq!(state.grid().count(EntityKind::Monster), 1);

    let report = state.step().unwrap();
    assert_eq!(state.grid().count(EntityKind::Monster), 0);
    assert_eq!(state.grid().kind_at(Coord::new(0, 3)), Some(EntityKind::Sack));
    assert!(report.events.contains(&TickEvent::Died {
        kind: EntityKind::Monster,
        at: Coord::new(0, 3),
        by: EntityKind::Sack,
    }));
    assert!(!state.is_game_over());

    state.step().unwrap();
    assert_eq!(state.grid().kind_at(Coord::new(0, 3)), Some(EntityKind::Gold));
}

#[test]
fn test_monster_hunts_player() {
    let config = SessionConfig {
        max_ticks: Some(20),
        ..SessionConfig::default()
    };
    let result = run_session("P....\n.....\n....M\n", "", &config).unwrap();
    assert!(result.game_over);
    assert_eq!(result.player, None);
    assert_eq!(result.remaining.monsters, 1);
    // Manhattan distance 6: the monster needs six steps.
    assert_eq!(result.game_over_tick, Some(6));
}

#[test]
fn test_monster_eats_gold() {
    let mut state = load_level("P.GM\n").unwrap();
    state.step().unwrap();
    assert_eq!(state.grid().count(EntityKind::Gold), 0);
    assert_eq!(state.grid().kind_at(Coord::new(2, 0)), Some(EntityKind::Monster));
    assert_eq!(state.score(), 0);
}

#[test]
fn test_game_over_is_permanent() {
    let mut state = load_level("PM\n").unwrap();
    state.step().unwrap();
    assert!(state.is_game_over());
    for _ in 0..5 {
        state.set_input(Some(Direction::Right));
        state.step().unwrap();
        assert!(state.is_game_over());
    }
}

#[test]
fn test_default_level_round_trip() {
    let grid = parse_level(DEFAULT_LEVEL).unwrap();
    let reparsed = parse_level(&render_level(&grid)).unwrap();
    assert_eq!(grid, reparsed);

    let placements: Vec<(Coord, char)> = grid
        .entities()
        .map(|(coord, e)| (coord, e.kind().glyph()))
        .collect();
    for (coord, glyph) in placements {
        let line = DEFAULT_LEVEL.lines().nth(usize::from(coord.y)).unwrap();
        assert_eq!(line.chars().nth(usize::from(coord.x)), Some(glyph));
    }
}

#[test]
fn test_default_level_session_keeps_invariants() {
    let mut state = load_level(DEFAULT_LEVEL).unwrap();
    let script = [
        Direction::Right,
        Direction::Right,
        Direction::Right,
        Direction::Down,
        Direction::Down,
        Direction::Down,
        Direction::Down,
        Direction::Left,
        Direction::Left,
        Direction::Left,
    ];
    for direction in script {
        state.set_input(Some(direction));
        state.step().unwrap();
        assert!(check_invariants(&state).is_empty());
    }
}

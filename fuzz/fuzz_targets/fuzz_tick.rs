#![no_main]

//! Tick engine fuzzer.
//!
//! Builds a small level from fuzzer bytes, runs a fuzzer-chosen input
//! script and checks after every tick that:
//! 1. The engine never returns an error
//! 2. The live entity count never increases
//! 3. The score only grows in gold-sized steps
//! 4. Game over never reverts
//! 5. All invariant checks pass

use arbitrary::Arbitrary;
use digger::game::{
    Coord, Direction, Entity, EntityKind, GOLD_REWARD, GameState, Grid, check_invariants,
};
use libfuzzer_sys::fuzz_target;

/// A fuzzer-generated cell.
#[derive(Arbitrary, Debug, Clone, Copy)]
enum FuzzCell {
    Empty,
    Terrain,
    Sack,
    Gold,
    Monster,
}

/// A fuzzer-generated input for one tick.
#[derive(Arbitrary, Debug, Clone, Copy)]
enum FuzzInput {
    None,
    Up,
    Down,
    Left,
    Right,
}

impl FuzzInput {
    fn direction(self) -> Option<Direction> {
        match self {
            FuzzInput::None => None,
            FuzzInput::Up => Some(Direction::Up),
            FuzzInput::Down => Some(Direction::Down),
            FuzzInput::Left => Some(Direction::Left),
            FuzzInput::Right => Some(Direction::Right),
        }
    }
}

/// Structured input for tick fuzzing.
#[derive(Arbitrary, Debug)]
struct TickInput {
    width: u8,
    height: u8,
    cells: Vec<FuzzCell>,
    player_x: u8,
    player_y: u8,
    script: Vec<FuzzInput>,
}

fuzz_target!(|input: TickInput| {
    // Cap sizes to keep each run fast
    let width = u16::from(input.width % 24) + 1;
    let height = u16::from(input.height % 16) + 1;
    let Some(mut grid) = Grid::new(width, height) else {
        return;
    };

    let mut cells = input.cells.iter().copied().cycle();
    for y in 0..height {
        for x in 0..width {
            let kind = match cells.next().unwrap_or(FuzzCell::Empty) {
                FuzzCell::Empty => None,
                FuzzCell::Terrain => Some(EntityKind::Terrain),
                FuzzCell::Sack => Some(EntityKind::Sack),
                FuzzCell::Gold => Some(EntityKind::Gold),
                FuzzCell::Monster => Some(EntityKind::Monster),
            };
            grid.set(Coord::new(x, y), kind.map(Entity::of_kind)).unwrap();
        }
    }
    let player = Coord::new(
        u16::from(input.player_x) % width,
        u16::from(input.player_y) % height,
    );
    grid.set(player, Some(Entity::player())).unwrap();

    let mut state = GameState::new(grid).unwrap();

    for step in input.script.iter().take(64) {
        let live = state.grid().live_count();
        let score = state.score();
        let was_over = state.is_game_over();

        state.set_input(step.direction());
        state.step().unwrap();

        assert!(state.grid().live_count() <= live, "live count increased");
        assert!(state.score() >= score, "score decreased");
        assert_eq!((state.score() - score) % GOLD_REWARD, 0, "odd score step");
        assert!(!was_over || state.is_game_over(), "game over reverted");

        let violations = check_invariants(&state);
        assert!(violations.is_empty(), "Invariants violated: {violations:?}");
    }
});

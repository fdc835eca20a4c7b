//! Benchmarks for the tick engine.
//!
//! Measures single ticks on the built-in level and on a large generated
//! level, plus a complete scripted session.

#![allow(missing_docs)]
#![allow(clippy::unwrap_used)]

use std::hint::black_box;

use criterion::{BenchmarkId, Criterion, criterion_group, criterion_main};
use digger::level::{DEFAULT_LEVEL, load_level};
use digger::session::{SessionConfig, run_session};

/// A level of `size` x `size` cells: terrain with a sack and a gold column
/// every few cells, monsters along the bottom, the player in the middle.
fn generated_level(size: usize) -> String {
    let mut text = String::with_capacity(size * (size + 1));
    for y in 0..size {
        for x in 0..size {
            let glyph = if (x, y) == (size / 2, size / 2) {
                'P'
            } else if y == size - 1 && x % 8 == 0 {
                'M'
            } else if y == 0 && x % 5 == 0 {
                'S'
            } else if x % 7 == 0 {
                'G'
            } else if (x + y) % 3 == 0 {
                '.'
            } else {
                'T'
            };
            text.push(glyph);
        }
        text.push('\n');
    }
    text
}

fn bench_default_tick(c: &mut Criterion) {
    let state = load_level(DEFAULT_LEVEL).unwrap();

    c.bench_function("tick_default_level", |b| {
        b.iter(|| {
            let mut state = state.clone();
            black_box(state.step().unwrap())
        });
    });
}

fn bench_large_tick(c: &mut Criterion) {
    let mut group = c.benchmark_group("tick_generated_level");

    for size in [16usize, 64, 128] {
        let state = load_level(&generated_level(size)).unwrap();
        group.bench_with_input(BenchmarkId::from_parameter(size), &state, |b, state| {
            b.iter(|| {
                let mut state = state.clone();
                black_box(state.step().unwrap())
            });
        });
    }

    group.finish();
}

fn bench_session(c: &mut Criterion) {
    let script = "RRRDDDDLLLUUURRRDDDD".repeat(5);
    let config = SessionConfig {
        stop_on_game_over: false,
        ..SessionConfig::default()
    };

    c.bench_function("session_default_level_100_ticks", |b| {
        b.iter(|| {
            let result = run_session(
                black_box(DEFAULT_LEVEL),
                black_box(&script),
                black_box(&config),
            );
            black_box(result)
        });
    });
}

criterion_group!(benches, bench_default_tick, bench_large_tick, bench_session);
criterion_main!(benches);

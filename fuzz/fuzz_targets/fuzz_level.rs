#![no_main]

//! Level parser fuzzer.
//!
//! Any text either fails to parse with an error or parses to a grid that
//! survives a write/read round trip unchanged.

use digger::level::{load_level, parse_level, render_level};
use libfuzzer_sys::fuzz_target;

fuzz_target!(|text: &str| {
    let Ok(grid) = parse_level(text) else {
        return;
    };

    let written = render_level(&grid);
    let reparsed = parse_level(&written).expect("written level must parse");
    assert_eq!(reparsed, grid);

    // Player-count validation must agree on both forms.
    assert_eq!(load_level(text).is_ok(), load_level(&written).is_ok());
});

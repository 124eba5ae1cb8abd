//! Benchmarks for level sessions.
//!
//! # Benchmarks
//!
//! - **`parse`**: Parses a layout into a board, deriving every slide range.
//! - **`slide_and_undo`**: Plays a fixed script of slides on a fresh session,
//!   then undoes all of them.
//!
//! # Running
//!
//! ```sh
//! cargo bench --bench moves
//! ```

use std::hint;

use blockslide_core::{Board, Label};
use blockslide_game::{Game, GameOptions, Level};
use criterion::{BatchSize, BenchmarkId, Criterion, criterion_group, criterion_main};

const LAYOUTS: [(&str, &str); 2] = [
    ("sample", "oIooLMoIBBLMAAJKooCCJKooxEEEoxGGHHoo"),
    ("open", "ooooooooooBoAAooBooooooooooooooooooo"),
];

// Every slide stays within range on the sample layout.
const SCRIPT: [(char, u8); 7] = [
    ('E', 2),
    ('H', 4),
    ('L', 2),
    ('B', 3),
    ('M', 2),
    ('H', 2),
    ('E', 1),
];

fn bench_parse(c: &mut Criterion) {
    for (name, layout) in LAYOUTS {
        c.bench_with_input(BenchmarkId::new("parse", name), layout, |b, layout| {
            b.iter(|| hint::black_box(layout).parse::<Board>().unwrap());
        });
    }
}

fn bench_slide_and_undo(c: &mut Criterion) {
    let level = Level::new(0, LAYOUTS[0].1, 1);
    let options = GameOptions::default();
    let script: Vec<(Label, u8)> = SCRIPT
        .iter()
        .map(|&(label, slot)| (Label::new(label).unwrap(), slot))
        .collect();

    c.bench_function("slide_and_undo", |b| {
        b.iter_batched(
            || Game::new(level.clone(), &options).unwrap(),
            |mut game| {
                for &(label, slot) in &script {
                    game.slide(label, slot).unwrap();
                }
                while game.undo().unwrap().is_some() {}
                game
            },
            BatchSize::SmallInput,
        );
    });
}

criterion_group!(benches, bench_parse, bench_slide_and_undo);
criterion_main!(benches);

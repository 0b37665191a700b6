use criterion::{BenchmarkId, Criterion, criterion_group, criterion_main};
use std::hint::black_box;

use sokoice::core::{Board, Direction};

const PUZZLES: &[(&str, &str, &str)] = &[
    (
        "walk",
        r#"
WWWWWW
W>___W
WWWWWW
"#,
        r#"
______
______
______
"#,
    ),
    (
        "push",
        r#"
WWWWWW
W>B__W
WWWWWW
"#,
        r#"
______
______
______
"#,
    ),
    (
        "long_slide",
        r#"
WWWWWWWWWWWW
W>_________W
WWWWWWWWWWWW
"#,
        r#"
____________
_IIIIIIIIII_
____________
"#,
    ),
];

pub fn bench_move_engine(c: &mut Criterion) {
    let mut group = c.benchmark_group("move_engine");

    for &(name, contents, ground) in PUZZLES {
        let board = Board::from_layers(contents.trim_matches('\n'), ground.trim_matches('\n'))
            .expect("benchmark level should parse");
        group.bench_with_input(BenchmarkId::new("step", name), &board, |b, board| {
            b.iter(|| black_box(board.move_player(Direction::Right)))
        });
    }

    group.finish();
}

criterion_group!(benches, bench_move_engine);
criterion_main!(benches);

use criterion::{criterion_group, criterion_main, Criterion};
use lib::chess::{Board, Color, Square};
use std::hint::black_box;

fn fools_mate() -> Board {
    let mut board = Board::default();
    for m in ["f2 f3", "e7 e5", "g2 g4", "d8 h4"] {
        board.move_piece(m.parse().unwrap());
    }

    board
}

fn bench(c: &mut Criterion) {
    let start = Board::default();
    let mate = fools_mate();

    c.benchmark_group("benches")
        .bench_function("is_move_legal", |b| {
            b.iter(|| {
                Square::iter()
                    .flat_map(|whence| Square::iter().map(move |whither| (whence, whither)))
                    .filter(|&m| black_box(&start).is_move_legal(m.into(), Color::White))
                    .count()
            })
        })
        .bench_function("moves", |b| {
            b.iter(|| black_box(&start).moves(Color::White).count())
        })
        .bench_function("is_game_over", |b| {
            b.iter(|| black_box(&mate).is_game_over(Color::White))
        });
}

criterion_group!(benches, bench);
criterion_main!(benches);

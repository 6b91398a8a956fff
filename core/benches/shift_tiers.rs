use std::hint::black_box;

use criterion::{BenchmarkId, Criterion, criterion_group, criterion_main};
use yose_core::{Board, Direction, Mulberry32};

fn half_filled_board(size: usize) -> Board {
    let mut rng = Mulberry32::new(1234);
    let mut board = Board::empty(size).expect("bench sizes are valid");
    for _ in 0..(size * size / 2) {
        board = board.with_random_tile(&mut rng);
    }
    board
}

fn bench_shift(c: &mut Criterion) {
    let mut group = c.benchmark_group("shift");
    for size in [4usize, 6, 8] {
        let board = half_filled_board(size);
        group.bench_function(BenchmarkId::from_parameter(format!("{size}x{size}")), |b| {
            b.iter(|| black_box(&board).shift(Direction::Left))
        });
    }
    group.finish();
}

criterion_group!(benches, bench_shift);
criterion_main!(benches);

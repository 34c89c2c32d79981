//! Criterion benchmarks for the full-scan outcome evaluator.

use std::hint::black_box;

use criterion::{criterion_group, criterion_main, BenchmarkId, Criterion};
use inarow_arena::Arena;
use inarow_bench::{random_position, BENCH_SIZES};
use inarow_board::{assess, evaluate};
use inarow_core::Mark;

fn bench_evaluate_half_full(c: &mut Criterion) {
    let mut group = c.benchmark_group("evaluate_half_full");
    for size in BENCH_SIZES {
        let mut arena = Arena::with_capacity(256);
        let board = random_position(&mut arena, size, size * size / 2, 42).unwrap();
        group.bench_with_input(BenchmarkId::from_parameter(size), &board, |b, board| {
            b.iter(|| black_box(evaluate(black_box(board), Mark::A)));
        });
    }
    group.finish();
}

/// `assess` on a full board: both marks plus the draw check.
fn bench_assess_full(c: &mut Criterion) {
    let mut group = c.benchmark_group("assess_full");
    for size in BENCH_SIZES {
        let mut arena = Arena::with_capacity(256);
        let board = random_position(&mut arena, size, size * size, 7).unwrap();
        group.bench_with_input(BenchmarkId::from_parameter(size), &board, |b, board| {
            b.iter(|| black_box(assess(black_box(board))));
        });
    }
    group.finish();
}

criterion_group!(benches, bench_evaluate_half_full, bench_assess_full);
criterion_main!(benches);

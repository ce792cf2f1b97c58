//! Criterion micro-benchmarks for arena allocation and free-list recycling.

use std::hint::black_box;

use criterion::{criterion_group, criterion_main, Criterion};
use ixmem_arena::{Arena, SlotHandle};
use ixmem_bench::scrambled_indices;

const CELLS: usize = 10_000;

/// Benchmark: Fill a 10K-slot arena from empty.
fn bench_arena_fill_10k(c: &mut Criterion) {
    c.bench_function("arena_fill_10k", |b| {
        b.iter(|| {
            let mut arena = Arena::with_capacity(CELLS).unwrap();
            for i in 0..CELLS as u64 {
                black_box(arena.allocate(i).unwrap());
            }
            black_box(&arena);
        });
    });
}

/// Benchmark: Free every slot in scrambled order, then refill.
fn bench_arena_churn_10k(c: &mut Criterion) {
    let order = scrambled_indices(CELLS, 42);
    let mut arena = Arena::with_capacity(CELLS).unwrap();
    let mut handles: Vec<SlotHandle> = (0..CELLS as u64)
        .map(|i| arena.allocate(i).unwrap())
        .collect();

    c.bench_function("arena_churn_10k", |b| {
        b.iter(|| {
            for &i in &order {
                black_box(arena.free(handles[i]).unwrap());
            }
            for (i, h) in handles.iter_mut().enumerate() {
                *h = arena.allocate(i as u64).unwrap();
            }
        });
    });
}

/// Benchmark: Resolve 10K live handles.
fn bench_arena_resolve_10k(c: &mut Criterion) {
    let mut arena = Arena::with_capacity(CELLS).unwrap();
    let handles: Vec<SlotHandle> = (0..CELLS as u64)
        .map(|i| arena.allocate(i).unwrap())
        .collect();

    c.bench_function("arena_resolve_10k", |b| {
        b.iter(|| {
            let mut sum = 0u64;
            for &h in &handles {
                sum = sum.wrapping_add(*arena.resolve(h).unwrap());
            }
            black_box(sum);
        });
    });
}

criterion_group!(
    benches,
    bench_arena_fill_10k,
    bench_arena_churn_10k,
    bench_arena_resolve_10k
);
criterion_main!(benches);

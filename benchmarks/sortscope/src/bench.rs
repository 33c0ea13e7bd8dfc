//! Criterion benchmarks for the instrumented sorts.
//!
//! Benchmarks cover:
//! - Scalability of every algorithm on uniform random data
//! - Input shapes (sorted, reversed, few unique values)
//! - Cost of recording a full trace versus counting only

use criterion::{BenchmarkId, Criterion, Throughput, criterion_group, criterion_main};
use rand::prelude::*;
use sortscope::prelude::*;
use std::hint::black_box;

// ============================================================================
// Data Generation with Reproducible RNG
// ============================================================================

/// Uniform random values in `-10000..=10000`.
fn generate_uniform(size: usize, seed: u64) -> Vec<i64> {
    let mut rng = StdRng::seed_from_u64(seed);
    (0..size).map(|_| rng.random_range(-10_000..=10_000)).collect()
}

/// Random values drawn from only eight distinct keys.
fn generate_few_unique(size: usize, seed: u64) -> Vec<i64> {
    let mut rng = StdRng::seed_from_u64(seed);
    (0..size).map(|_| rng.random_range(0..8)).collect()
}

// ============================================================================
// Benchmarks
// ============================================================================

fn bench_scalability(c: &mut Criterion) {
    let mut group = c.benchmark_group("scalability");
    group.sample_size(20);

    for size in [100, 500, 1_000, 2_000] {
        let data = generate_uniform(size, 42);
        group.throughput(Throughput::Elements(size as u64));

        for algorithm in Algorithm::ALL {
            group.bench_with_input(BenchmarkId::new(algorithm.name(), size), &data, |b, data| {
                b.iter(|| black_box(algorithm.sort(black_box(data))));
            });
        }
    }

    group.finish();
}

fn bench_input_shapes(c: &mut Criterion) {
    let mut group = c.benchmark_group("input_shapes");
    group.sample_size(20);

    let size = 1_000;
    let sorted: Vec<i64> = (0..size).collect();
    let reversed: Vec<i64> = (0..size).rev().collect();
    let few_unique = generate_few_unique(size as usize, 7);

    for (shape, data) in [("sorted", &sorted), ("reversed", &reversed), ("few_unique", &few_unique)] {
        for algorithm in Algorithm::ALL {
            group.bench_with_input(BenchmarkId::new(algorithm.name(), shape), data, |b, data| {
                b.iter(|| black_box(algorithm.sort(black_box(data))));
            });
        }
    }

    group.finish();
}

fn bench_tracing_overhead(c: &mut Criterion) {
    let mut group = c.benchmark_group("tracing_overhead");
    group.sample_size(10);

    let data = generate_uniform(200, 123);
    for algorithm in [Algorithm::Insertion, Algorithm::Merge, Algorithm::Quick] {
        group.bench_with_input(BenchmarkId::new("measured", algorithm.name()), &data, |b, data| {
            b.iter(|| black_box(algorithm.sort(black_box(data))));
        });
        group.bench_with_input(BenchmarkId::new("traced", algorithm.name()), &data, |b, data| {
            b.iter(|| black_box(algorithm.sort_traced(black_box(data))));
        });
    }

    group.finish();
}

criterion_group!(
    benches,
    bench_scalability,
    bench_input_shapes,
    bench_tracing_overhead
);
criterion_main!(benches);

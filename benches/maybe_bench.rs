//! Benchmark for the Maybe combinator library.
//!
//! Measures classification, chaining, and the list-bridge combinators.

use criterion::{BenchmarkId, Criterion, criterion_group, criterion_main};
use mayhaps::maybe::{Maybe, cat_maybes, map_maybe};
use std::hint::black_box;

// =============================================================================
// Chaining Benchmarks
// =============================================================================

fn benchmark_bind_chain(criterion: &mut Criterion) {
    let mut group = criterion.benchmark_group("bind_chain");

    group.bench_function("three_step_present", |bencher| {
        bencher.iter(|| {
            let result = Maybe::of(black_box(5))
                .bind(|n| Maybe::of(n + 1))
                .bind(|n| Maybe::of(n * 2))
                .bind(|n| Maybe::of(n - 3));
            black_box(result)
        });
    });

    group.bench_function("three_step_empty_input", |bencher| {
        bencher.iter(|| {
            let result = Maybe::<i32>::Empty
                .bind(|n| Maybe::of(n + 1))
                .bind(|n| Maybe::of(n * 2))
                .bind(|n| Maybe::of(n - 3));
            black_box(result)
        });
    });

    for step_count in [4, 16, 64] {
        group.bench_with_input(
            BenchmarkId::new("bind_all_steps", step_count),
            &step_count,
            |bencher, &step_count| {
                bencher.iter(|| {
                    let steps = (0..step_count).map(|_| |n: i32| Maybe::Present(n + 1));
                    let result = Maybe::Present(black_box(0)).bind_all(steps);
                    black_box(result)
                });
            },
        );
    }

    group.finish();
}

// =============================================================================
// List Bridge Benchmarks
// =============================================================================

fn benchmark_list_bridge(criterion: &mut Criterion) {
    let mut group = criterion.benchmark_group("list_bridge");

    for size in [10, 100, 1000] {
        group.bench_with_input(
            BenchmarkId::new("cat_maybes", size),
            &size,
            |bencher, &size| {
                let values: Vec<Maybe<i32>> = (0..size)
                    .map(|n| if n % 3 == 0 { Maybe::Empty } else { Maybe::Present(n) })
                    .collect();
                bencher.iter(|| black_box(cat_maybes(black_box(values.clone()))));
            },
        );

        group.bench_with_input(
            BenchmarkId::new("map_maybe", size),
            &size,
            |bencher, &size| {
                let values: Vec<i32> = (0..size).collect();
                bencher.iter(|| {
                    let kept = map_maybe(
                        |n| if n % 3 == 0 { Maybe::Empty } else { Maybe::Present(n * 2) },
                        black_box(values.clone()),
                    );
                    black_box(kept)
                });
            },
        );
    }

    group.finish();
}

criterion_group!(benches, benchmark_bind_chain, benchmark_list_bridge);
criterion_main!(benches);

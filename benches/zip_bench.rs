//! Benchmark for the variadic zip.
//!
//! Compares `zip_cursors` against nested `Iterator::zip` chains.

use criterion::{BenchmarkId, Criterion, criterion_group, criterion_main};
use rebound::containers::{SinglyLinkedList, Vector};
use rebound::zip::zip_cursors;
use std::collections::LinkedList;
use std::hint::black_box;

// =============================================================================
// Pairwise Zip Benchmark
// =============================================================================

fn benchmark_pairwise(criterion: &mut Criterion) {
    let mut group = criterion.benchmark_group("zip_pairwise");

    for size in [100, 1000, 10000] {
        let numbers: Vec<u64> = (0..size).collect();
        let letters: LinkedList<u64> = (0..size).rev().collect();

        group.bench_with_input(BenchmarkId::new("zip_cursors", size), &size, |bencher, _| {
            bencher.iter(|| black_box(zip_cursors(&numbers, (&letters,)).count()));
        });

        group.bench_with_input(BenchmarkId::new("Iterator::zip", size), &size, |bencher, _| {
            bencher.iter(|| black_box(numbers.iter().zip(letters.iter()).count()));
        });

        group.bench_with_input(BenchmarkId::new("Vector::zip", size), &size, |bencher, _| {
            let vector = Vector::new(numbers.clone());
            bencher.iter(|| black_box(vector.zip(&letters)));
        });
    }

    group.finish();
}

// =============================================================================
// Four-way Zip Benchmark
// =============================================================================

fn benchmark_four_way(criterion: &mut Criterion) {
    let mut group = criterion.benchmark_group("zip_four_way");

    for size in [100, 1000, 10000] {
        let first: Vec<u64> = (0..size).collect();
        let second: LinkedList<u64> = (0..size).collect();
        let third: SinglyLinkedList<u64> = (0..size).collect();
        let fourth: Vec<u64> = (0..size / 2).collect();

        group.bench_with_input(BenchmarkId::new("zip_cursors", size), &size, |bencher, _| {
            bencher.iter(|| {
                black_box(
                    zip_cursors(&first, (&second, &third, &fourth))
                        .map(|(a, b, c, d)| a + b + c + d)
                        .sum::<u64>(),
                )
            });
        });

        group.bench_with_input(BenchmarkId::new("Iterator::zip", size), &size, |bencher, _| {
            bencher.iter(|| {
                black_box(
                    first
                        .iter()
                        .zip(second.iter())
                        .zip(third.iter())
                        .zip(fourth.iter())
                        .map(|(((a, b), c), d)| a + b + c + d)
                        .sum::<u64>(),
                )
            });
        });
    }

    group.finish();
}

// =============================================================================
// Criterion Group and Main
// =============================================================================

criterion_group!(benches, benchmark_pairwise, benchmark_four_way);

criterion_main!(benches);

//! Element-wise comparison benchmarks using Criterion.
//!
//! Benchmarks cover:
//! - Scalability (1K to 1M elements)
//! - Boolean check vs. full mismatch report
//! - Worst case for short-circuiting (mismatch in the last element)

use criterion::{BenchmarkId, Criterion, Throughput, criterion_group, criterion_main};
use numutils::prelude::*;
use numutils_benchmarks::{generate_late_mismatch, generate_noisy_pair};
use std::hint::black_box;

const SIZES: [usize; 4] = [1_000, 10_000, 100_000, 1_000_000];

fn bench_elements_approx_equal(c: &mut Criterion) {
    let mut group = c.benchmark_group("elements_approx_equal");

    for &size in &SIZES {
        let (a, b) = generate_noisy_pair(size, 1e-6, 42);
        group.throughput(Throughput::Elements(size as u64));
        group.bench_with_input(BenchmarkId::from_parameter(size), &size, |bench, _| {
            bench.iter(|| elements_approx_equal(black_box(&a), black_box(&b), 1e-4))
        });
    }

    group.finish();
}

fn bench_compare_report(c: &mut Criterion) {
    let mut group = c.benchmark_group("compare_report");
    let cmp = Approx::new().tolerance(1e-6).build().unwrap();

    for &size in &SIZES {
        let (a, b) = generate_noisy_pair(size, 1e-6, 7);
        group.throughput(Throughput::Elements(size as u64));
        group.bench_with_input(BenchmarkId::from_parameter(size), &size, |bench, _| {
            bench.iter(|| cmp.compare(black_box(&a), black_box(&b)).unwrap())
        });
    }

    group.finish();
}

fn bench_late_mismatch(c: &mut Criterion) {
    let mut group = c.benchmark_group("late_mismatch");

    for &size in &SIZES {
        let (a, b) = generate_late_mismatch(size);
        group.throughput(Throughput::Elements(size as u64));
        group.bench_with_input(BenchmarkId::from_parameter(size), &size, |bench, _| {
            bench.iter(|| elements_approx_equal_default(black_box(&a), black_box(&b)))
        });
    }

    group.finish();
}

criterion_group!(
    benches,
    bench_elements_approx_equal,
    bench_compare_report,
    bench_late_mismatch
);
criterion_main!(benches);

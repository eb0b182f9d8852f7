use std::cmp::Ordering;
use std::hint::black_box;

use criterion::{criterion_group, criterion_main, BenchmarkId, Criterion, Throughput};
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use vectorizer::prelude::*;

/// Generates a pseudo-random vector. A fixed seed keeps the input identical
/// across runs so results stay comparable.
fn generate_random_vector<const N: usize>() -> StaticVector<f64, N> {
    let mut rng = StdRng::seed_from_u64(42);
    StaticVector::from_fn(|_| rng.random_range(-1000.0..1000.0))
}

fn ascending(a: &f64, b: &f64) -> Ordering {
    a.partial_cmp(b).unwrap_or(Ordering::Equal)
}

/// Compares the contiguous fast path with the pair path taken when a
/// companion index container or a mask is supplied.
fn bench_sort_paths<const N: usize>(c: &mut Criterion) {
    let mut group = c.benchmark_group("Sort");
    group.throughput(Throughput::Elements(N as u64));

    let v = generate_random_vector::<N>();
    let half = Mask::<N>::from_fn(|i| i % 2 == 0);

    group.bench_with_input(BenchmarkId::new("fast path", N), &v, |b, v| {
        b.iter(|| black_box(v.sort()))
    });

    group.bench_with_input(BenchmarkId::new("magnitude", N), &v, |b, v| {
        b.iter(|| black_box(v.asort()))
    });

    group.bench_with_input(BenchmarkId::new("companion", N), &v, |b, v| {
        b.iter(|| {
            let mut indexes = StaticVector::<usize, N>::from_fn(|i| i);
            let sorted = v.sort_with(ascending, &mut indexes, &All);
            black_box((sorted, indexes))
        })
    });

    group.bench_with_input(BenchmarkId::new("masked", N), &v, |b, v| {
        b.iter(|| black_box(v.sort_with(ascending, &mut NoCompanion, &half)))
    });

    group.bench_with_input(BenchmarkId::new("resort", N), &v, |b, v| {
        let mut indexes = StaticVector::<usize, N>::from_fn(|i| i);
        let _ = v.sort_with(ascending, &mut indexes, &All);
        b.iter(|| black_box(v.resort(black_box(&indexes))))
    });

    group.finish();
}

fn all_benchmarks(c: &mut Criterion) {
    bench_sort_paths::<4>(c);
    bench_sort_paths::<16>(c);
    bench_sort_paths::<64>(c);
    bench_sort_paths::<256>(c);
}

criterion_group!(benches, all_benchmarks);
criterion_main!(benches);

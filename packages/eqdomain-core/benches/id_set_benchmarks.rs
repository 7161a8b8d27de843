//! Performance benchmarks for the id set algebra
//!
//! - Sorted overlap vs hash probing
//! - Short-circuit overlap with unreachable thresholds
//! - K-way union of many column lists

use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion, Throughput};
use eqdomain_core::features::id_set::{HashIdSet, IdSet, ImmutableIdSet};

fn strided(len: u32, stride: u32, offset: u32) -> ImmutableIdSet {
    ImmutableIdSet::collect_unique((0..len).map(|i| i * stride + offset))
}

// ============================================================================
// Overlap
// ============================================================================

fn bench_overlap(c: &mut Criterion) {
    let mut group = c.benchmark_group("overlap");

    for size in [100u32, 1_000, 10_000] {
        let a = strided(size, 2, 0);
        let b = strided(size, 3, 0);
        let hashed: HashIdSet = b.iter().collect();

        group.throughput(Throughput::Elements(u64::from(size) * 2));
        group.bench_with_input(BenchmarkId::new("sorted", size), &size, |bench, _| {
            bench.iter(|| black_box(a.overlap(&b)));
        });
        group.bench_with_input(BenchmarkId::new("hash_probe", size), &size, |bench, _| {
            bench.iter(|| black_box(a.overlap(&hashed)));
        });
    }

    group.finish();
}

fn bench_overlaps_short_circuit(c: &mut Criterion) {
    let a = strided(10_000, 2, 0);
    let b = strided(10_000, 2, 1);

    c.bench_function("overlaps_unreachable_threshold", |bench| {
        bench.iter(|| black_box(a.overlaps(&b, 5_000)));
    });
    c.bench_function("overlap_full_count", |bench| {
        bench.iter(|| black_box(a.overlap(&b) >= 5_000));
    });
}

// ============================================================================
// Construction and Union
// ============================================================================

fn bench_union_all(c: &mut Criterion) {
    let mut group = c.benchmark_group("union_all");

    for inputs in [2u32, 8, 32] {
        let sets: Vec<ImmutableIdSet> = (0..inputs).map(|k| strided(2_000, inputs, k)).collect();
        group.bench_with_input(BenchmarkId::from_parameter(inputs), &sets, |bench, sets| {
            bench.iter(|| black_box(ImmutableIdSet::union_all(sets.iter())));
        });
    }

    group.finish();
}

fn bench_from_sorted(c: &mut Criterion) {
    let values: Vec<u32> = (0..100_000).collect();
    c.bench_function("from_sorted_100k", |bench| {
        bench.iter(|| black_box(ImmutableIdSet::from_sorted(values.clone())));
    });
}

criterion_group!(
    benches,
    bench_overlap,
    bench_overlaps_short_circuit,
    bench_union_all,
    bench_from_sorted
);
criterion_main!(benches);

//! UniqueSortedList insertion and lookup benchmark.
//!
//! Compares the binary-search lookup used without an equivalence relation
//! against the linear scan used with one.
//!
//! Pre-generated input is reused via clone() in setup so every iteration
//! works on the same data.

use criterion::{BatchSize, BenchmarkId, Criterion, criterion_group, criterion_main};
use std::hint::black_box;
use unique_sorted_list::sorted::{UniqueSortedList, equivalence_by_key, order_by_key};

const SIZES: [u32; 3] = [100, 1000, 10000];

/// Pre-generates a scrambled input with every value appearing twice.
fn generate_input(size: u32) -> Vec<u32> {
    (0..size)
        .map(|index| index.wrapping_mul(2_654_435_761) % size)
        .chain(0..size)
        .collect()
}

fn batch_size_for(size: u32) -> BatchSize {
    if size < 1000 {
        BatchSize::SmallInput
    } else {
        BatchSize::LargeInput
    }
}

fn benchmark_from_items(criterion: &mut Criterion) {
    let mut group = criterion.benchmark_group("unique_sorted_list_from_items");

    for size in SIZES {
        let input = generate_input(size);
        group.bench_with_input(BenchmarkId::new("natural_order", size), &size, |bencher, &size| {
            bencher.iter_batched(
                || input.clone(),
                |elements| black_box(UniqueSortedList::from_items(black_box(elements))),
                batch_size_for(size),
            );
        });
    }

    group.finish();
}

fn benchmark_index_of(criterion: &mut Criterion) {
    let mut group = criterion.benchmark_group("unique_sorted_list_index_of");

    for size in SIZES {
        let input = generate_input(size);
        let ordered = UniqueSortedList::from_items_with_order(
            input.clone(),
            order_by_key(|value: &u32| *value),
        );
        let scanning = UniqueSortedList::from_items_with_order_and_equivalence(
            input,
            order_by_key(|value: &u32| *value),
            equivalence_by_key(|value: &u32| *value),
        );
        let probe = size - 1;

        group.bench_with_input(BenchmarkId::new("order_search", size), &probe, |bencher, probe| {
            bencher.iter(|| black_box(ordered.index_of(black_box(probe))));
        });
        group.bench_with_input(BenchmarkId::new("equivalence_scan", size), &probe, |bencher, probe| {
            bencher.iter(|| black_box(scanning.index_of(black_box(probe))));
        });
    }

    group.finish();
}

criterion_group!(benches, benchmark_from_items, benchmark_index_of);
criterion_main!(benches);

//! Benchmark for RecursiveList vs standard LinkedList.
//!
//! Compares the positional operations of RecursiveList against Rust's standard
//! LinkedList, which has no indexed insertion and has to split and re-append.

use criterion::{BenchmarkId, Criterion, criterion_group, criterion_main};
use recursive_list::RecursiveList;
use std::collections::LinkedList;
use std::hint::black_box;

fn build_list(size: i32) -> RecursiveList<i32> {
    let mut list: RecursiveList<i32> = RecursiveList::new();
    for element in (0..size).rev() {
        list.insert_first(element).unwrap();
    }
    list
}

// =============================================================================
// insert_first Benchmark
// =============================================================================

fn benchmark_insert_first(criterion: &mut Criterion) {
    let mut group = criterion.benchmark_group("insert_first");

    for size in [100, 1000, 10000] {
        group.bench_with_input(
            BenchmarkId::new("RecursiveList", size),
            &size,
            |bencher, &size| {
                bencher.iter(|| {
                    let mut list: RecursiveList<i32> = RecursiveList::new();
                    for element in 0..size {
                        list.insert_first(black_box(element)).unwrap();
                    }
                    black_box(list)
                });
            },
        );

        group.bench_with_input(
            BenchmarkId::new("LinkedList", size),
            &size,
            |bencher, &size| {
                bencher.iter(|| {
                    let mut list = LinkedList::new();
                    for element in 0..size {
                        list.push_front(black_box(element));
                    }
                    black_box(list)
                });
            },
        );
    }

    group.finish();
}

// =============================================================================
// get Benchmark
// =============================================================================

fn benchmark_get_middle(criterion: &mut Criterion) {
    let mut group = criterion.benchmark_group("get_middle");

    for size in [100, 1000, 10000] {
        let recursive_list = build_list(size);
        let linked_list: LinkedList<i32> = (0..size).collect();
        let middle = usize::try_from(size / 2).unwrap_or_default();

        group.bench_with_input(
            BenchmarkId::new("RecursiveList", size),
            &middle,
            |bencher, &middle| {
                bencher.iter(|| black_box(recursive_list.get(black_box(middle))));
            },
        );

        group.bench_with_input(
            BenchmarkId::new("LinkedList", size),
            &middle,
            |bencher, &middle| {
                bencher.iter(|| black_box(linked_list.iter().nth(black_box(middle))));
            },
        );
    }

    group.finish();
}

// =============================================================================
// insert_at / remove_at Benchmark
// =============================================================================

fn benchmark_insert_remove_middle(criterion: &mut Criterion) {
    let mut group = criterion.benchmark_group("insert_remove_middle");

    for size in [100, 1000, 10000] {
        let middle = usize::try_from(size / 2).unwrap_or_default();

        group.bench_with_input(
            BenchmarkId::new("RecursiveList", size),
            &middle,
            |bencher, &middle| {
                let mut list = build_list(size);
                bencher.iter(|| {
                    list.insert_at(black_box(middle), -1).unwrap();
                    black_box(list.remove_at(black_box(middle)).unwrap())
                });
            },
        );

        group.bench_with_input(
            BenchmarkId::new("LinkedList", size),
            &middle,
            |bencher, &middle| {
                let mut list: LinkedList<i32> = (0..size).collect();
                bencher.iter(|| {
                    let mut back = list.split_off(black_box(middle));
                    list.push_back(-1);
                    list.append(&mut back);
                    let mut back = list.split_off(black_box(middle));
                    let removed = back.pop_front();
                    list.append(&mut back);
                    black_box(removed)
                });
            },
        );
    }

    group.finish();
}

// =============================================================================
// Iteration Benchmark
// =============================================================================

fn benchmark_iteration(criterion: &mut Criterion) {
    let mut group = criterion.benchmark_group("iteration");

    for size in [100, 1000, 10000] {
        let recursive_list = build_list(size);
        let linked_list: LinkedList<i32> = (0..size).collect();

        group.bench_with_input(
            BenchmarkId::new("RecursiveList", size),
            &size,
            |bencher, _| {
                bencher.iter(|| black_box(recursive_list.iter().sum::<i32>()));
            },
        );

        group.bench_with_input(
            BenchmarkId::new("LinkedList", size),
            &size,
            |bencher, _| {
                bencher.iter(|| black_box(linked_list.iter().sum::<i32>()));
            },
        );
    }

    group.finish();
}

criterion_group!(
    benches,
    benchmark_insert_first,
    benchmark_get_middle,
    benchmark_insert_remove_middle,
    benchmark_iteration
);
criterion_main!(benches);

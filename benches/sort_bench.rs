//! Benchmarks for Rucksack sort and search operations

use criterion::{criterion_group, criterion_main, BatchSize, Criterion};
use rand::Rng;

use rucksack::search::binary_search_by_name;
use rucksack::sort::insertion_sort;
use rucksack::{Criterion as SortCriterion, Item};

fn random_items(n: usize) -> Vec<Item> {
    let mut rng = rand::rng();
    (0..n)
        .map(|_| {
            Item::new(
                format!("item-{:06}", rng.random_range(0..1_000_000u32)),
                format!("cat-{}", rng.random_range(0..8u8)),
                rng.random_range(1..100i64),
                rng.random_range(1..=5i64),
            )
            .unwrap()
        })
        .collect()
}

fn reversed_items(n: usize) -> Vec<Item> {
    (0..n)
        .rev()
        .map(|i| Item::new(format!("item-{i:06}"), "misc", 1, 3).unwrap())
        .collect()
}

fn sort_benchmarks(c: &mut Criterion) {
    let mut group = c.benchmark_group("insertion_sort");

    for &n in &[10usize, 100, 1000] {
        group.bench_function(format!("random_{n}"), |b| {
            b.iter_batched(
                || random_items(n),
                |mut items| insertion_sort(&mut items, SortCriterion::Name),
                BatchSize::SmallInput,
            )
        });

        group.bench_function(format!("reversed_{n}"), |b| {
            b.iter_batched(
                || reversed_items(n),
                |mut items| insertion_sort(&mut items, SortCriterion::Name),
                BatchSize::SmallInput,
            )
        });
    }

    group.finish();
}

fn search_benchmarks(c: &mut Criterion) {
    let mut items = random_items(1000);
    insertion_sort(&mut items, SortCriterion::Name);
    let target = items[items.len() / 3].name.clone();

    c.bench_function("binary_search_hit_1000", |b| {
        b.iter(|| binary_search_by_name(&items, &target))
    });

    c.bench_function("binary_search_miss_1000", |b| {
        b.iter(|| binary_search_by_name(&items, "zzz-not-present"))
    });
}

criterion_group!(benches, sort_benchmarks, search_benchmarks);
criterion_main!(benches);

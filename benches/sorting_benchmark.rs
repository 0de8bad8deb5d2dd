use criterion::{BatchSize, Criterion, criterion_group, criterion_main};
use natorder::prelude::*;
use rand::Rng;
use std::hint::black_box;

fn file_names(count: usize) -> Vec<String> {
    let mut rng = rand::rng();
    (0..count)
        .map(|_| {
            format!(
                "IMG_{}-v{}.{}.jpg",
                rng.random_range(0..100_000),
                rng.random_range(0..20),
                rng.random_range(0..100)
            )
        })
        .collect()
}

fn bench_file_names(c: &mut Criterion) {
    let mut group = c.benchmark_group("Natural Sort");
    group.sample_size(10);

    let names = file_names(10_000);

    group.bench_function("natural_sort (in-place)", |b| {
        b.iter_batched(
            || names.clone(),
            |mut data| natural_sort(black_box(&mut data)),
            BatchSize::SmallInput,
        )
    });

    // Same work split in two: build every key, then sort the keys bytewise.
    group.bench_function("normalize + slice::sort", |b| {
        b.iter_batched(
            || names.clone(),
            |data| {
                let mut keys: Vec<Normalized> =
                    data.iter().map(|s| normalize(s.as_bytes(), 75)).collect();
                keys.sort_unstable_by(|a, b| a.as_bytes().cmp(b.as_bytes()));
                keys
            },
            BatchSize::SmallInput,
        )
    });

    // Lexicographic baseline (wrong order, for scale).
    group.bench_function("slice::sort (lexicographic)", |b| {
        b.iter_batched(
            || names.clone(),
            |mut data| data.sort(),
            BatchSize::SmallInput,
        )
    });

    group.finish();
}

criterion_group!(benches, bench_file_names);
criterion_main!(benches);

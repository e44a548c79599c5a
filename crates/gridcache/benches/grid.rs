use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion, Throughput};
use gridcache::{GridCache, GridConfig};
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

fn random_keys(seed: u64, count: usize, max_key: i32) -> Vec<i32> {
    let mut rng = StdRng::seed_from_u64(seed);
    (0..count).map(|_| rng.random_range(0..max_key)).collect()
}

fn bench_simulate(c: &mut Criterion) {
    let mut group = c.benchmark_group("simulate");
    group.sample_size(20);

    for count in [1_000usize, 10_000, 100_000] {
        let keys = random_keys(42, count, 1_000_000);
        group.throughput(Throughput::Elements(count as u64));
        group.bench_with_input(BenchmarkId::new("random", count), &keys, |b, keys| {
            b.iter(|| {
                let mut grid = GridCache::default();
                grid.simulate(keys.iter().copied());
                black_box(grid.snapshot())
            });
        });
    }

    group.finish();
}

fn bench_hot_hits(c: &mut Criterion) {
    let mut group = c.benchmark_group("hits");
    group.sample_size(50);
    group.throughput(Throughput::Elements(1));

    group.bench_function("insert_existing", |b| {
        let mut grid = GridCache::default();
        let keys = random_keys(7, 1_000, 1_000_000);
        grid.simulate(keys.iter().copied());

        let mut counter = 0;
        b.iter(|| {
            black_box(grid.insert(keys[counter % keys.len()]));
            counter += 1;
        });
    });

    group.bench_function("search_missing", |b| {
        let mut grid = GridCache::default();
        grid.simulate(0..1_000);

        let mut key = 1_000_000;
        b.iter(|| {
            black_box(grid.search(key));
            key = key.wrapping_add(1);
        });
    });

    group.finish();
}

fn bench_growth(c: &mut Criterion) {
    let mut group = c.benchmark_group("growth");
    group.sample_size(20);

    group.bench_function("sequential_10k_from_4x4", |b| {
        let config = GridConfig::new().with_dimensions(4, 4).with_threshold(0.7);
        b.iter(|| {
            let mut grid = GridCache::new(config).unwrap();
            grid.simulate(0..10_000);
            black_box(grid.rows())
        });
    });

    group.finish();
}

criterion_group!(benches, bench_simulate, bench_hot_hits, bench_growth);
criterion_main!(benches);

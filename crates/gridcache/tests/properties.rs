use std::collections::HashSet;

use gridcache::{GridCache, GridConfig};
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

fn trace(seed: u64, len: usize, max_key: i32) -> Vec<i32> {
    let mut rng = StdRng::seed_from_u64(seed);
    (0..len).map(|_| rng.random_range(-max_key..max_key)).collect()
}

fn config() -> GridConfig {
    GridConfig::new()
        .with_dimensions(4, 4)
        .with_max_probe(5)
        .with_threshold(0.7)
}

#[test]
fn no_duplicates_stored() {
    let keys = trace(1, 5_000, 800);
    let mut grid = GridCache::new(config()).unwrap();
    grid.simulate(keys.iter().copied());

    let distinct: HashSet<i32> = keys.iter().copied().collect();
    assert_eq!(grid.len(), distinct.len());

    let stored: Vec<i32> = grid.keys().collect();
    let stored_set: HashSet<i32> = stored.iter().copied().collect();
    assert_eq!(stored.len(), stored_set.len());
    assert_eq!(stored_set, distinct);

    for key in &distinct {
        assert!(grid.search(*key), "key {} not found", key);
    }
}

#[test]
fn hits_plus_misses_equals_counted_requests() {
    let keys = trace(2, 3_000, 500);
    let mut grid = GridCache::new(config()).unwrap();

    for (i, key) in keys.iter().enumerate() {
        grid.insert(*key);
        // Interleave uncounted traffic
        if i % 3 == 0 {
            grid.insert_with(key.wrapping_add(10_000), false);
        }
    }

    let stats = grid.snapshot();
    assert_eq!(stats.hits + stats.misses, keys.len() as u64);
    assert_eq!(stats.chain_hits + stats.probe_hits, stats.hits);
}

#[test]
fn distinct_keys_are_all_misses() {
    let mut grid = GridCache::new(config()).unwrap();
    grid.simulate(0..1_000);

    let stats = grid.snapshot();
    assert_eq!(stats.misses, 1_000);
    assert_eq!(stats.hits, 0);
    assert_eq!(stats.chain_misses, 1_000);
    assert_eq!(stats.probe_misses, 1_000);
}

#[test]
fn collisions_never_decrease() {
    let keys = trace(3, 2_000, 300);
    let mut grid = GridCache::new(config()).unwrap();

    let mut last = 0;
    for key in keys {
        grid.insert(key);
        let collisions = grid.snapshot().collisions;
        assert!(collisions >= last);
        last = collisions;
    }
}

#[test]
fn first_key_has_no_collision() {
    for key in [0, 1, -1, 12345, i32::MAX] {
        let mut grid = GridCache::new(config()).unwrap();
        grid.insert(key);
        assert_eq!(grid.snapshot().collisions, 0);
    }
}

#[test]
fn load_factor_bounded_after_every_insert() {
    let keys = trace(4, 4_000, 100_000);
    let mut grid = GridCache::new(config()).unwrap();

    for key in keys {
        grid.insert(key);
        assert!(grid.load_factor() <= 0.7 + f64::EPSILON);
    }
}

#[test]
fn growth_preserves_membership() {
    let keys = trace(5, 2_000, 50_000);
    let mut grid = GridCache::new(config()).unwrap();
    let mut seen = HashSet::new();

    for key in keys {
        let passes = grid.growth_passes();
        grid.insert(key);
        seen.insert(key);

        if grid.growth_passes() > passes {
            let after: HashSet<i32> = grid.keys().collect();
            assert_eq!(after, seen);
            for k in &seen {
                assert!(grid.search(*k));
            }
        }
    }
    assert!(grid.growth_passes() > 0);
}

#[test]
fn dimensions_only_grow() {
    let keys = trace(6, 3_000, 1_000_000);
    let mut grid = GridCache::new(config()).unwrap();

    let mut buckets = grid.bucket_count();
    for key in keys {
        grid.insert(key);
        let now = grid.bucket_count();
        assert!(now == buckets || now >= buckets * 4);
        buckets = now;
    }
}

#[test]
fn deterministic_replay() {
    let keys = trace(7, 5_000, 2_000);

    let mut a = GridCache::new(config()).unwrap();
    let mut b = GridCache::new(config()).unwrap();
    a.simulate(keys.iter().copied());
    b.simulate(keys.iter().copied());

    assert_eq!(a.snapshot(), b.snapshot());
    assert_eq!(a.keys().collect::<Vec<_>>(), b.keys().collect::<Vec<_>>());
}

#[test]
fn twelfth_key_triggers_growth() {
    let mut grid = GridCache::new(config()).unwrap();
    grid.simulate(100..112);

    assert!(grid.rows() >= 8);
    assert!(grid.cols() >= 8);
    assert!(grid.snapshot().load_factor <= 0.7);
}

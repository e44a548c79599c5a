//! Request statistics tracking

use crate::position::Tier;

/// Running counters for simulated traffic
///
/// Only counted inserts touch these; growth-pass re-insertion never does.
#[derive(Debug, Default, Clone, PartialEq, Eq)]
pub(crate) struct Counters {
    hits: u64,
    misses: u64,
    collisions: u64,
    chain_hits: u64,
    probe_hits: u64,
    chain_misses: u64,
    probe_misses: u64,
}

impl Counters {
    /// Record a lookup that found the key through `tier`
    pub(crate) fn record_hit(&mut self, tier: Tier) {
        self.hits += 1;
        match tier {
            Tier::Chain => self.chain_hits += 1,
            Tier::Quadratic => {
                self.probe_hits += 1;
                self.chain_misses += 1;
            }
            Tier::DoubleHash => {
                self.probe_hits += 1;
                self.chain_misses += 1;
                self.probe_misses += 1;
            }
        }
    }

    /// Record a lookup that exhausted every tier
    pub(crate) fn record_miss(&mut self) {
        self.misses += 1;
        self.chain_misses += 1;
        self.probe_misses += 1;
    }

    /// Record buckets visited while placing a new key
    pub(crate) fn record_collisions(&mut self, count: u64) {
        self.collisions += count;
    }
}

/// Read-only snapshot of a grid's statistics
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Statistics {
    /// Lookups that found the key
    pub hits: u64,
    /// Lookups that did not find the key (each stored it)
    pub misses: u64,
    /// Buckets visited while placing new keys
    pub collisions: u64,
    /// `entries / (rows * cols)` at snapshot time
    pub load_factor: f64,
    /// Hits found in the primary chain
    pub chain_hits: u64,
    /// Hits found through quadratic probing or double hashing
    pub probe_hits: u64,
    /// Lookups not satisfied by the primary chain
    pub chain_misses: u64,
    /// Lookups not satisfied by the primary chain or quadratic probing
    pub probe_misses: u64,
    /// Keys stored
    pub entries: usize,
    /// Current row count
    pub rows: usize,
    /// Current column count
    pub cols: usize,
}

impl Statistics {
    pub(crate) fn from_counters(
        counters: &Counters,
        entries: usize,
        rows: usize,
        cols: usize,
    ) -> Self {
        Self {
            hits: counters.hits,
            misses: counters.misses,
            collisions: counters.collisions,
            load_factor: entries as f64 / (rows * cols) as f64,
            chain_hits: counters.chain_hits,
            probe_hits: counters.probe_hits,
            chain_misses: counters.chain_misses,
            probe_misses: counters.probe_misses,
            entries,
            rows,
            cols,
        }
    }

    /// Total counted requests
    pub fn requests(&self) -> u64 {
        self.hits + self.misses
    }

    /// Calculate hit ratio (0.0 to 1.0)
    pub fn hit_ratio(&self) -> f64 {
        let total = self.requests();
        if total == 0 {
            0.0
        } else {
            self.hits as f64 / total as f64
        }
    }
}

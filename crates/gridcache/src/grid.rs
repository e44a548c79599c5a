//! GridCache: chained hash grid with two probing fallbacks
//!
//! Lookup order for a key:
//! 1. its primary bucket's chain
//! 2. `max_probe` quadratic probes off the primary bucket
//! 3. `max_probe` double-hash probes off the primary bucket
//!
//! Placement walks the same order looking for an empty bucket and falls back
//! to chaining onto the primary bucket, so an insert never fails.

use tracing::{debug, warn};

use crate::config::GridConfig;
use crate::error::Result;
use crate::position::{self, Dimensions, Position, Tier};
use crate::stats::{Counters, Statistics};

/// Outcome of a single insert
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Access {
    /// Key was already stored; found through this tier
    Hit(Tier),
    /// Key was stored; `collisions` buckets were visited to place it
    Miss {
        /// Buckets visited beyond an occupied primary bucket
        collisions: u64,
    },
}

impl Access {
    /// Whether the key was already present
    pub fn is_hit(&self) -> bool {
        matches!(self, Access::Hit(_))
    }
}

/// Fixed-shape grid of chains, grown by doubling both axes
pub struct GridCache {
    /// Current dimensions
    dims: Dimensions,

    /// Row-major chains, `rows * cols` long
    buckets: Vec<Vec<i32>>,

    /// Keys stored across all chains
    entries: usize,

    /// Attempts per probing tier
    max_probe: usize,

    /// Growth trigger
    threshold: f64,

    /// Doubling rounds allowed per growth pass
    max_growth_rounds: usize,

    /// Doubling rounds run over the grid's lifetime
    growth_passes: u64,

    /// Request statistics
    counters: Counters,
}

impl GridCache {
    /// Create a new grid from a validated configuration
    ///
    /// # Arguments
    /// * `config` - Initial dimensions, probe limit and growth policy
    ///
    /// # Returns
    /// * `Result<GridCache>` - Empty grid, or the configuration error
    pub fn new(config: GridConfig) -> Result<Self> {
        config.validate()?;
        Ok(Self::from_valid(config))
    }

    fn from_valid(config: GridConfig) -> Self {
        let dims = Dimensions {
            rows: config.rows,
            cols: config.cols,
        };
        Self {
            dims,
            buckets: vec![Vec::new(); dims.bucket_count()],
            entries: 0,
            max_probe: config.max_probe,
            threshold: config.load_factor_threshold,
            max_growth_rounds: config.max_growth_rounds,
            growth_passes: 0,
            counters: Counters::default(),
        }
    }

    /// Process one request, counting it in the statistics
    pub fn insert(&mut self, key: i32) -> Access {
        self.insert_with(key, true)
    }

    /// Process one request
    ///
    /// A key already present is reported as a hit and never stored twice. A
    /// new key is placed and, if that pushes the load factor over the
    /// threshold, the grid grows before this call returns.
    ///
    /// # Arguments
    /// * `key` - Requested key
    /// * `count_statistics` - Whether hit/miss/collision counters see this request
    pub fn insert_with(&mut self, key: i32, count_statistics: bool) -> Access {
        let access = self.admit(key, count_statistics);

        if !access.is_hit() && self.load_factor() > self.threshold {
            self.grow();
        }

        access
    }

    /// Feed an ordered request stream through counted inserts
    pub fn simulate<I>(&mut self, keys: I)
    where
        I: IntoIterator<Item = i32>,
    {
        for key in keys {
            self.insert(key);
        }
    }

    /// Check whether a key is stored (no side effects)
    pub fn search(&self, key: i32) -> bool {
        self.lookup(key).is_some()
    }

    /// Take a statistics snapshot
    pub fn snapshot(&self) -> Statistics {
        Statistics::from_counters(&self.counters, self.entries, self.dims.rows, self.dims.cols)
    }

    /// Current row count
    pub fn rows(&self) -> usize {
        self.dims.rows
    }

    /// Current column count
    pub fn cols(&self) -> usize {
        self.dims.cols
    }

    /// Current number of buckets
    pub fn bucket_count(&self) -> usize {
        self.dims.bucket_count()
    }

    /// Number of stored keys
    pub fn len(&self) -> usize {
        self.entries
    }

    /// Check if no key is stored
    pub fn is_empty(&self) -> bool {
        self.entries == 0
    }

    /// `entries / buckets`
    pub fn load_factor(&self) -> f64 {
        self.entries as f64 / self.dims.bucket_count() as f64
    }

    /// Doubling rounds run so far
    pub fn growth_passes(&self) -> u64 {
        self.growth_passes
    }

    /// Length of the chain at `(row, col)`, or `None` when out of range
    pub fn chain_len(&self, row: usize, col: usize) -> Option<usize> {
        if row >= self.dims.rows || col >= self.dims.cols {
            return None;
        }
        Some(self.chain(Position { row, col }).len())
    }

    /// Every stored key, row-major, in chain order
    pub fn keys(&self) -> impl Iterator<Item = i32> + '_ {
        self.buckets.iter().flatten().copied()
    }

    fn chain(&self, pos: Position) -> &[i32] {
        &self.buckets[self.dims.offset(pos)]
    }

    fn chain_mut(&mut self, pos: Position) -> &mut Vec<i32> {
        let offset = self.dims.offset(pos);
        &mut self.buckets[offset]
    }

    /// Find the tier a stored key is reachable through
    fn lookup(&self, key: i32) -> Option<Tier> {
        let origin = position::primary(key, self.dims);
        if self.chain(origin).contains(&key) {
            return Some(Tier::Chain);
        }

        position::alternates(key, origin, self.max_probe, self.dims)
            .find(|&(_, pos)| self.chain(pos).contains(&key))
            .map(|(tier, _)| tier)
    }

    /// Lookup then place on a miss, without triggering growth
    fn admit(&mut self, key: i32, count_statistics: bool) -> Access {
        if let Some(tier) = self.lookup(key) {
            if count_statistics {
                self.counters.record_hit(tier);
            }
            return Access::Hit(tier);
        }

        let collisions = self.place(key);
        if count_statistics {
            self.counters.record_miss();
            self.counters.record_collisions(collisions);
        }

        Access::Miss { collisions }
    }

    /// Store a key that is known to be absent; returns collisions charged
    fn place(&mut self, key: i32) -> u64 {
        self.entries += 1;

        let origin = position::primary(key, self.dims);
        if self.chain(origin).is_empty() {
            self.chain_mut(origin).push(key);
            return 0;
        }

        let mut collisions = 0;
        for (_, pos) in position::alternates(key, origin, self.max_probe, self.dims) {
            collisions += 1;
            if self.chain(pos).is_empty() {
                self.chain_mut(pos).push(key);
                return collisions;
            }
        }

        // Chaining fallback
        self.chain_mut(origin).push(key);
        collisions + 1
    }

    /// Double both axes and re-place every key until the load factor is back
    /// under the threshold, or the round cap is hit.
    fn grow(&mut self) {
        let before = self.dims;
        let keys: Vec<i32> = self.keys().collect();

        let mut rounds = 0;
        loop {
            self.dims = self.dims.doubled();
            self.buckets = vec![Vec::new(); self.dims.bucket_count()];
            self.entries = 0;

            for &key in &keys {
                self.admit(key, false);
            }

            rounds += 1;
            self.growth_passes += 1;

            if self.load_factor() <= self.threshold {
                break;
            }
            if rounds >= self.max_growth_rounds {
                warn!(
                    rows = self.dims.rows,
                    cols = self.dims.cols,
                    load_factor = self.load_factor(),
                    threshold = self.threshold,
                    "growth round cap reached, keeping elevated load factor"
                );
                break;
            }
        }

        debug!(
            from_rows = before.rows,
            from_cols = before.cols,
            rows = self.dims.rows,
            cols = self.dims.cols,
            keys = keys.len(),
            rounds,
            load_factor = self.load_factor(),
            "grid grown"
        );
    }
}

impl Default for GridCache {
    fn default() -> Self {
        Self::from_valid(GridConfig::default())
    }
}

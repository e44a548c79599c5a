//! Grid construction parameters

use crate::error::{Error, Result};

/// Default initial row count
pub const DEFAULT_ROWS: usize = 8;

/// Default initial column count
pub const DEFAULT_COLS: usize = 8;

/// Default number of attempts per probing tier
pub const DEFAULT_MAX_PROBE: usize = 5;

/// Default load factor that triggers a growth pass
pub const DEFAULT_LOAD_FACTOR_THRESHOLD: f64 = 0.75;

/// Default cap on doubling rounds within a single growth pass
///
/// The doubling loop always terminates: the key count is fixed during a pass
/// and each round quarters the load factor. The cap only bounds how many
/// buckets a very small threshold may allocate; 8 rounds cover a 65536x
/// load factor reduction.
pub const DEFAULT_MAX_GROWTH_ROUNDS: usize = 8;

/// Configuration for a [`GridCache`](crate::GridCache)
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct GridConfig {
    /// Initial number of rows
    pub rows: usize,
    /// Initial number of columns
    pub cols: usize,
    /// Attempts tried by quadratic probing, and again by double hashing
    pub max_probe: usize,
    /// Growth is triggered once `entries / buckets` exceeds this
    pub load_factor_threshold: f64,
    /// Doubling rounds a growth pass may run before settling for an elevated
    /// load factor; bounds allocation, not termination
    pub max_growth_rounds: usize,
}

impl Default for GridConfig {
    fn default() -> Self {
        Self {
            rows: DEFAULT_ROWS,
            cols: DEFAULT_COLS,
            max_probe: DEFAULT_MAX_PROBE,
            load_factor_threshold: DEFAULT_LOAD_FACTOR_THRESHOLD,
            max_growth_rounds: DEFAULT_MAX_GROWTH_ROUNDS,
        }
    }
}

impl GridConfig {
    /// Create the default configuration
    pub fn new() -> Self {
        Self::default()
    }

    /// Set initial grid dimensions
    pub fn with_dimensions(mut self, rows: usize, cols: usize) -> Self {
        self.rows = rows;
        self.cols = cols;
        self
    }

    /// Set attempts per probing tier
    pub fn with_max_probe(mut self, max_probe: usize) -> Self {
        self.max_probe = max_probe;
        self
    }

    /// Set the load factor threshold
    pub fn with_threshold(mut self, threshold: f64) -> Self {
        self.load_factor_threshold = threshold;
        self
    }

    /// Set the growth round cap
    pub fn with_max_growth_rounds(mut self, rounds: usize) -> Self {
        self.max_growth_rounds = rounds;
        self
    }

    /// Check every parameter is usable
    pub fn validate(&self) -> Result<()> {
        if self.rows == 0 || self.cols == 0 {
            return Err(Error::InvalidDimensions {
                rows: self.rows,
                cols: self.cols,
            });
        }

        // NaN fails both comparisons
        let t = self.load_factor_threshold;
        if !(t > 0.0 && t <= 1.0) {
            return Err(Error::InvalidThreshold(t));
        }

        if self.max_growth_rounds == 0 {
            return Err(Error::InvalidGrowthRounds);
        }

        Ok(())
    }
}

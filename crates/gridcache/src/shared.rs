//! SharedGridCache: lock-wrapped grid for multi-threaded callers

use std::sync::Arc;
use parking_lot::RwLock;

use crate::config::GridConfig;
use crate::error::Result;
use crate::grid::{Access, GridCache};
use crate::stats::Statistics;

/// Cloneable handle treating the whole grid as one exclusive resource
///
/// Inserts hold the write lock for their full duration, growth pass included,
/// so readers never observe a partially grown grid.
#[derive(Clone)]
pub struct SharedGridCache {
    grid: Arc<RwLock<GridCache>>,
}

impl SharedGridCache {
    /// Create a shared grid from a configuration
    pub fn new(config: GridConfig) -> Result<Self> {
        Ok(Self::from_grid(GridCache::new(config)?))
    }

    /// Wrap an existing grid
    pub fn from_grid(grid: GridCache) -> Self {
        Self {
            grid: Arc::new(RwLock::new(grid)),
        }
    }

    /// Process one counted request
    pub fn insert(&self, key: i32) -> Access {
        self.grid.write().insert(key)
    }

    /// Process one request, optionally uncounted
    pub fn insert_with(&self, key: i32, count_statistics: bool) -> Access {
        self.grid.write().insert_with(key, count_statistics)
    }

    /// Check whether a key is stored
    pub fn search(&self, key: i32) -> bool {
        self.grid.read().search(key)
    }

    /// Take a statistics snapshot
    pub fn snapshot(&self) -> Statistics {
        self.grid.read().snapshot()
    }

    /// Unwrap the grid once every other handle is gone
    pub fn into_inner(self) -> Option<GridCache> {
        Arc::try_unwrap(self.grid).ok().map(RwLock::into_inner)
    }
}

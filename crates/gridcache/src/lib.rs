//! # gridcache
//!
//! Cache trace simulator built on a two-dimensional chained hash grid.
//!
//! ## Architecture
//! - **Grid**: `rows x cols` buckets, each an unbounded chain of integer keys
//! - **Collision resolution**: primary chain, then quadratic probing, then
//!   double hashing, then chaining onto the primary bucket
//! - **Growth**: both axes double and every key is re-placed once the load
//!   factor passes the configured threshold
//! - **Statistics**: hits/misses/collisions with a per-tier breakdown
//!
//! Only keys are tracked: this is a membership simulation, nothing is evicted.

#![warn(missing_docs)]

pub mod config;
mod error;
mod grid;
pub mod position;
mod shared;
mod stats;

pub use config::GridConfig;
pub use error::{Error, Result};
pub use grid::{Access, GridCache};
pub use position::{Dimensions, Position, Tier};
pub use shared::SharedGridCache;
pub use stats::Statistics;

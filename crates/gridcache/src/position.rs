//! Bucket addressing: primary hash, quadratic probe and double hash
//!
//! All functions are pure. Dimensions are passed in explicitly because every
//! position changes when the grid grows.

/// Multiplier for the 32-bit avalanche mixer
const MIX_MULTIPLIER: i32 = 0x045d_9f3b;

/// Grid dimensions used to reduce a hash to a bucket
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Dimensions {
    pub(crate) rows: usize,
    pub(crate) cols: usize,
}

impl Dimensions {
    /// Create dimensions, `None` if either axis is zero
    pub fn new(rows: usize, cols: usize) -> Option<Self> {
        if rows == 0 || cols == 0 {
            return None;
        }
        Some(Self { rows, cols })
    }

    /// Row count
    pub fn rows(&self) -> usize {
        self.rows
    }

    /// Column count
    pub fn cols(&self) -> usize {
        self.cols
    }

    /// Total number of addressable buckets
    pub fn bucket_count(&self) -> usize {
        self.rows * self.cols
    }

    /// Both axes doubled
    pub fn doubled(&self) -> Self {
        Self {
            rows: self.rows * 2,
            cols: self.cols * 2,
        }
    }

    /// Row-major offset of a position
    pub(crate) fn offset(&self, pos: Position) -> usize {
        pos.row * self.cols + pos.col
    }
}

/// A `(row, col)` bucket coordinate
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Position {
    /// Row index
    pub row: usize,
    /// Column index
    pub col: usize,
}

/// Which lookup tier a bucket was reached through
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Tier {
    /// The key's primary bucket
    Chain,
    /// A quadratic probe off the primary bucket
    Quadratic,
    /// A double-hash stride off the primary bucket
    DoubleHash,
}

/// Murmur-style multiply/xor/shift finalizer on signed 32-bit keys
///
/// Shifts are arithmetic and multiplies wrap.
pub fn mix(key: i32) -> i32 {
    let mut x = key;
    x = ((x >> 16) ^ x).wrapping_mul(MIX_MULTIPLIER);
    x = ((x >> 16) ^ x).wrapping_mul(MIX_MULTIPLIER);
    (x >> 16) ^ x
}

/// Primary bucket of `key`
///
/// Truncating `%` and `/` on the signed mix, then absolute value.
pub fn primary(key: i32, dims: Dimensions) -> Position {
    let mixed = i64::from(mix(key));
    let rows = dims.rows as i64;
    let cols = dims.cols as i64;
    Position {
        row: (mixed % rows).unsigned_abs() as usize,
        col: ((mixed / rows) % cols).unsigned_abs() as usize,
    }
}

/// Quadratic probe `attempt` (1-based) off `origin`
pub fn quadratic(origin: Position, attempt: usize, dims: Dimensions) -> Position {
    let offset = attempt * attempt;
    Position {
        row: (origin.row + offset) % dims.rows,
        col: (origin.col + offset) % dims.cols,
    }
}

/// Double-hash probe `attempt` (1-based) for `key` off its primary bucket `origin`
///
/// The stride `1 + key mod (cols - 1)` is always in `1..cols`; a single-column
/// grid uses a stride of one.
pub fn double_hash(key: i32, origin: Position, attempt: usize, dims: Dimensions) -> Position {
    let key = i64::from(key);
    let rows = dims.rows as i64;
    let cols = dims.cols as i64;

    let step = if cols > 1 { 1 + key.rem_euclid(cols - 1) } else { 1 };
    let stride = attempt as i64 * step;

    Position {
        row: (origin.row as i64 + stride).rem_euclid(rows) as usize,
        col: (key / rows + stride).rem_euclid(cols) as usize,
    }
}

/// Alternate buckets for `key` in lookup order: every quadratic probe, then
/// every double-hash probe, `max_probe` of each.
pub fn alternates(
    key: i32,
    origin: Position,
    max_probe: usize,
    dims: Dimensions,
) -> impl Iterator<Item = (Tier, Position)> {
    let quad = (1..=max_probe).map(move |n| (Tier::Quadratic, quadratic(origin, n, dims)));
    let double = (1..=max_probe).map(move |n| {
        (Tier::DoubleHash, double_hash(key, origin, n, dims))
    });
    quad.chain(double)
}

//! Error types for gridcache

use std::fmt;

/// Result type alias for gridcache operations
pub type Result<T> = std::result::Result<T, Error>;

/// Errors raised while building a grid
///
/// A constructed [`GridCache`](crate::GridCache) never fails: every key is
/// accepted through the chaining fallback. Only configuration is checked.
#[derive(Debug, Clone, PartialEq)]
pub enum Error {
    /// Grid needs at least one row and one column
    InvalidDimensions {
        /// Requested row count
        rows: usize,
        /// Requested column count
        cols: usize,
    },

    /// Load factor threshold outside (0, 1]
    InvalidThreshold(f64),

    /// Growth pass must be allowed at least one doubling round
    InvalidGrowthRounds,
}

impl fmt::Display for Error {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Error::InvalidDimensions { rows, cols } => {
                write!(f, "Invalid grid dimensions: {}x{} (both must be > 0)", rows, cols)
            }
            Error::InvalidThreshold(t) => {
                write!(f, "Invalid load factor threshold: {} (must be in (0, 1])", t)
            }
            Error::InvalidGrowthRounds => write!(f, "Max growth rounds must be at least 1"),
        }
    }
}

impl std::error::Error for Error {}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_display_dimensions() {
        let err = Error::InvalidDimensions { rows: 0, cols: 4 };
        assert_eq!(err.to_string(), "Invalid grid dimensions: 0x4 (both must be > 0)");
    }

    #[test]
    fn test_display_threshold() {
        let err = Error::InvalidThreshold(1.5);
        assert!(err.to_string().contains("1.5"));
    }
}

//! Random trace generation

use std::io::Write;

use anyhow::{ensure, Result};
use rand::Rng;

/// Separator written between generated keys
pub const KEY_SEPARATOR: &str = " , ";

/// Write `count` keys drawn uniformly from `0..max_key`
pub fn write_keys<W, R>(out: &mut W, rng: &mut R, count: usize, max_key: i32) -> Result<()>
where
    W: Write,
    R: Rng,
{
    ensure!(max_key > 0, "max key must be positive, got {}", max_key);

    for i in 0..count {
        if i > 0 {
            out.write_all(KEY_SEPARATOR.as_bytes())?;
        }
        write!(out, "{}", rng.random_range(0..max_key))?;
    }

    Ok(())
}

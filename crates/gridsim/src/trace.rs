//! Request trace parser using nom
//!
//! Trace format: signed 32-bit decimal keys separated by any run of ASCII
//! whitespace and/or commas.
//! ```text
//! 12 , 7 , 12
//! 99,-3
//! ```

use std::fs::File;
use std::path::Path;

use ahash::AHashSet;
use anyhow::{bail, Context, Result};
use memmap2::Mmap;
use nom::{
    bytes::complete::take_while1,
    character::complete::i32 as signed_key,
    combinator::{all_consuming, opt, value},
    multi::separated_list0,
    sequence::delimited,
    IResult,
};

fn is_separator(c: u8) -> bool {
    c.is_ascii_whitespace() || c == b','
}

fn separator(input: &[u8]) -> IResult<&[u8], ()> {
    value((), take_while1(is_separator))(input)
}

fn key_list(input: &[u8]) -> IResult<&[u8], Vec<i32>> {
    delimited(
        opt(separator),
        separated_list0(separator, signed_key),
        opt(separator),
    )(input)
}

/// Parse every key in `input`
///
/// Fails on the first token that is not a 32-bit signed integer, naming the
/// token and its byte offset.
pub fn parse_keys(input: &[u8]) -> Result<Vec<i32>> {
    match all_consuming(key_list)(input) {
        Ok((_, keys)) => Ok(keys),
        Err(nom::Err::Error(e)) | Err(nom::Err::Failure(e)) => {
            let rest = e.input;
            let skip = rest.iter().take_while(|&&c| is_separator(c)).count();
            let token: Vec<u8> = rest[skip..]
                .iter()
                .copied()
                .take_while(|&c| !is_separator(c))
                .collect();
            bail!(
                "invalid key {:?} at byte {}",
                String::from_utf8_lossy(&token),
                input.len() - rest.len() + skip
            )
        }
        Err(nom::Err::Incomplete(_)) => bail!("truncated trace"),
    }
}

/// Load a trace file
///
/// # Arguments
/// * `path` - Trace file path
///
/// # Returns
/// * `Result<Vec<i32>>` - Keys in file order; an empty file or one with no
///   keys is an error
pub fn load_file(path: &Path) -> Result<Vec<i32>> {
    let file = File::open(path)
        .with_context(|| format!("unable to open file '{}'", path.display()))?;

    let len = file
        .metadata()
        .with_context(|| format!("unable to stat file '{}'", path.display()))?
        .len();
    if len == 0 {
        bail!("input file '{}' is empty", path.display());
    }

    // SAFETY: the mapping is read-only and dropped before returning; the trace
    // must not be truncated by another process while it is parsed.
    let mmap = unsafe { Mmap::map(&file) }
        .with_context(|| format!("unable to read file '{}'", path.display()))?;

    let keys = parse_keys(&mmap)
        .with_context(|| format!("malformed trace in '{}'", path.display()))?;
    if keys.is_empty() {
        bail!("no valid keys found in '{}'", path.display());
    }

    Ok(keys)
}

/// Parse keys given directly on the command line
///
/// Each argument may itself hold several separated keys.
pub fn from_args<S: AsRef<str>>(args: &[S]) -> Result<Vec<i32>> {
    let mut keys = Vec::with_capacity(args.len());
    for arg in args {
        let arg = arg.as_ref();
        let parsed =
            parse_keys(arg.as_bytes()).with_context(|| format!("invalid key argument '{}'", arg))?;
        keys.extend(parsed);
    }

    if keys.is_empty() {
        bail!("no valid keys given");
    }

    Ok(keys)
}

/// Shape of a loaded trace
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TraceSummary {
    /// Total requests
    pub keys: usize,
    /// Distinct keys requested
    pub distinct: usize,
}

impl TraceSummary {
    /// Summarize a trace
    pub fn of(keys: &[i32]) -> Self {
        let distinct: AHashSet<i32> = keys.iter().copied().collect();
        Self {
            keys: keys.len(),
            distinct: distinct.len(),
        }
    }
}

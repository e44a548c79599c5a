//! Random trace generator for gridsim

use std::fs::File;
use std::io::{BufWriter, Write};
use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::Parser;
use gridsim::generate::write_keys;
use rand::rngs::StdRng;
use rand::SeedableRng;
use tracing::info;

#[derive(Parser, Debug)]
#[command(author, version, about, long_about = None)]
struct Args {
    /// Number of keys to generate
    #[arg(short = 'n', long, default_value_t = 100_000)]
    count: usize,

    /// Keys are drawn from 0..max-key
    #[arg(short, long, default_value_t = 1_000_000)]
    max_key: i32,

    /// Output file
    #[arg(short, long, default_value = "input_keys.txt")]
    output: PathBuf,

    /// Seed for a reproducible trace
    #[arg(short, long)]
    seed: Option<u64>,
}

fn main() -> Result<()> {
    gridsim::init_tracing();

    let args = Args::parse();

    let mut rng = match args.seed {
        Some(seed) => StdRng::seed_from_u64(seed),
        None => StdRng::from_os_rng(),
    };
    info!(count = args.count, max_key = args.max_key, seed = ?args.seed, "generating keys");

    let file = File::create(&args.output)
        .with_context(|| format!("could not open '{}' for writing", args.output.display()))?;
    let mut out = BufWriter::new(file);

    write_keys(&mut out, &mut rng, args.count, args.max_key)?;
    out.flush()?;

    println!("Generated {} random keys in {}", args.count, args.output.display());

    Ok(())
}

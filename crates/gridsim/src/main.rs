//! GridCache simulator - replays a request trace and prints statistics as JSON

use std::path::Path;

use anyhow::Result;
use clap::Parser;
use gridcache::config::{
    DEFAULT_COLS, DEFAULT_LOAD_FACTOR_THRESHOLD, DEFAULT_MAX_GROWTH_ROUNDS, DEFAULT_MAX_PROBE,
    DEFAULT_ROWS,
};
use gridcache::{GridCache, GridConfig};
use gridsim::report::Report;
use gridsim::trace::{self, TraceSummary};
use tracing::info;

#[derive(Parser, Debug)]
#[command(author, version, about, long_about = None)]
struct Args {
    /// Trace file path, or two or more keys
    #[arg(allow_negative_numbers = true)]
    inputs: Vec<String>,

    /// Initial row count
    #[arg(short, long, default_value_t = DEFAULT_ROWS)]
    rows: usize,

    /// Initial column count
    #[arg(short, long, default_value_t = DEFAULT_COLS)]
    cols: usize,

    /// Attempts per probing tier
    #[arg(short = 'p', long, default_value_t = DEFAULT_MAX_PROBE)]
    max_probe: usize,

    /// Load factor that triggers growth
    #[arg(short, long, default_value_t = DEFAULT_LOAD_FACTOR_THRESHOLD)]
    threshold: f64,

    /// Doubling rounds allowed per growth pass
    #[arg(long, default_value_t = DEFAULT_MAX_GROWTH_ROUNDS)]
    max_growth_rounds: usize,

    /// Print the report on a single line
    #[arg(long)]
    compact: bool,
}

fn main() -> Result<()> {
    gridsim::init_tracing();

    let args = Args::parse();

    if args.inputs.is_empty() {
        eprintln!("Usage: gridsim <input_file> or provide keys as arguments.");
        eprintln!("Run 'gridsim --help' for options.");
        std::process::exit(1);
    }

    let config = GridConfig::new()
        .with_dimensions(args.rows, args.cols)
        .with_max_probe(args.max_probe)
        .with_threshold(args.threshold)
        .with_max_growth_rounds(args.max_growth_rounds);
    let mut grid = GridCache::new(config)?;

    let keys = match args.inputs.as_slice() {
        [path] => trace::load_file(Path::new(path))?,
        many => trace::from_args(many)?,
    };

    let summary = TraceSummary::of(&keys);
    info!(keys = summary.keys, distinct = summary.distinct, "trace loaded");

    grid.simulate(keys.iter().copied());

    let stats = grid.snapshot();
    info!(
        rows = stats.rows,
        cols = stats.cols,
        entries = stats.entries,
        growth_passes = grid.growth_passes(),
        hit_ratio = stats.hit_ratio(),
        "simulation finished"
    );

    println!("{}", Report::new(&stats)?.to_json(args.compact)?);

    Ok(())
}

//! JSON rendering of a statistics snapshot

use anyhow::Result;
use gridcache::Statistics;
use serde::Serialize;
use serde_json::value::RawValue;

/// Fixed-key report, fields serialized in declaration order
#[derive(Debug, Serialize)]
pub struct Report {
    hits: u64,
    misses: u64,
    collisions: u64,
    /// Pre-rendered with two decimals
    load_factor: Box<RawValue>,
    probe_hits: u64,
    chain_hits: u64,
    probe_misses: u64,
    chain_misses: u64,
}

impl Report {
    /// Build a report from a snapshot
    pub fn new(stats: &Statistics) -> Result<Self> {
        let load_factor = RawValue::from_string(format!("{:.2}", stats.load_factor))?;

        Ok(Self {
            hits: stats.hits,
            misses: stats.misses,
            collisions: stats.collisions,
            load_factor,
            probe_hits: stats.probe_hits,
            chain_hits: stats.chain_hits,
            probe_misses: stats.probe_misses,
            chain_misses: stats.chain_misses,
        })
    }

    /// Render as pretty-printed (two-space indent) or single-line JSON
    pub fn to_json(&self, compact: bool) -> Result<String> {
        let json = if compact {
            serde_json::to_string(self)?
        } else {
            serde_json::to_string_pretty(self)?
        };
        Ok(json)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use gridcache::GridCache;

    fn sample() -> Statistics {
        let mut grid = GridCache::default();
        grid.simulate([3, 4, 5, 3, 6, 7]);
        grid.snapshot()
    }

    #[test]
    fn test_compact_layout() {
        let json = Report::new(&sample()).unwrap().to_json(true).unwrap();
        // 5 keys on an 8x8 grid: 5 / 64 = 0.078125
        assert!(json.starts_with("{\"hits\":1,\"misses\":5,\"collisions\":"));
        assert!(json.contains("\"load_factor\":0.08,\"probe_hits\":0,\"chain_hits\":1,"));
        assert!(json.ends_with("\"probe_misses\":5,\"chain_misses\":5}"));
    }

    #[test]
    fn test_pretty_layout() {
        let json = Report::new(&sample()).unwrap().to_json(false).unwrap();
        let lines: Vec<&str> = json.lines().collect();

        assert_eq!(lines.len(), 10);
        assert_eq!(lines[0], "{");
        assert_eq!(lines[1], "  \"hits\": 1,");
        assert_eq!(lines[4], "  \"load_factor\": 0.08,");
        assert_eq!(lines[9], "}");
    }

    #[test]
    fn test_two_decimals_kept() {
        let mut grid = GridCache::new(
            gridcache::GridConfig::new()
                .with_dimensions(10, 1)
                .with_threshold(1.0),
        )
        .unwrap();
        grid.simulate(0..7);

        let json = Report::new(&grid.snapshot()).unwrap().to_json(true).unwrap();
        assert!(json.contains("\"load_factor\":0.70,"), "{}", json);
    }

    #[test]
    fn test_parses_back() {
        let json = Report::new(&sample()).unwrap().to_json(false).unwrap();
        let value: serde_json::Value = serde_json::from_str(&json).unwrap();
        assert_eq!(value["misses"], 5);
        assert_eq!(value["load_factor"].as_f64(), Some(0.08));
    }
}

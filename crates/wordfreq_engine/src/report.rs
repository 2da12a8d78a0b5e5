use std::fmt;
use std::time::Duration;

use wordfreq_core::{ChainStats, HashKind};

/// Cardinality produced by a phase and the time the phase took.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PhaseTiming {
    pub count: usize,
    pub elapsed: Duration,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CountingReport {
    pub read: PhaseTiming,
    pub populate: PhaseTiming,
    pub probe: String,
    pub probe_count: Option<usize>,
    pub lookup_latency: Duration,
    /// Highest-count word, not part of the printed report.
    pub most_frequent: Option<(String, usize)>,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PresenceReport {
    pub read: PhaseTiming,
    pub populate: PhaseTiming,
}

#[derive(Debug, Clone, PartialEq)]
pub struct HashStatsRow {
    pub kind: HashKind,
    pub stats: ChainStats,
    pub elapsed: Duration,
}

#[derive(Debug, Clone, PartialEq)]
pub struct HashStatsReport {
    pub read: PhaseTiming,
    pub rows: Vec<HashStatsRow>,
}

fn fractional_millis(duration: Duration) -> f64 {
    duration.as_secs_f64() * 1000.0
}

fn write_read_line(f: &mut fmt::Formatter<'_>, read: &PhaseTiming) -> fmt::Result {
    writeln!(f, "Read {} words in {}ms", read.count, read.elapsed.as_millis())
}

fn write_populate_line(f: &mut fmt::Formatter<'_>, populate: &PhaseTiming) -> fmt::Result {
    writeln!(
        f,
        "Hashed {} words in {}ms",
        populate.count,
        populate.elapsed.as_millis()
    )
}

impl fmt::Display for CountingReport {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write_read_line(f, &self.read)?;
        write_populate_line(f, &self.populate)?;
        let found = match self.probe_count {
            Some(count) => count.to_string(),
            None => "absent".to_string(),
        };
        write!(
            f,
            "checking for existence of '{}' (found:{}), latency={}ms",
            self.probe,
            found,
            fractional_millis(self.lookup_latency)
        )
    }
}

impl fmt::Display for PresenceReport {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write_read_line(f, &self.read)?;
        write!(
            f,
            "Hashed {} words in {}ms",
            self.populate.count,
            self.populate.elapsed.as_millis()
        )
    }
}

impl fmt::Display for HashStatsRow {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{}: N={}, entries={}, max_chain={}, F={:.3}, {}ms",
            self.kind,
            self.stats.occupied,
            self.stats.entries,
            self.stats.max_chain,
            self.stats.mean_chain(),
            fractional_millis(self.elapsed)
        )
    }
}

impl fmt::Display for HashStatsReport {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write_read_line(f, &self.read)?;
        for (i, row) in self.rows.iter().enumerate() {
            if i > 0 {
                writeln!(f)?;
            }
            write!(f, "{row}")?;
        }
        Ok(())
    }
}

use std::io::Write;

use anyhow::Context;
use bench_logging::bench_error;
use wordfreq_engine::{run_counting, run_hash_stats, run_presence};

use super::config::BenchConfig;
use super::logging;

/// Which benchmark a binary runs.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Variant {
    /// Count occurrences and probe one word.
    Counting,
    /// Record distinct words only.
    Presence,
    /// Compare bucket distribution of the classic string hashes.
    HashStats,
}

/// Run `variant` against `config`, writing the report to `out`.
pub fn run(variant: Variant, config: &BenchConfig, out: &mut impl Write) -> anyhow::Result<()> {
    let path = config.input.as_path();
    let report = match variant {
        Variant::Counting => run_counting(path, &config.probe).map(|r| r.to_string()),
        Variant::Presence => run_presence(path).map(|r| r.to_string()),
        Variant::HashStats => run_hash_stats(path).map(|r| r.to_string()),
    };
    let report = report
        .inspect_err(|err| bench_error!("{variant:?} benchmark failed: {err}"))
        .with_context(|| format!("{variant:?} benchmark aborted"))?;
    writeln!(out, "{report}").context("failed to write report")?;
    Ok(())
}

/// Shared `main` body: set up logging, parse arguments, run and print to stdout.
pub fn main_with(variant: Variant) -> anyhow::Result<()> {
    logging::initialize();
    let config = BenchConfig::from_args(std::env::args().skip(1))?;
    let stdout = std::io::stdout();
    run(variant, &config, &mut stdout.lock())
}

use std::hint::black_box;
use std::path::Path;

use bench_logging::{bench_debug, bench_info};
use wordfreq_core::{count_frequencies, record_presence, ChainedTable, HashKind, WordList};

use crate::load::{load_words, LoadError};
use crate::report::{CountingReport, HashStatsReport, HashStatsRow, PhaseTiming, PresenceReport};
use crate::timing::measure;

/// Token whose lookup latency the counting benchmark reports.
pub const PROBE_WORD: &str = "the";

fn timed_load(path: &Path) -> Result<(WordList, PhaseTiming), LoadError> {
    let (words, elapsed) = measure(|| load_words(path));
    let words = words?;
    let read = PhaseTiming {
        count: words.len(),
        elapsed,
    };
    bench_info!("read {} words from {} in {:?}", read.count, path.display(), elapsed);
    Ok((words, read))
}

/// Read, count and probe: the three phases run strictly one after another.
pub fn run_counting(path: &Path, probe: &str) -> Result<CountingReport, LoadError> {
    let (words, read) = timed_load(path)?;

    let (table, elapsed) = measure(|| count_frequencies(words));
    let populate = PhaseTiming {
        count: table.len(),
        elapsed,
    };
    bench_info!("counted {} distinct words in {:?}", populate.count, elapsed);

    let (probe_count, lookup_latency) = measure(|| table.lookup(black_box(probe)));
    bench_debug!("lookup of {probe:?} took {lookup_latency:?}");

    let most_frequent = table
        .most_frequent()
        .map(|(word, count)| (word.to_string(), count));
    if let Some((word, count)) = &most_frequent {
        bench_info!("most frequent word: {word}:{count}");
    }

    Ok(CountingReport {
        read,
        populate,
        probe: probe.to_string(),
        probe_count: black_box(probe_count),
        lookup_latency,
        most_frequent,
    })
}

/// Read and record distinct words without counting them.
pub fn run_presence(path: &Path) -> Result<PresenceReport, LoadError> {
    let (words, read) = timed_load(path)?;

    let (set, elapsed) = measure(|| record_presence(words));
    let populate = PhaseTiming {
        count: set.len(),
        elapsed,
    };
    bench_info!("recorded {} distinct words in {:?}", populate.count, elapsed);

    Ok(PresenceReport { read, populate })
}

/// Feed the token stream through a chained table once per hash function.
pub fn run_hash_stats(path: &Path) -> Result<HashStatsReport, LoadError> {
    let (words, read) = timed_load(path)?;

    let rows = HashKind::ALL
        .into_iter()
        .map(|kind| {
            let (table, elapsed) = measure(|| {
                let mut table = ChainedTable::new(kind);
                for word in &words {
                    table.insert(word);
                }
                table
            });
            let stats = table.stats();
            bench_debug!("{kind}: {stats:?} in {elapsed:?}");
            HashStatsRow {
                kind,
                stats,
                elapsed,
            }
        })
        .collect();

    Ok(HashStatsReport { read, rows })
}

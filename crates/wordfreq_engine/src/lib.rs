//! Wordfreq engine: file input and the timed benchmark pipelines.
mod bench;
mod load;
mod report;
mod timing;

pub use bench::{run_counting, run_hash_stats, run_presence, PROBE_WORD};
pub use load::{decode_latin1, load_words, LoadError};
pub use report::{CountingReport, HashStatsReport, HashStatsRow, PhaseTiming, PresenceReport};
pub use timing::measure;

//! Logging initialization for the wordfreq binaries.
//!
//! Logs go to stderr so stdout carries only the report lines.

use bench_logging::default_level;

pub fn initialize() {
    bench_logging::initialize_stderr(default_level());
}

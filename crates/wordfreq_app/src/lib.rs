//! Wordfreq app: argument handling, logging setup and the benchmark entry points.
pub mod platform;

pub use platform::app::{run, Variant};
pub use platform::config::{BenchConfig, DEFAULT_INPUT};

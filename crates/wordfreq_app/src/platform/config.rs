use std::path::PathBuf;

use anyhow::bail;
use wordfreq_engine::PROBE_WORD;

/// Input file used when no path is given.
pub const DEFAULT_INPUT: &str = "book.txt";

/// Run configuration; the input path is the only setting.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BenchConfig {
    /// Text file to tokenize.
    pub input: PathBuf,
    /// Word whose lookup latency is reported.
    pub probe: String,
}

impl Default for BenchConfig {
    fn default() -> Self {
        Self {
            input: PathBuf::from(DEFAULT_INPUT),
            probe: PROBE_WORD.to_string(),
        }
    }
}

impl BenchConfig {
    /// Build from command-line arguments, program name already stripped.
    pub fn from_args<I, S>(args: I) -> anyhow::Result<Self>
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        let mut args = args.into_iter().map(Into::into);
        let mut config = Self::default();
        if let Some(path) = args.next() {
            config.input = PathBuf::from(path);
        }
        let extra: Vec<String> = args.collect();
        if !extra.is_empty() {
            bail!("unexpected arguments: {}; usage: [PATH]", extra.join(" "));
        }
        Ok(config)
    }
}

use std::fs;
use std::io;
use std::path::{Path, PathBuf};

use bench_logging::bench_debug;
use thiserror::Error;
use wordfreq_core::{tokenize, WordList};

#[derive(Debug, Error)]
pub enum LoadError {
    #[error("cannot read input file {}", .path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: io::Error,
    },
}

impl LoadError {
    pub fn path(&self) -> &Path {
        match self {
            LoadError::Io { path, .. } => path,
        }
    }
}

/// Decode bytes as ISO-8859-1: every byte becomes the code point of the same value.
pub fn decode_latin1(bytes: &[u8]) -> String {
    encoding_rs::mem::decode_latin1(bytes).into_owned()
}

/// Read the whole file, decode it as Latin-1 and split it into tokens.
pub fn load_words(path: &Path) -> Result<WordList, LoadError> {
    let bytes = fs::read(path).map_err(|source| LoadError::Io {
        path: path.to_path_buf(),
        source,
    })?;
    let text = decode_latin1(&bytes);
    let words = tokenize(&text);
    bench_debug!(
        "loaded {} bytes, {} tokens from {}",
        bytes.len(),
        words.len(),
        path.display()
    );
    Ok(words)
}

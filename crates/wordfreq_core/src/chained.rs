use encoding_rs::mem::encode_latin1_lossy;

use crate::hash::HashKind;

const BUCKET_BITS: u32 = 15;
pub const BUCKET_COUNT: usize = 1 << BUCKET_BITS;

#[derive(Debug, Clone, PartialEq, Eq)]
struct Entry {
    word: String,
    freq: usize,
}

/// Fixed-size separately chained hash table used to compare hash functions.
///
/// Tokens are hashed over their Latin-1 bytes; the bucket is `hash % BUCKET_COUNT`.
#[derive(Debug, Clone)]
pub struct ChainedTable {
    kind: HashKind,
    buckets: Vec<Vec<Entry>>,
}

/// Bucket occupancy of a [`ChainedTable`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ChainStats {
    /// Buckets holding at least one word.
    pub occupied: usize,
    /// Distinct words stored.
    pub entries: usize,
    /// Length of the longest chain.
    pub max_chain: usize,
}

impl ChainStats {
    /// Average chain length over occupied buckets; 1.0 means no collisions.
    pub fn mean_chain(&self) -> f64 {
        if self.occupied == 0 {
            0.0
        } else {
            self.entries as f64 / self.occupied as f64
        }
    }
}

impl ChainedTable {
    pub fn new(kind: HashKind) -> Self {
        Self {
            kind,
            buckets: vec![Vec::new(); BUCKET_COUNT],
        }
    }

    fn bucket_of(&self, word: &str) -> usize {
        let bytes = encode_latin1_lossy(word);
        self.kind.hash(&bytes) as usize % BUCKET_COUNT
    }

    /// Count one occurrence of `word`, chaining it on first sight.
    pub fn insert(&mut self, word: &str) {
        let index = self.bucket_of(word);
        let chain = &mut self.buckets[index];
        match chain.iter_mut().find(|entry| entry.word == word) {
            Some(entry) => entry.freq += 1,
            None => chain.push(Entry {
                word: word.to_owned(),
                freq: 1,
            }),
        }
    }

    pub fn frequency(&self, word: &str) -> Option<usize> {
        self.buckets[self.bucket_of(word)]
            .iter()
            .find(|entry| entry.word == word)
            .map(|entry| entry.freq)
    }

    pub fn stats(&self) -> ChainStats {
        self.buckets
            .iter()
            .filter(|chain| !chain.is_empty())
            .fold(
                ChainStats {
                    occupied: 0,
                    entries: 0,
                    max_chain: 0,
                },
                |acc, chain| ChainStats {
                    occupied: acc.occupied + 1,
                    entries: acc.entries + chain.len(),
                    max_chain: acc.max_chain.max(chain.len()),
                },
            )
    }
}

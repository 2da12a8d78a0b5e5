use std::borrow::Borrow;
use std::collections::HashSet;
use std::hash::Hash;

/// Set of distinct tokens, without counts.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct WordSet {
    words: HashSet<String>,
}

impl WordSet {
    pub fn contains<Q>(&self, key: &Q) -> bool
    where
        String: Borrow<Q>,
        Q: Hash + Eq + ?Sized,
    {
        self.words.contains(key)
    }

    pub fn len(&self) -> usize {
        self.words.len()
    }

    pub fn is_empty(&self) -> bool {
        self.words.is_empty()
    }
}

/// Record which tokens occur, ignoring how often.
pub fn record_presence<I, S>(words: I) -> WordSet
where
    I: IntoIterator<Item = S>,
    S: Into<String>,
{
    WordSet {
        words: words.into_iter().map(Into::into).collect(),
    }
}

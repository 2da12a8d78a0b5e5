use std::borrow::Borrow;
use std::collections::HashMap;
use std::hash::Hash;
use std::num::NonZeroUsize;

/// Mapping from token to occurrence count.
///
/// Only tokens that occurred are present, and a stored count is never zero.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct FrequencyTable {
    counts: HashMap<String, NonZeroUsize>,
}

impl FrequencyTable {
    pub fn new() -> Self {
        Self::default()
    }

    /// Record one occurrence of `word`.
    pub fn add<S: Into<String>>(&mut self, word: S) {
        self.counts
            .entry(word.into())
            .and_modify(|count| *count = count.saturating_add(1))
            .or_insert(NonZeroUsize::MIN);
    }

    /// Stored count for `key`, or `None` when the token never occurred.
    pub fn lookup<Q>(&self, key: &Q) -> Option<usize>
    where
        String: Borrow<Q>,
        Q: Hash + Eq + ?Sized,
    {
        self.counts.get(key).map(|count| count.get())
    }

    /// Number of distinct tokens.
    pub fn len(&self) -> usize {
        self.counts.len()
    }

    pub fn is_empty(&self) -> bool {
        self.counts.is_empty()
    }

    /// Sum of all counts; equals the number of tokens folded in.
    pub fn total(&self) -> usize {
        self.counts.values().map(|count| count.get()).sum()
    }

    /// Word with the highest count; ties go to the lexicographically smallest word.
    pub fn most_frequent(&self) -> Option<(&str, usize)> {
        self.iter()
            .max_by(|(lw, lc), (rw, rc)| lc.cmp(rc).then_with(|| rw.cmp(lw)))
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, usize)> + '_ {
        self.counts
            .iter()
            .map(|(word, count)| (word.as_str(), count.get()))
    }
}

impl<S: Into<String>> FromIterator<S> for FrequencyTable {
    fn from_iter<I: IntoIterator<Item = S>>(iter: I) -> Self {
        let iter = iter.into_iter();
        let mut table = Self {
            counts: HashMap::with_capacity(iter.size_hint().0),
        };
        for word in iter {
            table.add(word);
        }
        table
    }
}

/// Fold a token sequence into a frequency table in a single pass.
pub fn count_frequencies<I, S>(words: I) -> FrequencyTable
where
    I: IntoIterator<Item = S>,
    S: Into<String>,
{
    words.into_iter().collect()
}

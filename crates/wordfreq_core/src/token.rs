/// Token delimiters: space, tab, line feed, vertical tab, form feed, carriage return.
///
/// Latin-1 high characters such as NBSP (`U+00A0`) and NEL (`U+0085`) are
/// token characters, not delimiters.
pub fn is_delimiter(c: char) -> bool {
    matches!(c, ' ' | '\t' | '\n' | '\u{0B}' | '\u{0C}' | '\r')
}

/// Ordered sequence of non-empty tokens in document order.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct WordList {
    words: Vec<String>,
}

impl WordList {
    pub fn len(&self) -> usize {
        self.words.len()
    }

    pub fn is_empty(&self) -> bool {
        self.words.is_empty()
    }

    pub fn iter(&self) -> std::slice::Iter<'_, String> {
        self.words.iter()
    }

    pub fn as_slice(&self) -> &[String] {
        &self.words
    }

    pub fn into_inner(self) -> Vec<String> {
        self.words
    }
}

impl IntoIterator for WordList {
    type Item = String;
    type IntoIter = std::vec::IntoIter<String>;

    fn into_iter(self) -> Self::IntoIter {
        self.words.into_iter()
    }
}

impl<'a> IntoIterator for &'a WordList {
    type Item = &'a String;
    type IntoIter = std::slice::Iter<'a, String>;

    fn into_iter(self) -> Self::IntoIter {
        self.words.iter()
    }
}

/// Split decoded text on runs of delimiters, dropping the empty pieces.
///
/// Line breaks are delimiters, so splitting the whole text at once gives the
/// same tokens as splitting line by line and concatenating.
pub fn tokenize(text: &str) -> WordList {
    let words = text
        .split(is_delimiter)
        .filter(|piece| !piece.is_empty())
        .map(str::to_owned)
        .collect();
    WordList { words }
}

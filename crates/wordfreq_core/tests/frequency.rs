use std::collections::HashSet;
use std::sync::Once;

use pretty_assertions::assert_eq;
use wordfreq_core::{count_frequencies, record_presence, tokenize, FrequencyTable};

fn init_logging() {
    static INIT: Once = Once::new();
    INIT.call_once(bench_logging::initialize_for_tests);
}

fn words(text: &str) -> Vec<String> {
    tokenize(text).into_inner()
}

#[test]
fn counts_repeated_words() {
    init_logging();
    let list = tokenize("the cat the dog");
    assert_eq!(list.as_slice(), ["the", "cat", "the", "dog"]);

    let table = count_frequencies(list);
    assert_eq!(table.len(), 3);
    assert_eq!(table.lookup("the"), Some(2));
    assert_eq!(table.lookup("cat"), Some(1));
    assert_eq!(table.lookup("dog"), Some(1));
    assert_eq!(table.lookup("fox"), None);
}

#[test]
fn whitespace_only_input_is_empty() {
    init_logging();
    let list = tokenize("  \n\t\r\n   \u{0B}\u{0C}\n");
    assert!(list.is_empty());

    let table = count_frequencies(list);
    assert!(table.is_empty());
    assert_eq!(table.lookup("the"), None);
    assert_eq!(table.lookup(""), None);
}

#[test]
fn mixed_delimiters_and_case_sensitivity() {
    init_logging();
    let list = tokenize("Word   word\tword");
    assert_eq!(list.as_slice(), ["Word", "word", "word"]);

    let table = count_frequencies(list);
    assert_eq!(table.lookup("Word"), Some(1));
    assert_eq!(table.lookup("word"), Some(2));
    assert_eq!(table.len(), 2);
}

#[test]
fn line_breaks_separate_but_never_merge() {
    let list = tokenize("alpha\nbeta\r\ngamma\n\ndelta");
    assert_eq!(list.as_slice(), ["alpha", "beta", "gamma", "delta"]);
}

#[test]
fn latin1_high_characters_are_token_characters() {
    // NBSP and NEL decode from single Latin-1 bytes and are not delimiters.
    let list = tokenize("caf\u{E9} a\u{A0}b x\u{85}y");
    assert_eq!(list.as_slice(), ["caf\u{E9}", "a\u{A0}b", "x\u{85}y"]);
}

#[test]
fn never_yields_empty_tokens() {
    for text in ["", " ", "a", " a ", "a  b", "\t\ta\n\nb\r\r", "\n"] {
        let list = tokenize(text);
        assert!(list.iter().all(|w| !w.is_empty()), "empty token from {text:?}");
    }
}

#[test]
fn totals_and_distinct_counts_match_the_word_list() {
    let text = "a b a c b a d e f a\nb c\tz z z";
    let list = words(text);
    let distinct: HashSet<&String> = list.iter().collect();
    let distinct_len = distinct.len();

    let table = count_frequencies(list.iter().cloned());
    assert_eq!(table.total(), list.len());
    assert_eq!(table.len(), distinct_len);
    assert_eq!(table.lookup("a"), Some(4));
    assert_eq!(table.lookup("z"), Some(3));
}

#[test]
fn stored_counts_are_never_zero() {
    let table = count_frequencies(words("x y x y x q"));
    assert!(table.iter().all(|(_, count)| count > 0));
}

#[test]
fn accepts_any_string_sequence() {
    let table: FrequencyTable = count_frequencies(["b", "a", "b"]);
    assert_eq!(table.lookup("b"), Some(2));

    let mut grown = FrequencyTable::new();
    grown.add("b");
    grown.add(String::from("a"));
    grown.add("b");
    assert_eq!(grown, table);
}

#[test]
fn most_frequent_word() {
    let table = count_frequencies(tokenize("the cat the dog"));
    assert_eq!(table.most_frequent(), Some(("the", 2)));

    let empty = count_frequencies(tokenize(" \n\t "));
    assert_eq!(empty.most_frequent(), None);
}

#[test]
fn most_frequent_breaks_ties_by_smallest_word() {
    let table = count_frequencies(tokenize("pear apple fig pear apple fig"));
    assert_eq!(table.most_frequent(), Some(("apple", 2)));
}

#[test]
fn presence_records_each_word_once() {
    let set = record_presence(tokenize("the cat the dog"));
    assert_eq!(set.len(), 3);
    assert!(set.contains("the"));
    assert!(set.contains("dog"));
    assert!(!set.contains("fox"));

    let empty = record_presence(tokenize(" \n "));
    assert!(empty.is_empty());
}

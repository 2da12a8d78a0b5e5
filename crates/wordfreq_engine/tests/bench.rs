use std::fs;
use std::path::PathBuf;
use std::sync::Once;

use pretty_assertions::assert_eq;
use tempfile::TempDir;
use wordfreq_core::HashKind;
use wordfreq_engine::{run_counting, run_hash_stats, run_presence, PROBE_WORD};

fn init_logging() {
    static INIT: Once = Once::new();
    INIT.call_once(bench_logging::initialize_for_tests);
}

fn book(temp: &TempDir, text: &str) -> PathBuf {
    let path = temp.path().join("book.txt");
    fs::write(&path, text).unwrap();
    path
}

#[test]
fn counting_reports_cardinalities_and_probe() {
    init_logging();
    let temp = TempDir::new().unwrap();
    let path = book(&temp, "the cat the dog\nthe end\n");

    let report = run_counting(&path, PROBE_WORD).unwrap();
    assert_eq!(report.read.count, 6);
    assert_eq!(report.populate.count, 4);
    assert_eq!(report.probe, "the");
    assert_eq!(report.probe_count, Some(3));
    assert_eq!(report.most_frequent, Some(("the".to_string(), 3)));

    let rendered = report.to_string();
    let lines: Vec<&str> = rendered.lines().collect();
    assert_eq!(lines.len(), 3);
    assert!(lines[0].starts_with("Read 6 words in "));
    assert!(lines[1].starts_with("Hashed 4 words in "));
    assert!(lines[2].starts_with("checking for existence of 'the' (found:3), latency="));
    assert!(lines[2].ends_with("ms"));
}

#[test]
fn counting_reports_absent_probe() {
    init_logging();
    let temp = TempDir::new().unwrap();
    let path = book(&temp, "Word   word\tword");

    let report = run_counting(&path, "fox").unwrap();
    assert_eq!(report.read.count, 3);
    assert_eq!(report.populate.count, 2);
    assert_eq!(report.probe_count, None);
    assert_eq!(report.most_frequent, Some(("word".to_string(), 2)));
    assert!(report.to_string().contains("(found:absent)"));
}

#[test]
fn counting_fails_on_missing_input() {
    init_logging();
    let temp = TempDir::new().unwrap();
    let result = run_counting(&temp.path().join("missing.txt"), PROBE_WORD);
    assert!(result.is_err());
}

#[test]
fn presence_reports_two_lines() {
    init_logging();
    let temp = TempDir::new().unwrap();
    let path = book(&temp, "the cat the dog");

    let report = run_presence(&path).unwrap();
    assert_eq!(report.read.count, 4);
    assert_eq!(report.populate.count, 3);
    assert_eq!(report.to_string().lines().count(), 2);
}

#[test]
fn hash_stats_cover_every_function() {
    init_logging();
    let temp = TempDir::new().unwrap();
    let path = book(&temp, "a b c a b c d e f g\nh i j");

    let report = run_hash_stats(&path).unwrap();
    assert_eq!(report.read.count, 13);
    let kinds: Vec<HashKind> = report.rows.iter().map(|row| row.kind).collect();
    assert_eq!(kinds, HashKind::ALL.to_vec());
    for row in &report.rows {
        assert_eq!(row.stats.entries, 10);
        assert!(row.stats.occupied <= row.stats.entries);
    }

    let rendered = report.to_string();
    let lines: Vec<&str> = rendered.lines().collect();
    assert_eq!(lines.len(), 1 + HashKind::ALL.len());
    assert!(lines[0].starts_with("Read 13 words in "));
    for (line, row) in lines[1..].iter().zip(&report.rows) {
        assert!(line.starts_with(&format!("{}: N=", row.kind)), "{line}");
        let timing = format!(", {}ms", row.elapsed.as_secs_f64() * 1000.0);
        assert!(line.ends_with(&timing), "{line} lacks {timing}");
    }
}

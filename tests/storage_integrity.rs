//! Document log integrity tests
//!
//! The log is append-only and checksum-verified: corruption is never
//! ignored, replay never observes an invalid record, and tombstones
//! are replayed like any other record.

use bookshelf::storage::{DocumentRecord, LogReader, LogWriter, StorageError};
use std::fs;
use tempfile::TempDir;

fn record(id: &str, body: &str) -> DocumentRecord {
    DocumentRecord::write(id, body.as_bytes().to_vec())
}

#[test]
fn corruption_causes_explicit_failure() {
    let dir = TempDir::new().unwrap();
    let path = dir.path().join("books.log");

    {
        let mut writer = LogWriter::open(&path).unwrap();
        writer.append(&record("doc1", r#"{"title":"Dune"}"#)).unwrap();
    }

    let mut contents = fs::read(&path).unwrap();
    let mid = contents.len() / 2;
    contents[mid] ^= 0xFF;
    fs::write(&path, contents).unwrap();

    let err = LogReader::replay(&path).unwrap_err();
    assert!(matches!(err, StorageError::Corrupt { .. }));
    assert!(
        err.to_string().to_lowercase().contains("checksum"),
        "error should mention checksum, got: {}",
        err
    );
}

#[test]
fn corruption_in_later_record_reports_its_offset() {
    let dir = TempDir::new().unwrap();
    let path = dir.path().join("books.log");

    let first_len = {
        let mut writer = LogWriter::open(&path).unwrap();
        writer.append(&record("doc1", r#"{"n":1}"#)).unwrap();
        let len = fs::metadata(&path).unwrap().len();
        writer.append(&record("doc2", r#"{"n":2}"#)).unwrap();
        len
    };

    // Corrupt only the second record
    let mut contents = fs::read(&path).unwrap();
    let target = first_len as usize + 8;
    contents[target] ^= 0xFF;
    fs::write(&path, contents).unwrap();

    match LogReader::replay(&path) {
        Err(StorageError::Corrupt { offset, .. }) => assert_eq!(offset, first_len),
        other => panic!("expected corrupt error, got: {:?}", other.map(|r| r.len())),
    }
}

#[test]
fn truncated_tail_is_reported_not_skipped() {
    let dir = TempDir::new().unwrap();
    let path = dir.path().join("books.log");

    {
        let mut writer = LogWriter::open(&path).unwrap();
        writer.append(&record("doc1", r#"{"n":1}"#)).unwrap();
        writer.append(&record("doc2", r#"{"n":2}"#)).unwrap();
    }

    let contents = fs::read(&path).unwrap();
    fs::write(&path, &contents[..contents.len() - 5]).unwrap();

    let err = LogReader::replay(&path).unwrap_err();
    assert!(matches!(err, StorageError::Truncated { .. }));
}

#[test]
fn replay_returns_records_in_append_order() {
    let dir = TempDir::new().unwrap();
    let path = dir.path().join("books.log");

    {
        let mut writer = LogWriter::open(&path).unwrap();
        writer.append(&record("a", r#"{"n":1}"#)).unwrap();
        writer.append(&DocumentRecord::tombstone("a")).unwrap();
        writer.append(&record("b", r#"{"n":2}"#)).unwrap();
    }

    let records = LogReader::replay(&path).unwrap();
    assert_eq!(records.len(), 3);
    assert_eq!(records[0].document_id, "a");
    assert!(!records[0].is_tombstone);
    assert!(records[1].is_tombstone);
    assert!(records[1].body.is_empty());
    assert_eq!(records[2].document_id, "b");
}

#[test]
fn appends_across_reopens_accumulate() {
    let dir = TempDir::new().unwrap();
    let path = dir.path().join("books.log");

    for n in 0..3 {
        let mut writer = LogWriter::open(&path).unwrap();
        writer
            .append(&record(&format!("doc{}", n), r#"{}"#))
            .unwrap();
    }

    let records = LogReader::replay(&path).unwrap();
    assert_eq!(records.len(), 3);
    assert_eq!(records[2].document_id, "doc2");
}

//! Store Tests
//!
//! Tests for the append-only store: write discipline, snapshot reads, and
//! duplicate resolution.

use std::fs;
use std::sync::Arc;
use std::thread;

use tempfile::TempDir;

use nimbus_ingest::record::Record;
use nimbus_ingest::store::{most_recent_by_phone, Store};

fn record(name: &str, phone: &str) -> Record {
    Record::parse(&format!("{},{}@nimbus.com,{},30", name, name.to_lowercase(), phone))
        .unwrap()
}

// =============================================================================
// Append Tests
// =============================================================================

#[test]
fn test_append_writes_canonical_line() {
    let dir = TempDir::new().unwrap();
    let store = Store::open(dir.path().join("customers.txt")).unwrap();

    let record = Record::parse("João,joao@nimbus.com,01234567891,30").unwrap();
    store.append(&record).unwrap();

    let contents = fs::read_to_string(store.path()).unwrap();
    assert_eq!(contents, "João,joao@nimbus.com,01234567891,30\n");
}

#[test]
fn test_append_has_no_deduplication() {
    let dir = TempDir::new().unwrap();
    let store = Store::open(dir.path().join("customers.txt")).unwrap();

    let rec = record("João", "01234567891");
    store.append(&rec).unwrap();
    store.append(&rec).unwrap();

    // Store growth is monotonic with accepted records
    let snapshot = store.snapshot().unwrap();
    assert_eq!(snapshot.len(), 2);
    assert_eq!(snapshot[0], snapshot[1]);
}

#[test]
fn test_append_survives_reopen() {
    let dir = TempDir::new().unwrap();
    let path = dir.path().join("customers.txt");

    {
        let store = Store::open(&path).unwrap();
        store.append(&record("João", "01234567891")).unwrap();
    }

    // A fresh handle appends, never truncates
    let store = Store::open(&path).unwrap();
    store.append(&record("Maria", "98765432100")).unwrap();

    let snapshot = store.snapshot().unwrap();
    assert_eq!(snapshot.len(), 2);
    assert_eq!(snapshot[0].name, "João");
    assert_eq!(snapshot[1].name, "Maria");
}

#[test]
fn test_concurrent_appends_stay_intact() {
    let dir = TempDir::new().unwrap();
    let store = Arc::new(Store::open(dir.path().join("customers.txt")).unwrap());

    let n = 16;
    let handles: Vec<_> = (0..n)
        .map(|i| {
            let store = Arc::clone(&store);
            thread::spawn(move || {
                let rec = record(&format!("Client{i}"), &format!("{:011}", i));
                store.append(&rec).unwrap();
            })
        })
        .collect();

    for handle in handles {
        handle.join().unwrap();
    }

    // Exactly N entries, every line parses back to an intact record
    let snapshot = store.snapshot().unwrap();
    assert_eq!(snapshot.len(), n);

    let mut phones: Vec<_> = snapshot.iter().map(|r| r.phone.clone()).collect();
    phones.sort();
    let expected: Vec<_> = (0..n).map(|i| format!("{:011}", i)).collect();
    assert_eq!(phones, expected);
}

// =============================================================================
// Snapshot Tests
// =============================================================================

#[test]
fn test_snapshot_of_fresh_store_is_empty() {
    let dir = TempDir::new().unwrap();
    let store = Store::open(dir.path().join("customers.txt")).unwrap();
    assert!(store.snapshot().unwrap().is_empty());
}

#[test]
fn test_snapshot_tolerates_blank_lines() {
    let dir = TempDir::new().unwrap();
    let path = dir.path().join("customers.txt");
    fs::write(
        &path,
        "João,joao@nimbus.com,01234567891,30\n\nMaria,maria@nimbus.com,98765432100,25\n\n\n",
    )
    .unwrap();

    let store = Store::open(&path).unwrap();
    let snapshot = store.snapshot().unwrap();
    assert_eq!(snapshot.len(), 2);
    assert_eq!(snapshot[0].name, "João");
    assert_eq!(snapshot[1].name, "Maria");
}

#[test]
fn test_snapshot_reports_corrupt_line() {
    let dir = TempDir::new().unwrap();
    let path = dir.path().join("customers.txt");
    fs::write(&path, "João,joao@nimbus.com,01234567891,30\ngarbage\n").unwrap();

    let store = Store::open(&path).unwrap();
    let err = store.snapshot().unwrap_err();
    assert!(err.to_string().contains(":2"), "{err}");
}

// =============================================================================
// Resolution Tests
// =============================================================================

#[test]
fn test_most_recent_entry_wins() {
    let dir = TempDir::new().unwrap();
    let store = Store::open(dir.path().join("customers.txt")).unwrap();

    store
        .append(&Record::parse("João,old@nimbus.com,01234567891,30").unwrap())
        .unwrap();
    store
        .append(&Record::parse("João,new@nimbus.com,01234567891,31").unwrap())
        .unwrap();

    let snapshot = store.snapshot().unwrap();
    let resolved = most_recent_by_phone(&snapshot, "01234567891").unwrap();
    assert_eq!(resolved.email, "new@nimbus.com");
    assert_eq!(resolved.age, 31);

    assert!(most_recent_by_phone(&snapshot, "00000000000").is_none());
}

use imagekeep::actions::{delete_all, delete_selected, DeleteError};
use imagekeep::catalog::ImageRecord;
use imagekeep::duplicates::find_duplicates;
use std::fs;
use std::path::Path;
use tempfile::tempdir;

fn record_with_content(dir: &Path, name: &str, content: &[u8]) -> ImageRecord {
    let path = dir.join(name);
    fs::write(&path, content).unwrap();
    ImageRecord::new(
        name.to_string(),
        path,
        content.len() as u64,
        "PNG".to_string(),
    )
}

#[test]
fn test_delete_all_removes_duplicates_and_spares_originals() {
    let dir = tempdir().unwrap();
    let a = record_with_content(dir.path(), "a.png", b"identical");
    let b = record_with_content(dir.path(), "b.png", b"identical");
    let c = record_with_content(dir.path(), "c.png", b"identical");

    let scan = find_duplicates(&[a.clone(), b.clone(), c.clone()]);
    assert_eq!(scan.pairings.len(), 2);

    let outcome = delete_all(&scan.pairings);

    assert_eq!(outcome.success_count(), 2);
    assert!(outcome.all_succeeded());
    assert_eq!(outcome.bytes_freed, 18);

    assert!(a.path.exists());
    assert!(!b.path.exists());
    assert!(!c.path.exists());

    // Nothing that appears as an original was deleted.
    for pairing in &scan.pairings {
        assert!(pairing.original.path.exists());
    }
}

#[test]
fn test_delete_selected_deletes_only_chosen_indices() {
    let dir = tempdir().unwrap();
    let a = record_with_content(dir.path(), "a.png", b"dup-one");
    let b = record_with_content(dir.path(), "b.png", b"dup-one");
    let c = record_with_content(dir.path(), "c.png", b"dup-two!");
    let d = record_with_content(dir.path(), "d.png", b"dup-two!");

    let scan = find_duplicates(&[a.clone(), b.clone(), c.clone(), d.clone()]);
    assert_eq!(scan.pairings.len(), 2);

    // 1-based selection of the second pairing only.
    let outcome = delete_selected(&scan.pairings, &[2]);

    assert_eq!(outcome.success_count(), 1);
    assert!(outcome.invalid_indices.is_empty());
    assert!(a.path.exists());
    assert!(b.path.exists());
    assert!(c.path.exists());
    assert!(!d.path.exists());
}

#[test]
fn test_out_of_range_indices_delete_nothing() {
    let dir = tempdir().unwrap();
    let a = record_with_content(dir.path(), "a.png", b"pair");
    let b = record_with_content(dir.path(), "b.png", b"pair");
    let c = record_with_content(dir.path(), "c.png", b"pear");
    let d = record_with_content(dir.path(), "d.png", b"pear");

    let scan = find_duplicates(&[a, b.clone(), c, d.clone()]);
    assert_eq!(scan.pairings.len(), 2);

    let outcome = delete_selected(&scan.pairings, &[0, 99]);

    assert_eq!(outcome.success_count(), 0);
    assert_eq!(outcome.invalid_indices, vec![0, 99]);
    assert!(b.path.exists());
    assert!(d.path.exists());
}

#[test]
fn test_invalid_index_does_not_abort_remaining_indices() {
    let dir = tempdir().unwrap();
    let a = record_with_content(dir.path(), "a.png", b"pair");
    let b = record_with_content(dir.path(), "b.png", b"pair");

    let scan = find_duplicates(&[a.clone(), b.clone()]);

    let outcome = delete_selected(&scan.pairings, &[99, 1]);

    assert_eq!(outcome.invalid_indices, vec![99]);
    assert_eq!(outcome.success_count(), 1);
    assert!(a.path.exists());
    assert!(!b.path.exists());
}

#[test]
fn test_missing_file_records_failure_and_batch_continues() {
    let dir = tempdir().unwrap();
    let a = record_with_content(dir.path(), "a.png", b"pair");
    let b = record_with_content(dir.path(), "b.png", b"pair");
    let c = record_with_content(dir.path(), "c.png", b"pear");
    let d = record_with_content(dir.path(), "d.png", b"pear");

    let scan = find_duplicates(&[a, b.clone(), c, d.clone()]);
    assert_eq!(scan.pairings.len(), 2);

    // First duplicate vanishes between scan and delete.
    fs::remove_file(&b.path).unwrap();

    let outcome = delete_all(&scan.pairings);

    assert_eq!(outcome.failure_count(), 1);
    assert!(matches!(outcome.failures[0].1, DeleteError::NotFound(_)));
    assert_eq!(outcome.success_count(), 1);
    assert!(!d.path.exists());
}

//! Deletion workflow over duplicate pairings.
//!
//! # Overview
//!
//! This module removes the duplicate side of previously computed pairings:
//! - [`delete_all`] deletes every pairing's duplicate file
//! - [`delete_selected`] deletes the duplicates at 1-based indices
//! - [`Selection`] parses the operator's raw prompt input
//!
//! Deletion is permanent (`fs::remove_file`); there are no recycle-bin
//! semantics. Failures are recorded per item and never abort the batch.
//! The original side of a pairing is never touched.

use std::fs;
use std::io;
use std::path::{Path, PathBuf};

use thiserror::Error;

use crate::duplicates::DuplicatePairing;

/// Error type for deletion operations.
#[derive(Debug, Error)]
pub enum DeleteError {
    /// File was not found (may have been deleted already).
    #[error("file not found: {0}")]
    NotFound(PathBuf),

    /// Permission denied when attempting to delete.
    #[error("permission denied: {0}")]
    PermissionDenied(PathBuf),

    /// General I/O error.
    #[error("I/O error for {path}: {source}")]
    Io {
        /// Path where the error occurred
        path: PathBuf,
        /// The underlying I/O error
        #[source]
        source: io::Error,
    },
}

/// Error type for parsing an operator selection string.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum SelectionError {
    /// The input contained no usable tokens.
    #[error("empty selection: enter comma-separated numbers or 'all'")]
    Empty,

    /// The input contained a token that is not a number.
    #[error("invalid selection {input:?}: enter comma-separated numbers or 'all'")]
    NotNumeric {
        /// The rejected raw input
        input: String,
    },
}

/// An operator's parsed deletion selection.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Selection {
    /// Delete every duplicate in the pairing list.
    All,
    /// Delete the duplicates at these 1-based pairing indices.
    Indices(Vec<usize>),
}

impl Selection {
    /// Parse a raw prompt string into a selection.
    ///
    /// Accepts the literal token `all` (case-insensitive) or comma-separated
    /// 1-based indices. Empty tokens between commas are ignored. Any
    /// non-numeric token rejects the whole input: partial selections are
    /// never produced.
    ///
    /// # Errors
    ///
    /// - `Empty` if no usable token remains after trimming
    /// - `NotNumeric` if any token fails to parse as an index
    pub fn parse(input: &str) -> Result<Self, SelectionError> {
        let trimmed = input.trim();
        if trimmed.is_empty() {
            return Err(SelectionError::Empty);
        }
        if trimmed.eq_ignore_ascii_case("all") {
            return Ok(Self::All);
        }

        let mut indices = Vec::new();
        for token in trimmed.split(',') {
            let token = token.trim();
            if token.is_empty() {
                continue;
            }
            let index = token
                .parse::<usize>()
                .map_err(|_| SelectionError::NotNumeric {
                    input: trimmed.to_string(),
                })?;
            indices.push(index);
        }

        if indices.is_empty() {
            return Err(SelectionError::Empty);
        }
        Ok(Self::Indices(indices))
    }
}

/// Record of one successful deletion.
#[derive(Debug, Clone)]
pub struct DeleteResult {
    /// File name of the deleted duplicate.
    pub filename: String,
    /// Path that was deleted.
    pub path: PathBuf,
    /// Size of the deleted file in bytes.
    pub size: u64,
}

/// Results of one deletion batch.
#[derive(Debug, Default)]
pub struct BatchOutcome {
    /// Successfully deleted duplicates.
    pub deleted: Vec<DeleteResult>,
    /// Failed deletions with their errors.
    pub failures: Vec<(PathBuf, DeleteError)>,
    /// Selection indices that fell outside the pairing list.
    pub invalid_indices: Vec<usize>,
    /// Total bytes freed.
    pub bytes_freed: u64,
}

impl BatchOutcome {
    /// Number of successful deletions.
    #[must_use]
    pub fn success_count(&self) -> usize {
        self.deleted.len()
    }

    /// Number of failed deletions.
    #[must_use]
    pub fn failure_count(&self) -> usize {
        self.failures.len()
    }

    /// Check if every attempted deletion succeeded and every index was valid.
    #[must_use]
    pub fn all_succeeded(&self) -> bool {
        self.failures.is_empty() && self.invalid_indices.is_empty()
    }

    /// Human-readable summary of the batch.
    #[must_use]
    pub fn summary(&self) -> String {
        if self.all_succeeded() {
            format!(
                "Deleted {} file(s), freed {} bytes",
                self.success_count(),
                self.bytes_freed
            )
        } else {
            format!(
                "Deleted {} file(s), {} failed, {} invalid index(es), freed {} bytes",
                self.success_count(),
                self.failure_count(),
                self.invalid_indices.len(),
                self.bytes_freed
            )
        }
    }

    fn record_success(&mut self, result: DeleteResult) {
        self.bytes_freed += result.size;
        self.deleted.push(result);
    }
}

fn map_fs_error(path: &Path, e: io::Error) -> DeleteError {
    match e.kind() {
        io::ErrorKind::NotFound => DeleteError::NotFound(path.to_path_buf()),
        io::ErrorKind::PermissionDenied => DeleteError::PermissionDenied(path.to_path_buf()),
        _ => DeleteError::Io {
            path: path.to_path_buf(),
            source: e,
        },
    }
}

/// Permanently delete one duplicate's file.
fn delete_duplicate(pairing: &DuplicatePairing) -> Result<DeleteResult, DeleteError> {
    let path = &pairing.duplicate.path;
    let size = fs::metadata(path)
        .map_err(|e| map_fs_error(path, e))?
        .len();

    fs::remove_file(path).map_err(|e| map_fs_error(path, e))?;
    log::info!("Deleted {} ({} bytes)", path.display(), size);

    Ok(DeleteResult {
        filename: pairing.duplicate.filename.clone(),
        path: path.clone(),
        size,
    })
}

/// Delete the duplicate side of every pairing.
///
/// Failures are recorded per item; the batch always runs to completion.
/// Original files are never touched.
#[must_use]
pub fn delete_all(pairings: &[DuplicatePairing]) -> BatchOutcome {
    let mut outcome = BatchOutcome::default();

    for pairing in pairings {
        match delete_duplicate(pairing) {
            Ok(result) => outcome.record_success(result),
            Err(e) => {
                log::warn!("Failed to delete {}: {}", pairing.duplicate.path.display(), e);
                outcome.failures.push((pairing.duplicate.path.clone(), e));
            }
        }
    }

    log::info!("{}", outcome.summary());
    outcome
}

/// Delete the duplicates at the given 1-based pairing indices.
///
/// Out-of-range indices (0, or past the end of the list) are recorded in
/// [`BatchOutcome::invalid_indices`] and skipped; the remaining indices are
/// still processed.
#[must_use]
pub fn delete_selected(pairings: &[DuplicatePairing], indices: &[usize]) -> BatchOutcome {
    let mut outcome = BatchOutcome::default();

    for &index in indices {
        if index == 0 || index > pairings.len() {
            log::warn!("Invalid pairing index: {}", index);
            outcome.invalid_indices.push(index);
            continue;
        }
        let pairing = &pairings[index - 1];
        match delete_duplicate(pairing) {
            Ok(result) => outcome.record_success(result),
            Err(e) => {
                log::warn!("Failed to delete {}: {}", pairing.duplicate.path.display(), e);
                outcome.failures.push((pairing.duplicate.path.clone(), e));
            }
        }
    }

    log::info!("{}", outcome.summary());
    outcome
}

/// Apply a parsed selection to a pairing list.
#[must_use]
pub fn apply_selection(pairings: &[DuplicatePairing], selection: &Selection) -> BatchOutcome {
    match selection {
        Selection::All => delete_all(pairings),
        Selection::Indices(indices) => delete_selected(pairings, indices),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_all_any_case() {
        assert_eq!(Selection::parse("all").unwrap(), Selection::All);
        assert_eq!(Selection::parse("ALL").unwrap(), Selection::All);
        assert_eq!(Selection::parse("  All  ").unwrap(), Selection::All);
    }

    #[test]
    fn test_parse_indices() {
        assert_eq!(
            Selection::parse("1, 3,4").unwrap(),
            Selection::Indices(vec![1, 3, 4])
        );
        // Empty tokens between commas are ignored.
        assert_eq!(
            Selection::parse("2,,5,").unwrap(),
            Selection::Indices(vec![2, 5])
        );
    }

    #[test]
    fn test_parse_rejects_non_numeric_wholesale() {
        let err = Selection::parse("1,two,3").unwrap_err();
        assert!(matches!(err, SelectionError::NotNumeric { .. }));

        let err = Selection::parse("garbage").unwrap_err();
        assert!(matches!(err, SelectionError::NotNumeric { .. }));
    }

    #[test]
    fn test_parse_rejects_empty() {
        assert_eq!(Selection::parse("").unwrap_err(), SelectionError::Empty);
        assert_eq!(Selection::parse("   ").unwrap_err(), SelectionError::Empty);
        assert_eq!(Selection::parse(",,,").unwrap_err(), SelectionError::Empty);
    }

    #[test]
    fn test_batch_outcome_summary() {
        let mut outcome = BatchOutcome::default();
        assert_eq!(outcome.summary(), "Deleted 0 file(s), freed 0 bytes");

        outcome.invalid_indices.push(99);
        assert!(!outcome.all_succeeded());
        assert!(outcome.summary().contains("1 invalid index(es)"));
    }
}

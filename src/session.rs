//! Interactive session state.
//!
//! A [`Session`] owns the inventory store and the last duplicate scan, so the
//! menu loop carries no ambient global state and tests can construct isolated
//! sessions. Command handlers enforce the ordering preconditions: an
//! inventory must be loaded before it can be listed, sorted, or scanned, and
//! a duplicate scan must exist before the deletion workflow runs.
//!
//! A reload or any successful deletion invalidates the last scan: pairings
//! are only meaningful for the snapshot they were computed from. The store
//! itself is left stale after deletions; the operator reloads explicitly.

use std::path::Path;

use crate::actions::{apply_selection, BatchOutcome, Selection};
use crate::catalog::{sort_by_size, CatalogError, ImageRecord, Inventory};
use crate::duplicates::{find_duplicates, DuplicateScan};

/// Precondition errors for session commands.
#[derive(thiserror::Error, Debug, PartialEq, Eq)]
pub enum SessionError {
    /// No inventory has been loaded yet.
    #[error("load images first")]
    NoInventory,

    /// No duplicate scan exists for the current snapshot.
    #[error("scan for duplicates first")]
    NoScan,
}

/// State shared by all menu commands: the inventory and the last scan.
#[derive(Debug, Default)]
pub struct Session {
    inventory: Inventory,
    last_scan: Option<DuplicateScan>,
}

impl Session {
    /// Create a session with an empty inventory.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Rebuild the inventory from a directory, dropping any previous scan.
    ///
    /// # Errors
    ///
    /// Propagates [`CatalogError`] from the store. On failure the previous
    /// snapshot and scan are kept intact.
    pub fn load_directory(&mut self, directory: &Path) -> Result<usize, CatalogError> {
        let count = self.inventory.load(directory)?;
        self.last_scan = None;
        Ok(count)
    }

    /// The current snapshot, in insertion order.
    ///
    /// # Errors
    ///
    /// `NoInventory` if nothing has been loaded.
    pub fn snapshot(&self) -> Result<&[ImageRecord], SessionError> {
        if self.inventory.is_empty() {
            return Err(SessionError::NoInventory);
        }
        Ok(self.inventory.snapshot())
    }

    /// The current snapshot ordered by ascending file size.
    ///
    /// # Errors
    ///
    /// `NoInventory` if nothing has been loaded.
    pub fn sorted_by_size(&self) -> Result<Vec<ImageRecord>, SessionError> {
        Ok(sort_by_size(self.snapshot()?))
    }

    /// Run a duplicate detection pass over the current snapshot, replacing
    /// any previous scan.
    ///
    /// # Errors
    ///
    /// `NoInventory` if nothing has been loaded.
    pub fn scan_duplicates(&mut self) -> Result<&DuplicateScan, SessionError> {
        if self.inventory.is_empty() {
            return Err(SessionError::NoInventory);
        }
        let scan = find_duplicates(self.inventory.snapshot());
        Ok(self.last_scan.insert(scan))
    }

    /// The last duplicate scan, if one exists for the current snapshot.
    #[must_use]
    pub fn last_scan(&self) -> Option<&DuplicateScan> {
        self.last_scan.as_ref()
    }

    /// Apply a deletion selection to the last scan's pairings.
    ///
    /// Any successful deletion invalidates the scan: the pairing list is
    /// dropped and must be recomputed. The inventory itself is left stale
    /// until the operator reloads.
    ///
    /// # Errors
    ///
    /// `NoScan` if no duplicate scan exists for the current snapshot.
    pub fn delete_duplicates(&mut self, selection: &Selection) -> Result<BatchOutcome, SessionError> {
        let scan = self.last_scan.as_ref().ok_or(SessionError::NoScan)?;
        let outcome = apply_selection(&scan.pairings, selection);

        if !outcome.deleted.is_empty() {
            self.last_scan = None;
        }
        Ok(outcome)
    }

    /// Number of records in the current snapshot.
    #[must_use]
    pub fn record_count(&self) -> usize {
        self.inventory.len()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_preconditions_on_empty_session() {
        let mut session = Session::new();

        assert_eq!(session.snapshot().unwrap_err(), SessionError::NoInventory);
        assert_eq!(
            session.sorted_by_size().unwrap_err(),
            SessionError::NoInventory
        );
        assert_eq!(
            session.scan_duplicates().unwrap_err(),
            SessionError::NoInventory
        );
        assert_eq!(
            session.delete_duplicates(&Selection::All).unwrap_err(),
            SessionError::NoScan
        );
    }

    #[test]
    fn test_precondition_messages() {
        assert_eq!(SessionError::NoInventory.to_string(), "load images first");
        assert_eq!(SessionError::NoScan.to_string(), "scan for duplicates first");
    }
}

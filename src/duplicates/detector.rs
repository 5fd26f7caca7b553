//! Content-hash duplicate detector.
//!
//! # Overview
//!
//! The detector walks a snapshot in insertion order, streams each file's full
//! content through BLAKE3, and indexes records by digest. The first record
//! seen with a digest is the "original"; every later record with the same
//! digest is paired as a duplicate of that original, never of another
//! duplicate.
//!
//! Two records pair iff their byte content is identical (under the standard
//! cryptographic-hash assumption). A single differing byte, or a differing
//! length, never produces a pairing.
//!
//! The pass is deliberately single-threaded and sequential: the
//! first-seen-is-original rule depends on the snapshot's iteration order.

use std::collections::HashMap;
use std::fs::File;
use std::io;
use std::path::{Path, PathBuf};

use crate::catalog::ImageRecord;

/// A full-content BLAKE3 digest.
pub type Digest = [u8; 32];

/// Errors that can occur while hashing a file.
#[derive(thiserror::Error, Debug)]
pub enum HashError {
    /// The file was not found (deleted or moved since load).
    #[error("file not found: {0}")]
    NotFound(PathBuf),

    /// Permission was denied when reading the file.
    #[error("permission denied: {0}")]
    PermissionDenied(PathBuf),

    /// An I/O error occurred while reading the file.
    #[error("I/O error for {path}: {source}")]
    Io {
        /// Path where the error occurred
        path: PathBuf,
        /// The underlying I/O error
        #[source]
        source: io::Error,
    },
}

/// One (duplicate, original) association produced by a detection pass.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DuplicatePairing {
    /// The later-encountered record with an already-seen digest.
    pub duplicate: ImageRecord,
    /// The first record seen with that digest.
    pub original: ImageRecord,
}

/// Result of one duplicate detection pass over a snapshot.
///
/// Valid only for the snapshot it was computed from; a reload or any
/// deletion invalidates it and a fresh pass is required.
#[derive(Debug, Default)]
pub struct DuplicateScan {
    /// Pairings in discovery order.
    pub pairings: Vec<DuplicatePairing>,
    /// Digest index mapping each content digest to the first record seen
    /// with it.
    pub index: HashMap<Digest, ImageRecord>,
    /// Records skipped because their file could not be read.
    pub errors: Vec<HashError>,
}

impl DuplicateScan {
    /// Whether the pass found any duplicates.
    #[must_use]
    pub fn has_duplicates(&self) -> bool {
        !self.pairings.is_empty()
    }

    /// Total bytes held by the duplicate side of all pairings.
    #[must_use]
    pub fn reclaimable_bytes(&self) -> u64 {
        self.pairings.iter().map(|p| p.duplicate.size).sum()
    }
}

fn map_open_error(path: &Path, e: io::Error) -> HashError {
    match e.kind() {
        io::ErrorKind::NotFound => HashError::NotFound(path.to_path_buf()),
        io::ErrorKind::PermissionDenied => HashError::PermissionDenied(path.to_path_buf()),
        _ => HashError::Io {
            path: path.to_path_buf(),
            source: e,
        },
    }
}

/// Compute the BLAKE3 digest of a file's full content.
///
/// The file is streamed through the hasher; it is never loaded into memory
/// whole.
///
/// # Errors
///
/// - `NotFound` if the file does not exist
/// - `PermissionDenied` if the file cannot be read
/// - `Io` for any other read failure
pub fn digest_file(path: &Path) -> Result<Digest, HashError> {
    let mut file = File::open(path).map_err(|e| map_open_error(path, e))?;
    let mut hasher = blake3::Hasher::new();
    io::copy(&mut file, &mut hasher).map_err(|e| map_open_error(path, e))?;
    Ok(*hasher.finalize().as_bytes())
}

/// Render a digest as a lowercase hex string.
#[must_use]
pub fn hash_to_hex(digest: &Digest) -> String {
    digest.iter().map(|b| format!("{b:02x}")).collect()
}

/// Partition a snapshot into first-seen originals and content-identical
/// duplicates.
///
/// Iterates the snapshot in order, hashing each file's full content. A record
/// whose digest is new becomes an original; a record whose digest was already
/// seen is paired with that original. Records whose file cannot be read are
/// skipped with a warning and contribute neither an original nor a duplicate.
///
/// # Returns
///
/// The pairing list (in discovery order), the final digest index, and the
/// per-file errors of skipped records.
#[must_use]
pub fn find_duplicates(snapshot: &[ImageRecord]) -> DuplicateScan {
    let mut scan = DuplicateScan::default();

    for record in snapshot {
        let digest = match digest_file(&record.path) {
            Ok(digest) => digest,
            Err(e) => {
                log::warn!("Skipping unreadable file {}: {}", record.path.display(), e);
                scan.errors.push(e);
                continue;
            }
        };

        if let Some(original) = scan.index.get(&digest) {
            log::debug!(
                "{} duplicates {} ({})",
                record.filename,
                original.filename,
                hash_to_hex(&digest)
            );
            scan.pairings.push(DuplicatePairing {
                duplicate: record.clone(),
                original: original.clone(),
            });
        } else {
            scan.index.insert(digest, record.clone());
        }
    }

    log::info!(
        "Duplicate scan: {} record(s), {} pairing(s), {} skipped",
        snapshot.len(),
        scan.pairings.len(),
        scan.errors.len()
    );
    scan
}

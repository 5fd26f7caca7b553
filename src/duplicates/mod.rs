//! Duplicate detection over an inventory snapshot.

pub mod detector;

pub use detector::{
    digest_file, find_duplicates, hash_to_hex, Digest, DuplicatePairing, DuplicateScan, HashError,
};

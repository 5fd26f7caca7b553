//! Image catalog: records, the inventory store, and the size heap.
//!
//! The catalog holds the current snapshot of image files discovered in a
//! directory. The [`Inventory`] store owns the snapshot in insertion order;
//! [`SizeHeap`] and [`sort_by_size`] derive a by-size ordering from it
//! without mutating the store.
//!
//! # Example
//!
//! ```no_run
//! use imagekeep::catalog::{sort_by_size, Inventory};
//! use std::path::Path;
//!
//! let mut inventory = Inventory::new();
//! let count = inventory.load(Path::new("/photos")).unwrap();
//! println!("loaded {} images", count);
//!
//! for record in sort_by_size(inventory.snapshot()) {
//!     println!("{}: {} bytes", record.filename, record.size);
//! }
//! ```

pub mod heap;
pub mod store;

use std::path::PathBuf;

pub use heap::{sort_by_size, SizeHeap};
pub use store::{probe_dimensions, probe_format, Inventory};

/// File extensions eligible for cataloguing (matched case-insensitively).
pub const SUPPORTED_EXTENSIONS: &[&str] = &["jpg", "jpeg", "png", "bmp", "gif"];

/// Metadata for one catalogued image file.
///
/// Immutable once constructed. Records order by `size` alone; the relative
/// order of equal-size records is unspecified.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ImageRecord {
    /// File name without directory components
    pub filename: String,
    /// Full path to the file
    pub path: PathBuf,
    /// File size in bytes
    pub size: u64,
    /// Detected image format name (e.g. "PNG", "JPEG")
    pub format: String,
}

impl ImageRecord {
    /// Create a new record.
    #[must_use]
    pub fn new(filename: String, path: PathBuf, size: u64, format: String) -> Self {
        Self {
            filename,
            path,
            size,
            format,
        }
    }
}

/// Errors that can occur while building or probing the catalog.
#[derive(thiserror::Error, Debug)]
pub enum CatalogError {
    /// The specified directory was not found.
    #[error("directory not found: {0}")]
    NotFound(PathBuf),

    /// The specified path exists but is not a directory.
    #[error("not a directory: {0}")]
    NotADirectory(PathBuf),

    /// The file's signature did not match any known image format.
    #[error("unrecognized image format: {0}")]
    UnrecognizedFormat(PathBuf),

    /// The image header could not be parsed.
    #[error("failed to read image header for {path}: {source}")]
    Header {
        /// Path where the error occurred
        path: PathBuf,
        /// The underlying decoder error
        #[source]
        source: image::ImageError,
    },

    /// An I/O error occurred while accessing a file or directory.
    #[error("I/O error for {path}: {source}")]
    Io {
        /// Path where the error occurred
        path: PathBuf,
        /// The underlying I/O error
        #[source]
        source: std::io::Error,
    },
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_image_record_new() {
        let record = ImageRecord::new(
            "photo.png".to_string(),
            PathBuf::from("/pics/photo.png"),
            2048,
            "PNG".to_string(),
        );

        assert_eq!(record.filename, "photo.png");
        assert_eq!(record.path, PathBuf::from("/pics/photo.png"));
        assert_eq!(record.size, 2048);
        assert_eq!(record.format, "PNG");
    }

    #[test]
    fn test_catalog_error_display() {
        let err = CatalogError::NotFound(PathBuf::from("/missing"));
        assert_eq!(err.to_string(), "directory not found: /missing");

        let err = CatalogError::NotADirectory(PathBuf::from("/file.txt"));
        assert_eq!(err.to_string(), "not a directory: /file.txt");

        let err = CatalogError::UnrecognizedFormat(PathBuf::from("/junk.png"));
        assert_eq!(err.to_string(), "unrecognized image format: /junk.png");
    }
}

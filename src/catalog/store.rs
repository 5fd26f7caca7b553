//! Inventory store: the insertion-ordered catalog of one directory's images.
//!
//! The store is rebuilt from the filesystem on every [`Inventory::load`];
//! there is no incremental merge and no persistence across runs. Records are
//! kept in the order the directory enumeration yielded them.

use std::ffi::OsStr;
use std::io;
use std::path::Path;

use image::ImageReader;
use walkdir::WalkDir;

use super::{CatalogError, ImageRecord, SUPPORTED_EXTENSIONS};

/// Probe the image format of a file from its signature bytes.
///
/// Only the leading magic bytes are inspected; pixel data is never decoded.
/// Returns the format name in the conventional spelling ("PNG", "JPEG", ...).
///
/// # Errors
///
/// - `Io` if the file cannot be opened or read
/// - `UnrecognizedFormat` if the signature matches no known image format
pub fn probe_format(path: &Path) -> Result<String, CatalogError> {
    let reader = ImageReader::open(path)
        .and_then(ImageReader::with_guessed_format)
        .map_err(|source| CatalogError::Io {
            path: path.to_path_buf(),
            source,
        })?;

    match reader.format() {
        Some(format) => Ok(format!("{format:?}").to_ascii_uppercase()),
        None => Err(CatalogError::UnrecognizedFormat(path.to_path_buf())),
    }
}

/// Probe the pixel dimensions of an image from its header.
///
/// # Errors
///
/// Returns `Header` if the file cannot be opened or its header is malformed.
pub fn probe_dimensions(path: &Path) -> Result<(u32, u32), CatalogError> {
    image::image_dimensions(path).map_err(|source| CatalogError::Header {
        path: path.to_path_buf(),
        source,
    })
}

/// Check whether a path carries one of the supported image extensions.
fn has_supported_extension(path: &Path) -> bool {
    path.extension()
        .and_then(OsStr::to_str)
        .is_some_and(|ext| {
            SUPPORTED_EXTENSIONS
                .iter()
                .any(|supported| ext.eq_ignore_ascii_case(supported))
        })
}

/// Insertion-ordered catalog of the most recently loaded directory.
///
/// The store is the single source of truth for the current snapshot. Derived
/// views (size ordering, duplicate pairings) copy out of it and never alias
/// its records.
#[derive(Debug, Default)]
pub struct Inventory {
    records: Vec<ImageRecord>,
}

impl Inventory {
    /// Create an empty inventory.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Rebuild the inventory from the given directory.
    ///
    /// Enumerates supported image files (see [`SUPPORTED_EXTENSIONS`]) in the
    /// directory, non-recursively, in enumeration order. Files whose format
    /// probe or metadata read fails are skipped with a warning; the scan
    /// continues. Any previous snapshot is replaced wholesale.
    ///
    /// # Returns
    ///
    /// The number of records loaded.
    ///
    /// # Errors
    ///
    /// - `NotFound` if the directory does not exist
    /// - `NotADirectory` if the path is not a directory
    /// - `Io` if the directory cannot be enumerated
    pub fn load(&mut self, directory: &Path) -> Result<usize, CatalogError> {
        if !directory.exists() {
            return Err(CatalogError::NotFound(directory.to_path_buf()));
        }
        if !directory.is_dir() {
            return Err(CatalogError::NotADirectory(directory.to_path_buf()));
        }

        log::info!("Loading images from {}", directory.display());

        let mut records = Vec::new();
        for entry in WalkDir::new(directory).min_depth(1).max_depth(1) {
            let entry = entry.map_err(|e| {
                let path = e
                    .path()
                    .map_or_else(|| directory.to_path_buf(), Path::to_path_buf);
                CatalogError::Io {
                    path,
                    source: e
                        .into_io_error()
                        .unwrap_or_else(|| io::Error::other("directory walk failed")),
                }
            })?;

            if !entry.file_type().is_file() || !has_supported_extension(entry.path()) {
                continue;
            }

            let size = match entry.metadata() {
                Ok(metadata) => metadata.len(),
                Err(e) => {
                    log::warn!("Skipping {}: {}", entry.path().display(), e);
                    continue;
                }
            };

            match probe_format(entry.path()) {
                Ok(format) => {
                    log::debug!(
                        "Catalogued {} ({} bytes, {})",
                        entry.path().display(),
                        size,
                        format
                    );
                    records.push(ImageRecord::new(
                        entry.file_name().to_string_lossy().into_owned(),
                        entry.path().to_path_buf(),
                        size,
                        format,
                    ));
                }
                Err(e) => {
                    log::warn!("Skipping unreadable image {}: {}", entry.path().display(), e);
                }
            }
        }

        self.records = records;
        log::info!("Loaded {} image(s)", self.records.len());
        Ok(self.records.len())
    }

    /// Current records in insertion (enumeration) order.
    #[must_use]
    pub fn snapshot(&self) -> &[ImageRecord] {
        &self.records
    }

    /// Discard all records. Idempotent.
    pub fn clear(&mut self) {
        self.records.clear();
    }

    /// Number of records in the current snapshot.
    #[must_use]
    pub fn len(&self) -> usize {
        self.records.len()
    }

    /// Whether the inventory holds no records.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::path::PathBuf;

    #[test]
    fn test_supported_extension_matching() {
        assert!(has_supported_extension(Path::new("a.jpg")));
        assert!(has_supported_extension(Path::new("a.JPEG")));
        assert!(has_supported_extension(Path::new("/dir/b.Png")));
        assert!(has_supported_extension(Path::new("c.GIF")));
        assert!(has_supported_extension(Path::new("d.bmp")));

        assert!(!has_supported_extension(Path::new("notes.txt")));
        assert!(!has_supported_extension(Path::new("archive.png.zip")));
        assert!(!has_supported_extension(Path::new("noextension")));
        assert!(!has_supported_extension(Path::new("photo.webp")));
    }

    #[test]
    fn test_load_missing_directory() {
        let mut inventory = Inventory::new();
        let missing = PathBuf::from("/definitely/not/a/real/directory");

        let err = inventory.load(&missing).unwrap_err();
        assert!(matches!(err, CatalogError::NotFound(_)));
    }

    #[test]
    fn test_clear_is_idempotent() {
        let mut inventory = Inventory::new();
        inventory.clear();
        inventory.clear();
        assert!(inventory.is_empty());
        assert_eq!(inventory.len(), 0);
    }
}

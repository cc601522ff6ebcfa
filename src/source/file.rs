//! Filesystem document source.

use super::DocumentSource;
use crate::model::error::FetchError;
use std::fs;
use std::io::ErrorKind;
use std::path::Path;

/// Reads documents from the local filesystem.
///
/// The whole file is read in one call; invalid UTF-8 is rejected rather than
/// lossily decoded.
#[derive(Debug, Clone, Copy, Default)]
pub struct FileSource;

impl FileSource {
    /// Create a filesystem source.
    pub fn new() -> Self {
        Self
    }
}

impl DocumentSource for FileSource {
    fn fetch(&self, path: &Path) -> Result<String, FetchError> {
        let bytes = fs::read(path).map_err(|source| match source.kind() {
            ErrorKind::NotFound => FetchError::NotFound {
                path: path.to_path_buf(),
            },
            _ => FetchError::Io {
                path: path.to_path_buf(),
                source,
            },
        })?;

        String::from_utf8(bytes).map_err(|_| FetchError::NotText {
            path: path.to_path_buf(),
        })
    }
}

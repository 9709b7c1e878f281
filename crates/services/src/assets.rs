//! Filesystem-backed lookup for question and result illustrations.

use std::path::{Path, PathBuf};

/// Resolves image file names against a configured directory.
///
/// Mirrors the "append one file name, may be missing" contract of the asset
/// loader: a miss is reported to the caller as `None` and logged, never
/// treated as fatal.
#[derive(Debug, Clone)]
pub struct AssetCatalog {
    root: PathBuf,
}

impl AssetCatalog {
    #[must_use]
    pub fn new(root: impl Into<PathBuf>) -> Self {
        Self { root: root.into() }
    }

    #[must_use]
    pub fn root(&self) -> &Path {
        &self.root
    }

    /// Returns the on-disk path for `file_name`, or `None` when it does not
    /// exist under the configured directory.
    #[must_use]
    pub fn resolve(&self, file_name: &str) -> Option<PathBuf> {
        let path = self.root.join(file_name);
        if path.is_file() {
            Some(path)
        } else {
            log::warn!("could not load image {file_name:?}: file not found");
            None
        }
    }
}

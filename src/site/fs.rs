//! Site backed by a local directory, e.g. a checkout of the website repo.

use super::backend::{FetchError, SiteBackend, decode_image};
use std::io::ErrorKind;
use std::path::{Path, PathBuf};

/// Serves site-relative paths from a root directory on disk.
pub struct FsSite {
    root: PathBuf,
}

impl FsSite {
    pub fn new(root: impl AsRef<Path>) -> Self {
        Self {
            root: root.as_ref().to_path_buf(),
        }
    }

    /// Map a site-relative path onto the filesystem.
    fn resolve(&self, path: &str) -> PathBuf {
        path.split('/')
            .filter(|segment| !segment.is_empty())
            .fold(self.root.clone(), |acc, segment| acc.join(segment))
    }
}

impl SiteBackend for FsSite {
    fn fetch(&self, path: &str) -> Result<Vec<u8>, FetchError> {
        let full = self.resolve(path);
        std::fs::read(&full).map_err(|e| match e.kind() {
            ErrorKind::NotFound => FetchError::NotFound(path.to_string()),
            _ => FetchError::Io(e),
        })
    }

    fn load_image(&self, path: &str) -> Result<(), FetchError> {
        let bytes = self.fetch(path)?;
        decode_image(path, &bytes)
    }
}

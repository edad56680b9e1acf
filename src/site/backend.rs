//! Site backend trait and shared types.
//!
//! The [`SiteBackend`] trait defines the two operations discovery needs from
//! its host: a plain read of a resource (the manifest) and an image load that
//! goes through the decoder (the probe). Keeping the load on the decoder path
//! means a successful probe guarantees the file is displayable, not merely
//! present.

use image::ImageReader;
use std::io::Cursor;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum FetchError {
    #[error("Resource not found: {0}")]
    NotFound(String),
    #[error("HTTP {status} for {path}")]
    Status { path: String, status: u16 },
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
    #[error("Transport error: {0}")]
    Transport(String),
    #[error("Failed to decode {path}: {message}")]
    Decode { path: String, message: String },
}

/// Trait for the host a site is served from.
///
/// Paths are site-relative with `/` separators, e.g. `images/projects/1.jpg`.
pub trait SiteBackend: Sync {
    /// Read a resource as raw bytes.
    fn fetch(&self, path: &str) -> Result<Vec<u8>, FetchError>;

    /// Load a resource the way a displayed image would be loaded.
    ///
    /// Succeeds only if the bytes decode as an image.
    fn load_image(&self, path: &str) -> Result<(), FetchError>;
}

/// Check that `bytes` decode as an image.
///
/// The format is guessed from content, not from the extension, so a PNG saved
/// as `.jpg` loads and a text file saved as `.png` does not.
pub fn decode_image(path: &str, bytes: &[u8]) -> Result<(), FetchError> {
    let reader = ImageReader::new(Cursor::new(bytes)).with_guessed_format()?;
    reader.decode().map_err(|e| FetchError::Decode {
        path: path.to_string(),
        message: e.to_string(),
    })?;
    Ok(())
}

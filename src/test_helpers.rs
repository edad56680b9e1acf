//! Shared test utilities for the gallery-discovery test suite.
//!
//! Builds throwaway site directories with real, decodable image files so
//! filesystem-backed tests exercise the same decoder path as production.
//!
//! # Usage
//!
//! ```rust
//! use crate::test_helpers::*;
//!
//! let tmp = setup_site(&["images/projects/1.jpg", "images/clients/logo.png"]);
//! let site = FsSite::new(tmp.path());
//! assert!(site.load_image("images/projects/1.jpg").is_ok());
//! ```

use std::path::Path;
use tempfile::TempDir;

// =========================================================================
// Fixture setup
// =========================================================================

/// Create a temp site root containing a small PNG at each relative path.
///
/// The content is PNG regardless of extension; decoding sniffs the format.
pub fn setup_site(paths: &[&str]) -> TempDir {
    let tmp = TempDir::new().unwrap();
    for rel in paths {
        write_png(&tmp.path().join(rel));
    }
    tmp
}

/// Write a 4×4 PNG, creating parent directories.
pub fn write_png(path: &Path) {
    std::fs::create_dir_all(path.parent().unwrap()).unwrap();
    image::RgbImage::from_pixel(4, 4, image::Rgb([200, 80, 20]))
        .save_with_format(path, image::ImageFormat::Png)
        .unwrap();
}

/// Write a 4×4 JPEG, creating parent directories.
pub fn write_jpeg(path: &Path) {
    std::fs::create_dir_all(path.parent().unwrap()).unwrap();
    image::RgbImage::from_pixel(4, 4, image::Rgb([20, 80, 200]))
        .save_with_format(path, image::ImageFormat::Jpeg)
        .unwrap();
}

/// Write bytes no decoder accepts, creating parent directories.
pub fn write_garbage(path: &Path) {
    std::fs::create_dir_all(path.parent().unwrap()).unwrap();
    std::fs::write(path, b"\x00\x00\x00\x18ftypheic-but-not-really").unwrap();
}

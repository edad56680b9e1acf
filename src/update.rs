//! Manifest writer: lists category directories into `images/images.json`.
//!
//! Run after adding or removing images so discovery can skip brute-force
//! probing. For each category directory:
//!
//! - only regular files directly inside it are considered (no recursion)
//! - the lowercased extension must be on the `images.extensions` allow-list
//! - filenames are sorted lexicographically (byte order)
//!
//! A missing category directory contributes an empty list, not an error.
//!
//! ## Extension drift
//!
//! Brute-force discovery probes a fixed set of extensions (see
//! [`patterns::pattern_extensions`]). When the allow-list leaves one of them
//! out, files that discovery could find by guessing never make it into the
//! manifest. [`extension_drift`] lists those extensions so the CLI can warn.

use crate::category::Category;
use crate::config::ImagesConfig;
use crate::manifest::Manifest;
use crate::patterns;
use std::fs;
use std::path::{Path, PathBuf};
use thiserror::Error;
use walkdir::WalkDir;

#[derive(Error, Debug)]
pub enum UpdateError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
    #[error("Failed to list directory: {0}")]
    Walk(#[from] walkdir::Error),
}

/// Outcome of an `update-images` run.
#[derive(Debug)]
pub struct UpdateReport {
    pub manifest: Manifest,
    /// Where the manifest was written.
    pub path: PathBuf,
    /// Pattern extensions the allow-list excludes.
    pub drift: Vec<String>,
}

/// List the allowed image files directly inside `dir`, sorted.
pub fn scan_category(dir: &Path, images: &ImagesConfig) -> Result<Vec<String>, UpdateError> {
    if !dir.is_dir() {
        log::debug!("No directory at {}, listing nothing", dir.display());
        return Ok(Vec::new());
    }

    let mut files = Vec::new();
    for entry in WalkDir::new(dir).min_depth(1).max_depth(1).follow_links(true) {
        let entry = entry?;
        if !entry.file_type().is_file() {
            continue;
        }
        let name = entry.file_name().to_string_lossy().to_string();
        let allowed = Path::new(&name)
            .extension()
            .map(|e| images.allows_extension(&e.to_string_lossy()))
            .unwrap_or(false);
        if allowed {
            files.push(name);
        } else {
            log::debug!("Skipping {name}: extension not in allow-list");
        }
    }

    files.sort();
    Ok(files)
}

/// Build a manifest from the category directories under the site root.
pub fn build_manifest(site_root: &Path, images: &ImagesConfig) -> Result<Manifest, UpdateError> {
    let images_root = site_root.join(images.dir.trim_matches('/'));
    let mut manifest = Manifest::new();
    for category in Category::ALL {
        let files = scan_category(&images_root.join(category.as_str()), images)?;
        manifest.insert(category, files);
    }
    Ok(manifest)
}

/// Write a manifest as pretty JSON to `images.manifest` under the site root.
pub fn write_manifest(
    site_root: &Path,
    images: &ImagesConfig,
    manifest: &Manifest,
) -> Result<PathBuf, UpdateError> {
    let path = site_root.join(images.manifest.trim_start_matches('/'));
    if let Some(parent) = path.parent() {
        fs::create_dir_all(parent)?;
    }
    let json = serde_json::to_string_pretty(manifest)?;
    fs::write(&path, json)?;
    Ok(path)
}

/// Extensions brute-force discovery probes that the allow-list excludes.
pub fn extension_drift(images: &ImagesConfig) -> Vec<String> {
    patterns::pattern_extensions()
        .into_iter()
        .filter(|ext| !images.allows_extension(ext))
        .collect()
}

/// Scan, write, and report.
pub fn update_images(site_root: &Path, images: &ImagesConfig) -> Result<UpdateReport, UpdateError> {
    let manifest = build_manifest(site_root, images)?;
    let path = write_manifest(site_root, images, &manifest)?;
    let drift = extension_drift(images);
    for ext in &drift {
        log::warn!(
            "Discovery probes .{ext} files but images.extensions does not list them; \
             they will be missing from the manifest"
        );
    }
    Ok(UpdateReport {
        manifest,
        path,
        drift,
    })
}

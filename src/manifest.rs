//! The declarative image manifest (`images/images.json`).
//!
//! ## Format
//!
//! ```json
//! {
//!   "experts": ["alex.jpg", "eduardo.jpg"],
//!   "projects": ["rodillos.jpg", "tazas-1.png"],
//!   "clients": []
//! }
//! ```
//!
//! Values are bare filenames relative to the category directory. There is no
//! version field. Category order and filename order are preserved as read.
//!
//! ## Outcomes
//!
//! Retrieving the manifest has four outcomes, see [`ManifestOutcome`]. Only
//! [`ManifestOutcome::Loaded`] is used for resolution; the other three all
//! send discovery down the brute-force path but stay distinguishable for
//! diagnostics.

use crate::category::Category;
use crate::site::{FetchError, SiteBackend};
use serde::ser::{Serialize, SerializeMap, Serializer};
use serde_json::Value;
use thiserror::Error;

/// Default manifest location, relative to the site root.
pub const DEFAULT_MANIFEST_PATH: &str = "images/images.json";

#[derive(Error, Debug)]
pub enum ManifestError {
    #[error("invalid JSON: {0}")]
    Json(#[from] serde_json::Error),
    #[error("expected a JSON object at the top level")]
    NotAnObject,
    #[error("value for '{0}' is not an array")]
    NotAnArray(String),
    #[error("entry {index} of '{key}' is not a string")]
    NotAString { key: String, index: usize },
}

/// Category → ordered filenames.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Manifest {
    entries: Vec<(Category, Vec<String>)>,
}

impl Manifest {
    pub fn new() -> Self {
        Self::default()
    }

    /// Add or replace the file list for a category. A replaced category keeps
    /// its original position.
    pub fn insert(&mut self, category: Category, files: Vec<String>) {
        match self.entries.iter_mut().find(|(c, _)| *c == category) {
            Some((_, existing)) => *existing = files,
            None => self.entries.push((category, files)),
        }
    }

    /// Categories present in the manifest, in manifest order.
    pub fn entries(&self) -> &[(Category, Vec<String>)] {
        &self.entries
    }

    /// Files listed for a category. Omitted categories have none.
    pub fn files(&self, category: Category) -> &[String] {
        self.entries
            .iter()
            .find(|(c, _)| *c == category)
            .map(|(_, files)| files.as_slice())
            .unwrap_or(&[])
    }

    pub fn contains(&self, category: Category) -> bool {
        self.entries.iter().any(|(c, _)| *c == category)
    }

    /// Parse manifest JSON.
    ///
    /// Returns the manifest plus any top-level keys that are not categories.
    /// Those keys are skipped rather than rejected, but their values must
    /// still be string arrays.
    pub fn parse(bytes: &[u8]) -> Result<(Self, Vec<String>), ManifestError> {
        let value: Value = serde_json::from_slice(bytes)?;
        let Value::Object(map) = value else {
            return Err(ManifestError::NotAnObject);
        };

        let mut manifest = Manifest::new();
        let mut ignored = Vec::new();

        for (key, value) in map {
            let Value::Array(items) = value else {
                return Err(ManifestError::NotAnArray(key));
            };
            let mut files = Vec::with_capacity(items.len());
            for (index, item) in items.into_iter().enumerate() {
                match item {
                    Value::String(s) => files.push(s),
                    _ => return Err(ManifestError::NotAString { key, index }),
                }
            }
            match Category::parse(&key) {
                Some(category) => manifest.insert(category, files),
                None => ignored.push(key),
            }
        }

        Ok((manifest, ignored))
    }

    /// Total number of listed files across categories.
    pub fn len(&self) -> usize {
        self.entries.iter().map(|(_, files)| files.len()).sum()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

impl Serialize for Manifest {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let mut map = serializer.serialize_map(Some(self.entries.len()))?;
        for (category, files) in &self.entries {
            map.serialize_entry(category.as_str(), files)?;
        }
        map.end()
    }
}

/// Result of trying to obtain the manifest.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ManifestOutcome {
    Loaded {
        manifest: Manifest,
        ignored_keys: Vec<String>,
    },
    /// The resource does not exist.
    Absent,
    /// Transport failure or a non-success status.
    Unavailable(String),
    /// The resource exists but is not a valid manifest.
    Malformed(String),
}

/// Fetch and parse the manifest. Never fails: every error becomes an outcome.
pub fn fetch_manifest<S: SiteBackend + ?Sized>(site: &S, path: &str) -> ManifestOutcome {
    let bytes = match site.fetch(path) {
        Ok(bytes) => bytes,
        Err(FetchError::NotFound(_)) => return ManifestOutcome::Absent,
        Err(e) => return ManifestOutcome::Unavailable(e.to_string()),
    };

    match Manifest::parse(&bytes) {
        Ok((manifest, ignored_keys)) => ManifestOutcome::Loaded {
            manifest,
            ignored_keys,
        },
        Err(e) => ManifestOutcome::Malformed(e.to_string()),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::site::backend::tests::MockSite;

    #[test]
    fn parse_full_manifest() {
        let json = r#"{
            "experts": ["alex.jpg"],
            "projects": ["b.jpg", "a.jpg"],
            "clients": []
        }"#;
        let (manifest, ignored) = Manifest::parse(json.as_bytes()).unwrap();

        assert!(ignored.is_empty());
        assert_eq!(manifest.files(Category::Experts), &["alex.jpg"]);
        assert_eq!(manifest.files(Category::Projects), &["b.jpg", "a.jpg"]);
        assert!(manifest.contains(Category::Clients));
        assert!(manifest.files(Category::Clients).is_empty());
        assert_eq!(manifest.len(), 3);
    }

    #[test]
    fn parse_preserves_category_order() {
        let json = r#"{"clients": ["c.png"], "experts": ["e.jpg"]}"#;
        let (manifest, _) = Manifest::parse(json.as_bytes()).unwrap();
        let order: Vec<Category> = manifest.entries().iter().map(|(c, _)| *c).collect();
        assert_eq!(order, vec![Category::Clients, Category::Experts]);
    }

    #[test]
    fn parse_omitted_category_has_no_files() {
        let (manifest, _) = Manifest::parse(br#"{"projects": ["a.jpg"]}"#).unwrap();
        assert!(!manifest.contains(Category::Clients));
        assert!(manifest.files(Category::Clients).is_empty());
    }

    #[test]
    fn parse_reports_unknown_keys() {
        let json = r#"{"projects": ["a.jpg"], "team": ["x.jpg"]}"#;
        let (manifest, ignored) = Manifest::parse(json.as_bytes()).unwrap();
        assert_eq!(ignored, vec!["team"]);
        assert_eq!(manifest.entries().len(), 1);
    }

    #[test]
    fn parse_rejects_non_json() {
        let result = Manifest::parse(b"<!DOCTYPE html><html></html>");
        assert!(matches!(result, Err(ManifestError::Json(_))));
    }

    #[test]
    fn parse_rejects_top_level_array() {
        let result = Manifest::parse(br#"["a.jpg"]"#);
        assert!(matches!(result, Err(ManifestError::NotAnObject)));
    }

    #[test]
    fn parse_rejects_non_array_value() {
        let result = Manifest::parse(br#"{"projects": "a.jpg"}"#);
        assert!(matches!(result, Err(ManifestError::NotAnArray(k)) if k == "projects"));
    }

    #[test]
    fn parse_rejects_non_string_entry() {
        let result = Manifest::parse(br#"{"clients": ["a.png", 3]}"#);
        assert!(matches!(
            result,
            Err(ManifestError::NotAString { key, index: 1 }) if key == "clients"
        ));
    }

    #[test]
    fn serialize_in_insertion_order() {
        let mut manifest = Manifest::new();
        manifest.insert(Category::Experts, vec!["a.jpg".into()]);
        manifest.insert(Category::Projects, vec![]);
        manifest.insert(Category::Clients, vec!["c.png".into()]);

        let json = serde_json::to_string(&manifest).unwrap();
        assert_eq!(
            json,
            r#"{"experts":["a.jpg"],"projects":[],"clients":["c.png"]}"#
        );
    }

    #[test]
    fn insert_replaces_in_place() {
        let mut manifest = Manifest::new();
        manifest.insert(Category::Projects, vec!["a.jpg".into()]);
        manifest.insert(Category::Clients, vec![]);
        manifest.insert(Category::Projects, vec!["b.jpg".into()]);

        assert_eq!(manifest.entries()[0].0, Category::Projects);
        assert_eq!(manifest.files(Category::Projects), &["b.jpg"]);
    }

    // =========================================================================
    // fetch_manifest outcomes
    // =========================================================================

    #[test]
    fn fetch_loaded() {
        let site = MockSite::new().with_file(DEFAULT_MANIFEST_PATH, r#"{"clients": ["c.png"]}"#);
        let outcome = fetch_manifest(&site, DEFAULT_MANIFEST_PATH);
        match outcome {
            ManifestOutcome::Loaded { manifest, .. } => {
                assert_eq!(manifest.files(Category::Clients), &["c.png"]);
            }
            other => panic!("expected Loaded, got {other:?}"),
        }
    }

    #[test]
    fn fetch_absent() {
        let site = MockSite::new();
        assert_eq!(
            fetch_manifest(&site, DEFAULT_MANIFEST_PATH),
            ManifestOutcome::Absent
        );
    }

    #[test]
    fn fetch_server_error_is_unavailable() {
        let site = MockSite::new().with_status(DEFAULT_MANIFEST_PATH, 503);
        assert!(matches!(
            fetch_manifest(&site, DEFAULT_MANIFEST_PATH),
            ManifestOutcome::Unavailable(msg) if msg.contains("503")
        ));
    }

    #[test]
    fn fetch_malformed() {
        let site = MockSite::new().with_file(DEFAULT_MANIFEST_PATH, "not json");
        assert!(matches!(
            fetch_manifest(&site, DEFAULT_MANIFEST_PATH),
            ManifestOutcome::Malformed(_)
        ));
    }
}

//! The fixed set of image categories and candidate path construction.
//!
//! Every image the site shows lives in one of three directories under the
//! images root:
//!
//! ```text
//! images/
//! ├── images.json      # Manifest (optional)
//! ├── experts/
//! ├── projects/
//! └── clients/
//! ```
//!
//! Categories are not dynamic. A manifest key that is not one of these names
//! is ignored by discovery.

use serde::{Deserialize, Serialize};
use std::fmt;

/// One of the three image groupings the landing page renders.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Category {
    Experts,
    Projects,
    Clients,
}

impl Category {
    /// All categories, in the order discovery and the manifest writer visit them.
    pub const ALL: [Category; 3] = [Category::Experts, Category::Projects, Category::Clients];

    /// Directory name (and manifest key) for this category.
    pub fn as_str(self) -> &'static str {
        match self {
            Category::Experts => "experts",
            Category::Projects => "projects",
            Category::Clients => "clients",
        }
    }

    /// Parse a manifest key. Matching is exact: `"Projects"` is not a category.
    pub fn parse(name: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|c| c.as_str() == name)
    }

    /// Build the candidate path `{images_dir}/{category}/{filename}`.
    ///
    /// The filename is passed through untouched. Manifests come from the
    /// offline writer, never from user input.
    pub fn candidate_path(self, images_dir: &str, filename: &str) -> String {
        let base = images_dir.trim_end_matches('/');
        if base.is_empty() {
            format!("{}/{}", self.as_str(), filename)
        } else {
            format!("{}/{}/{}", base, self.as_str(), filename)
        }
    }
}

impl fmt::Display for Category {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

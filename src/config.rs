//! Discovery configuration.
//!
//! Handles loading, validating, and merging `gallery.toml`. The file lives in
//! the site root, next to `index.html`:
//!
//! ```text
//! site/
//! ├── gallery.toml             # Optional, overrides stock defaults
//! ├── index.html
//! └── images/
//!     ├── images.json
//!     ├── experts/
//!     ├── projects/
//!     └── clients/
//! ```
//!
//! ## Configuration Options
//!
//! ```toml
//! # All options are optional - defaults shown below
//!
//! [images]
//! dir = "images"                      # Images root, relative to the site
//! manifest = "images/images.json"     # Manifest location, relative to the site
//! extensions = ["jpg", "jpeg", "png", "gif", "webp"]  # Manifest writer allow-list
//!
//! [discovery]
//! concurrency = 8                     # Probes in flight at once
//!
//! [http]
//! timeout_secs = 10                   # Per-request timeout for --base-url sites
//! ```
//!
//! The extension allow-list is the single source of truth for what the
//! manifest writer lists. The brute-force patterns are fixed; `update-images`
//! reports any pattern extension the allow-list leaves out.
//!
//! Unknown keys are rejected to catch typos early.

use serde::{Deserialize, Serialize};
use std::fs;
use std::path::Path;
use std::time::Duration;
use thiserror::Error;

/// Name of the config file in the site root.
pub const CONFIG_FILENAME: &str = "gallery.toml";

/// Upper bound for `discovery.concurrency`.
const MAX_CONCURRENCY: usize = 64;

#[derive(Error, Debug)]
pub enum ConfigError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
    #[error("TOML parse error: {0}")]
    Toml(#[from] toml::de::Error),
    #[error("Config validation error: {0}")]
    Validation(String),
}

/// Configuration loaded from `gallery.toml`.
///
/// All fields have defaults matching the live site layout. User config files
/// need only specify the values they want to override.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct SiteConfig {
    /// Image directory layout and manifest writer settings.
    pub images: ImagesConfig,
    /// Probe fan-out.
    pub discovery: DiscoveryConfig,
    /// Settings for sites probed over HTTP.
    pub http: HttpConfig,
}

impl SiteConfig {
    /// Validate config values are within acceptable ranges.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.images.dir.trim_matches('/').is_empty() {
            return Err(ConfigError::Validation(
                "images.dir must not be empty".into(),
            ));
        }
        if self.images.manifest.trim().is_empty() {
            return Err(ConfigError::Validation(
                "images.manifest must not be empty".into(),
            ));
        }
        if self.images.extensions.is_empty() {
            return Err(ConfigError::Validation(
                "images.extensions must not be empty".into(),
            ));
        }
        if let Some(bad) = self
            .images
            .extensions
            .iter()
            .find(|e| e.is_empty() || e.contains('.'))
        {
            return Err(ConfigError::Validation(format!(
                "images.extensions entries must be bare extensions without dots, got '{bad}'"
            )));
        }
        if self.discovery.concurrency == 0 || self.discovery.concurrency > MAX_CONCURRENCY {
            return Err(ConfigError::Validation(format!(
                "discovery.concurrency must be 1-{MAX_CONCURRENCY}"
            )));
        }
        if self.http.timeout_secs == 0 {
            return Err(ConfigError::Validation(
                "http.timeout_secs must be non-zero".into(),
            ));
        }
        Ok(())
    }
}

/// Image directory layout.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct ImagesConfig {
    /// Images root, relative to the site root. Category directories live here.
    pub dir: String,
    /// Manifest path, relative to the site root.
    pub manifest: String,
    /// Extensions the manifest writer lists (case-insensitive).
    pub extensions: Vec<String>,
}

impl ImagesConfig {
    /// Whether a file extension is on the allow-list.
    pub fn allows_extension(&self, ext: &str) -> bool {
        self.extensions.iter().any(|e| e.eq_ignore_ascii_case(ext))
    }
}

impl Default for ImagesConfig {
    fn default() -> Self {
        Self {
            dir: "images".to_string(),
            manifest: crate::manifest::DEFAULT_MANIFEST_PATH.to_string(),
            extensions: ["jpg", "jpeg", "png", "gif", "webp"]
                .iter()
                .map(|s| s.to_string())
                .collect(),
        }
    }
}

/// Probe fan-out settings.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct DiscoveryConfig {
    /// Maximum number of probes in flight. `1` probes strictly in order.
    pub concurrency: usize,
}

impl Default for DiscoveryConfig {
    fn default() -> Self {
        Self { concurrency: 8 }
    }
}

/// HTTP client settings.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct HttpConfig {
    /// Per-request timeout in seconds, applied to connect and body.
    pub timeout_secs: u64,
}

impl HttpConfig {
    pub fn timeout(&self) -> Duration {
        Duration::from_secs(self.timeout_secs)
    }
}

impl Default for HttpConfig {
    fn default() -> Self {
        Self { timeout_secs: 10 }
    }
}

// =============================================================================
// Config loading, merging, and validation
// =============================================================================

/// Returns the stock default config as a `toml::Value::Table`.
///
/// This is the canonical representation of all default values, used as the
/// base layer for merging user overrides on top.
pub fn stock_defaults_value() -> toml::Value {
    toml::Value::try_from(SiteConfig::default()).expect("default config must serialize")
}

/// Recursively merge `overlay` on top of `base`.
///
/// - Tables are merged key-by-key (overlay keys override base keys).
/// - Non-table values in overlay replace base values entirely.
/// - Keys in base that are not in overlay are preserved.
pub fn merge_toml(base: toml::Value, overlay: toml::Value) -> toml::Value {
    match (base, overlay) {
        (toml::Value::Table(mut base_table), toml::Value::Table(overlay_table)) => {
            for (key, overlay_val) in overlay_table {
                let merged = match base_table.remove(&key) {
                    Some(base_val) => merge_toml(base_val, overlay_val),
                    None => overlay_val,
                };
                base_table.insert(key, merged);
            }
            toml::Value::Table(base_table)
        }
        (_, overlay) => overlay,
    }
}

/// Load `gallery.toml` from a directory as a raw TOML value.
///
/// Returns `Ok(None)` if no config file exists in the directory.
/// Returns `Err` if the file exists but contains invalid TOML.
pub fn load_raw_config(dir: &Path) -> Result<Option<toml::Value>, ConfigError> {
    let config_path = dir.join(CONFIG_FILENAME);
    if !config_path.exists() {
        return Ok(None);
    }
    let content = fs::read_to_string(&config_path)?;
    let value: toml::Value = toml::from_str(&content)?;
    Ok(Some(value))
}

/// Merge an optional overlay onto a base value, then deserialize and validate.
pub fn resolve_config(
    base: toml::Value,
    overlay: Option<toml::Value>,
) -> Result<SiteConfig, ConfigError> {
    let merged = match overlay {
        Some(ov) => merge_toml(base, ov),
        None => base,
    };
    let config: SiteConfig = merged.try_into()?;
    config.validate()?;
    Ok(config)
}

/// Load config from `gallery.toml` in the site root.
///
/// Merges user values on top of stock defaults, rejects unknown keys,
/// and validates the result.
pub fn load_config(site_root: &Path) -> Result<SiteConfig, ConfigError> {
    let base = stock_defaults_value();
    let overlay = load_raw_config(site_root)?;
    resolve_config(base, overlay)
}

/// Returns a fully-commented stock `gallery.toml` with all keys and explanations.
///
/// Used by the `gen-config` CLI command.
pub fn stock_config_toml() -> &'static str {
    r##"# Gallery Discovery Configuration
# ===============================
# All settings are optional. Remove or comment out any you don't need.
# Values shown below are the defaults.
#
# Place this file in the site root as gallery.toml.
# Unknown keys will cause an error.

# ---------------------------------------------------------------------------
# Image layout
# ---------------------------------------------------------------------------
[images]
# Images root, relative to the site. Holds experts/, projects/, clients/.
dir = "images"

# Manifest written by `update-images` and read by `discover`.
manifest = "images/images.json"

# Extensions `update-images` lists (case-insensitive, no dots).
# Brute-force discovery also probes heic/HEIC; add "heic" here to list them.
extensions = ["jpg", "jpeg", "png", "gif", "webp"]

# ---------------------------------------------------------------------------
# Discovery
# ---------------------------------------------------------------------------
[discovery]
# Probes in flight at once. 1 probes strictly one after another.
# Result order never depends on this value.
concurrency = 8

# ---------------------------------------------------------------------------
# HTTP (only used with --base-url)
# ---------------------------------------------------------------------------
[http]
# Per-request timeout in seconds.
timeout_secs = 10
"##
}

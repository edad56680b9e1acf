//! Image discovery: manifest first, brute-force probing as fallback.
//!
//! ## Strategy
//!
//! ```text
//! load_images_with_fallback
//! ├── fetch images/images.json
//! │   ├── Loaded     → probe each listed file, per category, in manifest order
//! │   └── Absent / Unavailable / Malformed
//! │                  → load_dynamically
//! └── load_dynamically
//!     ├── experts   ← 6 fixed candidates
//!     ├── projects  ← 348 generated patterns
//!     └── clients   ← 348 generated patterns
//! ```
//!
//! The two strategies never mix. With a manifest, a category the manifest
//! omits or lists as empty resolves to an empty list; brute force is not
//! consulted for it.
//!
//! ## Probing
//!
//! A probe loads the candidate through [`SiteBackend::load_image`]. Failure is
//! a normal outcome, never an error. Probes for one category fan out over a
//! bounded rayon pool, and `collect` keeps candidate order, so the result is
//! identical for any concurrency setting.
//!
//! Each invocation owns a probe ledger: an identical path string is probed at
//! most once per invocation and its outcome reused. Nothing survives between
//! invocations.

use crate::category::Category;
use crate::config::SiteConfig;
use crate::manifest::{self, Manifest, ManifestOutcome};
use crate::patterns;
use crate::site::SiteBackend;
use rayon::prelude::*;
use serde::{Deserialize, Serialize};
use std::collections::{HashMap, HashSet};

/// Result of a single probe.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ProbeOutcome {
    pub success: bool,
    pub path: String,
}

/// Probe one candidate path. Never fails.
pub fn probe<S: SiteBackend + ?Sized>(site: &S, path: &str) -> ProbeOutcome {
    match site.load_image(path) {
        Ok(()) => {
            log::debug!("probe ok: {path}");
            ProbeOutcome {
                success: true,
                path: path.to_string(),
            }
        }
        Err(e) => {
            log::debug!("probe failed: {e}");
            ProbeOutcome {
                success: false,
                path: path.to_string(),
            }
        }
    }
}

/// Category → confirmed paths, in probe order.
///
/// Always carries exactly the three categories; lists may be empty.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ResolutionResult {
    pub experts: Vec<String>,
    pub projects: Vec<String>,
    pub clients: Vec<String>,
}

impl ResolutionResult {
    pub fn get(&self, category: Category) -> &[String] {
        match category {
            Category::Experts => &self.experts,
            Category::Projects => &self.projects,
            Category::Clients => &self.clients,
        }
    }

    fn get_mut(&mut self, category: Category) -> &mut Vec<String> {
        match category {
            Category::Experts => &mut self.experts,
            Category::Projects => &mut self.projects,
            Category::Clients => &mut self.clients,
        }
    }

    /// Total number of resolved paths.
    pub fn len(&self) -> usize {
        self.experts.len() + self.projects.len() + self.clients.len()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

/// Which strategy produced a result.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "kebab-case")]
pub enum Strategy {
    Manifest,
    BruteForce,
}

/// What happened when the manifest was requested.
///
/// Absent, unavailable and malformed manifests all lead to brute force; they
/// are kept apart here so the cause is visible.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "status", content = "reason", rename_all = "kebab-case")]
pub enum ManifestStatus {
    Loaded,
    Absent,
    Unavailable(String),
    Malformed(String),
    /// Brute force was requested directly.
    Skipped,
}

/// A discovery run: the result plus diagnostics.
#[derive(Debug, Clone, Serialize)]
pub struct Discovery {
    pub result: ResolutionResult,
    pub strategy: Strategy,
    pub manifest: ManifestStatus,
    /// Manifest keys that are not categories.
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub ignored_keys: Vec<String>,
    /// Distinct paths probed.
    pub probes: usize,
    /// Every path that loaded, in probe order.
    pub known_loaded: Vec<String>,
}

/// Discovery settings.
#[derive(Debug, Clone)]
pub struct DiscoveryOptions {
    /// Images root, relative to the site.
    pub images_dir: String,
    /// Manifest path, relative to the site.
    pub manifest_path: String,
    /// Maximum probes in flight.
    pub concurrency: usize,
}

impl DiscoveryOptions {
    /// Build options from SiteConfig values.
    pub fn from_site_config(config: &SiteConfig) -> Self {
        Self {
            images_dir: config.images.dir.clone(),
            manifest_path: config.images.manifest.clone(),
            concurrency: config.discovery.concurrency,
        }
    }
}

impl Default for DiscoveryOptions {
    fn default() -> Self {
        Self::from_site_config(&SiteConfig::default())
    }
}

/// Resolve images from the manifest, or by brute force when there is none.
///
/// Never fails; the worst case is an all-empty result.
pub fn load_images_with_fallback<S: SiteBackend + ?Sized>(
    site: &S,
    options: &DiscoveryOptions,
) -> Discovery {
    match manifest::fetch_manifest(site, &options.manifest_path) {
        ManifestOutcome::Loaded {
            manifest,
            ignored_keys,
        } => {
            log::info!(
                "Manifest {} lists {} files",
                options.manifest_path,
                manifest.len()
            );
            for key in &ignored_keys {
                log::warn!("Ignoring unknown manifest category '{key}'");
            }
            load_from_manifest(site, options, &manifest, ignored_keys)
        }
        ManifestOutcome::Absent => {
            log::info!(
                "Manifest {} not found, trying dynamic loading",
                options.manifest_path
            );
            brute_force(site, options, ManifestStatus::Absent)
        }
        ManifestOutcome::Unavailable(reason) => {
            log::warn!(
                "Manifest {} unavailable ({reason}), trying dynamic loading",
                options.manifest_path
            );
            brute_force(site, options, ManifestStatus::Unavailable(reason))
        }
        ManifestOutcome::Malformed(reason) => {
            log::warn!(
                "Manifest {} is malformed ({reason}), trying dynamic loading",
                options.manifest_path
            );
            brute_force(site, options, ManifestStatus::Malformed(reason))
        }
    }
}

/// Resolve images by probing generated candidates, ignoring any manifest.
pub fn load_dynamically<S: SiteBackend + ?Sized>(
    site: &S,
    options: &DiscoveryOptions,
) -> Discovery {
    brute_force(site, options, ManifestStatus::Skipped)
}

/// Probe the files a manifest lists.
pub fn load_from_manifest<S: SiteBackend + ?Sized>(
    site: &S,
    options: &DiscoveryOptions,
    manifest: &Manifest,
    ignored_keys: Vec<String>,
) -> Discovery {
    let mut session = ProbeSession::new(site, options.concurrency);
    let mut result = ResolutionResult::default();

    for (category, files) in manifest.entries() {
        let candidates: Vec<String> = files
            .iter()
            .map(|f| category.candidate_path(&options.images_dir, f))
            .collect();
        result
            .get_mut(*category)
            .extend(session.probe_all(&candidates));
    }

    session.finish(result, Strategy::Manifest, ManifestStatus::Loaded, ignored_keys)
}

fn brute_force<S: SiteBackend + ?Sized>(
    site: &S,
    options: &DiscoveryOptions,
    status: ManifestStatus,
) -> Discovery {
    let mut session = ProbeSession::new(site, options.concurrency);
    let mut result = ResolutionResult::default();
    let generated = patterns::generate_patterns();

    for category in Category::ALL {
        let filenames = match category {
            Category::Experts => patterns::expert_candidates(),
            Category::Projects | Category::Clients => generated.clone(),
        };
        let candidates: Vec<String> = filenames
            .iter()
            .map(|f| category.candidate_path(&options.images_dir, f))
            .collect();
        *result.get_mut(category) = session.probe_all(&candidates);
    }

    session.finish(result, Strategy::BruteForce, status, Vec::new())
}

/// Per-invocation probing state.
struct ProbeSession<'a, S: SiteBackend + ?Sized> {
    site: &'a S,
    /// `None` for sequential probing, or when the pool could not be built.
    pool: Option<rayon::ThreadPool>,
    ledger: HashMap<String, bool>,
    known_loaded: Vec<String>,
}

impl<'a, S: SiteBackend + ?Sized> ProbeSession<'a, S> {
    fn new(site: &'a S, concurrency: usize) -> Self {
        let pool = if concurrency <= 1 {
            None
        } else {
            match rayon::ThreadPoolBuilder::new()
                .num_threads(concurrency)
                .thread_name(|i| format!("probe-{i}"))
                .build()
            {
                Ok(pool) => Some(pool),
                Err(e) => {
                    log::warn!("Could not start probe pool ({e}), probing sequentially");
                    None
                }
            }
        };
        Self {
            site,
            pool,
            ledger: HashMap::new(),
            known_loaded: Vec::new(),
        }
    }

    /// Probe `candidates` and return those that loaded, in candidate order.
    fn probe_all(&mut self, candidates: &[String]) -> Vec<String> {
        let mut seen = HashSet::new();
        let pending: Vec<&String> = candidates
            .iter()
            .filter(|p| !self.ledger.contains_key(*p) && seen.insert(*p))
            .collect();

        let site = self.site;
        let outcomes: Vec<ProbeOutcome> = match &self.pool {
            Some(pool) => pool.install(|| pending.par_iter().map(|p| probe(site, p)).collect()),
            None => pending.iter().map(|p| probe(site, p)).collect(),
        };

        for outcome in outcomes {
            if outcome.success {
                self.known_loaded.push(outcome.path.clone());
            }
            self.ledger.insert(outcome.path, outcome.success);
        }

        candidates
            .iter()
            .filter(|p| self.ledger.get(*p).copied().unwrap_or(false))
            .cloned()
            .collect()
    }

    fn finish(
        self,
        result: ResolutionResult,
        strategy: Strategy,
        manifest: ManifestStatus,
        ignored_keys: Vec<String>,
    ) -> Discovery {
        log::info!(
            "Resolved {} experts, {} projects, {} clients with {} probes",
            result.experts.len(),
            result.projects.len(),
            result.clients.len(),
            self.ledger.len()
        );
        Discovery {
            result,
            strategy,
            manifest,
            ignored_keys,
            probes: self.ledger.len(),
            known_loaded: self.known_loaded,
        }
    }
}

//! CLI output formatting for all commands.
//!
//! Each command has a `format_*` function (returns `Vec<String>`) for
//! testability and a `print_*` wrapper that writes to stdout. Format
//! functions are pure and do no I/O.
//!
//! # Output Format
//!
//! ## Discover
//!
//! ```text
//! Manifest: images/images.json (loaded)
//! Experts (1)
//!     001 images/experts/alex.jpg
//! Projects (2)
//!     001 images/projects/rodillos.jpg
//!     002 images/projects/tazas.png
//! Clients (0)
//!
//! Resolved 3 images with 3 probes (manifest)
//! ```
//!
//! ## Update images
//!
//! ```text
//! Image list updated: site/images/images.json
//! Found 1 expert images
//! Found 2 project images
//! Found 0 client images
//! ```

use crate::category::Category;
use crate::discovery::{Discovery, ManifestStatus, Strategy};
use crate::update::UpdateReport;

/// Format a 1-based positional index as 3-digit zero-padded.
fn format_index(pos: usize) -> String {
    format!("{:0>3}", pos)
}

/// Return indentation string: 4 spaces per depth level.
fn indent(depth: usize) -> String {
    "    ".repeat(depth)
}

/// Section heading: `experts` → `Experts`.
fn heading(category: Category) -> String {
    let name = category.as_str();
    let mut chars = name.chars();
    match chars.next() {
        Some(first) => first.to_uppercase().chain(chars).collect(),
        None => String::new(),
    }
}

fn manifest_line(discovery: &Discovery, manifest_path: &str) -> String {
    let detail = match &discovery.manifest {
        ManifestStatus::Loaded => "loaded".to_string(),
        ManifestStatus::Absent => "not found, probed common names".to_string(),
        ManifestStatus::Unavailable(reason) => {
            format!("unavailable ({reason}), probed common names")
        }
        ManifestStatus::Malformed(reason) => {
            format!("malformed ({reason}), probed common names")
        }
        ManifestStatus::Skipped => "skipped, probed common names".to_string(),
    };
    format!("Manifest: {manifest_path} ({detail})")
}

// ============================================================================
// Discover
// ============================================================================

/// Format a discovery run: manifest status, resolved paths per category, totals.
pub fn format_discovery_output(discovery: &Discovery, manifest_path: &str) -> Vec<String> {
    let mut lines = vec![manifest_line(discovery, manifest_path)];

    if !discovery.ignored_keys.is_empty() {
        lines.push(format!(
            "{}Ignored keys: {}",
            indent(1),
            discovery.ignored_keys.join(", ")
        ));
    }

    for category in Category::ALL {
        let paths = discovery.result.get(category);
        lines.push(format!("{} ({})", heading(category), paths.len()));
        for (i, path) in paths.iter().enumerate() {
            lines.push(format!("{}{} {}", indent(1), format_index(i + 1), path));
        }
    }

    let strategy = match discovery.strategy {
        Strategy::Manifest => "manifest",
        Strategy::BruteForce => "brute force",
    };
    lines.push(String::new());
    lines.push(format!(
        "Resolved {} images with {} probes ({strategy})",
        discovery.result.len(),
        discovery.probes
    ));
    lines
}

pub fn print_discovery_output(discovery: &Discovery, manifest_path: &str) {
    for line in format_discovery_output(discovery, manifest_path) {
        println!("{}", line);
    }
}

// ============================================================================
// Update images
// ============================================================================

/// Format the manifest writer's summary, one count per category.
pub fn format_update_output(report: &UpdateReport) -> Vec<String> {
    let mut lines = vec![format!("Image list updated: {}", report.path.display())];
    for category in Category::ALL {
        let singular = category.as_str().trim_end_matches('s');
        lines.push(format!(
            "Found {} {} images",
            report.manifest.files(category).len(),
            singular
        ));
    }
    if !report.drift.is_empty() {
        let exts: Vec<String> = report.drift.iter().map(|e| format!(".{e}")).collect();
        lines.push(format!(
            "Note: discovery also probes {} files; add them to images.extensions to list them",
            exts.join(", ")
        ));
    }
    lines
}

pub fn print_update_output(report: &UpdateReport) {
    for line in format_update_output(report) {
        println!("{}", line);
    }
}

// ============================================================================
// Patterns
// ============================================================================

/// Format the brute-force candidate list with positional indices.
pub fn format_patterns(patterns: &[String]) -> Vec<String> {
    patterns
        .iter()
        .enumerate()
        .map(|(i, p)| format!("{} {}", format_index(i + 1), p))
        .collect()
}

pub fn print_patterns(patterns: &[String]) {
    for line in format_patterns(patterns) {
        println!("{}", line);
    }
}

//! # Gallery Discovery
//!
//! Finds the images a static landing page should show in its experts,
//! projects and clients sections, without a server-side directory listing.
//!
//! # Architecture: Manifest First, Probe Second
//!
//! ```text
//! 1. Manifest    images/images.json  →  load each listed file, keep what decodes
//! 2. Brute force no usable manifest  →  probe well-known names, keep what decodes
//! ```
//!
//! The manifest is produced offline by `update-images`, which walks the three
//! category directories and writes the sorted file lists. When it is missing,
//! unreadable or malformed, discovery falls back to probing a fixed set of
//! candidate filenames (`1.jpg` … `20.HEIC`, `proyecto-1.jpg`, `cliente-2.png`, …).
//! Either way a path is only reported after the site served it and it decoded
//! as an image.
//!
//! # Module Map
//!
//! | Module | Role |
//! |--------|------|
//! | [`category`] | The three gallery categories and their directory layout |
//! | [`patterns`] | Candidate filenames for brute-force probing |
//! | [`manifest`] | `images.json` model, parsing, and fetch outcomes |
//! | [`site`] | Site access: local directory or HTTP origin, plus image decoding |
//! | [`discovery`] | Manifest-first resolution with bounded parallel probing |
//! | [`update`] | Manifest producer: directory scan → `images.json` |
//! | [`gallery`] | Project cards and client logos built from a resolution result |
//! | [`render`] | Maud HTML fragments for the gallery sections |
//! | [`config`] | `gallery.toml` loading, merging over stock defaults, validation |
//! | [`output`] | CLI output formatting |
//!
//! # Design Decisions
//!
//! ## Probes Are Loads
//!
//! A candidate counts as present only when its bytes decode as an image. A
//! file that exists but is corrupt, or in a format no decoder handles, is
//! treated the same as a missing one. No error escapes discovery: the worst
//! case is an empty result.
//!
//! ## Order Is Candidate Order
//!
//! Probes run on a bounded rayon pool, but results are collected in the order
//! candidates were generated (manifest order, or pattern order), never in
//! completion order. Output is identical for any concurrency setting.
//!
//! ## One Probe Per Path
//!
//! Within one discovery run every distinct path is requested at most once.
//! A manifest listing the same file twice yields two result entries from a
//! single request.

pub mod category;
pub mod config;
pub mod discovery;
pub mod gallery;
pub mod manifest;
pub mod output;
pub mod patterns;
pub mod render;
pub mod site;
pub mod update;

#[cfg(test)]
pub(crate) mod test_helpers;

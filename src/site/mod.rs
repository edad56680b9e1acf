//! Access to the site being discovered: a local directory or a deployed URL.
//!
//! | Operation | Filesystem ([`FsSite`]) | HTTP ([`HttpSite`]) |
//! |---|---|---|
//! | **fetch** | `std::fs::read` under the site root | blocking `GET {base_url}/{path}` |
//! | **load_image** | fetch + `image` decode | fetch + `image` decode |
//!
//! The module is split into:
//! - **Backend**: [`SiteBackend`] trait, [`FetchError`], shared decoder check
//! - **Filesystem**: [`FsSite`]
//! - **HTTP**: [`HttpSite`]

pub mod backend;
mod fs;
mod http;

pub use backend::{FetchError, SiteBackend, decode_image};
pub use fs::FsSite;
pub use http::HttpSite;

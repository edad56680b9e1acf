//! Site backed by a deployed URL.
//!
//! Probes a live site the way a visitor's browser would: one `GET` per
//! resource, no retries, a body that must decode.

use super::backend::{FetchError, SiteBackend, decode_image};
use std::time::Duration;

/// Serves site-relative paths from `{base_url}/{path}`.
pub struct HttpSite {
    base_url: String,
    client: reqwest::blocking::Client,
}

impl HttpSite {
    /// Create a site client with a per-request timeout.
    ///
    /// # Errors
    ///
    /// Returns an error when the HTTP client cannot be initialized.
    pub fn new(base_url: &str, timeout: Duration) -> Result<Self, FetchError> {
        let client = reqwest::blocking::Client::builder()
            .connect_timeout(timeout)
            .timeout(timeout)
            .build()
            .map_err(|e| FetchError::Transport(e.to_string()))?;

        Ok(Self {
            base_url: base_url.trim_end_matches('/').to_string(),
            client,
        })
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    fn url(&self, path: &str) -> String {
        format!("{}/{}", self.base_url, path.trim_start_matches('/'))
    }
}

impl SiteBackend for HttpSite {
    fn fetch(&self, path: &str) -> Result<Vec<u8>, FetchError> {
        let response = self
            .client
            .get(self.url(path))
            .send()
            .map_err(|e| FetchError::Transport(e.to_string()))?;

        let status = response.status();
        if status == reqwest::StatusCode::NOT_FOUND {
            return Err(FetchError::NotFound(path.to_string()));
        }
        if !status.is_success() {
            return Err(FetchError::Status {
                path: path.to_string(),
                status: status.as_u16(),
            });
        }

        let body = response
            .bytes()
            .map_err(|e| FetchError::Transport(e.to_string()))?;
        Ok(body.to_vec())
    }

    fn load_image(&self, path: &str) -> Result<(), FetchError> {
        let bytes = self.fetch(path)?;
        decode_image(path, &bytes)
    }
}

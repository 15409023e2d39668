//! Base endpoint parsing
//!
//! The caller's string is kept verbatim: `url::Url` normalizes (e.g. appends a
//! trailing slash to a bare host), and resource URLs are built from the string
//! the caller gave us.

use crate::error::NetworkApiError;
use std::fmt;
use url::Url;

/// Validated base URL of the Network API
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Endpoint {
    raw: String,
    url: Url,
}

impl Endpoint {
    /// Parse an absolute endpoint URL (scheme and host required)
    pub fn parse(endpoint: &str) -> Result<Self, NetworkApiError> {
        let invalid = |reason: String| NetworkApiError::InvalidEndpoint {
            endpoint: endpoint.to_string(),
            reason,
        };

        let url = Url::parse(endpoint).map_err(|e| invalid(e.to_string()))?;
        if url.cannot_be_a_base() || !url.has_host() {
            return Err(invalid("URL has no host".to_string()));
        }

        Ok(Self {
            raw: endpoint.to_string(),
            url,
        })
    }

    /// The endpoint exactly as supplied
    pub fn as_str(&self) -> &str {
        &self.raw
    }

    /// The parsed URL
    pub fn url(&self) -> &Url {
        &self.url
    }

    /// Build a full URL from a resource path
    pub fn join(&self, path: &str) -> String {
        format!("{}{}", self.raw.trim_end_matches('/'), path)
    }
}

impl fmt::Display for Endpoint {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.raw)
    }
}

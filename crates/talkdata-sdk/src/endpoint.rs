use reqwest::Url;
use std::fmt;

use crate::{Error, Result};

pub const DEFAULT_API_BASE: &str = "/api";
pub const DEFAULT_ORIGIN: &str = "http://localhost:5000";

/// Absolute base URL of the backend API, without a trailing slash.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ApiBase {
    url: String,
}

impl ApiBase {
    /// Resolve a configured base against an origin.
    ///
    /// A base starting with `/` is a path on `origin`; anything else must be an
    /// absolute http(s) URL. An empty base means [`DEFAULT_API_BASE`].
    pub fn resolve(base: &str, origin: &str) -> Result<Self> {
        let base = match base.trim() {
            "" => DEFAULT_API_BASE,
            trimmed => trimmed,
        };

        let joined = if base.starts_with('/') {
            format!("{}{}", origin.trim().trim_end_matches('/'), base)
        } else {
            base.to_string()
        };

        let url =
            Url::parse(&joined).map_err(|e| Error::InvalidUrl(format!("{}: {}", joined, e)))?;
        if !matches!(url.scheme(), "http" | "https") {
            return Err(Error::InvalidUrl(format!(
                "{}: scheme must be http or https",
                joined
            )));
        }

        Ok(Self {
            url: joined.trim_end_matches('/').to_string(),
        })
    }

    pub fn as_str(&self) -> &str {
        &self.url
    }

    pub fn endpoint(&self, path: &str) -> String {
        format!("{}/{}", self.url, path.trim_start_matches('/'))
    }
}

impl Default for ApiBase {
    fn default() -> Self {
        Self {
            url: format!("{}{}", DEFAULT_ORIGIN, DEFAULT_API_BASE),
        }
    }
}

impl fmt::Display for ApiBase {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.url)
    }
}

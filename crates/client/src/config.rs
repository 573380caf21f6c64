//! Request client configuration.
//!
//! Built once at startup and never mutated afterwards; the client keeps it
//! behind an `Arc`.

use reqwest::Url;
use reqwest::header::{CONTENT_TYPE, HeaderMap, HeaderValue};

use crate::error::ClientError;

/// Base endpoint used when nothing else is configured.
pub const DEFAULT_BASE_URL: &str = "http://localhost:8000";

/// Environment variable overriding the base endpoint.
pub const API_URL_ENV: &str = "ORDERDESK_API_URL";

#[derive(Debug, Clone)]
pub struct ClientConfig {
    /// Origin every relative path is resolved against, without a trailing `/`.
    base_url: String,
    /// Applied to every request unless the request sets the header itself.
    default_headers: HeaderMap,
}

impl ClientConfig {
    pub fn new(base_url: impl Into<String>) -> Result<Self, ClientError> {
        let base_url = base_url.into().trim_end_matches('/').to_string();
        Url::parse(&base_url).map_err(|e| ClientError::InvalidUrl(format!("{base_url}: {e}")))?;

        Ok(Self {
            base_url,
            default_headers: json_headers(),
        })
    }

    /// Base endpoint from `ORDERDESK_API_URL`, or [`DEFAULT_BASE_URL`].
    pub fn from_env() -> Result<Self, ClientError> {
        match std::env::var(API_URL_ENV) {
            Ok(url) if !url.trim().is_empty() => Self::new(url.trim()),
            _ => Ok(Self::default()),
        }
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    pub fn default_headers(&self) -> &HeaderMap {
        &self.default_headers
    }

    /// Resolve a request path against the base endpoint.
    ///
    /// Absolute URLs (`scheme://...` or protocol-relative `//...`) are used
    /// as-is.
    pub fn url_for(&self, path: &str) -> Result<Url, ClientError> {
        let raw = if is_absolute_url(path) {
            path.to_string()
        } else if path.is_empty() {
            self.base_url.clone()
        } else {
            format!("{}/{}", self.base_url, path.trim_start_matches('/'))
        };

        Url::parse(&raw).map_err(|e| ClientError::InvalidUrl(format!("{raw}: {e}")))
    }
}

impl Default for ClientConfig {
    fn default() -> Self {
        Self {
            base_url: DEFAULT_BASE_URL.to_string(),
            default_headers: json_headers(),
        }
    }
}

fn json_headers() -> HeaderMap {
    let mut headers = HeaderMap::new();
    headers.insert(CONTENT_TYPE, HeaderValue::from_static("application/json"));
    headers
}

fn is_absolute_url(path: &str) -> bool {
    if path.starts_with("//") {
        return true;
    }

    let Some((scheme, rest)) = path.split_once(':') else {
        return false;
    };

    let mut chars = scheme.chars();
    let valid_scheme = chars.next().is_some_and(|c| c.is_ascii_alphabetic())
        && chars.all(|c| c.is_ascii_alphanumeric() || matches!(c, '+' | '-' | '.'));

    valid_scheme && rest.starts_with("//")
}

//! Outgoing request configuration
//!
//! The record the resolver operates on. Only the fields relevant to proxy
//! routing are modeled; `proxy` is filled in by the resolver when a proxy
//! applies and left untouched otherwise.

use serde::{Deserialize, Serialize};

/// Configuration for a single outgoing HTTP request.
///
/// Compatible with the option records generic HTTP client libraries accept:
/// `url` names the target, and `proxy` (when set) names the proxy host the
/// request should be routed through.
///
/// # Example
///
/// ```
/// use reqproxy::RequestOptions;
///
/// let opts = RequestOptions::new("https://example.com/data");
/// assert!(opts.proxy.is_none());
/// ```
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct RequestOptions {
    /// Target URL for the request.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub url: Option<String>,

    /// Proxy host the request should be routed through.
    ///
    /// Set (or overwritten) by the resolver when proxy settings indicate the
    /// target should be proxied.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub proxy: Option<String>,
}

impl RequestOptions {
    /// Create request options for the given target URL.
    #[must_use]
    pub fn new<T: Into<String>>(url: T) -> Self {
        Self {
            url: Some(url.into()),
            proxy: None,
        }
    }
}

//! Per-call proxy override configuration
//!
//! Builder pattern methods for configuring scheme-specific proxy hosts
//! and no-proxy exclusion rules on a per-request basis.

use serde::{Deserialize, Serialize};

/// Proxy settings supplied by the caller for a single request.
///
/// Any field left unset (or set to an empty string) falls through to the
/// process environment. The scheme-specific `http`/`https` fields take
/// precedence over the legacy single `host` field.
///
/// # Example
///
/// ```
/// use reqproxy::ProxySettings;
///
/// let settings = ProxySettings::new()
///     .https("secure-proxy.internal:3128")
///     .http("proxy.internal:3128")
///     .no_proxy("localhost,127.0.0.1,registry.internal");
/// ```
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ProxySettings {
    /// Proxy host applied to any scheme when no scheme-specific field is set.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub host: Option<String>,

    /// Proxy host for `http` targets.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub http: Option<String>,

    /// Proxy host for `https` targets.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub https: Option<String>,

    /// Comma separated list of hostnames to exclude from proxying.
    #[serde(
        rename = "noproxy",
        default,
        skip_serializing_if = "Option::is_none"
    )]
    pub no_proxy: Option<String>,
}

impl ProxySettings {
    /// Create empty settings; every field falls through to the environment.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the scheme-agnostic proxy host.
    #[must_use]
    pub fn host<T: Into<String>>(mut self, host: T) -> Self {
        self.host = Some(host.into());
        self
    }

    /// Set the proxy host for `http` targets.
    #[must_use]
    pub fn http<T: Into<String>>(mut self, host: T) -> Self {
        self.http = Some(host.into());
        self
    }

    /// Set the proxy host for `https` targets.
    #[must_use]
    pub fn https<T: Into<String>>(mut self, host: T) -> Self {
        self.https = Some(host.into());
        self
    }

    /// Set the exclusion list for this request.
    ///
    /// The argument should be a comma separated list of hostnames to be
    /// excluded from proxying. Takes precedence over the `no_proxy`/`NO_PROXY`
    /// environment variables.
    #[must_use]
    pub fn no_proxy<T: Into<String>>(mut self, exclusions: T) -> Self {
        self.no_proxy = Some(exclusions.into());
        self
    }
}

/// Per-call proxy override passed alongside [`RequestOptions`].
///
/// Callers pass `None` to use environment defaults, [`ProxyOverride::Disabled`]
/// to switch proxying off for the request regardless of the environment, or
/// [`ProxyOverride::Settings`] to supply explicit hosts and exclusions.
///
/// [`RequestOptions`]: crate::RequestOptions
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ProxyOverride {
    /// Disable proxying for this request, regardless of environment settings.
    Disabled,
    /// Use these settings, falling through to the environment where unset.
    Settings(ProxySettings),
}

impl From<ProxySettings> for ProxyOverride {
    fn from(settings: ProxySettings) -> Self {
        ProxyOverride::Settings(settings)
    }
}

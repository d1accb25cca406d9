//! No-proxy exclusion lists
//!
//! Hostnames listed here bypass proxying even when a proxy host is otherwise
//! configured. Matching is exact string equality against the comma-split
//! tokens: no trimming, no case folding, no subdomain expansion.

use crate::env::ProxyEnv;

/// Exclusion list applied when neither the caller nor the environment
/// supplies one.
pub const DEFAULT_NO_PROXY: &str = "localhost,127.0.0.1";

/// A configuration for filtering out requests that shouldn't be proxied.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NoProxy {
    inner: String,
}

impl NoProxy {
    /// Build an exclusion list from a comma separated hostname string, or
    /// `None` if the string is empty.
    #[must_use]
    pub fn from_string(no_proxy_list: &str) -> Option<Self> {
        if no_proxy_list.is_empty() {
            return None;
        }

        Some(NoProxy {
            inner: no_proxy_list.to_owned(),
        })
    }

    /// Build an exclusion list from the `no_proxy`/`NO_PROXY` environment
    /// variables, or `None` if neither is set to a non-empty value.
    #[must_use]
    pub fn from_env(env: &dyn ProxyEnv) -> Option<Self> {
        env.var_pair("no_proxy", "NO_PROXY")
            .and_then(|raw| Self::from_string(&raw))
    }

    /// The built-in default list, [`DEFAULT_NO_PROXY`].
    #[must_use]
    pub fn default_hosts() -> Self {
        NoProxy {
            inner: DEFAULT_NO_PROXY.to_owned(),
        }
    }

    /// Check whether `host` is excluded from proxying by this list.
    ///
    /// `host` must equal one of the comma-split tokens exactly; entries are
    /// compared case-sensitively and without trimming.
    #[must_use]
    pub fn matches(&self, host: &str) -> bool {
        self.inner.split(',').any(|token| token == host)
    }

    /// The raw exclusion list string.
    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.inner
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn empty_string_is_no_list() {
        assert!(NoProxy::from_string("").is_none());
    }

    #[test]
    fn matches_whole_tokens_only() {
        let list = NoProxy::from_string("bar,foo").expect("non-empty list");
        assert!(list.matches("foo"));
        assert!(list.matches("bar"));
        assert!(!list.matches("foo.com"));
        assert!(!list.matches("ba"));
    }

    #[test]
    fn no_trimming_or_case_folding() {
        let list = NoProxy::from_string("foo, bar,Baz").expect("non-empty list");
        assert!(!list.matches("bar"));
        assert!(list.matches(" bar"));
        assert!(!list.matches("baz"));
        assert!(list.matches("Baz"));
    }

    #[test]
    fn no_subdomain_or_wildcard_expansion() {
        let list = NoProxy::from_string("*,example.com").expect("non-empty list");
        assert!(!list.matches("www.example.com"));
        assert!(!list.matches("anything"));
        assert!(list.matches("*"));
        assert!(list.matches("example.com"));
    }

    #[test]
    fn default_hosts_cover_loopback_names() {
        let list = NoProxy::default_hosts();
        assert!(list.matches("localhost"));
        assert!(list.matches("127.0.0.1"));
        assert!(!list.matches("example.com"));
        assert_eq!(list.as_str(), DEFAULT_NO_PROXY);
    }
}

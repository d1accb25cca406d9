//! Environment variable access for proxy configuration
//!
//! Proxy conventions are read fresh from the environment on every resolution
//! so runtime changes are always observed. Nothing is cached.

/// Source of proxy-related environment variables.
///
/// The resolver reads through this trait rather than `std::env` directly, so
/// tests can substitute a fixed map instead of mutating process state.
pub trait ProxyEnv {
    /// Look up a single environment variable by exact name.
    fn var(&self, key: &str) -> Option<String>;

    /// Look up the conventional lowercase/uppercase pair for a proxy
    /// variable, preferring the lowercase spelling.
    ///
    /// Variables set to the empty string count as unset.
    fn var_pair(&self, lower: &str, upper: &str) -> Option<String> {
        self.var(lower)
            .filter(|value| !value.is_empty())
            .or_else(|| self.var(upper).filter(|value| !value.is_empty()))
    }
}

/// [`ProxyEnv`] backed by the process environment.
#[derive(Debug, Clone, Copy, Default)]
pub struct ProcessEnv;

impl ProxyEnv for ProcessEnv {
    fn var(&self, key: &str) -> Option<String> {
        std::env::var(key).ok()
    }
}

/// Snapshot of the proxy environment variables, computed fresh per call.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct EnvProxy {
    /// `http_proxy` / `HTTP_PROXY`.
    pub http: Option<String>,
    /// `https_proxy` / `HTTPS_PROXY`.
    pub https: Option<String>,
    /// `no_proxy` / `NO_PROXY`.
    pub no_proxy: Option<String>,
}

impl EnvProxy {
    /// Read the current proxy variables from the given source.
    #[must_use]
    pub fn read(env: &dyn ProxyEnv) -> Self {
        EnvProxy {
            http: env.var_pair("http_proxy", "HTTP_PROXY"),
            https: env.var_pair("https_proxy", "HTTPS_PROXY"),
            no_proxy: env.var_pair("no_proxy", "NO_PROXY"),
        }
    }

    /// Read the current proxy variables from the process environment.
    #[must_use]
    pub fn from_process() -> Self {
        Self::read(&ProcessEnv)
    }
}

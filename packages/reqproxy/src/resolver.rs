//! The proxy resolution decision
//!
//! Reconciles the per-call override with the environment conventions and the
//! exclusion list, then records the chosen proxy host on the request options.
//! Resolution never fails: malformed input degrades to "no proxy applied" so
//! proxy handling can never be the cause of a request failure.

use url::Url;

use crate::env::{EnvProxy, ProcessEnv, ProxyEnv};
use crate::no_proxy::NoProxy;
use crate::options::RequestOptions;
use crate::settings::{ProxyOverride, ProxySettings};

/// Resolve proxy routing for `options` using the process environment.
///
/// An absent `options` is treated as an empty record. The returned options
/// carry a `proxy` host when one applies and are otherwise unchanged.
///
/// # Example
///
/// ```
/// use reqproxy::{ProxyOverride, RequestOptions};
///
/// let opts = reqproxy::resolve(
///     Some(RequestOptions::new("https://example.com")),
///     Some(&ProxyOverride::Disabled),
/// );
/// assert!(opts.proxy.is_none());
/// ```
#[must_use]
pub fn resolve(
    options: Option<RequestOptions>,
    proxy: Option<&ProxyOverride>,
) -> RequestOptions {
    resolve_with_env(&ProcessEnv, options, proxy)
}

/// Like [`resolve`], reading environment variables from `env`.
#[must_use]
pub fn resolve_with_env(
    env: &dyn ProxyEnv,
    options: Option<RequestOptions>,
    proxy: Option<&ProxyOverride>,
) -> RequestOptions {
    let mut options = options.unwrap_or_default();
    apply_with_env(env, &mut options, proxy);
    options
}

/// Apply proxy resolution to `options` in place, using the process
/// environment.
pub fn apply(options: &mut RequestOptions, proxy: Option<&ProxyOverride>) {
    apply_with_env(&ProcessEnv, options, proxy);
}

/// Apply proxy resolution to `options` in place, reading environment
/// variables from `env`.
///
/// Sets (or overwrites) `options.proxy` when a proxy host applies; leaves
/// the options untouched when the URL is missing or unparsable, when the
/// override disables proxying, when no candidate host is configured, or when
/// the target hostname is on the exclusion list.
pub fn apply_with_env(
    env: &dyn ProxyEnv,
    options: &mut RequestOptions,
    proxy: Option<&ProxyOverride>,
) {
    let Some((scheme, host)) = options.url.as_deref().and_then(parse_target) else {
        return;
    };

    let settings = match proxy {
        Some(ProxyOverride::Disabled) => {
            tracing::debug!(target: "reqproxy::resolver", host = %host, "proxying explicitly disabled");
            return;
        }
        Some(ProxyOverride::Settings(settings)) => Some(settings),
        None => None,
    };

    let env_proxy = EnvProxy::read(env);
    let Some(candidate) = candidate_host(scheme, settings, &env_proxy) else {
        return;
    };

    let no_proxy = settings
        .and_then(|s| s.no_proxy.as_deref())
        .and_then(NoProxy::from_string)
        .or_else(|| {
            env_proxy
                .no_proxy
                .as_deref()
                .and_then(NoProxy::from_string)
        })
        .unwrap_or_else(NoProxy::default_hosts);

    if no_proxy.matches(&host) {
        tracing::debug!(
            target: "reqproxy::resolver",
            host = %host,
            no_proxy = no_proxy.as_str(),
            "host excluded from proxying"
        );
        return;
    }

    tracing::debug!(target: "reqproxy::resolver", host = %host, proxy = %candidate, "routing request through proxy");
    options.proxy = Some(candidate);
}

#[derive(Clone, Copy)]
enum TargetScheme {
    Http,
    Https,
}

/// Extract the scheme and hostname from the target URL.
///
/// `None` for unparsable URLs and URLs without a hostname. Schemes other
/// than `https` take the `http` candidate chain.
fn parse_target(raw: &str) -> Option<(TargetScheme, String)> {
    let url = Url::parse(raw).ok()?;
    let host = url.host_str()?.to_owned();
    let scheme = if url.scheme() == "https" {
        TargetScheme::Https
    } else {
        TargetScheme::Http
    };
    Some((scheme, host))
}

/// Pick the candidate proxy host for the target scheme.
///
/// Override fields win over the environment; within the override the
/// scheme-specific field wins over the legacy `host` field. For `https`
/// targets the `http` override and environment values serve as fallbacks.
fn candidate_host(
    scheme: TargetScheme,
    settings: Option<&ProxySettings>,
    env_proxy: &EnvProxy,
) -> Option<String> {
    let override_https = settings.and_then(|s| nonempty(s.https.as_deref()));
    let override_http = settings.and_then(|s| nonempty(s.http.as_deref()));
    let override_host = settings.and_then(|s| nonempty(s.host.as_deref()));

    match scheme {
        TargetScheme::Https => override_https
            .or(override_http)
            .or(override_host)
            .map(str::to_owned)
            .or_else(|| env_proxy.https.clone())
            .or_else(|| env_proxy.http.clone()),
        TargetScheme::Http => override_http
            .or(override_host)
            .map(str::to_owned)
            .or_else(|| env_proxy.http.clone()),
    }
}

fn nonempty(value: Option<&str>) -> Option<&str> {
    value.filter(|v| !v.is_empty())
}

//! # reqproxy
//!
//! Proxy resolution for outgoing HTTP requests. Given a request configuration
//! and an optional per-call override, decide whether the request should be
//! routed through a proxy and which proxy host to use.
//!
//! The decision reconciles three sources, in precedence order:
//!
//! - the caller's [`ProxyOverride`] (explicit settings, or disabling proxying
//!   outright for the request),
//! - the `http_proxy`/`HTTP_PROXY` and `https_proxy`/`HTTPS_PROXY`
//!   environment conventions, re-read on every call,
//! - a no-proxy exclusion list (override field, `no_proxy`/`NO_PROXY`, or the
//!   built-in `localhost,127.0.0.1` default) matched against the target
//!   hostname.
//!
//! This crate only decides *whether and where* to proxy. It performs no
//! network I/O and never fails: malformed URLs simply skip proxying.
//!
//! ## Usage
//!
//! ```
//! use reqproxy::{ProxySettings, RequestOptions};
//!
//! let mut opts = RequestOptions::new("https://api.example.com/v1/models");
//! let settings = ProxySettings::new()
//!     .https("secure-proxy.internal:3128")
//!     .no_proxy("localhost,127.0.0.1,api.internal");
//! reqproxy::apply(&mut opts, Some(&settings.into()));
//! assert_eq!(opts.proxy.as_deref(), Some("secure-proxy.internal:3128"));
//! ```

#![deny(unsafe_code)]
#![warn(clippy::all)]

pub mod env;
pub mod no_proxy;
pub mod options;
pub mod resolver;
pub mod settings;

pub use env::{EnvProxy, ProcessEnv, ProxyEnv};
pub use no_proxy::{DEFAULT_NO_PROXY, NoProxy};
pub use options::RequestOptions;
pub use resolver::{apply, apply_with_env, resolve, resolve_with_env};
pub use settings::{ProxyOverride, ProxySettings};

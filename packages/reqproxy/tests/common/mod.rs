#![allow(dead_code)]

use std::collections::HashMap;

use reqproxy::ProxyEnv;

/// Map-backed environment source so tests never mutate process state.
#[derive(Debug, Clone, Default)]
pub struct FakeEnv {
    vars: HashMap<String, String>,
}

impl FakeEnv {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn set(mut self, key: &str, value: &str) -> Self {
        self.vars.insert(key.to_owned(), value.to_owned());
        self
    }

    /// Every proxy variable set, upper and lowercase spellings with distinct
    /// values so precedence is observable.
    pub fn all_set() -> Self {
        Self::new()
            .set("http_proxy", "a")
            .set("HTTP_PROXY", "b")
            .set("https_proxy", "c")
            .set("HTTPS_PROXY", "d")
            .set("no_proxy", "e")
            .set("NO_PROXY", "f")
    }
}

impl ProxyEnv for FakeEnv {
    fn var(&self, key: &str) -> Option<String> {
        self.vars.get(key).cloned()
    }
}

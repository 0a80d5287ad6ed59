//! Injected environment configuration.

use std::collections::BTreeMap;

/// Variable holding the installer host's base URL.
pub const BASE_URL_VAR: &str = "BASE_URL";

/// Variable forcing local-connection behavior when set to `1`.
pub const LOCAL_CONNECTION_VAR: &str = "LOCAL_CONNECTION";

/// Read-only mapping of configuration-variable name to value.
///
/// Operations take this explicitly rather than reading the process
/// environment, so resolution stays deterministic under parallel tests.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct EnvConfig {
    vars: BTreeMap<String, String>,
}

impl EnvConfig {
    pub fn new() -> Self {
        Self::default()
    }

    /// Builds a config from `(name, value)` pairs. Later pairs win.
    pub fn from_pairs<I, K, V>(pairs: I) -> Self
    where
        I: IntoIterator<Item = (K, V)>,
        K: Into<String>,
        V: Into<String>,
    {
        pairs.into_iter().collect()
    }

    /// Snapshot of the process environment at call time.
    ///
    /// Variables whose name or value is not valid Unicode are skipped.
    pub fn from_process_env() -> Self {
        std::env::vars_os()
            .filter_map(|(k, v)| Some((k.into_string().ok()?, v.into_string().ok()?)))
            .collect()
    }

    pub fn get(&self, key: &str) -> Option<&str> {
        self.vars.get(key).map(String::as_str)
    }

    pub fn is_set(&self, key: &str) -> bool {
        self.vars.contains_key(key)
    }

    pub fn len(&self) -> usize {
        self.vars.len()
    }

    pub fn is_empty(&self) -> bool {
        self.vars.is_empty()
    }

    /// Fills keys missing from `self` with the entries of `defaults`.
    pub fn with_defaults(mut self, defaults: &EnvConfig) -> Self {
        for (k, v) in &defaults.vars {
            self.vars.entry(k.clone()).or_insert_with(|| v.clone());
        }
        self
    }

    /// Sets `key` to `value`, replacing any existing entry.
    pub fn with_override(mut self, key: impl Into<String>, value: impl Into<String>) -> Self {
        self.vars.insert(key.into(), value.into());
        self
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, &str)> {
        self.vars.iter().map(|(k, v)| (k.as_str(), v.as_str()))
    }
}

impl<K: Into<String>, V: Into<String>> FromIterator<(K, V)> for EnvConfig {
    fn from_iter<I: IntoIterator<Item = (K, V)>>(iter: I) -> Self {
        Self {
            vars: iter
                .into_iter()
                .map(|(k, v)| (k.into(), v.into()))
                .collect(),
        }
    }
}

impl From<BTreeMap<String, String>> for EnvConfig {
    fn from(vars: BTreeMap<String, String>) -> Self {
        Self { vars }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn get_and_is_set() {
        let env = EnvConfig::from_pairs([(BASE_URL_VAR, "http://localhost:3000")]);
        assert_eq!(env.get(BASE_URL_VAR), Some("http://localhost:3000"));
        assert!(env.is_set(BASE_URL_VAR));
        assert!(!env.is_set(LOCAL_CONNECTION_VAR));
        assert_eq!(env.get("MISSING"), None);
    }

    #[test]
    fn later_pairs_win() {
        let env = EnvConfig::from_pairs([("A", "1"), ("A", "2")]);
        assert_eq!(env.get("A"), Some("2"));
        assert_eq!(env.len(), 1);
    }

    #[test]
    fn defaults_fill_only_missing_keys() {
        let process = EnvConfig::from_pairs([(BASE_URL_VAR, "http://process:1")]);
        let file = EnvConfig::from_pairs([
            (BASE_URL_VAR, "http://file:2"),
            (LOCAL_CONNECTION_VAR, "1"),
        ]);
        let merged = process.with_defaults(&file);
        assert_eq!(merged.get(BASE_URL_VAR), Some("http://process:1"));
        assert_eq!(merged.get(LOCAL_CONNECTION_VAR), Some("1"));
    }

    #[test]
    fn override_replaces_existing() {
        let env = EnvConfig::from_pairs([(BASE_URL_VAR, "http://a:1")])
            .with_override(BASE_URL_VAR, "http://b:2");
        assert_eq!(env.get(BASE_URL_VAR), Some("http://b:2"));
    }

    #[test]
    fn empty_config() {
        let env = EnvConfig::new();
        assert!(env.is_empty());
        assert_eq!(env.iter().count(), 0);
    }
}

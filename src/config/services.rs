// src/config/services.rs
//! Endpoints of the external collaborators, read from the environment
//! (`.env` is loaded by the binary via dotenvy).
//!
//! - `CLASSIFIER_URL`      inference endpoint (POST, JSON)
//! - `SEARCH_URL`          news search endpoint (GET, JSON)
//! - `SEARCH_API_KEY`      optional bearer token for the search endpoint
//! - `SEARCH_MAX_RESULTS`  1..=20, default 5
//!
//! An unset or blank URL disables that adapter.

use std::env;

pub const DEFAULT_SEARCH_MAX_RESULTS: usize = 5;
const MAX_SEARCH_RESULTS_CAP: usize = 20;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ServicesConfig {
    pub classifier_url: Option<String>,
    pub search_url: Option<String>,
    pub search_api_key: Option<String>,
    pub search_max_results: usize,
}

impl Default for ServicesConfig {
    fn default() -> Self {
        Self {
            classifier_url: None,
            search_url: None,
            search_api_key: None,
            search_max_results: DEFAULT_SEARCH_MAX_RESULTS,
        }
    }
}

impl ServicesConfig {
    pub fn from_env() -> Self {
        Self::from_lookup(|k| env::var(k).ok())
    }

    /// Same as [`from_env`](Self::from_env) over an arbitrary key lookup.
    pub fn from_lookup<F>(get: F) -> Self
    where
        F: Fn(&str) -> Option<String>,
    {
        let non_blank = |k: &str| get(k).map(|v| v.trim().to_string()).filter(|v| !v.is_empty());

        let search_max_results = non_blank("SEARCH_MAX_RESULTS")
            .and_then(|v| v.parse::<usize>().ok())
            .map(|n| n.clamp(1, MAX_SEARCH_RESULTS_CAP))
            .unwrap_or(DEFAULT_SEARCH_MAX_RESULTS);

        Self {
            classifier_url: non_blank("CLASSIFIER_URL"),
            search_url: non_blank("SEARCH_URL"),
            search_api_key: non_blank("SEARCH_API_KEY"),
            search_max_results,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    fn lookup(pairs: &[(&str, &str)]) -> impl Fn(&str) -> Option<String> {
        let map: HashMap<String, String> = pairs
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect();
        move |k| map.get(k).cloned()
    }

    #[test]
    fn empty_env_disables_everything() {
        let cfg = ServicesConfig::from_lookup(lookup(&[]));
        assert_eq!(cfg.classifier_url, None);
        assert_eq!(cfg.search_url, None);
        assert_eq!(cfg.search_max_results, DEFAULT_SEARCH_MAX_RESULTS);
    }

    #[test]
    fn blank_values_count_as_unset() {
        let cfg = ServicesConfig::from_lookup(lookup(&[("CLASSIFIER_URL", "   ")]));
        assert_eq!(cfg.classifier_url, None);
    }

    #[test]
    fn max_results_is_clamped() {
        let cfg = ServicesConfig::from_lookup(lookup(&[
            ("SEARCH_URL", " http://search.local/news "),
            ("SEARCH_MAX_RESULTS", "500"),
        ]));
        assert_eq!(cfg.search_url.as_deref(), Some("http://search.local/news"));
        assert_eq!(cfg.search_max_results, 20);

        let bad = ServicesConfig::from_lookup(lookup(&[("SEARCH_MAX_RESULTS", "many")]));
        assert_eq!(bad.search_max_results, DEFAULT_SEARCH_MAX_RESULTS);
    }
}

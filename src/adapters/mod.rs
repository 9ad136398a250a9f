// src/adapters/mod.rs
//! Boundary adapters for the external collaborators (classifier model,
//! news search). The engine never calls these; the API layer does and hands
//! the normalized results over.

pub mod classifier;
pub mod search;

use std::sync::Arc;

use tracing::{info, warn};

use crate::config::ServicesConfig;

pub use classifier::{Classifier, DisabledClassifier, HttpClassifier, StaticClassifier};
pub use search::{
    Corroborator, DisabledCorroborator, HttpSearchCorroborator, RelatedArticle, StaticCorroborator,
};

pub type DynClassifier = Arc<dyn Classifier>;
pub type DynCorroborator = Arc<dyn Corroborator>;

/// Build the classifier according to config; disabled when no endpoint is set
/// or the HTTP client cannot be built.
pub fn build_classifier(cfg: &ServicesConfig) -> DynClassifier {
    let Some(url) = cfg.classifier_url.as_deref() else {
        info!("classifier endpoint not configured, using disabled classifier");
        return Arc::new(DisabledClassifier);
    };
    match HttpClassifier::new(url) {
        Ok(c) => Arc::new(c),
        Err(e) => {
            warn!(error = ?e, "failed to build classifier client");
            Arc::new(DisabledClassifier)
        }
    }
}

pub fn build_corroborator(cfg: &ServicesConfig) -> DynCorroborator {
    let Some(url) = cfg.search_url.as_deref() else {
        info!("search endpoint not configured, using disabled corroborator");
        return Arc::new(DisabledCorroborator);
    };
    match HttpSearchCorroborator::new(url, cfg.search_api_key.clone(), cfg.search_max_results) {
        Ok(c) => Arc::new(c),
        Err(e) => {
            warn!(error = ?e, "failed to build search client");
            Arc::new(DisabledCorroborator)
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn unset_endpoints_build_disabled_adapters() {
        let cfg = ServicesConfig::default();
        assert_eq!(build_classifier(&cfg).name(), "disabled");
        assert_eq!(build_corroborator(&cfg).name(), "disabled");
    }

    #[test]
    fn configured_endpoints_build_http_adapters() {
        let cfg = ServicesConfig {
            classifier_url: Some("http://localhost:8001/classify".into()),
            search_url: Some("http://localhost:8002/news".into()),
            ..ServicesConfig::default()
        };
        assert_eq!(build_classifier(&cfg).name(), "http");
        assert_eq!(build_corroborator(&cfg).name(), "http");
    }
}

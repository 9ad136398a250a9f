// src/adapters/search.rs
//! Corroboration search adapters. Any failure collapses to an empty list, so
//! the engine just sees "no sources".

use std::time::Duration;

use async_trait::async_trait;
use metrics::counter;
use serde::{Deserialize, Serialize};
use tracing::warn;

use crate::config::services::DEFAULT_SEARCH_MAX_RESULTS;

/// Queries shorter than this (after trimming) are not sent.
pub const MIN_QUERY_CHARS: usize = 5;

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RelatedArticle {
    pub title: String,
    pub link: String,
    pub source: String,
}

#[async_trait]
pub trait Corroborator: Send + Sync {
    /// Most relevant first (best effort). Empty on failure or no results.
    async fn search(&self, query: &str) -> Vec<RelatedArticle>;
    fn name(&self) -> &'static str;
}

pub fn is_searchable(query: &str) -> bool {
    query.trim().chars().count() >= MIN_QUERY_CHARS
}

/// `GET {endpoint}?q=..&max_results=N`, response is a JSON array of
/// `{title, url | link, source}` objects.
pub struct HttpSearchCorroborator {
    http: reqwest::Client,
    endpoint: String,
    api_key: Option<String>,
    max_results: usize,
}

impl HttpSearchCorroborator {
    pub fn new(
        endpoint: impl Into<String>,
        api_key: Option<String>,
        max_results: usize,
    ) -> anyhow::Result<Self> {
        let http = reqwest::Client::builder()
            .user_agent("news-verdict-engine/0.1")
            .connect_timeout(Duration::from_secs(4))
            .timeout(Duration::from_secs(10))
            .build()?;
        Ok(Self {
            http,
            endpoint: endpoint.into(),
            api_key,
            max_results: max_results.max(1),
        })
    }

    async fn request(&self, query: &str) -> anyhow::Result<Vec<RelatedArticle>> {
        let limit = self.max_results.to_string();
        let mut req = self
            .http
            .get(&self.endpoint)
            .query(&[("q", query), ("max_results", limit.as_str())]);
        if let Some(key) = &self.api_key {
            req = req.bearer_auth(key);
        }
        let hits: Vec<SearchHit> = req.send().await?.error_for_status()?.json().await?;
        Ok(hits
            .into_iter()
            .take(self.max_results)
            .map(SearchHit::into_article)
            .collect())
    }
}

#[async_trait]
impl Corroborator for HttpSearchCorroborator {
    async fn search(&self, query: &str) -> Vec<RelatedArticle> {
        if !is_searchable(query) {
            return Vec::new();
        }
        match self.request(query).await {
            Ok(v) => v,
            Err(e) => {
                warn!(error = ?e, corroborator = self.name(), "search failed, treating as no sources");
                counter!("verdict_adapter_fallbacks_total", "adapter" => "search").increment(1);
                Vec::new()
            }
        }
    }

    fn name(&self) -> &'static str {
        "http"
    }
}

/// One raw hit from the search endpoint; every field optional.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct SearchHit {
    #[serde(default)]
    pub title: Option<String>,
    #[serde(default, alias = "link")]
    pub url: Option<String>,
    #[serde(default)]
    pub source: Option<String>,
}

impl SearchHit {
    pub fn into_article(self) -> RelatedArticle {
        RelatedArticle {
            title: self.title.unwrap_or_else(|| "No title".to_string()),
            link: self.url.unwrap_or_default(),
            source: self.source.unwrap_or_else(|| "Unknown".to_string()),
        }
    }
}

/// Fixed result list (tests, offline runs). Still honours the short-query rule.
#[derive(Debug, Clone, Default)]
pub struct StaticCorroborator {
    articles: Vec<RelatedArticle>,
    max_results: usize,
}

impl StaticCorroborator {
    pub fn new(articles: Vec<RelatedArticle>) -> Self {
        Self {
            articles,
            max_results: DEFAULT_SEARCH_MAX_RESULTS,
        }
    }
}

#[async_trait]
impl Corroborator for StaticCorroborator {
    async fn search(&self, query: &str) -> Vec<RelatedArticle> {
        if !is_searchable(query) {
            return Vec::new();
        }
        self.articles.iter().take(self.max_results).cloned().collect()
    }

    fn name(&self) -> &'static str {
        "static"
    }
}

#[derive(Debug, Clone, Copy, Default)]
pub struct DisabledCorroborator;

#[async_trait]
impl Corroborator for DisabledCorroborator {
    async fn search(&self, _query: &str) -> Vec<RelatedArticle> {
        Vec::new()
    }

    fn name(&self) -> &'static str {
        "disabled"
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn article(i: usize) -> RelatedArticle {
        RelatedArticle {
            title: format!("t{i}"),
            link: format!("https://example.org/{i}"),
            source: "Example".into(),
        }
    }

    #[test]
    fn missing_fields_get_defaults() {
        let hits: Vec<SearchHit> = serde_json::from_str(
            r#"[{"title":"A","link":"https://a.example","source":"AP"},{"url":"https://b.example"},{}]"#,
        )
        .unwrap();
        let out: Vec<_> = hits.into_iter().map(SearchHit::into_article).collect();
        assert_eq!(out[0].link, "https://a.example");
        assert_eq!(out[0].source, "AP");
        assert_eq!(out[1].title, "No title");
        assert_eq!(out[1].link, "https://b.example");
        assert_eq!(out[2].link, "");
        assert_eq!(out[2].source, "Unknown");
    }

    #[tokio::test]
    async fn short_query_skips_search() {
        let c = StaticCorroborator::new(vec![article(1)]);
        assert!(c.search("  abc ").await.is_empty());
        assert_eq!(c.search("abcde").await.len(), 1);
    }

    #[tokio::test]
    async fn static_results_are_capped() {
        let c = StaticCorroborator::new((0..8).map(article).collect());
        assert_eq!(c.search("long enough query").await.len(), DEFAULT_SEARCH_MAX_RESULTS);
    }

    #[tokio::test]
    async fn unreachable_endpoint_yields_no_sources() {
        let c = HttpSearchCorroborator::new("http://127.0.0.1:9/search", None, 5).unwrap();
        assert!(c.search("central bank holds rates steady").await.is_empty());
    }
}

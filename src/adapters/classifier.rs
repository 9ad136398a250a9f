// src/adapters/classifier.rs
//! Classifier adapters. The model lives behind an HTTP inference endpoint;
//! this side only normalizes its answer (or its failure) into a
//! `ClassifierOutput`.

use std::time::Duration;

use async_trait::async_trait;
use metrics::counter;
use serde::{Deserialize, Serialize};
use tracing::warn;

use crate::signal::ClassifierOutput;

const USER_AGENT: &str = "news-verdict-engine/0.1";

/// Must fail soft: empty input or an unreachable model yields
/// [`ClassifierOutput::neutral`], never an error.
#[async_trait]
pub trait Classifier: Send + Sync {
    async fn classify(&self, text: &str) -> ClassifierOutput;
    fn name(&self) -> &'static str;
}

/// Calls `POST {endpoint}` with `{"text": ...}` and expects
/// `{"real_prob": f32, "fake_prob": f32}`.
pub struct HttpClassifier {
    http: reqwest::Client,
    endpoint: String,
}

impl HttpClassifier {
    pub fn new(endpoint: impl Into<String>) -> anyhow::Result<Self> {
        let http = reqwest::Client::builder()
            .user_agent(USER_AGENT)
            .connect_timeout(Duration::from_secs(4))
            .timeout(Duration::from_secs(20))
            .build()?;
        Ok(Self {
            http,
            endpoint: endpoint.into(),
        })
    }

    async fn request(&self, text: &str) -> anyhow::Result<ClassifierOutput> {
        #[derive(Serialize)]
        struct Req<'a> {
            text: &'a str,
        }

        let resp: InferenceResponse = self
            .http
            .post(&self.endpoint)
            .json(&Req { text })
            .send()
            .await?
            .error_for_status()?
            .json()
            .await?;
        Ok(resp.into_output())
    }
}

#[async_trait]
impl Classifier for HttpClassifier {
    async fn classify(&self, text: &str) -> ClassifierOutput {
        if text.trim().is_empty() {
            return ClassifierOutput::neutral();
        }
        match self.request(text).await {
            Ok(out) => out,
            Err(e) => {
                warn!(error = ?e, classifier = self.name(), "classifier unavailable, using neutral output");
                counter!("verdict_adapter_fallbacks_total", "adapter" => "classifier").increment(1);
                ClassifierOutput::neutral()
            }
        }
    }

    fn name(&self) -> &'static str {
        "http"
    }
}

/// Wire shape of the inference endpoint.
#[derive(Debug, Clone, Copy, Deserialize)]
pub struct InferenceResponse {
    pub real_prob: f32,
    pub fake_prob: f32,
}

impl InferenceResponse {
    /// Out-of-range probabilities are clamped; NaN counts as 0.
    pub fn into_output(self) -> ClassifierOutput {
        fn prob(x: f32) -> f32 {
            if x.is_nan() {
                0.0
            } else {
                x.clamp(0.0, 1.0)
            }
        }
        ClassifierOutput::from_probs(prob(self.real_prob), prob(self.fake_prob))
    }
}

/// Always answers with the same output (tests, offline runs).
#[derive(Debug, Clone)]
pub struct StaticClassifier {
    output: ClassifierOutput,
}

impl StaticClassifier {
    pub fn new(output: ClassifierOutput) -> Self {
        Self { output }
    }

    pub fn from_probs(real_prob: f32, fake_prob: f32) -> Self {
        Self::new(ClassifierOutput::from_probs(real_prob, fake_prob))
    }
}

#[async_trait]
impl Classifier for StaticClassifier {
    async fn classify(&self, text: &str) -> ClassifierOutput {
        if text.trim().is_empty() {
            return ClassifierOutput::neutral();
        }
        self.output
    }

    fn name(&self) -> &'static str {
        "static"
    }
}

/// No endpoint configured.
#[derive(Debug, Clone, Copy, Default)]
pub struct DisabledClassifier;

#[async_trait]
impl Classifier for DisabledClassifier {
    async fn classify(&self, _text: &str) -> ClassifierOutput {
        ClassifierOutput::neutral()
    }

    fn name(&self) -> &'static str {
        "disabled"
    }
}

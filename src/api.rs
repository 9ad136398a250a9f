use std::sync::{Arc, RwLock};

use axum::{
    extract::{Query, State},
    http::StatusCode,
    routing::{get, post},
    Json, Router,
};
use serde::{Deserialize, Serialize};
use tower_http::cors::CorsLayer;
use tracing::{info, warn};

use crate::adapters::{self, DynClassifier, DynCorroborator, RelatedArticle};
use crate::config::{PolicyConfig, ServicesConfig};
use crate::decision::Assessment;
use crate::engine::{AnalysisInput, Engine};
use crate::history::{AnalysisLog, HistoryEntry, InputType};
use crate::metrics::record_verdict;
use crate::signal::{ClassifierOutput, Mode};
use crate::text::{clean_text, search_query, simple_summary};

const HISTORY_CAP: usize = 2000;
const DEFAULT_HISTORY_LIMIT: usize = 50;
const SUMMARY_SENTENCES: usize = 3;

/// Policy + derived engine, swapped together on reload.
#[derive(Debug)]
struct Loaded {
    policy: PolicyConfig,
    engine: Arc<Engine>,
}

impl Loaded {
    fn new(policy: PolicyConfig) -> Self {
        let engine = Arc::new(Engine::from_policy(&policy));
        Self { policy, engine }
    }
}

#[derive(Clone)]
pub struct AppState {
    loaded: Arc<RwLock<Loaded>>,
    classifier: DynClassifier,
    corroborator: DynCorroborator,
    history: Arc<AnalysisLog>,
}

impl AppState {
    pub fn new(
        policy: PolicyConfig,
        classifier: DynClassifier,
        corroborator: DynCorroborator,
    ) -> Self {
        Self {
            loaded: Arc::new(RwLock::new(Loaded::new(policy))),
            classifier,
            corroborator,
            history: Arc::new(AnalysisLog::with_capacity(HISTORY_CAP)),
        }
    }

    /// Policy from `config/policy.toml` (or seed), adapters from env.
    pub fn from_env() -> anyhow::Result<Self> {
        let policy = PolicyConfig::load_default()?;
        let services = ServicesConfig::from_env();
        Ok(Self::new(
            policy,
            adapters::build_classifier(&services),
            adapters::build_corroborator(&services),
        ))
    }

    pub fn history(&self) -> &AnalysisLog {
        &self.history
    }

    fn snapshot(&self) -> (Arc<Engine>, Mode) {
        let g = self.loaded.read().unwrap_or_else(|e| e.into_inner());
        (Arc::clone(&g.engine), g.policy.default_mode)
    }

    fn replace_policy(&self, policy: PolicyConfig) {
        let mut g = self.loaded.write().unwrap_or_else(|e| e.into_inner());
        *g = Loaded::new(policy);
    }
}

pub fn router(state: AppState) -> Router {
    Router::new()
        .route("/health", get(|| async { "OK" }))
        .route("/assess", post(assess))
        .route("/analyze", post(analyze))
        .route("/history", get(history))
        .route("/admin/reload-policy", get(admin_reload_policy))
        .layer(CorsLayer::very_permissive())
        .with_state(state)
}

#[derive(Debug, Serialize)]
pub struct ErrorBody {
    pub error: String,
}

type ApiError = (StatusCode, Json<ErrorBody>);

fn unprocessable(msg: &str) -> ApiError {
    (
        StatusCode::UNPROCESSABLE_ENTITY,
        Json(ErrorBody {
            error: msg.to_string(),
        }),
    )
}

/// Precomputed signals; no collaborator is called.
#[derive(Debug, Deserialize)]
struct AssessReq {
    text: String,
    #[serde(default)]
    url: Option<String>,
    real_prob: f32,
    fake_prob: f32,
    #[serde(default)]
    corroboration_count: usize,
    #[serde(default)]
    mode: Option<Mode>,
}

async fn assess(
    State(state): State<AppState>,
    Json(body): Json<AssessReq>,
) -> Result<Json<Assessment>, ApiError> {
    let probs_ok = [body.real_prob, body.fake_prob]
        .iter()
        .all(|p| (0.0..=1.0).contains(p));
    if !probs_ok {
        return Err(unprocessable("probabilities must be within [0, 1]"));
    }

    let (engine, default_mode) = state.snapshot();
    let a = engine.assess(&AnalysisInput {
        text: &body.text,
        url: body.url.as_deref(),
        model: ClassifierOutput::from_probs(body.real_prob, body.fake_prob),
        corroboration_count: body.corroboration_count,
        mode: body.mode.unwrap_or(default_mode),
    });
    record_verdict(a.verdict);
    Ok(Json(a))
}

#[derive(Debug, Deserialize)]
struct AnalyzeReq {
    text: String,
    #[serde(default)]
    url: Option<String>,
    #[serde(default)]
    mode: Option<Mode>,
}

#[derive(Debug, Serialize)]
pub struct AnalyzeResp {
    pub assessment: Assessment,
    pub related: Vec<RelatedArticle>,
    pub query: String,
    pub summary: String,
}

/// Full pipeline: clean → classify → corroborate → assess → log.
async fn analyze(
    State(state): State<AppState>,
    Json(body): Json<AnalyzeReq>,
) -> Result<Json<AnalyzeResp>, ApiError> {
    // Cleaned text is for the model only; every other signal reads the raw input.
    let cleaned = clean_text(&body.text);
    if cleaned.is_empty() {
        return Err(unprocessable("Please enter valid news content."));
    }
    let text = body.text.trim();
    let url = body.url.as_deref().map(str::trim).filter(|u| !u.is_empty());

    let model = state.classifier.classify(&cleaned).await;
    let query = search_query(text);
    let related = state.corroborator.search(&query).await;

    let (engine, default_mode) = state.snapshot();
    let assessment = engine.assess(&AnalysisInput {
        text,
        url,
        model,
        corroboration_count: related.len(),
        mode: body.mode.unwrap_or(default_mode),
    });

    let input_type = if url.is_some() {
        InputType::Url
    } else {
        InputType::Text
    };
    state.history.record(&assessment, input_type);
    record_verdict(assessment.verdict);

    // Never log raw text. Only hashed id + verdict.
    info!(
        target: "verdict",
        id = %anon_hash(text),
        verdict = assessment.verdict.code(),
        real = assessment.verdict.is_real(),
        credibility = assessment.credibility_score,
        sources = related.len(),
        classifier = state.classifier.name(),
        "analysis complete"
    );

    Ok(Json(AnalyzeResp {
        summary: simple_summary(text, SUMMARY_SENTENCES),
        assessment,
        related,
        query,
    }))
}

#[derive(Debug, Deserialize)]
struct HistoryQuery {
    limit: Option<usize>,
}

async fn history(
    State(state): State<AppState>,
    Query(q): Query<HistoryQuery>,
) -> Json<Vec<HistoryEntry>> {
    let limit = q.limit.unwrap_or(DEFAULT_HISTORY_LIMIT);
    Json(state.history.snapshot_last_n(limit))
}

async fn admin_reload_policy(State(state): State<AppState>) -> Result<String, ApiError> {
    match PolicyConfig::load_default() {
        Ok(fresh) => {
            state.replace_policy(fresh);
            info!("policy reloaded");
            Ok("reloaded".to_string())
        }
        Err(e) => {
            warn!(error = ?e, "policy reload failed, keeping current policy");
            Err((
                StatusCode::INTERNAL_SERVER_ERROR,
                Json(ErrorBody {
                    error: format!("failed: {e:#}"),
                }),
            ))
        }
    }
}

/// Short, stable, non-reversible id for log lines about a text.
pub(crate) fn anon_hash(text: &str) -> String {
    use sha2::{Digest, Sha256};
    let digest = Sha256::digest(text.as_bytes());
    let mut out = String::with_capacity(12);
    for b in digest.iter().take(6) {
        use std::fmt::Write as _;
        let _ = write!(&mut out, "{:02x}", b);
    }
    out
}

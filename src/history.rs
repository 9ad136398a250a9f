//! history.rs — append-only in-memory log of analyses.
//!
//! Passed around explicitly (`Arc<AnalysisLog>` in the app state) instead of
//! living in global state. Bounded: once `cap` is reached the oldest entries
//! drop. Writing it anywhere durable is a collaborator's job.

use std::sync::{Mutex, MutexGuard};

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::decision::Assessment;
use crate::signal::{ModeLabel, ModelLabel};

const HARD_CAP: usize = 10_000;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum InputType {
    #[serde(rename = "URL")]
    Url,
    Text,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct HistoryEntry {
    pub time: DateTime<Utc>,
    pub input_type: InputType,
    /// Normalized host, `"N/A"` for plain-text input.
    pub domain: String,
    pub model_result: ModelLabel,
    pub mode_result: ModeLabel,
    /// Percentages, two decimals.
    pub confidence: f32,
    pub real_prob: f32,
    pub fake_prob: f32,
    pub credibility_score: f32,
    pub final_verdict: String,
}

impl HistoryEntry {
    pub fn from_assessment(a: &Assessment, input_type: InputType, time: DateTime<Utc>) -> Self {
        Self {
            time,
            input_type,
            domain: a.domain.host.clone().unwrap_or_else(|| "N/A".to_string()),
            model_result: a.model.label,
            mode_result: a.mode_decision.label,
            confidence: pct(a.model.confidence),
            real_prob: pct(a.model.real_prob),
            fake_prob: pct(a.model.fake_prob),
            credibility_score: a.credibility_score,
            final_verdict: a.verdict.to_string(),
        }
    }
}

#[derive(Debug)]
pub struct AnalysisLog {
    inner: Mutex<Vec<HistoryEntry>>,
    cap: usize,
}

impl AnalysisLog {
    pub fn with_capacity(cap: usize) -> Self {
        let cap = cap.clamp(1, HARD_CAP);
        Self {
            inner: Mutex::new(Vec::with_capacity(cap)),
            cap,
        }
    }

    pub fn append(&self, entry: HistoryEntry) {
        let mut v = self.lock();
        v.push(entry);
        if v.len() > self.cap {
            let excess = v.len() - self.cap;
            v.drain(0..excess);
        }
    }

    /// Convenience: record an assessment stamped with the current time.
    pub fn record(&self, a: &Assessment, input_type: InputType) {
        self.append(HistoryEntry::from_assessment(a, input_type, Utc::now()));
    }

    /// Latest `n` entries, oldest first.
    pub fn snapshot_last_n(&self, n: usize) -> Vec<HistoryEntry> {
        let v = self.lock();
        let start = v.len().saturating_sub(n);
        v[start..].to_vec()
    }

    pub fn len(&self) -> usize {
        self.lock().len()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    // A panic while holding the lock cannot leave a half-written Vec behind.
    fn lock(&self) -> MutexGuard<'_, Vec<HistoryEntry>> {
        self.inner.lock().unwrap_or_else(|e| e.into_inner())
    }
}

fn pct(p: f32) -> f32 {
    (p * 100.0 * 100.0).round() / 100.0
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::engine::{AnalysisInput, Engine};
    use crate::signal::{ClassifierOutput, Mode};

    fn assessment(url: Option<&str>) -> Assessment {
        Engine::default().assess(&AnalysisInput {
            text: "Officials announced the new schedule.",
            url,
            model: ClassifierOutput::from_probs(0.8765, 0.1235),
            corroboration_count: 2,
            mode: Mode::Relax,
        })
    }

    #[test]
    fn entry_mirrors_assessment() {
        let t = Utc::now();
        let e = HistoryEntry::from_assessment(&assessment(Some("https://www.bbc.com/x")), InputType::Url, t);
        assert_eq!(e.time, t);
        assert_eq!(e.domain, "bbc.com");
        assert_eq!(e.model_result, ModelLabel::Real);
        assert_eq!(e.mode_result, ModeLabel::Real);
        assert!((e.real_prob - 87.65).abs() < 1e-3);
        assert!((e.fake_prob - 12.35).abs() < 1e-3);
        assert_eq!(e.final_verdict, "Real (Sources Verified)");

        let v = serde_json::to_value(&e).unwrap();
        assert_eq!(v["input_type"], serde_json::json!("URL"));
    }

    #[test]
    fn text_input_has_no_domain() {
        let e = HistoryEntry::from_assessment(&assessment(None), InputType::Text, Utc::now());
        assert_eq!(e.domain, "N/A");
    }

    #[test]
    fn log_is_bounded_and_ordered() {
        let log = AnalysisLog::with_capacity(3);
        let a = assessment(None);
        for i in 0..5 {
            let mut e = HistoryEntry::from_assessment(&a, InputType::Text, Utc::now());
            e.domain = format!("d{i}");
            log.append(e);
        }
        assert_eq!(log.len(), 3);
        let domains: Vec<_> = log.snapshot_last_n(10).into_iter().map(|e| e.domain).collect();
        assert_eq!(domains, vec!["d2", "d3", "d4"]);
        assert_eq!(log.snapshot_last_n(1)[0].domain, "d4");
    }

    #[test]
    fn record_appends() {
        let log = AnalysisLog::with_capacity(10);
        assert!(log.is_empty());
        log.record(&assessment(None), InputType::Text);
        assert_eq!(log.len(), 1);
    }
}

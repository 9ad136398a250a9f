//! decision.rs — Output shapes: explanation reasons and the assessment bundle.
//!
//! `Assessment` is what the API returns and what the analysis log records.
//! Field names are stable; downstream report/CSV renderers key on them.

use serde::{Deserialize, Serialize};

use crate::clickbait::ClickbaitResult;
use crate::domain::DomainCheck;
use crate::signal::{ClassifierOutput, Mode, ModeDecision};
use crate::verdict::Verdict;

/// One human-readable justification line.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Reason {
    pub message: String,
    pub kind: ReasonKind,
}

/// Signal category a reason belongs to. Also the fixed display order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ReasonKind {
    Model,
    Corroboration,
    Domain,
    Clickbait,
}

impl Reason {
    pub fn new(kind: ReasonKind, message: impl Into<String>) -> Self {
        Self {
            message: message.into(),
            kind,
        }
    }
}

/// Complete result of one analysis.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Assessment {
    pub model: ClassifierOutput,
    pub mode: Mode,
    pub mode_decision: ModeDecision,
    pub domain: DomainCheck,
    pub corroboration_count: usize,
    pub clickbait: ClickbaitResult,
    /// 0–100, two decimals.
    pub credibility_score: f32,
    pub verdict: Verdict,
    #[serde(default)]
    pub explanation: Vec<Reason>,
}

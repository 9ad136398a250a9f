//! Classifier signal types and the strict/relax decision.
//!
//! Probabilities are assumed to be validated upstream: both in `[0, 1]`,
//! summing to ~1. Nothing here re-checks that.

use serde::{Deserialize, Serialize};

/// Minimum `|real - fake|` margin required in strict mode.
pub const STRICT_MARGIN: f32 = 0.15;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum ModelLabel {
    Real,
    Fake,
}

/// Raw classifier output as handed over by the classifier adapter.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct ClassifierOutput {
    pub label: ModelLabel,
    pub confidence: f32,
    pub real_prob: f32,
    pub fake_prob: f32,
}

impl ClassifierOutput {
    /// Argmax label (ties → `Real`), confidence = winning probability.
    pub fn from_probs(real_prob: f32, fake_prob: f32) -> Self {
        if fake_prob > real_prob {
            Self {
                label: ModelLabel::Fake,
                confidence: fake_prob,
                real_prob,
                fake_prob,
            }
        } else {
            Self {
                label: ModelLabel::Real,
                confidence: real_prob,
                real_prob,
                fake_prob,
            }
        }
    }

    /// Zero-confidence result for empty input or an unavailable model.
    pub fn neutral() -> Self {
        Self {
            label: ModelLabel::Real,
            confidence: 0.0,
            real_prob: 0.0,
            fake_prob: 0.0,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Mode {
    Strict,
    #[default]
    Relax,
}

impl std::str::FromStr for Mode {
    type Err = anyhow::Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "strict" => Ok(Mode::Strict),
            "relax" | "relaxed" => Ok(Mode::Relax),
            other => anyhow::bail!("unsupported mode: {other}"),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum ModeLabel {
    Real,
    Fake,
    Uncertain,
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct ModeDecision {
    pub label: ModeLabel,
    pub confidence: f32,
}

/// Mode-adjusted label. Strict mode refuses to commit when the two
/// probabilities are closer than [`STRICT_MARGIN`]; relax mode always takes
/// the majority probability (ties → `Real`).
pub fn decide(real_prob: f32, fake_prob: f32, mode: Mode) -> ModeDecision {
    let diff = (real_prob - fake_prob).abs();

    if mode == Mode::Strict && diff < STRICT_MARGIN {
        return ModeDecision {
            label: ModeLabel::Uncertain,
            confidence: real_prob.max(fake_prob),
        };
    }

    if fake_prob > real_prob {
        ModeDecision {
            label: ModeLabel::Fake,
            confidence: fake_prob,
        }
    } else {
        ModeDecision {
            label: ModeLabel::Real,
            confidence: real_prob,
        }
    }
}

//! # Verdict Synthesis
//! Ordered rule table over all signals; the first matching rule wins.
//!
//! Precedence (load-bearing, do not reorder):
//! 1. short advisory text containing "recommend" → general fact statement
//! 2. two or more corroborating sources → sources verified
//! 3. trusted domain + confident REAL model → trusted domain
//! 4. confident FAKE model with zero sources → no sources found
//! 5. otherwise → needs manual check
//!
//! Corroboration outranks the model. A single source is not enough to confirm
//! but is enough to block a FAKE call.

use serde::{Deserialize, Serialize};
use std::fmt;

use crate::domain::DomainStatus;
use crate::signal::ModelLabel;

pub const GENERAL_FACT_MAX_WORDS: usize = 25;
pub const ADVISORY_TOKEN: &str = "recommend";
pub const SOURCES_VERIFIED_MIN: usize = 2;
pub const TRUSTED_DOMAIN_MIN_CONFIDENCE: f32 = 0.60;
pub const FAKE_MIN_CONFIDENCE: f32 = 0.80;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Verdict {
    #[serde(rename = "Real (General Fact Statement)")]
    RealGeneralFact,
    #[serde(rename = "Real (Sources Verified)")]
    RealSourcesVerified,
    #[serde(rename = "Real (Trusted Domain)")]
    RealTrustedDomain,
    #[serde(rename = "Fake (No Sources Found)")]
    FakeNoSources,
    #[serde(rename = "Uncertain (Needs Manual Check)")]
    Uncertain,
}

impl Verdict {
    pub fn label(&self) -> &'static str {
        match self {
            Verdict::RealGeneralFact => "Real (General Fact Statement)",
            Verdict::RealSourcesVerified => "Real (Sources Verified)",
            Verdict::RealTrustedDomain => "Real (Trusted Domain)",
            Verdict::FakeNoSources => "Fake (No Sources Found)",
            Verdict::Uncertain => "Uncertain (Needs Manual Check)",
        }
    }

    /// Short snake_case code (metrics labels, logs).
    pub fn code(&self) -> &'static str {
        match self {
            Verdict::RealGeneralFact => "real_general_fact",
            Verdict::RealSourcesVerified => "real_sources_verified",
            Verdict::RealTrustedDomain => "real_trusted_domain",
            Verdict::FakeNoSources => "fake_no_sources",
            Verdict::Uncertain => "uncertain",
        }
    }

    pub fn is_real(&self) -> bool {
        matches!(
            self,
            Verdict::RealGeneralFact | Verdict::RealSourcesVerified | Verdict::RealTrustedDomain
        )
    }
}

impl fmt::Display for Verdict {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

/// Everything the cascade looks at.
#[derive(Debug, Clone, Copy)]
pub struct VerdictSignals<'a> {
    pub model_label: ModelLabel,
    pub model_confidence: f32,
    pub corroboration_count: usize,
    pub domain_status: DomainStatus,
    pub original_text: &'a str,
}

/// One `(predicate, outcome)` entry of the cascade.
pub struct Rule {
    pub name: &'static str,
    applies: fn(&VerdictSignals<'_>) -> bool,
    pub outcome: Verdict,
}

impl Rule {
    pub fn applies(&self, signals: &VerdictSignals<'_>) -> bool {
        (self.applies)(signals)
    }
}

impl fmt::Debug for Rule {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Rule")
            .field("name", &self.name)
            .field("outcome", &self.outcome)
            .finish()
    }
}

static RULES: [Rule; 4] = [
    Rule {
        name: "general_fact_statement",
        applies: is_general_fact_statement,
        outcome: Verdict::RealGeneralFact,
    },
    Rule {
        name: "sources_verified",
        applies: has_enough_sources,
        outcome: Verdict::RealSourcesVerified,
    },
    Rule {
        name: "trusted_domain",
        applies: is_trusted_confident_real,
        outcome: Verdict::RealTrustedDomain,
    },
    Rule {
        name: "fake_no_sources",
        applies: is_confident_fake_unsourced,
        outcome: Verdict::FakeNoSources,
    },
];

/// The cascade in evaluation order (fallback `Uncertain` is implicit).
pub fn rules() -> &'static [Rule] {
    &RULES
}

/// First rule that fires, or `None` when the fallback applies.
pub fn matching_rule(signals: &VerdictSignals<'_>) -> Option<&'static Rule> {
    RULES.iter().find(|r| r.applies(signals))
}

pub fn synthesize(signals: &VerdictSignals<'_>) -> Verdict {
    matching_rule(signals)
        .map(|r| r.outcome)
        .unwrap_or(Verdict::Uncertain)
}

fn is_general_fact_statement(s: &VerdictSignals<'_>) -> bool {
    s.original_text.split_whitespace().count() < GENERAL_FACT_MAX_WORDS
        && s.original_text.to_lowercase().contains(ADVISORY_TOKEN)
}

fn has_enough_sources(s: &VerdictSignals<'_>) -> bool {
    s.corroboration_count >= SOURCES_VERIFIED_MIN
}

fn is_trusted_confident_real(s: &VerdictSignals<'_>) -> bool {
    s.domain_status == DomainStatus::Trusted
        && s.model_label == ModelLabel::Real
        && s.model_confidence >= TRUSTED_DOMAIN_MIN_CONFIDENCE
}

fn is_confident_fake_unsourced(s: &VerdictSignals<'_>) -> bool {
    s.model_label == ModelLabel::Fake
        && s.model_confidence >= FAKE_MIN_CONFIDENCE
        && s.corroboration_count == 0
}

//! # Verdict Engine
//! Pure, testable aggregation that maps already-computed signals
//! (classifier output, corroboration count, URL, text) → `Assessment`.
//! No I/O; identical inputs always give identical outputs.
//!
//! Flow: domain / clickbait / mode decision (independent) → credibility score
//! and verdict → explanation.

use tracing::debug;

use crate::clickbait::ClickbaitScorer;
use crate::config::PolicyConfig;
use crate::credibility::credibility_score;
use crate::decision::Assessment;
use crate::domain::{DomainCheck, DomainTruster};
use crate::explain::explain;
use crate::signal::{decide, ClassifierOutput, Mode};
use crate::verdict::{matching_rule, Verdict, VerdictSignals};

/// Signals for one analysis request.
#[derive(Debug, Clone, Copy)]
pub struct AnalysisInput<'a> {
    pub text: &'a str,
    pub url: Option<&'a str>,
    pub model: ClassifierOutput,
    pub corroboration_count: usize,
    pub mode: Mode,
}

/// Stateless between calls; holds only the policy-derived lookup tables.
#[derive(Debug, Clone, Default)]
pub struct Engine {
    domains: DomainTruster,
    clickbait: ClickbaitScorer,
}

impl Engine {
    pub fn new(domains: DomainTruster, clickbait: ClickbaitScorer) -> Self {
        Self { domains, clickbait }
    }

    pub fn from_policy(policy: &PolicyConfig) -> Self {
        Self::new(policy.domain_truster(), policy.clickbait_scorer())
    }

    pub fn assess(&self, input: &AnalysisInput<'_>) -> Assessment {
        let model = input.model;

        // 1) Independent signals
        let domain = match input.url.map(str::trim).filter(|u| !u.is_empty()) {
            Some(url) => self.domains.check(url),
            None => DomainCheck::unknown(),
        };
        let clickbait = self.clickbait.score(input.text);
        let mode_decision = decide(model.real_prob, model.fake_prob, input.mode);

        // 2) Score + verdict
        let credibility = credibility_score(
            model.real_prob,
            model.fake_prob,
            input.corroboration_count,
            domain.status,
            clickbait.score,
        );

        let signals = VerdictSignals {
            model_label: model.label,
            model_confidence: model.confidence,
            corroboration_count: input.corroboration_count,
            domain_status: domain.status,
            original_text: input.text,
        };
        let rule = matching_rule(&signals);
        let verdict = rule.map(|r| r.outcome).unwrap_or(Verdict::Uncertain);

        // 3) Reasons
        let explanation = explain(
            model.real_prob,
            model.fake_prob,
            input.corroboration_count,
            domain.status,
            clickbait.level,
        )
        .collect();

        debug!(
            target: "verdict",
            rule = rule.map(|r| r.name).unwrap_or("fallback"),
            verdict = verdict.code(),
            credibility,
            domain = domain.status.as_str(),
            corroboration = input.corroboration_count,
            clickbait = clickbait.score,
            "assessment computed"
        );

        Assessment {
            model,
            mode: input.mode,
            mode_decision,
            domain,
            corroboration_count: input.corroboration_count,
            clickbait,
            credibility_score: credibility,
            verdict,
            explanation,
        }
    }
}

//! Explanation builder: one reason per signal category, fixed order
//! (model → corroboration → domain → clickbait).
//!
//! Exactly one corroborating source yields no corroboration reason, and
//! suspicious domains are described with the same "unknown" framing as
//! unlisted ones.

use std::iter;

use crate::clickbait::ClickbaitLevel;
use crate::decision::{Reason, ReasonKind};
use crate::domain::DomainStatus;

/// Lazy, single-pass sequence of reasons. Uses the raw probabilities, not the
/// mode-adjusted label.
pub fn explain(
    real_prob: f32,
    fake_prob: f32,
    corroboration_count: usize,
    domain_status: DomainStatus,
    clickbait_level: ClickbaitLevel,
) -> impl Iterator<Item = Reason> {
    iter::once_with(move || model_reason(real_prob, fake_prob))
        .chain(iter::once_with(move || corroboration_reason(corroboration_count)).flatten())
        .chain(iter::once_with(move || domain_reason(domain_status)))
        .chain(iter::once_with(move || clickbait_reason(clickbait_level)))
}

fn model_reason(real_prob: f32, fake_prob: f32) -> Reason {
    let msg = if fake_prob > real_prob {
        "Model confidence leans towards FAKE based on text patterns."
    } else {
        "Model confidence leans towards REAL based on text patterns."
    };
    Reason::new(ReasonKind::Model, msg)
}

fn corroboration_reason(count: usize) -> Option<Reason> {
    match count {
        0 => Some(Reason::new(
            ReasonKind::Corroboration,
            "No related sources found → could be unverified or suspicious.",
        )),
        1 => None,
        _ => Some(Reason::new(
            ReasonKind::Corroboration,
            "Multiple related sources found → supports REAL / verified information.",
        )),
    }
}

fn domain_reason(status: DomainStatus) -> Reason {
    let msg = match status {
        DomainStatus::Trusted => "Domain is trusted → increases credibility.",
        DomainStatus::Suspicious | DomainStatus::Unknown => {
            "Domain is unknown → credibility not confirmed."
        }
    };
    Reason::new(ReasonKind::Domain, msg)
}

fn clickbait_reason(level: ClickbaitLevel) -> Reason {
    let msg = match level {
        ClickbaitLevel::High => "High clickbait language detected → common in fake/misleading news.",
        ClickbaitLevel::Medium => "Some clickbait signals detected.",
        ClickbaitLevel::Low => "Low clickbait language → more natural news writing style.",
    };
    Reason::new(ReasonKind::Clickbait, msg)
}

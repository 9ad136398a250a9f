//! # Credibility Score
//! Linear blend of the model's real-probability, corroboration, domain trust
//! and clickbait into a single 0–100 score. Hand-tuned coefficients, no I/O.
//!
//! Order: base → corroboration bonus → domain bonus → clickbait penalty →
//! clamp to [0, 100] → round to 2 decimals.
//!
//! `suspicious` domains get no penalty here; only `trusted` earns a bonus.

use crate::domain::DomainStatus;

const BONUS_THREE_OR_MORE: f32 = 25.0;
const BONUS_TWO: f32 = 18.0;
const BONUS_ONE: f32 = 10.0;
const PENALTY_NONE: f32 = -10.0;
const TRUSTED_DOMAIN_BONUS: f32 = 10.0;
/// Penalty per clickbait point (100 → −30).
const CLICKBAIT_WEIGHT: f32 = 0.3;

/// `fake_prob` is part of the signal bundle but does not enter the formula.
pub fn credibility_score(
    real_prob: f32,
    _fake_prob: f32,
    corroboration_count: usize,
    domain_status: DomainStatus,
    clickbait_score: u32,
) -> f32 {
    let base = real_prob * 100.0;
    let verification = corroboration_bonus(corroboration_count);
    let domain = if domain_status == DomainStatus::Trusted {
        TRUSTED_DOMAIN_BONUS
    } else {
        0.0
    };
    let penalty = clickbait_score as f32 * CLICKBAIT_WEIGHT;

    round2((base + verification + domain - penalty).clamp(0.0, 100.0))
}

pub fn corroboration_bonus(count: usize) -> f32 {
    match count {
        0 => PENALTY_NONE,
        1 => BONUS_ONE,
        2 => BONUS_TWO,
        _ => BONUS_THREE_OR_MORE,
    }
}

#[inline]
fn round2(x: f32) -> f32 {
    (x * 100.0).round() / 100.0
}

//! Lexical clickbait scoring.
//!
//! Each distinct lexicon term found in the text (case-insensitive substring)
//! adds 15 points, capped at 100. Frequency does not matter.

use serde::{Deserialize, Serialize};
use std::collections::BTreeSet;

pub const POINTS_PER_TERM: u32 = 15;
pub const MAX_SCORE: u32 = 100;
pub const HIGH_THRESHOLD: u32 = 60;
pub const MEDIUM_THRESHOLD: u32 = 30;

pub const DEFAULT_LEXICON: &[&str] = &[
    "shocking",
    "breaking",
    "unbelievable",
    "miracle",
    "secret",
    "exposed",
    "truth",
    "you won\u{2019}t believe",
    "you wont believe",
    "must see",
    "viral",
    "insane",
    "cure",
    "instant",
    "guaranteed",
    "doctors hate",
    "trick",
];

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum ClickbaitLevel {
    Low,
    Medium,
    High,
}

impl ClickbaitLevel {
    /// Lower bounds are inclusive.
    pub fn from_score(score: u32) -> Self {
        if score >= HIGH_THRESHOLD {
            ClickbaitLevel::High
        } else if score >= MEDIUM_THRESHOLD {
            ClickbaitLevel::Medium
        } else {
            ClickbaitLevel::Low
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ClickbaitResult {
    pub score: u32,
    pub level: ClickbaitLevel,
    pub matched_terms: BTreeSet<String>,
}

#[derive(Debug, Clone)]
pub struct ClickbaitScorer {
    terms: Vec<String>,
}

impl Default for ClickbaitScorer {
    fn default() -> Self {
        Self::new(DEFAULT_LEXICON.iter().copied())
    }
}

impl ClickbaitScorer {
    pub fn new<I>(terms: I) -> Self
    where
        I: IntoIterator,
        I::Item: AsRef<str>,
    {
        let mut out: Vec<String> = Vec::new();
        for t in terms {
            let t = t.as_ref().trim().to_lowercase();
            if !t.is_empty() && !out.contains(&t) {
                out.push(t);
            }
        }
        Self { terms: out }
    }

    pub fn terms(&self) -> &[String] {
        &self.terms
    }

    pub fn score(&self, text: &str) -> ClickbaitResult {
        let lowered = text.to_lowercase();
        let matched_terms: BTreeSet<String> = self
            .terms
            .iter()
            .filter(|t| lowered.contains(t.as_str()))
            .cloned()
            .collect();

        let hits = u32::try_from(matched_terms.len()).unwrap_or(u32::MAX);
        let score = hits.saturating_mul(POINTS_PER_TERM).min(MAX_SCORE);

        ClickbaitResult {
            score,
            level: ClickbaitLevel::from_score(score),
            matched_terms,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn plain_text_scores_zero() {
        let r = ClickbaitScorer::default().score("The council approved the budget on Tuesday.");
        assert_eq!(r.score, 0);
        assert_eq!(r.level, ClickbaitLevel::Low);
        assert!(r.matched_terms.is_empty());
    }

    #[test]
    fn repeated_term_counts_once() {
        let r = ClickbaitScorer::default().score("Shocking! Truly SHOCKING. shocking again.");
        assert_eq!(r.score, 15);
        assert_eq!(r.matched_terms.len(), 1);
        assert!(r.matched_terms.contains("shocking"));
    }

    #[test]
    fn phrases_match_case_insensitively() {
        let r = ClickbaitScorer::default().score("You Wont Believe this trick DOCTORS HATE");
        assert!(r.matched_terms.contains("you wont believe"));
        assert!(r.matched_terms.contains("doctors hate"));
        assert!(r.matched_terms.contains("trick"));
        assert_eq!(r.score, 45);
        assert_eq!(r.level, ClickbaitLevel::Medium);
    }

    #[test]
    fn curly_apostrophe_variant_is_in_lexicon() {
        let r = ClickbaitScorer::default().score("You won\u{2019}t believe it");
        assert!(r.matched_terms.contains("you won\u{2019}t believe"));
    }

    #[test]
    fn score_caps_at_one_hundred() {
        let text = "shocking breaking unbelievable miracle secret exposed viral insane";
        let r = ClickbaitScorer::default().score(text);
        assert!(r.matched_terms.len() >= 7);
        assert_eq!(r.score, 100);
        assert_eq!(r.level, ClickbaitLevel::High);
    }

    #[test]
    fn score_is_monotonic_in_distinct_hits() {
        let s = ClickbaitScorer::default();
        let words = ["shocking", "miracle", "viral", "insane", "secret", "instant", "guaranteed"];
        let mut prev = 0;
        for n in 1..=words.len() {
            let text = words[..n].join(" ");
            let r = s.score(&text);
            assert!(r.score >= prev);
            assert_eq!(r.score, (15 * n as u32).min(100));
            prev = r.score;
        }
    }

    #[test]
    fn level_boundaries_are_inclusive() {
        assert_eq!(ClickbaitLevel::from_score(0), ClickbaitLevel::Low);
        assert_eq!(ClickbaitLevel::from_score(29), ClickbaitLevel::Low);
        assert_eq!(ClickbaitLevel::from_score(30), ClickbaitLevel::Medium);
        assert_eq!(ClickbaitLevel::from_score(59), ClickbaitLevel::Medium);
        assert_eq!(ClickbaitLevel::from_score(60), ClickbaitLevel::High);
        assert_eq!(ClickbaitLevel::from_score(100), ClickbaitLevel::High);
    }

    #[test]
    fn custom_lexicon_is_normalized() {
        let s = ClickbaitScorer::new(["  OMG ", "omg", ""]);
        assert_eq!(s.terms(), &["omg".to_string()]);
        assert_eq!(s.score("omg!").score, 15);
    }
}

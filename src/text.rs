// src/text.rs
//! Text helpers around the engine: input cleaning, corroboration query,
//! extractive summary.

use once_cell::sync::Lazy;
use regex::Regex;

/// Words of the article used as the corroboration search query.
pub const QUERY_WORDS: usize = 18;
/// Sentences need more than this many words to enter the summary.
const SUMMARY_MIN_WORDS: usize = 6;
pub const SUMMARY_FALLBACK: &str = "Summary not available.";

static RE_TAGS: Lazy<Regex> = Lazy::new(|| Regex::new(r"(?is)</?[^>]+>").expect("tag regex"));
static RE_WS: Lazy<Regex> = Lazy::new(|| Regex::new(r"\s+").expect("whitespace regex"));
static RE_SENTENCE_END: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"[.!?]\s+").expect("sentence regex"));

/// Normalize pasted/extracted article text before classification.
pub fn clean_text(s: &str) -> String {
    // 1) HTML entity decode
    let decoded = html_escape::decode_html_entities(s).to_string();

    // 2) Strip HTML tags
    let out = RE_TAGS.replace_all(&decoded, " ");

    // 3) Normalize “ ” ‘ ’ « » to ASCII quotes
    let out = out
        .replace(['\u{201C}', '\u{201D}', '\u{00AB}', '\u{00BB}'], "\"")
        .replace(['\u{2018}', '\u{2019}'], "'");

    // 4) Collapse whitespace
    RE_WS.replace_all(&out, " ").trim().to_string()
}

/// First [`QUERY_WORDS`] words of the text, single-space joined.
pub fn search_query(text: &str) -> String {
    text.split_whitespace()
        .take(QUERY_WORDS)
        .collect::<Vec<_>>()
        .join(" ")
}

/// Naive extractive summary: first `max_sentences` sentences that have more
/// than six words.
pub fn simple_summary(text: &str, max_sentences: usize) -> String {
    let text = RE_WS.replace_all(text, " ");
    let text = text.trim();

    let mut sentences = Vec::new();
    let mut start = 0;
    for m in RE_SENTENCE_END.find_iter(text) {
        // keep the terminator, drop the whitespace
        sentences.push(&text[start..m.start() + 1]);
        start = m.end();
    }
    if start < text.len() {
        sentences.push(&text[start..]);
    }

    let picked: Vec<&str> = sentences
        .into_iter()
        .filter(|s| s.split_whitespace().count() > SUMMARY_MIN_WORDS)
        .take(max_sentences)
        .collect();

    if picked.is_empty() {
        SUMMARY_FALLBACK.to_string()
    } else {
        picked.join(" ")
    }
}

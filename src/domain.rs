//! # Domain Trust
//!
//! Classifies the source domain of an article URL as `trusted`,
//! `suspicious` or `unknown` against two static lists.
//!
//! - Host extraction: authority part after `scheme://` (or `//`), lower-cased,
//!   leading `www.` stripped.
//! - Matching is by substring, so `news.bbc.com` matches `bbc.com`.
//!   This also means an unrelated host embedding a listed token matches too.
//! - Allowlist wins over blocklist.
//! - Malformed URLs never error; they classify as `unknown`.

use once_cell::sync::Lazy;
use regex::Regex;
use serde::{Deserialize, Serialize};

/// Built-in allowlist used when no policy file overrides it.
pub const DEFAULT_TRUSTED_DOMAINS: &[&str] = &[
    "bbc.com",
    "reuters.com",
    "apnews.com",
    "thehindu.com",
    "ndtv.com",
    "timesofindia.indiatimes.com",
    "cnn.com",
    "nytimes.com",
    "washingtonpost.com",
];

/// Built-in blocklist used when no policy file overrides it.
pub const DEFAULT_SUSPICIOUS_DOMAINS: &[&str] = &[
    "healthtruthexposed.info",
    "globaltruthers.biz",
    "worldnewssource.xyz",
];

static RE_AUTHORITY: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"^(?:[A-Za-z][A-Za-z0-9+.\-]*:)?//([^/?#]*)").expect("authority regex")
});

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum DomainStatus {
    Trusted,
    Suspicious,
    Unknown,
}

impl DomainStatus {
    pub fn as_str(&self) -> &'static str {
        match self {
            DomainStatus::Trusted => "trusted",
            DomainStatus::Suspicious => "suspicious",
            DomainStatus::Unknown => "unknown",
        }
    }
}

/// Status plus the normalized host it was derived from (for display).
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DomainCheck {
    pub status: DomainStatus,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub host: Option<String>,
}

impl DomainCheck {
    pub fn unknown() -> Self {
        Self {
            status: DomainStatus::Unknown,
            host: None,
        }
    }
}

#[derive(Debug, Clone)]
pub struct DomainTruster {
    trusted: Vec<String>,
    suspicious: Vec<String>,
}

impl Default for DomainTruster {
    fn default() -> Self {
        Self::new(
            DEFAULT_TRUSTED_DOMAINS.iter().copied(),
            DEFAULT_SUSPICIOUS_DOMAINS.iter().copied(),
        )
    }
}

impl DomainTruster {
    /// Build from explicit lists. Entries are trimmed and lower-cased; empty
    /// entries are dropped (an empty needle would match every host).
    pub fn new<T, S>(trusted: T, suspicious: S) -> Self
    where
        T: IntoIterator,
        T::Item: AsRef<str>,
        S: IntoIterator,
        S::Item: AsRef<str>,
    {
        Self {
            trusted: clean_entries(trusted),
            suspicious: clean_entries(suspicious),
        }
    }

    pub fn trusted(&self) -> &[String] {
        &self.trusted
    }

    pub fn suspicious(&self) -> &[String] {
        &self.suspicious
    }

    /// Classify a raw URL string.
    pub fn classify(&self, url: &str) -> DomainStatus {
        self.check(url).status
    }

    /// Classify and keep the normalized host.
    pub fn check(&self, url: &str) -> DomainCheck {
        let Some(host) = extract_host(url) else {
            return DomainCheck::unknown();
        };

        let status = if self.trusted.iter().any(|d| host.contains(d.as_str())) {
            DomainStatus::Trusted
        } else if self.suspicious.iter().any(|d| host.contains(d.as_str())) {
            DomainStatus::Suspicious
        } else {
            DomainStatus::Unknown
        };

        DomainCheck {
            status,
            host: Some(host),
        }
    }
}

/// Network-location part of `url`, lower-cased, without a leading `www.`.
/// `None` when the URL has no (or an empty) authority.
pub fn extract_host(url: &str) -> Option<String> {
    let caps = RE_AUTHORITY.captures(url.trim())?;
    let authority = caps.get(1)?.as_str().to_lowercase();
    let host = authority
        .strip_prefix("www.")
        .map(str::to_string)
        .unwrap_or(authority);
    if host.is_empty() {
        None
    } else {
        Some(host)
    }
}

fn clean_entries<I>(items: I) -> Vec<String>
where
    I: IntoIterator,
    I::Item: AsRef<str>,
{
    let mut out: Vec<String> = Vec::new();
    for it in items {
        let t = it.as_ref().trim().to_lowercase();
        if !t.is_empty() && !out.contains(&t) {
            out.push(t);
        }
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;

    fn truster() -> DomainTruster {
        DomainTruster::default()
    }

    #[test]
    fn trusted_host_matches() {
        let t = truster();
        assert_eq!(t.classify("https://www.bbc.com/news/world"), DomainStatus::Trusted);
        assert_eq!(t.classify("https://reuters.com/markets"), DomainStatus::Trusted);
    }

    #[test]
    fn subdomain_matches_by_substring() {
        let t = truster();
        assert_eq!(t.classify("https://news.bbc.com/a"), DomainStatus::Trusted);
    }

    #[test]
    fn suspicious_host_matches() {
        let t = truster();
        assert_eq!(
            t.classify("http://globaltruthers.biz/miracle-cure"),
            DomainStatus::Suspicious
        );
    }

    #[test]
    fn unlisted_host_is_unknown() {
        let t = truster();
        assert_eq!(t.classify("https://example.org/post"), DomainStatus::Unknown);
    }

    #[test]
    fn malformed_urls_fail_soft() {
        let t = truster();
        for raw in ["", "not a url", "bbc.com/news", "https://", "://"] {
            assert_eq!(t.classify(raw), DomainStatus::Unknown, "input {raw:?}");
        }
    }

    #[test]
    fn host_matching_is_case_insensitive_and_idempotent() {
        let t = truster();
        let a = t.classify("HTTPS://WWW.NYTIMES.COM/2024/x");
        let b = t.classify("https://www.nytimes.com/2024/x");
        assert_eq!(a, b);
        assert_eq!(a, t.classify("HTTPS://WWW.NYTIMES.COM/2024/x"));
        assert_eq!(a, DomainStatus::Trusted);
    }

    #[test]
    fn check_keeps_normalized_host() {
        let c = truster().check("https://WWW.Example.org:8080/path?q=1");
        assert_eq!(c.status, DomainStatus::Unknown);
        assert_eq!(c.host.as_deref(), Some("example.org:8080"));
    }

    #[test]
    fn allowlist_wins_over_blocklist() {
        let t = DomainTruster::new(["cnn.com"], ["cnn"]);
        assert_eq!(t.classify("https://edition.cnn.com/"), DomainStatus::Trusted);
        assert_eq!(t.classify("https://fakecnnnews.net/"), DomainStatus::Suspicious);
    }

    #[test]
    fn empty_entries_are_ignored() {
        let t = DomainTruster::new(["", "  "], Vec::<String>::new());
        assert!(t.trusted().is_empty());
        assert_eq!(t.classify("https://anything.com"), DomainStatus::Unknown);
    }
}

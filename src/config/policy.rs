// src/config/policy.rs
//! Policy configuration: domain lists, clickbait lexicon, default mode.
//!
//! TOML shape (every section optional; missing sections use the built-in seed):
//! ```toml
//! [domains]
//! trusted = ["bbc.com", "reuters.com"]
//! suspicious = ["globaltruthers.biz"]
//!
//! [clickbait]
//! terms = ["shocking", "miracle"]
//!
//! [analysis]
//! default_mode = "strict"
//! ```
//!
//! Resolution order: `$VERDICT_POLICY_PATH` (must exist) → `config/policy.toml`
//! → built-in seed.

use anyhow::{anyhow, Context, Result};
use serde::Deserialize;
use std::collections::BTreeSet;
use std::fs;
use std::path::{Path, PathBuf};

use crate::clickbait::{ClickbaitScorer, DEFAULT_LEXICON};
use crate::domain::{DomainTruster, DEFAULT_SUSPICIOUS_DOMAINS, DEFAULT_TRUSTED_DOMAINS};
use crate::signal::Mode;

pub const DEFAULT_POLICY_PATH: &str = "config/policy.toml";
pub const ENV_POLICY_PATH: &str = "VERDICT_POLICY_PATH";

#[derive(Debug, Clone, PartialEq)]
pub struct PolicyConfig {
    pub trusted_domains: Vec<String>,
    pub suspicious_domains: Vec<String>,
    pub clickbait_terms: Vec<String>,
    pub default_mode: Mode,
}

#[derive(Debug, Deserialize)]
#[serde(deny_unknown_fields)]
struct PolicyFile {
    #[serde(default)]
    domains: Option<DomainsSection>,
    #[serde(default)]
    clickbait: Option<ClickbaitSection>,
    #[serde(default)]
    analysis: Option<AnalysisSection>,
}

#[derive(Debug, Deserialize)]
struct DomainsSection {
    trusted: Option<Vec<String>>,
    suspicious: Option<Vec<String>>,
}

#[derive(Debug, Deserialize)]
struct ClickbaitSection {
    terms: Vec<String>,
}

#[derive(Debug, Deserialize)]
struct AnalysisSection {
    default_mode: Option<String>,
}

impl Default for PolicyConfig {
    fn default() -> Self {
        Self::default_seed()
    }
}

impl PolicyConfig {
    /// Built-in policy, used when no file is present.
    pub fn default_seed() -> Self {
        Self {
            trusted_domains: to_strings(DEFAULT_TRUSTED_DOMAINS),
            suspicious_domains: to_strings(DEFAULT_SUSPICIOUS_DOMAINS),
            clickbait_terms: to_strings(DEFAULT_LEXICON),
            default_mode: Mode::Relax,
        }
    }

    pub fn from_toml_str(s: &str) -> Result<Self> {
        let file: PolicyFile = toml::from_str(s).context("parsing policy TOML")?;
        let mut cfg = Self::default_seed();

        if let Some(d) = file.domains {
            if let Some(t) = d.trusted {
                cfg.trusted_domains = clean_list(t);
            }
            if let Some(s) = d.suspicious {
                cfg.suspicious_domains = clean_list(s);
            }
        }
        if let Some(c) = file.clickbait {
            cfg.clickbait_terms = clean_list(c.terms);
        }
        if let Some(mode) = file.analysis.and_then(|a| a.default_mode) {
            cfg.default_mode = mode
                .parse()
                .with_context(|| format!("invalid analysis.default_mode {mode:?}"))?;
        }

        Ok(cfg)
    }

    pub fn load_from_file(path: &Path) -> Result<Self> {
        let content = fs::read_to_string(path)
            .with_context(|| format!("reading policy from {}", path.display()))?;
        Self::from_toml_str(&content).with_context(|| format!("loading {}", path.display()))
    }

    /// Env var first (must exist), then the default path, then the built-in seed.
    pub fn load_default() -> Result<Self> {
        if let Ok(p) = std::env::var(ENV_POLICY_PATH) {
            let pb = PathBuf::from(&p);
            if !pb.exists() {
                return Err(anyhow!("{ENV_POLICY_PATH} points to non-existent path: {p}"));
            }
            return Self::load_from_file(&pb);
        }
        let default = PathBuf::from(DEFAULT_POLICY_PATH);
        if default.exists() {
            return Self::load_from_file(&default);
        }
        Ok(Self::default_seed())
    }

    pub fn domain_truster(&self) -> DomainTruster {
        DomainTruster::new(&self.trusted_domains, &self.suspicious_domains)
    }

    pub fn clickbait_scorer(&self) -> ClickbaitScorer {
        ClickbaitScorer::new(&self.clickbait_terms)
    }
}

fn to_strings(items: &[&str]) -> Vec<String> {
    items.iter().map(|s| s.to_string()).collect()
}

fn clean_list(items: Vec<String>) -> Vec<String> {
    let mut seen = BTreeSet::new();
    let mut out = Vec::with_capacity(items.len());
    for it in items {
        let t = it.trim().to_lowercase();
        if !t.is_empty() && seen.insert(t.clone()) {
            out.push(t);
        }
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::DomainStatus;
    use std::{env, fs};

    #[test]
    fn empty_file_keeps_seed() {
        let cfg = PolicyConfig::from_toml_str("").unwrap();
        assert_eq!(cfg, PolicyConfig::default_seed());
    }

    #[test]
    fn sections_override_and_are_cleaned() {
        let toml = r#"
            [domains]
            trusted = [" Example.COM ", "", "example.com"]

            [clickbait]
            terms = ["OMG", "omg", "wow"]

            [analysis]
            default_mode = "Strict"
        "#;
        let cfg = PolicyConfig::from_toml_str(toml).unwrap();
        assert_eq!(cfg.trusted_domains, vec!["example.com".to_string()]);
        // untouched list keeps the seed
        assert_eq!(cfg.suspicious_domains.len(), DEFAULT_SUSPICIOUS_DOMAINS.len());
        assert_eq!(cfg.clickbait_terms, vec!["omg".to_string(), "wow".to_string()]);
        assert_eq!(cfg.default_mode, Mode::Strict);

        let truster = cfg.domain_truster();
        assert_eq!(truster.classify("https://www.example.com/x"), DomainStatus::Trusted);
        assert_eq!(truster.classify("https://bbc.com/x"), DomainStatus::Unknown);
    }

    #[test]
    fn bad_mode_is_an_error() {
        let err = PolicyConfig::from_toml_str("[analysis]\ndefault_mode = \"yolo\"").unwrap_err();
        assert!(format!("{err:#}").contains("default_mode"));
    }

    #[test]
    fn unknown_section_is_rejected() {
        assert!(PolicyConfig::from_toml_str("[weights]\nx = 1").is_err());
    }

    #[serial_test::serial]
    #[test]
    fn default_uses_env_then_fallbacks() {
        let old = env::current_dir().unwrap();
        let tmp = tempfile::tempdir().unwrap();
        env::set_current_dir(tmp.path()).unwrap();
        env::remove_var(ENV_POLICY_PATH);

        // nothing on disk → seed
        assert_eq!(PolicyConfig::load_default().unwrap(), PolicyConfig::default_seed());

        // config/policy.toml is picked up
        fs::create_dir_all("config").unwrap();
        fs::write(DEFAULT_POLICY_PATH, "[analysis]\ndefault_mode = \"strict\"").unwrap();
        assert_eq!(PolicyConfig::load_default().unwrap().default_mode, Mode::Strict);

        // env wins
        let p = tmp.path().join("other.toml");
        fs::write(&p, "[clickbait]\nterms = [\"x\"]").unwrap();
        env::set_var(ENV_POLICY_PATH, p.display().to_string());
        let cfg = PolicyConfig::load_default().unwrap();
        assert_eq!(cfg.clickbait_terms, vec!["x".to_string()]);
        assert_eq!(cfg.default_mode, Mode::Relax);

        // env pointing nowhere fails
        env::set_var(ENV_POLICY_PATH, tmp.path().join("missing.toml").display().to_string());
        assert!(PolicyConfig::load_default().is_err());

        env::remove_var(ENV_POLICY_PATH);
        env::set_current_dir(&old).unwrap();
    }
}

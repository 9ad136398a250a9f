// src/lib.rs
// Public library surface for integration tests (and potential reuse).

// Core: pure verdict aggregation, no I/O.
pub mod clickbait;
pub mod credibility;
pub mod decision;
pub mod domain;
pub mod engine;
pub mod explain;
pub mod signal;
pub mod verdict;

// Plumbing around the core
pub mod adapters;
pub mod api;
pub mod config;
pub mod history;
pub mod metrics;
pub mod text;

// ---- Re-exports for stable public API ----
pub use crate::api::{router, AppState};
pub use crate::decision::{Assessment, Reason, ReasonKind};
pub use crate::domain::DomainStatus;
pub use crate::engine::{AnalysisInput, Engine};
pub use crate::signal::{ClassifierOutput, Mode, ModeDecision, ModeLabel, ModelLabel};
pub use crate::verdict::Verdict;

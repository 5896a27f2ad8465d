//! # discovery-engine
//!
//! Hybrid scoring, matching and activation selection for the self-discovery
//! journey.
//!
//! ## Architecture
//!
//! ```text
//!   ┌──────────────┐   ┌──────────────┐
//!   │ Answers      │   │ WeightTable  │
//!   └──────┬───────┘   └──────┬───────┘
//!          └────────┬─────────┘
//!                   ▼
//!         ┌─────────────────────┐
//!         │ GeneScoreAggregator │  ← raw per-gene totals
//!         └─────────┬───────────┘
//!                   ▼
//!         ┌─────────────────────┐
//!         │ GeneScoreRanker     │  ← 0–100 scale, rank, role
//!         └─────────┬───────────┘
//!                   ▼
//!         ┌─────────────────────┐
//!         │ ArchetypeMatcher    │  ← cosine similarity, top-N
//!         └─────────┬───────────┘
//!                   ▼
//!         ┌─────────────────────┐
//!         │ ActivationSelector  │  ← trigger rules, priority fallback
//!         └─────────────────────┘
//! ```
//!
//! ## Key Principles
//!
//! - **Deterministic**: every ordering has a total tie-break, so the same
//!   catalog and answers always yield the same outcome.
//! - **Fail closed**: unrecognized trigger types never match.
//! - **No partial results**: catalog integrity errors abort the whole run.
//! - **Pure**: no I/O and no shared state; runs can proceed in parallel.

#![deny(unsafe_code)]
#![cfg_attr(feature = "strict-docs", warn(missing_docs))]
#![cfg_attr(not(feature = "strict-docs"), allow(missing_docs))]
#![warn(rust_2018_idioms)]

pub mod aggregator;
pub mod comparison;
pub mod config;
pub mod error;
pub mod matcher;
pub mod pipeline;
pub mod ranker;
pub mod rounding;
pub mod rules;
pub mod selector;

// ── Re-exports ──────────────────────────────────────────────────────────

pub use aggregator::{GeneScoreAggregator, RawGeneScores};
pub use comparison::compare_with_model;
pub use config::{EngineConfig, DEFAULT_TOP_N_MATCHES};
pub use error::{EngineError, EngineResult};
pub use matcher::{cosine_similarity, ArchetypeMatcher};
pub use pipeline::{
    compute_gene_scores, compute_hybrid_outcome, compute_model_matches, select_activation_items,
    HybridPipeline,
};
pub use ranker::GeneScoreRanker;
pub use rules::{rule_table, RuleContext, RuleDescription};
pub use selector::ActivationSelector;

//! # discovery-types
//!
//! Data model for the hybrid self-discovery engine: genes and answers,
//! archetype models, advice items and trigger rules, the indexed catalog
//! views the engine reads, and the result values it produces.
//!
//! Every value here is plain data. Catalog views are built once from a
//! [`CatalogSnapshot`] and only read afterwards, so they can be shared across
//! threads without synchronisation.

#![deny(unsafe_code)]
#![cfg_attr(feature = "strict-docs", warn(missing_docs))]
#![cfg_attr(not(feature = "strict-docs"), allow(missing_docs))]
#![warn(rust_2018_idioms)]

pub mod advice;
pub mod archetype;
pub mod catalog;
pub mod error;
pub mod gene;
pub mod outcome;

// ── Re-exports ──────────────────────────────────────────────────────────

pub use advice::{ActivationItemResult, AdviceItem, AdviceTrigger, Channel, TriggerType};
pub use archetype::{ArchetypeModel, GeneComparison, GeneVector, ModelMatchResult};
pub use catalog::{
    AdviceCatalog, Catalog, CatalogSnapshot, CatalogSummary, GeneCatalog, GeneWeight,
    ModelCatalog, TriggerCatalog, WeightTable,
};
pub use error::{TypesError, TypesResult};
pub use gene::{Answer, Gene, GeneRole, GeneScoreResult, OptionWeight};
pub use outcome::HybridOutcome;

//! End-to-end hybrid computation for one answer submission.
//!
//! The stages only ever flow forward:
//!
//! ```text
//!   answers ──► GeneScoreAggregator ──► GeneScoreRanker ──┬──────────────┐
//!                                                          ▼              ▼
//!                                                  ArchetypeMatcher ─► ActivationSelector
//! ```
//!
//! Every function here is pure: it reads its arguments, allocates locals and
//! returns. Identical inputs always produce identical outputs.

use discovery_types::{
    ActivationItemResult, AdviceCatalog, Answer, Catalog, GeneCatalog, GeneScoreResult,
    HybridOutcome, ModelCatalog, ModelMatchResult, TriggerCatalog, WeightTable,
};
use tracing::info;

use crate::aggregator::GeneScoreAggregator;
use crate::config::EngineConfig;
use crate::error::EngineResult;
use crate::matcher::ArchetypeMatcher;
use crate::ranker::GeneScoreRanker;
use crate::selector::ActivationSelector;

/// Aggregate and rank gene scores for an answer set.
pub fn compute_gene_scores(
    genes: &GeneCatalog,
    weights: &WeightTable,
    answers: &[Answer],
) -> EngineResult<Vec<GeneScoreResult>> {
    let raw = GeneScoreAggregator::new(genes, weights).aggregate(answers)?;
    Ok(GeneScoreRanker.rank(&raw))
}

/// Rank archetype models against ranked gene scores. Never fails.
pub fn compute_model_matches(
    gene_scores: &[GeneScoreResult],
    models: &ModelCatalog,
    top_n: usize,
) -> Vec<ModelMatchResult> {
    ArchetypeMatcher::new(models).top_matches(gene_scores, top_n)
}

/// Choose exactly one activation item per channel.
pub fn select_activation_items(
    gene_scores: &[GeneScoreResult],
    model_matches: &[ModelMatchResult],
    advice: &AdviceCatalog,
    triggers: &TriggerCatalog,
) -> EngineResult<Vec<ActivationItemResult>> {
    ActivationSelector::new(advice, triggers).select(gene_scores, model_matches)
}

/// Run every stage and bundle the results.
pub fn compute_hybrid_outcome(
    genes: &GeneCatalog,
    weights: &WeightTable,
    models: &ModelCatalog,
    advice: &AdviceCatalog,
    triggers: &TriggerCatalog,
    answers: &[Answer],
    top_n: usize,
) -> EngineResult<HybridOutcome> {
    let gene_scores = compute_gene_scores(genes, weights, answers)?;
    let model_matches = compute_model_matches(&gene_scores, models, top_n);
    let activation_items =
        select_activation_items(&gene_scores, &model_matches, advice, triggers)?;

    Ok(HybridOutcome {
        gene_scores,
        model_matches,
        activation_items,
    })
}

/// Configured entry point over an indexed [`Catalog`].
#[derive(Debug, Clone, Default)]
pub struct HybridPipeline {
    config: EngineConfig,
}

impl HybridPipeline {
    pub fn new(config: EngineConfig) -> Self {
        Self { config }
    }

    pub fn config(&self) -> &EngineConfig {
        &self.config
    }

    /// Compute the outcome for one answer set against one catalog version.
    pub fn run(&self, catalog: &Catalog, answers: &[Answer]) -> EngineResult<HybridOutcome> {
        let outcome = compute_hybrid_outcome(
            &catalog.genes,
            &catalog.weights,
            &catalog.models,
            &catalog.advice,
            &catalog.triggers,
            answers,
            self.config.top_n_matches,
        )?;

        info!(
            version = %catalog.version_id,
            answers = answers.len(),
            genes = outcome.gene_scores.len(),
            matches = outcome.model_matches.len(),
            fallbacks = outcome.activation_items.iter().filter(|a| a.is_fallback).count(),
            "computed hybrid outcome"
        );
        Ok(outcome)
    }
}

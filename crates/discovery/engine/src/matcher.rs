//! Archetype matching by cosine similarity.
//!
//! The user's vector is built from *raw* gene scores. Normalizing to 0–100
//! first would erase the relative magnitude between strong and weak genes.

use std::cmp::Ordering;

use discovery_types::{GeneScoreResult, ModelCatalog, ModelMatchResult};
use tracing::{debug, trace};

use crate::rounding::{round_to, SIMILARITY_DECIMALS};

/// Cosine similarity of two equally sized vectors.
///
/// A zero-norm operand yields 0.0 rather than NaN.
///
/// # Panics
///
/// Panics when the vectors differ in length. Both sides are always projected
/// onto the same gene axis, so a mismatch is a bug in the caller.
pub fn cosine_similarity(a: &[f64], b: &[f64]) -> f64 {
    assert_eq!(
        a.len(),
        b.len(),
        "cosine vectors must have identical dimensions"
    );

    let dot: f64 = a.iter().zip(b).map(|(x, y)| x * y).sum();
    let norm_a = a.iter().map(|x| x * x).sum::<f64>().sqrt();
    let norm_b = b.iter().map(|y| y * y).sum::<f64>().sqrt();

    if norm_a == 0.0 || norm_b == 0.0 {
        return 0.0;
    }
    dot / (norm_a * norm_b)
}

/// Ranks archetype models against a gene profile.
#[derive(Debug, Clone, Copy)]
pub struct ArchetypeMatcher<'a> {
    models: &'a ModelCatalog,
}

impl<'a> ArchetypeMatcher<'a> {
    pub fn new(models: &'a ModelCatalog) -> Self {
        Self { models }
    }

    /// Best `top_n` models ordered by `(similarity desc, model_code asc)`.
    ///
    /// `top_n == 0` returns an empty list without computing anything.
    pub fn top_matches(&self, gene_scores: &[GeneScoreResult], top_n: usize) -> Vec<ModelMatchResult> {
        if top_n == 0 {
            return Vec::new();
        }

        let (axis, user_vector) = profile_vector(gene_scores);

        let mut scored: Vec<(&str, f64)> = self
            .models
            .iter()
            .map(|model| {
                let model_vector = model.gene_vector.project(&axis);
                let similarity = round_to(
                    cosine_similarity(&user_vector, &model_vector),
                    SIMILARITY_DECIMALS,
                );
                trace!(model = %model.model_code, similarity, "scored archetype");
                (model.model_code.as_str(), similarity)
            })
            .collect();

        scored.sort_by(compare_similarity);

        let matches: Vec<ModelMatchResult> = scored
            .into_iter()
            .take(top_n)
            .enumerate()
            .map(|(index, (model_code, similarity))| ModelMatchResult {
                model_code: model_code.to_string(),
                similarity,
                rank: index + 1,
            })
            .collect();

        debug!(
            candidates = self.models.len(),
            returned = matches.len(),
            best = matches.first().map(|m| m.model_code.as_str()),
            "matched archetype models"
        );
        matches
    }
}

/// Sorted gene axis and the raw scores projected onto it.
fn profile_vector(gene_scores: &[GeneScoreResult]) -> (Vec<String>, Vec<f64>) {
    let mut pairs: Vec<(&str, f64)> = gene_scores
        .iter()
        .map(|score| (score.gene_code.as_str(), score.raw_score))
        .collect();
    pairs.sort_by(|a, b| a.0.cmp(b.0));
    pairs.dedup_by(|a, b| a.0 == b.0);

    pairs
        .into_iter()
        .map(|(code, raw)| (code.to_string(), raw))
        .unzip()
}

fn compare_similarity(a: &(&str, f64), b: &(&str, f64)) -> Ordering {
    b.1.total_cmp(&a.1).then_with(|| a.0.cmp(b.0))
}

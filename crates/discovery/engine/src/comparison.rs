//! Gene-by-gene comparison between a profile and one archetype.

use discovery_types::{ArchetypeModel, GeneComparison, GeneScoreResult};

use crate::rounding::{round_to, RAW_SCORE_DECIMALS};

/// Compare raw gene scores with an archetype's reference weights.
///
/// Rows cover every gene of the profile, closest genes first, ties broken by
/// gene code. Genes the archetype does not mention compare against 0.0.
pub fn compare_with_model(
    gene_scores: &[GeneScoreResult],
    model: &ArchetypeModel,
) -> Vec<GeneComparison> {
    let mut rows: Vec<GeneComparison> = gene_scores
        .iter()
        .map(|score| {
            let model_score = model.gene_vector.weight(&score.gene_code);
            GeneComparison {
                gene_code: score.gene_code.clone(),
                user_score: score.raw_score,
                model_score,
                difference: round_to((score.raw_score - model_score).abs(), RAW_SCORE_DECIMALS),
            }
        })
        .collect();

    rows.sort_by(|a, b| {
        a.difference
            .total_cmp(&b.difference)
            .then_with(|| a.gene_code.cmp(&b.gene_code))
    });
    rows
}

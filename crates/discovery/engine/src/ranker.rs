//! Normalization and deterministic ranking of raw gene scores.

use std::cmp::Ordering;

use discovery_types::{GeneRole, GeneScoreResult};
use tracing::debug;

use crate::aggregator::RawGeneScores;
use crate::rounding::{round_to, NORMALIZED_SCORE_DECIMALS, RAW_SCORE_DECIMALS};

/// Ranks raw gene totals into [`GeneScoreResult`]s.
///
/// Scores are normalized against the strongest gene. When no gene is
/// positive every normalized score is 0.0, so the least-negative gene is
/// never reported as a full match. The order is `(raw desc, gene_code asc)`
/// and ranks 1–3 carry the dominant, secondary and support roles.
#[derive(Debug, Default, Clone, Copy)]
pub struct GeneScoreRanker;

impl GeneScoreRanker {
    pub fn rank(&self, raw_scores: &RawGeneScores) -> Vec<GeneScoreResult> {
        if raw_scores.is_empty() {
            return Vec::new();
        }

        let max_raw = raw_scores
            .values()
            .copied()
            .fold(f64::NEG_INFINITY, f64::max);

        let mut ordered: Vec<(&String, f64)> = raw_scores
            .iter()
            .map(|(code, raw)| (code, *raw))
            .collect();
        ordered.sort_by(|a, b| compare_raw(a, b));

        let ranked: Vec<GeneScoreResult> = ordered
            .into_iter()
            .enumerate()
            .map(|(index, (gene_code, raw))| {
                let rank = index + 1;
                GeneScoreResult {
                    gene_code: gene_code.clone(),
                    raw_score: round_to(raw, RAW_SCORE_DECIMALS),
                    normalized_score: normalize(raw, max_raw),
                    rank,
                    role: GeneRole::for_rank(rank),
                }
            })
            .collect();

        debug!(
            genes = ranked.len(),
            max_raw,
            dominant = ranked.first().map(|g| g.gene_code.as_str()),
            "ranked gene scores"
        );
        ranked
    }
}

fn compare_raw(a: &(&String, f64), b: &(&String, f64)) -> Ordering {
    order_key(b.1)
        .total_cmp(&order_key(a.1))
        .then_with(|| a.0.cmp(b.0))
}

/// Folds -0.0 onto 0.0 so equal totals tie-break on gene code.
fn order_key(value: f64) -> f64 {
    if value == 0.0 {
        0.0
    } else {
        value
    }
}

fn normalize(raw: f64, max_raw: f64) -> f64 {
    if max_raw <= 0.0 {
        return 0.0;
    }
    let scaled = (raw / max_raw * 100.0).clamp(0.0, 100.0);
    round_to(scaled, NORMALIZED_SCORE_DECIMALS)
}

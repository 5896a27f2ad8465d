//! Property tests: gene ranking is a clamped, strict total order with fixed roles.

use discovery_engine::{GeneScoreRanker, RawGeneScores};
use discovery_types::GeneRole;
use proptest::prelude::*;

// ---------------------------------------------------------------------------
// Strategies
// ---------------------------------------------------------------------------

/// Raw scores for up to eight genes, including ties and negatives.
fn arb_raw_scores() -> impl Strategy<Value = RawGeneScores> {
    prop::collection::btree_map(
        "[A-Z]{3}",
        prop_oneof![
            (-20i32..20).prop_map(f64::from),
            -50.0f64..50.0,
        ],
        0..8,
    )
}

proptest! {
    /// Normalized scores always stay within [0, 100].
    #[test]
    fn normalized_scores_are_clamped(raw in arb_raw_scores()) {
        for score in GeneScoreRanker.rank(&raw) {
            prop_assert!((0.0..=100.0).contains(&score.normalized_score));
        }
    }

    /// With no positive gene, every normalized score is zero.
    #[test]
    fn non_positive_profiles_normalize_to_zero(raw in arb_raw_scores()) {
        let non_positive: RawGeneScores = raw
            .into_iter()
            .map(|(code, value)| (code, -value.abs()))
            .collect();
        for score in GeneScoreRanker.rank(&non_positive) {
            prop_assert_eq!(score.normalized_score, 0.0);
        }
    }

    /// Ranks are 1..=n without gaps, ordered by raw desc then gene code asc.
    #[test]
    fn ranks_form_a_strict_total_order(raw in arb_raw_scores()) {
        let ranked = GeneScoreRanker.rank(&raw);
        prop_assert_eq!(ranked.len(), raw.len());

        for (index, score) in ranked.iter().enumerate() {
            prop_assert_eq!(score.rank, index + 1);
        }

        for pair in ranked.windows(2) {
            let (a, b) = (&pair[0], &pair[1]);
            let a_raw = raw[&a.gene_code];
            let b_raw = raw[&b.gene_code];
            prop_assert!(a_raw > b_raw || (a_raw == b_raw && a.gene_code < b.gene_code));
        }
    }

    /// Roles follow rank exactly, for catalogs of any size.
    #[test]
    fn roles_follow_rank(raw in arb_raw_scores()) {
        for score in GeneScoreRanker.rank(&raw) {
            let expected = match score.rank {
                1 => GeneRole::Dominant,
                2 => GeneRole::Secondary,
                3 => GeneRole::Support,
                _ => GeneRole::Unassigned,
            };
            prop_assert_eq!(score.role, expected);
        }
    }
}

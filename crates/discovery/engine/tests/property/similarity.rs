//! Property tests: cosine similarity is bounded and never NaN.

use discovery_engine::cosine_similarity;
use proptest::prelude::*;

fn arb_vector_pair() -> impl Strategy<Value = (Vec<f64>, Vec<f64>)> {
    (0usize..10).prop_flat_map(|len| {
        (
            prop::collection::vec(-100.0f64..100.0, len),
            prop::collection::vec(-100.0f64..100.0, len),
        )
    })
}

proptest! {
    /// Similarity with a zero vector is exactly zero on either side.
    #[test]
    fn zero_vector_yields_zero(v in prop::collection::vec(-100.0f64..100.0, 0..10)) {
        let zero = vec![0.0; v.len()];
        prop_assert_eq!(cosine_similarity(&v, &zero), 0.0);
        prop_assert_eq!(cosine_similarity(&zero, &v), 0.0);
        prop_assert_eq!(cosine_similarity(&zero, &zero), 0.0);
    }

    /// Similarity is finite, symmetric and within [-1, 1].
    #[test]
    fn similarity_is_bounded_and_symmetric((a, b) in arb_vector_pair()) {
        let ab = cosine_similarity(&a, &b);
        let ba = cosine_similarity(&b, &a);
        prop_assert!(!ab.is_nan());
        prop_assert!((-1.0 - 1e-9..=1.0 + 1e-9).contains(&ab));
        prop_assert!((ab - ba).abs() < 1e-12);
    }
}

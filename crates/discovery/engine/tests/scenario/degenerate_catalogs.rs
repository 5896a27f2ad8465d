//! Catalog shapes at the edges of the contract.

use discovery_engine::{
    compute_gene_scores, compute_hybrid_outcome, compute_model_matches, EngineError,
    HybridPipeline,
};
use discovery_types::{
    AdviceCatalog, AdviceItem, AdviceTrigger, Answer, ArchetypeModel, Catalog, CatalogSnapshot,
    Channel, Gene, GeneCatalog, GeneVector, ModelCatalog, OptionWeight, TriggerCatalog,
    WeightTable,
};

fn one_item_per_channel() -> Vec<AdviceItem> {
    vec![
        AdviceItem::new("B", Channel::Behavior, 1),
        AdviceItem::new("R", Channel::Reflection, 1),
        AdviceItem::new("S", Channel::Social, 1),
    ]
}

#[test]
fn empty_gene_catalog_scores_nothing() {
    let scores = compute_gene_scores(&GeneCatalog::default(), &WeightTable::default(), &[]).unwrap();
    assert!(scores.is_empty());

    let models = ModelCatalog::new([ArchetypeModel::new(
        "ABU",
        [("WIS", 1.0)].into_iter().collect::<GeneVector>(),
    )]);
    let matches = compute_model_matches(&scores, &models, 3);
    assert_eq!(matches.len(), 1);
    assert_eq!(matches[0].similarity, 0.0);
}

#[test]
fn unanswered_profile_is_all_zero() {
    let genes = GeneCatalog::new([Gene::new("WIS"), Gene::new("CRG")]);
    let models = ModelCatalog::new([
        ArchetypeModel::new("B_MODEL", [("WIS", 1.0)].into_iter().collect::<GeneVector>()),
        ArchetypeModel::new("A_MODEL", [("CRG", 1.0)].into_iter().collect::<GeneVector>()),
    ]);
    let advice = AdviceCatalog::new(one_item_per_channel());
    let triggers = TriggerCatalog::new([AdviceTrigger::new(
        "T",
        "TOP_MODEL",
        Channel::Behavior,
        "B",
    )
    .for_model("A_MODEL")]);

    let outcome = compute_hybrid_outcome(
        &genes,
        &WeightTable::default(),
        &models,
        &advice,
        &triggers,
        &[],
        3,
    )
    .unwrap();

    let codes: Vec<_> = outcome.gene_scores.iter().map(|g| g.gene_code.as_str()).collect();
    assert_eq!(codes, vec!["CRG", "WIS"]);
    assert!(outcome.gene_scores.iter().all(|g| g.normalized_score == 0.0));

    // Zero vectors tie at 0.0 and fall back to model code order.
    let models: Vec<_> = outcome.model_matches.iter().map(|m| m.model_code.as_str()).collect();
    assert_eq!(models, vec!["A_MODEL", "B_MODEL"]);
    assert!(outcome.model_matches.iter().all(|m| m.similarity == 0.0));

    // A_MODEL is rank 1 and 0.0 sits inside the default range.
    assert!(!outcome.activation_items[0].is_fallback);
}

#[test]
fn no_models_still_selects_content() {
    let catalog = Catalog::from_snapshot(CatalogSnapshot {
        version_id: "bare".into(),
        genes: vec![Gene::new("WIS")],
        option_weights: vec![OptionWeight::new("S1", "A", "WIS", 1.0)],
        advice_items: one_item_per_channel(),
        ..CatalogSnapshot::default()
    });

    let outcome = HybridPipeline::default()
        .run(&catalog, &[Answer::new("S1", "A")])
        .unwrap();
    assert!(outcome.model_matches.is_empty());
    assert_eq!(outcome.activation_items.len(), 3);
    assert!(outcome.activation_items.iter().all(|a| a.is_fallback));
}

#[test]
fn unwired_answer_is_missing_weight() {
    let genes = GeneCatalog::new([Gene::new("WIS")]);
    let weights = WeightTable::new([OptionWeight::new("S1", "A", "WIS", 1.0)]);

    let err = compute_gene_scores(&genes, &weights, &[Answer::new("S1", "B")]).unwrap_err();
    assert_eq!(
        err,
        EngineError::MissingWeight {
            scenario_code: "S1".into(),
            option_code: "B".into(),
        }
    );
}

#[test]
fn weight_for_undeclared_gene_is_unknown_gene() {
    let genes = GeneCatalog::new([Gene::new("WIS")]);
    let weights = WeightTable::new([
        OptionWeight::new("S1", "A", "WIS", 1.0),
        OptionWeight::new("S1", "A", "GHOST", 1.0),
    ]);

    let err = compute_gene_scores(&genes, &weights, &[Answer::new("S1", "A")]).unwrap_err();
    assert!(matches!(err, EngineError::UnknownGene { ref gene_code, .. } if gene_code == "GHOST"));
}

#[test]
fn channel_without_items_is_no_content() {
    let catalog = Catalog::from_snapshot(CatalogSnapshot {
        version_id: "gap".into(),
        genes: vec![Gene::new("WIS")],
        advice_items: vec![
            AdviceItem::new("B", Channel::Behavior, 1),
            AdviceItem::new("R", Channel::Reflection, 1),
        ],
        ..CatalogSnapshot::default()
    });

    let err = HybridPipeline::default().run(&catalog, &[]).unwrap_err();
    assert_eq!(
        err,
        EngineError::NoContent {
            channel: Channel::Social
        }
    );
    assert_eq!(
        err.to_string(),
        "no advice items found for activation channel `social`"
    );
}

#[test]
fn negative_weights_never_normalize_above_zero() {
    let genes = GeneCatalog::new([Gene::new("WIS"), Gene::new("CRG")]);
    let weights = WeightTable::new([
        OptionWeight::new("S1", "A", "WIS", -2.0),
        OptionWeight::new("S1", "A", "CRG", -1.0),
    ]);

    let scores = compute_gene_scores(&genes, &weights, &[Answer::new("S1", "A")]).unwrap();
    assert_eq!(scores[0].gene_code, "CRG");
    assert_eq!(scores[0].raw_score, -1.0);
    assert!(scores.iter().all(|g| g.normalized_score == 0.0));
}

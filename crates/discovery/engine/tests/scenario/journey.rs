//! A full submission against a catalog loaded from its serialized form.

use discovery_engine::{compare_with_model, EngineConfig, HybridPipeline};
use discovery_types::{Answer, Catalog, CatalogSnapshot, Channel, GeneRole};

const CATALOG: &str = r#"{
  "version_id": "2024.1",
  "genes": [
    { "gene_code": "WIS", "name": "Wisdom" },
    { "gene_code": "CRG", "name": "Courage" },
    { "gene_code": "EMP", "name": "Empathy" }
  ],
  "option_weights": [
    { "scenario_code": "S1", "option_code": "A", "gene_code": "WIS", "weight": 4.0 },
    { "scenario_code": "S1", "option_code": "A", "gene_code": "CRG", "weight": 1.0 },
    { "scenario_code": "S1", "option_code": "B", "gene_code": "EMP", "weight": 3.0 },
    { "scenario_code": "S2", "option_code": "A", "gene_code": "WIS", "weight": 2.0 },
    { "scenario_code": "S2", "option_code": "A", "gene_code": "EMP", "weight": 2.0 },
    { "scenario_code": "S3", "option_code": "C", "gene_code": "CRG", "weight": 3.0 }
  ],
  "models": [
    { "model_code": "ABUBAKR", "name": "The Steadfast", "gene_vector": { "WIS": 0.9, "CRG": 0.6, "EMP": 0.3 } },
    { "model_code": "UMAR", "name": "The Just", "gene_vector": { "CRG": 1.0, "WIS": 0.2 } },
    { "model_code": "KHADIJA", "name": "The Generous", "gene_vector": { "EMP": 1.0 } },
    { "model_code": "ALI", "name": "The Scholar", "gene_vector": { "WIS": 1.0 } }
  ],
  "advice_items": [
    { "advice_id": "B_WIS", "channel": "behavior", "title": "Pause before acting", "priority": 90 },
    { "advice_id": "B_GENERIC", "channel": "behavior", "title": "Keep a journal", "priority": 10 },
    { "advice_id": "R_CRG", "channel": "reflection", "title": "Name one fear", "priority": 70 },
    { "advice_id": "R_GENERIC", "channel": "reflection", "title": "Evening review", "priority": 20 },
    { "advice_id": "S_LOW", "channel": "social", "title": "Call a friend", "priority": 80 },
    { "advice_id": "S_HIGH", "channel": "social", "title": "Host a dinner", "priority": 95 }
  ],
  "triggers": [
    { "trigger_id": "T_B_WIS", "trigger_type": "top_gene", "gene_code": "WIS", "channel": "behavior", "advice_id": "B_WIS", "min_score": 90, "max_score": 100 },
    { "trigger_id": "T_R_CRG", "trigger_type": "SECONDARY_GENE", "gene_code": "CRG", "channel": "reflection", "advice_id": "R_CRG" },
    { "trigger_id": "T_S_WIS", "trigger_type": "TOP_GENE", "gene_code": "CRG", "channel": "social", "advice_id": "S_LOW" }
  ]
}"#;

fn catalog() -> Catalog {
    let snapshot: CatalogSnapshot = serde_json::from_str(CATALOG).unwrap();
    Catalog::from_snapshot(snapshot)
}

fn answers() -> Vec<Answer> {
    vec![
        Answer::new("S1", "A"),
        Answer::new("S2", "A"),
        Answer::new("S3", "C"),
    ]
}

#[test]
fn submission_produces_ranked_profile() {
    let outcome = HybridPipeline::default().run(&catalog(), &answers()).unwrap();

    let profile: Vec<_> = outcome
        .gene_scores
        .iter()
        .map(|g| (g.gene_code.as_str(), g.raw_score, g.normalized_score, g.rank, g.role))
        .collect();
    assert_eq!(
        profile,
        vec![
            ("WIS", 6.0, 100.0, 1, GeneRole::Dominant),
            ("CRG", 4.0, 66.67, 2, GeneRole::Secondary),
            ("EMP", 2.0, 33.33, 3, GeneRole::Support),
        ]
    );
}

#[test]
fn default_config_returns_three_matches() {
    let outcome = HybridPipeline::default().run(&catalog(), &answers()).unwrap();

    assert_eq!(outcome.model_matches.len(), 3);
    assert_eq!(outcome.best_match().unwrap().model_code, "ABUBAKR");
    let ranks: Vec<_> = outcome.model_matches.iter().map(|m| m.rank).collect();
    assert_eq!(ranks, vec![1, 2, 3]);
    assert!(outcome
        .model_matches
        .windows(2)
        .all(|pair| pair[0].similarity >= pair[1].similarity));
    assert!(outcome
        .model_matches
        .iter()
        .all(|m| (0.0..=1.0).contains(&m.similarity)));
}

#[test]
fn one_activation_per_channel() {
    let outcome = HybridPipeline::default().run(&catalog(), &answers()).unwrap();

    let behavior = outcome.activation_for(Channel::Behavior).unwrap();
    assert_eq!(behavior.advice_id, "B_WIS");
    assert_eq!(behavior.trigger_id.as_deref(), Some("T_B_WIS"));
    assert_eq!(behavior.title, "Pause before acting");

    let reflection = outcome.activation_for(Channel::Reflection).unwrap();
    assert_eq!(reflection.advice_id, "R_CRG");
    assert!(!reflection.is_fallback);

    // CRG is rank 2, so the social TOP_GENE trigger never qualifies.
    let social = outcome.activation_for(Channel::Social).unwrap();
    assert_eq!(social.advice_id, "S_HIGH");
    assert_eq!(social.priority, 95);
    assert!(social.is_fallback);
}

#[test]
fn narrower_config_limits_matches() {
    let pipeline = HybridPipeline::new(EngineConfig::default().with_top_n_matches(1));
    let outcome = pipeline.run(&catalog(), &answers()).unwrap();
    assert_eq!(outcome.model_matches.len(), 1);
}

#[test]
fn comparison_against_best_match() {
    let catalog = catalog();
    let outcome = HybridPipeline::default().run(&catalog, &answers()).unwrap();
    let best = catalog
        .models
        .get(&outcome.best_match().unwrap().model_code)
        .unwrap();

    let rows = compare_with_model(&outcome.gene_scores, best);
    assert_eq!(rows.len(), 3);
    assert_eq!(rows[0].gene_code, "EMP");
    assert_eq!(rows[0].difference, 1.7);
    assert!(rows.windows(2).all(|pair| pair[0].difference <= pair[1].difference));
}

#[test]
fn outcome_serializes_identically_across_runs() {
    let catalog = catalog();
    let pipeline = HybridPipeline::default();
    let first = serde_json::to_string(&pipeline.run(&catalog, &answers()).unwrap()).unwrap();
    let second = serde_json::to_string(&pipeline.run(&catalog, &answers()).unwrap()).unwrap();
    assert_eq!(first, second);
    assert!(first.contains("\"role\":\"dominant\""));
}

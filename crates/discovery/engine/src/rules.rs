//! Trigger-type conditions evaluated against a ranked profile.

use std::collections::BTreeMap;

use discovery_types::{AdviceTrigger, GeneRole, GeneScoreResult, ModelMatchResult, TriggerType};
use serde::Serialize;

use crate::rounding::{round_to, MATCH_SCORE_DECIMALS};

/// Read-only view of the ranked profile used by trigger rules.
#[derive(Debug, Clone, Default)]
pub struct RuleContext<'a> {
    role_genes: BTreeMap<GeneRole, &'a str>,
    gene_scores: BTreeMap<&'a str, f64>,
    model_scores: BTreeMap<&'a str, f64>,
    top_model: Option<&'a str>,
}

impl<'a> RuleContext<'a> {
    pub fn new(gene_scores: &'a [GeneScoreResult], model_matches: &'a [ModelMatchResult]) -> Self {
        let role_genes = gene_scores
            .iter()
            .filter(|score| score.role.is_ranked())
            .map(|score| (score.role, score.gene_code.as_str()))
            .collect();

        let gene_scores = gene_scores
            .iter()
            .map(|score| (score.gene_code.as_str(), score.normalized_score))
            .collect();

        let model_scores = model_matches
            .iter()
            .map(|m| (m.model_code.as_str(), m.percentage()))
            .collect();

        let top_model = model_matches
            .iter()
            .find(|m| m.rank == 1)
            .map(|m| m.model_code.as_str());

        Self {
            role_genes,
            gene_scores,
            model_scores,
            top_model,
        }
    }

    /// Gene code holding a ranked role.
    pub fn gene_for(&self, role: GeneRole) -> Option<&'a str> {
        self.role_genes.get(&role).copied()
    }

    /// Normalized score of a gene in the profile.
    pub fn gene_score(&self, gene_code: &str) -> Option<f64> {
        self.gene_scores.get(gene_code).copied()
    }

    /// Similarity × 100 of a model among the returned matches.
    pub fn model_score(&self, model_code: &str) -> Option<f64> {
        self.model_scores.get(model_code).copied()
    }

    pub fn top_model(&self) -> Option<&'a str> {
        self.top_model
    }

    fn gene_has_role(&self, gene_code: Option<&str>, role: GeneRole) -> bool {
        match (gene_code, self.gene_for(role)) {
            (Some(gene), Some(holder)) => gene == holder,
            _ => false,
        }
    }

    /// Whether the trigger's type condition holds for this profile.
    ///
    /// A condition naming a gene or model only holds when the trigger names
    /// one and the profile has a holder for the role.
    pub fn type_condition_holds(&self, trigger: &AdviceTrigger) -> bool {
        let gene = trigger.gene_code.as_deref();
        match &trigger.trigger_type {
            TriggerType::TopGene => self.gene_has_role(gene, GeneRole::Dominant),
            TriggerType::SecondaryGene => self.gene_has_role(gene, GeneRole::Secondary),
            TriggerType::SupportGene => self.gene_has_role(gene, GeneRole::Support),
            TriggerType::Top2Gene => {
                self.gene_has_role(gene, GeneRole::Dominant)
                    || self.gene_has_role(gene, GeneRole::Secondary)
            }
            TriggerType::TopModel => match (trigger.model_code.as_deref(), self.top_model) {
                (Some(model), Some(top)) => model == top,
                _ => false,
            },
            TriggerType::Any => true,
            TriggerType::Unrecognized(_) => false,
        }
    }

    /// Match score of a trigger whose type condition holds.
    ///
    /// Returns `None` when a named gene or model is absent from the profile
    /// or its score falls outside the trigger's inclusive range. Otherwise the
    /// score is the larger of the applicable gene and model scores, or 0.0
    /// when the trigger names neither.
    pub fn score_constraint(&self, trigger: &AdviceTrigger) -> Option<f64> {
        let mut match_score = 0.0_f64;

        if let Some(gene_code) = trigger.gene_code.as_deref() {
            let score = self.gene_score(gene_code)?;
            if !trigger.accepts_score(score) {
                return None;
            }
            match_score = match_score.max(score);
        }

        if let Some(model_code) = trigger.model_code.as_deref() {
            let score = self.model_score(model_code)?;
            if !trigger.accepts_score(score) {
                return None;
            }
            match_score = match_score.max(score);
        }

        Some(round_to(match_score, MATCH_SCORE_DECIMALS))
    }
}

/// One row of the trigger-type condition table.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct RuleDescription {
    pub trigger_type: &'static str,
    pub aliases: Vec<&'static str>,
    pub condition: &'static str,
}

/// The condition table in evaluation-independent order.
pub fn rule_table() -> Vec<RuleDescription> {
    vec![
        RuleDescription {
            trigger_type: "TOP_GENE",
            aliases: vec![],
            condition: "trigger gene is the rank-1 (dominant) gene",
        },
        RuleDescription {
            trigger_type: "SECONDARY_GENE",
            aliases: vec![],
            condition: "trigger gene is the rank-2 (secondary) gene",
        },
        RuleDescription {
            trigger_type: "SUPPORT_GENE",
            aliases: vec![],
            condition: "trigger gene is the rank-3 (support) gene",
        },
        RuleDescription {
            trigger_type: "TOP_2_GENE",
            aliases: vec!["TOP2_GENE"],
            condition: "trigger gene is the rank-1 or rank-2 gene",
        },
        RuleDescription {
            trigger_type: "TOP_MODEL",
            aliases: vec!["BEST_MODEL"],
            condition: "trigger model is the rank-1 archetype match",
        },
        RuleDescription {
            trigger_type: "ANY",
            aliases: vec!["ANY_GENE", "ANY_MODEL"],
            condition: "always",
        },
    ]
}

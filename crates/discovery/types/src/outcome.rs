//! The full result bundle of one pipeline run.

use serde::{Deserialize, Serialize};

use crate::advice::{ActivationItemResult, Channel};
use crate::archetype::ModelMatchResult;
use crate::gene::{GeneRole, GeneScoreResult};

/// Gene scores, model matches and activation items for one answer set.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct HybridOutcome {
    pub gene_scores: Vec<GeneScoreResult>,
    pub model_matches: Vec<ModelMatchResult>,
    pub activation_items: Vec<ActivationItemResult>,
}

impl HybridOutcome {
    /// Gene holding a ranked role, if the profile has that many genes.
    pub fn gene_with_role(&self, role: GeneRole) -> Option<&GeneScoreResult> {
        if !role.is_ranked() {
            return None;
        }
        self.gene_scores.iter().find(|score| score.role == role)
    }

    pub fn best_match(&self) -> Option<&ModelMatchResult> {
        self.model_matches.first()
    }

    pub fn activation_for(&self, channel: Channel) -> Option<&ActivationItemResult> {
        self.activation_items
            .iter()
            .find(|item| item.channel == channel)
    }
}

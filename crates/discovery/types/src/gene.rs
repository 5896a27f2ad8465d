//! Genes, answers, option weights and ranked gene scores.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

use crate::error::TypesError;

/// A latent trait dimension scored from answered scenario options.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct Gene {
    pub gene_code: String,
    #[serde(default)]
    pub name: String,
    #[serde(default)]
    pub description: String,
}

impl Gene {
    pub fn new(gene_code: impl Into<String>) -> Self {
        Self {
            gene_code: gene_code.into(),
            name: String::new(),
            description: String::new(),
        }
    }

    pub fn with_name(mut self, name: impl Into<String>) -> Self {
        self.name = name.into();
        self
    }

    pub fn with_description(mut self, description: impl Into<String>) -> Self {
        self.description = description.into();
        self
    }
}

/// One answered scenario. The caller has already trimmed and deduplicated it.
#[derive(Clone, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Answer {
    pub scenario_code: String,
    pub option_code: String,
}

impl Answer {
    pub fn new(scenario_code: impl Into<String>, option_code: impl Into<String>) -> Self {
        Self {
            scenario_code: scenario_code.into(),
            option_code: option_code.into(),
        }
    }
}

/// How much an answered option contributes to one gene.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct OptionWeight {
    pub scenario_code: String,
    pub option_code: String,
    pub gene_code: String,
    pub weight: f64,
}

impl OptionWeight {
    pub fn new(
        scenario_code: impl Into<String>,
        option_code: impl Into<String>,
        gene_code: impl Into<String>,
        weight: f64,
    ) -> Self {
        Self {
            scenario_code: scenario_code.into(),
            option_code: option_code.into(),
            gene_code: gene_code.into(),
            weight,
        }
    }
}

/// Qualitative label derived from a gene's rank.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum GeneRole {
    /// Rank 1.
    Dominant,
    /// Rank 2.
    Secondary,
    /// Rank 3.
    Support,
    /// Any rank past the third.
    #[serde(rename = "none")]
    Unassigned,
}

impl GeneRole {
    /// Roles handed out to the top ranks, in rank order.
    pub const RANKED: [GeneRole; 3] = [GeneRole::Dominant, GeneRole::Secondary, GeneRole::Support];

    /// Role for a 1-based rank.
    pub fn for_rank(rank: usize) -> Self {
        rank.checked_sub(1)
            .and_then(|index| Self::RANKED.get(index).copied())
            .unwrap_or(GeneRole::Unassigned)
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            GeneRole::Dominant => "dominant",
            GeneRole::Secondary => "secondary",
            GeneRole::Support => "support",
            GeneRole::Unassigned => "none",
        }
    }

    /// Whether the role is one of the three ranked roles.
    pub fn is_ranked(&self) -> bool {
        !matches!(self, GeneRole::Unassigned)
    }
}

impl fmt::Display for GeneRole {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for GeneRole {
    type Err = TypesError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "dominant" => Ok(GeneRole::Dominant),
            "secondary" => Ok(GeneRole::Secondary),
            "support" => Ok(GeneRole::Support),
            "none" => Ok(GeneRole::Unassigned),
            _ => Err(TypesError::UnknownRole(s.to_string())),
        }
    }
}

/// A ranked, normalized gene score.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct GeneScoreResult {
    pub gene_code: String,
    /// Summed option weights, rounded to 4 decimals.
    pub raw_score: f64,
    /// Score relative to the strongest gene, in `[0, 100]`, rounded to 2 decimals.
    pub normalized_score: f64,
    /// 1-based position in the total order.
    pub rank: usize,
    pub role: GeneRole,
}

//! Archetype models and their match results.

use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

/// Sparse gene-code → weight mapping. Genes without an entry weigh 0.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct GeneVector(BTreeMap<String, f64>);

impl GeneVector {
    pub fn new() -> Self {
        Self::default()
    }

    /// Weight for a gene, 0.0 when the vector has no entry for it.
    pub fn weight(&self, gene_code: &str) -> f64 {
        self.0.get(gene_code).copied().unwrap_or(0.0)
    }

    /// Whether the vector carries an explicit entry for the gene.
    pub fn contains(&self, gene_code: &str) -> bool {
        self.0.contains_key(gene_code)
    }

    pub fn insert(&mut self, gene_code: impl Into<String>, weight: f64) -> Option<f64> {
        self.0.insert(gene_code.into(), weight)
    }

    /// Dense projection onto an ordered gene axis.
    pub fn project(&self, axis: &[String]) -> Vec<f64> {
        axis.iter().map(|gene_code| self.weight(gene_code)).collect()
    }

    /// Explicit entries in gene-code order.
    pub fn iter(&self) -> impl Iterator<Item = (&str, f64)> {
        self.0.iter().map(|(code, weight)| (code.as_str(), *weight))
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
}

impl<K: Into<String>> FromIterator<(K, f64)> for GeneVector {
    fn from_iter<I: IntoIterator<Item = (K, f64)>>(iter: I) -> Self {
        Self(iter.into_iter().map(|(k, v)| (k.into(), v)).collect())
    }
}

/// A fixed reference gene vector used as a similarity target.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct ArchetypeModel {
    pub model_code: String,
    #[serde(default)]
    pub name: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub summary: Option<String>,
    #[serde(default)]
    pub gene_vector: GeneVector,
}

impl ArchetypeModel {
    pub fn new(model_code: impl Into<String>, gene_vector: GeneVector) -> Self {
        Self {
            model_code: model_code.into(),
            name: String::new(),
            summary: None,
            gene_vector,
        }
    }

    pub fn with_name(mut self, name: impl Into<String>) -> Self {
        self.name = name.into();
        self
    }

    pub fn with_summary(mut self, summary: impl Into<String>) -> Self {
        self.summary = Some(summary.into());
        self
    }
}

/// Similarity of the user's profile to one archetype.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct ModelMatchResult {
    pub model_code: String,
    /// Cosine similarity in `[-1, 1]`, rounded to 6 decimals.
    pub similarity: f64,
    /// 1-based rank within the requested top-N.
    pub rank: usize,
}

impl ModelMatchResult {
    /// Similarity on the 0–100 scale used by trigger score ranges.
    pub fn percentage(&self) -> f64 {
        self.similarity * 100.0
    }
}

/// Per-gene comparison between the user's profile and an archetype.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct GeneComparison {
    pub gene_code: String,
    pub user_score: f64,
    pub model_score: f64,
    /// Absolute distance between the two scores.
    pub difference: f64,
}

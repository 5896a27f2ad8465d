//! Raw gene-score aggregation.
//!
//! Every declared gene starts at 0.0 so genes no answer touched still show up
//! in the profile. Each answer adds the weights of every gene its option is
//! wired to.

use std::collections::BTreeMap;

use discovery_types::{Answer, GeneCatalog, WeightTable};
use tracing::{debug, trace};

use crate::error::{EngineError, EngineResult};

/// Raw per-gene totals keyed by gene code.
pub type RawGeneScores = BTreeMap<String, f64>;

/// Sums option weights per gene for an answer set.
#[derive(Debug, Clone, Copy)]
pub struct GeneScoreAggregator<'a> {
    genes: &'a GeneCatalog,
    weights: &'a WeightTable,
}

impl<'a> GeneScoreAggregator<'a> {
    pub fn new(genes: &'a GeneCatalog, weights: &'a WeightTable) -> Self {
        Self { genes, weights }
    }

    /// Raw totals for every catalog gene.
    ///
    /// Fails with [`EngineError::MissingWeight`] when an answered option has
    /// no weight rows and with [`EngineError::UnknownGene`] when a row names
    /// a gene outside the catalog.
    pub fn aggregate(&self, answers: &[Answer]) -> EngineResult<RawGeneScores> {
        let mut totals: RawGeneScores = self
            .genes
            .codes()
            .map(|code| (code.to_string(), 0.0))
            .collect();

        for answer in answers {
            let rows = self
                .weights
                .lookup(&answer.scenario_code, &answer.option_code)
                .ok_or_else(|| EngineError::MissingWeight {
                    scenario_code: answer.scenario_code.clone(),
                    option_code: answer.option_code.clone(),
                })?;

            for row in rows {
                let total =
                    totals
                        .get_mut(&row.gene_code)
                        .ok_or_else(|| EngineError::UnknownGene {
                            gene_code: row.gene_code.clone(),
                            scenario_code: answer.scenario_code.clone(),
                            option_code: answer.option_code.clone(),
                        })?;
                *total += row.weight;
                trace!(
                    scenario = %answer.scenario_code,
                    option = %answer.option_code,
                    gene = %row.gene_code,
                    weight = row.weight,
                    "applied option weight"
                );
            }
        }

        debug!(
            answers = answers.len(),
            genes = totals.len(),
            "aggregated raw gene scores"
        );
        Ok(totals)
    }
}

//! Read-only catalog snapshots and their indexed views.
//!
//! A [`CatalogSnapshot`] is the row-oriented form a persistence layer or file
//! hands over for one catalog version. [`Catalog::from_snapshot`] indexes it
//! into the lookups the engine reads from. Rows are not validated here; later
//! rows with a duplicate key replace earlier ones.

use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

use crate::advice::{AdviceItem, AdviceTrigger, Channel};
use crate::archetype::ArchetypeModel;
use crate::gene::{Gene, OptionWeight};

/// Declared genes keyed by gene code.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct GeneCatalog {
    genes: BTreeMap<String, Gene>,
}

impl GeneCatalog {
    pub fn new(genes: impl IntoIterator<Item = Gene>) -> Self {
        Self {
            genes: genes
                .into_iter()
                .map(|gene| (gene.gene_code.clone(), gene))
                .collect(),
        }
    }

    pub fn get(&self, gene_code: &str) -> Option<&Gene> {
        self.genes.get(gene_code)
    }

    pub fn contains(&self, gene_code: &str) -> bool {
        self.genes.contains_key(gene_code)
    }

    /// Gene codes in ascending order.
    pub fn codes(&self) -> impl Iterator<Item = &str> {
        self.genes.keys().map(String::as_str)
    }

    pub fn iter(&self) -> impl Iterator<Item = &Gene> {
        self.genes.values()
    }

    pub fn len(&self) -> usize {
        self.genes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.genes.is_empty()
    }
}

/// A single gene contribution of an answered option.
#[derive(Clone, Debug, PartialEq)]
pub struct GeneWeight {
    pub gene_code: String,
    pub weight: f64,
}

/// Option weights grouped by `(scenario_code, option_code)`.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct WeightTable {
    rows: BTreeMap<(String, String), Vec<GeneWeight>>,
}

impl WeightTable {
    pub fn new(rows: impl IntoIterator<Item = OptionWeight>) -> Self {
        let mut grouped: BTreeMap<(String, String), Vec<GeneWeight>> = BTreeMap::new();
        for row in rows {
            let weights = grouped
                .entry((row.scenario_code, row.option_code))
                .or_default();
            // Same option and gene twice: the later row wins.
            match weights.iter_mut().find(|w| w.gene_code == row.gene_code) {
                Some(existing) => existing.weight = row.weight,
                None => weights.push(GeneWeight {
                    gene_code: row.gene_code,
                    weight: row.weight,
                }),
            }
        }
        Self { rows: grouped }
    }

    /// Weight rows wired to an answered option, if any.
    pub fn lookup(&self, scenario_code: &str, option_code: &str) -> Option<&[GeneWeight]> {
        self.rows
            .get(&(scenario_code.to_string(), option_code.to_string()))
            .map(Vec::as_slice)
    }

    /// Number of distinct options with at least one weight row.
    pub fn option_count(&self) -> usize {
        self.rows.len()
    }

    /// Total number of weight rows.
    pub fn row_count(&self) -> usize {
        self.rows.values().map(Vec::len).sum()
    }

    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }
}

/// Archetype models keyed by model code.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct ModelCatalog {
    models: BTreeMap<String, ArchetypeModel>,
}

impl ModelCatalog {
    pub fn new(models: impl IntoIterator<Item = ArchetypeModel>) -> Self {
        Self {
            models: models
                .into_iter()
                .map(|model| (model.model_code.clone(), model))
                .collect(),
        }
    }

    pub fn get(&self, model_code: &str) -> Option<&ArchetypeModel> {
        self.models.get(model_code)
    }

    /// Models in ascending model-code order.
    pub fn iter(&self) -> impl Iterator<Item = &ArchetypeModel> {
        self.models.values()
    }

    pub fn len(&self) -> usize {
        self.models.len()
    }

    pub fn is_empty(&self) -> bool {
        self.models.is_empty()
    }
}

/// Advice items keyed by advice id, with a per-channel view.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct AdviceCatalog {
    items: BTreeMap<String, AdviceItem>,
}

impl AdviceCatalog {
    pub fn new(items: impl IntoIterator<Item = AdviceItem>) -> Self {
        Self {
            items: items
                .into_iter()
                .map(|item| (item.advice_id.clone(), item))
                .collect(),
        }
    }

    pub fn get(&self, advice_id: &str) -> Option<&AdviceItem> {
        self.items.get(advice_id)
    }

    /// An item by id, only if it belongs to `channel`.
    pub fn get_in_channel(&self, channel: Channel, advice_id: &str) -> Option<&AdviceItem> {
        self.items
            .get(advice_id)
            .filter(|item| item.channel == channel)
    }

    /// Items of one channel in ascending advice-id order.
    pub fn for_channel(&self, channel: Channel) -> impl Iterator<Item = &AdviceItem> {
        self.items
            .values()
            .filter(move |item| item.channel == channel)
    }

    pub fn iter(&self) -> impl Iterator<Item = &AdviceItem> {
        self.items.values()
    }

    pub fn len(&self) -> usize {
        self.items.len()
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }
}

/// Trigger rules in declaration order.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct TriggerCatalog {
    triggers: Vec<AdviceTrigger>,
}

impl TriggerCatalog {
    pub fn new(triggers: impl IntoIterator<Item = AdviceTrigger>) -> Self {
        Self {
            triggers: triggers.into_iter().collect(),
        }
    }

    /// Every trigger scoped to `channel`.
    pub fn for_channel(&self, channel: Channel) -> impl Iterator<Item = &AdviceTrigger> {
        self.triggers
            .iter()
            .filter(move |trigger| trigger.channel == channel)
    }

    pub fn iter(&self) -> impl Iterator<Item = &AdviceTrigger> {
        self.triggers.iter()
    }

    pub fn len(&self) -> usize {
        self.triggers.len()
    }

    pub fn is_empty(&self) -> bool {
        self.triggers.is_empty()
    }
}

/// Row-oriented catalog data for exactly one version.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct CatalogSnapshot {
    pub version_id: String,
    #[serde(default)]
    pub genes: Vec<Gene>,
    #[serde(default)]
    pub option_weights: Vec<OptionWeight>,
    #[serde(default)]
    pub models: Vec<ArchetypeModel>,
    #[serde(default)]
    pub advice_items: Vec<AdviceItem>,
    #[serde(default)]
    pub triggers: Vec<AdviceTrigger>,
}

/// Indexed, read-only catalogs for one version.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct Catalog {
    pub version_id: String,
    pub genes: GeneCatalog,
    pub weights: WeightTable,
    pub models: ModelCatalog,
    pub advice: AdviceCatalog,
    pub triggers: TriggerCatalog,
}

impl Catalog {
    pub fn from_snapshot(snapshot: CatalogSnapshot) -> Self {
        Self {
            version_id: snapshot.version_id,
            genes: GeneCatalog::new(snapshot.genes),
            weights: WeightTable::new(snapshot.option_weights),
            models: ModelCatalog::new(snapshot.models),
            advice: AdviceCatalog::new(snapshot.advice_items),
            triggers: TriggerCatalog::new(snapshot.triggers),
        }
    }

    pub fn summary(&self) -> CatalogSummary {
        let advice_per_channel = Channel::ALL
            .iter()
            .map(|channel| (*channel, self.advice.for_channel(*channel).count()))
            .collect();

        let mut triggers_per_type: BTreeMap<String, usize> = BTreeMap::new();
        for trigger in self.triggers.iter() {
            *triggers_per_type
                .entry(trigger.trigger_type.as_str().to_string())
                .or_insert(0) += 1;
        }

        let unrecognized_triggers = self
            .triggers
            .iter()
            .filter(|t| !t.trigger_type.is_recognized())
            .count();

        CatalogSummary {
            version_id: self.version_id.clone(),
            gene_count: self.genes.len(),
            option_count: self.weights.option_count(),
            weight_row_count: self.weights.row_count(),
            model_count: self.models.len(),
            advice_count: self.advice.len(),
            trigger_count: self.triggers.len(),
            advice_per_channel,
            triggers_per_type,
            unrecognized_triggers,
        }
    }
}

impl From<CatalogSnapshot> for Catalog {
    fn from(snapshot: CatalogSnapshot) -> Self {
        Self::from_snapshot(snapshot)
    }
}

/// Entity counts for one catalog version.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct CatalogSummary {
    pub version_id: String,
    pub gene_count: usize,
    pub option_count: usize,
    pub weight_row_count: usize,
    pub model_count: usize,
    pub advice_count: usize,
    pub trigger_count: usize,
    pub advice_per_channel: BTreeMap<Channel, usize>,
    pub triggers_per_type: BTreeMap<String, usize>,
    pub unrecognized_triggers: usize,
}

impl CatalogSummary {
    /// Channels with no advice item; selection fails on any of them.
    pub fn empty_channels(&self) -> Vec<Channel> {
        Channel::ALL
            .into_iter()
            .filter(|channel| self.advice_per_channel.get(channel).copied().unwrap_or(0) == 0)
            .collect()
    }
}

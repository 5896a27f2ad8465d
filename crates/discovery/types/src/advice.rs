//! Activation channels, advice items and trigger rules.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

use crate::error::TypesError;

/// Fixed content category that always receives exactly one selected item.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Channel {
    Behavior,
    Reflection,
    Social,
}

impl Channel {
    /// Every channel, in delivery order.
    pub const ALL: [Channel; 3] = [Channel::Behavior, Channel::Reflection, Channel::Social];

    pub fn as_str(&self) -> &'static str {
        match self {
            Channel::Behavior => "behavior",
            Channel::Reflection => "reflection",
            Channel::Social => "social",
        }
    }
}

impl fmt::Display for Channel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Channel {
    type Err = TypesError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "behavior" => Ok(Channel::Behavior),
            "reflection" => Ok(Channel::Reflection),
            "social" => Ok(Channel::Social),
            _ => Err(TypesError::UnknownChannel(s.to_string())),
        }
    }
}

/// A piece of follow-up content for one channel.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct AdviceItem {
    pub advice_id: String,
    pub channel: Channel,
    #[serde(default)]
    pub advice_type: String,
    #[serde(default)]
    pub title: String,
    #[serde(default)]
    pub body: String,
    #[serde(default)]
    pub priority: i32,
}

impl AdviceItem {
    pub fn new(advice_id: impl Into<String>, channel: Channel, priority: i32) -> Self {
        Self {
            advice_id: advice_id.into(),
            channel,
            advice_type: "activation".to_string(),
            title: String::new(),
            body: String::new(),
            priority,
        }
    }

    pub fn with_title(mut self, title: impl Into<String>) -> Self {
        self.title = title.into();
        self
    }

    pub fn with_body(mut self, body: impl Into<String>) -> Self {
        self.body = body.into();
        self
    }
}

/// Condition kind of a trigger rule.
///
/// Parsing is case-insensitive and folds the legacy aliases onto one variant.
/// Anything outside the known set is kept verbatim as
/// [`TriggerType::Unrecognized`], which never matches.
#[derive(Clone, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(from = "String", into = "String")]
pub enum TriggerType {
    /// The trigger gene is the rank-1 gene.
    TopGene,
    /// The trigger gene is the rank-2 gene.
    SecondaryGene,
    /// The trigger gene is the rank-3 gene.
    SupportGene,
    /// The trigger gene is the rank-1 or rank-2 gene (`TOP_2_GENE`, `TOP2_GENE`).
    Top2Gene,
    /// The trigger model is the best match (`TOP_MODEL`, `BEST_MODEL`).
    TopModel,
    /// Always satisfied (`ANY`, `ANY_GENE`, `ANY_MODEL`).
    Any,
    Unrecognized(String),
}

impl TriggerType {
    pub fn parse(value: &str) -> Self {
        match value.trim().to_ascii_uppercase().as_str() {
            "TOP_GENE" => TriggerType::TopGene,
            "SECONDARY_GENE" => TriggerType::SecondaryGene,
            "SUPPORT_GENE" => TriggerType::SupportGene,
            "TOP_2_GENE" | "TOP2_GENE" => TriggerType::Top2Gene,
            "TOP_MODEL" | "BEST_MODEL" => TriggerType::TopModel,
            "ANY" | "ANY_GENE" | "ANY_MODEL" => TriggerType::Any,
            _ => TriggerType::Unrecognized(value.to_string()),
        }
    }

    /// Canonical tag for the type.
    pub fn as_str(&self) -> &str {
        match self {
            TriggerType::TopGene => "TOP_GENE",
            TriggerType::SecondaryGene => "SECONDARY_GENE",
            TriggerType::SupportGene => "SUPPORT_GENE",
            TriggerType::Top2Gene => "TOP_2_GENE",
            TriggerType::TopModel => "TOP_MODEL",
            TriggerType::Any => "ANY",
            TriggerType::Unrecognized(raw) => raw,
        }
    }

    pub fn is_recognized(&self) -> bool {
        !matches!(self, TriggerType::Unrecognized(_))
    }
}

impl From<String> for TriggerType {
    fn from(value: String) -> Self {
        TriggerType::parse(&value)
    }
}

impl From<&str> for TriggerType {
    fn from(value: &str) -> Self {
        TriggerType::parse(value)
    }
}

impl From<TriggerType> for String {
    fn from(value: TriggerType) -> Self {
        value.as_str().to_string()
    }
}

impl fmt::Display for TriggerType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

fn default_min_score() -> f64 {
    0.0
}

fn default_max_score() -> f64 {
    100.0
}

/// A rule pairing a gene/model condition and score range with an advice item.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct AdviceTrigger {
    pub trigger_id: String,
    pub trigger_type: TriggerType,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub gene_code: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub model_code: Option<String>,
    pub channel: Channel,
    pub advice_id: String,
    #[serde(default = "default_min_score")]
    pub min_score: f64,
    #[serde(default = "default_max_score")]
    pub max_score: f64,
}

impl AdviceTrigger {
    /// A trigger over the full `[0, 100]` range with no gene or model.
    pub fn new(
        trigger_id: impl Into<String>,
        trigger_type: impl Into<TriggerType>,
        channel: Channel,
        advice_id: impl Into<String>,
    ) -> Self {
        Self {
            trigger_id: trigger_id.into(),
            trigger_type: trigger_type.into(),
            gene_code: None,
            model_code: None,
            channel,
            advice_id: advice_id.into(),
            min_score: default_min_score(),
            max_score: default_max_score(),
        }
    }

    pub fn for_gene(mut self, gene_code: impl Into<String>) -> Self {
        self.gene_code = Some(gene_code.into());
        self
    }

    pub fn for_model(mut self, model_code: impl Into<String>) -> Self {
        self.model_code = Some(model_code.into());
        self
    }

    pub fn with_range(mut self, min_score: f64, max_score: f64) -> Self {
        self.min_score = min_score;
        self.max_score = max_score;
        self
    }

    /// Inclusive range check against the trigger's score bounds.
    pub fn accepts_score(&self, score: f64) -> bool {
        self.min_score <= score && score <= self.max_score
    }
}

/// The item chosen for one channel.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct ActivationItemResult {
    pub channel: Channel,
    pub advice_id: String,
    pub advice_type: String,
    pub title: String,
    pub body: String,
    pub priority: i32,
    /// Winning trigger, absent for fallbacks.
    pub trigger_id: Option<String>,
    /// True exactly when no trigger qualified for the channel.
    pub is_fallback: bool,
}

impl ActivationItemResult {
    pub fn from_trigger(item: &AdviceItem, trigger_id: impl Into<String>) -> Self {
        Self::build(item, Some(trigger_id.into()), false)
    }

    pub fn fallback(item: &AdviceItem) -> Self {
        Self::build(item, None, true)
    }

    fn build(item: &AdviceItem, trigger_id: Option<String>, is_fallback: bool) -> Self {
        Self {
            channel: item.channel,
            advice_id: item.advice_id.clone(),
            advice_type: item.advice_type.clone(),
            title: item.title.clone(),
            body: item.body.clone(),
            priority: item.priority,
            trigger_id,
            is_fallback,
        }
    }
}

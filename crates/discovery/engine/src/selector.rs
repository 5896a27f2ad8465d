//! Activation selection: one advice item per channel.
//!
//! Every trigger of a channel is evaluated before a winner is picked, since
//! the ordering key starts with the advice priority rather than declaration
//! order. Qualifying candidates are ordered by
//! `(priority desc, match score desc, advice_id asc, trigger_id asc)`. A
//! channel without candidates falls back to its highest-priority item.

use std::cmp::Ordering;

use discovery_types::{
    ActivationItemResult, AdviceCatalog, AdviceItem, AdviceTrigger, Channel, GeneScoreResult,
    ModelMatchResult, TriggerCatalog,
};
use tracing::{debug, trace, warn};

use crate::error::{EngineError, EngineResult};
use crate::rules::RuleContext;

/// A trigger that passed every check, with the item it points at.
#[derive(Debug, Clone)]
struct Candidate<'a> {
    item: &'a AdviceItem,
    trigger: &'a AdviceTrigger,
    match_score: f64,
}

impl Candidate<'_> {
    fn ordering(&self, other: &Self) -> Ordering {
        other
            .item
            .priority
            .cmp(&self.item.priority)
            .then_with(|| other.match_score.total_cmp(&self.match_score))
            .then_with(|| self.item.advice_id.cmp(&other.item.advice_id))
            .then_with(|| self.trigger.trigger_id.cmp(&other.trigger.trigger_id))
    }
}

/// Picks the activation item of every channel.
#[derive(Debug, Clone, Copy)]
pub struct ActivationSelector<'a> {
    advice: &'a AdviceCatalog,
    triggers: &'a TriggerCatalog,
}

impl<'a> ActivationSelector<'a> {
    pub fn new(advice: &'a AdviceCatalog, triggers: &'a TriggerCatalog) -> Self {
        Self { advice, triggers }
    }

    /// One result per channel, in [`Channel::ALL`] order.
    ///
    /// Fails with [`EngineError::NoContent`] when a channel needs a fallback
    /// and has no advice items at all.
    pub fn select(
        &self,
        gene_scores: &[GeneScoreResult],
        model_matches: &[ModelMatchResult],
    ) -> EngineResult<Vec<ActivationItemResult>> {
        let context = RuleContext::new(gene_scores, model_matches);

        Channel::ALL
            .iter()
            .map(|channel| self.select_channel(*channel, &context))
            .collect()
    }

    fn select_channel(
        &self,
        channel: Channel,
        context: &RuleContext<'_>,
    ) -> EngineResult<ActivationItemResult> {
        let best = self
            .candidates(channel, context)
            .into_iter()
            .min_by(|a, b| a.ordering(b));

        if let Some(winner) = best {
            debug!(
                %channel,
                advice = %winner.item.advice_id,
                trigger = %winner.trigger.trigger_id,
                priority = winner.item.priority,
                match_score = winner.match_score,
                "selected triggered activation"
            );
            return Ok(ActivationItemResult::from_trigger(
                winner.item,
                winner.trigger.trigger_id.clone(),
            ));
        }

        let fallback = self
            .advice
            .for_channel(channel)
            .min_by(|a, b| {
                b.priority
                    .cmp(&a.priority)
                    .then_with(|| a.advice_id.cmp(&b.advice_id))
            })
            .ok_or(EngineError::NoContent { channel })?;

        debug!(
            %channel,
            advice = %fallback.advice_id,
            priority = fallback.priority,
            "selected fallback activation"
        );
        Ok(ActivationItemResult::fallback(fallback))
    }

    fn candidates(&self, channel: Channel, context: &RuleContext<'_>) -> Vec<Candidate<'a>> {
        let mut candidates = Vec::new();

        for trigger in self.triggers.for_channel(channel) {
            let Some(item) = self.advice.get_in_channel(channel, &trigger.advice_id) else {
                warn!(
                    %channel,
                    trigger = %trigger.trigger_id,
                    advice = %trigger.advice_id,
                    "dropping trigger with stale advice reference"
                );
                continue;
            };

            if !context.type_condition_holds(trigger) {
                trace!(trigger = %trigger.trigger_id, kind = %trigger.trigger_type, "type condition failed");
                continue;
            }

            let Some(match_score) = context.score_constraint(trigger) else {
                trace!(trigger = %trigger.trigger_id, "score range not met");
                continue;
            };

            candidates.push(Candidate {
                item,
                trigger,
                match_score,
            });
        }

        candidates
    }
}

//! The compiled grammar container and weighted rule selection.

use std::collections::HashMap;

use cfdg_core::{HsvColor, Rgba};

use crate::{GrammarError, GrammarResult, Rule};

/// A compiled design grammar: rule groups keyed by name, the start symbol,
/// and the background color adjustment.
///
/// Immutable after compilation except for [`Grammar::finish_setup`], which
/// derives per-group selection probabilities from the rule weights and must
/// run before evaluation (and again after any weight mutation).
#[derive(Debug, Clone, Default)]
pub struct Grammar {
    pub name: Option<String>,
    pub start_shape: Option<String>,
    /// HSV adjustment applied to an opaque white base by renderers.
    pub background: HsvColor,
    groups: HashMap<String, Vec<Rule>>,
}

impl Grammar {
    pub fn new() -> Self {
        Self::default()
    }

    /// Register a rule variant, appended to the group with its name.
    /// Declaration order within a group is preserved.
    pub fn add_rule(&mut self, rule: Rule) {
        self.groups.entry(rule.name.clone()).or_default().push(rule);
    }

    /// All variants registered under `name`, in declaration order.
    pub fn group(&self, name: &str) -> Option<&[Rule]> {
        self.groups.get(name).map(|rules| rules.as_slice())
    }

    /// Iterate over all rule groups.
    pub fn groups(&self) -> impl Iterator<Item = (&str, &[Rule])> {
        self.groups
            .iter()
            .map(|(name, rules)| (name.as_str(), rules.as_slice()))
    }

    pub fn len(&self) -> usize {
        self.groups.len()
    }

    pub fn is_empty(&self) -> bool {
        self.groups.is_empty()
    }

    /// Normalize group weights into probabilities:
    /// `probability_i = weight_i / sum(weights)`. Idempotent for unchanged
    /// weights.
    pub fn finish_setup(&mut self) {
        for rules in self.groups.values_mut() {
            let sum: f32 = rules.iter().map(|r| r.weight).sum();
            for rule in rules.iter_mut() {
                rule.probability = rule.weight / sum;
            }
        }
    }

    /// Select a variant of the group `name` for the uniform draw
    /// `probability` in `[0, 1)`.
    ///
    /// A single-variant group is returned unconditionally. Otherwise the
    /// variants are walked in declaration order accumulating their
    /// probabilities; the first one whose cumulative sum exceeds the draw
    /// wins. The last variant catches any floating-point shortfall in the
    /// accumulated sum. Requires `finish_setup` to have run.
    pub fn get_rule(&self, name: &str, probability: f32) -> GrammarResult<&Rule> {
        let rules = self.groups.get(name).map(Vec::as_slice).unwrap_or(&[]);
        let (last, head) = rules
            .split_last()
            .ok_or_else(|| GrammarError::rule_not_found(name))?;

        if head.is_empty() {
            return Ok(last);
        }

        let mut total = 0.0f32;
        for rule in head {
            total += rule.probability;
            if probability < total {
                return Ok(rule);
            }
        }
        Ok(last)
    }

    /// The background adjustment applied to opaque white, as renderers
    /// consume it.
    pub fn resolved_background(&self) -> Rgba {
        HsvColor::WHITE.adjust(&self.background).to_rgba()
    }
}

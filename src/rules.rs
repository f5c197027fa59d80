//! Association rule derivation, filtering and ranking

use crate::error::{check_non_negative, check_unit_interval, MiningResult};
use crate::index::TransactionIndex;
use crate::itemset::{Combinations, Item, Itemset};
use crate::miner::FrequentItemSet;
use std::borrow::Borrow;
use std::cmp::Ordering;
use tracing::debug;

/// An implication `left -> right` derived from one frequent itemset.
///
/// `left` and `right` are disjoint, non-empty, and their union is the
/// originating itemset.
#[derive(Debug, Clone, PartialEq)]
pub struct AssociationRule {
    pub left: Itemset,
    pub right: Itemset,
    pub left_support: f64,
    pub right_support: f64,
    /// Support of `left ∪ right`
    pub support: f64,
    /// `support / left_support`
    pub confidence: f64,
    /// `confidence / right_support`
    pub lift: f64,
}

/// Validated mining thresholds.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Thresholds {
    pub min_support: f64,
    pub min_confidence: f64,
    pub min_lift: f64,
}

impl Thresholds {
    /// Support and confidence must lie in `[0, 1]`; lift must be non-negative.
    pub fn new(min_support: f64, min_confidence: f64, min_lift: f64) -> MiningResult<Self> {
        Ok(Self {
            min_support: check_unit_interval("min_support", min_support)?,
            min_confidence: check_unit_interval("min_confidence", min_confidence)?,
            min_lift: check_non_negative("min_lift", min_lift)?,
        })
    }
}

/// Derive every rule from `frequent` whose confidence and lift reach the
/// given minimums.
///
/// Itemsets with fewer than two items contribute nothing. Splits whose left or
/// right support is zero (possible only when mining with `min_support = 0`)
/// have undefined confidence or lift and are discarded.
pub fn generate_rules<I>(
    index: &TransactionIndex,
    frequent: I,
    min_confidence: f64,
    min_lift: f64,
) -> MiningResult<Vec<AssociationRule>>
where
    I: IntoIterator,
    I::Item: Borrow<FrequentItemSet>,
{
    let min_confidence = check_unit_interval("min_confidence", min_confidence)?;
    let min_lift = check_non_negative("min_lift", min_lift)?;

    let mut rules = Vec::new();
    let mut itemsets = 0usize;
    for set in frequent {
        let set: &FrequentItemSet = set.borrow();
        itemsets += 1;
        rules.extend(
            rules_from_itemset(index, set)
                .filter(|rule| rule.confidence >= min_confidence && rule.lift >= min_lift),
        );
    }

    debug!(itemsets, rules = rules.len(), min_confidence, min_lift, "generated rules");
    Ok(rules)
}

/// Every rule obtainable by splitting one frequent itemset, unfiltered.
///
/// Left sides are enumerated by size, then lexicographically over the sorted
/// items, so the output order is reproducible.
pub fn rules_from_itemset<'a>(
    index: &'a TransactionIndex,
    set: &'a FrequentItemSet,
) -> impl Iterator<Item = AssociationRule> + 'a {
    let items: Vec<&Item> = if set.items.len() < 2 {
        Vec::new()
    } else {
        set.items.iter().collect()
    };
    let n = items.len();

    (1..n)
        .flat_map(move |size| Combinations::new(n, size))
        .filter_map(move |indices| {
            let left: Itemset = indices.iter().map(|&i| items[i]).collect();
            let right = set.items.difference(&left);
            score(index, set, left, right)
        })
}

fn score(
    index: &TransactionIndex,
    set: &FrequentItemSet,
    left: Itemset,
    right: Itemset,
) -> Option<AssociationRule> {
    let left_support = index.support(&left);
    let right_support = index.support(&right);
    if left_support == 0.0 || right_support == 0.0 {
        return None;
    }

    let confidence = set.support / left_support;
    let lift = confidence / right_support;
    Some(AssociationRule {
        left,
        right,
        left_support,
        right_support,
        support: set.support,
        confidence,
        lift,
    })
}

/// Score fields a rule list can be ranked by.
#[derive(Debug, Clone, Copy, PartialEq, Eq, clap::ValueEnum)]
pub enum RuleField {
    Support,
    Confidence,
    Lift,
    LeftSupport,
    RightSupport,
}

impl RuleField {
    pub fn value(self, rule: &AssociationRule) -> f64 {
        match self {
            RuleField::Support => rule.support,
            RuleField::Confidence => rule.confidence,
            RuleField::Lift => rule.lift,
            RuleField::LeftSupport => rule.left_support,
            RuleField::RightSupport => rule.right_support,
        }
    }

    pub fn name(self) -> &'static str {
        match self {
            RuleField::Support => "support",
            RuleField::Confidence => "confidence",
            RuleField::Lift => "lift",
            RuleField::LeftSupport => "left_support",
            RuleField::RightSupport => "right_support",
        }
    }
}

/// Sort rules by `field`, highest first. Ties fall back to the left and then
/// the right itemset in lexicographic order.
pub fn sort_rules(rules: &mut [AssociationRule], field: RuleField) {
    rules.sort_by(|a, b| {
        field
            .value(b)
            .total_cmp(&field.value(a))
            .then_with(|| a.left.cmp(&b.left))
            .then_with(|| a.right.cmp(&b.right))
    });
}

/// The `n` highest-support frequent itemsets with at least two items.
pub fn top_frequent_item_sets<I>(frequent: I, n: usize) -> Vec<FrequentItemSet>
where
    I: IntoIterator<Item = FrequentItemSet>,
{
    let mut sets: Vec<FrequentItemSet> = frequent
        .into_iter()
        .filter(|set| set.items.len() > 1)
        .collect();
    sets.sort_by(|a, b| match b.support.total_cmp(&a.support) {
        Ordering::Equal => a.items.cmp(&b.items),
        other => other,
    });
    sets.truncate(n);
    sets
}

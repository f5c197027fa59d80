//! Level-wise frequent itemset mining as a lazy iterator

use crate::candidates::generate_next_candidates;
use crate::error::{check_unit_interval, MiningResult};
use crate::index::TransactionIndex;
use crate::itemset::Itemset;
use std::collections::HashSet;
use tracing::info;

/// An itemset whose support met the minimum support threshold.
#[derive(Debug, Clone, PartialEq)]
pub struct FrequentItemSet {
    pub items: Itemset,
    /// Fraction of transactions containing every item, in `[0, 1]`
    pub support: f64,
}

impl FrequentItemSet {
    pub fn new(items: Itemset, support: f64) -> Self {
        Self { items, support }
    }
}

/// Start mining `index` for itemsets with support `>= min_support`.
///
/// Nothing is evaluated until the returned iterator is polled. All itemsets of
/// size `k` are yielded before any candidate of size `k + 1` is generated, and
/// dropping the iterator early skips the remaining levels.
///
/// `min_support` must lie in `[0, 1]`. With `min_support = 0` every
/// combination of the item universe qualifies, so callers should bound how
/// much of the sequence they consume.
pub fn mine(index: &TransactionIndex, min_support: f64) -> MiningResult<FrequentItemSets<'_>> {
    let min_support = check_unit_interval("min_support", min_support)?;
    Ok(FrequentItemSets::new(index, min_support))
}

/// Pull-based cursor over the frequent itemsets of a [`TransactionIndex`].
///
/// Finite and not restartable: once exhausted, call [`mine`] again.
#[derive(Debug)]
pub struct FrequentItemSets<'a> {
    index: &'a TransactionIndex,
    min_support: f64,
    /// Size of the candidates currently being evaluated
    k: usize,
    candidates: std::vec::IntoIter<Itemset>,
    level_candidates: usize,
    /// Frequent itemsets found so far at level `k`
    large: HashSet<Itemset>,
    finished: bool,
}

impl<'a> FrequentItemSets<'a> {
    fn new(index: &'a TransactionIndex, min_support: f64) -> Self {
        let singletons: Vec<Itemset> = index
            .items()
            .iter()
            .map(|item| Itemset::new([item.clone()]))
            .collect();

        Self {
            index,
            min_support,
            k: 1,
            level_candidates: singletons.len(),
            candidates: singletons.into_iter(),
            large: HashSet::new(),
            finished: false,
        }
    }

    /// Size of the itemsets currently being produced.
    pub fn level(&self) -> usize {
        self.k
    }

    pub fn min_support(&self) -> f64 {
        self.min_support
    }

    /// Close the current level and load the candidates of the next one.
    fn advance_level(&mut self) {
        info!(
            k = self.k,
            candidates = self.level_candidates,
            frequent = self.large.len(),
            "mined level"
        );

        let large = std::mem::take(&mut self.large);
        self.k += 1;
        // k >= 2 here, so generation cannot reject the size
        let next = generate_next_candidates(&large, self.k).unwrap_or_default();

        if next.is_empty() {
            self.finished = true;
        }
        self.level_candidates = next.len();
        self.candidates = next.into_iter();
    }
}

impl Iterator for FrequentItemSets<'_> {
    type Item = FrequentItemSet;

    fn next(&mut self) -> Option<Self::Item> {
        while !self.finished {
            for candidate in self.candidates.by_ref() {
                let support = self.index.support(&candidate);
                if support < self.min_support {
                    continue;
                }
                self.large.insert(candidate.clone());
                return Some(FrequentItemSet::new(candidate, support));
            }
            self.advance_level();
        }
        None
    }
}

//! Basket profile: transaction sizes and item occurrence counts

use crate::itemset::{normalize_item, Item};
use std::collections::HashMap;

/// Which transactions a profile query looks at.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum BagKind {
    All,
    /// Transactions with more items than the average
    Big,
    /// Transactions with fewer items than the average
    Small,
}

impl BagKind {
    pub const ALL: [BagKind; 3] = [BagKind::All, BagKind::Big, BagKind::Small];

    pub fn title(self) -> &'static str {
        match self {
            BagKind::All => "All",
            BagKind::Big => "Big",
            BagKind::Small => "Small",
        }
    }
}

/// Per-transaction item lists, with missing values dropped and labels
/// normalized. Repeated items within a transaction are kept and counted.
#[derive(Debug, Clone, Default)]
pub struct BasketProfile {
    baskets: Vec<Vec<Item>>,
}

impl BasketProfile {
    pub fn from_rows<R, F, S>(rows: R) -> Self
    where
        R: IntoIterator<Item = F>,
        F: IntoIterator<Item = Option<S>>,
        S: AsRef<str>,
    {
        let baskets = rows
            .into_iter()
            .map(|row| {
                row.into_iter()
                    .flatten()
                    .map(|value| normalize_item(value.as_ref()))
                    .collect()
            })
            .collect();
        Self { baskets }
    }

    pub fn transaction_count(&self) -> usize {
        self.baskets.len()
    }

    /// Mean number of items per transaction; 0 when there are none.
    pub fn average_basket_size(&self) -> f64 {
        if self.baskets.is_empty() {
            return 0.0;
        }
        let total: usize = self.baskets.iter().map(Vec::len).sum();
        total as f64 / self.baskets.len() as f64
    }

    /// Transactions selected by `kind`.
    pub fn bag(&self, kind: BagKind) -> Vec<&[Item]> {
        let average = self.average_basket_size();
        self.baskets
            .iter()
            .filter(|basket| match kind {
                BagKind::All => true,
                BagKind::Big => basket.len() as f64 > average,
                BagKind::Small => (basket.len() as f64) < average,
            })
            .map(Vec::as_slice)
            .collect()
    }

    /// Occurrence count of every item in the selected transactions, most
    /// frequent first (ties by label).
    pub fn item_counts(&self, kind: BagKind) -> Vec<(Item, usize)> {
        let mut counts: HashMap<&Item, usize> = HashMap::new();
        for basket in self.bag(kind) {
            for item in basket {
                *counts.entry(item).or_insert(0) += 1;
            }
        }

        let mut counts: Vec<(Item, usize)> = counts
            .into_iter()
            .map(|(item, count)| (item.clone(), count))
            .collect();
        counts.sort_by(|a, b| b.1.cmp(&a.1).then_with(|| a.0.cmp(&b.0)));
        counts
    }

    pub fn most_frequent(&self, kind: BagKind, n: usize) -> Vec<(Item, usize)> {
        let mut counts = self.item_counts(kind);
        counts.truncate(n);
        counts
    }

    /// The `n` least frequent items, still listed most frequent first.
    pub fn least_frequent(&self, kind: BagKind, n: usize) -> Vec<(Item, usize)> {
        let mut counts = self.item_counts(kind);
        let skip = counts.len().saturating_sub(n);
        counts.split_off(skip)
    }
}

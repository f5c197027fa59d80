//! Transaction index (item -> transaction ids) and support calculation

use crate::itemset::{normalize_item, Item};
use std::collections::{BTreeSet, HashMap};
use tracing::debug;

/// Inverted index from item label to the ordinals of the transactions that
/// contain it, plus the total transaction count.
///
/// Read-only after construction; every mining and rule call borrows it.
#[derive(Debug, Clone, Default)]
pub struct TransactionIndex {
    transactions: HashMap<Item, BTreeSet<usize>>,
    items: BTreeSet<Item>,
    transaction_count: usize,
}

impl TransactionIndex {
    /// Build the index from raw rows.
    ///
    /// Each row is one transaction, identified by its 0-based position. `None`
    /// fields are missing values and are skipped; every other value is
    /// case-folded. Rows without any item still count as transactions.
    pub fn from_rows<R, F, S>(rows: R) -> Self
    where
        R: IntoIterator<Item = F>,
        F: IntoIterator<Item = Option<S>>,
        S: AsRef<str>,
    {
        let mut index = Self::default();

        for (tid, row) in rows.into_iter().enumerate() {
            for value in row.into_iter().flatten() {
                let item = normalize_item(value.as_ref());
                index
                    .transactions
                    .entry(item.clone())
                    .or_default()
                    .insert(tid);
                index.items.insert(item);
            }
            index.transaction_count = tid + 1;
        }

        debug!(
            transactions = index.transaction_count,
            distinct_items = index.items.len(),
            "built transaction index"
        );
        index
    }

    /// Build the index from transactions with no missing values.
    pub fn from_transactions<T, S>(transactions: T) -> Self
    where
        T: IntoIterator,
        T::Item: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        Self::from_rows(
            transactions
                .into_iter()
                .map(|row| row.into_iter().map(Some)),
        )
    }

    /// Total number of transactions, including ones that carried no items.
    pub fn transaction_count(&self) -> usize {
        self.transaction_count
    }

    /// Every distinct item, in lexicographic order.
    pub fn items(&self) -> &BTreeSet<Item> {
        &self.items
    }

    /// Ordinals of the transactions containing `item`.
    pub fn transactions_of(&self, item: &str) -> Option<&BTreeSet<usize>> {
        self.transactions.get(item)
    }

    /// Fraction of transactions that contain every item in `items`.
    ///
    /// The empty itemset has support 1.0 regardless of the transaction count;
    /// any non-empty itemset has support 0.0 over an empty index.
    pub fn support<'a, I>(&self, items: I) -> f64
    where
        I: IntoIterator<Item = &'a Item>,
    {
        let mut items = items.into_iter().peekable();
        if items.peek().is_none() {
            return 1.0;
        }
        if self.transaction_count == 0 {
            return 0.0;
        }

        let mut common: Option<BTreeSet<usize>> = None;
        for item in items {
            let Some(ids) = self.transactions.get(item.as_str()) else {
                return 0.0;
            };
            common = Some(match common {
                None => ids.clone(),
                Some(acc) => acc.intersection(ids).copied().collect(),
            });
        }

        let hits = common.map_or(0, |ids| ids.len());
        hits as f64 / self.transaction_count as f64
    }
}

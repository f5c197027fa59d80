//! Item and itemset value types, plus the index-based combination iterator
//! used for both candidate generation and rule splitting.

use std::collections::BTreeSet;
use std::fmt;

/// A normalized (case-folded) item label.
pub type Item = String;

/// Normalize a raw field value into an [`Item`].
pub fn normalize_item(raw: &str) -> Item {
    raw.to_lowercase()
}

/// An immutable, duplicate-free collection of items.
///
/// Items are kept in lexicographic order, so equality and hashing ignore the
/// order in which items were supplied and iteration is always canonical.
#[derive(Debug, Clone, Default, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct Itemset(BTreeSet<Item>);

impl Itemset {
    /// Build an itemset from anything that yields item labels.
    pub fn new<I, S>(items: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<Item>,
    {
        Self(items.into_iter().map(Into::into).collect())
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn contains(&self, item: &str) -> bool {
        self.0.contains(item)
    }

    /// Items in canonical (lexicographic) order.
    pub fn iter(&self) -> impl Iterator<Item = &Item> + '_ {
        self.0.iter()
    }

    /// Items of `self` that are not in `other`.
    pub fn difference(&self, other: &Itemset) -> Itemset {
        Self(self.0.difference(&other.0).cloned().collect())
    }

    pub fn union(&self, other: &Itemset) -> Itemset {
        Self(self.0.union(&other.0).cloned().collect())
    }

    pub fn is_disjoint(&self, other: &Itemset) -> bool {
        self.0.is_disjoint(&other.0)
    }

    pub fn is_subset(&self, other: &Itemset) -> bool {
        self.0.is_subset(&other.0)
    }

    /// Every sub-itemset of exactly `size` items, in canonical order.
    pub fn subsets(&self, size: usize) -> impl Iterator<Item = Itemset> + '_ {
        let items: Vec<&Item> = self.0.iter().collect();
        Combinations::new(items.len(), size).map(move |indices| {
            indices
                .iter()
                .map(|&i| items[i].clone())
                .collect::<Itemset>()
        })
    }
}

impl FromIterator<Item> for Itemset {
    fn from_iter<T: IntoIterator<Item = Item>>(iter: T) -> Self {
        Self(iter.into_iter().collect())
    }
}

impl<'a> FromIterator<&'a Item> for Itemset {
    fn from_iter<T: IntoIterator<Item = &'a Item>>(iter: T) -> Self {
        Self(iter.into_iter().cloned().collect())
    }
}

impl<'a> IntoIterator for &'a Itemset {
    type Item = &'a Item;
    type IntoIter = std::collections::btree_set::Iter<'a, Item>;

    fn into_iter(self) -> Self::IntoIter {
        self.0.iter()
    }
}

impl fmt::Display for Itemset {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (i, item) in self.0.iter().enumerate() {
            if i > 0 {
                f.write_str(", ")?;
            }
            f.write_str(item)?;
        }
        Ok(())
    }
}

/// Choose-`k`-of-`n` enumeration over index arrays, in lexicographic order.
///
/// Yields nothing when `k > n` and a single empty selection when `k == 0`.
#[derive(Debug, Clone)]
pub struct Combinations {
    n: usize,
    indices: Vec<usize>,
    started: bool,
    done: bool,
}

impl Combinations {
    pub fn new(n: usize, k: usize) -> Self {
        Self {
            n,
            indices: (0..k).collect(),
            started: false,
            done: k > n,
        }
    }
}

impl Iterator for Combinations {
    type Item = Vec<usize>;

    fn next(&mut self) -> Option<Self::Item> {
        if self.done {
            return None;
        }
        if !self.started {
            self.started = true;
            return Some(self.indices.clone());
        }

        let k = self.indices.len();
        // rightmost position that can still move forward
        let Some(pos) = (0..k).rev().find(|&i| self.indices[i] != i + self.n - k) else {
            self.done = true;
            return None;
        };

        self.indices[pos] += 1;
        for j in pos + 1..k {
            self.indices[j] = self.indices[j - 1] + 1;
        }
        Some(self.indices.clone())
    }
}

/// All `k`-item combinations drawn from a sorted universe.
pub(crate) fn combinations_of<'a>(
    universe: &'a [Item],
    k: usize,
) -> impl Iterator<Item = Itemset> + 'a {
    Combinations::new(universe.len(), k).map(move |indices| {
        indices
            .iter()
            .map(|&i| &universe[i])
            .collect::<Itemset>()
    })
}

//! Level-wise candidate generation with the downward-closure prune

use crate::error::{MiningError, MiningResult};
use crate::itemset::{combinations_of, Item, Itemset};
use std::collections::{BTreeSet, HashSet};
use tracing::debug;

/// Generate the size-`k_next` candidates from the frequent itemsets of the
/// previous level.
///
/// The universe is every item appearing in `frequent`, sorted. Every
/// `k_next`-combination of it is a raw candidate. Below size 3 all raw
/// candidates are kept, since their only proper subsets are single items that
/// are already known to be frequent. From size 3 on, a candidate survives
/// only when each of its `(k_next - 1)`-item subsets is in `frequent`.
pub fn generate_next_candidates(
    frequent: &HashSet<Itemset>,
    k_next: usize,
) -> MiningResult<Vec<Itemset>> {
    if k_next == 0 {
        return Err(MiningError::InvalidSize { k: k_next });
    }

    let universe: Vec<Item> = frequent
        .iter()
        .flat_map(|set| set.iter().cloned())
        .collect::<BTreeSet<_>>()
        .into_iter()
        .collect();

    let raw = combinations_of(&universe, k_next);
    if k_next < 3 {
        let candidates: Vec<Itemset> = raw.collect();
        debug!(k = k_next, universe = universe.len(), candidates = candidates.len(), "generated candidates");
        return Ok(candidates);
    }

    let mut generated = 0usize;
    let candidates: Vec<Itemset> = raw
        .inspect(|_| generated += 1)
        .filter(|candidate| {
            candidate
                .subsets(k_next - 1)
                .all(|subset| frequent.contains(&subset))
        })
        .collect();

    debug!(
        k = k_next,
        universe = universe.len(),
        generated,
        pruned = generated - candidates.len(),
        candidates = candidates.len(),
        "generated candidates"
    );
    Ok(candidates)
}

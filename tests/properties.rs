//! Property-based tests for the mining core
//!
//! Transactions are drawn from a small alphabet so that the miner can be
//! checked against brute-force enumeration of every itemset.

use proptest::prelude::*;
use ruleforge::itemset::Combinations;
use ruleforge::{generate_rules, mine, FrequentItemSet, Item, Itemset, TransactionIndex};
use std::collections::BTreeMap;

const ALPHABET: [&str; 6] = ["apple", "beer", "bread", "diaper", "eggs", "milk"];

fn transactions() -> impl Strategy<Value = Vec<Vec<&'static str>>> {
    prop::collection::vec(prop::sample::subsequence(ALPHABET.to_vec(), 0..=ALPHABET.len()), 0..12)
}

fn brute_force(index: &TransactionIndex, min_support: f64) -> BTreeMap<Itemset, f64> {
    let universe: Vec<&Item> = index.items().iter().collect();
    let mut found = BTreeMap::new();
    for size in 1..=universe.len() {
        for indices in Combinations::new(universe.len(), size) {
            let set: Itemset = indices.iter().map(|&i| universe[i]).collect();
            let support = index.support(&set);
            if support >= min_support {
                found.insert(set, support);
            }
        }
    }
    found
}

proptest! {
    #[test]
    fn prop_support_is_anti_monotone(
        data in transactions(),
        picks in prop::sample::subsequence(ALPHABET.to_vec(), 1..=ALPHABET.len()),
        cut in 0usize..ALPHABET.len(),
    ) {
        let index = TransactionIndex::from_transactions(data);
        let superset = Itemset::new(picks.iter().copied());
        let subset = Itemset::new(picks.iter().copied().take(cut));

        prop_assert!(index.support(&subset) >= index.support(&superset));
        prop_assert!((0.0..=1.0).contains(&index.support(&superset)));
    }

    #[test]
    fn prop_miner_matches_brute_force(data in transactions(), min_support in 0.05f64..=1.0) {
        let index = TransactionIndex::from_transactions(data);
        let mined: BTreeMap<Itemset, f64> = mine(&index, min_support)
            .unwrap()
            .map(|set| (set.items, set.support))
            .collect();

        prop_assert_eq!(mined, brute_force(&index, min_support));
    }

    #[test]
    fn prop_miner_is_idempotent(data in transactions(), min_support in 0.0f64..=1.0) {
        let index = TransactionIndex::from_transactions(data);
        let first: Vec<FrequentItemSet> = mine(&index, min_support).unwrap().collect();
        let second: Vec<FrequentItemSet> = mine(&index, min_support).unwrap().collect();
        prop_assert_eq!(first, second);
    }

    #[test]
    fn prop_rules_respect_invariants(
        data in transactions(),
        min_support in 0.1f64..=1.0,
        min_confidence in 0.0f64..=1.0,
        min_lift in 0.0f64..3.0,
    ) {
        let index = TransactionIndex::from_transactions(data);
        let frequent: Vec<FrequentItemSet> = mine(&index, min_support).unwrap().collect();
        let rules = generate_rules(&index, &frequent, min_confidence, min_lift).unwrap();

        for rule in &rules {
            let union = rule.left.union(&rule.right);
            prop_assert!(!rule.left.is_empty() && !rule.right.is_empty());
            prop_assert!(rule.left.is_disjoint(&rule.right));
            prop_assert!(frequent.iter().any(|set| set.items == union && set.support == rule.support));
            prop_assert!(rule.confidence >= min_confidence);
            prop_assert!(rule.lift >= min_lift);
            prop_assert!(rule.confidence.is_finite() && rule.lift.is_finite());
        }
    }

    #[test]
    fn prop_zero_thresholds_keep_every_split(data in transactions(), min_support in 0.1f64..=1.0) {
        let index = TransactionIndex::from_transactions(data);
        let frequent: Vec<FrequentItemSet> = mine(&index, min_support).unwrap().collect();
        let rules = generate_rules(&index, &frequent, 0.0, 0.0).unwrap();

        let expected: usize = frequent
            .iter()
            .filter(|set| set.items.len() >= 2)
            .map(|set| (1usize << set.items.len()) - 2)
            .sum();
        prop_assert_eq!(rules.len(), expected);
    }
}

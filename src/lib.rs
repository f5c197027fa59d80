//! RuleForge: market basket analysis with the Apriori algorithm
//!
//! This library mines frequent itemsets from transaction data with a
//! level-wise generate-and-test search and derives association rules scored
//! by support, confidence and lift.
//!
//! ```
//! use ruleforge::{generate_rules, mine, TransactionIndex};
//!
//! let index = TransactionIndex::from_transactions(vec![
//!     vec!["bread", "milk"],
//!     vec!["bread", "diaper", "beer"],
//!     vec!["bread", "milk", "diaper", "beer"],
//!     vec!["milk", "diaper", "beer"],
//! ]);
//!
//! let frequent: Vec<_> = mine(&index, 0.5).unwrap().collect();
//! let rules = generate_rules(&index, &frequent, 0.9, 1.0).unwrap();
//! assert!(rules.iter().all(|rule| rule.confidence >= 0.9));
//! ```

pub mod candidates;
pub mod cli;
pub mod data;
pub mod error;
pub mod index;
pub mod itemset;
pub mod logging;
pub mod miner;
pub mod profile;
pub mod report;
pub mod rules;

// Re-export public items for easier access
pub use candidates::generate_next_candidates;
pub use cli::Args;
pub use data::{load_and_index, load_rows};
pub use error::{MiningError, MiningResult};
pub use index::TransactionIndex;
pub use itemset::{Item, Itemset};
pub use miner::{mine, FrequentItemSet, FrequentItemSets};
pub use profile::{BagKind, BasketProfile};
pub use rules::{
    generate_rules, rules_from_itemset, sort_rules, top_frequent_item_sets, AssociationRule,
    RuleField, Thresholds,
};

/// Common result type used throughout the application
pub type Result<T> = anyhow::Result<T>;

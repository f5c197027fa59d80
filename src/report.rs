//! Console tables for frequent itemsets, rules and basket profiles

use crate::miner::FrequentItemSet;
use crate::profile::{BagKind, BasketProfile};
use crate::rules::{AssociationRule, RuleField, Thresholds};
use std::io::{self, Write};

/// Print frequent itemsets, at most `limit` rows.
pub fn write_frequent_item_sets<W: Write>(
    out: &mut W,
    title: &str,
    sets: &[FrequentItemSet],
    limit: usize,
) -> io::Result<()> {
    writeln!(out, "\n=== {} ({}) ===", title, sets.len())?;
    writeln!(out, "  {:>4} | {:>8} | Items", "#", "Support")?;
    writeln!(out, "  -----|----------|------")?;
    for (i, set) in sets.iter().take(limit).enumerate() {
        writeln!(out, "  {:>4} | {:>8.4} | {}", i + 1, set.support, set.items)?;
    }
    write_truncation(out, sets.len(), limit)
}

/// Print rules in their current order, at most `limit` rows.
pub fn write_rules<W: Write>(
    out: &mut W,
    rules: &[AssociationRule],
    sort_by: RuleField,
    limit: usize,
) -> io::Result<()> {
    writeln!(
        out,
        "\n=== Association Rules ({}, sorted by {}) ===",
        rules.len(),
        sort_by.name()
    )?;
    writeln!(
        out,
        "  {:>4} | {:>8} | {:>8} | {:>8} | {:>10} | {:>8} | Rule",
        "#", "L.Supp", "R.Supp", "Support", "Confidence", "Lift"
    )?;
    writeln!(out, "  -----|----------|----------|----------|------------|----------|-----")?;
    for (i, rule) in rules.iter().take(limit).enumerate() {
        writeln!(
            out,
            "  {:>4} | {:>8.4} | {:>8.4} | {:>8.4} | {:>10.4} | {:>8.4} | {{{}}} -> {{{}}}",
            i + 1,
            rule.left_support,
            rule.right_support,
            rule.support,
            rule.confidence,
            rule.lift,
            rule.left,
            rule.right
        )?;
    }
    write_truncation(out, rules.len(), limit)
}

/// Print the most and least frequent items of every bag kind.
pub fn write_profile<W: Write>(out: &mut W, profile: &BasketProfile, n: usize) -> io::Result<()> {
    writeln!(out, "\n=== Basket Profile ===")?;
    writeln!(out, "Transactions: {}", profile.transaction_count())?;
    writeln!(out, "Average items per transaction: {:.2}", profile.average_basket_size())?;

    for kind in BagKind::ALL {
        let bag_size = profile.bag(kind).len();
        for (label, counts) in [
            ("Most", profile.most_frequent(kind, n)),
            ("Least", profile.least_frequent(kind, n)),
        ] {
            writeln!(
                out,
                "\nTop {} {} Frequent Items In {} Bags ({} transactions)",
                n,
                label,
                kind.title(),
                bag_size
            )?;
            for (item, count) in counts {
                writeln!(out, "  {:>8}  {}", count, item)?;
            }
        }
    }
    Ok(())
}

/// Print the thresholds and result counts of a run.
pub fn write_summary<W: Write>(
    out: &mut W,
    thresholds: &Thresholds,
    transactions: usize,
    frequent: usize,
    rules: usize,
) -> io::Result<()> {
    writeln!(out, "\n=== Summary ===")?;
    writeln!(out, "Transactions: {}", transactions)?;
    writeln!(out, "Minimum support: {}", thresholds.min_support)?;
    writeln!(out, "Minimum confidence: {}", thresholds.min_confidence)?;
    writeln!(out, "Minimum lift: {}", thresholds.min_lift)?;
    writeln!(out, "Frequent itemsets: {}", frequent)?;
    writeln!(out, "Rules: {}", rules)
}

fn write_truncation<W: Write>(out: &mut W, total: usize, limit: usize) -> io::Result<()> {
    if total > limit {
        writeln!(out, "  ... {} more", total - limit)?;
    }
    Ok(())
}

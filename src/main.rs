//! RuleForge: frequent itemsets and association rules from a CSV of baskets
//!
//! This is the main entrypoint that orchestrates data loading, mining, rule
//! derivation and reporting.

use anyhow::Result;
use clap::Parser;
use ruleforge::logging::{init_logging, LoggingConfig};
use ruleforge::{
    generate_rules, load_and_index, load_rows, mine, report, sort_rules, top_frequent_item_sets,
    Args, BasketProfile, FrequentItemSet, Thresholds, TransactionIndex,
};
use std::io::{self, Write};
use std::time::Instant;
use tracing::info;

fn main() -> Result<()> {
    // Parse command-line arguments
    let args = Args::parse();
    init_logging(
        LoggingConfig::default()
            .with_verbose(args.verbose)
            .with_json_format(args.log_json),
    )?;

    if let Some(n) = args.profile {
        return run_profile_mode(&args, n);
    }

    let thresholds = args.thresholds()?;
    match args.top {
        Some(n) => run_top_mode(&args, &thresholds, n),
        None => run_full_pipeline(&args, &thresholds),
    }
}

/// Print basket size statistics and item frequencies
fn run_profile_mode(args: &Args, n: usize) -> Result<()> {
    info!(input = %args.input, "profiling baskets");
    let rows = load_rows(&args.input, args.header)?;
    let profile = BasketProfile::from_rows(rows);

    let mut out = io::stdout().lock();
    report::write_profile(&mut out, &profile, n)?;
    out.flush()?;
    Ok(())
}

/// Derive rules from the `n` most supported itemsets of size >= 2
fn run_top_mode(args: &Args, thresholds: &Thresholds, n: usize) -> Result<()> {
    println!("=== Top {} Frequent Item Sets ===", n);
    let start_time = Instant::now();

    let index = load_index(args)?;
    let top = top_frequent_item_sets(mine(&index, thresholds.min_support)?, n);
    let rules = rank_rules(args, thresholds, &index, &top)?;

    let mut out = io::stdout().lock();
    report::write_frequent_item_sets(&mut out, "Top Frequent Item Sets", &top, args.limit)?;
    report::write_rules(&mut out, &rules, args.sort_by, args.limit)?;
    report::write_summary(&mut out, thresholds, index.transaction_count(), top.len(), rules.len())?;
    writeln!(out, "Total processing time: {:.2}s", start_time.elapsed().as_secs_f64())?;
    out.flush()?;
    Ok(())
}

/// Mine every frequent itemset and derive all qualifying rules
fn run_full_pipeline(args: &Args, thresholds: &Thresholds) -> Result<()> {
    println!("=== Association Rule Mining ===");
    let start_time = Instant::now();

    let index = load_index(args)?;

    let mining_start = Instant::now();
    let mut frequent: Vec<FrequentItemSet> = mine(&index, thresholds.min_support)?.collect();
    frequent.sort_by(|a, b| b.support.total_cmp(&a.support).then_with(|| a.items.cmp(&b.items)));
    info!(
        frequent = frequent.len(),
        elapsed_ms = mining_start.elapsed().as_millis() as u64,
        "mined frequent itemsets"
    );

    let rules = rank_rules(args, thresholds, &index, &frequent)?;

    let mut out = io::stdout().lock();
    if args.verbose {
        report::write_frequent_item_sets(&mut out, "Frequent Item Sets", &frequent, args.limit)?;
    }
    report::write_rules(&mut out, &rules, args.sort_by, args.limit)?;
    report::write_summary(
        &mut out,
        thresholds,
        index.transaction_count(),
        frequent.len(),
        rules.len(),
    )?;
    writeln!(out, "Total processing time: {:.2}s", start_time.elapsed().as_secs_f64())?;
    out.flush()?;
    Ok(())
}

fn load_index(args: &Args) -> Result<TransactionIndex> {
    let load_start = Instant::now();
    let (_rows, index) = load_and_index(&args.input, args.header)?;
    info!(
        input = %args.input,
        transactions = index.transaction_count(),
        items = index.items().len(),
        elapsed_ms = load_start.elapsed().as_millis() as u64,
        "loaded transactions"
    );
    Ok(index)
}

fn rank_rules(
    args: &Args,
    thresholds: &Thresholds,
    index: &TransactionIndex,
    frequent: &[FrequentItemSet],
) -> Result<Vec<ruleforge::AssociationRule>> {
    let mut rules = generate_rules(
        index,
        frequent,
        thresholds.min_confidence,
        thresholds.min_lift,
    )?;
    sort_rules(&mut rules, args.sort_by);
    Ok(rules)
}

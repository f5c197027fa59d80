//! Command-line interface definitions and argument parsing

use crate::rules::{RuleField, Thresholds};
use clap::Parser;

/// Market basket analysis: frequent itemsets and association rules (Apriori)
#[derive(Parser, Debug)]
#[command(author, version, about, long_about = None)]
pub struct Args {
    /// Path to the input CSV file, one transaction per row
    #[arg(short, long, env = "RULEFORGE_INPUT", default_value = "dataset.csv")]
    pub input: String,

    /// Treat the first CSV row as column names
    #[arg(long)]
    pub header: bool,

    /// Minimum support of a frequent itemset, in [0, 1]
    #[arg(short = 's', long, env = "RULEFORGE_MIN_SUPPORT", default_value = "0.001")]
    pub min_support: f64,

    /// Minimum confidence of a rule, in [0, 1]
    #[arg(short = 'c', long, env = "RULEFORGE_MIN_CONFIDENCE", default_value = "0.5")]
    pub min_confidence: f64,

    /// Minimum lift of a rule
    #[arg(short = 'l', long, env = "RULEFORGE_MIN_LIFT", default_value = "3")]
    pub min_lift: f64,

    /// Rule field to rank by, highest first
    #[arg(long, value_enum, default_value = "lift")]
    pub sort_by: RuleField,

    /// Top mode: derive rules only from the N most supported itemsets of size >= 2
    #[arg(long, value_name = "N", conflicts_with = "profile")]
    pub top: Option<usize>,

    /// Profile mode: print the N most and least frequent items per bag size
    #[arg(long, value_name = "N")]
    pub profile: Option<usize>,

    /// Maximum rows printed per table
    #[arg(long, default_value = "50")]
    pub limit: usize,

    /// Enable verbose output
    #[arg(short, long)]
    pub verbose: bool,

    /// Emit logs as JSON lines
    #[arg(long)]
    pub log_json: bool,
}

impl Args {
    /// Validate the mining thresholds
    pub fn thresholds(&self) -> crate::Result<Thresholds> {
        Ok(Thresholds::new(
            self.min_support,
            self.min_confidence,
            self.min_lift,
        )?)
    }
}

//! Integration tests for RuleForge

use ruleforge::{
    generate_rules, load_and_index, mine, sort_rules, top_frequent_item_sets, FrequentItemSet,
    Itemset, RuleField,
};
use std::io::Write;
use tempfile::NamedTempFile;

/// Create a header-less basket CSV, padded with empty cells
fn create_test_csv() -> NamedTempFile {
    let mut file = NamedTempFile::new().unwrap();
    writeln!(file, "Bread,Milk,,").unwrap();
    writeln!(file, "Bread,Diaper,Beer,Eggs").unwrap();
    writeln!(file, "Milk,Diaper,Beer,Cola").unwrap();
    writeln!(file, "Bread,Milk,Diaper,Beer").unwrap();
    writeln!(file, "Bread,Milk,Diaper,Cola").unwrap();
    file
}

fn support_of(sets: &[FrequentItemSet], items: &[&str]) -> Option<f64> {
    let wanted = Itemset::new(items.iter().copied());
    sets.iter().find(|set| set.items == wanted).map(|set| set.support)
}

#[test]
fn test_end_to_end_pipeline() {
    let test_file = create_test_csv();
    let file_path = test_file.path().to_str().unwrap();

    let (rows, index) = load_and_index(file_path, false).unwrap();
    assert_eq!(rows.len(), 5);
    assert_eq!(index.transaction_count(), 5);
    assert_eq!(index.items().len(), 6);

    let frequent: Vec<FrequentItemSet> = mine(&index, 0.6).unwrap().collect();
    assert_eq!(support_of(&frequent, &["bread"]), Some(0.8));
    assert_eq!(support_of(&frequent, &["diaper", "beer"]), Some(0.6));
    assert_eq!(support_of(&frequent, &["eggs"]), None);
    assert!(frequent.iter().all(|set| set.support >= 0.6));

    let mut rules = generate_rules(&index, &frequent, 0.7, 1.0).unwrap();
    sort_rules(&mut rules, RuleField::Lift);

    let top = &rules[0];
    assert_eq!(top.left, Itemset::new(["beer"]));
    assert_eq!(top.right, Itemset::new(["diaper"]));
    assert!((top.confidence - 1.0).abs() < 1e-12);
    assert!((top.lift - 1.25).abs() < 1e-12);

    for rule in &rules {
        assert!(rule.confidence >= 0.7);
        assert!(rule.lift >= 1.0);
        assert!(rule.left.is_disjoint(&rule.right));
    }
}

#[test]
fn test_top_mode_pipeline() {
    let test_file = create_test_csv();
    let file_path = test_file.path().to_str().unwrap();

    let (_rows, index) = load_and_index(file_path, false).unwrap();
    let top = top_frequent_item_sets(mine(&index, 0.4).unwrap(), 2);

    assert_eq!(top.len(), 2);
    assert!(top.iter().all(|set| set.items.len() >= 2));
    assert!(top[0].support >= top[1].support);

    let rules = generate_rules(&index, &top, 0.0, 0.0).unwrap();
    for rule in &rules {
        assert!(top.iter().any(|set| set.items == rule.left.union(&rule.right)));
    }
}

#[test]
fn test_numeric_labels_are_items() {
    let mut file = NamedTempFile::new().unwrap();
    writeln!(file, "1,2").unwrap();
    writeln!(file, "1,3").unwrap();
    let file_path = file.path().to_str().unwrap();

    let (_rows, index) = load_and_index(file_path, false).unwrap();
    assert!(index.transactions_of("1").is_some());
    assert_eq!(index.support(&Itemset::new(["1"])), 1.0);
}

#[test]
fn test_idempotent_mining() {
    let test_file = create_test_csv();
    let file_path = test_file.path().to_str().unwrap();
    let (_rows, index) = load_and_index(file_path, false).unwrap();

    let first: Vec<FrequentItemSet> = mine(&index, 0.2).unwrap().collect();
    let second: Vec<FrequentItemSet> = mine(&index, 0.2).unwrap().collect();
    assert_eq!(first, second);
}

#[test]
fn test_error_handling_invalid_thresholds() {
    let test_file = create_test_csv();
    let file_path = test_file.path().to_str().unwrap();
    let (_rows, index) = load_and_index(file_path, false).unwrap();

    assert!(mine(&index, 2.0).is_err());
    let frequent: Vec<FrequentItemSet> = mine(&index, 0.5).unwrap().collect();
    assert!(generate_rules(&index, &frequent, -0.5, 1.0).is_err());
    assert!(generate_rules(&index, &frequent, 0.5, f64::NAN).is_err());
}

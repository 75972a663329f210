//! Dataset summarizer tests.

use std::collections::BTreeMap;

use dq_model::{CellValue, ColumnType, Row};
use dq_profile::summarize;

fn row(cells: &[(&str, CellValue)]) -> Row {
    cells
        .iter()
        .map(|(name, cell)| ((*name).to_string(), cell.clone()))
        .collect::<BTreeMap<_, _>>()
}

fn num(value: f64) -> CellValue {
    CellValue::Number(value)
}

fn text(value: &str) -> CellValue {
    CellValue::Text(value.to_string())
}

fn features(names: &[&str]) -> Vec<String> {
    names.iter().map(|name| (*name).to_string()).collect()
}

#[test]
fn categorical_target_scenario() {
    let rows = vec![
        row(&[("a", num(1.0)), ("b", text("x"))]),
        row(&[("a", num(2.0)), ("b", text("y"))]),
        row(&[("a", num(3.0)), ("b", text("x"))]),
    ];
    let summary = summarize(&rows, "b", &features(&["a"]));

    assert_eq!(summary.row_count, 3);
    assert_eq!(summary.column_count, 2);
    assert_eq!(summary.target_column, "b");

    let target = summary.target_profile().expect("target profile");
    assert_eq!(target.name, "b");
    assert_eq!(target.column_type, ColumnType::Categorical);

    let dist: Vec<(&str, usize)> = summary
        .target_distribution
        .iter()
        .map(|entry| (entry.value.as_str(), entry.count))
        .collect();
    assert_eq!(dist, vec![("x", 2), ("y", 1)]);

    let a = &summary.columns[1];
    assert_eq!(a.column_type, ColumnType::Numeric);
    assert_eq!(a.min, Some(1.0));
    assert_eq!(a.max, Some(3.0));
    assert_eq!(a.mean, Some(2.0));
    // Non-numeric target: no correlation.
    assert!(a.correlation_with_target.is_none());
}

#[test]
fn numeric_target_gets_correlations() {
    let rows = vec![
        row(&[("a", num(1.0)), ("t", num(1.0))]),
        row(&[("a", num(2.0)), ("t", num(2.0))]),
        row(&[("a", num(3.0)), ("t", num(3.0))]),
    ];
    let summary = summarize(&rows, "t", &features(&["a"]));
    assert_eq!(summary.columns[0].column_type, ColumnType::Numeric);
    let a = &summary.columns[1];
    assert_eq!(a.column_type, ColumnType::Numeric);
    assert_eq!(a.correlation_with_target, Some(1.0));
    // The target never correlates with itself.
    assert!(summary.columns[0].correlation_with_target.is_none());
}

#[test]
fn distribution_counts_sum_to_row_count() {
    let rows = vec![
        row(&[("t", text("a"))]),
        row(&[("t", CellValue::Null)]),
        row(&[("t", text("b"))]),
        row(&[("t", text("a"))]),
        row(&[]),
    ];
    let summary = summarize(&rows, "t", &[]);
    let total: usize = summary
        .target_distribution
        .iter()
        .map(|entry| entry.count)
        .sum();
    assert_eq!(total, summary.row_count);
    // Null and the absent cell both land under the "Missing" key.
    let missing = summary
        .target_distribution
        .iter()
        .find(|entry| entry.value == "Missing")
        .expect("missing bucket");
    assert_eq!(missing.count, 2);
}

#[test]
fn distribution_keys_are_first_seen_ordered() {
    let rows = vec![
        row(&[("t", text("high"))]),
        row(&[("t", text("low"))]),
        row(&[("t", text("high"))]),
        row(&[("t", text("mid"))]),
    ];
    let summary = summarize(&rows, "t", &[]);
    let keys: Vec<&str> = summary
        .target_distribution
        .iter()
        .map(|entry| entry.value.as_str())
        .collect();
    assert_eq!(keys, vec!["high", "low", "mid"]);
}

#[test]
fn numeric_targets_key_distribution_by_rendered_value() {
    let rows = vec![row(&[("t", num(1.0))]), row(&[("t", num(1.0))])];
    let summary = summarize(&rows, "t", &[]);
    assert_eq!(summary.target_distribution[0].value, "1");
    assert_eq!(summary.target_distribution[0].count, 2);
}

#[test]
fn unknown_column_profiles_as_fully_missing() {
    let rows = vec![row(&[("t", num(1.0))]), row(&[("t", num(2.0))])];
    let summary = summarize(&rows, "t", &features(&["ghost"]));
    let ghost = &summary.columns[1];
    assert_eq!(ghost.missing_count, 2);
    assert_eq!(ghost.missing_percentage, 100.0);
    assert_eq!(ghost.unique_count, 0);
}

#[test]
fn dirty_cells_bias_correlation_toward_zero() {
    // "n/a" fails coercion and contributes 0 to the sums instead of being
    // excluded pairwise.
    let rows = vec![
        row(&[("a", num(1.0)), ("t", num(1.0))]),
        row(&[("a", num(2.0)), ("t", num(2.0))]),
        row(&[("a", text("n/a")), ("t", num(3.0))]),
    ];
    let summary = summarize(&rows, "t", &features(&["a"]));
    let r = summary.columns[1]
        .correlation_with_target
        .expect("correlation");
    assert_eq!(r, -0.5);
}

#[test]
fn duplicate_target_in_features_is_not_deduplicated() {
    let rows = vec![row(&[("t", num(1.0))]), row(&[("t", num(2.0))])];
    let summary = summarize(&rows, "t", &features(&["t"]));
    assert_eq!(summary.column_count, 2);
    assert_eq!(summary.columns.len(), 2);
    assert_eq!(summary.columns[0].name, "t");
    assert_eq!(summary.columns[1].name, "t");
    // Same name as the target, so the duplicate gets no correlation either.
    assert!(summary.columns[1].correlation_with_target.is_none());
}

#[test]
fn zero_rows_is_well_defined() {
    let summary = summarize(&[], "t", &features(&["a"]));
    assert_eq!(summary.row_count, 0);
    assert!(summary.target_distribution.is_empty());
    for profile in &summary.columns {
        assert_eq!(profile.missing_percentage, 0.0);
    }
}

#[test]
fn summarize_is_pure() {
    let rows = vec![
        row(&[("a", num(1.0)), ("t", text("x"))]),
        row(&[("a", num(2.0)), ("t", text("y"))]),
    ];
    let before = rows.clone();
    let first = summarize(&rows, "t", &features(&["a"]));
    let second = summarize(&rows, "t", &features(&["a"]));
    assert_eq!(first, second);
    assert_eq!(rows, before);
}

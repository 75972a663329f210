//! Column profiling.
//!
//! Given the raw cells of one column, infer a semantic type and compute the
//! matching aggregates. Profiling never fails: malformed values degrade to
//! exclusion and empty columns produce empty aggregates.

use std::collections::{HashMap, HashSet};

use dq_model::{CellValue, ColumnProfile, ColumnType, ValueCount};

/// Distinct values below this count classify a non-numeric column as
/// categorical.
const CATEGORICAL_CARDINALITY_CUTOFF: usize = 20;

/// Number of top categories retained per categorical column.
const TOP_CATEGORY_LIMIT: usize = 5;

/// Identity key for distinct-value counting. Numbers and text are distinct
/// even when they print the same ("5" vs 5); numbers are keyed by bit
/// pattern.
#[derive(PartialEq, Eq, Hash)]
enum DistinctKey<'a> {
    Number(u64),
    Text(&'a str),
}

impl<'a> DistinctKey<'a> {
    fn of(cell: &'a CellValue) -> Option<Self> {
        match cell {
            CellValue::Number(value) => Some(DistinctKey::Number(value.to_bits())),
            CellValue::Text(text) => Some(DistinctKey::Text(text)),
            CellValue::Null | CellValue::Missing => None,
        }
    }
}

/// Infer the column type from the first present value.
///
/// This is a first-value heuristic, not a majority vote: a column whose
/// first present value is the text "5" is categorical even if every later
/// value is numeric.
fn infer_type(first_present: Option<&CellValue>, unique_count: usize) -> ColumnType {
    match first_present {
        Some(CellValue::Number(_)) => ColumnType::Numeric,
        Some(CellValue::Text(_)) => ColumnType::Categorical,
        _ if unique_count < CATEGORICAL_CARDINALITY_CUTOFF => ColumnType::Categorical,
        _ => ColumnType::Other,
    }
}

fn numeric_aggregates(present: &[&CellValue]) -> Option<(f64, f64, f64)> {
    let numbers: Vec<f64> = present
        .iter()
        .filter_map(|cell| cell.as_number())
        .filter(|value| !value.is_nan())
        .collect();
    if numbers.is_empty() {
        return None;
    }
    let min = numbers.iter().copied().fold(f64::INFINITY, f64::min);
    let max = numbers.iter().copied().fold(f64::NEG_INFINITY, f64::max);
    let mean = numbers.iter().sum::<f64>() / numbers.len() as f64;
    Some((min, max, mean))
}

fn top_categories(present: &[&CellValue]) -> Option<Vec<ValueCount>> {
    if present.is_empty() {
        return None;
    }
    // Count in first-encountered order so the later stable sort keeps that
    // order for equal counts.
    let mut counts: Vec<ValueCount> = Vec::new();
    let mut index: HashMap<String, usize> = HashMap::new();
    for cell in present {
        let key = cell.display_string();
        match index.get(&key) {
            Some(&at) => counts[at].count += 1,
            None => {
                index.insert(key.clone(), counts.len());
                counts.push(ValueCount {
                    value: key,
                    count: 1,
                });
            }
        }
    }
    counts.sort_by(|a, b| b.count.cmp(&a.count));
    counts.truncate(TOP_CATEGORY_LIMIT);
    Some(counts)
}

/// Profile one column.
///
/// `total_row_count` is the dataset row count; cells absent from a row must
/// already appear in `values` as [`CellValue::Missing`].
pub fn profile_column(name: &str, values: &[CellValue], total_row_count: usize) -> ColumnProfile {
    let present: Vec<&CellValue> = values.iter().filter(|cell| cell.is_present()).collect();
    let missing_count = total_row_count.saturating_sub(present.len());
    let unique_count = present
        .iter()
        .filter_map(|cell| DistinctKey::of(cell))
        .collect::<HashSet<_>>()
        .len();

    let column_type = infer_type(present.first().copied(), unique_count);

    let mut profile = ColumnProfile::new(name, column_type);
    profile.missing_count = missing_count;
    profile.missing_percentage = if total_row_count == 0 {
        0.0
    } else {
        missing_count as f64 / total_row_count as f64 * 100.0
    };
    profile.unique_count = unique_count;

    match column_type {
        ColumnType::Numeric => {
            if let Some((min, max, mean)) = numeric_aggregates(&present) {
                profile.min = Some(min);
                profile.max = Some(max);
                profile.mean = Some(mean);
            }
        }
        ColumnType::Categorical => {
            profile.top_categories = top_categories(&present);
        }
        ColumnType::Other => {}
    }
    profile
}

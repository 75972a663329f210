//! Dataset summarization.
//!
//! Orchestrates the column profiler and the correlation estimator across
//! the target plus the selected features, and builds the target value
//! histogram. Pure: no mutation of the input rows, deterministic output.

use std::collections::HashMap;

use tracing::debug;

use dq_model::{CellValue, ColumnType, DatasetSummary, Row, ValueCount};

use crate::correlation::correlate;
use crate::profile::profile_column;

/// Histogram key for absent target values.
const MISSING_KEY: &str = "Missing";

fn column_values(rows: &[Row], name: &str) -> Vec<CellValue> {
    rows.iter()
        .map(|row| row.get(name).cloned().unwrap_or(CellValue::Missing))
        .collect()
}

/// Raw correlation input for one cell. Coercion failures surface as NaN;
/// the estimator substitutes zero for them.
fn correlation_input(cell: Option<&CellValue>) -> f64 {
    cell.and_then(CellValue::as_number).unwrap_or(f64::NAN)
}

fn target_distribution(rows: &[Row], target_column: &str) -> Vec<ValueCount> {
    let mut counts: Vec<ValueCount> = Vec::new();
    let mut index: HashMap<String, usize> = HashMap::new();
    for row in rows {
        let cell = row.get(target_column).unwrap_or(&CellValue::Missing);
        let key = if cell.is_present() {
            cell.display_string()
        } else {
            MISSING_KEY.to_string()
        };
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
    counts
}

/// Build a [`DatasetSummary`] for the target plus the selected features.
///
/// The column list is the target first, then the features in selection
/// order; no deduplication is performed, so a feature list that repeats the
/// target yields a duplicate profile. Never fails: degenerate input
/// (zero rows, empty columns) produces defined fallback values.
pub fn summarize(rows: &[Row], target_column: &str, feature_columns: &[String]) -> DatasetSummary {
    let row_count = rows.len();
    let mut column_names: Vec<&str> = Vec::with_capacity(1 + feature_columns.len());
    column_names.push(target_column);
    column_names.extend(feature_columns.iter().map(String::as_str));

    let mut columns = Vec::with_capacity(column_names.len());
    for name in &column_names {
        let values = column_values(rows, name);
        columns.push(profile_column(name, &values, row_count));
    }

    let target_distribution = target_distribution(rows, target_column);

    // Correlations only make sense against a numeric target, and only for
    // numeric non-target columns.
    let target_is_numeric = columns
        .first()
        .is_some_and(|profile| profile.column_type == ColumnType::Numeric);
    if target_is_numeric {
        let target_inputs: Vec<f64> = rows
            .iter()
            .map(|row| correlation_input(row.get(target_column)))
            .collect();
        for profile in &mut columns {
            if profile.name != target_column && profile.column_type == ColumnType::Numeric {
                let inputs: Vec<f64> = rows
                    .iter()
                    .map(|row| correlation_input(row.get(&profile.name)))
                    .collect();
                profile.correlation_with_target = Some(correlate(&inputs, &target_inputs));
            }
        }
    }

    debug!(
        rows = row_count,
        columns = column_names.len(),
        target = target_column,
        "built dataset summary"
    );
    DatasetSummary {
        row_count,
        column_count: column_names.len(),
        target_column: target_column.to_string(),
        feature_columns: feature_columns.to_vec(),
        columns,
        target_distribution,
    }
}

//! Naive CSV loading.
//!
//! The upload contract is deliberately simple: a fixed comma delimiter, no
//! quoting or escaping, the first line as the header row. Each cell is
//! trimmed; empty cells become `Null`, numeric-looking cells become
//! `Number`, everything else stays `Text`. A short row yields `Missing`
//! for its tail columns.

use std::collections::BTreeMap;
use std::path::Path;

use tracing::debug;

use dq_model::{CellValue, Row};

use crate::error::{IngestError, Result};

/// An ingested dataset: headers in file order and one value map per row.
#[derive(Debug, Clone)]
pub struct Dataset {
    pub headers: Vec<String>,
    pub rows: Vec<Row>,
}

impl Dataset {
    pub fn row_count(&self) -> usize {
        self.rows.len()
    }
}

fn normalize_header(raw: &str) -> String {
    raw.trim().trim_matches('\u{feff}').to_string()
}

fn coerce_cell(raw: &str) -> CellValue {
    let trimmed = raw.trim();
    if trimmed.is_empty() {
        return CellValue::Null;
    }
    match trimmed.parse::<f64>() {
        Ok(value) if !value.is_nan() => CellValue::Number(value),
        _ => CellValue::Text(trimmed.to_string()),
    }
}

/// Parse CSV text into a [`Dataset`].
///
/// # Errors
///
/// Returns [`IngestError::NoData`] when the text has no header row or no
/// data rows.
pub fn parse_csv_str(text: &str) -> Result<Dataset> {
    let mut lines = text.lines();
    let header_line = lines.next().ok_or(IngestError::NoData)?;
    let headers: Vec<String> = header_line.split(',').map(normalize_header).collect();

    let mut rows: Vec<Row> = Vec::new();
    for line in lines {
        if line.trim().is_empty() {
            continue;
        }
        let values: Vec<&str> = line.split(',').collect();
        let mut row = BTreeMap::new();
        for (index, header) in headers.iter().enumerate() {
            let cell = match values.get(index) {
                Some(raw) => coerce_cell(raw),
                None => CellValue::Missing,
            };
            row.insert(header.clone(), cell);
        }
        rows.push(row);
    }
    if rows.is_empty() {
        return Err(IngestError::NoData);
    }

    debug!(
        rows = rows.len(),
        columns = headers.len(),
        "parsed csv input"
    );
    Ok(Dataset { headers, rows })
}

/// Read and parse a CSV file.
pub fn load_csv(path: &Path) -> Result<Dataset> {
    let text = std::fs::read_to_string(path)?;
    let dataset = parse_csv_str(&text)?;
    debug!(path = %path.display(), rows = dataset.row_count(), "loaded csv file");
    Ok(dataset)
}

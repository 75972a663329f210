use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

/// A single cell value as produced by the upload boundary.
///
/// The permissive parsing of the source format is preserved as a tagged
/// union: numeric-looking text becomes `Number`, empty text becomes `Null`,
/// and a cell the row does not have at all (short row, unknown column) is
/// `Missing`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "kind", content = "value")]
pub enum CellValue {
    Number(f64),
    Text(String),
    Null,
    Missing,
}

impl CellValue {
    /// A value counts as present unless it is missing, null, or empty text.
    pub fn is_present(&self) -> bool {
        match self {
            CellValue::Number(_) => true,
            CellValue::Text(text) => !text.is_empty(),
            CellValue::Null | CellValue::Missing => false,
        }
    }

    /// Coerce to a number. Text is trimmed and parsed; a parse failure,
    /// null, or missing cell yields `None`. The parse may produce NaN
    /// (e.g. the literal text "NaN"); callers decide how to treat it.
    pub fn as_number(&self) -> Option<f64> {
        match self {
            CellValue::Number(value) => Some(*value),
            CellValue::Text(text) => text.trim().parse::<f64>().ok(),
            CellValue::Null | CellValue::Missing => None,
        }
    }

    /// Render the value the way it is keyed in histograms. Whole numbers
    /// print without a fractional part.
    pub fn display_string(&self) -> String {
        match self {
            CellValue::Number(value) => format!("{value}"),
            CellValue::Text(text) => text.clone(),
            CellValue::Null | CellValue::Missing => String::new(),
        }
    }
}

/// One dataset row: column name to cell value.
pub type Row = BTreeMap<String, CellValue>;

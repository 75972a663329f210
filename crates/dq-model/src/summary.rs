use serde::{Deserialize, Serialize};

/// Semantic column type inferred during profiling.
///
/// Inference is intentionally shallow: it looks at the shape of the first
/// present value (plus a cardinality cutoff), not a full-column vote. See
/// the profiler for the exact rules.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ColumnType {
    Numeric,
    Categorical,
    Other,
}

impl ColumnType {
    pub fn as_str(self) -> &'static str {
        match self {
            ColumnType::Numeric => "numeric",
            ColumnType::Categorical => "categorical",
            ColumnType::Other => "other",
        }
    }
}

/// A stringified value with its occurrence count.
///
/// Used both for categorical top values and for the target distribution,
/// where first-seen insertion order matters and must survive serialization.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ValueCount {
    pub value: String,
    pub count: usize,
}

/// Per-column statistical summary.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ColumnProfile {
    pub name: String,
    #[serde(rename = "type")]
    pub column_type: ColumnType,
    pub missing_count: usize,
    pub missing_percentage: f64,
    pub unique_count: usize,
    /// Numeric columns only, and only when at least one value coerces.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub min: Option<f64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub max: Option<f64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub mean: Option<f64>,
    /// Categorical columns only: up to five values by descending count,
    /// ties broken by first-encountered order.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub top_categories: Option<Vec<ValueCount>>,
    /// Present only when both this column and the target are numeric and
    /// this column is not the target itself.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub correlation_with_target: Option<f64>,
}

impl ColumnProfile {
    /// An empty profile for a column with the given name and type; all
    /// aggregates unset.
    pub fn new(name: impl Into<String>, column_type: ColumnType) -> Self {
        Self {
            name: name.into(),
            column_type,
            missing_count: 0,
            missing_percentage: 0.0,
            unique_count: 0,
            min: None,
            max: None,
            mean: None,
            top_categories: None,
            correlation_with_target: None,
        }
    }
}

/// Full statistical snapshot of the target plus the selected features for
/// one audit request. Immutable once built; a new selection produces a
/// wholly new summary.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DatasetSummary {
    pub row_count: usize,
    /// Target plus features, duplicates included.
    pub column_count: usize,
    pub target_column: String,
    pub feature_columns: Vec<String>,
    /// Target first, then features in selection order.
    pub columns: Vec<ColumnProfile>,
    /// Histogram of stringified target values in first-seen order; absent
    /// values are keyed by the literal "Missing". Counts sum to `row_count`.
    pub target_distribution: Vec<ValueCount>,
}

impl DatasetSummary {
    /// Profile of the target column (always the first entry).
    pub fn target_profile(&self) -> Option<&ColumnProfile> {
        self.columns.first()
    }
}

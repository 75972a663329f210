//! Prompt construction.
//!
//! The dataset summary is serialized into a natural-language prompt: the
//! headline numbers, one line per column profile, the target distribution
//! as a JSON object in first-seen order, the audit requirements, and the
//! exact response shape the service must return.

use std::fmt::Write;

use dq_model::DatasetSummary;

const RESPONSE_SHAPE: &str = r#"{
  "healthScore": number,
  "criticalIssues": string[],
  "moderateIssues": string[],
  "featureWarnings": { "featureName": "explanation" },
  "leakageRisk": { "level": "Low" | "Medium" | "High", "explanation": string },
  "recommendedActions": string[],
  "finalVerdict": { "safe": "Yes" | "No" | "With Conditions", "reason": string }
}"#;

/// Build the audit prompt for a dataset summary.
pub fn build_prompt(summary: &DatasetSummary) -> String {
    let mut prompt = String::new();
    prompt.push_str(
        "You are an expert Machine Learning Engineer and Data Quality Auditor.\n\
         Perform a data quality audit based on the following dataset summary.\n\
         The actual data is not provided, only these aggregated statistics.\n\n",
    );

    let _ = writeln!(prompt, "Dataset Details:");
    let _ = writeln!(prompt, "- Rows: {}", summary.row_count);
    let _ = writeln!(prompt, "- Target: {}", summary.target_column);
    let _ = writeln!(
        prompt,
        "- Features: {}",
        summary.feature_columns.join(", ")
    );

    prompt.push_str("\nColumn Summaries:\n");
    for column in &summary.columns {
        let _ = write!(
            prompt,
            "- {}: Type={}, Missing={:.2}%, Uniques={}",
            column.name,
            column.column_type.as_str(),
            column.missing_percentage,
            column.unique_count
        );
        if let Some(correlation) = column.correlation_with_target {
            let _ = write!(prompt, ", CorrelationWithTarget={correlation:.3}");
        }
        prompt.push('\n');
    }

    prompt.push_str("\nTarget Distribution:\n");
    prompt.push_str(&distribution_json(summary));

    prompt.push_str(
        "\n\nAudit Requirements:\n\
         1. Missing Data Analysis: Identify risks from the provided missing percentages.\n\
         2. Target Distribution: Flag class imbalance or regression skew.\n\
         3. Data Leakage: Flag features with suspicious correlations (e.g., > 0.95 or exactly 1.0) or proxy variables.\n\
         4. Feature Quality: Detect low variance (uniques=1) or high cardinality IDs.\n\
         5. Generalization Risk: Mention any columns like 'date' or 'id' that might drift.\n",
    );

    prompt.push_str("\nReturn ONLY a JSON object matching this structure:\n");
    prompt.push_str(RESPONSE_SHAPE);
    prompt.push('\n');
    prompt
}

/// Render the target distribution as a JSON object, preserving first-seen
/// key order (serde_json maps would re-sort it).
fn distribution_json(summary: &DatasetSummary) -> String {
    if summary.target_distribution.is_empty() {
        return "{}".to_string();
    }
    let mut json = String::from("{\n");
    for (position, entry) in summary.target_distribution.iter().enumerate() {
        let key = serde_json::Value::String(entry.value.clone());
        let _ = write!(json, "  {}: {}", key, entry.count);
        if position + 1 < summary.target_distribution.len() {
            json.push(',');
        }
        json.push('\n');
    }
    json.push('}');
    json
}

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

/// Structured data quality audit returned by the external model service.
///
/// The service output is untrusted: it may omit fields or add noise around
/// the JSON object. Every field therefore carries a default so that any
/// structurally valid JSON object decodes; field-level validation beyond
/// parse success is deliberately not performed.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AuditReport {
    /// Overall training-readiness verdict, 0-100.
    #[serde(default)]
    pub health_score: i64,
    #[serde(default)]
    pub critical_issues: Vec<String>,
    #[serde(default)]
    pub moderate_issues: Vec<String>,
    /// Column name to explanation.
    #[serde(default)]
    pub feature_warnings: BTreeMap<String, String>,
    #[serde(default)]
    pub leakage_risk: LeakageRisk,
    /// Ordered by impact, highest first.
    #[serde(default)]
    pub recommended_actions: Vec<String>,
    #[serde(default)]
    pub final_verdict: FinalVerdict,
}

#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct LeakageRisk {
    #[serde(default)]
    pub level: LeakageLevel,
    #[serde(default)]
    pub explanation: String,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum LeakageLevel {
    #[default]
    Low,
    Medium,
    High,
}

impl LeakageLevel {
    pub fn as_str(self) -> &'static str {
        match self {
            LeakageLevel::Low => "Low",
            LeakageLevel::Medium => "Medium",
            LeakageLevel::High => "High",
        }
    }
}

#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct FinalVerdict {
    #[serde(default)]
    pub safe: VerdictSafety,
    #[serde(default)]
    pub reason: String,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum VerdictSafety {
    Yes,
    No,
    /// The cautious default when the service omits the verdict.
    #[default]
    #[serde(rename = "With Conditions")]
    WithConditions,
}

impl VerdictSafety {
    pub fn as_str(self) -> &'static str {
        match self {
            VerdictSafety::Yes => "Yes",
            VerdictSafety::No => "No",
            VerdictSafety::WithConditions => "With Conditions",
        }
    }
}

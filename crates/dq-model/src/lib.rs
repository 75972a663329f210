pub mod cell;
pub mod report;
pub mod summary;

pub use cell::{CellValue, Row};
pub use report::{AuditReport, FinalVerdict, LeakageLevel, LeakageRisk, VerdictSafety};
pub use summary::{ColumnProfile, ColumnType, DatasetSummary, ValueCount};

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn cell_presence() {
        assert!(CellValue::Number(0.0).is_present());
        assert!(CellValue::Text("x".to_string()).is_present());
        assert!(!CellValue::Text(String::new()).is_present());
        assert!(!CellValue::Null.is_present());
        assert!(!CellValue::Missing.is_present());
    }

    #[test]
    fn number_coercion() {
        assert_eq!(CellValue::Number(2.5).as_number(), Some(2.5));
        assert_eq!(CellValue::Text(" 7 ".to_string()).as_number(), Some(7.0));
        assert_eq!(CellValue::Text("abc".to_string()).as_number(), None);
        assert_eq!(CellValue::Null.as_number(), None);
        assert_eq!(CellValue::Missing.as_number(), None);
    }

    #[test]
    fn whole_numbers_display_without_fraction() {
        assert_eq!(CellValue::Number(5.0).display_string(), "5");
        assert_eq!(CellValue::Number(5.5).display_string(), "5.5");
        assert_eq!(CellValue::Text("yes".to_string()).display_string(), "yes");
    }

    #[test]
    fn summary_serializes() {
        let summary = DatasetSummary {
            row_count: 3,
            column_count: 2,
            target_column: "t".to_string(),
            feature_columns: vec!["a".to_string()],
            columns: vec![ColumnProfile::new("t", ColumnType::Numeric)],
            target_distribution: vec![ValueCount {
                value: "1".to_string(),
                count: 3,
            }],
        };
        let json = serde_json::to_string(&summary).expect("serialize summary");
        let round: DatasetSummary = serde_json::from_str(&json).expect("deserialize summary");
        assert_eq!(round, summary);
    }
}

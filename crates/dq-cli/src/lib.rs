//! CLI library components for the Data Quality Auditor.

pub mod logging;
pub mod selection;

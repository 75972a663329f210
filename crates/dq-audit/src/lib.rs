//! Audit service boundary.
//!
//! The "intelligence" of the audit lives entirely in an external model
//! service; this crate only serializes a [`dq_model::DatasetSummary`] into
//! a prompt, performs one request, and decodes the untrusted JSON answer.

pub mod client;
pub mod config;
pub mod error;
pub mod prompt;

pub use client::{AuditClient, decode_report};
pub use config::{AuditConfig, DEFAULT_API_BASE, DEFAULT_MODEL};
pub use error::{AuditError, Result};
pub use prompt::build_prompt;

//! Error types for the audit service boundary.

use thiserror::Error;

/// Errors that can occur while requesting an audit report.
#[derive(Debug, Error)]
#[non_exhaustive]
pub enum AuditError {
    /// Network request failed.
    #[error("network error: {0}")]
    Network(String),

    /// The service answered with a non-success status.
    #[error("audit service returned status {status}: {message}")]
    Api { status: u16, message: String },

    /// The service answered without any usable text.
    #[error("empty response from audit service")]
    EmptyResponse,

    /// The service's output could not be decoded as a report.
    #[error("malformed audit response: {0}")]
    MalformedResponse(String),
}

impl AuditError {
    /// A short message suitable for direct display to the user.
    #[must_use]
    pub fn user_message(&self) -> &str {
        match self {
            Self::Network(_) => "Could not reach the audit service. Check your connection.",
            Self::Api { .. } => "The audit service rejected the request.",
            Self::EmptyResponse | Self::MalformedResponse(_) => {
                "The audit service returned an unusable answer. Re-run the audit to retry."
            }
        }
    }
}

impl From<reqwest::Error> for AuditError {
    fn from(err: reqwest::Error) -> Self {
        Self::Network(err.to_string())
    }
}

pub type Result<T> = std::result::Result<T, AuditError>;

//! Audit client configuration.
//!
//! The API credential and endpoint are explicit configuration values
//! injected into the client; nothing in this crate reads ambient process
//! state. The CLI edge is responsible for assembling a config from flags
//! and environment.

use std::time::Duration;

/// Model requested for audits.
pub const DEFAULT_MODEL: &str = "gemini-3-pro-preview";

/// Gemini API base URL.
pub const DEFAULT_API_BASE: &str = "https://generativelanguage.googleapis.com";

const DEFAULT_TIMEOUT: Duration = Duration::from_secs(120);

/// Configuration for the audit service call.
#[derive(Debug, Clone)]
pub struct AuditConfig {
    pub api_key: String,
    pub model: String,
    pub api_base: String,
    pub timeout: Duration,
}

impl AuditConfig {
    pub fn new(api_key: impl Into<String>) -> Self {
        Self {
            api_key: api_key.into(),
            model: DEFAULT_MODEL.to_string(),
            api_base: DEFAULT_API_BASE.to_string(),
            timeout: DEFAULT_TIMEOUT,
        }
    }

    #[must_use]
    pub fn with_model(mut self, model: impl Into<String>) -> Self {
        self.model = model.into();
        self
    }

    #[must_use]
    pub fn with_api_base(mut self, api_base: impl Into<String>) -> Self {
        self.api_base = api_base.into();
        self
    }

    #[must_use]
    pub fn with_timeout(mut self, timeout: Duration) -> Self {
        self.timeout = timeout;
        self
    }
}

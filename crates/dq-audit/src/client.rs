//! HTTP client for the Gemini `generateContent` endpoint.
//!
//! One outbound request per audit invocation: no retries, no streaming,
//! no concurrent in-flight requests. JSON-typed output is requested via
//! `responseMimeType`, and the answer is decoded as a fallible step.

use serde::{Deserialize, Serialize};
use tracing::debug;

use dq_model::{AuditReport, DatasetSummary};

use crate::config::AuditConfig;
use crate::error::{AuditError, Result};
use crate::prompt::build_prompt;

#[derive(Serialize)]
struct GenerateContentRequest<'a> {
    contents: Vec<Content<'a>>,
    #[serde(rename = "generationConfig")]
    generation_config: GenerationConfig,
}

#[derive(Serialize)]
struct Content<'a> {
    parts: Vec<Part<'a>>,
}

#[derive(Serialize)]
struct Part<'a> {
    text: &'a str,
}

#[derive(Serialize)]
struct GenerationConfig {
    #[serde(rename = "responseMimeType")]
    response_mime_type: &'static str,
}

#[derive(Deserialize)]
struct GenerateContentResponse {
    #[serde(default)]
    candidates: Vec<Candidate>,
}

#[derive(Deserialize)]
struct Candidate {
    content: Option<CandidateContent>,
}

#[derive(Deserialize)]
struct CandidateContent {
    #[serde(default)]
    parts: Vec<CandidatePart>,
}

#[derive(Deserialize)]
struct CandidatePart {
    text: Option<String>,
}

impl GenerateContentResponse {
    /// The first non-empty text part of the first candidate, if any.
    fn first_text(self) -> Option<String> {
        self.candidates
            .into_iter()
            .next()?
            .content?
            .parts
            .into_iter()
            .find_map(|part| part.text)
            .filter(|text| !text.is_empty())
    }
}

/// Client for requesting data quality audits from the Gemini API.
#[derive(Debug)]
pub struct AuditClient {
    http: reqwest::blocking::Client,
    config: AuditConfig,
}

impl AuditClient {
    /// Create a client from an explicit configuration.
    pub fn new(config: AuditConfig) -> Result<Self> {
        let http = reqwest::blocking::Client::builder()
            .timeout(config.timeout)
            .build()
            .map_err(|err| AuditError::Network(format!("failed to create HTTP client: {err}")))?;
        Ok(Self { http, config })
    }

    /// Serialize the summary into a prompt, query the service, and decode
    /// its JSON answer into an [`AuditReport`].
    pub fn generate_report(&self, summary: &DatasetSummary) -> Result<AuditReport> {
        let prompt = build_prompt(summary);
        let url = format!(
            "{}/v1beta/models/{}:generateContent",
            self.config.api_base, self.config.model
        );
        debug!(model = %self.config.model, prompt_bytes = prompt.len(), "requesting audit");

        let request = GenerateContentRequest {
            contents: vec![Content {
                parts: vec![Part { text: &prompt }],
            }],
            generation_config: GenerationConfig {
                response_mime_type: "application/json",
            },
        };
        let response = self
            .http
            .post(&url)
            .header("x-goog-api-key", &self.config.api_key)
            .json(&request)
            .send()?;

        let status = response.status();
        if !status.is_success() {
            let message = response.text().unwrap_or_default();
            return Err(AuditError::Api {
                status: status.as_u16(),
                message,
            });
        }

        let body: GenerateContentResponse = response
            .json()
            .map_err(|err| AuditError::MalformedResponse(err.to_string()))?;
        let text = body.first_text().ok_or(AuditError::EmptyResponse)?;
        decode_report(&text)
    }
}

/// Decode model output into an [`AuditReport`].
///
/// The output is untrusted: a surrounding markdown code fence is stripped
/// when present, then the remainder must parse as a JSON object. No
/// field-level validation is performed beyond parse success.
pub fn decode_report(text: &str) -> Result<AuditReport> {
    let body = strip_code_fence(text.trim());
    serde_json::from_str(body).map_err(|err| AuditError::MalformedResponse(err.to_string()))
}

fn strip_code_fence(text: &str) -> &str {
    let Some(rest) = text.strip_prefix("```") else {
        return text;
    };
    // Drop an optional language tag on the fence line.
    let rest = match rest.split_once('\n') {
        Some((_, body)) => body,
        None => rest,
    };
    rest.trim_end().strip_suffix("```").unwrap_or(rest).trim()
}

//! Wire types for the Error Translator API

use serde::{Deserialize, Serialize};

/// Maximum number of characters of the submitted error echoed back
/// in `original_error`. Longer input is truncated, never rejected.
pub const ORIGINAL_ERROR_MAX_CHARS: usize = 100;

/// Request body for `/api/translate`
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TranslateRequest {
    pub error_message: String,
    /// Accepted but not consulted by matching (reserved for language-filtered
    /// lookup later)
    #[serde(default = "default_language")]
    pub language: String,
}

fn default_language() -> String {
    "auto".to_string()
}

/// A translated error: explanation, fix, confidence and detected language.
///
/// Serialized field names are capitalized on the wire except
/// `original_error`, which the API layer attaches per request.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TranslationResult {
    #[serde(rename = "Explanation")]
    pub explanation: String,
    #[serde(rename = "Fix")]
    pub fix: String,
    #[serde(rename = "Confidence")]
    pub confidence: f64,
    #[serde(rename = "Language")]
    pub language: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub original_error: Option<String>,
}

impl TranslationResult {
    /// Attach the first [`ORIGINAL_ERROR_MAX_CHARS`] characters of the
    /// submitted message.
    pub fn with_original_error(mut self, error_message: &str) -> Self {
        self.original_error = Some(
            error_message
                .chars()
                .take(ORIGINAL_ERROR_MAX_CHARS)
                .collect(),
        );
        self
    }
}

/// Response body for the health check
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct HealthResponse {
    pub message: String,
}

/// Response body for `/api/stats`
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct StatsResponse {
    pub total_patterns: usize,
    pub status: String,
}

/// Body of an HTTP 500, carrying the failure's textual description
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ErrorDetail {
    pub detail: String,
}

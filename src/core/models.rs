//! Core data models for translation comparison

use serde::{Deserialize, Serialize};
use std::fmt;

use crate::core::errors::ErrorKind;

/// API name reported when the family was never determined
pub const UNKNOWN_API: &str = "Unknown";

/// Supported translation API families
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ApiProvider {
    /// MyMemory: query-parameter GET API (`q` + `langpair`)
    MyMemory,
    /// Lingva Translate: path-segment GET API
    Lingva,
}

impl ApiProvider {
    /// Detect the API family from an endpoint URL
    pub fn detect(endpoint: &str) -> Option<Self> {
        let url = endpoint.to_lowercase();
        if url.contains("mymemory") {
            return Some(ApiProvider::MyMemory);
        }
        if url.contains("lingva") {
            return Some(ApiProvider::Lingva);
        }
        None
    }

    /// Display name carried in results
    pub fn name(&self) -> &'static str {
        match self {
            ApiProvider::MyMemory => "MyMemory",
            ApiProvider::Lingva => "Lingva",
        }
    }
}

impl fmt::Display for ApiProvider {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.name())
    }
}

/// Configured translation endpoint
///
/// The API family is classified once when the descriptor is built, not
/// re-sniffed on every call.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Endpoint {
    /// Base URL of the translation service
    pub url: String,
    /// Resolved API family, `None` when the URL matches no known family
    pub provider: Option<ApiProvider>,
}

impl Endpoint {
    /// Build an endpoint descriptor from a base URL
    pub fn new(url: impl Into<String>) -> Self {
        let url = url.into();
        let provider = ApiProvider::detect(&url);
        Self { url, provider }
    }
}

/// Translation request
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TranslationRequest {
    /// Text to translate
    pub text: String,
    /// Source language code, may be `"auto"`
    pub source_lang: String,
    /// Target language code
    pub target_lang: String,
}

impl TranslationRequest {
    pub fn new(
        text: impl Into<String>,
        source_lang: impl Into<String>,
        target_lang: impl Into<String>,
    ) -> Self {
        Self {
            text: text.into(),
            source_lang: source_lang.into(),
            target_lang: target_lang.into(),
        }
    }
}

/// Successful translation payload
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Translation {
    /// Translated text as returned by the API
    pub translated_text: String,
    /// Source language the translation was made from
    pub source_language: String,
    /// Confidence score in 0-100 the API reports for its own output
    pub confidence: u8,
    /// Display name of the API that produced the translation
    pub api_name: String,
}

/// Failed translation payload
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TranslationFailure {
    /// Failure classification
    pub kind: ErrorKind,
    /// Human-readable failure detail
    pub message: String,
    /// Display name of the API, `"Unknown"` if never determined
    pub api_name: String,
    /// HTTP or API-reported status, when one was observed
    #[serde(skip_serializing_if = "Option::is_none")]
    pub http_status: Option<u16>,
    /// Raw error body, when one was received
    #[serde(skip_serializing_if = "Option::is_none")]
    pub raw_body: Option<String>,
}

impl TranslationFailure {
    /// Build a failure with no status or body attached
    pub fn new(kind: ErrorKind, message: impl Into<String>, api_name: impl Into<String>) -> Self {
        Self {
            kind,
            message: message.into(),
            api_name: api_name.into(),
            http_status: None,
            raw_body: None,
        }
    }

    /// Attach the observed HTTP or API status
    pub fn with_status(mut self, status: u16) -> Self {
        self.http_status = Some(status);
        self
    }

    /// Attach the raw response body
    pub fn with_body(mut self, body: impl Into<String>) -> Self {
        self.raw_body = Some(body.into());
        self
    }
}

/// Outcome of one translation call
///
/// Exactly one variant is populated; failures are data, not propagated
/// errors.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(tag = "status", rename_all = "snake_case")]
pub enum TranslationResult {
    /// The API returned a translation
    Success(Translation),
    /// The call failed before or after reaching the API
    Failure(TranslationFailure),
}

impl TranslationResult {
    /// Build a success result
    pub fn success(
        translated_text: impl Into<String>,
        source_language: impl Into<String>,
        confidence: u8,
        api_name: impl Into<String>,
    ) -> Self {
        TranslationResult::Success(Translation {
            translated_text: translated_text.into(),
            source_language: source_language.into(),
            confidence,
            api_name: api_name.into(),
        })
    }

    /// Whether this is the success variant
    pub fn is_success(&self) -> bool {
        matches!(self, TranslationResult::Success(_))
    }

    /// API name regardless of variant
    pub fn api_name(&self) -> &str {
        match self {
            TranslationResult::Success(translation) => &translation.api_name,
            TranslationResult::Failure(failure) => &failure.api_name,
        }
    }

    /// Success payload, if any
    pub fn as_success(&self) -> Option<&Translation> {
        match self {
            TranslationResult::Success(translation) => Some(translation),
            TranslationResult::Failure(_) => None,
        }
    }

    /// Failure payload, if any
    pub fn as_failure(&self) -> Option<&TranslationFailure> {
        match self {
            TranslationResult::Success(_) => None,
            TranslationResult::Failure(failure) => Some(failure),
        }
    }
}

impl From<TranslationFailure> for TranslationResult {
    fn from(failure: TranslationFailure) -> Self {
        TranslationResult::Failure(failure)
    }
}

/// Derived metrics for a pair of translation results
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ComparisonReport {
    /// Normalized textual closeness in [0, 1]
    pub similarity: f32,
    /// Absolute difference in character counts
    pub length_diff: usize,
    /// Absolute difference in whitespace-split word counts
    pub word_count_diff: usize,
    /// Absolute difference in reported confidence, 0 unless both succeeded
    pub confidence_diff: u8,
    /// Whether both translations succeeded
    pub both_successful: bool,
    /// Display name of the first API
    pub api_a_name: String,
    /// Display name of the second API
    pub api_b_name: String,
    /// Set when at least one call failed
    #[serde(skip_serializing_if = "Option::is_none")]
    pub error_message: Option<String>,
    /// First translated text, carried for display on success
    #[serde(skip_serializing_if = "Option::is_none")]
    pub text_a: Option<String>,
    /// Second translated text, carried for display on success
    #[serde(skip_serializing_if = "Option::is_none")]
    pub text_b: Option<String>,
    /// Source language label of the first translation
    #[serde(skip_serializing_if = "Option::is_none")]
    pub source_language_a: Option<String>,
    /// Source language label of the second translation
    #[serde(skip_serializing_if = "Option::is_none")]
    pub source_language_b: Option<String>,
}

impl ComparisonReport {
    /// Report for a pair where at least one call failed, all metrics zeroed
    pub fn failed(
        api_a_name: impl Into<String>,
        api_b_name: impl Into<String>,
        message: impl Into<String>,
    ) -> Self {
        Self {
            similarity: 0.0,
            length_diff: 0,
            word_count_diff: 0,
            confidence_diff: 0,
            both_successful: false,
            api_a_name: api_a_name.into(),
            api_b_name: api_b_name.into(),
            error_message: Some(message.into()),
            text_a: None,
            text_b: None,
            source_language_a: None,
            source_language_b: None,
        }
    }
}

/// Standalone quality assessment of a single translation result
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct QualityScore {
    /// Overall score in [0, 1], confidence minus length penalties
    pub overall_score: f32,
    /// Confidence reported by the API, 0 on failure
    pub confidence: u8,
    /// Whitespace-split word count of the translated text
    pub word_count: usize,
    /// Character count of the translated text
    pub char_count: usize,
    /// Whether the underlying result was a failure
    pub has_error: bool,
    /// API name, present for successful results
    #[serde(skip_serializing_if = "Option::is_none")]
    pub api_name: Option<String>,
    /// Failure kind, present when `has_error` is set
    #[serde(skip_serializing_if = "Option::is_none")]
    pub error_type: Option<ErrorKind>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_provider_detection() {
        assert_eq!(
            ApiProvider::detect("https://api.mymemory.translated.net/get"),
            Some(ApiProvider::MyMemory)
        );
        assert_eq!(
            ApiProvider::detect("https://lingva.ml/api/v1"),
            Some(ApiProvider::Lingva)
        );
        assert_eq!(
            ApiProvider::detect("https://API.MYMEMORY.translated.net/get"),
            Some(ApiProvider::MyMemory)
        );
        assert_eq!(ApiProvider::detect("https://unknown.example/x"), None);
        assert_eq!(ApiProvider::detect(""), None);
    }

    #[test]
    fn test_endpoint_classified_once() {
        let endpoint = Endpoint::new("https://lingva.ml/api/v1");
        assert_eq!(endpoint.provider, Some(ApiProvider::Lingva));

        let endpoint = Endpoint::new("https://unknown.example/x");
        assert_eq!(endpoint.provider, None);
    }

    #[test]
    fn test_result_accessors() {
        let success = TranslationResult::success("Привет", "en", 100, "MyMemory");
        assert!(success.is_success());
        assert_eq!(success.api_name(), "MyMemory");
        assert_eq!(success.as_success().unwrap().translated_text, "Привет");
        assert!(success.as_failure().is_none());

        let failure: TranslationResult =
            TranslationFailure::new(ErrorKind::ApiError, "HTTP error 500", "Lingva")
                .with_status(500)
                .into();
        assert!(!failure.is_success());
        assert_eq!(failure.api_name(), "Lingva");
        assert_eq!(failure.as_failure().unwrap().http_status, Some(500));
    }

    #[test]
    fn test_result_serialization_is_tagged() {
        let success = TranslationResult::success("Hi", "en", 100, "MyMemory");
        let json = serde_json::to_value(&success).unwrap();
        assert_eq!(json["status"], "success");
        assert_eq!(json["translated_text"], "Hi");

        let failure: TranslationResult =
            TranslationFailure::new(ErrorKind::EmptyText, "text is empty", "Lingva").into();
        let json = serde_json::to_value(&failure).unwrap();
        assert_eq!(json["status"], "failure");
        assert_eq!(json["kind"], "empty_text");
        assert!(json.get("http_status").is_none());
    }
}

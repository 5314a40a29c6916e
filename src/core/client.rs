//! Dual-API translation client
//!
//! Hides the two supported wire formats behind one result contract: every
//! call returns a `TranslationResult`, with all failure modes captured as
//! the `Failure` variant rather than propagated errors.

use std::time::Duration;

use reqwest::header::{ACCEPT, CONTENT_TYPE};
use serde::Deserialize;
use tracing::debug;

use crate::core::errors::{ClientError, ErrorKind};
use crate::core::models::{
    ApiProvider, Endpoint, TranslationFailure, TranslationRequest, TranslationResult, UNKNOWN_API,
};

/// Fixed per-call network timeout
const REQUEST_TIMEOUT: Duration = Duration::from_secs(10);

/// Confidence reported for both APIs; neither exposes a real signal
const FIXED_CONFIDENCE: u8 = 100;

/// HTTP client over the two supported translation API families
#[derive(Debug, Clone)]
pub struct TranslationClient {
    http: reqwest::Client,
}

impl TranslationClient {
    /// Create a client with the fixed request timeout
    pub fn new() -> anyhow::Result<Self> {
        let http = reqwest::Client::builder().timeout(REQUEST_TIMEOUT).build()?;
        Ok(Self { http })
    }

    /// Translate one request against a configured endpoint
    ///
    /// Issues at most one outbound HTTP request; empty and unclassified
    /// endpoints short-circuit without any network call.
    pub async fn translate(
        &self,
        endpoint: &Endpoint,
        request: &TranslationRequest,
    ) -> TranslationResult {
        if endpoint.url.trim().is_empty() {
            return TranslationFailure::new(
                ErrorKind::EmptyEndpoint,
                "API URL is not set",
                UNKNOWN_API,
            )
            .into();
        }

        let Some(provider) = endpoint.provider else {
            return TranslationFailure::new(
                ErrorKind::UnknownApi,
                "cannot determine API type from URL",
                UNKNOWN_API,
            )
            .into();
        };

        debug!("Translating via {} at {}", provider, endpoint.url);

        let outcome = match provider {
            ApiProvider::MyMemory => self.translate_mymemory(&endpoint.url, request).await,
            ApiProvider::Lingva => self.translate_lingva(&endpoint.url, request).await,
        };

        outcome.unwrap_or_else(|err| failure_from(err, provider))
    }

    /// MyMemory: GET with `q` and a combined `langpair` query parameter
    async fn translate_mymemory(
        &self,
        url: &str,
        request: &TranslationRequest,
    ) -> Result<TranslationResult, ClientError> {
        let api_name = ApiProvider::MyMemory.name();
        let langpair = format!("{}|{}", request.source_lang, request.target_lang);

        let response = self
            .http
            .get(url)
            .header(ACCEPT, "application/json")
            .header(CONTENT_TYPE, "application/json")
            .query(&[("q", request.text.as_str()), ("langpair", langpair.as_str())])
            .send()
            .await?;

        let status = response.status();
        let body = response.text().await?;

        if !status.is_success() {
            return Ok(TranslationFailure::new(
                ErrorKind::ApiError,
                format!("HTTP error {}", status.as_u16()),
                api_name,
            )
            .with_status(status.as_u16())
            .with_body(body)
            .into());
        }

        let parsed: MyMemoryResponse = serde_json::from_str(&body)?;

        if parsed.response_status != Some(200) {
            let details = parsed
                .response_details
                .unwrap_or_else(|| "Unknown error".to_string());
            let nested_status = parsed
                .response_status
                .and_then(|status| u16::try_from(status).ok())
                .unwrap_or(500);
            return Ok(TranslationFailure::new(
                ErrorKind::ApiError,
                format!("MyMemory API error: {details}"),
                api_name,
            )
            .with_status(nested_status)
            .with_body(details)
            .into());
        }

        // MyMemory does not report a detected source language
        Ok(TranslationResult::success(
            parsed.response_data.translated_text,
            request.source_lang.clone(),
            FIXED_CONFIDENCE,
            api_name,
        ))
    }

    /// Lingva: GET with the text percent-encoded into the URL path
    async fn translate_lingva(
        &self,
        url: &str,
        request: &TranslationRequest,
    ) -> Result<TranslationResult, ClientError> {
        let api_name = ApiProvider::Lingva.name();

        let text = request.text.trim();
        if text.is_empty() {
            return Ok(
                TranslationFailure::new(ErrorKind::EmptyText, "text is empty", api_name).into(),
            );
        }

        let target = format!(
            "{}/{}/{}/{}",
            url.trim_end_matches('/'),
            request.source_lang,
            request.target_lang,
            urlencoding::encode(text),
        );

        let response = self
            .http
            .get(&target)
            .header(ACCEPT, "application/json")
            .header(CONTENT_TYPE, "application/json")
            .send()
            .await?;

        let status = response.status();
        let body = response.text().await?;

        if !status.is_success() {
            return Ok(TranslationFailure::new(
                ErrorKind::ApiError,
                format!("Lingva returned status {}", status.as_u16()),
                api_name,
            )
            .with_status(status.as_u16())
            .with_body(body)
            .into());
        }

        let parsed: LingvaResponse = match serde_json::from_str(&body) {
            Ok(parsed) => parsed,
            Err(_) => {
                return Ok(TranslationFailure::new(
                    ErrorKind::InvalidJson,
                    "malformed JSON in response",
                    api_name,
                )
                .into())
            }
        };

        Ok(TranslationResult::success(
            parsed.translation,
            request.source_lang.clone(),
            FIXED_CONFIDENCE,
            api_name,
        ))
    }
}

/// Map an internal fault to `Failure` data once the family is known
fn failure_from(err: ClientError, provider: ApiProvider) -> TranslationResult {
    let (kind, message) = match err {
        ClientError::Transport(err) => (ErrorKind::RequestFailed, err.to_string()),
        ClientError::Json(err) => (ErrorKind::UnexpectedError, err.to_string()),
    };
    TranslationFailure::new(kind, message, provider.name()).into()
}

/// MyMemory response body
#[derive(Debug, Deserialize)]
struct MyMemoryResponse {
    /// Nested status, 200 on success
    #[serde(rename = "responseStatus")]
    response_status: Option<i64>,
    /// Translation payload
    #[serde(rename = "responseData", default)]
    response_data: MyMemoryData,
    /// Error detail reported alongside non-200 nested statuses
    #[serde(rename = "responseDetails")]
    response_details: Option<String>,
}

/// MyMemory translation payload
#[derive(Debug, Default, Deserialize)]
struct MyMemoryData {
    /// Translated text
    #[serde(rename = "translatedText", default)]
    translated_text: String,
}

/// Lingva response body
#[derive(Debug, Deserialize)]
struct LingvaResponse {
    /// Translated text
    #[serde(default)]
    translation: String,
}

//! Error taxonomy for translation operations

use serde::{Deserialize, Serialize};
use std::fmt;
use thiserror::Error;

/// Failure kinds surfaced to callers as data inside `Failure` results
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ErrorKind {
    /// No endpoint URL configured
    EmptyEndpoint,
    /// Input text empty after trimming
    EmptyText,
    /// Endpoint matches no known API family
    UnknownApi,
    /// Non-2xx HTTP response or API-reported failure status
    ApiError,
    /// Transport-level failure (connection refused, timeout, DNS)
    RequestFailed,
    /// Malformed JSON in the response body
    InvalidJson,
    /// Catch-all for anything else
    UnexpectedError,
}

impl fmt::Display for ErrorKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            ErrorKind::EmptyEndpoint => "empty_endpoint",
            ErrorKind::EmptyText => "empty_text",
            ErrorKind::UnknownApi => "unknown_api",
            ErrorKind::ApiError => "api_error",
            ErrorKind::RequestFailed => "request_failed",
            ErrorKind::InvalidJson => "invalid_json",
            ErrorKind::UnexpectedError => "unexpected_error",
        };
        write!(f, "{}", name)
    }
}

/// Internal client faults
///
/// Lets the wire helpers use `?`; the client maps these to `Failure` data at
/// its boundary, so none of them escape `translate` as a Rust error.
#[derive(Error, Debug)]
pub(crate) enum ClientError {
    /// Transport failure from the HTTP stack
    #[error("request failed: {0}")]
    Transport(#[from] reqwest::Error),

    /// Response body did not parse as the expected JSON shape
    #[error("invalid JSON: {0}")]
    Json(#[from] serde_json::Error),
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_kind_display() {
        assert_eq!(ErrorKind::EmptyEndpoint.to_string(), "empty_endpoint");
        assert_eq!(ErrorKind::ApiError.to_string(), "api_error");
        assert_eq!(ErrorKind::UnexpectedError.to_string(), "unexpected_error");
    }

    #[test]
    fn test_error_kind_serde_matches_display() {
        for kind in [
            ErrorKind::EmptyEndpoint,
            ErrorKind::EmptyText,
            ErrorKind::UnknownApi,
            ErrorKind::ApiError,
            ErrorKind::RequestFailed,
            ErrorKind::InvalidJson,
            ErrorKind::UnexpectedError,
        ] {
            let json = serde_json::to_value(kind).unwrap();
            assert_eq!(json, serde_json::Value::String(kind.to_string()));
        }
    }
}

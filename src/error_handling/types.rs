//! Error type definitions.
//!
//! This module defines the error types used throughout the application.

use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use axum::Json;
use log::SetLoggerError;
use reqwest::Error as ReqwestError;
use thiserror::Error;

/// Error types for initialization failures.
#[derive(Error, Debug)]
#[allow(clippy::enum_variant_names)] // All variants end with "Error" by convention
pub enum InitializationError {
    /// Error initializing the logger.
    #[error("Logger initialization error: {0}")]
    LoggerError(#[from] SetLoggerError),

    /// Error initializing the HTTP client.
    #[error("HTTP client initialization error: {0}")]
    HttpClientError(#[from] ReqwestError),
}

/// Failure of one refresh cycle.
///
/// Never leaves the refresher: it is logged and the current snapshot is kept.
#[derive(Error, Debug)]
pub enum RefreshError {
    /// Transport failure (connect, TLS, timeout).
    #[error("request to upstream failed: {0}")]
    Request(#[source] ReqwestError),

    /// Upstream answered with a non-2xx status.
    #[error("upstream {url} returned {status}")]
    Status {
        url: String,
        status: reqwest::StatusCode,
    },

    /// The response body could not be read.
    #[error("failed to read upstream body: {0}")]
    Body(#[source] ReqwestError),

    /// The body is not a valid ranges document.
    #[error("failed to parse upstream document: {0}")]
    Parse(#[from] serde_json::Error),
}

/// Client-facing query errors.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum QueryError {
    /// `type` was given but is neither `ipv4` nor `ipv6`.
    #[error("Invalid type filter. Use 'ipv4' or 'ipv6'.")]
    InvalidType(String),
}

/// JSON body of an error response
#[derive(Debug, serde::Serialize, serde::Deserialize, PartialEq, Eq)]
pub struct ErrorBody {
    pub error: String,
}

impl IntoResponse for QueryError {
    fn into_response(self) -> Response {
        let status = match self {
            QueryError::InvalidType(_) => StatusCode::BAD_REQUEST,
        };
        let body = ErrorBody {
            error: self.to_string(),
        };
        (status, Json(body)).into_response()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_invalid_type_message_is_literal() {
        let err = QueryError::InvalidType("bogus".to_string());
        assert_eq!(err.to_string(), crate::config::INVALID_TYPE_MESSAGE);
    }

    #[test]
    fn test_invalid_type_response_status() {
        let response = QueryError::InvalidType("IPV4".to_string()).into_response();
        assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    }

    #[test]
    fn test_refresh_parse_error_display() {
        let json_err = serde_json::from_str::<serde_json::Value>("{not json").unwrap_err();
        let err = RefreshError::from(json_err);
        assert!(err
            .to_string()
            .starts_with("failed to parse upstream document:"));
    }

    #[test]
    fn test_refresh_status_error_display() {
        let err = RefreshError::Status {
            url: "http://example.test/ip-ranges.json".to_string(),
            status: reqwest::StatusCode::SERVICE_UNAVAILABLE,
        };
        let msg = err.to_string();
        assert!(msg.contains("http://example.test/ip-ranges.json"));
        assert!(msg.contains("503"));
    }
}

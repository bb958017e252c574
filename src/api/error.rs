//! Error types for the HTTP client.

use thiserror::Error;

/// Longest response excerpt kept in a decode error.
const SNIPPET_LEN: usize = 120;

/// Errors that can occur while talking to the quiz API.
#[derive(Debug, Error)]
pub enum ApiError {
    /// The underlying HTTP client could not be constructed
    #[error("Failed to build HTTP client: {0}")]
    Build(#[source] reqwest::Error),

    /// The target URL could not be parsed
    #[error("Invalid URL '{url}': {reason}")]
    InvalidUrl { url: String, reason: String },

    /// The request body could not be serialized to JSON
    #[error("Failed to encode request body: {0}")]
    Encode(#[source] serde_json::Error),

    /// Connection, TLS, redirect or other transport failure
    #[error("Request to '{url}' failed: {source}")]
    Transport {
        url: String,
        #[source]
        source: reqwest::Error,
    },

    /// The response body could not be read
    #[error("Failed to read response body from '{url}': {source}")]
    Body {
        url: String,
        #[source]
        source: reqwest::Error,
    },

    /// The response body is not valid JSON for the requested type
    #[error("Invalid JSON from '{url}' (status {status}): {source}; body starts with {snippet:?}")]
    Decode {
        url: String,
        status: u16,
        snippet: String,
        #[source]
        source: serde_json::Error,
    },
}

impl ApiError {
    pub(crate) fn decode(url: &str, status: u16, body: &str, source: serde_json::Error) -> Self {
        ApiError::Decode {
            url: url.to_string(),
            status,
            snippet: body.chars().take(SNIPPET_LEN).collect(),
            source,
        }
    }

    /// Short machine-readable tag, used as a log field.
    pub fn kind(&self) -> &'static str {
        match self {
            ApiError::Build(_) => "build_error",
            ApiError::InvalidUrl { .. } => "invalid_url",
            ApiError::Encode(_) => "encode_error",
            ApiError::Transport { .. } => "transport_error",
            ApiError::Body { .. } => "body_error",
            ApiError::Decode { .. } => "decode_error",
        }
    }
}

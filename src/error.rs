//! Error types for the wlps client
//!
//! Every fallible public API returns `Result<T, Error>`. Data-integrity
//! problems found while paginating are not errors; see
//! [`crate::pagination::IntegrityFault`].

use thiserror::Error;

/// The main error type for the wlps client
#[derive(Error, Debug)]
pub enum Error {
    // ============================================================================
    // Configuration Errors
    // ============================================================================
    #[error("Configuration error: {message}")]
    Config { message: String },

    #[error("Failed to parse YAML: {0}")]
    YamlParse(#[from] serde_yaml::Error),

    #[error("Failed to parse JSON: {0}")]
    JsonParse(#[from] serde_json::Error),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    // ============================================================================
    // Transport Errors
    // ============================================================================
    #[error("HTTP request failed: {0}")]
    Transport(#[from] reqwest::Error),

    #[error("HTTP {status}: {body}")]
    HttpStatus { status: u16, body: String },

    #[error("Request timeout after {timeout_ms}ms")]
    Timeout { timeout_ms: u64 },

    #[error("Invalid URL: {0}")]
    InvalidUrl(#[from] url::ParseError),

    // ============================================================================
    // Response Errors
    // ============================================================================
    #[error("Malformed response from {url}: {message}")]
    MalformedResponse { url: String, message: String },

    #[error("Endpoint '{key}' not found in endpoint map")]
    UnknownEndpoint { key: String },
}

impl Error {
    /// Create a config error
    pub fn config(message: impl Into<String>) -> Self {
        Self::Config {
            message: message.into(),
        }
    }

    /// Create an HTTP status error
    pub fn http_status(status: u16, body: impl Into<String>) -> Self {
        Self::HttpStatus {
            status,
            body: body.into(),
        }
    }

    /// Create a malformed response error
    pub fn malformed(url: impl ToString, message: impl Into<String>) -> Self {
        Self::MalformedResponse {
            url: url.to_string(),
            message: message.into(),
        }
    }

    /// Create an unknown endpoint error
    pub fn unknown_endpoint(key: impl Into<String>) -> Self {
        Self::UnknownEndpoint { key: key.into() }
    }

    /// Check if this error came from the network layer rather than the payload
    pub fn is_transport(&self) -> bool {
        matches!(
            self,
            Error::Transport(_) | Error::HttpStatus { .. } | Error::Timeout { .. }
        )
    }
}

/// Result type alias for the wlps client
pub type Result<T> = std::result::Result<T, Error>;

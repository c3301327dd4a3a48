//! Typed error enum for the price crate.

use thiserror::Error;

/// Errors from price API operations.
#[derive(Debug, Error)]
pub enum PriceError {
    #[error("HTTP request failed: {0}")]
    HttpRequest(#[from] reqwest::Error),
    #[error("HTTP status {code}: {body}")]
    HttpStatus { code: u16, body: String },
    #[error("JSON parse error in {context}: {source}")]
    JsonParse {
        context: String,
        #[source]
        source: serde_json::Error,
    },
    #[error("asset missing from price response: {0}")]
    MissingAsset(String),
    #[error("client initialization failed: {0}")]
    ClientInit(String),
}

impl PriceError {
    /// Whether the next scheduled poll may succeed where this one failed.
    #[must_use]
    pub fn is_transient(&self) -> bool {
        match self {
            Self::HttpRequest(_) => true,
            Self::HttpStatus { code, .. } => matches!(code, 429 | 500 | 502 | 503 | 504),
            Self::JsonParse { .. } | Self::MissingAsset(_) | Self::ClientInit(_) => false,
        }
    }
}

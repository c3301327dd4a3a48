//! Typed error enum for the feed client.

use thiserror::Error;

/// Why a story fetch produced no usable page.
#[derive(Debug, Error)]
pub enum FeedError {
    #[error("HTTP request failed: {0}")]
    Transport(#[from] reqwest::Error),
    #[error("HTTP status {code}: {message}")]
    HttpStatus { code: u16, message: String },
    #[error("malformed payload: {0}")]
    MalformedPayload(String),
    #[error("invalid URL: {0}")]
    InvalidUrl(String),
    #[error("client initialization failed: {0}")]
    ClientInit(String),
}

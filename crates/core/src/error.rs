use std::result::Result as StdResult;

use thiserror::Error;

/// Errors raised while constructing or validating domain values.
#[derive(Error, Debug)]
pub enum CoreError {
    #[error("Invalid input: {0}")]
    InvalidInput(String),

    #[error("Invalid record {entity} {id}: {reason}")]
    InvalidRecord {
        entity: &'static str,
        id: u32,
        reason: String,
    },

    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),
}

pub type Result<T> = StdResult<T, CoreError>;

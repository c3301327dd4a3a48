//! Typed error enum for the storage layer.

use thiserror::Error;
use welf_core::CoreError;

/// Storage-layer error with variants covering every expected failure mode.
#[derive(Debug, Error)]
pub enum StorageError {
    /// Fixture data could not be deserialized into domain types.
    #[error("data corruption: {context}")]
    DataCorruption {
        context: String,
        #[source]
        source: Box<dyn std::error::Error + Send + Sync>,
    },

    /// A record parsed but violates a domain invariant.
    #[error("invalid record: {0}")]
    InvalidRecord(#[from] CoreError),

    /// Two records of the same kind share an identifier.
    #[error("duplicate {entity} id {id}")]
    DuplicateId { entity: &'static str, id: u32 },

    /// The backing store cannot serve reads right now.
    #[error("store unavailable: {0}")]
    Unavailable(String),
}

impl StorageError {
    /// Whether a later read may succeed.
    pub fn is_transient(&self) -> bool {
        matches!(self, Self::Unavailable(_))
    }

    pub(crate) fn corrupt(context: &str, err: serde_json::Error) -> Self {
        Self::DataCorruption { context: context.to_owned(), source: Box::new(err) }
    }
}

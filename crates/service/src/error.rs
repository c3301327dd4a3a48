//! Typed error enum for the service layer.
//!
//! Lets handlers tell a caller mistake from a backend failure without
//! downcasting.

use thiserror::Error;
use welf_core::CoreError;
use welf_storage::StorageError;

/// Service-layer error unifying storage failures and rejected input.
#[derive(Debug, Error)]
pub enum ServiceError {
    /// Store read failed (corrupt fixture, unavailable backend).
    #[error("storage: {0}")]
    Storage(#[from] StorageError),

    /// Caller provided invalid input (zero page size, bad radius).
    #[error("invalid input: {0}")]
    InvalidInput(String),
}

impl ServiceError {
    /// Whether this error is likely transient (worth retrying).
    pub fn is_transient(&self) -> bool {
        match self {
            Self::Storage(e) => e.is_transient(),
            Self::InvalidInput(_) => false,
        }
    }

    pub fn is_invalid_input(&self) -> bool {
        matches!(self, Self::InvalidInput(_))
    }
}

impl From<CoreError> for ServiceError {
    fn from(err: CoreError) -> Self {
        match err {
            CoreError::InvalidInput(msg) => Self::InvalidInput(msg),
            other => Self::Storage(StorageError::InvalidRecord(other)),
        }
    }
}

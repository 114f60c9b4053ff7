//! Domain-level error types.

use thiserror::Error;

/// Domain errors - business logic failures.
#[derive(Debug, Error)]
pub enum DomainError {
    #[error("Entity not found: {entity_type} with id {id}")]
    NotFound { entity_type: &'static str, id: String },

    #[error("Validation failed: {0}")]
    Validation(String),

    #[error("Storage unavailable: {0}")]
    StorageUnavailable(String),

    #[error("Invalid state: {0}")]
    InvalidState(String),

    #[error("Internal error: {0}")]
    Internal(String),
}

impl DomainError {
    pub fn post_not_found(id: impl Into<String>) -> Self {
        Self::NotFound {
            entity_type: "Post",
            id: id.into(),
        }
    }
}

/// Repository-level errors for the post document.
#[derive(Debug, Error)]
pub enum RepoError {
    #[error("Failed to read document: {0}")]
    Read(String),

    #[error("Failed to decode document: {0}")]
    Decode(String),

    #[error("Failed to write document: {0}")]
    Write(String),
}

/// Image storage errors.
#[derive(Debug, Error)]
pub enum AssetError {
    #[error("Image path outside the asset root: {0}")]
    InvalidPath(String),

    #[error("Image storage I/O failed: {0}")]
    Io(String),
}

impl From<RepoError> for DomainError {
    fn from(err: RepoError) -> Self {
        match err {
            RepoError::Read(_) | RepoError::Decode(_) => {
                DomainError::StorageUnavailable(err.to_string())
            }
            RepoError::Write(_) => DomainError::Internal(err.to_string()),
        }
    }
}

impl From<AssetError> for DomainError {
    fn from(err: AssetError) -> Self {
        match err {
            AssetError::InvalidPath(_) => DomainError::Validation(err.to_string()),
            AssetError::Io(_) => DomainError::Internal(err.to_string()),
        }
    }
}

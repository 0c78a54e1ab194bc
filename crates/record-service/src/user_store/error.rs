//! Error types for the user store.

use entity_store::StoreError;
use thiserror::Error;

/// Errors that can occur during user operations.
#[derive(Debug, Error)]
pub enum UserError {
    /// The requested user was not found.
    #[error("User not found: {0}")]
    NotFound(String),

    /// The user carried no id; users must be registered under a
    /// caller-supplied id.
    #[error("User has no id")]
    MissingId,

    /// An error occurred while communicating with the store task.
    #[error("Store communication error: {0}")]
    StoreCommunicationError(String),
}

impl From<StoreError> for UserError {
    fn from(e: StoreError) -> Self {
        match e {
            StoreError::NotFound(id) => UserError::NotFound(id),
            StoreError::MissingId => UserError::MissingId,
            other => UserError::StoreCommunicationError(other.to_string()),
        }
    }
}

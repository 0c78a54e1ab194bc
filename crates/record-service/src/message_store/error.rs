//! Error types for the message store.

use entity_store::StoreError;
use thiserror::Error;

/// Errors that can occur during message operations.
#[derive(Debug, Error)]
pub enum MessageError {
    /// The requested message was not found.
    #[error("Message not found: {0}")]
    NotFound(String),

    /// The message carried no id where one was required.
    #[error("Message has no id")]
    MissingId,

    /// An error occurred while communicating with the store task.
    #[error("Store communication error: {0}")]
    StoreCommunicationError(String),
}

impl From<StoreError> for MessageError {
    fn from(e: StoreError) -> Self {
        match e {
            StoreError::NotFound(id) => MessageError::NotFound(id),
            StoreError::MissingId => MessageError::MissingId,
            other => MessageError::StoreCommunicationError(other.to_string()),
        }
    }
}

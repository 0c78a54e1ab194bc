//! # Message Client
//!
//! Provides a high-level API for interacting with the message store.
//! It wraps a `StoreClient<Message>` and exposes domain-specific methods.

use crate::message_store::MessageError;
use crate::model::{Message, MessagePatch};
use entity_store::{EntityClient, StoreClient, StoreError};
use async_trait::async_trait;
use tracing::{debug, instrument};

/// Client for interacting with the message store task.
#[derive(Clone)]
pub struct MessageClient {
    inner: StoreClient<Message>,
}

impl MessageClient {
    pub fn new(inner: StoreClient<Message>) -> Self {
        Self { inner }
    }
}

#[async_trait]
impl EntityClient<Message> for MessageClient {
    type Error = MessageError;

    fn inner(&self) -> &StoreClient<Message> {
        &self.inner
    }

    fn map_error(e: StoreError) -> Self::Error {
        e.into()
    }
}

impl MessageClient {
    /// Stores a message, assigning a fresh id when it has none, and returns
    /// it with its final id.
    #[instrument(skip(self))]
    pub async fn create(&self, message: Message) -> Result<Message, MessageError> {
        debug!("Sending request");
        self.inner.insert(message).await.map_err(Into::into)
    }

    /// Full-record replace at the message's own id. No existence check: an
    /// unknown id creates the entry.
    #[instrument(skip(self))]
    pub async fn modify(&self, message: Message) -> Result<Message, MessageError> {
        debug!("Sending request");
        self.inner.replace(message).await.map_err(Into::into)
    }

    /// Updates only the text of the message at `id`, preserving the summary.
    /// Fails with [`MessageError::NotFound`] if the id has no entry.
    #[instrument(skip(self))]
    pub async fn update_text(
        &self,
        id: i64,
        text: impl Into<String> + std::fmt::Debug + Send,
    ) -> Result<Message, MessageError> {
        debug!("Sending request");
        let patch = MessagePatch {
            text: Some(text.into()),
        };
        self.inner.partial_update(id, patch).await.map_err(Into::into)
    }
}

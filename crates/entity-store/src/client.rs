//! # Generic Client
//!
//! This module defines the generic client for communicating with a store
//! task.

use crate::entity::StoreEntity;
use crate::error::StoreError;
use crate::message::StoreRequest;
use tokio::sync::{mpsc, oneshot};

/// A type-safe handle for interacting with an
/// [`EntityStore`](crate::actor::EntityStore).
///
/// * **Cloneable** — holds only a sender, so cloning is inexpensive; hand a
///   clone to every request handler.
/// * **Async API** — each method resolves to `Result<…, StoreError>`.
/// * **Generic** — works with any type implementing
///   [`StoreEntity`](crate::entity::StoreEntity).
#[derive(Clone)]
pub struct StoreClient<T: StoreEntity> {
    sender: mpsc::Sender<StoreRequest<T>>,
}

impl<T: StoreEntity> StoreClient<T> {
    pub fn new(sender: mpsc::Sender<StoreRequest<T>>) -> Self {
        Self { sender }
    }

    /// Returns a snapshot of every live entity, in unspecified order.
    pub async fn list(&self) -> Result<Vec<T>, StoreError> {
        let (respond_to, response) = oneshot::channel();
        self.sender
            .send(StoreRequest::List { respond_to })
            .await
            .map_err(|_| StoreError::StoreClosed)?;
        response.await.map_err(|_| StoreError::StoreDropped)?
    }

    /// Stores the entity, assigning a fresh id when it has none, and returns
    /// it with its final id. An entity arriving with an id is stored under
    /// that id, overwriting any existing entry.
    pub async fn insert(&self, entity: T) -> Result<T, StoreError> {
        let (respond_to, response) = oneshot::channel();
        self.sender
            .send(StoreRequest::Insert { entity, respond_to })
            .await
            .map_err(|_| StoreError::StoreClosed)?;
        response.await.map_err(|_| StoreError::StoreDropped)?
    }

    /// Stores the entity under its own id, overwriting whatever was there and
    /// creating the key if absent.
    pub async fn replace(&self, entity: T) -> Result<T, StoreError> {
        let (respond_to, response) = oneshot::channel();
        self.sender
            .send(StoreRequest::Replace { entity, respond_to })
            .await
            .map_err(|_| StoreError::StoreClosed)?;
        response.await.map_err(|_| StoreError::StoreDropped)?
    }

    /// Applies a field-level patch to the entity at `id` and returns the
    /// updated entity. Fails with [`StoreError::NotFound`] if the id has no
    /// entry.
    pub async fn partial_update(&self, id: T::Id, patch: T::Patch) -> Result<T, StoreError> {
        let (respond_to, response) = oneshot::channel();
        self.sender
            .send(StoreRequest::PartialUpdate {
                id,
                patch,
                respond_to,
            })
            .await
            .map_err(|_| StoreError::StoreClosed)?;
        response.await.map_err(|_| StoreError::StoreDropped)?
    }

    /// Fetches the entity at `id`. Fails with [`StoreError::NotFound`] if
    /// absent.
    pub async fn get(&self, id: T::Id) -> Result<T, StoreError> {
        let (respond_to, response) = oneshot::channel();
        self.sender
            .send(StoreRequest::Get { id, respond_to })
            .await
            .map_err(|_| StoreError::StoreClosed)?;
        response.await.map_err(|_| StoreError::StoreDropped)?
    }

    /// Removes the entity at `id`. Idempotent: deleting an absent key
    /// succeeds.
    pub async fn delete(&self, id: T::Id) -> Result<(), StoreError> {
        let (respond_to, response) = oneshot::channel();
        self.sender
            .send(StoreRequest::Delete { id, respond_to })
            .await
            .map_err(|_| StoreError::StoreClosed)?;
        response.await.map_err(|_| StoreError::StoreDropped)?
    }
}

//! # EntityClient Trait
//!
//! Provides a common interface for kind-specific clients, adding default
//! `get`, `list`, and `delete` methods built on top of a generic
//! [`StoreClient`].

use crate::{StoreClient, StoreEntity, StoreError};
use async_trait::async_trait;

/// Trait for kind-specific clients to inherit the standard keyed operations.
///
/// This trait reduces boilerplate: a typed client (say, `MessageClient`)
/// implements `inner` and `map_error` and gets `get`, `list`, and `delete`
/// for free, each translating [`StoreError`] into the kind's own error type.
#[async_trait]
pub trait EntityClient<T: StoreEntity>: Send + Sync {
    /// The kind-specific error type.
    type Error: Send + Sync;

    /// Access the inner generic client.
    fn inner(&self) -> &StoreClient<T>;

    /// Map store errors to the kind-specific error type.
    fn map_error(e: StoreError) -> Self::Error;

    /// Fetch an entity by id.
    #[tracing::instrument(skip(self))]
    async fn get(&self, id: T::Id) -> Result<T, Self::Error> {
        tracing::debug!("Sending request");
        self.inner().get(id).await.map_err(Self::map_error)
    }

    /// Snapshot of every live entity of this kind.
    #[tracing::instrument(skip(self))]
    async fn list(&self) -> Result<Vec<T>, Self::Error> {
        tracing::debug!("Sending request");
        self.inner().list().await.map_err(Self::map_error)
    }

    /// Delete an entity by id. Absent keys are success.
    #[tracing::instrument(skip(self))]
    async fn delete(&self, id: T::Id) -> Result<(), Self::Error> {
        tracing::debug!("Sending request");
        self.inner().delete(id).await.map_err(Self::map_error)
    }
}

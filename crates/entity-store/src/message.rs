//! # Store Messages
//!
//! This module defines the request types exchanged between a
//! [`StoreClient`](crate::client::StoreClient) and its
//! [`EntityStore`](crate::actor::EntityStore) task.

use crate::entity::StoreEntity;
use crate::error::StoreError;
use tokio::sync::oneshot;

/// Type alias for the one-shot response channel used by the store task.
pub type Response<T> = oneshot::Sender<Result<T, StoreError>>;

/// Request sent to the store task.
///
/// # The CRUD Pattern
/// The variants map directly to the store's keyed operations:
///
/// - **List**: Snapshot of every live entry, order unspecified.
/// - **Insert**: Assigns an id when the entity has none, upserts otherwise.
/// - **Replace**: Full-record upsert at the entity's own id, no existence
///   check.
/// - **PartialUpdate**: In-place field merge at an id; fails if absent.
/// - **Get**: Fetch by id; fails if absent.
/// - **Delete**: Remove by id; absent keys are success.
///
/// # Entity Interaction
/// The enum is generic over `T: StoreEntity` and uses its associated types
/// (`Id`, `Patch`), so a request for one kind cannot be sent to another
/// kind's store.
#[derive(Debug)]
pub enum StoreRequest<T: StoreEntity> {
    List {
        respond_to: Response<Vec<T>>,
    },
    Insert {
        entity: T,
        respond_to: Response<T>,
    },
    Replace {
        entity: T,
        respond_to: Response<T>,
    },
    PartialUpdate {
        id: T::Id,
        patch: T::Patch,
        respond_to: Response<T>,
    },
    Get {
        id: T::Id,
        respond_to: Response<T>,
    },
    Delete {
        id: T::Id,
        respond_to: Response<()>,
    },
}

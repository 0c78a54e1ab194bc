//! # Generic Store Task
//!
//! This module defines [`EntityStore`], the component that owns all entities
//! of one kind and processes every request against them. It is the "server"
//! half of the store: it holds the map, the id generator, and the receiver
//! end of the request channel.

use crate::client::StoreClient;
use crate::entity::StoreEntity;
use crate::error::StoreError;
use crate::id::IdGenerator;
use crate::message::StoreRequest;
use std::collections::HashMap;
use tokio::sync::mpsc;
use tracing::{debug, info, warn};

/// The keyed container owning all entities of one kind.
///
/// # Concurrency Model
/// The store runs as a task that processes [`StoreRequest`]s *sequentially*
/// from its channel. That sequencing is the concurrency design: every
/// operation, including the fetch-apply-write of a partial update, executes
/// as one exclusive critical section over the map, so two concurrent patches
/// on the same id can never lose each other's writes. No `Mutex` or `RwLock`
/// is needed, and no lock is ever held across I/O — each request is O(1)
/// clone-sized work.
///
/// Stores of different kinds are independent tasks and never contend.
///
/// # Usage Pattern
/// 1. **Create**: [`EntityStore::new`] returns the store and its
///    [`StoreClient`].
/// 2. **Run**: spawn [`EntityStore::run`] on the runtime.
/// 3. **Use**: clone the client freely across request handlers.
///
/// # Operations
/// * **List** — clones every live entry into a `Vec`. Because the snapshot
///   is taken between requests, it is a consistent point-in-time view: no
///   entry appears twice and none is observed mid-update.
/// * **Insert** — entities without an id get one from the store's
///   [`IdGenerator`]; entities that already carry an id are stored under it,
///   overwriting any existing entry (upsert).
/// * **Replace** — stores the entity under its own id with no existence
///   check, creating the key if absent. An entity without an id is rejected
///   with [`StoreError::MissingId`].
/// * **PartialUpdate** — mutates the stored entry in place via
///   [`StoreEntity::apply_patch`] and returns the result;
///   [`StoreError::NotFound`] if the id has no entry, leaving the store
///   unchanged.
/// * **Get** — returns a clone of the entry, [`StoreError::NotFound`] if
///   absent.
/// * **Delete** — removes the entry; deleting an absent key is success.
pub struct EntityStore<T: StoreEntity> {
    receiver: mpsc::Receiver<StoreRequest<T>>,
    entries: HashMap<T::Id, T>,
    ids: IdGenerator,
}

impl<T: StoreEntity> EntityStore<T> {
    /// Creates a new `EntityStore` and its associated [`StoreClient`].
    ///
    /// # Arguments
    ///
    /// * `buffer_size` - The capacity of the request channel. When the
    ///   channel is full, client calls wait until there is space.
    pub fn new(buffer_size: usize) -> (Self, StoreClient<T>) {
        let (sender, receiver) = mpsc::channel(buffer_size);
        let store = Self {
            receiver,
            entries: HashMap::new(),
            ids: IdGenerator::new(),
        };
        let client = StoreClient::new(sender);
        (store, client)
    }

    /// Runs the store's event loop, processing requests until every client
    /// has been dropped.
    pub async fn run(mut self) {
        // Short type name for log lines (e.g. "Message" instead of
        // "record_service::model::message::Message").
        let entity_type = std::any::type_name::<T>()
            .split("::")
            .last()
            .unwrap_or("Unknown");
        info!(entity_type, "Store started");

        while let Some(msg) = self.receiver.recv().await {
            match msg {
                StoreRequest::List { respond_to } => {
                    let snapshot: Vec<T> = self.entries.values().cloned().collect();
                    debug!(entity_type, size = snapshot.len(), "List");
                    let _ = respond_to.send(Ok(snapshot));
                }
                StoreRequest::Insert { mut entity, respond_to } => {
                    let id = match entity.id() {
                        Some(id) => id,
                        None => {
                            let id = T::Id::from(self.ids.next());
                            entity.assign_id(id);
                            id
                        }
                    };
                    self.entries.insert(id, entity.clone());
                    info!(entity_type, %id, size = self.entries.len(), "Inserted");
                    let _ = respond_to.send(Ok(entity));
                }
                StoreRequest::Replace { entity, respond_to } => {
                    match entity.id() {
                        Some(id) => {
                            self.entries.insert(id, entity.clone());
                            info!(entity_type, %id, size = self.entries.len(), "Replaced");
                            let _ = respond_to.send(Ok(entity));
                        }
                        None => {
                            warn!(entity_type, "Replace without id");
                            let _ = respond_to.send(Err(StoreError::MissingId));
                        }
                    }
                }
                StoreRequest::PartialUpdate { id, patch, respond_to } => {
                    debug!(entity_type, %id, ?patch, "PartialUpdate");
                    if let Some(entry) = self.entries.get_mut(&id) {
                        if let Err(e) = entry.apply_patch(patch) {
                            warn!(entity_type, %id, error = %e, "Patch failed");
                            let _ = respond_to.send(Err(StoreError::EntityError(Box::new(e))));
                            continue;
                        }
                        info!(entity_type, %id, "Updated");
                        let _ = respond_to.send(Ok(entry.clone()));
                    } else {
                        warn!(entity_type, %id, "Not found");
                        let _ = respond_to.send(Err(StoreError::NotFound(id.to_string())));
                    }
                }
                StoreRequest::Get { id, respond_to } => {
                    match self.entries.get(&id).cloned() {
                        Some(entry) => {
                            debug!(entity_type, %id, "Get");
                            let _ = respond_to.send(Ok(entry));
                        }
                        None => {
                            warn!(entity_type, %id, "Not found");
                            let _ = respond_to.send(Err(StoreError::NotFound(id.to_string())));
                        }
                    }
                }
                StoreRequest::Delete { id, respond_to } => {
                    let removed = self.entries.remove(&id).is_some();
                    // Deleting an absent key is a no-op, not an error.
                    debug!(entity_type, %id, removed, size = self.entries.len(), "Delete");
                    let _ = respond_to.send(Ok(()));
                }
            }
        }

        info!(entity_type, size = self.entries.len(), "Shutdown");
    }
}

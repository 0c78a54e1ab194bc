//! # Entity Store
//!
//! This crate provides the foundational building blocks for concurrent,
//! in-memory keyed storage of typed records. Each record kind gets its own
//! [`EntityStore`] task that owns the map for that kind and processes
//! requests sequentially, giving every operation an exclusive critical
//! section without a single lock.
//!
//! ## Why an owning task instead of a locked map?
//!
//! The classic bug in an in-memory CRUD store is the unsynchronized
//! *fetch-mutate-write*: two request handlers read the same record, each
//! applies its own field change, and the second write silently discards the
//! first (a lost update). Guarding the map with a mutex fixes the torn map
//! but not the lost update unless the whole read-modify-write is one
//! critical section.
//!
//! Here the map is owned by one task and mutated only inside its event loop:
//!
//! - **Sequential processing** within the task makes every operation — get,
//!   insert, replace, patch, delete, snapshot — atomic with respect to every
//!   other, so lost updates are impossible by construction.
//! - **Message passing** means callers never hold a reference into the map;
//!   they only ever see clones, so nothing can mutate a stored entity outside
//!   the store's critical section.
//! - **Independence across kinds**: each kind is its own task, so traffic on
//!   one kind never contends with another.
//! - Every operation is O(1) clone-sized work; the task never waits on I/O
//!   while a request is in flight.
//!
//! ## Layers
//!
//! 1. **Entity Layer** ([`StoreEntity`]) — your record types and their patch
//!    semantics
//! 2. **Runtime Layer** ([`EntityStore`]) — request processing and id
//!    assignment
//! 3. **Interface Layer** ([`StoreClient`], [`EntityClient`]) — type-safe
//!    async access
//!
//! ## Example
//!
//! ```rust
//! use entity_store::{EntityStore, StoreEntity};
//!
//! #[derive(Clone, Debug)]
//! struct Note {
//!     id: Option<i64>,
//!     body: String,
//! }
//!
//! #[derive(Debug)]
//! struct NotePatch {
//!     body: Option<String>,
//! }
//!
//! #[derive(Debug, thiserror::Error)]
//! #[error("note error")]
//! struct NoteError;
//!
//! impl StoreEntity for Note {
//!     type Id = i64;
//!     type Patch = NotePatch;
//!     type Error = NoteError;
//!
//!     fn id(&self) -> Option<i64> { self.id }
//!     fn assign_id(&mut self, id: i64) { self.id = Some(id); }
//!     fn apply_patch(&mut self, patch: NotePatch) -> Result<(), NoteError> {
//!         if let Some(body) = patch.body { self.body = body; }
//!         Ok(())
//!     }
//! }
//!
//! #[tokio::main]
//! async fn main() {
//!     let (store, client) = EntityStore::<Note>::new(10);
//!     tokio::spawn(store.run());
//!
//!     let note = client.insert(Note { id: None, body: "hi".into() }).await.unwrap();
//!     assert_eq!(note.id, Some(1));
//!
//!     let fetched = client.get(1).await.unwrap();
//!     assert_eq!(fetched.body, "hi");
//! }
//! ```
//!
//! ## Id Assignment
//!
//! Each store owns an [`IdGenerator`], an atomic counter producing strictly
//! increasing `i64` ids from 1. Entities inserted without an id receive the
//! next value; entities that arrive with an id keep it (upsert semantics).
//! Concurrent inserts always receive pairwise distinct ids.
//!
//! ## Testing
//!
//! The [`mock`] module provides [`MockStore`](mock::MockStore), an
//! expectation-based stand-in that answers the same requests as a real store
//! task. Use it to unit-test typed client wrappers without spawning tasks.

pub mod actor;
pub mod client;
pub mod client_trait;
pub mod entity;
pub mod error;
pub mod id;
pub mod message;
pub mod mock;
pub mod tracing;

// Re-export core types for convenience
pub use actor::EntityStore;
pub use client::StoreClient;
pub use client_trait::EntityClient;
pub use entity::StoreEntity;
pub use error::StoreError;
pub use id::IdGenerator;
pub use message::{Response, StoreRequest};

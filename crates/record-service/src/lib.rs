//! # Record Service
//!
//! In-memory CRUD for two independent record kinds, built on the generic
//! [`entity_store`] crate.
//!
//! ## Core Components
//!
//! - **[model]**: Pure data structures ([`Message`](model::Message),
//!   [`User`](model::User)) and their patch DTOs.
//! - **[message_store] / [user_store]**: The two store instantiations, each
//!   with its own [`StoreEntity`](entity_store::StoreEntity) impl and error
//!   type.
//! - **[clients]**: Type-safe wrappers ([`MessageClient`](clients::MessageClient),
//!   [`UserClient`](clients::UserClient)) that hide the message passing.
//! - **[lifecycle]**: The [`RecordSystem`](lifecycle::RecordSystem)
//!   composition root that owns both stores.
//!
//! ## The two kinds differ on purpose
//!
//! - Messages get **generated ids**; users are keyed by **caller-supplied
//!   ids**.
//! - A message patch touches only `text`; a user patch merges `name` and
//!   `age`.
//! - Full replace is an upsert (unknown ids create the entry), while partial
//!   update of an unknown id is an explicit not-found error. The asymmetry is
//!   intentional and mirrors the two distinct operations callers rely on.
//!
//! ## Testing
//!
//! See [`entity_store::mock`] for utilities to test the typed clients
//! without spawning store tasks.

pub mod clients;
pub mod lifecycle;
pub mod message_store;
pub mod model;
pub mod user_store;

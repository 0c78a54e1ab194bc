//! # User Store
//!
//! This module instantiates the generic store for the [`User`] record kind.
//!
//! ## Structure
//!
//! - [`entity`] - [`StoreEntity`](entity_store::StoreEntity) implementation
//!   for [`User`]
//! - [`error`] - [`UserError`] type for type-safe error handling
//! - [`new()`] - Factory that creates the store task and its typed client
//!
//! ## Key Behavior
//!
//! - **Caller-supplied ids**: users are registered under the id the caller
//!   provides; the store never generates one for this kind
//! - **Profile merge**: updates touch name and age only, applied atomically
//!   inside the store task (see
//!   [`UserClient::update_profile`](crate::clients::UserClient::update_profile))

pub mod entity;
pub mod error;

pub use error::*;

use crate::clients::UserClient;
use crate::model::User;
use entity_store::EntityStore;

/// Request channel capacity for the user store task.
const CHANNEL_BUFFER: usize = 32;

/// Creates a new user store task and its client.
pub fn new() -> (EntityStore<User>, UserClient) {
    let (store, generic_client) = EntityStore::new(CHANNEL_BUFFER);
    let client = UserClient::new(generic_client);

    (store, client)
}

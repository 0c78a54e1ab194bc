//! # Message Store
//!
//! This module instantiates the generic store for the [`Message`] record
//! kind.
//!
//! ## Structure
//!
//! - [`entity`] - [`StoreEntity`](entity_store::StoreEntity) implementation
//!   for [`Message`]
//! - [`error`] - [`MessageError`] type for type-safe error handling
//! - [`new()`] - Factory that creates the store task and its typed client
//!
//! ## Key Behavior
//!
//! - **Generated ids**: messages inserted without an id receive the next
//!   strictly increasing id, starting at 1
//! - **Full replace is an upsert**: replacing at an unknown id creates the
//!   entry rather than failing
//! - **Patch covers text only**: see
//!   [`MessageClient::update_text`](crate::clients::MessageClient::update_text)
//!
//! ## Usage
//!
//! ```rust
//! use record_service::message_store;
//! use record_service::model::Message;
//!
//! #[tokio::main]
//! async fn main() -> Result<(), Box<dyn std::error::Error>> {
//!     let (store, client) = message_store::new();
//!     tokio::spawn(store.run());
//!
//!     let stored = client.create(Message::new("hi")).await?;
//!     assert_eq!(stored.id, Some(1));
//!     Ok(())
//! }
//! ```

pub mod entity;
pub mod error;

pub use error::*;

use crate::clients::MessageClient;
use crate::model::Message;
use entity_store::EntityStore;

/// Request channel capacity for the message store task.
const CHANNEL_BUFFER: usize = 32;

/// Creates a new message store task and its client.
pub fn new() -> (EntityStore<Message>, MessageClient) {
    let (store, generic_client) = EntityStore::new(CHANNEL_BUFFER);
    let client = MessageClient::new(generic_client);

    (store, client)
}

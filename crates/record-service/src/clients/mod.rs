//! Type-safe wrappers around [`StoreClient`](entity_store::StoreClient).

pub mod message_client;
pub mod user_client;

pub use message_client::*;
pub use user_client::*;

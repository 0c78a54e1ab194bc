//! Pure data structures (DTOs) implementing the
//! [`StoreEntity`](entity_store::StoreEntity) trait.

pub mod message;
pub mod user;

pub use message::*;
pub use user::*;

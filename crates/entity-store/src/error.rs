//! # Store Errors
//!
//! This module defines the common error types used throughout the store.
//! By centralizing error definitions, we ensure consistent error handling
//! across all stores and clients.

/// Errors that a store operation can return.
///
/// Every fallible operation surfaces its failure explicitly; a missing key is
/// never a panic or a silent null.
#[derive(Debug, thiserror::Error)]
pub enum StoreError {
    /// The operation addressed an id with no live entry.
    #[error("Entry not found: {0}")]
    NotFound(String),
    /// A replace was requested for an entity that carries no id.
    #[error("Entity has no id")]
    MissingId,
    /// The store task has shut down and no longer accepts requests.
    #[error("Store closed")]
    StoreClosed,
    /// The store task dropped the response channel mid-request.
    #[error("Store dropped response channel")]
    StoreDropped,
    /// An entity raised an error while applying a patch.
    #[error("Entity error: {0}")]
    EntityError(Box<dyn std::error::Error + Send + Sync>),
}

//! # StoreEntity Trait
//!
//! The `StoreEntity` trait is the contract every record kind (Message, User,
//! …) must implement to be managed by the generic [`EntityStore`]. It
//! specifies associated types for ids, patch payloads, and errors, plus the
//! three hooks the store needs: reading the id, assigning a freshly generated
//! id, and applying a partial update in place.
//!
//! # Architecture Note
//! By defining a contract that all our record types must satisfy, we write the
//! `EntityStore` logic *once* and reuse it for every kind. Associated types
//! enforce type safety: a `Message` store only accepts a `MessagePatch`, and
//! the compiler rejects a `UserPatch` outright.
//!
//! [`EntityStore`]: crate::actor::EntityStore

use std::fmt::{Debug, Display};
use std::hash::Hash;

/// Trait that any record type must implement to be managed by an
/// [`EntityStore`](crate::actor::EntityStore).
///
/// # Id Lifecycle
/// A freshly constructed entity may carry no id ([`StoreEntity::id`] returns
/// `None`). On insert, the store assigns one via [`StoreEntity::assign_id`]
/// and the id is immutable from then on: no store operation ever calls
/// `assign_id` on an entity that is already keyed.
///
/// # Patching
/// [`StoreEntity::apply_patch`] mutates only the fields the patch names and
/// leaves everything else untouched. The store calls it while holding
/// exclusive access to the entry, so a patch can never observe or clobber a
/// concurrent writer's half-applied state.
pub trait StoreEntity: Clone + Send + Sync + 'static {
    /// The unique identifier for this entity. Must be convertible from `i64`
    /// so the store can key it with generated ids.
    type Id: Eq + Hash + Copy + Send + Sync + Display + Debug + From<i64>;

    /// The partial-update payload (DTO) for this entity. Fields the patch
    /// leaves unset are preserved.
    type Patch: Send + Sync + Debug;

    /// The error type an entity can raise while applying a patch.
    ///
    /// # Design Note: Error Granularity
    /// One error type per entity kind rather than one per operation. The
    /// store boxes it into
    /// [`StoreError::EntityError`](crate::error::StoreError::EntityError),
    /// so clients keep a single error surface per kind.
    type Error: std::error::Error + Send + Sync + 'static;

    /// Returns the entity's id, or `None` if one has not been assigned yet.
    fn id(&self) -> Option<Self::Id>;

    /// Stamps a generated id onto the entity. Called at most once, during
    /// insert of an entity whose id is unset.
    fn assign_id(&mut self, id: Self::Id);

    /// Applies a partial update in place, touching only the fields the patch
    /// carries.
    fn apply_patch(&mut self, patch: Self::Patch) -> Result<(), Self::Error>;
}

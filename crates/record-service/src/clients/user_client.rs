//! # User Client
//!
//! Provides a high-level API for interacting with the user store.
//! It wraps a `StoreClient<User>` and exposes domain-specific methods.

use crate::model::{User, UserPatch};
use crate::user_store::UserError;
use entity_store::{EntityClient, StoreClient, StoreError};
use async_trait::async_trait;
use tracing::{debug, instrument};

/// Client for interacting with the user store task.
#[derive(Clone)]
pub struct UserClient {
    inner: StoreClient<User>,
}

impl UserClient {
    pub fn new(inner: StoreClient<User>) -> Self {
        Self { inner }
    }
}

#[async_trait]
impl EntityClient<User> for UserClient {
    type Error = UserError;

    fn inner(&self) -> &StoreClient<User> {
        &self.inner
    }

    fn map_error(e: StoreError) -> Self::Error {
        e.into()
    }
}

impl UserClient {
    /// Registers a user under the caller-supplied id, overwriting any
    /// existing user with that id. Fails with [`UserError::MissingId`] when
    /// the id is unset.
    #[instrument(skip(self))]
    pub async fn register(&self, user: User) -> Result<User, UserError> {
        debug!("Sending request");
        if user.id.is_none() {
            return Err(UserError::MissingId);
        }
        self.inner.insert(user).await.map_err(Into::into)
    }

    /// Merges `name` and `age` into the user at `id`, leaving every other
    /// field untouched. The merge is applied atomically inside the store
    /// task: two racing profile updates on the same user both take effect.
    /// Fails with [`UserError::NotFound`] if the id has no entry.
    #[instrument(skip(self))]
    pub async fn update_profile(&self, id: i64, patch: UserPatch) -> Result<User, UserError> {
        debug!("Sending request");
        self.inner.partial_update(id, patch).await.map_err(Into::into)
    }
}

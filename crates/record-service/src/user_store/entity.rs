//! [`StoreEntity`] implementation for the [`User`] record kind.

use crate::model::{User, UserPatch};
use crate::user_store::UserError;
use entity_store::StoreEntity;

impl StoreEntity for User {
    type Id = i64;
    type Patch = UserPatch;
    type Error = UserError;

    fn id(&self) -> Option<i64> {
        self.id
    }

    fn assign_id(&mut self, id: i64) {
        self.id = Some(id);
    }

    /// Merges a profile patch into the user.
    ///
    /// # Fields Updated
    /// - `name`: display name
    /// - `age`: age in years
    ///
    /// The id and ip address are never part of an update. The store applies
    /// this merge inside its own critical section, so a name-only patch and
    /// an age-only patch racing on the same user both land.
    fn apply_patch(&mut self, patch: UserPatch) -> Result<(), UserError> {
        if let Some(name) = patch.name {
            self.name = name;
        }
        if let Some(age) = patch.age {
            self.age = age;
        }
        Ok(())
    }
}

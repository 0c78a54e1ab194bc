//! [`StoreEntity`] implementation for the [`Message`] record kind.

use crate::message_store::MessageError;
use crate::model::{Message, MessagePatch};
use entity_store::StoreEntity;

impl StoreEntity for Message {
    type Id = i64;
    type Patch = MessagePatch;
    type Error = MessageError;

    fn id(&self) -> Option<i64> {
        self.id
    }

    fn assign_id(&mut self, id: i64) {
        self.id = Some(id);
    }

    /// Merges a patch into the message.
    ///
    /// # Fields Updated
    /// - `text`: the message body
    ///
    /// The summary is not patchable; changing it requires a full replace.
    fn apply_patch(&mut self, patch: MessagePatch) -> Result<(), MessageError> {
        if let Some(text) = patch.text {
            self.text = text;
        }
        Ok(())
    }
}

use serde::{Deserialize, Serialize};

/// A stored message: free text with an optional summary.
///
/// Implements [`StoreEntity`](entity_store::StoreEntity) (see
/// [`crate::message_store`]), so it can be managed by a generic
/// [`EntityStore`](entity_store::EntityStore).
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Message {
    /// Assigned by the store on first insert and immutable afterwards.
    pub id: Option<i64>,
    pub text: String,
    pub summary: Option<String>,
}

impl Message {
    /// Creates a message without an id; the store assigns one on insert.
    pub fn new(text: impl Into<String>) -> Self {
        Self {
            id: None,
            text: text.into(),
            summary: None,
        }
    }

    pub fn with_summary(mut self, summary: impl Into<String>) -> Self {
        self.summary = Some(summary.into());
        self
    }
}

/// Partial-update payload for a message. Only the text is patchable.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct MessagePatch {
    pub text: Option<String>,
}

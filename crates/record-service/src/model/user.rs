use serde::{Deserialize, Serialize};

/// A registered user.
///
/// Unlike [`Message`](crate::model::Message), user ids are supplied by the
/// caller at registration time and are never generated by the store.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct User {
    /// Caller-supplied; immutable once the user is stored.
    pub id: Option<i64>,
    pub name: String,
    pub age: u32,
    pub ip_address: Option<String>,
}

impl User {
    pub fn new(id: i64, name: impl Into<String>, age: u32) -> Self {
        Self {
            id: Some(id),
            name: name.into(),
            age,
            ip_address: None,
        }
    }

    pub fn with_ip_address(mut self, ip_address: impl Into<String>) -> Self {
        self.ip_address = Some(ip_address.into());
        self
    }
}

/// Partial-update payload for a user. The profile merge covers name and age
/// only; the id and ip address are never touched by an update.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct UserPatch {
    pub name: Option<String>,
    pub age: Option<u32>,
}

use serde::{Deserialize, Serialize};

/// Identifier assigned to a contact at creation, unique within a collection
/// and immutable afterwards.
pub type ContactId = u64;

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Contact {
    pub id: ContactId,
    pub name: String,
    pub phone: String,
    pub email: String,
}

impl Contact {
    pub fn new(id: ContactId, name: String, phone: String, email: String) -> Self {
        Self {
            id,
            name,
            phone,
            email,
        }
    }
}

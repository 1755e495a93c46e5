use crate::model::{Contact, ContactId};

/// Next assignable id: one past the current maximum, or 1 for an empty
/// collection. Recomputed every time rather than kept as a counter, so
/// deleting the highest-id contact makes that id assignable again.
pub fn next_id(contacts: &[Contact]) -> ContactId {
    contacts.iter().map(|c| c.id).max().unwrap_or(0) + 1
}

/// Position of the contact with `id`, if present. Ids are unique, so at most
/// one position matches.
pub fn find_index(contacts: &[Contact], id: ContactId) -> Option<usize> {
    contacts.iter().position(|c| c.id == id)
}

use super::{LoadOutcome, Storage};
use crate::error::Result;
use crate::model::Contact;

/// In-memory storage for testing and development.
/// Persists only for the lifetime of the value.
#[derive(Default)]
pub struct InMemoryStore {
    contacts: Vec<Contact>,
    save_count: usize,
}

impl InMemoryStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Build a store pre-seeded with contacts, as if loaded from disk.
    pub fn with_contacts(contacts: Vec<Contact>) -> Self {
        Self {
            contacts,
            save_count: 0,
        }
    }

    /// What the "persisted" collection currently holds.
    pub fn persisted(&self) -> &[Contact] {
        &self.contacts
    }

    /// How many times `save` has been called. Lets tests assert that
    /// failed operations did not rewrite storage.
    pub fn save_count(&self) -> usize {
        self.save_count
    }
}

impl Storage for InMemoryStore {
    fn load(&self) -> Result<LoadOutcome> {
        Ok(LoadOutcome {
            contacts: self.contacts.clone(),
            skipped: Vec::new(),
        })
    }

    fn save(&mut self, contacts: &[Contact]) -> Result<()> {
        self.contacts = contacts.to_vec();
        self.save_count += 1;
        Ok(())
    }
}

// --- Test Fixtures ---

#[cfg(any(test, feature = "test_utils"))]
pub mod fixtures {
    use super::*;

    pub fn contact(id: u64, name: &str) -> Contact {
        Contact::new(
            id,
            name.to_string(),
            format!("555-{:04}", id),
            format!("{}@example.com", name.to_lowercase()),
        )
    }

    pub fn seeded_store(names: &[&str]) -> InMemoryStore {
        let contacts = names
            .iter()
            .enumerate()
            .map(|(i, name)| contact(i as u64 + 1, name))
            .collect();
        InMemoryStore::with_contacts(contacts)
    }
}

//! # API Facade
//!
//! [`ContactBook`] is the single entry point for all contact operations,
//! regardless of the UI driving it. It owns the in-memory collection and the
//! storage backend: the collection is loaded once at construction, mutated by
//! the command layer, and fully rewritten to storage after every mutating
//! operation, so callers observe durability synchronously.
//!
//! The facade does no business logic of its own (that lives in
//! `commands/*.rs`) and no presentation (it returns structured
//! `Result<CmdResult>` values, never strings for a terminal).
//!
//! ## Generic Over Storage
//!
//! `ContactBook<S: Storage>` is generic over the backend:
//! - Production: `ContactBook<FileStore>`
//! - Testing: `ContactBook<InMemoryStore>`

use crate::commands;
use crate::commands::{CmdMessage, CmdResult, ContactUpdate};
use crate::error::Result;
use crate::model::{Contact, ContactId};
use crate::store::Storage;

pub struct ContactBook<S: Storage> {
    store: S,
    contacts: Vec<Contact>,
}

impl<S: Storage> ContactBook<S> {
    /// Load the collection from `store`. An absent backing resource yields an
    /// empty book. Malformed persisted records are skipped, not fatal; each
    /// skip comes back as a warning message for the UI to render.
    pub fn load(store: S) -> Result<(Self, Vec<CmdMessage>)> {
        let outcome = store.load()?;
        let warnings = outcome
            .skipped
            .iter()
            .map(|s| {
                CmdMessage::warning(format!(
                    "Skipped unreadable record on line {}: {}",
                    s.number, s.detail
                ))
            })
            .collect();

        Ok((
            Self {
                store,
                contacts: outcome.contacts,
            },
            warnings,
        ))
    }

    pub fn add(&mut self, name: String, phone: String, email: String) -> Result<CmdResult> {
        let result = commands::add::run(&mut self.contacts, name, phone, email)?;
        self.persist()?;
        Ok(result)
    }

    pub fn list(&self, sort: Option<commands::list::SortKey>) -> Result<CmdResult> {
        commands::list::run(&self.contacts, sort)
    }

    pub fn edit(&mut self, id: ContactId, update: &ContactUpdate) -> Result<CmdResult> {
        let result = commands::edit::run(&mut self.contacts, id, update)?;
        self.persist()?;
        Ok(result)
    }

    pub fn delete(&mut self, id: ContactId) -> Result<CmdResult> {
        let result = commands::delete::run(&mut self.contacts, id)?;
        self.persist()?;
        Ok(result)
    }

    pub fn search(&self, term: &str) -> Result<CmdResult> {
        commands::search::run(&self.contacts, term)
    }

    /// Look up a contact without going through a command. Used by the menu
    /// to show current values while prompting for an edit.
    pub fn get(&self, id: ContactId) -> Option<&Contact> {
        self.contacts.iter().find(|c| c.id == id)
    }

    pub fn contacts(&self) -> &[Contact] {
        &self.contacts
    }

    fn persist(&mut self) -> Result<()> {
        self.store.save(&self.contacts)
    }
}

pub use crate::commands::list::SortKey;
pub use crate::commands::MessageLevel;

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::CardfileError;
    use crate::store::memory::fixtures::seeded_store;
    use crate::store::memory::InMemoryStore;

    #[test]
    fn add_assigns_id_and_persists() {
        let (mut book, warnings) = ContactBook::load(InMemoryStore::new()).unwrap();
        assert!(warnings.is_empty());

        let result = book
            .add("Ann".into(), "555-1111".into(), "ann@x.com".into())
            .unwrap();
        assert_eq!(result.affected[0].id, 1);

        let listed = book.list(None).unwrap().listed;
        assert_eq!(listed.len(), 1);
        assert_eq!(listed[0].name, "Ann");
        assert_eq!(listed[0].phone, "555-1111");
        assert_eq!(listed[0].email, "ann@x.com");
    }

    #[test]
    fn mutations_rewrite_the_store_reads_do_not() {
        let (mut book, _) = ContactBook::load(seeded_store(&["Ann", "Bob"])).unwrap();

        book.list(None).unwrap();
        book.search("Ann").unwrap();
        assert_eq!(book.store.save_count(), 0);

        book.delete(1).unwrap();
        book.add("Cid".into(), String::new(), String::new()).unwrap();
        assert_eq!(book.store.save_count(), 2);
        assert_eq!(book.store.persisted().len(), 2);
    }

    #[test]
    fn delete_not_found_leaves_storage_untouched() {
        let (mut book, _) = ContactBook::load(seeded_store(&["Ann"])).unwrap();

        let err = book.delete(42).unwrap_err();
        assert!(matches!(err, CardfileError::ContactNotFound(42)));
        assert_eq!(book.contacts().len(), 1);
        assert_eq!(book.store.save_count(), 0);
    }

    #[test]
    fn edit_not_found_persists_nothing() {
        let (mut book, _) = ContactBook::load(seeded_store(&["Ann"])).unwrap();
        let update = ContactUpdate::new(Some("X".into()), None, None);

        assert!(book.edit(9, &update).is_err());
        assert_eq!(book.contacts()[0].name, "Ann");
        assert_eq!(book.store.save_count(), 0);
    }

    #[test]
    fn deleting_the_max_id_makes_it_assignable_again() {
        let (mut book, _) = ContactBook::load(seeded_store(&["A", "B", "C"])).unwrap();

        book.delete(3).unwrap();
        let result = book.add("D".into(), String::new(), String::new()).unwrap();
        assert_eq!(result.affected[0].id, 3);
    }

    #[test]
    fn search_dispatches_over_the_collection() {
        let (book, _) = ContactBook::load(seeded_store(&["Ann", "Bob"])).unwrap();

        assert_eq!(book.search("Ann").unwrap().listed.len(), 1);
        assert!(book.search("zzz").unwrap().listed.is_empty());
    }
}

//! # Storage Layer
//!
//! This module defines the storage abstraction for cardfile. The [`Storage`]
//! trait allows the application to work with different backends.
//!
//! ## Design Rationale
//!
//! Storage is abstracted behind a trait to:
//! - Enable **testing** with `InMemoryStore` (no filesystem needed)
//! - Keep business logic **decoupled** from persistence details
//!
//! Unlike a per-record store, the trait moves the whole collection in one
//! call each way. The data volumes this tool targets (hundreds to low
//! thousands of contacts) make a full read/rewrite per operation the simplest
//! correct model: exactly one process owns the file, every mutation is
//! followed by a complete rewrite, and the last writer wins.
//!
//! ## Implementations
//!
//! - [`fs::FileStore`]: Production file-based storage
//!   - One contact per line, fields joined by `|`
//!   - Saves write to a sibling temp file, then rename into place
//!
//! - [`memory::InMemoryStore`]: In-memory storage for testing
//!   - No persistence
//!   - Fast, isolated test execution
//!
//! ## Storage Format
//!
//! For `FileStore`:
//! ```text
//! 1|Ann Example|555-1111|ann@example.com
//! 2|Bob|555-2222|bob@example.com
//! ```
//!
//! No header line, no escaping. A `|` embedded in a field would corrupt that
//! record on reload; keeping the delimiter out of field values is the
//! caller's job.

use crate::error::Result;
use crate::model::Contact;

pub mod fs;
pub mod memory;

/// A persisted line that could not be decoded into a [`Contact`].
///
/// Loading skips such lines rather than aborting; the skip is reported so
/// the user knows the file holds data the tool is not showing.
#[derive(Debug, Clone)]
pub struct SkippedLine {
    /// 1-based line number in the backing file.
    pub number: usize,
    pub detail: String,
}

/// Result of loading a collection: the decoded contacts plus any lines that
/// had to be skipped.
#[derive(Debug, Default)]
pub struct LoadOutcome {
    pub contacts: Vec<Contact>,
    pub skipped: Vec<SkippedLine>,
}

/// Abstract interface for contact persistence.
///
/// Implementations load and save the collection as a whole; an absent
/// backing resource loads as an empty collection, not an error.
pub trait Storage {
    /// Read the full collection in stored order.
    fn load(&self) -> Result<LoadOutcome>;

    /// Replace the persisted collection with `contacts`, in order.
    fn save(&mut self, contacts: &[Contact]) -> Result<()>;
}

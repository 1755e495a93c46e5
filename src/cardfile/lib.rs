//! # Cardfile Architecture
//!
//! Cardfile is a **UI-agnostic contact book library**. The interactive menu is
//! just one client of the library; nothing from `api.rs` inward knows about
//! terminals, stdout, or exit codes.
//!
//! ## The Layer Stack
//!
//! ```text
//! ┌─────────────────────────────────────────────────────────────┐
//! │  CLI Layer (main.rs + bin-local modules)                    │
//! │  - Parses arguments, runs the menu, prompts, prints tables  │
//! │  - The ONLY place that knows about stdout/stderr/exit codes │
//! └─────────────────────────────────────────────────────────────┘
//!                              │
//!                              ▼
//! ┌─────────────────────────────────────────────────────────────┐
//! │  API Layer (api.rs)                                         │
//! │  - ContactBook<S>: owns the collection and the backend      │
//! │  - Loads once, persists after every mutation                │
//! │  - Returns structured Result types                          │
//! └─────────────────────────────────────────────────────────────┘
//!                              │
//!                              ▼
//! ┌─────────────────────────────────────────────────────────────┐
//! │  Command Layer (commands/*.rs)                              │
//! │  - Pure business logic over the in-memory collection        │
//! │  - No I/O assumptions whatsoever                            │
//! └─────────────────────────────────────────────────────────────┘
//!                              │
//!                              ▼
//! ┌─────────────────────────────────────────────────────────────┐
//! │  Storage Layer (store/)                                     │
//! │  - Abstract Storage trait (whole-collection load/save)      │
//! │  - FileStore (production), InMemoryStore (testing)          │
//! └─────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## The Id System
//!
//! Contacts carry small integer ids assigned at creation and immutable
//! afterwards. The next id is always recomputed as `1 + max(existing)`, never
//! kept as a counter, so it survives deletions; deleting the current maximum
//! makes that id assignable again. That recomputation is the id policy, not
//! an accident.
//!
//! ## Persistence Model
//!
//! The whole collection lives in memory and is rewritten to a pipe-delimited
//! text file after every mutating operation. There is no partial or append
//! write, no locking, and no support for concurrent writers. Writes go to a
//! sibling temp file first and are renamed into place so an interrupted save
//! never leaves a truncated file.
//!
//! ## Testing Strategy
//!
//! 1. **Commands** (`commands/*.rs`): unit tests of the business logic over
//!    plain `Vec<Contact>` values. The lion's share of testing lives here.
//! 2. **Storage** (`store/fs.rs`): round-trip and malformed-input tests
//!    against temp directories.
//! 3. **API** (`api.rs`): dispatch and persistence tests on `InMemoryStore`.
//! 4. **CLI** (`tests/`): `assert_cmd` tests scripting the menu via stdin.
//!
//! ## Module Overview
//!
//! - [`api`]: The `ContactBook` facade—entry point for all operations
//! - [`commands`]: Business logic for each operation
//! - [`store`]: Storage abstraction and implementations
//! - [`model`]: Core data types (`Contact`, `ContactId`)
//! - [`config`]: Configuration management
//! - [`error`]: Error types

pub mod api;
pub mod commands;
pub mod config;
pub mod error;
pub mod model;
pub mod store;

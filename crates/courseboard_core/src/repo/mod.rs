//! Repository layer abstractions and persistence implementations.
//!
//! # Responsibility
//! - Define the store accessor contract the services build on.
//! - Isolate SQLite key-value details from service orchestration.
//!
//! # Invariants
//! - A missing persisted value is a first run: the seeded default is written
//!   back and returned, never surfaced as an error.
//! - Persisted text that fails to parse is surfaced as `RepoError::Corrupt`
//!   instead of being masked or partially loaded.

pub mod store_repo;

//! Core domain logic for Courseboard: per-course notes and time-stamped
//! reminders over a persistent key-value store.
//! This crate is the single source of truth for business invariants.

pub mod db;
pub mod due;
pub mod logging;
pub mod model;
pub mod render;
pub mod repo;
pub mod sched;
pub mod service;

pub use logging::{default_log_level, init_logging, logging_status};
pub use model::course::Course;
pub use model::item::{ItemId, Note, Reminder, StoreItem};
pub use model::store::CourseStore;
pub use render::{Card, CardList};
pub use repo::store_repo::{
    RepoError, RepoResult, SqliteStoreRepository, StoreRepository, StoreSlot,
};
pub use sched::MinuteTicker;
pub use service::note_service::NoteService;
pub use service::reminder_service::ReminderService;

/// Returns the core crate version.
pub fn core_version() -> &'static str {
    env!("CARGO_PKG_VERSION")
}

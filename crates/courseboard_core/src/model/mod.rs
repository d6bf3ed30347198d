//! Domain model for per-course notes and reminders.
//!
//! # Responsibility
//! - Define the canonical data structures used by core business logic.
//! - Keep the two parallel subsystems (notes, reminders) on one shared
//!   store/item shape.
//!
//! # Invariants
//! - Every item is identified by a stable `ItemId`, never reused.
//! - Every known course always maps to a list, possibly empty.

pub mod course;
pub mod item;
pub mod store;

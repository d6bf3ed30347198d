//! Course-keyed item store.
//!
//! # Responsibility
//! - Hold the full course → item-list mapping for one subsystem snapshot.
//! - Provide the append/remove mutations the services build on.
//!
//! # Invariants
//! - Every course in `Course::ALL` maps to a list, possibly empty.
//! - Item order within a list is insertion order and is display-relevant;
//!   removals preserve the relative order of survivors.

use crate::model::course::Course;
use crate::model::item::{ItemId, StoreItem};
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

/// In-memory snapshot of one subsystem's persisted mapping.
///
/// Serializes as a plain `{ "CSF111": [...], ... }` object, the same text
/// layout the store has always been persisted in.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct CourseStore<T> {
    lists: BTreeMap<Course, Vec<T>>,
}

impl<T: StoreItem> CourseStore<T> {
    /// Creates the default store: every known course mapped to an empty list.
    pub fn seeded() -> Self {
        Self {
            lists: Course::ALL.into_iter().map(|c| (c, Vec::new())).collect(),
        }
    }

    /// Restores the every-course-present invariant after deserialization.
    ///
    /// Courses absent from the persisted text are treated like a first run
    /// for that course, not an error.
    pub fn seed_missing_courses(&mut self) {
        for course in Course::ALL {
            self.lists.entry(course).or_default();
        }
    }

    /// Items for `course`, in insertion order.
    pub fn items(&self, course: Course) -> &[T] {
        self.lists.get(&course).map_or(&[], Vec::as_slice)
    }

    /// Appends `item` to the end of the course's list.
    pub fn push(&mut self, course: Course, item: T) {
        self.lists.entry(course).or_default().push(item);
    }

    /// Removes every item whose key equals `id` from the course's list.
    ///
    /// Returns whether anything was removed; a miss is a silent no-op.
    pub fn remove(&mut self, course: Course, id: ItemId) -> bool {
        let Some(list) = self.lists.get_mut(&course) else {
            return false;
        };
        let before = list.len();
        list.retain(|item| item.key() != id);
        list.len() != before
    }

    /// Total item count across all courses.
    pub fn len(&self) -> usize {
        self.lists.values().map(Vec::len).sum()
    }

    /// Whether no course holds any item.
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

impl<T: StoreItem> Default for CourseStore<T> {
    fn default() -> Self {
        Self::seeded()
    }
}

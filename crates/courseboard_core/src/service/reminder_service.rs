//! Reminder use-case service.
//!
//! # Responsibility
//! - Provide the add/remove/list mutator over the reminders store.
//! - Compose a fresh load with card rendering and the due check.
//!
//! # Invariants
//! - Every mutation persists its snapshot before returning.
//! - Removing an absent key is a silent no-op, not an error.
//! - The due check never mutates the store; it only flags rendered cards.

use crate::model::course::Course;
use crate::model::item::{ItemId, Reminder};
use crate::model::store::CourseStore;
use crate::render::{self, CardList};
use crate::repo::store_repo::{RepoResult, StoreRepository, StoreSlot};
use chrono::NaiveDateTime;
use log::info;

/// Use-case service wrapper for the reminders subsystem.
pub struct ReminderService<R: StoreRepository> {
    repo: R,
}

impl<R: StoreRepository> ReminderService<R> {
    /// Creates a service using the provided store repository.
    pub fn new(repo: R) -> Self {
        Self { repo }
    }

    /// Current reminders store snapshot, seeded on first access.
    pub fn store(&self) -> RepoResult<CourseStore<Reminder>> {
        self.repo.load(StoreSlot::Reminders)
    }

    /// Reminders for one course, in insertion order.
    pub fn reminders(&self, course: Course) -> RepoResult<Vec<Reminder>> {
        Ok(self.store()?.items(course).to_vec())
    }

    /// Appends a reminder with a fresh key to the course's list and persists.
    ///
    /// `date` and `time` are stored exactly as entered; malformed values are
    /// accepted here and simply never come due.
    pub fn add_reminder(
        &self,
        course: Course,
        title: impl Into<String>,
        date: impl Into<String>,
        time: impl Into<String>,
    ) -> RepoResult<Reminder> {
        let reminder = Reminder::new(title, date, time);
        let mut store = self.store()?;
        store.push(course, reminder.clone());
        self.repo.save(StoreSlot::Reminders, &store)?;
        info!(
            "event=reminder_add module=service status=ok course={course} key={}",
            reminder.key
        );
        Ok(reminder)
    }

    /// Removes the reminder with `id` from the course's list and persists.
    ///
    /// Returns whether a reminder was actually removed; `Ok(false)` when
    /// nothing matched.
    pub fn remove_reminder(&self, course: Course, id: ItemId) -> RepoResult<bool> {
        let mut store = self.store()?;
        let removed = store.remove(course, id);
        self.repo.save(StoreSlot::Reminders, &store)?;
        info!(
            "event=reminder_remove module=service status=ok course={course} key={id} removed={removed}"
        );
        Ok(removed)
    }

    /// Loads a fresh snapshot and renders the course's reminder cards with
    /// their due flags evaluated against `now`.
    pub fn render_cards(&self, course: Course, now: NaiveDateTime) -> RepoResult<CardList> {
        Ok(render::reminder_cards(&self.store()?, course, now))
    }
}

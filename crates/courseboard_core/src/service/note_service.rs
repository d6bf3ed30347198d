//! Note use-case service.
//!
//! # Responsibility
//! - Provide the add/remove/list mutator over the notes store.
//! - Compose a fresh load with card rendering for display refresh.
//!
//! # Invariants
//! - Every mutation persists its snapshot before returning, so a subsequent
//!   render reads the just-committed state.
//! - Removing an absent key is a silent no-op, not an error.

use crate::model::course::Course;
use crate::model::item::{ItemId, Note};
use crate::model::store::CourseStore;
use crate::render::{self, CardList};
use crate::repo::store_repo::{RepoResult, StoreRepository, StoreSlot};
use log::info;

/// Use-case service wrapper for the notes subsystem.
pub struct NoteService<R: StoreRepository> {
    repo: R,
}

impl<R: StoreRepository> NoteService<R> {
    /// Creates a service using the provided store repository.
    pub fn new(repo: R) -> Self {
        Self { repo }
    }

    /// Current notes store snapshot, seeded on first access.
    pub fn store(&self) -> RepoResult<CourseStore<Note>> {
        self.repo.load(StoreSlot::Notes)
    }

    /// Notes for one course, in insertion order.
    pub fn notes(&self, course: Course) -> RepoResult<Vec<Note>> {
        Ok(self.store()?.items(course).to_vec())
    }

    /// Appends a note with a fresh key to the course's list and persists.
    ///
    /// No duplicate detection and no content validation; the text is taken
    /// verbatim, exactly as the hosting form supplied it.
    pub fn add_note(&self, course: Course, desc: impl Into<String>) -> RepoResult<Note> {
        let note = Note::new(desc);
        let mut store = self.store()?;
        store.push(course, note.clone());
        self.repo.save(StoreSlot::Notes, &store)?;
        info!(
            "event=note_add module=service status=ok course={course} key={}",
            note.key
        );
        Ok(note)
    }

    /// Removes the note with `id` from the course's list and persists.
    ///
    /// Returns whether a note was actually removed; `Ok(false)` when nothing
    /// matched.
    pub fn remove_note(&self, course: Course, id: ItemId) -> RepoResult<bool> {
        let mut store = self.store()?;
        let removed = store.remove(course, id);
        self.repo.save(StoreSlot::Notes, &store)?;
        info!(
            "event=note_remove module=service status=ok course={course} key={id} removed={removed}"
        );
        Ok(removed)
    }

    /// Loads a fresh snapshot and renders the course's note cards.
    pub fn render_cards(&self, course: Course) -> RepoResult<CardList> {
        Ok(render::note_cards(&self.store()?, course))
    }
}

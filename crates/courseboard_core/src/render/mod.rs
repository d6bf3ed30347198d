//! Card projection of a course's store snapshot.
//!
//! # Responsibility
//! - Regenerate the full card list for one course from a store snapshot.
//! - Emit the host page's card markup and map delete clicks back to typed
//!   item keys.
//!
//! # Invariants
//! - Card order follows list (insertion) order; no sorting is applied.
//! - A render replaces the whole card list; stale cards and their delete
//!   wiring are discarded together.
//! - Delete matching is exact string equality on the card's element id.

use crate::model::course::Course;
use crate::model::item::{ItemId, Note, Reminder};
use crate::model::store::CourseStore;
use chrono::NaiveDateTime;

/// One rendered card.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Card {
    /// Key of the backing item.
    pub id: ItemId,
    /// Element id the host page gives the card body; delete clicks report it
    /// back through [`CardList::delete_target`].
    pub dom_id: String,
    /// Reminder title line; `None` for note cards.
    pub title: Option<String>,
    /// Card body text.
    pub body: String,
    /// Whether the backing reminder is due. Always `false` for notes.
    pub due: bool,
}

/// Rendered card list for one course.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CardList {
    pub course: Course,
    pub cards: Vec<Card>,
    delete_class: &'static str,
}

impl CardList {
    /// Maps a clicked delete control's parent element id back to the typed
    /// item key, for handing to the matching remove operation.
    ///
    /// Returns `None` for ids no longer (or never) rendered; deleting those
    /// is a silent no-op upstream anyway.
    pub fn delete_target(&self, dom_id: &str) -> Option<ItemId> {
        self.cards
            .iter()
            .find(|card| card.dom_id == dom_id)
            .map(|card| card.id)
    }

    /// Emits the host page's card markup for this list.
    ///
    /// Due cards carry the `reminder-due` class the host styles against.
    pub fn to_html(&self) -> String {
        let mut html = String::new();
        for card in &self.cards {
            let due_class = if card.due { " reminder-due" } else { "" };
            html.push_str(&format!(
                "<div class=\"noteCard my-2 mx-2 card{due_class}\" style=\"width: 18rem;\">\n"
            ));
            html.push_str(&format!("  <div class=\"card-body\" id=\"{}\">\n", card.dom_id));
            if let Some(title) = &card.title {
                html.push_str(&format!("    <h3 class=\"card-text\">{title}</h3>\n"));
            }
            html.push_str(&format!("    <p class=\"card-text\">{}</p>\n", card.body));
            html.push_str(&format!(
                "    <button class=\"btn btn-secondary {}\">Delete</button>\n",
                self.delete_class
            ));
            html.push_str("  </div>\n</div>\n");
        }
        html
    }
}

/// Renders the note cards for `course` from a store snapshot.
pub fn note_cards(store: &CourseStore<Note>, course: Course) -> CardList {
    let cards = store
        .items(course)
        .iter()
        .map(|note| Card {
            id: note.key,
            dom_id: note.key.to_string(),
            title: None,
            body: note.desc.clone(),
            due: false,
        })
        .collect();

    CardList {
        course,
        cards,
        delete_class: "note-delete",
    }
}

/// Renders the reminder cards for `course`, evaluating due flags against
/// `now` as part of the render.
pub fn reminder_cards(
    store: &CourseStore<Reminder>,
    course: Course,
    now: NaiveDateTime,
) -> CardList {
    let cards = store
        .items(course)
        .iter()
        .map(|reminder| Card {
            id: reminder.key,
            dom_id: reminder.key.to_string(),
            title: Some(reminder.title.clone()),
            body: format!(
                "Due on <strong>{}</strong> at <strong>{}</strong>.",
                reminder.date, reminder.time
            ),
            due: reminder.is_due(now),
        })
        .collect();

    CardList {
        course,
        cards,
        delete_class: "reminder-delete",
    }
}

//! Periodic due check over rendered reminder cards.
//!
//! # Responsibility
//! - Re-evaluate due flags on an already rendered card list as the clock
//!   advances, without touching the store.
//!
//! # Invariants
//! - Only cards currently in the list are flagged; reminders rendered away
//!   since the last refresh are not resurrected.
//! - A reminder whose `date + time` does not parse is never flagged.
//! - Due flags only ever turn on between renders; time does not move
//!   backwards for an on-screen card.

use crate::model::item::Reminder;
use crate::render::CardList;
use chrono::NaiveDateTime;

/// Re-flags `cards` in place against `now`.
///
/// `reminders` is the course's current list; cards whose backing reminder is
/// gone from it keep their existing flag until the next full render replaces
/// them.
pub fn refresh_due(cards: &mut CardList, reminders: &[Reminder], now: NaiveDateTime) {
    for card in &mut cards.cards {
        if let Some(reminder) = reminders.iter().find(|r| r.key == card.id) {
            if reminder.is_due(now) {
                card.due = true;
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::refresh_due;
    use crate::model::course::Course;
    use crate::model::item::Reminder;
    use crate::model::store::CourseStore;
    use crate::render::reminder_cards;
    use chrono::NaiveDate;

    fn minute(h: u32, m: u32) -> chrono::NaiveDateTime {
        NaiveDate::from_ymd_opt(2024, 6, 1)
            .unwrap()
            .and_hms_opt(h, m, 0)
            .unwrap()
    }

    #[test]
    fn refresh_flags_a_card_when_its_minute_arrives() {
        let mut store = CourseStore::seeded();
        store.push(Course::Csf111, Reminder::new("Quiz", "2024-06-01", "09:00"));

        let mut cards = reminder_cards(&store, Course::Csf111, minute(8, 59));
        assert!(!cards.cards[0].due);

        refresh_due(&mut cards, store.items(Course::Csf111), minute(9, 0));
        assert!(cards.cards[0].due);
    }

    #[test]
    fn refresh_never_flags_a_malformed_reminder() {
        let mut store = CourseStore::seeded();
        store.push(Course::Csf111, Reminder::new("Quiz", "soon", "ish"));

        let mut cards = reminder_cards(&store, Course::Csf111, minute(9, 0));
        refresh_due(&mut cards, store.items(Course::Csf111), minute(23, 59));
        assert!(!cards.cards[0].due);
    }

    #[test]
    fn refresh_only_touches_rendered_cards() {
        let mut store = CourseStore::seeded();
        let kept = Reminder::new("Kept", "2024-06-01", "09:00");
        store.push(Course::Csf111, kept.clone());

        let mut cards = reminder_cards(&store, Course::Csf111, minute(8, 0));

        // Item removed from the store after render: its card keeps its flag.
        store.remove(Course::Csf111, kept.key);
        refresh_due(&mut cards, store.items(Course::Csf111), minute(10, 0));
        assert!(!cards.cards[0].due);
    }
}

//! Note and reminder item records.
//!
//! # Responsibility
//! - Define the two persisted item shapes and their shared identity contract.
//! - Parse reminder date/time strings into a comparable timestamp.
//!
//! # Invariants
//! - `key` is a stable UUID generated at creation and compared exactly;
//!   probabilistic float keys from earlier iterations are gone for good.
//! - Unknown fields in persisted item text are rejected at the load boundary.
//! - `date`/`time` are stored exactly as entered and only interpreted by the
//!   due check; malformed values parse to `None` and never flag.

use chrono::{NaiveDate, NaiveDateTime, NaiveTime};
use serde::{de::DeserializeOwned, Deserialize, Serialize};
use uuid::Uuid;

/// Stable identifier for every note or reminder.
pub type ItemId = Uuid;

const DATE_FORMAT: &str = "%Y-%m-%d";
const TIME_FORMATS: [&str; 2] = ["%H:%M:%S", "%H:%M"];

/// Shared identity contract for items held in a `CourseStore`.
pub trait StoreItem: Serialize + DeserializeOwned {
    /// Stable key used for delete matching and card element ids.
    fn key(&self) -> ItemId;
}

/// Free-text note scoped to one course.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct Note {
    /// Stable key, also used as the rendered card's element id.
    pub key: ItemId,
    /// Free text, taken verbatim from the input form.
    pub desc: String,
}

impl Note {
    /// Creates a note with a freshly generated key.
    pub fn new(desc: impl Into<String>) -> Self {
        Self {
            key: Uuid::new_v4(),
            desc: desc.into(),
        }
    }
}

impl StoreItem for Note {
    fn key(&self) -> ItemId {
        self.key
    }
}

/// Time-stamped reminder scoped to one course.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct Reminder {
    /// Stable key, also used as the rendered card's element id.
    pub key: ItemId,
    /// Reminder title, taken verbatim from the input form.
    pub title: String,
    /// Calendar date as `YYYY-MM-DD`, kept as entered.
    pub date: String,
    /// Wall-clock time as `HH:MM` (seconds tolerated), kept as entered.
    pub time: String,
}

impl Reminder {
    /// Creates a reminder with a freshly generated key.
    pub fn new(
        title: impl Into<String>,
        date: impl Into<String>,
        time: impl Into<String>,
    ) -> Self {
        Self {
            key: Uuid::new_v4(),
            title: title.into(),
            date: date.into(),
            time: time.into(),
        }
    }

    /// Parses `date + time` into the moment this reminder comes due.
    ///
    /// Returns `None` when either part is malformed; such reminders are
    /// silently never due rather than an error.
    pub fn due_at(&self) -> Option<NaiveDateTime> {
        let date = NaiveDate::parse_from_str(self.date.trim(), DATE_FORMAT).ok()?;
        let time = TIME_FORMATS
            .iter()
            .find_map(|format| NaiveTime::parse_from_str(self.time.trim(), format).ok())?;
        Some(date.and_time(time))
    }

    /// Whether this reminder is due at or before `now`.
    pub fn is_due(&self, now: NaiveDateTime) -> bool {
        self.due_at().is_some_and(|due| now >= due)
    }
}

impl StoreItem for Reminder {
    fn key(&self) -> ItemId {
        self.key
    }
}

#[cfg(test)]
mod tests {
    use super::{Note, Reminder};
    use chrono::NaiveDate;

    fn at(date: (i32, u32, u32), time: (u32, u32)) -> chrono::NaiveDateTime {
        NaiveDate::from_ymd_opt(date.0, date.1, date.2)
            .unwrap()
            .and_hms_opt(time.0, time.1, 0)
            .unwrap()
    }

    #[test]
    fn fresh_notes_get_distinct_keys() {
        let a = Note::new("first");
        let b = Note::new("second");
        assert_ne!(a.key, b.key);
    }

    #[test]
    fn due_at_parses_date_and_time() {
        let reminder = Reminder::new("Quiz", "2020-01-01", "09:00");
        assert_eq!(reminder.due_at(), Some(at((2020, 1, 1), (9, 0))));
    }

    #[test]
    fn due_at_tolerates_seconds_and_padding() {
        let reminder = Reminder::new("Quiz", " 2020-01-01 ", "09:00:30");
        assert!(reminder.due_at().is_some());
    }

    #[test]
    fn malformed_date_or_time_is_never_due() {
        let bad_date = Reminder::new("Quiz", "01/01/2020", "09:00");
        let bad_time = Reminder::new("Quiz", "2020-01-01", "nine");
        let far_past = at((2030, 1, 1), (0, 0));
        assert_eq!(bad_date.due_at(), None);
        assert!(!bad_date.is_due(far_past));
        assert!(!bad_time.is_due(far_past));
    }

    #[test]
    fn is_due_is_inclusive_at_the_boundary() {
        let reminder = Reminder::new("Quiz", "2020-01-01", "09:00");
        assert!(reminder.is_due(at((2020, 1, 1), (9, 0))));
        assert!(reminder.is_due(at((2020, 1, 1), (9, 1))));
        assert!(!reminder.is_due(at((2020, 1, 1), (8, 59))));
    }

    #[test]
    fn persisted_note_with_unknown_field_is_rejected() {
        let text = r#"{"key":"8c4c1f40-55c5-4b85-a372-6ef5e3f9b7d0","desc":"x","extra":1}"#;
        assert!(serde_json::from_str::<Note>(text).is_err());
    }
}

use courseboard_core::db::open_db_in_memory;
use courseboard_core::{
    Course, CourseStore, Note, Reminder, RepoError, SqliteStoreRepository, StoreRepository,
    StoreSlot,
};
use rusqlite::params;

#[test]
fn first_load_seeds_every_course_empty() {
    let conn = open_db_in_memory().unwrap();
    let repo = SqliteStoreRepository::new(&conn);

    let store: CourseStore<Note> = repo.load(StoreSlot::Notes).unwrap();
    for course in Course::ALL {
        assert!(store.items(course).is_empty());
    }
}

#[test]
fn first_load_persists_the_seed() {
    let conn = open_db_in_memory().unwrap();
    let repo = SqliteStoreRepository::new(&conn);

    let _: CourseStore<Note> = repo.load(StoreSlot::Notes).unwrap();
    let stored: String = conn
        .query_row(
            "SELECT value FROM kv_store WHERE key = 'notes';",
            [],
            |row| row.get(0),
        )
        .unwrap();
    assert!(stored.contains("\"CSF111\""));
}

#[test]
fn load_is_idempotent_without_mutation() {
    let conn = open_db_in_memory().unwrap();
    let repo = SqliteStoreRepository::new(&conn);

    let first: CourseStore<Note> = repo.load(StoreSlot::Notes).unwrap();
    let second: CourseStore<Note> = repo.load(StoreSlot::Notes).unwrap();
    assert_eq!(first, second);
}

#[test]
fn save_then_load_round_trips() {
    let conn = open_db_in_memory().unwrap();
    let repo = SqliteStoreRepository::new(&conn);

    let mut store = CourseStore::seeded();
    store.push(Course::Csf111, Note::new("alpha"));
    store.push(Course::Phyf110, Note::new("beta"));
    repo.save(StoreSlot::Notes, &store).unwrap();

    let loaded: CourseStore<Note> = repo.load(StoreSlot::Notes).unwrap();
    assert_eq!(loaded, store);
}

#[test]
fn note_and_reminder_slots_are_independent() {
    let conn = open_db_in_memory().unwrap();
    let repo = SqliteStoreRepository::new(&conn);

    let mut notes = CourseStore::seeded();
    notes.push(Course::Csf111, Note::new("a note"));
    repo.save(StoreSlot::Notes, &notes).unwrap();

    let reminders: CourseStore<Reminder> = repo.load(StoreSlot::Reminders).unwrap();
    assert!(reminders.is_empty());

    let notes_back: CourseStore<Note> = repo.load(StoreSlot::Notes).unwrap();
    assert_eq!(notes_back.len(), 1);
}

#[test]
fn unparseable_persisted_text_is_fatal_for_the_slot() {
    let conn = open_db_in_memory().unwrap();
    conn.execute(
        "INSERT INTO kv_store (key, value) VALUES ('notes', ?1);",
        params!["{not json"],
    )
    .unwrap();

    let repo = SqliteStoreRepository::new(&conn);
    let err = repo.load::<Note>(StoreSlot::Notes).unwrap_err();
    assert!(matches!(err, RepoError::Corrupt { key: "notes", .. }));
}

#[test]
fn unknown_course_key_is_rejected_at_the_load_boundary() {
    let conn = open_db_in_memory().unwrap();
    conn.execute(
        "INSERT INTO kv_store (key, value) VALUES ('notes', ?1);",
        params![r#"{"CSF999":[]}"#],
    )
    .unwrap();

    let repo = SqliteStoreRepository::new(&conn);
    assert!(repo.load::<Note>(StoreSlot::Notes).is_err());
}

#[test]
fn missing_courses_in_persisted_text_are_reseeded() {
    let conn = open_db_in_memory().unwrap();
    conn.execute(
        "INSERT INTO kv_store (key, value) VALUES ('notes', ?1);",
        params![r#"{"CSF111":[]}"#],
    )
    .unwrap();

    let repo = SqliteStoreRepository::new(&conn);
    let store: CourseStore<Note> = repo.load(StoreSlot::Notes).unwrap();
    for course in Course::ALL {
        assert!(store.items(course).is_empty());
    }
}

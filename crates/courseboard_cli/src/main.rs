//! CLI smoke entry point.
//!
//! # Responsibility
//! - Provide a minimal executable to verify `courseboard_core` wiring.
//! - Walk one add/render/delete cycle against an in-memory store and keep
//!   the output deterministic enough for quick local sanity checks.

use chrono::Local;
use courseboard_core::db::open_db_in_memory;
use courseboard_core::{Course, NoteService, ReminderService, SqliteStoreRepository};
use std::process::ExitCode;

fn main() -> ExitCode {
    match run() {
        Ok(()) => ExitCode::SUCCESS,
        Err(err) => {
            eprintln!("courseboard: {err}");
            ExitCode::FAILURE
        }
    }
}

fn run() -> Result<(), Box<dyn std::error::Error>> {
    println!("courseboard_core version={}", courseboard_core::core_version());

    let conn = open_db_in_memory()?;
    let course = Course::Csf111;

    let notes = NoteService::new(SqliteStoreRepository::new(&conn));
    let note = notes.add_note(course, "Midterm covers ch.1-3")?;
    let cards = notes.render_cards(course)?;
    println!("-- notes/{course} ({} cards) --", cards.cards.len());
    print!("{}", cards.to_html());

    notes.remove_note(course, note.key)?;
    println!(
        "after delete: {} cards",
        notes.render_cards(course)?.cards.len()
    );

    let reminders = ReminderService::new(SqliteStoreRepository::new(&conn));
    reminders.add_reminder(course, "Quiz", "2020-01-01", "09:00")?;
    let cards = reminders.render_cards(course, Local::now().naive_local())?;
    println!("-- reminders/{course} ({} cards) --", cards.cards.len());
    print!("{}", cards.to_html());

    Ok(())
}

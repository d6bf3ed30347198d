use courseboard_core::db::migrations::latest_version;
use courseboard_core::db::{open_db, open_db_in_memory, DbError};
use tempfile::TempDir;

#[test]
fn fresh_database_lands_on_the_latest_version() {
    let conn = open_db_in_memory().unwrap();
    let version: u32 = conn
        .query_row("PRAGMA user_version;", [], |row| row.get(0))
        .unwrap();
    assert_eq!(version, latest_version());
}

#[test]
fn kv_table_exists_after_bootstrap() {
    let conn = open_db_in_memory().unwrap();
    let count: u32 = conn
        .query_row("SELECT COUNT(*) FROM kv_store;", [], |row| row.get(0))
        .unwrap();
    assert_eq!(count, 0);
}

#[test]
fn reopening_a_file_database_is_a_no_op() {
    let dir = TempDir::new().unwrap();
    let path = dir.path().join("courseboard.db");

    {
        let conn = open_db(&path).unwrap();
        conn.execute(
            "INSERT INTO kv_store (key, value) VALUES ('notes', '{}');",
            [],
        )
        .unwrap();
    }

    let conn = open_db(&path).unwrap();
    let value: String = conn
        .query_row(
            "SELECT value FROM kv_store WHERE key = 'notes';",
            [],
            |row| row.get(0),
        )
        .unwrap();
    assert_eq!(value, "{}");
}

#[test]
fn newer_schema_versions_are_rejected() {
    let dir = TempDir::new().unwrap();
    let path = dir.path().join("courseboard.db");
    {
        let conn = rusqlite::Connection::open(&path).unwrap();
        conn.execute_batch("PRAGMA user_version = 9999;").unwrap();
    }

    let err = open_db(&path).unwrap_err();
    assert!(matches!(
        err,
        DbError::UnsupportedSchemaVersion {
            db_version: 9999,
            ..
        }
    ));
}

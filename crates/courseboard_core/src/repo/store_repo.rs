//! Store accessor contract and SQLite key-value implementation.
//!
//! # Responsibility
//! - Load and save whole course-store snapshots as serialized text under one
//!   key per subsystem.
//! - Seed the default all-empty store on first access.
//!
//! # Invariants
//! - `save` completes synchronously before it returns, so a load issued
//!   afterwards always observes the just-committed snapshot.
//! - Load rejects unparseable persisted text rather than using it as-is.

use crate::db::DbError;
use crate::model::item::StoreItem;
use crate::model::store::CourseStore;
use log::{error, info};
use rusqlite::{params, Connection, OptionalExtension};
use std::error::Error;
use std::fmt::{Display, Formatter};

pub type RepoResult<T> = Result<T, RepoError>;

/// Generic repository error for store persistence operations.
#[derive(Debug)]
pub enum RepoError {
    Db(DbError),
    /// Persisted text under `key` exists but does not parse as a valid store.
    Corrupt {
        key: &'static str,
        source: serde_json::Error,
    },
}

impl Display for RepoError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Db(err) => write!(f, "{err}"),
            Self::Corrupt { key, source } => {
                write!(f, "corrupt persisted store under key `{key}`: {source}")
            }
        }
    }
}

impl Error for RepoError {
    fn source(&self) -> Option<&(dyn Error + 'static)> {
        match self {
            Self::Db(err) => Some(err),
            Self::Corrupt { source, .. } => Some(source),
        }
    }
}

impl From<DbError> for RepoError {
    fn from(value: DbError) -> Self {
        Self::Db(value)
    }
}

impl From<rusqlite::Error> for RepoError {
    fn from(value: rusqlite::Error) -> Self {
        Self::Db(DbError::Sqlite(value))
    }
}

/// Persisted key of one subsystem's store.
///
/// Notes and reminders are structurally identical subsystems persisted under
/// two independent keys.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StoreSlot {
    Notes,
    Reminders,
}

impl StoreSlot {
    /// Key-value storage key for this slot.
    pub fn key(self) -> &'static str {
        match self {
            StoreSlot::Notes => "notes",
            StoreSlot::Reminders => "reminders",
        }
    }
}

impl Display for StoreSlot {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.key())
    }
}

/// Store accessor interface for whole-snapshot load/save.
pub trait StoreRepository {
    /// Returns the current snapshot for `slot`, seeding and persisting the
    /// default all-empty store when no value exists yet.
    fn load<T: StoreItem>(&self, slot: StoreSlot) -> RepoResult<CourseStore<T>>;

    /// Serializes `store` and writes it under the slot's key.
    fn save<T: StoreItem>(&self, slot: StoreSlot, store: &CourseStore<T>) -> RepoResult<()>;
}

/// SQLite-backed store repository over the `kv_store` table.
pub struct SqliteStoreRepository<'conn> {
    conn: &'conn Connection,
}

impl<'conn> SqliteStoreRepository<'conn> {
    pub fn new(conn: &'conn Connection) -> Self {
        Self { conn }
    }

    fn read_text(&self, key: &str) -> RepoResult<Option<String>> {
        let value = self
            .conn
            .query_row(
                "SELECT value FROM kv_store WHERE key = ?1;",
                [key],
                |row| row.get::<_, String>(0),
            )
            .optional()?;
        Ok(value)
    }

    fn write_text(&self, key: &str, value: &str) -> RepoResult<()> {
        self.conn.execute(
            "INSERT INTO kv_store (key, value) VALUES (?1, ?2)
             ON CONFLICT(key) DO UPDATE SET
                value = excluded.value,
                updated_at = (strftime('%s', 'now') * 1000);",
            params![key, value],
        )?;
        Ok(())
    }
}

impl StoreRepository for SqliteStoreRepository<'_> {
    fn load<T: StoreItem>(&self, slot: StoreSlot) -> RepoResult<CourseStore<T>> {
        let key = slot.key();

        let Some(text) = self.read_text(key)? else {
            // First run for this slot: seed, persist, return.
            let seeded = CourseStore::seeded();
            self.save(slot, &seeded)?;
            info!("event=store_seed module=repo status=ok slot={slot}");
            return Ok(seeded);
        };

        let mut store: CourseStore<T> = serde_json::from_str(&text).map_err(|source| {
            error!("event=store_load module=repo status=error slot={slot} error={source}");
            RepoError::Corrupt { key, source }
        })?;
        store.seed_missing_courses();
        Ok(store)
    }

    fn save<T: StoreItem>(&self, slot: StoreSlot, store: &CourseStore<T>) -> RepoResult<()> {
        let key = slot.key();
        let text =
            serde_json::to_string(store).map_err(|source| RepoError::Corrupt { key, source })?;
        self.write_text(key, &text)?;
        info!(
            "event=store_save module=repo status=ok slot={slot} items={}",
            store.len()
        );
        Ok(())
    }
}

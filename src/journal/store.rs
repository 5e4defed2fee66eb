//! Categorized-entry persistence.
//!
//! The free functions are thin pass-throughs to SQLite. [`EntryStore`] is the
//! seam the companion depends on; [`TaskRepository`] implements it over a
//! connection held for the life of the process.

use chrono::SecondsFormat;
use rusqlite::{params, Connection, OptionalExtension, Row};
use serde_json::Value;

use super::types::{CategorizedEntry, DeleteOutcome, NewEntry};
use crate::error::StoreError;

const SELECT_COLUMNS: &str = "id, created_at, type, tasks, worries, ideas, random";

/// Create/list/latest/delete over categorized entries.
pub trait EntryStore {
    fn create(&self, entry: &NewEntry) -> Result<CategorizedEntry, StoreError>;
    fn list_all(&self) -> Result<Vec<CategorizedEntry>, StoreError>;
    fn latest(&self) -> Result<Option<CategorizedEntry>, StoreError>;
    fn delete_by_id(&self, id: i64) -> Result<DeleteOutcome, StoreError>;
}

/// SQLite-backed [`EntryStore`].
pub struct TaskRepository {
    conn: Connection,
}

impl TaskRepository {
    pub fn new(conn: Connection) -> Self {
        Self { conn }
    }

    /// Direct access to the underlying connection (e.g. for reflections).
    pub fn connection(&self) -> &Connection {
        &self.conn
    }
}

impl EntryStore for TaskRepository {
    fn create(&self, entry: &NewEntry) -> Result<CategorizedEntry, StoreError> {
        tracing::debug!(entry_type = %entry.entry_type, "creating task entry");
        match create_entry(&self.conn, entry) {
            Ok(created) => {
                tracing::debug!(id = created.id, "task entry created");
                Ok(created)
            }
            Err(e) => {
                tracing::error!(error = %e, "failed to create task entry");
                Err(e)
            }
        }
    }

    fn list_all(&self) -> Result<Vec<CategorizedEntry>, StoreError> {
        list_entries(&self.conn)
    }

    fn latest(&self) -> Result<Option<CategorizedEntry>, StoreError> {
        latest_entry(&self.conn)
    }

    fn delete_by_id(&self, id: i64) -> Result<DeleteOutcome, StoreError> {
        let outcome = delete_entry(&self.conn, id)?;
        tracing::debug!(id, affected = outcome.affected, "task entry delete");
        Ok(outcome)
    }
}

/// Current time in the stored format. Fixed-width, so text order is time order.
pub(crate) fn now_timestamp() -> String {
    chrono::Utc::now().to_rfc3339_opts(SecondsFormat::Micros, true)
}

/// Insert a new entry, assigning id and creation time. Returns the stored record.
pub fn create_entry(conn: &Connection, entry: &NewEntry) -> Result<CategorizedEntry, StoreError> {
    let created_at = now_timestamp();
    let tasks = serde_json::to_string(&entry.tasks)?;
    let worries = serde_json::to_string(&entry.worries)?;
    let ideas = serde_json::to_string(&entry.ideas)?;
    let random = serde_json::to_string(&entry.random)?;

    conn.execute(
        "INSERT INTO task_entries (created_at, type, tasks, worries, ideas, random) \
         VALUES (?1, ?2, ?3, ?4, ?5, ?6)",
        params![created_at, entry.entry_type, tasks, worries, ideas, random],
    )?;

    Ok(CategorizedEntry {
        id: conn.last_insert_rowid(),
        created_at,
        entry_type: entry.entry_type.clone(),
        tasks: entry.tasks.clone(),
        worries: entry.worries.clone(),
        ideas: entry.ideas.clone(),
        random: entry.random.clone(),
    })
}

/// All entries, most recently created first.
pub fn list_entries(conn: &Connection) -> Result<Vec<CategorizedEntry>, StoreError> {
    let mut stmt = conn.prepare(&format!(
        "SELECT {SELECT_COLUMNS} FROM task_entries ORDER BY created_at DESC, id DESC"
    ))?;

    let rows = stmt
        .query_map([], raw_row)?
        .collect::<Result<Vec<_>, _>>()?;

    rows.into_iter().map(RawEntry::decode).collect()
}

/// The most recently created entry, if any.
pub fn latest_entry(conn: &Connection) -> Result<Option<CategorizedEntry>, StoreError> {
    conn.query_row(
        &format!(
            "SELECT {SELECT_COLUMNS} FROM task_entries ORDER BY created_at DESC, id DESC LIMIT 1"
        ),
        [],
        raw_row,
    )
    .optional()?
    .map(RawEntry::decode)
    .transpose()
}

/// Delete by id. A missing id affects zero rows and is not an error.
pub fn delete_entry(conn: &Connection, id: i64) -> Result<DeleteOutcome, StoreError> {
    let affected = conn.execute("DELETE FROM task_entries WHERE id = ?1", params![id])?;
    Ok(DeleteOutcome { affected })
}

/// Row as read from SQLite, before the JSON list columns are decoded.
struct RawEntry {
    id: i64,
    created_at: String,
    entry_type: String,
    tasks: String,
    worries: String,
    ideas: String,
    random: String,
}

fn raw_row(row: &Row<'_>) -> rusqlite::Result<RawEntry> {
    Ok(RawEntry {
        id: row.get(0)?,
        created_at: row.get(1)?,
        entry_type: row.get(2)?,
        tasks: row.get(3)?,
        worries: row.get(4)?,
        ideas: row.get(5)?,
        random: row.get(6)?,
    })
}

impl RawEntry {
    fn decode(self) -> Result<CategorizedEntry, StoreError> {
        let id = self.id;
        let column = |text: &str, column: &'static str| -> Result<Value, StoreError> {
            serde_json::from_str(text).map_err(|_| StoreError::CorruptColumn { id, column })
        };

        Ok(CategorizedEntry {
            id,
            tasks: column(&self.tasks, "tasks")?,
            worries: column(&self.worries, "worries")?,
            ideas: column(&self.ideas, "ideas")?,
            random: column(&self.random, "random")?,
            created_at: self.created_at,
            entry_type: self.entry_type,
        })
    }
}

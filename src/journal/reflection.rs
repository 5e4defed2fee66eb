//! Reflections: free-text notes with an optional mood tag. Create-only.

use rusqlite::{params, Connection};

use super::store::now_timestamp;
use super::types::Reflection;
use crate::error::StoreError;

/// Insert a reflection and return the stored record.
pub fn create_reflection(
    conn: &Connection,
    content: &str,
    mood_tag: Option<&str>,
) -> Result<Reflection, StoreError> {
    let created_at = now_timestamp();
    conn.execute(
        "INSERT INTO reflections (created_at, content, mood_tag) VALUES (?1, ?2, ?3)",
        params![created_at, content, mood_tag],
    )?;

    Ok(Reflection {
        id: conn.last_insert_rowid(),
        created_at,
        content: content.to_string(),
        mood_tag: mood_tag.map(str::to_string),
    })
}

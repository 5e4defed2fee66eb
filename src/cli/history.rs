//! Non-interactive commands over stored brain dumps: `history`, `latest`, `forget`.

use anyhow::Result;
use std::io::Write;

use super::render::render_entry;
use crate::journal::EntryStore;

/// Print every entry, newest first.
pub fn history<S: EntryStore, W: Write>(store: &S, out: &mut W) -> Result<()> {
    let entries = store.list_all()?;
    if entries.is_empty() {
        writeln!(out, "No entries yet.")?;
        return Ok(());
    }

    writeln!(out, "Brain dumps ({})", entries.len())?;
    writeln!(out, "{}", "=".repeat(40))?;
    for entry in &entries {
        write!(out, "{}", render_entry(entry))?;
        writeln!(out)?;
    }
    Ok(())
}

/// Print the newest entry.
pub fn latest<S: EntryStore, W: Write>(store: &S, out: &mut W) -> Result<()> {
    match store.latest()? {
        Some(entry) => write!(out, "{}", render_entry(&entry))?,
        None => writeln!(out, "No entries yet.")?,
    }
    Ok(())
}

/// Delete one entry by id and report how many rows were removed.
pub fn forget<S: EntryStore, W: Write>(store: &S, id: i64, out: &mut W) -> Result<()> {
    let outcome = store.delete_by_id(id)?;
    if outcome.affected == 0 {
        writeln!(out, "No entry with id {id}; nothing deleted.")?;
    } else {
        writeln!(out, "Deleted entry {id} ({} record affected).", outcome.affected)?;
    }
    Ok(())
}

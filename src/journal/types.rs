//! Record shapes persisted by the journal.
//!
//! [`CategorizedEntry`] is a sorted brain dump; [`Reflection`] is a free-text
//! note that no interactive flow writes yet.

use serde::Serialize;
use serde_json::{Map, Value};

/// Tag stored in `type` for entries produced by the brain-dump flow.
pub const BRAIN_DUMP_TYPE: &str = "brain_dump";

/// The four category keys the model is asked to fill, in display order.
pub const CATEGORY_KEYS: [&str; 4] = ["tasks", "worries", "ideas", "random"];

/// Fields supplied when creating an entry. Id and timestamp are assigned by the store.
///
/// Category values are kept as raw JSON: a well-behaved model sends arrays of
/// strings, but whatever it sent is stored unchanged.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct NewEntry {
    #[serde(rename = "type")]
    pub entry_type: String,
    pub tasks: Value,
    pub worries: Value,
    pub ideas: Value,
    pub random: Value,
}

impl NewEntry {
    /// Build an entry from a parsed category object. Missing keys become `null`.
    pub fn from_categories(entry_type: impl Into<String>, categories: &Map<String, Value>) -> Self {
        let field = |key: &str| categories.get(key).cloned().unwrap_or(Value::Null);
        Self {
            entry_type: entry_type.into(),
            tasks: field("tasks"),
            worries: field("worries"),
            ideas: field("ideas"),
            random: field("random"),
        }
    }
}

/// A stored brain dump, matching the `task_entries` table.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct CategorizedEntry {
    pub id: i64,
    /// RFC 3339 creation timestamp (UTC, microsecond precision).
    pub created_at: String,
    #[serde(rename = "type")]
    pub entry_type: String,
    pub tasks: Value,
    pub worries: Value,
    pub ideas: Value,
    pub random: Value,
}

impl CategorizedEntry {
    /// The stored value for one of [`CATEGORY_KEYS`].
    pub fn category(&self, key: &str) -> Option<&Value> {
        match key {
            "tasks" => Some(&self.tasks),
            "worries" => Some(&self.worries),
            "ideas" => Some(&self.ideas),
            "random" => Some(&self.random),
            _ => None,
        }
    }
}

/// A free-text reflection, matching the `reflections` table.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Reflection {
    pub id: i64,
    pub created_at: String,
    pub content: String,
    pub mood_tag: Option<String>,
}

/// Result of a delete: how many rows went away (0 or 1).
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DeleteOutcome {
    pub affected: usize,
}

/// Render a category value as display lines.
///
/// Arrays yield one line per element (strings unquoted); `null` yields
/// nothing; any other shape yields its JSON text as a single line.
pub fn category_items(value: &Value) -> Vec<String> {
    match value {
        Value::Null => Vec::new(),
        Value::Array(items) => items
            .iter()
            .map(|item| match item {
                Value::String(s) => s.clone(),
                other => other.to_string(),
            })
            .collect(),
        Value::String(s) => vec![s.clone()],
        other => vec![other.to_string()],
    }
}

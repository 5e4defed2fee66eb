//! Human-readable formatting for sort outcomes and stored entries.

use serde_json::{Map, Value};
use std::fmt::Write;

use crate::companion::SortOutcome;
use crate::journal::types::{category_items, CATEGORY_KEYS};
use crate::journal::CategorizedEntry;

/// Format the result of a brain-dump sort.
pub fn render_outcome(outcome: &SortOutcome) -> String {
    match outcome {
        SortOutcome::Sorted(categories) => render_categories(categories),
        SortOutcome::Unparsed(envelope) => {
            let mut out = String::new();
            let _ = writeln!(out, "{}", envelope.error);
            let _ = writeln!(out, "Raw reply:");
            for line in envelope.raw.lines() {
                let _ = writeln!(out, "  {line}");
            }
            out
        }
    }
}

/// Format a category object: the four known keys first, then anything extra.
pub fn render_categories(categories: &Map<String, Value>) -> String {
    let mut out = String::new();
    for key in CATEGORY_KEYS {
        write_category(&mut out, key, categories.get(key).unwrap_or(&Value::Null));
    }
    for (key, value) in categories {
        if !CATEGORY_KEYS.contains(&key.as_str()) {
            write_category(&mut out, key, value);
        }
    }
    out
}

/// Format a stored entry with its id and timestamp.
pub fn render_entry(entry: &CategorizedEntry) -> String {
    let mut out = String::new();
    let _ = writeln!(out, "Entry #{} [{}] {}", entry.id, entry.entry_type, entry.created_at);
    for key in CATEGORY_KEYS {
        if let Some(value) = entry.category(key) {
            write_category(&mut out, key, value);
        }
    }
    out
}

fn write_category(out: &mut String, key: &str, value: &Value) {
    let _ = writeln!(out, "{}:", title_case(key));
    let items = category_items(value);
    if items.is_empty() {
        let _ = writeln!(out, "  (none)");
    }
    for item in items {
        let _ = writeln!(out, "  - {item}");
    }
}

fn title_case(key: &str) -> String {
    let mut chars = key.chars();
    match chars.next() {
        Some(first) => first.to_uppercase().chain(chars).collect(),
        None => String::new(),
    }
}

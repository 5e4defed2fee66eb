//! Local persistence for sorted brain dumps and reflections.

pub mod reflection;
pub mod store;
pub mod types;

pub use store::{EntryStore, TaskRepository};
pub use types::{CategorizedEntry, DeleteOutcome, NewEntry, Reflection};

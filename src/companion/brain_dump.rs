use serde_json::{Map, Value};

use crate::error::StoreError;
use crate::journal::types::{CategorizedEntry, NewEntry, BRAIN_DUMP_TYPE};
use crate::journal::EntryStore;

/// Saves parsed brain dumps through an [`EntryStore`], tagged `"brain_dump"`.
pub struct BrainDumpService<S> {
    store: S,
}

impl<S: EntryStore> BrainDumpService<S> {
    pub fn new(store: S) -> Self {
        Self { store }
    }

    pub fn store(&self) -> &S {
        &self.store
    }

    /// Persist a parsed category object as-is. Store failures propagate.
    pub fn save_sorted_dump(
        &self,
        sorted: &Map<String, Value>,
    ) -> Result<CategorizedEntry, StoreError> {
        tracing::info!(categories = sorted.len(), "saving brain dump");

        let entry = NewEntry::from_categories(BRAIN_DUMP_TYPE, sorted);
        match self.store.create(&entry) {
            Ok(saved) => {
                tracing::info!(id = saved.id, "brain dump saved");
                Ok(saved)
            }
            Err(e) => {
                tracing::error!(error = %e, "failed to save brain dump");
                Err(e)
            }
        }
    }
}

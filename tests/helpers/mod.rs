#![allow(dead_code)]

use std::cell::{Cell, RefCell};
use std::collections::VecDeque;
use std::sync::Mutex;

use async_trait::async_trait;
use lumalite::db;
use lumalite::error::{LlmError, StoreError};
use lumalite::journal::{CategorizedEntry, DeleteOutcome, EntryStore, NewEntry, TaskRepository};
use lumalite::llm::{ChatMessage, ChatModel};

/// Repository over a fresh in-memory database with schema and migrations applied.
pub fn test_repository() -> TaskRepository {
    TaskRepository::new(db::open_memory_database().unwrap())
}

/// A model that replays canned replies in order and records what it was sent.
pub struct ScriptedModel {
    replies: Mutex<VecDeque<Result<String, LlmError>>>,
    pub requests: Mutex<Vec<Vec<ChatMessage>>>,
}

impl ScriptedModel {
    pub fn new(replies: Vec<Result<String, LlmError>>) -> Self {
        Self {
            replies: Mutex::new(replies.into()),
            requests: Mutex::new(Vec::new()),
        }
    }

    pub fn replying(reply: &str) -> Self {
        Self::new(vec![Ok(reply.to_string())])
    }

    pub fn failing(status: u16, body: &str) -> Self {
        Self::new(vec![Err(LlmError::Status {
            status,
            body: body.to_string(),
        })])
    }

    pub fn request_count(&self) -> usize {
        self.requests.lock().unwrap().len()
    }
}

#[async_trait]
impl ChatModel for ScriptedModel {
    async fn invoke(&self, messages: &[ChatMessage]) -> Result<String, LlmError> {
        self.requests.lock().unwrap().push(messages.to_vec());
        self.replies
            .lock()
            .unwrap()
            .pop_front()
            .unwrap_or_else(|| Err(LlmError::MalformedResponse("no scripted reply left".into())))
    }
}

/// Wraps a real in-memory repository, recording every create and optionally
/// rejecting writes.
pub struct RecordingStore {
    inner: TaskRepository,
    pub created: RefCell<Vec<NewEntry>>,
    reject_writes: Cell<bool>,
}

impl RecordingStore {
    pub fn new() -> Self {
        Self {
            inner: test_repository(),
            created: RefCell::new(Vec::new()),
            reject_writes: Cell::new(false),
        }
    }

    pub fn rejecting() -> Self {
        let store = Self::new();
        store.reject_writes.set(true);
        store
    }

    pub fn create_count(&self) -> usize {
        self.created.borrow().len()
    }
}

impl EntryStore for RecordingStore {
    fn create(&self, entry: &NewEntry) -> Result<CategorizedEntry, StoreError> {
        self.created.borrow_mut().push(entry.clone());
        if self.reject_writes.get() {
            return Err(StoreError::Database(rusqlite::Error::SqliteFailure(
                rusqlite::ffi::Error::new(rusqlite::ffi::SQLITE_CONSTRAINT),
                Some("simulated constraint violation".into()),
            )));
        }
        self.inner.create(entry)
    }

    fn list_all(&self) -> Result<Vec<CategorizedEntry>, StoreError> {
        self.inner.list_all()
    }

    fn latest(&self) -> Result<Option<CategorizedEntry>, StoreError> {
        self.inner.latest()
    }

    fn delete_by_id(&self, id: i64) -> Result<DeleteOutcome, StoreError> {
        self.inner.delete_by_id(id)
    }
}

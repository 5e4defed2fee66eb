//! Error types for the companion flows.
//!
//! Upstream model failures and persistence failures stay separate variants so
//! callers (and tests) can tell them apart. Malformed model output is never an
//! error: it becomes [`crate::companion::SortOutcome::Unparsed`].

/// Failure talking to the language model.
#[derive(thiserror::Error, Debug)]
pub enum LlmError {
    #[error("language model request failed: {0}")]
    Request(#[from] reqwest::Error),

    #[error("language model returned HTTP {status}: {body}")]
    Status { status: u16, body: String },

    #[error("malformed completion response: {0}")]
    MalformedResponse(String),
}

/// Failure reading or writing the local store.
#[derive(thiserror::Error, Debug)]
pub enum StoreError {
    #[error("database error: {0}")]
    Database(#[from] rusqlite::Error),

    #[error("failed to encode category list: {0}")]
    Encode(#[from] serde_json::Error),

    #[error("stored entry {id} has an unreadable {column} column")]
    CorruptColumn { id: i64, column: &'static str },
}

/// Error surfaced by [`crate::companion::CompanionAgent`] operations.
#[derive(thiserror::Error, Debug)]
pub enum CompanionError {
    #[error(transparent)]
    Llm(#[from] LlmError),

    #[error(transparent)]
    Store(#[from] StoreError),
}

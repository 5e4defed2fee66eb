//! A supportive terminal companion for busy minds.
//!
//! LumaLite offers two flows from an interactive menu:
//!
//! | Flow | What happens | Persisted |
//! |------|--------------|-----------|
//! | **Emotional check-in** | The model replies with a short, validating message | No |
//! | **Brain dump** | The model sorts free text into `tasks`, `worries`, `ideas`, `random` | Yes, when the reply parses |
//!
//! # Architecture
//!
//! - **Model**: any OpenAI-compatible chat-completion endpoint behind the
//!   [`llm::ChatModel`] trait
//! - **Storage**: SQLite via `rusqlite`, opened once and held for the process lifetime
//! - **Interface**: a numbered menu over stdin/stdout, plus `history`, `latest`
//!   and `forget` subcommands
//!
//! # Modules
//!
//! - [`config`]: Configuration loading from TOML files and environment variables
//! - [`db`]: SQLite database initialization, schema, and migrations
//! - [`journal`]: Persistence for categorized entries and reflections
//! - [`llm`]: Chat-model trait and HTTP client
//! - [`prompts`]: Fixed prompt templates
//! - [`companion`]: Check-in and brain-dump flows
//! - [`cli`]: Interactive shell and history commands

pub mod cli;
pub mod companion;
pub mod config;
pub mod db;
pub mod error;
pub mod journal;
pub mod llm;
pub mod logging;
pub mod prompts;

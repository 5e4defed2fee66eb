//! The companion's two flows: emotional check-in and brain-dump sorting.
//!
//! [`CompanionAgent`] receives its model and store at construction. A call to
//! [`CompanionAgent::sort_brain_dump`] moves through prompting, awaiting the
//! model, then parsing; a parsed reply is persisted and returned, an
//! unparsable one becomes an [`ErrorEnvelope`]. Model and store failures
//! propagate as [`CompanionError`].

pub mod brain_dump;

use serde::Serialize;
use serde_json::{Map, Value};

use crate::error::CompanionError;
use crate::journal::EntryStore;
use crate::llm::{ChatMessage, ChatModel};
use crate::prompts::{build_check_in_prompt, build_sort_prompt};

pub use brain_dump::BrainDumpService;

/// Message shown when the model's reply cannot be read as JSON.
pub const SORT_FAILURE_MESSAGE: &str = "Sorry, I couldn't organize that properly.";

/// Returned in place of categories when the model reply was not parseable.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ErrorEnvelope {
    pub error: String,
    /// The model's reply, untouched.
    pub raw: String,
}

impl ErrorEnvelope {
    fn for_reply(raw: String) -> Self {
        Self {
            error: SORT_FAILURE_MESSAGE.to_string(),
            raw,
        }
    }
}

/// Result of sorting a brain dump. Serializes as either the category object
/// or the envelope; the envelope is recognisable by its `error` key.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(untagged)]
pub enum SortOutcome {
    Sorted(Map<String, Value>),
    Unparsed(ErrorEnvelope),
}

impl SortOutcome {
    pub fn is_sorted(&self) -> bool {
        matches!(self, Self::Sorted(_))
    }
}

/// Take everything from the first `{` to the end of `reply` and parse it as a
/// JSON object.
///
/// Leading commentary is skipped. Anything trailing the object (other than
/// whitespace) makes the parse fail, as does a reply with no `{` at all.
pub fn extract_json_payload(reply: &str) -> Option<Map<String, Value>> {
    let start = reply.find('{')?;
    match serde_json::from_str::<Map<String, Value>>(&reply[start..]) {
        Ok(map) => Some(map),
        Err(e) => {
            tracing::debug!(error = %e, offset = start, "reply payload is not valid JSON");
            None
        }
    }
}

pub struct CompanionAgent<M, S> {
    model: M,
    brain_dumps: BrainDumpService<S>,
}

impl<M: ChatModel, S: EntryStore> CompanionAgent<M, S> {
    pub fn new(model: M, store: S) -> Self {
        Self {
            model,
            brain_dumps: BrainDumpService::new(store),
        }
    }

    /// The store brain dumps are saved to.
    pub fn journal(&self) -> &S {
        self.brain_dumps.store()
    }

    /// Send the check-in prompt and return the reply with surrounding whitespace trimmed.
    pub async fn handle_check_in(&self, user_text: &str) -> Result<String, CompanionError> {
        tracing::info!(input_len = user_text.len(), "starting emotional check-in");

        let prompt = build_check_in_prompt(user_text);
        let reply = self.model.invoke(&[ChatMessage::human(prompt)]).await?;
        let reply = reply.trim().to_string();

        tracing::info!(reply_len = reply.len(), "emotional check-in completed");
        Ok(reply)
    }

    /// Ask the model to categorize `user_text`, persist the result, and return it.
    pub async fn sort_brain_dump(&self, user_text: &str) -> Result<SortOutcome, CompanionError> {
        tracing::info!(input_len = user_text.len(), "starting brain dump organization");

        let prompt = build_sort_prompt(user_text);
        tracing::debug!("awaiting model");
        let reply = self.model.invoke(&[ChatMessage::human(prompt)]).await?;

        let Some(parsed) = extract_json_payload(&reply) else {
            tracing::warn!(reply_len = reply.len(), "could not parse brain dump reply");
            return Ok(SortOutcome::Unparsed(ErrorEnvelope::for_reply(reply)));
        };
        tracing::info!(keys = parsed.len(), "parsed brain dump JSON");

        self.brain_dumps.save_sorted_dump(&parsed)?;

        Ok(SortOutcome::Sorted(parsed))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn payload_found_after_leading_commentary() {
        let map = extract_json_payload(r#"Sure! {"tasks": [], "ideas": ["x"]}"#).unwrap();
        assert_eq!(map["ideas"], json!(["x"]));
    }

    #[test]
    fn trailing_whitespace_is_accepted() {
        assert!(extract_json_payload("{\"tasks\": []}\n  ").is_some());
    }

    #[test]
    fn trailing_commentary_fails() {
        assert!(extract_json_payload(r#"{"tasks": []} Hope this helps!"#).is_none());
    }

    #[test]
    fn missing_brace_fails() {
        assert!(extract_json_payload("I'm not sure how to help with that").is_none());
    }

    #[test]
    fn first_brace_wins_even_if_it_is_not_the_payload() {
        // The first `{` belongs to prose, so the slice is not valid JSON.
        assert!(extract_json_payload(r#"Use {braces} like: {"tasks": []}"#).is_none());
    }

    #[test]
    fn envelope_serializes_with_error_key() {
        let outcome = SortOutcome::Unparsed(ErrorEnvelope::for_reply("nope".into()));
        assert_eq!(
            serde_json::to_value(&outcome).unwrap(),
            json!({"error": "Sorry, I couldn't organize that properly.", "raw": "nope"})
        );
        assert!(!outcome.is_sorted());
    }

    #[test]
    fn sorted_outcome_serializes_as_plain_object() {
        let map = extract_json_payload(r#"{"tasks": ["a"]}"#).unwrap();
        let outcome = SortOutcome::Sorted(map);
        assert_eq!(serde_json::to_value(&outcome).unwrap(), json!({"tasks": ["a"]}));
    }
}

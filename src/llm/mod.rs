//! Language-model boundary.
//!
//! The companion only needs one capability: send a list of messages, receive
//! one text reply. [`ChatModel`] captures that; [`openai::OpenAiChatClient`] is
//! the HTTP implementation used by the binary.

pub mod openai;

use async_trait::async_trait;
use serde::Serialize;

use crate::error::LlmError;

/// Author of a chat message. Every request is a single user turn.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum Role {
    User,
}

/// One message in a conversation sent to the model.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ChatMessage {
    pub role: Role,
    pub content: String,
}

impl ChatMessage {
    /// A message authored by the human user.
    pub fn human(content: impl Into<String>) -> Self {
        Self {
            role: Role::User,
            content: content.into(),
        }
    }
}

/// A chat-completion model: one request, one text reply.
#[async_trait]
pub trait ChatModel: Send + Sync {
    /// Send `messages` as a fresh conversation and return the reply text.
    async fn invoke(&self, messages: &[ChatMessage]) -> Result<String, LlmError>;
}

#[async_trait]
impl<T: ChatModel + ?Sized> ChatModel for &T {
    async fn invoke(&self, messages: &[ChatMessage]) -> Result<String, LlmError> {
        (**self).invoke(messages).await
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn human_message_serializes_as_user_role() {
        let msg = ChatMessage::human("hello");
        let json = serde_json::to_value(&msg).unwrap();
        assert_eq!(json, serde_json::json!({"role": "user", "content": "hello"}));
    }
}

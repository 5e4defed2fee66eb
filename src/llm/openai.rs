//! OpenAI-compatible chat-completion client.

use async_trait::async_trait;
use serde_json::{json, Value};

use super::{ChatMessage, ChatModel};
use crate::config::LlmConfig;
use crate::error::LlmError;

/// Calls `POST {base_url}/chat/completions` and returns `choices[0].message.content`.
///
/// Does not derive `Debug` so the API key never ends up in logs.
pub struct OpenAiChatClient {
    base_url: String,
    api_key: String,
    model: String,
    temperature: f32,
    client: reqwest::Client,
}

impl OpenAiChatClient {
    pub fn new(
        base_url: impl Into<String>,
        api_key: impl Into<String>,
        model: impl Into<String>,
        temperature: f32,
    ) -> Self {
        Self {
            base_url: base_url.into().trim_end_matches('/').to_string(),
            api_key: api_key.into(),
            model: model.into(),
            temperature,
            client: reqwest::Client::new(),
        }
    }

    pub fn from_config(config: &LlmConfig, api_key: &str) -> Self {
        Self::new(&config.base_url, api_key, &config.model, config.temperature)
    }

    pub fn model(&self) -> &str {
        &self.model
    }

    fn request_body(&self, messages: &[ChatMessage]) -> Value {
        json!({
            "model": self.model,
            "temperature": self.temperature,
            "messages": messages,
        })
    }
}

#[async_trait]
impl ChatModel for OpenAiChatClient {
    async fn invoke(&self, messages: &[ChatMessage]) -> Result<String, LlmError> {
        let url = format!("{}/chat/completions", self.base_url);
        tracing::debug!(model = %self.model, messages = messages.len(), "sending chat completion");

        let response = self
            .client
            .post(&url)
            .bearer_auth(&self.api_key)
            .json(&self.request_body(messages))
            .send()
            .await?;

        let status = response.status();
        let body = response.text().await?;

        if !status.is_success() {
            tracing::warn!(
                status = status.as_u16(),
                model = %self.model,
                "chat completion rejected"
            );
            return Err(LlmError::Status {
                status: status.as_u16(),
                body,
            });
        }

        let content = parse_completion_content(&body)?;
        tracing::info!(
            model = %self.model,
            reply_len = content.len(),
            "chat completion received"
        );
        Ok(content)
    }
}

fn parse_completion_content(body: &str) -> Result<String, LlmError> {
    let value: Value = serde_json::from_str(body)
        .map_err(|e| LlmError::MalformedResponse(format!("invalid JSON: {e}")))?;
    value
        .get("choices")
        .and_then(|choices| choices.get(0))
        .and_then(|choice| choice.get("message"))
        .and_then(|message| message.get("content"))
        .and_then(Value::as_str)
        .map(str::to_string)
        .ok_or_else(|| {
            LlmError::MalformedResponse("missing choices[0].message.content".into())
        })
}

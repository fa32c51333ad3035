//! Chat-completion client seam
//!
//! - **Version**: 1.0.0
//! - **Since**: 1.0.0
//!
//! ## Changelog
//! - 1.0.0: CompletionClient trait and OpenAI implementation with timeout

use anyhow::Result;
use async_trait::async_trait;
use log::debug;
use openai::chat::{ChatCompletion, ChatCompletionMessage, ChatCompletionMessageRole};
use std::time::Duration;
use tokio::time::timeout;
use uuid::Uuid;

/// Sampling temperature for every consultation. Answers are deterministic.
pub const TEMPERATURE: f32 = 0.0;

/// One two-message exchange: persona instruction plus the user's text
#[derive(Debug, Clone, PartialEq)]
pub struct CompletionRequest<'a> {
    pub system_prompt: &'a str,
    pub user_text: &'a str,
    pub model: &'a str,
    pub temperature: f32,
    pub request_id: Uuid,
}

/// The external completion service.
///
/// Failures come back as `Err`; callers decide how to present them.
#[async_trait]
pub trait CompletionClient: Send + Sync {
    async fn complete(&self, request: CompletionRequest<'_>) -> Result<String>;
}

/// OpenAI chat-completion backed client.
///
/// The `openai` crate reads credentials from the `OPENAI_KEY` environment variable,
/// so the binary exports the configured key before the first call.
#[derive(Debug, Clone)]
pub struct OpenAiClient {
    request_timeout: Duration,
}

impl OpenAiClient {
    pub fn new(request_timeout: Duration) -> Self {
        Self { request_timeout }
    }
}

fn message(role: ChatCompletionMessageRole, content: &str) -> ChatCompletionMessage {
    ChatCompletionMessage {
        role,
        content: Some(content.to_string()),
        name: None,
        function_call: None,
        tool_call_id: None,
        tool_calls: None,
    }
}

#[async_trait]
impl CompletionClient for OpenAiClient {
    async fn complete(&self, request: CompletionRequest<'_>) -> Result<String> {
        let request_id = request.request_id;
        let messages = vec![
            message(ChatCompletionMessageRole::System, request.system_prompt),
            message(ChatCompletionMessageRole::User, request.user_text),
        ];

        debug!(
            "[{request_id}] Sending {} messages to {} (temperature {})",
            messages.len(),
            request.model,
            request.temperature
        );

        let secs = self.request_timeout.as_secs();
        let completion = timeout(
            self.request_timeout,
            ChatCompletion::builder(request.model, messages)
                .temperature(request.temperature)
                .create(),
        )
        .await
        .map_err(|_| anyhow::anyhow!("OpenAI request timed out after {secs} seconds"))??;

        let response = completion
            .choices
            .first()
            .and_then(|c| c.message.content.clone())
            .unwrap_or_default()
            .trim()
            .to_string();

        debug!("[{request_id}] Got response: {} chars", response.chars().count());

        if let Some(usage) = &completion.usage {
            debug!(
                "[{request_id}] Token usage: prompt={} completion={} total={}",
                usage.prompt_tokens, usage.completion_tokens, usage.total_tokens
            );
        }

        Ok(response)
    }
}

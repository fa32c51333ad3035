//! # Feature: Response Generator
//!
//! Sends the category persona and the user's text to the completion service.
//! Any failure is turned into a fixed apology that embeds the error detail, and that
//! apology is shown in place of the answer. No retry.
//!
//! - **Version**: 1.0.0
//! - **Since**: 1.0.0
//! - **Toggleable**: false
//!
//! ## Changelog
//! - 1.0.0: Initial release

use super::client::{CompletionClient, CompletionRequest, TEMPERATURE};
use crate::features::categories::Category;
use anyhow::Result;
use log::{debug, warn};
use std::sync::Arc;
use uuid::Uuid;

/// The user-visible fallback for a failed generation
pub fn apology(detail: &str) -> String {
    format!(
        "申し訳ありません。回答の生成中にエラーが発生しました。しばらく時間をおいてから再度お試しください。\nエラー詳細: {detail}"
    )
}

#[derive(Clone)]
pub struct ResponseGenerator {
    client: Arc<dyn CompletionClient>,
    model: String,
}

impl ResponseGenerator {
    pub fn new(client: Arc<dyn CompletionClient>, model: impl Into<String>) -> Self {
        Self {
            client,
            model: model.into(),
        }
    }

    pub fn model(&self) -> &str {
        &self.model
    }

    /// Ask the service for an answer, surfacing its error
    pub async fn try_generate(
        &self,
        category: &Category,
        text: &str,
        request_id: Uuid,
    ) -> Result<String> {
        debug!("[{request_id}] Generating answer as {} persona", category.name);
        self.client
            .complete(CompletionRequest {
                system_prompt: category.system_prompt,
                user_text: text,
                model: &self.model,
                temperature: TEMPERATURE,
                request_id,
            })
            .await
    }

    /// Ask the service for an answer; failures become [`apology`]
    pub async fn generate(&self, category: &Category, text: &str, request_id: Uuid) -> String {
        match self.try_generate(category, text, request_id).await {
            Ok(answer) => answer,
            Err(e) => {
                warn!("[{request_id}] Generation failed: {e:#}");
                apology(&format!("{e:#}"))
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::features::categories::CategoryRegistry;
    use async_trait::async_trait;
    use std::sync::Mutex;

    #[derive(Default)]
    struct RecordingClient {
        calls: Mutex<Vec<(String, String, String, f32)>>,
    }

    #[async_trait]
    impl CompletionClient for RecordingClient {
        async fn complete(&self, request: CompletionRequest<'_>) -> Result<String> {
            self.calls.lock().unwrap().push((
                request.system_prompt.to_string(),
                request.user_text.to_string(),
                request.model.to_string(),
                request.temperature,
            ));
            Ok("よく眠るために、寝る前のスマホを控えましょう。".to_string())
        }
    }

    struct FailingClient;

    #[async_trait]
    impl CompletionClient for FailingClient {
        async fn complete(&self, _request: CompletionRequest<'_>) -> Result<String> {
            Err(anyhow::anyhow!("connection refused"))
        }
    }

    #[tokio::test]
    async fn test_generate_sends_persona_and_text() {
        let client = Arc::new(RecordingClient::default());
        let generator = ResponseGenerator::new(client.clone(), "gpt-4o-mini");
        let registry = CategoryRegistry::new();
        let health = registry.get_category("健康").unwrap();

        let answer = generator
            .generate(health, "最近体調が悪くて眠れません", Uuid::new_v4())
            .await;

        assert_eq!(answer, "よく眠るために、寝る前のスマホを控えましょう。");
        let calls = client.calls.lock().unwrap();
        assert_eq!(calls.len(), 1);
        let (system, user, model, temperature) = &calls[0];
        assert_eq!(system, health.system_prompt);
        assert_eq!(user, "最近体調が悪くて眠れません");
        assert_eq!(model, "gpt-4o-mini");
        assert_eq!(*temperature, 0.0);
    }

    #[tokio::test]
    async fn test_failure_becomes_apology() {
        let generator = ResponseGenerator::new(Arc::new(FailingClient), "gpt-4o-mini");
        let registry = CategoryRegistry::new();
        let money = registry.get_category("お金").unwrap();

        let answer = generator
            .generate(money, "貯金が全然できません", Uuid::new_v4())
            .await;

        assert!(answer.starts_with("申し訳ありません。回答の生成中にエラーが発生しました。"));
        assert!(answer.ends_with("エラー詳細: connection refused"));
    }

    #[tokio::test]
    async fn test_try_generate_surfaces_error() {
        let generator = ResponseGenerator::new(Arc::new(FailingClient), "gpt-4o-mini");
        let registry = CategoryRegistry::new();
        let work = registry.get_category("仕事").unwrap();

        let result = generator.try_generate(work, "転職するか迷っています", Uuid::new_v4()).await;
        assert_eq!(result.unwrap_err().to_string(), "connection refused");
    }

    #[test]
    fn test_apology_format() {
        let text = apology("timeout");
        assert_eq!(
            text,
            "申し訳ありません。回答の生成中にエラーが発生しました。しばらく時間をおいてから再度お試しください。\nエラー詳細: timeout"
        );
    }
}

use std::sync::Arc;

use contracts::usecases::u601_convert_to_liquid::GenerationStage;

use super::error::{GenerationCause, GenerationError};
use super::prompts;
use crate::shared::llm::{ChatMessage, LlmProvider};

/// Строит промпты, вызывает модель и разбирает текстовые ответы
#[derive(Clone)]
pub struct PromptService {
    provider: Arc<dyn LlmProvider>,
}

impl PromptService {
    pub fn new(provider: Arc<dyn LlmProvider>) -> Self {
        Self { provider }
    }

    /// HTML/CSS/JS -> Liquid
    pub async fn convert(&self, html: &str, css: &str, js: &str) -> Result<String, GenerationError> {
        self.generate(
            GenerationStage::Conversion,
            prompts::conversion_prompt(html, css, js),
        )
        .await
    }

    /// Liquid -> описание
    pub async fn explain(&self, templated_code: &str) -> Result<String, GenerationError> {
        self.generate(
            GenerationStage::Explanation,
            prompts::explanation_prompt(templated_code),
        )
        .await
    }

    /// Liquid -> схема настроек (сырой текст, не парсится)
    pub async fn generate_schema(&self, templated_code: &str) -> Result<String, GenerationError> {
        self.generate(GenerationStage::Schema, prompts::schema_prompt(templated_code))
            .await
    }

    async fn generate(&self, stage: GenerationStage, prompt: String) -> Result<String, GenerationError> {
        let started = std::time::Instant::now();

        let response = match self.provider.chat_completion(vec![ChatMessage::user(prompt)]).await {
            Ok(response) => response,
            Err(e) => {
                tracing::error!(
                    stage = stage.as_str(),
                    provider = self.provider.provider_name(),
                    "Generation failed: {}",
                    e
                );
                return Err(GenerationError::new(stage, e));
            }
        };

        let text = response.content.trim();
        if text.is_empty() {
            tracing::error!(stage = stage.as_str(), "Generation returned an empty response");
            return Err(GenerationError::new(stage, GenerationCause::EmptyResponse));
        }

        tracing::info!(
            stage = stage.as_str(),
            model = %response.model,
            tokens = ?response.tokens_used,
            elapsed_ms = started.elapsed().as_millis() as u64,
            "Generation completed"
        );

        Ok(text.to_string())
    }
}

#[cfg(test)]
pub(crate) mod tests {
    use super::*;
    use crate::shared::llm::{ChatRole, LlmError, LlmResponse};
    use async_trait::async_trait;
    use std::collections::VecDeque;
    use std::sync::Mutex;

    /// Провайдер с заранее заданными ответами; запоминает полученные промпты
    pub struct ScriptedProvider {
        replies: Mutex<VecDeque<Result<String, LlmError>>>,
        pub prompts: Mutex<Vec<String>>,
    }

    impl ScriptedProvider {
        pub fn new(replies: Vec<Result<String, LlmError>>) -> Self {
            Self {
                replies: Mutex::new(replies.into()),
                prompts: Mutex::new(Vec::new()),
            }
        }

        pub fn prompts(&self) -> Vec<String> {
            self.prompts.lock().unwrap().clone()
        }
    }

    #[async_trait]
    impl LlmProvider for ScriptedProvider {
        async fn chat_completion(&self, messages: Vec<ChatMessage>) -> Result<LlmResponse, LlmError> {
            assert_eq!(messages.len(), 1);
            assert_eq!(messages[0].role, ChatRole::User);
            self.prompts.lock().unwrap().push(messages[0].content.clone());

            let reply = self
                .replies
                .lock()
                .unwrap()
                .pop_front()
                .unwrap_or_else(|| Err(LlmError::ApiError("no scripted reply".to_string())))?;
            Ok(LlmResponse {
                content: reply,
                tokens_used: Some(42),
                model: "scripted".to_string(),
                finish_reason: None,
            })
        }

        fn provider_name(&self) -> &str {
            "scripted"
        }
    }

    fn service(replies: Vec<Result<String, LlmError>>) -> (PromptService, Arc<ScriptedProvider>) {
        let provider = Arc::new(ScriptedProvider::new(replies));
        (PromptService::new(provider.clone()), provider)
    }

    #[tokio::test]
    async fn test_convert_trims_response_and_sends_sources() {
        let (service, provider) = service(vec![Ok("\n  <p>Hi</p>\n\n".to_string())]);

        let result = service.convert("<p>Hi</p>", "", "").await.unwrap();

        assert_eq!(result, "<p>Hi</p>");
        let prompts = provider.prompts();
        assert_eq!(prompts.len(), 1);
        assert!(prompts[0].contains("```html\n<p>Hi</p>\n```"));
    }

    #[tokio::test]
    async fn test_blank_response_is_error() {
        let (service, _) = service(vec![Ok("   \n".to_string())]);

        let err = service.explain("<p>Hi</p>").await.unwrap_err();

        assert_eq!(err.stage, GenerationStage::Explanation);
        assert!(matches!(err.cause, GenerationCause::EmptyResponse));
    }

    #[tokio::test]
    async fn test_provider_error_is_wrapped_with_stage() {
        let (service, _) = service(vec![Err(LlmError::RateLimitExceeded)]);

        let err = service.generate_schema("<p>Hi</p>").await.unwrap_err();

        assert_eq!(err.stage, GenerationStage::Schema);
        assert!(matches!(
            err.cause,
            GenerationCause::Provider(LlmError::RateLimitExceeded)
        ));
        assert!(err.to_string().starts_with("Failed to generate schema."));
    }

    #[tokio::test]
    async fn test_schema_text_is_not_validated() {
        let (service, _) = service(vec![Ok("{ not json".to_string())]);

        let schema = service.generate_schema("<p>Hi</p>").await.unwrap();

        assert_eq!(schema, "{ not json");
    }

    #[tokio::test]
    async fn test_failure_is_not_retried() {
        let (service, provider) = service(vec![
            Err(LlmError::ApiError("down".to_string())),
            Ok("<p>Hi</p>".to_string()),
        ]);

        assert!(service.convert("<p>Hi</p>", "", "").await.is_err());
        assert_eq!(provider.prompts().len(), 1);
    }
}

use super::types::{ChatMessage, ChatRole, LlmError, LlmProvider, LlmResponse};
use crate::shared::config::LlmConfig;
use async_openai::{
    config::OpenAIConfig,
    types::chat::{
        ChatCompletionRequestMessage, ChatCompletionRequestUserMessageArgs,
        CreateChatCompletionRequestArgs,
    },
    Client,
};
use async_trait::async_trait;

/// Провайдер для OpenAI-совместимых API (OpenAI, Gemini, Ollama и т.п.)
pub struct OpenAiProvider {
    client: Client<OpenAIConfig>,
    model: String,
    temperature: f32,
    max_tokens: u32,
}

impl OpenAiProvider {
    /// Создать с кастомным endpoint
    pub fn new_with_endpoint(
        api_endpoint: String,
        api_key: String,
        model: String,
        temperature: f64,
        max_tokens: i32,
    ) -> Self {
        let config = OpenAIConfig::new()
            .with_api_key(api_key)
            .with_api_base(api_endpoint);

        Self {
            client: Client::with_config(config),
            model,
            temperature: temperature as f32,
            max_tokens: max_tokens.max(1) as u32,
        }
    }

    pub fn from_config(config: &LlmConfig, api_key: String) -> Self {
        Self::new_with_endpoint(
            config.api_endpoint.trim_end_matches('/').to_string(),
            api_key,
            config.model.clone(),
            config.temperature,
            config.max_tokens,
        )
    }

    pub fn model(&self) -> &str {
        &self.model
    }

    /// Конвертировать наши сообщения в формат OpenAI
    fn convert_messages(
        &self,
        messages: Vec<ChatMessage>,
    ) -> Result<Vec<ChatCompletionRequestMessage>, LlmError> {
        messages
            .into_iter()
            .map(|msg| {
                let converted: ChatCompletionRequestMessage = match msg.role {
                    ChatRole::User => ChatCompletionRequestUserMessageArgs::default()
                        .content(msg.content)
                        .build()
                        .map_err(|e| LlmError::InvalidRequest(e.to_string()))?
                        .into(),
                };
                Ok(converted)
            })
            .collect()
    }

    /// Модели без поддержки кастомного temperature / max_completion_tokens
    fn supports_advanced_params(model_id: &str) -> bool {
        !(model_id.starts_with("gpt-5") || model_id.starts_with("o1-") || model_id.starts_with("o3-"))
    }

    /// Разложить ошибку клиента по типам
    fn classify_error(err_str: String) -> LlmError {
        let lower = err_str.to_lowercase();
        if lower.contains("401") || lower.contains("authentication") {
            LlmError::AuthError(err_str)
        } else if lower.contains("429") || lower.contains("rate limit") {
            LlmError::RateLimitExceeded
        } else {
            LlmError::ApiError(err_str)
        }
    }
}

#[async_trait]
impl LlmProvider for OpenAiProvider {
    async fn chat_completion(&self, messages: Vec<ChatMessage>) -> Result<LlmResponse, LlmError> {
        let openai_messages = self.convert_messages(messages)?;

        let mut request_builder = CreateChatCompletionRequestArgs::default();
        request_builder.model(&self.model).messages(openai_messages);

        if Self::supports_advanced_params(&self.model) {
            request_builder
                .temperature(self.temperature)
                .max_completion_tokens(self.max_tokens);
        }

        let request = request_builder
            .build()
            .map_err(|e| LlmError::InvalidRequest(e.to_string()))?;

        let response = self
            .client
            .chat()
            .create(request)
            .await
            .map_err(|e| Self::classify_error(e.to_string()))?;

        let choice = response
            .choices
            .first()
            .ok_or_else(|| LlmError::ApiError("No response from API".to_string()))?;

        Ok(LlmResponse {
            content: choice.message.content.clone().unwrap_or_default(),
            tokens_used: response.usage.as_ref().map(|u| u.total_tokens as i32),
            model: response.model.clone(),
            finish_reason: choice.finish_reason.as_ref().map(|r| format!("{:?}", r)),
        })
    }

    fn provider_name(&self) -> &str {
        "OpenAI-compatible"
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_advanced_params_support() {
        assert!(OpenAiProvider::supports_advanced_params("gemini-2.5-flash"));
        assert!(OpenAiProvider::supports_advanced_params("gpt-4o"));
        assert!(!OpenAiProvider::supports_advanced_params("gpt-5-mini"));
        assert!(!OpenAiProvider::supports_advanced_params("o3-mini"));
    }

    #[test]
    fn test_prompt_is_sent_as_user_message() {
        let provider = OpenAiProvider::new_with_endpoint(
            "http://localhost:11434/v1".to_string(),
            "test-key".to_string(),
            "gemini-2.5-flash".to_string(),
            0.7,
            8192,
        );

        let converted = provider
            .convert_messages(vec![ChatMessage::user("Liquid File Code:")])
            .unwrap();

        assert_eq!(converted.len(), 1);
        assert!(matches!(converted[0], ChatCompletionRequestMessage::User(_)));
    }

    #[test]
    fn test_classify_error() {
        assert!(matches!(
            OpenAiProvider::classify_error("status 401 Unauthorized".to_string()),
            LlmError::AuthError(_)
        ));
        assert!(matches!(
            OpenAiProvider::classify_error("429 Too Many Requests".to_string()),
            LlmError::RateLimitExceeded
        ));
        assert!(matches!(
            OpenAiProvider::classify_error("connection reset".to_string()),
            LlmError::ApiError(_)
        ));
    }
}

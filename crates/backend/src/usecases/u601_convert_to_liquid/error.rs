use contracts::usecases::u601_convert_to_liquid::{GenerationErrorBody, GenerationStage};
use thiserror::Error;

use crate::shared::llm::LlmError;

/// Причина сбоя одного этапа генерации
#[derive(Debug, Error)]
pub enum GenerationCause {
    #[error(transparent)]
    Provider(#[from] LlmError),

    #[error("Received an empty response from the API.")]
    EmptyResponse,
}

/// Сбой этапа генерации. Автоматических повторов нет.
#[derive(Debug, Error)]
#[error("{}. Please check the API connection and your input.", failure_message(.stage))]
pub struct GenerationError {
    pub stage: GenerationStage,
    #[source]
    pub cause: GenerationCause,
}

fn failure_message(stage: &GenerationStage) -> &'static str {
    stage.failure_message()
}

impl GenerationError {
    pub fn new(stage: GenerationStage, cause: impl Into<GenerationCause>) -> Self {
        Self {
            stage,
            cause: cause.into(),
        }
    }

    pub fn to_body(&self) -> GenerationErrorBody {
        GenerationErrorBody {
            stage: self.stage,
            message: self.to_string(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_message_does_not_leak_cause() {
        let err = GenerationError::new(
            GenerationStage::Conversion,
            LlmError::AuthError("invalid key sk-123".to_string()),
        );
        assert_eq!(
            err.to_string(),
            "Failed to generate Liquid file. Please check the API connection and your input."
        );
        assert!(!err.to_body().message.contains("sk-123"));
    }

    #[test]
    fn test_body_carries_stage() {
        let err = GenerationError::new(GenerationStage::Schema, GenerationCause::EmptyResponse);
        let body = err.to_body();
        assert_eq!(body.stage, GenerationStage::Schema);
        assert_eq!(
            body.message,
            "Failed to generate schema. Please check the API connection and your input."
        );
    }
}

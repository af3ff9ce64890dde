use serde::{Deserialize, Serialize};

/// Этап генерации. Каждому этапу соответствует свой промпт.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum GenerationStage {
    /// HTML/CSS/JS -> Liquid
    Conversion,
    /// Liquid -> текстовое описание
    Explanation,
    /// Liquid -> JSON схема настроек секции
    Schema,
}

impl GenerationStage {
    /// Сообщение, которое видит пользователь при сбое этапа
    pub fn failure_message(&self) -> &'static str {
        match self {
            GenerationStage::Conversion => "Failed to generate Liquid file",
            GenerationStage::Explanation => "Failed to generate explanation",
            GenerationStage::Schema => "Failed to generate schema",
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            GenerationStage::Conversion => "conversion",
            GenerationStage::Explanation => "explanation",
            GenerationStage::Schema => "schema",
        }
    }
}

/// Успешный ответ любого из трёх эндпоинтов
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct GenerationResponse {
    pub text: String,
}

/// Тело ответа 502 при сбое генерации
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct GenerationErrorBody {
    pub stage: GenerationStage,
    pub message: String,
}

/// Результат одной попытки конвертации.
///
/// `schema` хранится как текст: модель может вернуть невалидный JSON,
/// он показывается как есть.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ConversionResult {
    pub templated_code: String,
    pub explanation: String,
    pub schema: String,
}

impl ConversionResult {
    pub fn has_content(&self) -> bool {
        !self.templated_code.is_empty() || !self.explanation.is_empty() || !self.schema.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_stage_serializes_snake_case() {
        let body = GenerationErrorBody {
            stage: GenerationStage::Schema,
            message: "boom".to_string(),
        };
        let json = serde_json::to_value(&body).unwrap();
        assert_eq!(json["stage"], "schema");
        assert_eq!(json["message"], "boom");
    }

    #[test]
    fn test_failure_messages() {
        assert_eq!(
            GenerationStage::Conversion.failure_message(),
            "Failed to generate Liquid file"
        );
        assert_eq!(
            GenerationStage::Explanation.failure_message(),
            "Failed to generate explanation"
        );
        assert_eq!(GenerationStage::Schema.failure_message(), "Failed to generate schema");
    }

    #[test]
    fn test_has_content() {
        assert!(!ConversionResult::default().has_content());
        let result = ConversionResult {
            schema: "{}".to_string(),
            ..Default::default()
        };
        assert!(result.has_content());
    }
}

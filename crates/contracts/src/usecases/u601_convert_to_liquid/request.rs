use serde::{Deserialize, Serialize};

use super::source::SourceDocument;

/// Тело запроса POST /api/u601/convert
pub type ConvertRequest = SourceDocument;

/// Тело запросов POST /api/u601/explain и POST /api/u601/schema
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DetailRequest {
    /// Liquid-код, полученный на первом шаге
    pub templated_code: String,
}

impl DetailRequest {
    pub fn new(templated_code: impl Into<String>) -> Self {
        Self {
            templated_code: templated_code.into(),
        }
    }
}

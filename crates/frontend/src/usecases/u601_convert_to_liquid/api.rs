use async_trait::async_trait;
use contracts::usecases::u601_convert_to_liquid::{
    DetailRequest, GenerationErrorBody, GenerationResponse, SourceDocument,
};
use gloo_net::http::{Request, Response};
use serde::Serialize;

use super::orchestrator::ConversionApi;
use crate::shared::api_utils::api_url;

/// Клиент эндпоинтов /api/u601/*
#[derive(Clone, Copy, Default)]
pub struct HttpConversionApi;

async fn post_generation<T: Serialize>(path: &str, body: &T) -> Result<String, String> {
    let response = Request::post(&api_url(path))
        .json(body)
        .map_err(|e| format!("Failed to serialize request: {}", e))?
        .send()
        .await
        .map_err(|e| format!("Failed to send request: {}", e))?;

    if !response.ok() {
        return Err(error_message(response).await);
    }

    response
        .json::<GenerationResponse>()
        .await
        .map(|r| r.text)
        .map_err(|e| format!("Failed to parse response: {}", e))
}

/// Текст ошибки из тела 502, иначе код статуса
async fn error_message(response: Response) -> String {
    let status = response.status();
    match response.json::<GenerationErrorBody>().await {
        Ok(body) => body.message,
        Err(_) => format!("Request failed: HTTP {}", status),
    }
}

#[async_trait(?Send)]
impl ConversionApi for HttpConversionApi {
    async fn convert(&self, source: &SourceDocument) -> Result<String, String> {
        post_generation("/api/u601/convert", source).await
    }

    async fn explain(&self, templated_code: &str) -> Result<String, String> {
        post_generation("/api/u601/explain", &DetailRequest::new(templated_code)).await
    }

    async fn generate_schema(&self, templated_code: &str) -> Result<String, String> {
        post_generation("/api/u601/schema", &DetailRequest::new(templated_code)).await
    }
}

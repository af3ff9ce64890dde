use axum::{extract::State, http::StatusCode, Json};

use contracts::usecases::u601_convert_to_liquid::{
    ConvertRequest, DetailRequest, GenerationErrorBody, GenerationResponse,
};

use crate::usecases::u601_convert_to_liquid::{GenerationError, PromptService};

type GenerationResult = Result<Json<GenerationResponse>, (StatusCode, Json<GenerationErrorBody>)>;

fn into_response(result: Result<String, GenerationError>) -> GenerationResult {
    match result {
        Ok(text) => Ok(Json(GenerationResponse { text })),
        Err(e) => Err((StatusCode::BAD_GATEWAY, Json(e.to_body()))),
    }
}

/// POST /api/u601/convert
pub async fn convert(
    State(service): State<PromptService>,
    Json(req): Json<ConvertRequest>,
) -> GenerationResult {
    tracing::debug!(
        html_len = req.html.len(),
        css_len = req.css.len(),
        js_len = req.js.len(),
        "u601 convert requested"
    );
    into_response(service.convert(&req.html, &req.css, &req.js).await)
}

/// POST /api/u601/explain
pub async fn explain(
    State(service): State<PromptService>,
    Json(req): Json<DetailRequest>,
) -> GenerationResult {
    into_response(service.explain(&req.templated_code).await)
}

/// POST /api/u601/schema
pub async fn schema(
    State(service): State<PromptService>,
    Json(req): Json<DetailRequest>,
) -> GenerationResult {
    into_response(service.generate_schema(&req.templated_code).await)
}

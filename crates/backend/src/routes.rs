use axum::{
    middleware,
    routing::{get, post},
    Router,
};
use std::path::PathBuf;
use tower_http::cors::{Any, CorsLayer};
use tower_http::services::{ServeDir, ServeFile};

use crate::handlers;
use crate::system::middleware::request_logger::request_logger;
use crate::usecases::u601_convert_to_liquid::PromptService;

/// Роуты API (без статики и middleware)
pub fn api_routes(service: PromptService) -> Router {
    Router::new()
        .route("/health", get(|| async { "ok" }))
        // UseCase u601: Convert to Liquid
        .route(
            "/api/u601/convert",
            post(handlers::u601_convert_to_liquid::convert),
        )
        .route(
            "/api/u601/explain",
            post(handlers::u601_convert_to_liquid::explain),
        )
        .route(
            "/api/u601/schema",
            post(handlers::u601_convert_to_liquid::schema),
        )
        .with_state(service)
}

/// Конфигурация всех роутов приложения
pub fn configure_routes(service: PromptService, static_dir: PathBuf) -> Router {
    let cors = CorsLayer::new()
        .allow_origin(Any)
        .allow_methods(Any)
        .allow_headers(Any);

    let index = static_dir.join("index.html");
    let frontend = ServeDir::new(static_dir).not_found_service(ServeFile::new(index));

    api_routes(service)
        .fallback_service(frontend)
        .layer(cors)
        .layer(middleware::from_fn(request_logger))
}

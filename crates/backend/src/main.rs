pub mod handlers;
pub mod routes;
pub mod shared;
pub mod system;
pub mod usecases;

use std::net::SocketAddr;
use std::sync::Arc;

use shared::llm::OpenAiProvider;
use usecases::u601_convert_to_liquid::PromptService;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    system::tracing::initialize()?;

    let config = shared::config::load_config()?;
    let api_key = shared::config::read_api_key(&config.llm)?;

    let provider = OpenAiProvider::from_config(&config.llm, api_key);
    tracing::info!(
        "LLM provider: {} at {}",
        provider.model(),
        config.llm.api_endpoint
    );
    let service = PromptService::new(Arc::new(provider));

    let static_dir = shared::config::get_static_dir(&config);
    tracing::info!("Serving frontend from {}", static_dir.display());

    let app = routes::configure_routes(service, static_dir);

    let addr: SocketAddr = format!("{}:{}", config.server.host, config.server.port).parse()?;
    let listener = tokio::net::TcpListener::bind(addr).await?;
    tracing::info!("Listening on http://{}", addr);

    axum::serve(listener, app).await?;
    Ok(())
}

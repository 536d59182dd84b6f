mod config;
mod export;
mod gemini;
mod models;
mod normalize;
mod pipeline;
mod prompt;
mod routes;
mod schema;

use axum::{Router, routing::post};
use routes::{export_artifact, export_document, generate_code, generator_status, AppState};
use std::net::SocketAddr;
use tracing_subscriber::{fmt, EnvFilter};
use std::sync::Arc;
use tower_http::cors::{CorsLayer, Any};

use crate::{
    config::Config,
    gemini::{CompletionBackend, GeminiClient, OfflineBackend},
    pipeline::CodeGenerator,
    prompt::PromptSpec,
};

pub fn app(state: AppState) -> Router {
    Router::new()
        .route("/api/generate", post(generate_code).get(generator_status))
        .route("/api/export", post(export_document))
        .route("/api/export/:artifact", post(export_artifact))
        .layer(
            CorsLayer::new()
                .allow_origin(Any)
                .allow_methods(Any)
                .allow_headers(Any)
        )
        .with_state(state)
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // Load environment variables from .env file
    dotenv::dotenv().ok();

    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));
    fmt().with_env_filter(filter).init();

    let config = Config::from_env();
    let backend: Arc<dyn CompletionBackend> = if config.is_demo() {
        tracing::warn!("GEMINI_API_KEY not set, serving canned demo output");
        Arc::new(OfflineBackend)
    } else {
        tracing::info!("Using API key: {}..., model {}", config.key_preview(), config.model);
        Arc::new(GeminiClient::new(&config)?)
    };

    let spec = Arc::new(PromptSpec::compile()?);
    let state = AppState { generator: CodeGenerator::new(backend, spec) };

    let addr = SocketAddr::from(([0, 0, 0, 0], config.port));
    tracing::info!(%addr, "Starting server");
    let listener = tokio::net::TcpListener::bind(addr).await?;
    axum::serve(listener, app(state)).await?;
    Ok(())
}

use std::sync::Arc;

use anyhow::Result;
use axum::{
    routing::{get, post},
    Router,
};
use tracing::info;
use tracing_subscriber::EnvFilter;

use civicpulse_common::Config;
use civicpulse_core::Pipeline;
use serper_client::SerperClient;

mod collaborators;
mod llm;
mod rest;

use collaborators::{LlmClassifier, LlmReporter, SerperSource};
use llm::LlmClient;

pub struct AppState {
    pub pipeline: Pipeline,
}

#[tokio::main]
async fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env().add_directive("civicpulse=info".parse()?))
        .init();

    let config = Config::from_env();

    let source = SerperSource::new(SerperClient::new(&config.serper_url, &config.serper_api_key));
    let classifier = LlmClassifier::new(LlmClient::new(&config.anthropic_api_key));
    let reporter = LlmReporter::new(LlmClient::new(&config.anthropic_api_key));

    let pipeline = Pipeline::new(Arc::new(source), Arc::new(classifier), Arc::new(reporter));
    let state = Arc::new(AppState { pipeline });

    let app = Router::new()
        // Health check
        .route("/", get(|| async { "ok" }))
        // Full analysis cycle
        .route("/analyze", post(rest::api_analyze))
        // Core-only surfaces
        .route("/prioritize", post(rest::api_prioritize))
        .route("/score", post(rest::api_score))
        .with_state(state)
        // Logging layer: method + path only
        .layer(
            tower_http::trace::TraceLayer::new_for_http().make_span_with(
                |request: &axum::http::Request<_>| {
                    tracing::info_span!(
                        "http_request",
                        method = %request.method(),
                        path = %request.uri().path(),
                    )
                },
            ),
        );

    let addr = format!("{}:{}", config.web_host, config.web_port);
    info!("CivicPulse API starting on {addr}");

    let listener = tokio::net::TcpListener::bind(&addr).await?;
    axum::serve(listener, app).await?;

    Ok(())
}

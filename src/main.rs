use anyhow::Context;
use mood_engine::api::{build_router, AppState};
use mood_engine::engine::MoodEngine;
use mood_engine::enrichment::HttpEnrichmentClient;
use mood_engine::EngineConfig;
use std::sync::Arc;
use tracing::info;
use tracing_subscriber::EnvFilter;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    dotenvy::dotenv().ok();

    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .init();

    let config = EngineConfig::default().from_env();
    info!(
        bind_addr = %config.bind_addr,
        provider_url = %config.provider.base_url,
        "starting mood engine"
    );

    let provider = Arc::new(
        HttpEnrichmentClient::new(config.provider.clone())
            .context("failed to build enrichment client")?,
    );
    let engine = Arc::new(MoodEngine::new(provider, config.provider.clone()));

    let router = build_router(AppState { engine }, config.max_body_bytes);

    let listener = tokio::net::TcpListener::bind(&config.bind_addr)
        .await
        .with_context(|| format!("failed to bind {}", config.bind_addr))?;
    axum::serve(listener, router).await.context("server error")?;

    Ok(())
}

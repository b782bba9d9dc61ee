mod catalog;
mod config;
mod errors;
mod judge_client;
mod routes;
mod state;
mod submission;

use std::net::SocketAddr;
use std::sync::Arc;
use std::time::Duration;

use anyhow::{Context, Result};
use axum::http::{HeaderValue, Method};
use tower_http::{
    cors::{Any, CorsLayer},
    trace::TraceLayer,
};
use tracing::{info, warn};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

use crate::catalog::ProblemCatalog;
use crate::config::Config;
use crate::judge_client::Judge0Client;
use crate::routes::build_router;
use crate::state::AppState;

#[tokio::main]
async fn main() -> Result<()> {
    // Load configuration first (fails on malformed env vars)
    let config = Config::from_env()?;

    // Initialize structured logging
    tracing_subscriber::registry()
        .with(EnvFilter::try_from_default_env().unwrap_or_else(|_| {
            EnvFilter::new(format!(
                "{}={}",
                env!("CARGO_PKG_NAME").replace('-', "_"),
                &config.rust_log
            ))
        }))
        .with(tracing_subscriber::fmt::layer())
        .init();

    info!("Starting practice API v{}", env!("CARGO_PKG_VERSION"));

    // Problem catalog: file override or built-in set
    let catalog = match &config.catalog_path {
        Some(path) => ProblemCatalog::from_json_file(path)
            .with_context(|| format!("Invalid catalog file {}", path.display()))?,
        None => ProblemCatalog::builtin().context("Built-in catalog failed validation")?,
    };
    if catalog.is_empty() {
        warn!("Problem catalog is empty; every submission will 404");
    }
    info!("Problem catalog ready ({} problems)", catalog.len());

    // Judge client
    let judge = Judge0Client::new(
        config.judge_url.clone(),
        config.judge_api_key.clone(),
        Duration::from_secs(config.judge_timeout_secs),
    )
    .context("Failed to build judge HTTP client")?;
    info!(
        "Judge client initialized ({}; languages: {})",
        config.judge_url,
        judge_client::languages::supported_languages()
            .collect::<Vec<_>>()
            .join(", ")
    );

    let state = AppState {
        catalog: Arc::new(catalog),
        judge: Arc::new(judge),
    };

    let app = build_router(state)
        .layer(TraceLayer::new_for_http())
        .layer(cors_layer(&config.cors_origins)?);

    let addr: SocketAddr = format!("0.0.0.0:{}", config.port).parse()?;
    info!("Listening on {addr}");

    let listener = tokio::net::TcpListener::bind(addr).await?;
    axum::serve(listener, app).await?;

    Ok(())
}

/// Permissive when no origins are configured; otherwise an allow-list for GET/POST.
fn cors_layer(origins: &[String]) -> Result<CorsLayer> {
    if origins.is_empty() {
        return Ok(CorsLayer::permissive());
    }

    let origins = origins
        .iter()
        .map(|o| {
            o.parse::<HeaderValue>()
                .with_context(|| format!("Invalid CORS origin '{o}'"))
        })
        .collect::<Result<Vec<_>>>()?;

    Ok(CorsLayer::new()
        .allow_origin(origins)
        .allow_methods([Method::GET, Method::POST])
        .allow_headers(Any))
}

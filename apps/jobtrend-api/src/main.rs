mod analysis;
mod chatbot;
mod config;
mod errors;
mod extractors;
mod market;
mod response;
mod resume;
mod routes;
mod session;
mod state;

use std::net::SocketAddr;
use std::sync::Arc;

use anyhow::{Context, Result};
use axum::http::{header, HeaderValue, Method};
use tower_http::{cors::CorsLayer, trace::TraceLayer};
use tracing::{info, warn};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

use crate::config::{Config, Environment};
use crate::resume::extract::PdfTextExtractor;
use crate::routes::build_router;
use crate::state::AppState;

#[tokio::main]
async fn main() -> Result<()> {
    let config = Config::from_env()?;

    // Initialize structured logging
    tracing_subscriber::registry()
        .with(EnvFilter::try_from_default_env().unwrap_or_else(|_| {
            EnvFilter::new(format!(
                "{}={},tower_http={}",
                env!("CARGO_CRATE_NAME"),
                &config.rust_log,
                &config.rust_log
            ))
        }))
        .with(tracing_subscriber::fmt::layer())
        .init();

    info!(
        "Starting JobTrend API v{} ({:?})",
        env!("CARGO_PKG_VERSION"),
        config.environment
    );

    let extractor = Arc::new(PdfTextExtractor::new(config.upload_dir.clone()));
    info!(
        "Resume uploads staged in {} (limit {} bytes)",
        config.upload_dir.display(),
        config.max_upload_bytes
    );

    let cors = build_cors(&config)?;

    let state = AppState {
        config: config.clone(),
        extractor,
    };

    let app = build_router(state)
        .layer(TraceLayer::new_for_http())
        .layer(cors);

    let addr: SocketAddr = format!("0.0.0.0:{}", config.port).parse()?;
    info!("Listening on {addr}");

    let listener = tokio::net::TcpListener::bind(addr).await?;
    axum::serve(listener, app).await?;

    Ok(())
}

/// Credentialed CORS restricted to the configured frontend origins.
fn build_cors(config: &Config) -> Result<CorsLayer> {
    let origins = config
        .cors_origins
        .iter()
        .map(|origin| {
            origin
                .parse::<HeaderValue>()
                .with_context(|| format!("invalid CORS origin '{origin}'"))
        })
        .collect::<Result<Vec<_>>>()?;

    if config.environment == Environment::Production
        && config.cors_origins.iter().any(|o| o.contains("localhost"))
    {
        warn!("CORS allows a localhost origin in production");
    }

    Ok(CorsLayer::new()
        .allow_origin(origins)
        .allow_credentials(true)
        .allow_methods([Method::GET, Method::POST])
        .allow_headers([header::CONTENT_TYPE]))
}

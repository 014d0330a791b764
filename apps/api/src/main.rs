mod config;
mod enhance;
mod errors;
mod letter;
mod llm_client;
mod lookup;
mod models;
mod routes;
mod state;

use anyhow::Result;
use std::net::SocketAddr;
use std::sync::Arc;
use tower_http::{catch_panic::CatchPanicLayer, cors::CorsLayer, trace::TraceLayer};
use tracing::{info, warn};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

use crate::config::Config;
use crate::llm_client::{LlmClient, TextGenerator};
use crate::lookup::civic_client::RepresentClient;
use crate::routes::{build_router, static_files};
use crate::state::AppState;

#[tokio::main]
async fn main() -> Result<()> {
    // Load configuration first
    let config = Config::from_env()?;

    // Initialize structured logging
    tracing_subscriber::registry()
        .with(EnvFilter::try_from_default_env().unwrap_or_else(|_| {
            EnvFilter::new(format!("{}={}", env!("CARGO_PKG_NAME"), &config.rust_log))
        }))
        .with(tracing_subscriber::fmt::layer())
        .init();

    info!("Starting Letterdesk API v{}", env!("CARGO_PKG_VERSION"));

    // Initialize civic-data client
    let represent = RepresentClient::new(&config.represent_api_url)?;
    info!("Civic-data client initialized ({})", config.represent_api_url);

    // Initialize LLM client, if a credential is present
    let text_generator: Option<Arc<dyn TextGenerator>> = match &config.anthropic_api_key {
        Some(key) => {
            let llm = LlmClient::new(key.clone())?;
            info!("LLM client initialized (model: {})", llm_client::MODEL);
            Some(Arc::new(llm))
        }
        None => {
            warn!("ANTHROPIC_API_KEY not set; /api/enhance will return 500");
            None
        }
    };

    // Build app state
    let state = AppState {
        representatives: Arc::new(represent),
        text_generator,
    };

    // Build router
    let app = build_router(state)
        .fallback_service(static_files(&config.static_dir))
        .layer(CatchPanicLayer::custom(errors::panic_response))
        .layer(TraceLayer::new_for_http())
        .layer(CorsLayer::permissive()); // TODO: restrict origins once the front end has a fixed host

    let addr: SocketAddr = format!("0.0.0.0:{}", config.port).parse()?;
    info!("Listening on {addr}");

    let listener = tokio::net::TcpListener::bind(addr).await?;
    axum::serve(listener, app).await?;

    Ok(())
}

//! Precis Server
//!
//! HTTP service exposing keyword extraction and extractive summarization.
//! Both endpoints accept `{"text": string}` where the text may contain HTML.

#![warn(missing_docs)]

pub mod config;
pub mod handlers;
pub mod observability;

use config::ServerConfig;
use handlers::{create_router, AppState};
use precis_nlp::{KeywordExtractor, LanguageModel};
use precis_summarizer::TextRankSummarizer;
use std::sync::Arc;
use tokio::net::TcpListener;
use tracing::{info, warn};

/// Server error
#[derive(Debug, thiserror::Error)]
pub enum ServerError {
    /// Configuration error
    #[error("Configuration error: {0}")]
    Config(#[from] config::ConfigError),

    /// Pipeline construction error
    #[error("Failed to build text pipeline: {0}")]
    Pipeline(String),

    /// Server binding error
    #[error("Failed to bind server: {0}")]
    Bind(#[from] std::io::Error),

    /// Server error
    #[error("Server error: {0}")]
    Server(String),
}

/// Build the shared pipelines from configuration
pub fn build_state(config: &ServerConfig) -> Result<AppState, ServerError> {
    let model = Arc::new(LanguageModel::english());
    let keywords = KeywordExtractor::try_new(model, config.keywords.clone())
        .map_err(|e| ServerError::Pipeline(e.to_string()))?;
    let summarizer = TextRankSummarizer::new(config.summarizer.clone())
        .map_err(|e| ServerError::Pipeline(e.to_string()))?;

    Ok(AppState {
        keywords: Arc::new(keywords),
        summarizer: Arc::new(summarizer),
        max_text_length: config.max_text_length,
        max_body_bytes: config.max_body_bytes,
    })
}

/// Start the HTTP server
///
/// Initializes tracing, builds the pipelines and serves until Ctrl-C.
pub async fn start_server(config: ServerConfig) -> Result<(), ServerError> {
    if let Err(e) = observability::init_tracing(&config.logging) {
        eprintln!("Warning: tracing already initialized: {}", e);
    }

    info!("Starting Precis server");
    info!("Bind address: {}", config.bind_addr());
    match config.max_text_length {
        Some(max) => info!("Max text length: {} chars", max),
        None => info!("Max text length: unlimited"),
    }
    match config.max_body_bytes {
        Some(max) => info!("Max body size: {} bytes", max),
        None => info!("Max body size: unlimited"),
    }

    let state = build_state(&config)?;
    let app = create_router(state);

    let listener = TcpListener::bind(&config.bind_addr()).await?;
    info!("Server listening on {}", config.bind_addr());

    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await
        .map_err(|e| ServerError::Server(e.to_string()))?;

    info!("Server stopped");
    Ok(())
}

async fn shutdown_signal() {
    if let Err(e) = tokio::signal::ctrl_c().await {
        warn!("Failed to listen for shutdown signal: {}", e);
        std::future::pending::<()>().await;
    }
    info!("Shutdown signal received");
}

// Copyright (c) 2025 Fabstir
// SPDX-License-Identifier: BUSL-1.1
use std::sync::Arc;

use anyhow::{Context, Result};
use axum::{
    extract::DefaultBodyLimit,
    routing::{get, post},
    Router,
};
use tower_http::{cors::CorsLayer, trace::TraceLayer};

use super::{analyze_logo::analyze_logo_handler, health::health_handler};
use crate::config::ServiceConfig;
use crate::vision::{TesseractRecognizer, TextRecognizer};

/// Headroom for multipart boundaries and part headers on top of the file cap
const MULTIPART_OVERHEAD_BYTES: usize = 64 * 1024;

/// Shared, read-only state handed to every handler
#[derive(Clone)]
pub struct AppState {
    pub config: Arc<ServiceConfig>,
    pub recognizer: Arc<dyn TextRecognizer>,
}

impl AppState {
    /// State backed by the Tesseract CLI described in `config`
    pub fn new(config: ServiceConfig) -> Self {
        let recognizer = TesseractRecognizer::new(config.ocr_config());
        Self::with_recognizer(config, Arc::new(recognizer))
    }

    pub fn with_recognizer(config: ServiceConfig, recognizer: Arc<dyn TextRecognizer>) -> Self {
        Self {
            config: Arc::new(config),
            recognizer,
        }
    }
}

pub fn create_app(state: AppState) -> Router {
    let body_limit = state
        .config
        .max_upload_bytes
        .saturating_add(MULTIPART_OVERHEAD_BYTES);

    Router::new()
        // Health check
        .route("/health", get(health_handler))
        // Logo analysis
        .route("/analyze-logo", post(analyze_logo_handler))
        .layer(DefaultBodyLimit::max(body_limit))
        .layer(TraceLayer::new_for_http())
        .layer(CorsLayer::permissive())
        .with_state(state)
}

/// Bind the configured address and serve until Ctrl-C
pub async fn start_server(config: ServiceConfig) -> Result<()> {
    let addr = config.bind_addr();
    let state = AppState::new(config);
    let app = create_app(state);

    let listener = tokio::net::TcpListener::bind(addr)
        .await
        .with_context(|| format!("failed to bind {}", addr))?;

    tracing::info!("API server listening on {}", addr);

    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await
        .context("HTTP server error")?;

    tracing::info!("API server stopped");
    Ok(())
}

async fn shutdown_signal() {
    if let Err(e) = tokio::signal::ctrl_c().await {
        tracing::warn!("Failed to listen for shutdown signal: {}", e);
        std::future::pending::<()>().await;
    }
    tracing::info!("Shutdown signal received");
}

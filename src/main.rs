// Copyright (c) 2025 Fabstir
// SPDX-License-Identifier: BUSL-1.1
use anyhow::Result;
use clap::Parser;
use logo_analyzer::{start_server, version, ServiceConfig};
use std::env;

#[tokio::main]
async fn main() -> Result<()> {
    // Load .env before clap reads env-backed flags
    dotenv::dotenv().ok();

    // Initialize tracing subscriber for logging
    if env::var("RUST_LOG").is_err() {
        env::set_var("RUST_LOG", "info");
    }
    tracing_subscriber::fmt::init();

    let config = ServiceConfig::parse();

    tracing::info!("Starting {}", version::get_version_string());
    tracing::info!("Features: {}", version::FEATURES.join(", "));
    tracing::info!(
        "OCR: {} (lang {}, timeout {}s)",
        config.tesseract_cmd.display(),
        config.ocr_language,
        config.ocr_timeout_secs
    );
    tracing::info!("Endpoints:");
    tracing::info!("  Health:       GET  http://{}/health", config.bind_addr());
    tracing::info!("  Analyze logo: POST http://{}/analyze-logo", config.bind_addr());

    start_server(config).await
}

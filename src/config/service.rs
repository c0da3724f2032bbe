// Copyright (c) 2025 Fabstir
// SPDX-License-Identifier: BUSL-1.1
//! Process-wide service configuration
//!
//! Parsed once at startup from command-line flags, falling back to
//! environment variables (a `.env` file is loaded first by `main`).
//! Nothing reads the environment after this point; handlers receive the
//! parsed value through the router state.

use std::net::{IpAddr, Ipv4Addr, SocketAddr};
use std::path::PathBuf;
use std::time::Duration;

use clap::Parser;

use crate::vision::ocr::OcrConfig;
use crate::vision::palette::PaletteConfig;

/// Port the original deployment listens on
pub const DEFAULT_PORT: u16 = 5001;

/// Maximum upload size (10MB)
pub const DEFAULT_MAX_UPLOAD_BYTES: usize = 10 * 1024 * 1024;

/// Logo analyzer configuration
#[derive(Parser, Debug, Clone)]
#[command(name = "logo-analyzer")]
#[command(about = "Reads a brand name and color palette from an uploaded logo", long_about = None)]
pub struct ServiceConfig {
    /// Address to bind the HTTP listener to
    #[arg(long, env = "LOGO_ANALYZER_HOST", default_value_t = IpAddr::V4(Ipv4Addr::LOCALHOST))]
    pub host: IpAddr,

    /// Port to bind the HTTP listener to
    #[arg(long, env = "LOGO_ANALYZER_PORT", default_value_t = DEFAULT_PORT)]
    pub port: u16,

    /// Path to the Tesseract OCR binary
    #[arg(long, env = "TESSERACT_CMD", default_value = "tesseract")]
    pub tesseract_cmd: PathBuf,

    /// Tesseract language pack (passed as `-l`)
    #[arg(long, env = "OCR_LANGUAGE", default_value = "eng")]
    pub ocr_language: String,

    /// Seconds to wait for Tesseract before giving up on recognition
    #[arg(long, env = "OCR_TIMEOUT_SECS", default_value_t = 30)]
    pub ocr_timeout_secs: u64,

    /// Directory for palette scratch files (system temp dir when unset)
    #[arg(long, env = "LOGO_ANALYZER_TEMP_DIR")]
    pub temp_dir: Option<PathBuf>,

    /// Largest accepted request body in bytes
    #[arg(long, env = "MAX_UPLOAD_BYTES", default_value_t = DEFAULT_MAX_UPLOAD_BYTES)]
    pub max_upload_bytes: usize,
}

impl Default for ServiceConfig {
    fn default() -> Self {
        Self {
            host: IpAddr::V4(Ipv4Addr::LOCALHOST),
            port: DEFAULT_PORT,
            tesseract_cmd: PathBuf::from("tesseract"),
            ocr_language: "eng".to_string(),
            ocr_timeout_secs: 30,
            temp_dir: None,
            max_upload_bytes: DEFAULT_MAX_UPLOAD_BYTES,
        }
    }
}

impl ServiceConfig {
    pub fn bind_addr(&self) -> SocketAddr {
        SocketAddr::new(self.host, self.port)
    }

    pub fn ocr_config(&self) -> OcrConfig {
        OcrConfig {
            tesseract_cmd: self.tesseract_cmd.clone(),
            language: self.ocr_language.clone(),
            timeout: Duration::from_secs(self.ocr_timeout_secs),
        }
    }

    pub fn palette_config(&self) -> PaletteConfig {
        PaletteConfig {
            temp_dir: self.temp_dir.clone(),
            ..PaletteConfig::default()
        }
    }
}

// Copyright (c) 2025 Fabstir
// SPDX-License-Identifier: BUSL-1.1
//! Text recognition for logo images
//!
//! Recognition is best-effort: every failure mode collapses into
//! [`Recognition::Unavailable`] so a caller can pick a fallback without
//! matching on engine-specific errors.

pub mod tesseract;

use std::path::PathBuf;
use std::time::Duration;

use async_trait::async_trait;
use image::RgbImage;

pub use tesseract::TesseractRecognizer;

/// Outcome of a recognition attempt
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Recognition {
    /// Full text as produced by the engine (untrimmed)
    Recognized(String),
    /// Engine could not produce text; the reason is for logs only
    Unavailable(String),
}

/// OCR engine settings
#[derive(Debug, Clone)]
pub struct OcrConfig {
    /// Path to the Tesseract binary
    pub tesseract_cmd: PathBuf,
    /// Tesseract language pack
    pub language: String,
    /// Upper bound on a single recognition run
    pub timeout: Duration,
}

impl Default for OcrConfig {
    fn default() -> Self {
        Self {
            tesseract_cmd: PathBuf::from("tesseract"),
            language: "eng".to_string(),
            timeout: Duration::from_secs(30),
        }
    }
}

/// Anything that can turn a bitmap into text
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait TextRecognizer: Send + Sync {
    async fn recognize(&self, image: &RgbImage) -> Recognition;
}

// Copyright (c) 2025 Fabstir
// SPDX-License-Identifier: BUSL-1.1
//! Tesseract CLI recognizer
//!
//! Runs `<tesseract_cmd> stdin stdout -l <language>` with the image piped in
//! as PNG. One child process per request; the child is killed if the
//! timeout elapses.

use std::io::Cursor;
use std::process::Stdio;

use async_trait::async_trait;
use image::{ImageFormat, RgbImage};
use tokio::io::AsyncWriteExt;
use tokio::process::Command;
use tracing::debug;

use super::{OcrConfig, Recognition, TextRecognizer};

pub struct TesseractRecognizer {
    config: OcrConfig,
}

impl TesseractRecognizer {
    pub fn new(config: OcrConfig) -> Self {
        Self { config }
    }

    async fn run(&self, png: Vec<u8>) -> Result<String, String> {
        let mut child = Command::new(&self.config.tesseract_cmd)
            .arg("stdin")
            .arg("stdout")
            .arg("-l")
            .arg(&self.config.language)
            .stdin(Stdio::piped())
            .stdout(Stdio::piped())
            .stderr(Stdio::piped())
            .kill_on_drop(true)
            .spawn()
            .map_err(|e| {
                format!(
                    "failed to start {}: {}",
                    self.config.tesseract_cmd.display(),
                    e
                )
            })?;

        if let Some(mut stdin) = child.stdin.take() {
            // A child that exits without reading stdin surfaces as a broken
            // pipe here; its exit status below carries the real reason.
            if let Err(e) = stdin.write_all(&png).await {
                debug!("tesseract stdin closed early: {}", e);
            }
            // Dropping stdin closes the pipe so tesseract sees EOF
        }

        let output = child
            .wait_with_output()
            .await
            .map_err(|e| format!("failed to wait for tesseract: {}", e))?;

        if !output.status.success() {
            let stderr = String::from_utf8_lossy(&output.stderr);
            return Err(format!(
                "tesseract exited with {}: {}",
                output.status,
                stderr.trim()
            ));
        }

        String::from_utf8(output.stdout)
            .map_err(|e| format!("tesseract output is not UTF-8: {}", e))
    }
}

/// Encode an RGB bitmap as PNG for the engine's stdin
fn encode_png(image: &RgbImage) -> Result<Vec<u8>, String> {
    let mut cursor = Cursor::new(Vec::new());
    image
        .write_to(&mut cursor, ImageFormat::Png)
        .map_err(|e| format!("failed to encode image for OCR: {}", e))?;
    Ok(cursor.into_inner())
}

#[async_trait]
impl TextRecognizer for TesseractRecognizer {
    async fn recognize(&self, image: &RgbImage) -> Recognition {
        let owned = image.clone();
        let png = match tokio::task::spawn_blocking(move || encode_png(&owned)).await {
            Ok(Ok(png)) => png,
            Ok(Err(e)) => return Recognition::Unavailable(e),
            Err(e) => return Recognition::Unavailable(format!("OCR encode task failed: {}", e)),
        };

        debug!(
            "Running tesseract on {}x{} image ({} bytes PNG)",
            image.width(),
            image.height(),
            png.len()
        );

        match tokio::time::timeout(self.config.timeout, self.run(png)).await {
            Ok(Ok(text)) => Recognition::Recognized(text),
            Ok(Err(reason)) => Recognition::Unavailable(reason),
            Err(_) => Recognition::Unavailable(format!(
                "tesseract timed out after {:?}",
                self.config.timeout
            )),
        }
    }
}

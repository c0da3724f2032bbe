// Copyright (c) 2025 Fabstir
// SPDX-License-Identifier: BUSL-1.1
//! Dominant-color palette extraction
//!
//! The bitmap is written to a scoped JPEG file, read back from that path and
//! quantized with `color_thief` (modified median cut). Any failure along the
//! way yields [`PaletteOutcome::Unavailable`]; [`colors_or_default`] turns
//! that into the fixed fallback palette.

pub mod scoped_file;

use std::path::PathBuf;

use color_thief::ColorFormat;
use image::{ImageFormat, RgbImage};
use thiserror::Error;
use tracing::{debug, warn};

pub use scoped_file::ScopedTempImage;

/// Number of colors reported per image
pub const PALETTE_SIZE: usize = 3;

/// Palette reported when extraction fails
pub const DEFAULT_PALETTE: [&str; PALETTE_SIZE] = ["#3B82F6", "#10B981", "#F59E0B"];

#[derive(Debug, Error)]
pub enum PaletteError {
    #[error("Failed to create temporary image file: {0}")]
    TempFile(#[source] std::io::Error),

    #[error("Failed to encode temporary image: {0}")]
    Encode(#[source] image::ImageError),

    #[error("Failed to reopen temporary image: {0}")]
    Reopen(#[source] image::ImageError),

    #[error("Color quantization failed: {0}")]
    Quantize(String),

    #[error("Color quantization produced no colors")]
    Empty,

    #[error("Empty pixels when quantize: every pixel is near-white")]
    NoEligiblePixels,
}

/// Outcome of a palette extraction attempt
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum PaletteOutcome {
    /// Exactly [`PALETTE_SIZE`] lowercase `#rrggbb` strings
    Extracted(Vec<String>),
    /// Extraction failed; the reason is for logs only
    Unavailable(String),
}

/// Palette extraction settings
#[derive(Debug, Clone)]
pub struct PaletteConfig {
    /// Directory for the scratch file (system temp dir when `None`)
    pub temp_dir: Option<PathBuf>,
    /// Intermediate file format
    pub format: ImageFormat,
    /// Colors requested from the quantizer
    pub color_count: u8,
    /// Sampling step handed to `color_thief` (1..=10, lower is finer).
    /// The crate strides `3 * quality` pixels over RGB data, so 1 samples
    /// every third pixel.
    pub quality: u8,
}

impl Default for PaletteConfig {
    fn default() -> Self {
        Self {
            temp_dir: None,
            format: ImageFormat::Jpeg,
            color_count: PALETTE_SIZE as u8,
            quality: 1,
        }
    }
}

/// `#rrggbb`, lowercase
pub fn rgb_to_hex(r: u8, g: u8, b: u8) -> String {
    format!("#{:02x}{:02x}{:02x}", r, g, b)
}

/// Run the full temp-file round trip and quantization
///
/// Blocking: call from `spawn_blocking` inside async code.
pub fn extract_palette(image: &RgbImage, config: &PaletteConfig) -> PaletteOutcome {
    match try_extract(image, config) {
        Ok(colors) => PaletteOutcome::Extracted(colors),
        Err(e) => PaletteOutcome::Unavailable(e.to_string()),
    }
}

fn try_extract(image: &RgbImage, config: &PaletteConfig) -> Result<Vec<String>, PaletteError> {
    let scratch = ScopedTempImage::write(image, config.format, config.temp_dir.as_deref())?;
    debug!("Palette scratch file: {}", scratch.path().display());

    let pixels = image::open(scratch.path())
        .map_err(PaletteError::Reopen)?
        .into_rgb8();

    if !pixels.pixels().any(|p| is_quantizable(p.0)) {
        return Err(PaletteError::NoEligiblePixels);
    }

    let colors = color_thief::get_palette(
        pixels.as_raw(),
        ColorFormat::Rgb,
        config.quality,
        config.color_count,
    )
    .map_err(|e| PaletteError::Quantize(format!("{:?}", e)))?;

    let hex: Vec<String> = colors
        .iter()
        .map(|color| rgb_to_hex(color.r, color.g, color.b))
        .collect();

    if let Err(e) = scratch.close() {
        warn!("Failed to remove palette scratch file: {}", e);
    }

    fit_to_palette_size(hex).ok_or(PaletteError::Empty)
}

/// Same pixel filter the quantizer applies: near-white pixels are skipped
fn is_quantizable([r, g, b]: [u8; 3]) -> bool {
    !(r > 250 && g > 250 && b > 250)
}

/// Truncate or pad (repeating the last color) to [`PALETTE_SIZE`]
fn fit_to_palette_size(mut colors: Vec<String>) -> Option<Vec<String>> {
    let last = colors.last()?.clone();
    colors.truncate(PALETTE_SIZE);
    colors.resize(PALETTE_SIZE, last);
    Some(colors)
}

pub fn default_palette() -> Vec<String> {
    DEFAULT_PALETTE.iter().map(|c| c.to_string()).collect()
}

/// Resolve an extraction outcome to the colors to report
pub fn colors_or_default(outcome: PaletteOutcome) -> Vec<String> {
    match outcome {
        PaletteOutcome::Extracted(colors) if colors.len() == PALETTE_SIZE => colors,
        PaletteOutcome::Extracted(colors) => {
            warn!(
                "Color extraction error: expected {} colors, got {}",
                PALETTE_SIZE,
                colors.len()
            );
            default_palette()
        }
        PaletteOutcome::Unavailable(reason) => {
            warn!("Color extraction error: {}", reason);
            default_palette()
        }
    }
}

/// First palette entry, or the fallback's first entry for an empty palette
pub fn dominant_color(colors: &[String]) -> String {
    colors
        .first()
        .cloned()
        .unwrap_or_else(|| DEFAULT_PALETTE[0].to_string())
}

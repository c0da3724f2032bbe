// Copyright (c) 2025 Fabstir
// SPDX-License-Identifier: BUSL-1.1
//! Vision processing for uploaded logos
//!
//! This module provides:
//! - Upload decoding and RGB normalization
//! - OCR via the Tesseract CLI, reduced to a single brand name
//! - Dominant-color palette extraction
//!
//! The two analysis steps never fail outright: each returns an outcome enum
//! and a matching `*_or_default` function picks the fallback.

pub mod brand;
pub mod image_utils;
pub mod ocr;
pub mod palette;

pub use brand::{brand_name_or_default, first_meaningful_line, DEFAULT_BRAND_NAME};
pub use image_utils::{decode_image_bytes, ImageError, ImageInfo};
pub use ocr::{OcrConfig, Recognition, TesseractRecognizer, TextRecognizer};
pub use palette::{
    colors_or_default, dominant_color, extract_palette, PaletteConfig, PaletteOutcome,
    DEFAULT_PALETTE,
};

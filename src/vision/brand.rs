// Copyright (c) 2025 Fabstir
// SPDX-License-Identifier: BUSL-1.1
//! Brand-name selection from recognized text

use tracing::warn;

use super::ocr::Recognition;

/// Brand name reported when nothing usable was recognized
pub const DEFAULT_BRAND_NAME: &str = "Your Brand";

/// First line with non-whitespace content, trimmed
pub fn first_meaningful_line(text: &str) -> Option<String> {
    text.lines()
        .map(str::trim)
        .find(|line| !line.is_empty())
        .map(str::to_string)
}

/// Resolve a recognition outcome to the brand name to report
pub fn brand_name_or_default(recognition: Recognition) -> String {
    match recognition {
        Recognition::Recognized(text) => {
            first_meaningful_line(&text).unwrap_or_else(|| DEFAULT_BRAND_NAME.to_string())
        }
        Recognition::Unavailable(reason) => {
            warn!("OCR Error: {}", reason);
            DEFAULT_BRAND_NAME.to_string()
        }
    }
}

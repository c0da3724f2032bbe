// Copyright (c) 2025 Fabstir
// SPDX-License-Identifier: BUSL-1.1
// Version information for the logo analyzer

/// Semantic version number
pub const VERSION_NUMBER: &str = env!("CARGO_PKG_VERSION");

/// Build date
pub const BUILD_DATE: &str = "2026-10-14";

/// Supported features in this version
pub const FEATURES: &[&str] = &["ocr-brand-name", "color-palette", "permissive-cors"];

/// Get formatted version string for logging
pub fn get_version_string() -> String {
    format!("Logo Analyzer {} ({})", VERSION_NUMBER, BUILD_DATE)
}

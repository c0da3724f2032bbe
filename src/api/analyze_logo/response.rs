// Copyright (c) 2025 Fabstir
// SPDX-License-Identifier: BUSL-1.1
//! Logo analysis response types

use serde::{Deserialize, Serialize};

use crate::vision::dominant_color;

/// Response from logo analysis
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct AnalyzeLogoResponse {
    /// First meaningful OCR line, or "Your Brand"
    pub brand_name: String,
    /// Three `#rrggbb` colors, most prevalent first
    pub colors: Vec<String>,
    /// Same as `colors[0]`
    pub dominant_color: String,
}

impl AnalyzeLogoResponse {
    pub fn new(brand_name: String, colors: Vec<String>) -> Self {
        let dominant_color = dominant_color(&colors);
        Self {
            brand_name,
            colors,
            dominant_color,
        }
    }
}

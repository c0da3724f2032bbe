// Copyright (c) 2025 Fabstir
// SPDX-License-Identifier: BUSL-1.1
//! Logo analysis endpoint (POST /analyze-logo)

pub mod handler;
pub mod request;
pub mod response;

pub use handler::analyze_logo_handler;
pub use request::{read_image_upload, ImageUpload, IMAGE_FIELD};
pub use response::AnalyzeLogoResponse;

// Copyright (c) 2025 Fabstir
// SPDX-License-Identifier: BUSL-1.1
//! Logo analysis endpoint handler

use axum::{extract::State, Json};
use axum_extra::extract::multipart::{Multipart, MultipartRejection};
use tracing::{debug, error, info, warn};

use super::request::read_image_upload;
use super::response::AnalyzeLogoResponse;
use crate::api::errors::ApiError;
use crate::api::http_server::AppState;
use crate::vision::image_utils::format_to_extension;
use crate::vision::{
    brand_name_or_default, colors_or_default, decode_image_bytes, extract_palette,
    PaletteOutcome,
};

/// POST /analyze-logo - Read a brand name and palette from a logo
///
/// # Request
/// - multipart field `image`: the logo file (any format the `image` crate decodes)
///
/// # Response
/// - `brand_name`: first non-empty OCR line, or "Your Brand"
/// - `colors`: three `#rrggbb` colors, or `#3B82F6, #10B981, #F59E0B`
/// - `dominant_color`: `colors[0]`
///
/// OCR and palette failures are logged and replaced by the fallbacks above;
/// they never change the status code.
///
/// # Errors
/// - 400 Bad Request: no `image` file part, or an empty filename
/// - 500 Internal Server Error: the upload could not be read or decoded
pub async fn analyze_logo_handler(
    State(state): State<AppState>,
    multipart: Result<Multipart, MultipartRejection>,
) -> Result<Json<AnalyzeLogoResponse>, ApiError> {
    // 1. Extract the upload
    let mut multipart = multipart.map_err(|e| {
        warn!("Rejected non-multipart analyze request: {}", e);
        ApiError::NoImageProvided
    })?;

    let upload = read_image_upload(&mut multipart).await.map_err(log_failure)?;

    debug!(
        "Logo upload received: {} ({} bytes, content-type {:?})",
        upload.file_name,
        upload.bytes.len(),
        upload.content_type
    );

    // 2. Decode and normalize to RGB
    let max_bytes = state.config.max_upload_bytes;
    let bytes = upload.bytes;
    let (image, image_info) =
        tokio::task::spawn_blocking(move || decode_image_bytes(&bytes, max_bytes))
            .await
            .map_err(|e| log_failure(ApiError::processing(format!("decode task failed: {}", e))))?
            .map_err(|e| log_failure(ApiError::processing(e.to_string())))?;

    debug!(
        "Decoded image: {}x{} {} ({} bytes), {:?}{}",
        image_info.width,
        image_info.height,
        format_to_extension(image_info.format),
        image_info.size_bytes,
        image_info.source_color,
        if image_info.converted { " (converted to RGB)" } else { "" }
    );

    // 3. Brand name
    let recognition = state.recognizer.recognize(&image).await;
    let brand_name = brand_name_or_default(recognition);

    // 4. Palette
    let palette_config = state.config.palette_config();
    let outcome = tokio::task::spawn_blocking(move || extract_palette(&image, &palette_config))
        .await
        .unwrap_or_else(|e| PaletteOutcome::Unavailable(format!("palette task failed: {}", e)));
    let colors = colors_or_default(outcome);

    let response = AnalyzeLogoResponse::new(brand_name, colors);

    info!(
        "Logo analyzed: brand '{}', colors {:?}",
        response.brand_name, response.colors
    );

    Ok(Json(response))
}

fn log_failure(err: ApiError) -> ApiError {
    match &err {
        ApiError::ProcessingFailed(cause) => error!("Error processing image: {}", cause),
        other => warn!("Invalid analyze request: {}", other),
    }
    err
}

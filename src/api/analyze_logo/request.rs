// Copyright (c) 2025 Fabstir
// SPDX-License-Identifier: BUSL-1.1
//! Multipart upload extraction for logo analysis

use axum::body::Bytes;
use axum_extra::extract::Multipart;
use tracing::debug;

use crate::api::errors::ApiError;

/// Multipart field carrying the logo
pub const IMAGE_FIELD: &str = "image";

/// The uploaded logo file
#[derive(Debug, Clone)]
pub struct ImageUpload {
    /// Client-supplied filename (never empty)
    pub file_name: String,
    /// Declared content type, informational only
    pub content_type: Option<String>,
    /// Raw file bytes
    pub bytes: Bytes,
}

/// Pull the first `image` file part out of a multipart body
///
/// Only parts whose Content-Disposition carries a `filename` count as files;
/// a plain form value named `image` is skipped.
///
/// # Errors
/// - `NoImageProvided`: no `image` file part
/// - `NoFileSelected`: the part's filename is empty
/// - `ProcessingFailed`: the body could not be read
pub async fn read_image_upload(multipart: &mut Multipart) -> Result<ImageUpload, ApiError> {
    while let Some(field) = multipart
        .next_field()
        .await
        .map_err(|e| ApiError::processing(format!("failed to read multipart body: {}", e)))?
    {
        if field.name() != Some(IMAGE_FIELD) {
            continue;
        }

        let Some(file_name) = field.file_name().map(str::to_owned) else {
            debug!("Skipping non-file '{}' form field", IMAGE_FIELD);
            continue;
        };

        if file_name.is_empty() {
            return Err(ApiError::NoFileSelected);
        }

        let content_type = field.content_type().map(str::to_owned);
        let bytes = field
            .bytes()
            .await
            .map_err(|e| ApiError::processing(format!("failed to read upload: {}", e)))?;

        return Ok(ImageUpload {
            file_name,
            content_type,
            bytes,
        });
    }

    Err(ApiError::NoImageProvided)
}

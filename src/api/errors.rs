// Copyright (c) 2025 Fabstir
// SPDX-License-Identifier: BUSL-1.1
use axum::{
    http::StatusCode,
    response::{IntoResponse, Json, Response},
};
use serde::{Deserialize, Serialize};
use thiserror::Error;

/// JSON body of every non-2xx response
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct ErrorResponse {
    pub error: String,
}

#[derive(Debug, Clone, Error)]
pub enum ApiError {
    #[error("No image file provided")]
    NoImageProvided,

    #[error("No file selected")]
    NoFileSelected,

    /// Carries the internal cause for logs; clients only see the generic message
    #[error("Failed to process image: {0}")]
    ProcessingFailed(String),
}

impl ApiError {
    pub fn processing(cause: impl Into<String>) -> Self {
        ApiError::ProcessingFailed(cause.into())
    }

    pub fn public_message(&self) -> &'static str {
        match self {
            ApiError::NoImageProvided => "No image file provided",
            ApiError::NoFileSelected => "No file selected",
            ApiError::ProcessingFailed(_) => "Failed to process image",
        }
    }

    pub fn to_response(&self) -> ErrorResponse {
        ErrorResponse {
            error: self.public_message().to_string(),
        }
    }

    pub fn status_code(&self) -> StatusCode {
        match self {
            ApiError::NoImageProvided | ApiError::NoFileSelected => StatusCode::BAD_REQUEST,
            ApiError::ProcessingFailed(_) => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        (self.status_code(), Json(self.to_response())).into_response()
    }
}

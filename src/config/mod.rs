// Copyright (c) 2025 Fabstir
// SPDX-License-Identifier: BUSL-1.1
pub mod service;

pub use service::{ServiceConfig, DEFAULT_MAX_UPLOAD_BYTES, DEFAULT_PORT};

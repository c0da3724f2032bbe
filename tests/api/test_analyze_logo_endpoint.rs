// Copyright (c) 2025 Fabstir
// SPDX-License-Identifier: BUSL-1.1

//! Endpoint tests for POST /analyze-logo
//!
//! These tests verify that the analyze-logo route:
//! - Reports the first meaningful OCR line as the brand name
//! - Falls back to "Your Brand" when OCR yields nothing or fails
//! - Always returns exactly three colors with dominant_color == colors[0]
//! - Falls back to the fixed palette when extraction fails
//! - Rejects missing files and empty filenames with 400
//! - Reports undecodable uploads as 500
//! - Leaves no temporary files behind

use super::common::*;
use axum::http::StatusCode;
use image::{DynamicImage, GrayImage, ImageFormat, Luma, Rgb, RgbImage, Rgba, RgbaImage};
use logo_analyzer::{
    api::http_server::{create_app, AppState},
    config::ServiceConfig,
    vision::Recognition,
};
use regex::Regex;
use std::path::PathBuf;

const FALLBACK: [&str; 3] = ["#3B82F6", "#10B981", "#F59E0B"];

fn hex_pattern() -> Regex {
    Regex::new(r"^#[0-9a-f]{6}$").unwrap()
}

fn colors_of(body: &serde_json::Value) -> Vec<String> {
    body["colors"]
        .as_array()
        .expect("colors should be an array")
        .iter()
        .map(|c| c.as_str().unwrap().to_string())
        .collect()
}

// =============================================================================
// Brand Name
// =============================================================================

#[tokio::test]
async fn test_no_text_reports_default_brand() {
    let dir = tempfile::tempdir().unwrap();
    let app = app_with(
        Recognition::Recognized(String::new()),
        config_with_temp_dir(dir.path()),
    );

    let (status, body) = send(app, image_request("logo.png", &banded_png())).await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["brand_name"], "Your Brand");
}

#[tokio::test]
async fn test_first_meaningful_line_is_brand() {
    let dir = tempfile::tempdir().unwrap();
    let app = app_with(
        Recognition::Recognized("\n\n   Stark Industries \n  Since 1939\n\x0c".to_string()),
        config_with_temp_dir(dir.path()),
    );

    let (status, body) = send(app, image_request("logo.png", &banded_png())).await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["brand_name"], "Stark Industries");
}

#[tokio::test]
async fn test_ocr_failure_reports_default_brand() {
    let dir = tempfile::tempdir().unwrap();
    let app = app_with(
        Recognition::Unavailable("engine crashed".to_string()),
        config_with_temp_dir(dir.path()),
    );

    let (status, body) = send(app, image_request("logo.png", &banded_png())).await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["brand_name"], "Your Brand");
    assert_eq!(colors_of(&body).len(), 3);
}

#[tokio::test]
async fn test_missing_tesseract_binary_reports_default_brand() {
    let dir = tempfile::tempdir().unwrap();
    let config = ServiceConfig {
        tesseract_cmd: PathBuf::from("/nonexistent/bin/tesseract"),
        temp_dir: Some(dir.path().to_path_buf()),
        ..ServiceConfig::default()
    };
    let app = create_app(AppState::new(config));

    let (status, body) = send(app, image_request("logo.png", &banded_png())).await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["brand_name"], "Your Brand");
}

// =============================================================================
// Palette
// =============================================================================

#[tokio::test]
async fn test_colors_are_three_lowercase_hex() {
    let dir = tempfile::tempdir().unwrap();
    let app = app_with(
        Recognition::Recognized("Acme".to_string()),
        config_with_temp_dir(dir.path()),
    );

    let (status, body) = send(app, image_request("logo.png", &banded_png())).await;
    assert_eq!(status, StatusCode::OK);

    let colors = colors_of(&body);
    assert_eq!(colors.len(), 3);
    let pattern = hex_pattern();
    for color in &colors {
        assert!(pattern.is_match(color), "not a lowercase hex color: {}", color);
    }
    assert_eq!(body["dominant_color"], colors[0].as_str());
}

#[tokio::test]
async fn test_non_rgb_uploads_are_normalized() {
    let dir = tempfile::tempdir().unwrap();
    let gray = encode(
        DynamicImage::ImageLuma8(GrayImage::from_fn(40, 40, |x, _| Luma([(x * 5) as u8]))),
        ImageFormat::Png,
    );
    let rgba = encode(
        DynamicImage::ImageRgba8(RgbaImage::from_pixel(40, 40, Rgba([12, 99, 180, 255]))),
        ImageFormat::Png,
    );
    let gif = encode(
        DynamicImage::ImageRgba8(RgbaImage::from_pixel(20, 20, Rgba([180, 20, 90, 255]))),
        ImageFormat::Gif,
    );

    for (name, bytes) in [("gray.png", gray), ("alpha.png", rgba), ("anim.gif", gif)] {
        let app = app_with(
            Recognition::Recognized(String::new()),
            config_with_temp_dir(dir.path()),
        );
        let (status, body) = send(app, image_request(name, &bytes)).await;

        assert_eq!(status, StatusCode::OK, "{}", name);
        let colors = colors_of(&body);
        assert_eq!(colors.len(), 3, "{}", name);
        assert_eq!(body["dominant_color"], colors[0].as_str(), "{}", name);
    }
}

#[tokio::test]
async fn test_all_white_logo_returns_fallback_palette() {
    let dir = tempfile::tempdir().unwrap();
    let app = app_with(
        Recognition::Recognized(String::new()),
        config_with_temp_dir(dir.path()),
    );
    let white = encode(
        DynamicImage::ImageRgb8(RgbImage::from_pixel(20, 20, Rgb([255, 255, 255]))),
        ImageFormat::Png,
    );

    let (status, body) = send(app, image_request("white.png", &white)).await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(colors_of(&body), FALLBACK);
    assert_eq!(body["dominant_color"], "#3B82F6");
    assert_eq!(dir_entries(dir.path()), 0);
}

#[tokio::test]
async fn test_palette_failure_returns_fallback_palette() {
    // A scratch directory that does not exist makes the intermediate encode step fail
    let config = ServiceConfig {
        temp_dir: Some(PathBuf::from("/nonexistent/logo-analyzer/scratch")),
        ..ServiceConfig::default()
    };
    let app = app_with(Recognition::Recognized("Acme".to_string()), config);

    let (status, body) = send(app, image_request("logo.png", &banded_png())).await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["brand_name"], "Acme");
    assert_eq!(colors_of(&body), FALLBACK);
    assert_eq!(body["dominant_color"], "#3B82F6");
}

#[tokio::test]
async fn test_response_has_exactly_three_fields() {
    let dir = tempfile::tempdir().unwrap();
    let app = app_with(
        Recognition::Recognized("Acme".to_string()),
        config_with_temp_dir(dir.path()),
    );

    let (_, body) = send(app, image_request("logo.png", &banded_png())).await;

    let mut keys: Vec<&str> = body.as_object().unwrap().keys().map(String::as_str).collect();
    keys.sort_unstable();
    assert_eq!(keys, vec!["brand_name", "colors", "dominant_color"]);
}

// =============================================================================
// Request Validation
// =============================================================================

#[tokio::test]
async fn test_missing_image_field() {
    let app = app_with(Recognition::Recognized("x".into()), ServiceConfig::default());
    let png = banded_png();
    let request = analyze_request(&[Part {
        name: "logo",
        file_name: Some("logo.png"),
        bytes: &png,
    }]);

    let (status, body) = send(app, request).await;

    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(body, serde_json::json!({"error": "No image file provided"}));
}

#[tokio::test]
async fn test_image_form_value_without_filename_is_not_a_file() {
    let app = app_with(Recognition::Recognized("x".into()), ServiceConfig::default());
    let request = analyze_request(&[Part {
        name: "image",
        file_name: None,
        bytes: b"just some text",
    }]);

    let (status, body) = send(app, request).await;

    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(body, serde_json::json!({"error": "No image file provided"}));
}

#[tokio::test]
async fn test_empty_filename() {
    let app = app_with(Recognition::Recognized("x".into()), ServiceConfig::default());

    let (status, body) = send(app, image_request("", &banded_png())).await;

    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(body, serde_json::json!({"error": "No file selected"}));
}

#[tokio::test]
async fn test_image_part_found_after_other_fields() {
    let dir = tempfile::tempdir().unwrap();
    let app = app_with(
        Recognition::Recognized("Acme".into()),
        config_with_temp_dir(dir.path()),
    );
    let png = banded_png();
    let request = analyze_request(&[
        Part {
            name: "purpose",
            file_name: None,
            bytes: b"launch",
        },
        Part {
            name: "image",
            file_name: Some("logo.png"),
            bytes: &png,
        },
    ]);

    let (status, body) = send(app, request).await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["brand_name"], "Acme");
}

#[tokio::test]
async fn test_undecodable_bytes() {
    let dir = tempfile::tempdir().unwrap();
    let app = app_with(
        Recognition::Recognized("x".into()),
        config_with_temp_dir(dir.path()),
    );

    let (status, body) = send(
        app,
        image_request("logo.png", b"GIF87a? no, just plain text pretending"),
    )
    .await;

    assert_eq!(status, StatusCode::INTERNAL_SERVER_ERROR);
    assert_eq!(body, serde_json::json!({"error": "Failed to process image"}));
    assert_eq!(dir_entries(dir.path()), 0);
}

#[tokio::test]
async fn test_empty_upload_is_server_error() {
    let app = app_with(Recognition::Recognized("x".into()), ServiceConfig::default());

    let (status, body) = send(app, image_request("logo.png", b"")).await;

    assert_eq!(status, StatusCode::INTERNAL_SERVER_ERROR);
    assert_eq!(body["error"], "Failed to process image");
}

// =============================================================================
// Temporary Files
// =============================================================================

#[tokio::test]
async fn test_no_temp_files_left_after_success() {
    let dir = tempfile::tempdir().unwrap();
    assert_eq!(dir_entries(dir.path()), 0);

    let app = app_with(
        Recognition::Recognized("Acme".into()),
        config_with_temp_dir(dir.path()),
    );
    let (status, _) = send(app, image_request("logo.png", &banded_png())).await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(dir_entries(dir.path()), 0);
}

#[tokio::test]
async fn test_concurrent_requests_are_isolated() {
    let dir = tempfile::tempdir().unwrap();
    let png = banded_png();

    let mut handles = Vec::new();
    for i in 0..8 {
        let app = app_with(
            Recognition::Recognized(format!("Brand {}", i)),
            config_with_temp_dir(dir.path()),
        );
        let request = image_request("logo.png", &png);
        handles.push(tokio::spawn(async move { (i, send(app, request).await) }));
    }

    for handle in handles {
        let (i, (status, body)) = handle.await.unwrap();
        assert_eq!(status, StatusCode::OK);
        assert_eq!(body["brand_name"], format!("Brand {}", i));
        assert_eq!(colors_of(&body).len(), 3);
    }

    assert_eq!(dir_entries(dir.path()), 0);
}

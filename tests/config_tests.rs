//! Tests for the type-safe configuration builder pattern

use pagesnap::config::SnapConfig;
use std::path::PathBuf;
use tempfile::TempDir;

#[tokio::test]
async fn test_builder_requires_output_dir_and_target_url() {
    // This should not compile if uncommented - testing compile-time guarantees
    // let config = SnapConfig::builder().build();

    // This should also not compile - missing target_url
    // let config = SnapConfig::builder()
    //     .output_dir(PathBuf::from("/tmp"))
    //     .build();

    // This SHOULD compile - both required fields provided
    let temp_dir = TempDir::new().unwrap();
    let config = SnapConfig::builder()
        .output_dir(temp_dir.path().to_path_buf())
        .target_url("http://localhost:4200")
        .build()
        .unwrap();

    assert_eq!(config.output_dir(), temp_dir.path());
    assert_eq!(config.target_url(), "http://localhost:4200");
}

#[tokio::test]
async fn test_builder_optional_fields_have_defaults() {
    let temp_dir = TempDir::new().unwrap();
    let config = SnapConfig::builder()
        .output_dir(temp_dir.path().to_path_buf())
        .target_url("http://localhost:4200")
        .build()
        .unwrap();

    // Check defaults
    assert_eq!(config.screenshot_file(), "01_initial.png");
    assert_eq!(config.viewport_width(), 1280);
    assert_eq!(config.viewport_height(), 720);
    assert!(config.headless());
    assert_eq!(config.page_load_timeout_secs(), 30);
    assert_eq!(config.navigation_timeout_secs(), 30);
    assert_eq!(config.idle_wait_secs(), 10);
    assert_eq!(config.text_preview_chars(), 500);
    assert_eq!(config.chrome_data_dir(), None);
}

#[tokio::test]
async fn test_builder_with_all_optional_fields() {
    let temp_dir = TempDir::new().unwrap();

    let config = SnapConfig::builder()
        .output_dir(temp_dir.path().to_path_buf())
        .target_url("http://localhost:8080")
        .screenshot_file("02_after_login.png")
        .viewport(1920, 1080)
        .headless(false)
        .page_load_timeout_secs(10)
        .navigation_timeout_secs(15)
        .idle_wait_secs(5)
        .text_preview_chars(200)
        .build()
        .unwrap();

    assert_eq!(config.screenshot_file(), "02_after_login.png");
    assert_eq!(config.viewport_width(), 1920);
    assert_eq!(config.viewport_height(), 1080);
    assert!(!config.headless());
    assert_eq!(config.page_load_timeout_secs(), 10);
    assert_eq!(config.navigation_timeout_secs(), 15);
    assert_eq!(config.idle_wait_secs(), 5);
    assert_eq!(config.text_preview_chars(), 200);
}

#[tokio::test]
async fn test_builder_field_override() {
    let temp_dir = TempDir::new().unwrap();

    // Test that we can override fields multiple times
    let config = SnapConfig::builder()
        .output_dir(temp_dir.path().to_path_buf())
        .target_url("http://localhost:4200")
        .viewport(800, 600)
        .viewport(1280, 720) // Override previous value
        .headless(false)
        .headless(true) // Override previous value
        .build()
        .unwrap();

    assert_eq!(config.viewport_width(), 1280);
    assert_eq!(config.viewport_height(), 720);
    assert!(config.headless());
}

#[tokio::test]
async fn test_url_normalization_in_builder() {
    let temp_dir = TempDir::new().unwrap();

    // Scheme-less targets get http://, explicit schemes pass through
    let test_cases = vec![
        ("localhost:4200", "http://localhost:4200"),
        ("http://localhost:4200", "http://localhost:4200"),
        ("https://example.com", "https://example.com"),
        ("http://127.0.0.1:8080/path", "http://127.0.0.1:8080/path"),
    ];

    for (input, expected) in test_cases {
        let config = SnapConfig::builder()
            .output_dir(temp_dir.path().to_path_buf())
            .target_url(input)
            .build()
            .unwrap();

        assert_eq!(config.target_url(), expected);
    }
}

#[tokio::test]
async fn test_invalid_target_url_rejected() {
    let temp_dir = TempDir::new().unwrap();

    let result = SnapConfig::builder()
        .output_dir(temp_dir.path().to_path_buf())
        .target_url("http://")
        .build();

    assert!(result.is_err());
}

#[tokio::test]
async fn test_output_path_joins_dir_and_file() {
    let config = SnapConfig::builder()
        .output_dir(PathBuf::from("/tmp/screenshots"))
        .target_url("http://localhost:4200")
        .build()
        .unwrap();

    assert_eq!(
        config.output_path(),
        PathBuf::from("/tmp/screenshots/01_initial.png")
    );

    let config = SnapConfig::builder()
        .output_dir(PathBuf::from("/tmp/screenshots"))
        .target_url("http://localhost:4200")
        .screenshot_file("check.png")
        .build()
        .unwrap();

    assert_eq!(
        config.output_path(),
        PathBuf::from("/tmp/screenshots/check.png")
    );
}

#[tokio::test]
async fn test_default_config_matches_fixed_tool_behavior() {
    let config = SnapConfig::default();

    assert_eq!(config.target_url(), "http://localhost:4200");
    assert_eq!(config.output_dir(), PathBuf::from("/tmp/screenshots"));
    assert_eq!(
        config.output_path(),
        PathBuf::from("/tmp/screenshots/01_initial.png")
    );
    assert!(config.headless());
}

#[tokio::test]
async fn test_config_serialization() {
    let temp_dir = TempDir::new().unwrap();
    let config = SnapConfig::builder()
        .output_dir(temp_dir.path().to_path_buf())
        .target_url("http://localhost:4200")
        .build()
        .unwrap();

    let json = serde_json::to_string(&config).unwrap();
    assert!(json.contains("http://localhost:4200"));

    let deserialized: SnapConfig = serde_json::from_str(&json).unwrap();
    assert_eq!(deserialized.target_url(), config.target_url());
    assert_eq!(deserialized.output_path(), config.output_path());
}

#[tokio::test]
async fn test_config_debug_trait() {
    let temp_dir = TempDir::new().unwrap();
    let config = SnapConfig::builder()
        .output_dir(temp_dir.path().to_path_buf())
        .target_url("http://localhost:4200")
        .build()
        .unwrap();

    let debug_str = format!("{config:?}");
    assert!(debug_str.contains("SnapConfig"));
    assert!(debug_str.contains("output_dir"));
    assert!(debug_str.contains("target_url"));
}

#[tokio::test]
async fn test_builder_state_transitions() {
    // This test verifies the type-state pattern works correctly
    let temp_dir = TempDir::new().unwrap();

    // Create builder in initial state
    let builder = SnapConfig::builder();

    // After setting output_dir, we should be in WithOutputDir state
    let builder_with_dir = builder.output_dir(temp_dir.path().to_path_buf());

    // After setting target_url, we can build
    let _config = builder_with_dir
        .target_url("http://localhost:4200")
        .build()
        .unwrap();
}

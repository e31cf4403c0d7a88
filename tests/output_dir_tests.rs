//! Tests for screenshot output directory handling

use assert_fs::TempDir;
use pagesnap::ensure_output_dir;

#[tokio::test]
async fn creates_output_directory_recursively() {
    let temp = TempDir::new().unwrap();
    let nested = temp.path().join("shots").join("run1");

    ensure_output_dir(&nested).await.unwrap();

    assert!(nested.is_dir());
}

#[tokio::test]
async fn succeeds_when_directory_already_exists() {
    let temp = TempDir::new().unwrap();
    let dir = temp.path().join("shots");

    ensure_output_dir(&dir).await.unwrap();
    ensure_output_dir(&dir).await.unwrap();

    assert!(dir.is_dir());
}

#[tokio::test]
async fn existing_files_in_directory_are_untouched() {
    let temp = TempDir::new().unwrap();
    let dir = temp.path().join("shots");
    ensure_output_dir(&dir).await.unwrap();

    let prior = dir.join("01_initial.png");
    tokio::fs::write(&prior, b"previous run").await.unwrap();

    ensure_output_dir(&dir).await.unwrap();

    let content = tokio::fs::read(&prior).await.unwrap();
    assert_eq!(content, b"previous run");
}

//! Filesystem helpers for screenshot output.

use anyhow::{Context, Result};
use std::path::Path;

/// Ensure the screenshot output directory exists.
///
/// Creates the full path recursively. Succeeds without touching
/// anything when the directory is already present, so repeated runs
/// are safe.
pub async fn ensure_output_dir(dir: &Path) -> Result<()> {
    tokio::fs::create_dir_all(dir)
        .await
        .with_context(|| format!("Failed to create output directory {}", dir.display()))?;
    log::debug!("Output directory ready: {}", dir.display());
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn creates_nested_directories() {
        let temp = tempfile::TempDir::new().unwrap();
        let nested = temp.path().join("a").join("b").join("shots");

        ensure_output_dir(&nested).await.unwrap();
        assert!(nested.is_dir());
    }

    #[tokio::test]
    async fn is_idempotent() {
        let temp = tempfile::TempDir::new().unwrap();
        let dir = temp.path().join("shots");

        ensure_output_dir(&dir).await.unwrap();
        ensure_output_dir(&dir).await.unwrap();
        assert!(dir.is_dir());
    }
}

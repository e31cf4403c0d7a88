//! Full-page screenshot capture.

use anyhow::{Context, Result};
use chromiumoxide::Page;
use chromiumoxide::cdp::browser_protocol::page::{
    CaptureScreenshotFormat, CaptureScreenshotParams,
};
use std::path::Path;

/// Capture a full-page PNG screenshot to `output_path`.
///
/// `capture_beyond_viewport` makes Chrome render the entire scrollable
/// document, not just the visible viewport. Any existing file at
/// `output_path` is overwritten.
pub async fn capture_screenshot(page: &Page, output_path: &Path) -> Result<()> {
    let params = CaptureScreenshotParams {
        format: Some(CaptureScreenshotFormat::Png),
        capture_beyond_viewport: Some(true),
        ..Default::default()
    };

    let screenshot_data = page
        .screenshot(params)
        .await
        .map_err(|e| anyhow::anyhow!("Failed to capture screenshot: {e}"))?;

    tokio::fs::write(output_path, &screenshot_data)
        .await
        .with_context(|| format!("Failed to write screenshot to {}", output_path.display()))?;

    log::info!(
        "Screenshot saved: {} ({} bytes)",
        output_path.display(),
        screenshot_data.len()
    );
    Ok(())
}

//! The sequential capture pipeline.
//!
//! One run: output directory, browser launch, page, navigation, idle
//! wait, screenshot, diagnostics, teardown. Every step blocks until
//! complete before the next starts.

use anyhow::anyhow;
use chromiumoxide::Browser;
use log::{info, warn};

use super::cleanup::{CleanupOutcome, cleanup_browser};
use super::page_timeout::with_page_timeout;
use super::snap_types::{SnapError, SnapReport, SnapResult};
use crate::browser_setup::launch_browser;
use crate::config::SnapConfig;
use crate::page_capture::{
    apply_viewport, capture_screenshot, diagnostics, wait_for_network_idle,
};
use crate::utils::ensure_output_dir;

/// Run one snapshot: capture a full-page screenshot of the configured
/// target and report what the page looked like.
///
/// The browser session is torn down exactly once, whether the capture
/// succeeds or fails. The screenshot file is only written after
/// navigation succeeds, so an unreachable target leaves no file
/// behind.
pub async fn run_snapshot(config: &SnapConfig) -> SnapResult<SnapReport> {
    ensure_output_dir(config.output_dir())
        .await
        .map_err(|e| SnapError::Config(format!("{e:#}")))?;

    let (browser, handler_task, user_data_dir) = launch_browser(config)
        .await
        .map_err(|e| SnapError::Browser(format!("{e:#}")))?;

    info!("Browser launched");

    let result = capture(&browser, config).await;

    // Teardown runs on both paths; the session closes exactly once.
    handler_task.abort();
    if let Err(e) = handler_task.await
        && !e.is_cancelled()
    {
        warn!("Handler task failed during abort: {e}");
    }

    match cleanup_browser(browser, user_data_dir).await {
        Ok(CleanupOutcome::Success) => {
            info!("Browser session closed");
        }
        Ok(CleanupOutcome::PartialFailure(errors)) => {
            warn!("Cleanup completed with failures: {errors:?}");
        }
        Err(e) => {
            warn!("Cleanup failed: {e}");
        }
    }

    result
}

/// Navigate, wait, screenshot, and extract diagnostics on a launched
/// browser. Split out so the caller can tear the session down no
/// matter where this fails.
async fn capture(browser: &Browser, config: &SnapConfig) -> SnapResult<SnapReport> {
    let page = browser
        .new_page("about:blank")
        .await
        .map_err(|e| SnapError::Browser(format!("Failed to create page: {e}")))?;

    apply_viewport(&page, config.viewport_width(), config.viewport_height())
        .await
        .map_err(|e| SnapError::Browser(format!("{e:#}")))?;

    info!("Navigating to {}", config.target_url());
    with_page_timeout(
        async {
            page.goto(config.target_url())
                .await
                .map(|_| ())
                .map_err(|e| anyhow!("{e}"))
        },
        config.page_load_timeout_secs(),
        "Page navigation",
    )
    .await
    .map_err(|e| SnapError::Navigation(format!("{e:#}")))?;

    with_page_timeout(
        async {
            page.wait_for_navigation()
                .await
                .map(|_| ())
                .map_err(|e| anyhow!("{e}"))
        },
        config.navigation_timeout_secs(),
        "Page load",
    )
    .await
    .map_err(|e| SnapError::Navigation(format!("{e:#}")))?;

    wait_for_network_idle(&page, config.idle_wait_secs())
        .await
        .map_err(SnapError::from)?;

    let output_path = config.output_path();
    capture_screenshot(&page, &output_path)
        .await
        .map_err(|e| SnapError::Capture(format!("{e:#}")))?;

    let final_url = diagnostics::final_url(&page, config.target_url()).await;
    let content = diagnostics::page_content(&page)
        .await
        .map_err(|e| SnapError::Capture(format!("{e:#}")))?;
    let body = diagnostics::body_text(&page)
        .await
        .map_err(|e| SnapError::Capture(format!("{e:#}")))?;

    Ok(SnapReport::new(
        final_url,
        &content,
        &body,
        config.text_preview_chars(),
        output_path,
    ))
}

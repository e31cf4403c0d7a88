//! Browser and resource cleanup functionality
//!
//! This module tears down the browser session after a capture,
//! successful or not.

use anyhow::Result;
use chromiumoxide::Browser;
use log::{debug, warn};
use std::path::PathBuf;

/// Result of cleanup operations
#[derive(Debug, Clone)]
pub enum CleanupOutcome {
    /// All cleanup operations succeeded
    Success,
    /// Some cleanup operations failed, with error details
    PartialFailure(Vec<String>),
}

/// Close the browser and remove its user data directory.
///
/// Failures here are collected rather than propagated: teardown must
/// not mask the capture result, and a half-dead browser process still
/// needs the remaining steps attempted.
pub async fn cleanup_browser(
    mut browser: Browser,
    user_data_dir: PathBuf,
) -> Result<CleanupOutcome> {
    let mut errors = Vec::new();

    debug!(target: "pagesnap::cleanup", "Closing browser");
    if let Err(e) = browser.close().await {
        warn!(target: "pagesnap::cleanup", "Failed to close browser: {e}");
        errors.push(format!("Browser close failed: {e}"));
    } else {
        debug!(target: "pagesnap::cleanup", "Browser closed");
    }

    // Wait for the process to fully exit (prevents "not closed manually" warning)
    debug!(target: "pagesnap::cleanup", "Waiting for browser process to exit");
    if let Err(e) = browser.wait().await {
        warn!(target: "pagesnap::cleanup", "Failed to wait for browser exit: {e}");
        errors.push(format!("Browser wait failed: {e}"));
    } else {
        debug!(target: "pagesnap::cleanup", "Browser process exited");
    }

    debug!(target: "pagesnap::cleanup", "Removing user data directory");
    if let Err(e) = std::fs::remove_dir_all(&user_data_dir) {
        warn!(target: "pagesnap::cleanup", "Failed to remove user data directory: {e}");
        errors.push(format!("Directory cleanup failed: {e}"));
    }

    if errors.is_empty() {
        Ok(CleanupOutcome::Success)
    } else {
        Ok(CleanupOutcome::PartialFailure(errors))
    }
}

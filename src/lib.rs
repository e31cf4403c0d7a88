pub mod browser_setup;
pub mod config;
pub mod page_capture;
pub mod snap_engine;
pub mod utils;

pub use browser_setup::{download_managed_browser, find_browser_executable, launch_browser};
pub use config::SnapConfig;
pub use page_capture::{apply_viewport, capture_screenshot, excerpt, wait_for_network_idle};
pub use snap_engine::{SnapError, SnapReport, SnapResult, run_snapshot};
pub use utils::ensure_output_dir;

/// Capture one snapshot of the configured target.
///
/// Launches a headless browser, loads the page, waits for network
/// idle, writes a full-page screenshot, and returns the diagnostic
/// report. The browser session is closed before this returns,
/// successful or not.
pub async fn snapshot(config: SnapConfig) -> Result<SnapReport, SnapError> {
    run_snapshot(&config).await
}

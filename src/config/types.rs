//! Core configuration type for snapshot capture
//!
//! This module contains the main `SnapConfig` struct describing one
//! capture run: where the screenshot lands, which address to visit,
//! and the timing knobs around page load.

use serde::{Deserialize, Serialize};
use std::path::PathBuf;

use crate::utils::constants::{
    BODY_TEXT_PREVIEW_CHARS, DEFAULT_IDLE_WAIT_SECS, DEFAULT_NAVIGATION_TIMEOUT_SECS,
    DEFAULT_OUTPUT_DIR, DEFAULT_PAGE_LOAD_TIMEOUT_SECS, DEFAULT_SCREENSHOT_FILE,
    DEFAULT_TARGET_URL, VIEWPORT_HEIGHT, VIEWPORT_WIDTH,
};

/// Configuration for a single snapshot run
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SnapConfig {
    /// Directory the screenshot is written into.
    ///
    /// Created recursively before capture if missing.
    pub(crate) output_dir: PathBuf,

    /// Address the page navigates to.
    ///
    /// **INVARIANT:** Always carries an explicit scheme (normalized in
    /// the builder) and has been validated as a parseable URL.
    pub(crate) target_url: String,

    /// File name of the screenshot within `output_dir`.
    ///
    /// An existing file at that path is overwritten on each run.
    pub(crate) screenshot_file: String,

    pub(crate) viewport_width: u32,
    pub(crate) viewport_height: u32,
    pub(crate) headless: bool,

    /// Timeout in seconds for `page.goto()` operations
    ///
    /// Prevents hangs on slow DNS, unresponsive servers, or streaming
    /// content. Default: 30 seconds.
    pub(crate) page_load_timeout_secs: Option<u64>,

    /// Timeout in seconds for `page.wait_for_navigation()` operations
    ///
    /// Prevents hangs on pages with long-polling, streaming, or
    /// infinite JS loops. Default: 30 seconds.
    pub(crate) navigation_timeout_secs: Option<u64>,

    /// Budget in seconds for the network-idle polling loop
    ///
    /// When exhausted, capture proceeds with whatever has rendered.
    /// Default: 10 seconds.
    pub(crate) idle_wait_secs: Option<u64>,

    /// Maximum characters of body text echoed in the diagnostics
    pub(crate) text_preview_chars: usize,

    /// Chrome user data directory for browser profile isolation.
    /// When None, a temp directory keyed by process ID is used.
    #[serde(skip)]
    pub(crate) chrome_data_dir: Option<PathBuf>,
}

impl Default for SnapConfig {
    fn default() -> Self {
        Self {
            output_dir: PathBuf::from(DEFAULT_OUTPUT_DIR),
            target_url: DEFAULT_TARGET_URL.to_string(),
            screenshot_file: DEFAULT_SCREENSHOT_FILE.to_string(),
            viewport_width: VIEWPORT_WIDTH,
            viewport_height: VIEWPORT_HEIGHT,
            headless: true,
            page_load_timeout_secs: Some(DEFAULT_PAGE_LOAD_TIMEOUT_SECS),
            navigation_timeout_secs: Some(DEFAULT_NAVIGATION_TIMEOUT_SECS),
            idle_wait_secs: Some(DEFAULT_IDLE_WAIT_SECS),
            text_preview_chars: BODY_TEXT_PREVIEW_CHARS,
            chrome_data_dir: None,
        }
    }
}

impl SnapConfig {
    /// Set the Chrome user data directory for profile isolation
    ///
    /// When set, the browser uses this specific directory for its user
    /// data instead of a per-process temp directory.
    #[must_use]
    pub fn with_chrome_data_dir(mut self, dir: PathBuf) -> Self {
        self.chrome_data_dir = Some(dir);
        self
    }
}
